use crate::shared::components::card_animated::{stagger_delay_ms, CardAnimated};
use crate::shared::icons::icon;
use contracts::domain::a001_project::Project;
use leptos::prelude::*;
use thaw::*;

/// Карточка проекта: картинка, описание, теги и ссылка на демо
#[component]
pub fn ProjectCard(
    project: &'static Project,
    /// Порядковый номер карточки на странице (для stagger-анимации)
    #[prop(optional)]
    position: usize,
) -> impl IntoView {
    view! {
        <CardAnimated
            delay_ms=stagger_delay_ms(position)
            style="height: 100%; display: flex; flex-direction: column; overflow: hidden;"
        >
            <div class="project-card__image">
                <img src=project.image_or_placeholder() alt=project.title loading="lazy" />
            </div>
            <div class="project-card__header">
                <h3 class="project-card__title">{project.title}</h3>
                <p class="project-card__description">{project.description}</p>
            </div>
            <div class="project-card__tags">
                {project
                    .tags
                    .iter()
                    .map(|tag| view! {
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                            {*tag}
                        </Badge>
                    })
                    .collect_view()}
            </div>
            <div class="project-card__footer">
                {project.live_url.map(|url| view! {
                    <a
                        class="project-card__live"
                        href=url
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {icon("external-link")}
                        <span>"Live Demo"</span>
                    </a>
                })}
            </div>
        </CardAnimated>
    }
}
