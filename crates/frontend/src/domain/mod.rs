pub mod a001_project;
