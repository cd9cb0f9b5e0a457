pub mod frequency;
pub mod projects;
