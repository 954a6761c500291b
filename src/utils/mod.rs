pub mod motion;
pub mod projects;
