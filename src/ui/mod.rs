pub mod courses;
pub mod panels;
