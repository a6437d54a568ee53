pub mod design;
pub mod story;
