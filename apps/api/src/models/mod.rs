pub mod message;
pub mod section;
