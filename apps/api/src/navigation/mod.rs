// Section navigation: the view controller and its HTTP surface.

pub mod controller;
pub mod handlers;

pub use controller::{PageTransition, ViewController, ViewSnapshot};
