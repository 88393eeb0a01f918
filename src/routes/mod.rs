pub mod hello;
pub mod location;
