mod handler;

pub use handler::hello;
