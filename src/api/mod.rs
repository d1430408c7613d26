pub mod handler;
pub mod helpers;

pub use handler::{handle_request, handler};
