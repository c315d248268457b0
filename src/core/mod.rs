//! Core types shared across commands.

mod route;
mod state;

pub use route::RequestPath;
pub use state::{is_shutdown, register_server, setup_shutdown_handler};
