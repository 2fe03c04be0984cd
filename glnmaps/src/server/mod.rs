//! Preview server implementation

mod handlers;
mod map_server;
mod routes;

pub use map_server::*;
pub use routes::build_router;
