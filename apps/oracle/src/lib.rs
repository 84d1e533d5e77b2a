//! Crate root: module tree for the HTTP oracle binary.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub mod prelude {
    pub use crate::config::Config;
    pub use crate::state::AppState;
}
