mod error;
mod route;
pub mod telemetry;

pub use route::{create_player_route, SharedStore};
