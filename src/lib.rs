pub mod cli;
pub mod config;
pub mod model;
pub mod store;

#[cfg(feature = "server")]
pub mod server;

pub mod prelude {
    pub use crate::cli::{Cli, CliError};
    pub use crate::config::{Config, ConfigError};
    pub use crate::model::League;
    pub use crate::model::Player;
    pub use crate::store::Database;
    pub use crate::store::FileSystemPlayerStore;
    pub use crate::store::MemoryStorage;
    pub use crate::store::PlayerStore;
    pub use crate::store::StoreError;
}
