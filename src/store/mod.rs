mod error;
mod file_system_storage;
mod memory_storage;
mod player_store;

pub use error::StoreError;
pub use file_system_storage::{Database, FileSystemPlayerStore};
pub use memory_storage::MemoryStorage;
pub use player_store::PlayerStore;
