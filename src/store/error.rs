use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("problem parsing league from {name}: {source}")]
    CorruptStore {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{name} already has the maximum number of wins")]
    WinLimitReached { name: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
