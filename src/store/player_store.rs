use super::error::StoreError;
use crate::model::League;
use async_trait::async_trait;

/// Score lookup, win recording and league retrieval.
///
/// Implementations serialize their own operations, so a single instance can
/// be shared between concurrent request handlers.
#[async_trait]
pub trait PlayerStore: Send + Sync {
    /// Current wins for `name`, or `0` for a player that has never won.
    async fn get_player_score(&self, name: &str) -> Result<u32, StoreError>;
    async fn record_win(&self, name: &str) -> Result<(), StoreError>;
    /// All players, highest wins first.
    async fn get_league(&self) -> Result<League, StoreError>;
}
