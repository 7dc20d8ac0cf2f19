use super::{PlayerStore, StoreError};
use crate::model::{League, Player};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::{debug, instrument};

/// Keeps wins in a map for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    scores: Mutex<HashMap<String, u32>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlayerStore for MemoryStorage {
    #[instrument(skip(self))]
    async fn get_player_score(&self, name: &str) -> Result<u32, StoreError> {
        let scores = self.scores.lock().await;
        Ok(scores.get(name).copied().unwrap_or_default())
    }

    #[instrument(skip(self))]
    async fn record_win(&self, name: &str) -> Result<(), StoreError> {
        let mut scores = self.scores.lock().await;
        let wins = scores.entry(name.to_string()).or_insert(0);
        *wins = wins
            .checked_add(1)
            .ok_or_else(|| StoreError::WinLimitReached {
                name: name.to_string(),
            })?;
        debug!(wins = *wins, "Win recorded");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_league(&self) -> Result<League, StoreError> {
        let scores = self.scores.lock().await;
        let league: League = scores
            .iter()
            .map(|(name, &wins)| Player::new(name.clone(), wins))
            .collect();
        debug!(player_count = league.len(), "League built");
        Ok(league.sorted())
    }
}
