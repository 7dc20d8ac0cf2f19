use crate::store::{PlayerStore, StoreError};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

const WINS_SUFFIX: &str = " wins";

#[derive(Error, Debug)]
pub enum CliError {
    #[error("unrecognised command {0:?}, expected \"<name> wins\"")]
    UnrecognisedCommand(String),

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Extracts the winner from a `"<name> wins"` line.
pub fn parse_winner(line: &str) -> Result<String, CliError> {
    let line = line.trim();
    match line.strip_suffix(WINS_SUFFIX).map(str::trim) {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        _ => Err(CliError::UnrecognisedCommand(line.to_string())),
    }
}

/// Records winners typed one per line into a player store.
pub struct Cli<S, R> {
    store: S,
    input: R,
}

impl<S, R> Cli<S, R>
where
    S: PlayerStore,
    R: AsyncBufRead + Unpin,
{
    pub fn new(store: S, input: R) -> Self {
        Cli { store, input }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Reads a single line and records its winner. Returns `None` at end of input.
    pub async fn play_poker(&mut self) -> Result<Option<String>, CliError> {
        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }

        let winner = parse_winner(&line)?;
        self.store.record_win(&winner).await?;
        log::info!("Recorded win for {}", winner);
        Ok(Some(winner))
    }

    /// Records every winner until end of input and returns how many were
    /// recorded. Lines that are not commands are skipped.
    pub async fn run(&mut self) -> Result<usize, CliError> {
        let mut recorded = 0;
        loop {
            match self.play_poker().await {
                Ok(Some(_)) => recorded += 1,
                Ok(None) => return Ok(recorded),
                Err(CliError::UnrecognisedCommand(line)) => {
                    log::warn!("Skipping unrecognised command {:?}", line);
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStorage;

    #[test]
    fn test_parse_winner() {
        assert_eq!(parse_winner("Chris wins\n").unwrap(), "Chris");
        assert_eq!(parse_winner("  Cleo wins  ").unwrap(), "Cleo");
        assert_eq!(parse_winner("Mary Ann wins").unwrap(), "Mary Ann");
    }

    #[test]
    fn test_parse_winner_rejects_other_input() {
        for line in ["Chris", "wins", " wins\n", "Chris won", ""] {
            assert!(
                matches!(parse_winner(line), Err(CliError::UnrecognisedCommand(_))),
                "{line:?} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn test_record_chris_win_from_user_input() {
        let mut cli = Cli::new(MemoryStorage::new(), "Chris wins\n".as_bytes());
        assert_eq!(cli.play_poker().await.unwrap(), Some("Chris".to_string()));
        assert_eq!(cli.store().get_player_score("Chris").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_record_cleo_win_from_user_input() {
        let mut cli = Cli::new(MemoryStorage::new(), "Cleo wins\n".as_bytes());
        assert_eq!(cli.play_poker().await.unwrap(), Some("Cleo".to_string()));
        assert_eq!(cli.store().get_player_score("Cleo").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_end_of_input() {
        let mut cli = Cli::new(MemoryStorage::new(), "".as_bytes());
        assert_eq!(cli.play_poker().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_run_skips_bad_lines() {
        let input = "Chris wins\nhello\nCleo wins\nChris wins\n";
        let mut cli = Cli::new(MemoryStorage::new(), input.as_bytes());

        assert_eq!(cli.run().await.unwrap(), 3);
        let store = cli.store();
        assert_eq!(store.get_player_score("Chris").await.unwrap(), 2);
        assert_eq!(store.get_player_score("Cleo").await.unwrap(), 1);
        assert_eq!(store.get_player_score("hello").await.unwrap(), 0);
    }
}
