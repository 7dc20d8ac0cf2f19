use super::{PlayerStore, StoreError};
use crate::model::League;
use async_trait::async_trait;
use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, Cursor, Read, Seek, SeekFrom, Write};
use std::path::Path;
use tokio::sync::Mutex;
use tracing::{debug, error, info, instrument};

/// A seekable byte stream holding the whole league as JSON.
pub trait Database: Read + Write + Seek + Send {
    /// Drops all content. The stream position is left unchanged.
    fn truncate(&mut self) -> io::Result<()>;
}

impl Database for File {
    fn truncate(&mut self) -> io::Result<()> {
        self.set_len(0)
    }
}

impl Database for Cursor<Vec<u8>> {
    fn truncate(&mut self) -> io::Result<()> {
        self.get_mut().clear();
        Ok(())
    }
}

struct State<D> {
    database: D,
    league: League,
}

/// Player store persisted as a JSON array in a single stream.
///
/// Every win rewrites the whole stream. Reads of the league go back to the
/// stream so changes made to the file between calls are picked up. All
/// operations on one instance run one at a time.
///
/// Stream I/O is blocking and runs on the calling task while the store lock
/// is held, so a slow disk stalls that runtime worker for the duration of
/// one read or rewrite.
pub struct FileSystemPlayerStore<D: Database> {
    name: String,
    state: Mutex<State<D>>,
}

impl FileSystemPlayerStore<File> {
    /// Opens or creates the database file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?;
        info!(path = %path.display(), "Opened league database");
        Self::new(file, path.display().to_string())
    }
}

impl<D: Database> FileSystemPlayerStore<D> {
    /// Wraps `database`, writing an empty league into it first if it has no
    /// content. `name` identifies the stream in error messages.
    pub fn new(mut database: D, name: impl Into<String>) -> Result<Self, StoreError> {
        let name = name.into();
        initialise_database(&mut database)?;
        let league = read_league(&mut database, &name)?;
        debug!(%name, player_count = league.len(), "League loaded");
        Ok(Self {
            name,
            state: Mutex::new(State { database, league }),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn into_inner(self) -> D {
        self.state.into_inner().database
    }
}

#[async_trait]
impl<D: Database> PlayerStore for FileSystemPlayerStore<D> {
    #[instrument(skip(self))]
    async fn get_player_score(&self, name: &str) -> Result<u32, StoreError> {
        let state = self.state.lock().await;
        Ok(state
            .league
            .find(name)
            .map(|player| player.wins)
            .unwrap_or_default())
    }

    #[instrument(skip(self))]
    async fn record_win(&self, name: &str) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        let mut league = state.league.clone();
        let wins = league
            .record_win(name)
            .ok_or_else(|| StoreError::WinLimitReached {
                name: name.to_string(),
            })?;

        // The cache only moves forward once the stream holds the new league.
        if let Err(e) = write_league(&mut state.database, &league) {
            error!(?e, store = %self.name, "Failed to persist league");
            return Err(e);
        }
        debug!(wins, player_count = league.len(), "League persisted");
        state.league = league;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_league(&self) -> Result<League, StoreError> {
        let mut state = self.state.lock().await;
        let league = read_league(&mut state.database, &self.name)?;
        state.league = league.clone();
        Ok(league)
    }
}

fn initialise_database<D: Database>(database: &mut D) -> Result<(), StoreError> {
    let len = database.seek(SeekFrom::End(0))?;
    if len == 0 {
        database.write_all(b"[]")?;
        database.flush()?;
    }
    database.seek(SeekFrom::Start(0))?;
    Ok(())
}

fn read_league<D: Database>(database: &mut D, name: &str) -> Result<League, StoreError> {
    database.seek(SeekFrom::Start(0))?;
    let league = League::from_reader(BufReader::new(&mut *database)).map_err(|source| {
        if source.is_io() {
            StoreError::Io(source.into())
        } else {
            StoreError::CorruptStore {
                name: name.to_string(),
                source,
            }
        }
    })?;
    Ok(league.sorted())
}

fn write_league<D: Database>(database: &mut D, league: &League) -> Result<(), StoreError> {
    database.seek(SeekFrom::Start(0))?;
    database.truncate()?;
    serde_json::to_writer(&mut *database, league).map_err(|e| {
        if e.is_io() {
            StoreError::Io(e.into())
        } else {
            StoreError::Serialization(e)
        }
    })?;
    database.flush()?;
    Ok(())
}
