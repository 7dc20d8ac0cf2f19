use crate::model::Player;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Read;

/// The ranked table of all known players.
///
/// A `League` handed out by a store is always ordered by wins, highest
/// first. Players with equal wins keep their relative order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Option<Vec<Player>>")]
pub struct League(Vec<Player>);

impl League {
    pub fn new(players: Vec<Player>) -> Self {
        League(players)
    }

    /// Decodes a league from a JSON reader. `null` decodes to an empty league;
    /// a name listed twice is rejected.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }

    pub fn find(&self, name: &str) -> Option<&Player> {
        self.0.iter().find(|player| player.name == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.0.iter_mut().find(|player| player.name == name)
    }

    /// Adds one win for `name`, inserting the player with a single win if
    /// they are not in the league yet, then restores the ordering.
    ///
    /// Returns the new win count, or `None` without changing anything when
    /// the count is already at `u32::MAX`.
    pub fn record_win(&mut self, name: &str) -> Option<u32> {
        let wins = match self.find_mut(name) {
            Some(player) => {
                player.wins = player.wins.checked_add(1)?;
                player.wins
            }
            None => {
                self.0.push(Player::new(name, 1));
                1
            }
        };
        self.sort();
        Some(wins)
    }

    pub fn sort(&mut self) {
        self.0.sort_by(|a, b| b.wins.cmp(&a.wins));
    }

    pub fn sorted(mut self) -> Self {
        self.sort();
        self
    }

    pub fn players(&self) -> &[Player] {
        &self.0
    }

    pub fn into_players(self) -> Vec<Player> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Option<Vec<Player>>> for League {
    type Error = String;

    fn try_from(players: Option<Vec<Player>>) -> Result<Self, Self::Error> {
        let players = players.unwrap_or_default();
        let mut seen = HashSet::new();
        for player in &players {
            if !seen.insert(player.name.as_str()) {
                return Err(format!("player {:?} is listed more than once", player.name));
            }
        }
        Ok(League(players))
    }
}

impl From<Vec<Player>> for League {
    fn from(players: Vec<Player>) -> Self {
        League(players)
    }
}

impl FromIterator<Player> for League {
    fn from_iter<I: IntoIterator<Item = Player>>(iter: I) -> Self {
        League(iter.into_iter().collect())
    }
}
