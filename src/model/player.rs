use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A named player and the number of games they have won.
///
/// Serialized as `{"Name": ..., "Wins": ...}`. Field names are matched
/// case-insensitively when decoding, so `name`/`wins` are accepted as well.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Player {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Wins")]
    pub wins: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, wins: u32) -> Self {
        Player {
            name: name.into(),
            wins,
        }
    }
}

impl TryFrom<Map<String, Value>> for Player {
    type Error = String;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let mut player = Player::new(String::new(), 0);

        // Missing fields keep their zero value.
        for (key, value) in fields {
            match key.to_ascii_lowercase().as_str() {
                "name" => {
                    player.name = value
                        .as_str()
                        .ok_or_else(|| format!("player name must be a string, got {value}"))?
                        .to_string();
                }
                "wins" => {
                    player.wins = value
                        .as_u64()
                        .and_then(|wins| u32::try_from(wins).ok())
                        .ok_or_else(|| {
                            format!("player wins must be a non-negative integer, got {value}")
                        })?;
                }
                _ => {}
            }
        }

        Ok(player)
    }
}
