mod league;
mod player;

pub use league::League;
pub use player::Player;
