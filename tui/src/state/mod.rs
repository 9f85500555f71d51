mod player;

pub use player::{Action, Player};
