pub mod player;

pub use player::ImpactPlayer;
