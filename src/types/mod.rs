pub mod events;
pub mod sample;

pub use events::{ConnectionStatus, StreamFrame, TapEvent};
pub use sample::Sample;
