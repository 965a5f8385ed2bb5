pub mod history;
pub mod impact;
pub mod orientation;
pub mod visuals;

pub use history::HistoryBuffer;
pub use impact::{Clock, ImpactDetector, SystemClock};
pub use orientation::OrientationFilter;
