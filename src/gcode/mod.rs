pub mod errors;
mod file;
pub mod modes;
mod motion;
mod sanitize;
mod types;

pub use self::file::NormalizedStream;
pub use self::modes::{scan_distance_mode, scan_units, DistanceMode, Units};
pub use self::motion::MotionCommand;
pub use self::sanitize::sanitize;
