pub mod hpgl;
mod traits;

pub use self::hpgl::Hpgl;
pub use self::traits::{PlotterPoint, Render};
