//! Rendering traits

use derive_more::Display;
use std::io;

/// Integer plotter coordinates in steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display(fmt = "{},{}", _0, _1)]
pub struct PlotterPoint(pub i64, pub i64);

pub trait Render {
    /// Travel to `point` without drawing
    fn move_to(&mut self, point: PlotterPoint) -> io::Result<()>;
    /// Draw a straight line to `point`
    fn line_to(&mut self, point: PlotterPoint) -> io::Result<()>;
}
