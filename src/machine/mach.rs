//! The plotter driver

use crate::{
    gcode::{DistanceMode, MotionCommand, Units},
    render::{PlotterPoint, Render},
};
use std::io;

/// Settings resolved from the program before translation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MachineContext {
    pub units: Units,
    /// Detected and reported, but coordinates are always taken as given
    pub distance_mode: DistanceMode,
}

impl MachineContext {
    /// Source units to plotter steps, rounded half away from zero
    pub fn to_steps(&self, value: f64) -> i64 {
        (value * self.units.scale()).round() as i64
    }

    fn point(&self, x: f64, y: f64) -> PlotterPoint {
        PlotterPoint(self.to_steps(x), self.to_steps(y))
    }
}

/// Drives a render from classified motion lines
#[derive(Debug)]
pub struct Machine<R: Render> {
    ctx: MachineContext,
    render: R,
}

impl<R: Render> Machine<R> {
    pub fn with_render(ctx: MachineContext, render: R) -> Self {
        if ctx.distance_mode == DistanceMode::Incremental {
            log::warn!("Incremental coordinates are plotted as absolute ones");
        }
        Self { ctx, render }
    }

    pub fn execute_command(&mut self, cmd: MotionCommand) -> io::Result<()> {
        match cmd {
            MotionCommand::RapidMove(x, y) => self.render.move_to(self.ctx.point(x, y)),
            MotionCommand::LinearMove(x, y) => self.render.line_to(self.ctx.point(x, y)),
            MotionCommand::SkipZAxis | MotionCommand::Unrecognized => Ok(()),
        }
    }

    pub fn finalize(self) -> R {
        self.render
    }
}
