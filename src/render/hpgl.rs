//! HPGL render

use super::traits::{PlotterPoint, Render};
use derive_more::Display;
use std::io::{self, Write};

/// Plotter setup for the Roland DXY-980 family
pub const PROLOGUE: &str = ".@;1:IN;\nSP;\nVS5;\nSP1;\n";

/// Plotter shutdown for the Roland DXY-980 family
pub const EPILOGUE: &str = "SP0;\nSP;\nIN;\n";

/// A single HPGL pen command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum PlotterCommand {
    #[display(fmt = "PU {};", _0)]
    PenUp(PlotterPoint),
    #[display(fmt = "PD {};", _0)]
    PenDown(PlotterPoint),
}

/// HPGL writer
///
/// Consecutive identical command lines are written only once. With the
/// envelope enabled, output is wrapped in [`PROLOGUE`] and [`EPILOGUE`].
#[derive(Debug)]
pub struct Hpgl<W: Write> {
    out: W,
    envelope: bool,
    previous: Option<String>,
    written: u64,
    suppressed: u64,
}

impl<W: Write> Hpgl<W> {
    /// Start the output, writing the prologue if `envelope` is set
    pub fn new(mut out: W, envelope: bool) -> io::Result<Self> {
        if envelope {
            out.write_all(PROLOGUE.as_bytes())?;
        }
        Ok(Self {
            out,
            envelope,
            previous: None,
            written: 0,
            suppressed: 0,
        })
    }

    /// Write a command unless it repeats the last written one
    pub fn emit(&mut self, cmd: PlotterCommand) -> io::Result<()> {
        let line = format!("{cmd}\n");
        if self.previous.as_deref() == Some(line.as_str()) {
            self.suppressed += 1;
            return Ok(());
        }

        self.out.write_all(line.as_bytes())?;
        self.previous = Some(line);
        self.written += 1;
        Ok(())
    }

    /// Write the epilogue if enabled, flush and hand back the writer
    pub fn finalize(mut self) -> io::Result<W> {
        if self.envelope {
            self.out.write_all(EPILOGUE.as_bytes())?;
        }
        self.out.flush()?;
        log::info!(
            "Wrote {} plotter commands, {} repeated ones dropped",
            self.written,
            self.suppressed
        );
        Ok(self.out)
    }
}

impl<W: Write> Render for Hpgl<W> {
    fn move_to(&mut self, point: PlotterPoint) -> io::Result<()> {
        self.emit(PlotterCommand::PenUp(point))
    }

    fn line_to(&mut self, point: PlotterPoint) -> io::Result<()> {
        self.emit(PlotterCommand::PenDown(point))
    }
}
