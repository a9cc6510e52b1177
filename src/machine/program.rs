//! Program translation

use super::mach::Machine;
use crate::{
    gcode::{MotionCommand, NormalizedStream},
    render::Render,
};
use std::io::{self, Read, Seek};

/// Run every normalized line through the machine, then rewind the stream
///
/// Motion lines missing their `X` or `Y` field are skipped with a warning.
pub fn translate<S, R>(stream: &mut NormalizedStream<S>, machine: &mut Machine<R>) -> io::Result<()>
where
    S: Read + Seek,
    R: Render,
{
    for line in stream.lines() {
        let (number, text) = line?;
        match MotionCommand::classify(&text) {
            Ok(cmd) => {
                log::trace!("line {number}: {cmd:?}");
                machine.execute_command(cmd)?;
            }
            Err(e) => log::warn!("{}, line skipped", e.at_line(number)),
        }
    }
    stream.rewind()
}
