//! The conversion pipeline

use crate::{
    config::ConversionJob,
    errors::ConvertError,
    gcode::{sanitize, scan_distance_mode, scan_units, NormalizedStream},
    machine::{translate, Machine, MachineContext},
    render::Hpgl,
};
use std::{
    fs::{self, File, OpenOptions},
    io::{BufWriter, Read, Seek, Write},
    path::{Path, PathBuf},
};

/// Convert G-code from `src` into HPGL written to `out`
///
/// `scratch` receives the sanitized program and is read back by the later
/// passes. Returns the output writer once everything is flushed.
pub fn convert<R, S, W>(src: R, mut scratch: S, out: W, envelope: bool) -> Result<W, ConvertError>
where
    R: Read,
    S: Read + Write + Seek,
    W: Write,
{
    log::info!("Sanitising file");
    sanitize(src, &mut scratch)?;
    let mut stream = NormalizedStream::new(scratch);

    let units = scan_units(&mut stream)?.ok_or(ConvertError::UnitsNotFound)?;
    log::info!("Units: {units}, {} steps per unit", units.scale());
    let distance_mode = scan_distance_mode(&mut stream)?.ok_or(ConvertError::DistanceModeNotFound)?;
    log::info!("Distance mode: {distance_mode}");

    let ctx = MachineContext {
        units,
        distance_mode,
    };
    let mut machine = Machine::with_render(ctx, Hpgl::new(out, envelope)?);
    translate(&mut stream, &mut machine)?;

    Ok(machine.finalize().finalize()?)
}

/// Run a conversion job on files
pub fn run(job: &ConversionJob) -> Result<(), ConvertError> {
    let src = File::open(&job.input).map_err(|e| ConvertError::OpenInput(job.input.clone(), e))?;
    let out = open_rw(&job.output).map_err(|e| ConvertError::OpenOutput(job.output.clone(), e))?;
    let (intermediate, scratch) = Intermediate::create(&job.intermediate, job.keep_intermediate)?;

    convert(src, scratch, BufWriter::new(out), job.envelope())?;
    log::info!("Wrote '{}'", job.output.display());

    intermediate.finish()
}

fn open_rw(path: &Path) -> std::io::Result<File> {
    OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}

/// Intermediate file, removed when the run ends unless kept
#[derive(Debug)]
struct Intermediate {
    path: PathBuf,
    keep: bool,
    finished: bool,
}

impl Intermediate {
    fn create(path: &Path, keep: bool) -> Result<(Self, File), ConvertError> {
        let file = open_rw(path).map_err(|e| ConvertError::OpenIntermediate(path.to_owned(), e))?;
        let guard = Self {
            path: path.to_owned(),
            keep,
            finished: false,
        };
        Ok((guard, file))
    }

    /// Remove the file after a successful run, reporting failure
    fn finish(mut self) -> Result<(), ConvertError> {
        self.finished = true;
        if self.keep {
            log::info!("Intermediate file kept at '{}'", self.path.display());
            return Ok(());
        }
        fs::remove_file(&self.path).map_err(|e| ConvertError::RemoveIntermediate(self.path.clone(), e))
    }
}

impl Drop for Intermediate {
    fn drop(&mut self) {
        if self.finished || self.keep {
            return;
        }
        if let Err(e) = fs::remove_file(&self.path) {
            log::debug!("Leaving '{}' behind: {e}", self.path.display());
        }
    }
}
