//! Command line and conversion job configuration

use crate::errors::ConvertError;
use clap::Parser;
use std::path::PathBuf;

/// Default intermediate file, created in the working directory
pub const DEFAULT_INTERMEDIATE: &str = "CNC.TMP";

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "cnc2hpgl")]
#[command(about = "Convert FlatCAM CNC G-code into HPGL for pen plotters")]
#[command(disable_version_flag = true)]
pub struct Args {
    /// FlatCAM CNC file to convert
    #[arg(short, long, value_name = "INPUT CNC")]
    pub input: Option<PathBuf>,

    /// File the converted HPGL is saved to
    #[arg(short, long, value_name = "OUTPUT HPGL")]
    pub output: Option<PathBuf>,

    /// Do not write prologue and epilogue to the output file
    #[arg(short, long)]
    pub plain: bool,

    /// Keep the intermediate sanitized file after conversion
    #[arg(short, long)]
    pub keep_intermediate: bool,

    /// Where the intermediate sanitized file is written
    #[arg(long, value_name = "PATH", default_value = DEFAULT_INTERMEDIATE)]
    pub intermediate: PathBuf,

    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,

    /// Display current software version
    #[arg(short = 'v', long)]
    pub version: bool,
}

/// One conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub intermediate: PathBuf,
    /// Suppress the HPGL prologue and epilogue
    pub plain: bool,
    pub keep_intermediate: bool,
}

impl ConversionJob {
    /// Build the job, requiring both input and output paths
    pub fn from_args(args: Args) -> Result<Self, ConvertError> {
        let input = args
            .input
            .ok_or_else(|| ConvertError::Usage("Input filename is missing (use -i)".into()))?;
        let output = args
            .output
            .ok_or_else(|| ConvertError::Usage("Output filename is missing (use -o)".into()))?;

        Ok(Self {
            input,
            output,
            intermediate: args.intermediate,
            plain: args.plain,
            keep_intermediate: args.keep_intermediate,
        })
    }

    /// Whether the output is wrapped in prologue and epilogue
    pub fn envelope(&self) -> bool {
        !self.plain
    }
}
