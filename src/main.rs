mod config;
mod convert;
mod errors;
mod gcode;
mod machine;
mod render;

use clap::{error::ErrorKind, Parser};
use config::{Args, ConversionJob};
use errors::ConvertError;
use std::{io::Write, process};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Exit code after showing help or version
const EXIT_INFO: i32 = 1;

fn report(e: &ConvertError) {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    stderr
        .set_color(
            ColorSpec::new()
                .set_fg(Some(Color::Red))
                .set_bold(true)
                .set_intense(true),
        )
        .ok();
    writeln!(stderr, "Error: {e}").ok();
    stderr.reset().ok();
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp
                | ErrorKind::DisplayVersion
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => EXIT_INFO,
                _ => e.exit_code(),
            };
            e.print().ok();
            process::exit(code);
        }
    };

    if args.version {
        eprintln!("{}", env!("CARGO_PKG_VERSION"));
        process::exit(EXIT_INFO);
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level))
        .init();

    if let Err(e) = ConversionJob::from_args(args).and_then(|job| convert::run(&job)) {
        report(&e);
        process::exit(e.exit_code());
    }
}
