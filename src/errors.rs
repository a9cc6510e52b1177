//! Conversion errors

use std::{error::Error, fmt, io, path::PathBuf};

/// Fatal error aborting the conversion
#[derive(Debug)]
pub enum ConvertError {
    /// Required path missing from the command line
    Usage(String),
    OpenInput(PathBuf, io::Error),
    OpenOutput(PathBuf, io::Error),
    OpenIntermediate(PathBuf, io::Error),
    RemoveIntermediate(PathBuf, io::Error),
    /// No G20/G21 in the program
    UnitsNotFound,
    /// No G90/G91 in the program
    DistanceModeNotFound,
    /// Read or write failure while converting
    Io(io::Error),
}

impl ConvertError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        use ConvertError::*;
        match self {
            Usage(_) => 2,
            OpenInput(..) => 3,
            OpenOutput(..) => 4,
            OpenIntermediate(..) => 5,
            RemoveIntermediate(..) => 6,
            UnitsNotFound => 7,
            DistanceModeNotFound => 8,
            Io(_) => 9,
        }
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ConvertError::*;
        match self {
            Usage(msg) => write!(f, "{msg}"),
            OpenInput(p, e) => write!(f, "Cannot open input file '{}' for reading ({e})", p.display()),
            OpenOutput(p, e) => write!(f, "Cannot open output file '{}' for read/write ({e})", p.display()),
            OpenIntermediate(p, e) => write!(
                f,
                "Cannot open intermediate file '{}' for read/write ({e})",
                p.display()
            ),
            RemoveIntermediate(p, e) => {
                write!(f, "Cannot remove intermediate file '{}' ({e})", p.display())
            }
            UnitsNotFound => write!(f, "Units not found: program has neither G20 nor G21"),
            DistanceModeNotFound => {
                write!(f, "Distance mode not found: program has neither G90 nor G91")
            }
            Io(e) => write!(f, "I/O error during conversion ({e})"),
        }
    }
}

impl Error for ConvertError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        use ConvertError::*;
        match self {
            OpenInput(_, e) | OpenOutput(_, e) | OpenIntermediate(_, e) | RemoveIntermediate(_, e) | Io(e) => {
                Some(e)
            }
            Usage(_) | UnitsNotFound | DistanceModeNotFound => None,
        }
    }
}

impl From<io::Error> for ConvertError {
    fn from(e: io::Error) -> Self {
        ConvertError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::ConvertError;
    use std::{collections::HashSet, error::Error, io};

    fn all() -> Vec<ConvertError> {
        let e = || io::Error::from(io::ErrorKind::NotFound);
        vec![
            ConvertError::Usage("Input filename is missing".into()),
            ConvertError::OpenInput("a.nc".into(), e()),
            ConvertError::OpenOutput("a.hpgl".into(), e()),
            ConvertError::OpenIntermediate("CNC.TMP".into(), e()),
            ConvertError::RemoveIntermediate("CNC.TMP".into(), e()),
            ConvertError::UnitsNotFound,
            ConvertError::DistanceModeNotFound,
            ConvertError::Io(e()),
        ]
    }

    #[test]
    fn distinct_nonzero_exit_codes() {
        let codes: HashSet<_> = all().iter().map(ConvertError::exit_code).collect();
        assert_eq!(codes.len(), all().len());
        assert!(!codes.contains(&0));
        assert!(!codes.contains(&1));
    }

    #[test]
    fn messages() {
        let e = ConvertError::OpenInput("a.nc".into(), io::Error::from(io::ErrorKind::NotFound));
        assert!(e.to_string().starts_with("Cannot open input file 'a.nc' for reading"));
        assert!(e.source().is_some());
        assert!(ConvertError::UnitsNotFound.source().is_none());
    }
}
