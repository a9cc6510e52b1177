//! G-Code line errors

use std::fmt;

/// Simple error message about a single source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleError(pub String);

impl SimpleError {
    /// Accompany `SimpleError` with line number
    pub fn at_line(self, line: u64) -> LineError {
        LineError { error: self, line }
    }
}

impl fmt::Display for SimpleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Error message with line number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineError {
    error: SimpleError,
    line: u64,
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "At line {}: ", self.line)?;
        self.error.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::SimpleError;

    #[test]
    fn line_prefix() {
        let e = SimpleError("No 'X' field".into()).at_line(12);
        assert_eq!(e.to_string(), "At line 12: No 'X' field");
    }
}
