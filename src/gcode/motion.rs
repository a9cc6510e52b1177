//! Motion line classification

use super::{errors::SimpleError, types::parse_axis};

/// A classified normalized line
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionCommand {
    /// Z axis movement, no plotter counterpart
    SkipZAxis,
    /// G01 linear feed, drawn with the pen down
    LinearMove(f64, f64),
    /// G00 rapid move, travelled with the pen up
    RapidMove(f64, f64),
    /// Anything else
    Unrecognized,
}

impl MotionCommand {
    /// Classify a normalized line
    ///
    /// A recognized G00/G01 line without an `X` field, or without a `Y` field
    /// after it, is an error.
    pub fn classify(line: &str) -> Result<Self, SimpleError> {
        if line.contains('Z') {
            Ok(MotionCommand::SkipZAxis)
        } else if line.contains("G01") {
            xy_fields(line).map(|(x, y)| MotionCommand::LinearMove(x, y))
        } else if line.contains("G00") {
            xy_fields(line).map(|(x, y)| MotionCommand::RapidMove(x, y))
        } else {
            Ok(MotionCommand::Unrecognized)
        }
    }
}

/// Values between `X` and `Y`, and between `Y` and the end of line
fn xy_fields(line: &str) -> Result<(f64, f64), SimpleError> {
    let x = line
        .find('X')
        .ok_or_else(|| SimpleError(format!("No 'X' field in motion '{line}'")))?;
    let rest = &line[x + 1..];
    let y = rest
        .find('Y')
        .ok_or_else(|| SimpleError(format!("No 'Y' field after 'X' in motion '{line}'")))?;

    Ok((parse_axis(&rest[..y]), parse_axis(&rest[y + 1..])))
}

#[cfg(test)]
mod tests {
    use super::MotionCommand::{self, *};

    fn classify(line: &str) -> MotionCommand {
        MotionCommand::classify(line).unwrap()
    }

    #[test]
    fn moves() {
        assert_eq!(classify("G00X1.000000Y2.000000"), RapidMove(1.0, 2.0));
        assert_eq!(classify("G01X-0.5Y12.25"), LinearMove(-0.5, 12.25));
        assert_eq!(classify("N10G01X3Y4"), LinearMove(3.0, 4.0));
    }

    #[test]
    fn z_wins_over_everything() {
        assert_eq!(classify("G00Z10.000000"), SkipZAxis);
        assert_eq!(classify("G01X1Y2Z-0.1"), SkipZAxis);
        assert_eq!(classify("Z"), SkipZAxis);
    }

    #[test]
    fn linear_before_rapid() {
        assert_eq!(classify("G00G01X1Y1"), LinearMove(1.0, 1.0));
    }

    #[test]
    fn other_lines() {
        assert_eq!(classify("G21"), Unrecognized);
        assert_eq!(classify("M03"), Unrecognized);
        assert_eq!(classify("X1Y1"), Unrecognized);
        assert_eq!(classify(""), Unrecognized);
    }

    #[test]
    fn malformed_values_read_as_zero() {
        assert_eq!(classify("G01XabcY"), LinearMove(0.0, 0.0));
        assert_eq!(classify("G00X1.5F200Y2"), RapidMove(1.5, 2.0));
    }

    #[test]
    fn missing_fields() {
        assert!(MotionCommand::classify("G00").is_err());
        assert!(MotionCommand::classify("G01Y1X2").is_err());
        assert!(MotionCommand::classify("G01X2").is_err());
    }
}
