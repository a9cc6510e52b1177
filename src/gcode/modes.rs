//! Units and distance mode detection

use super::file::NormalizedStream;
use std::io::{self, Read, Seek};
use strum::Display;

/// Distance units selected by G20/G21
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Units {
    #[strum(serialize = "G20 (imperial units)")]
    Imperial,
    #[strum(serialize = "G21 (metric units)")]
    Metric,
}

impl Units {
    /// Plotter steps per source unit at 0.025 mm per step
    pub fn scale(self) -> f64 {
        match self {
            // 25.4 / 0.025
            Units::Imperial => 1016.0,
            // 1 / 0.025
            Units::Metric => 40.0,
        }
    }
}

/// Coordinate interpretation selected by G90/G91
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DistanceMode {
    #[strum(serialize = "G90 (absolute coordinates)")]
    Absolute,
    #[strum(serialize = "G91 (incremental coordinates)")]
    Incremental,
}

/// Find the first line with the units directive
pub fn scan_units<S: Read + Seek>(stream: &mut NormalizedStream<S>) -> io::Result<Option<Units>> {
    scan(stream, &[("G20", Units::Imperial), ("G21", Units::Metric)])
}

/// Find the first line with the distance mode directive
pub fn scan_distance_mode<S: Read + Seek>(
    stream: &mut NormalizedStream<S>,
) -> io::Result<Option<DistanceMode>> {
    scan(
        stream,
        &[("G90", DistanceMode::Absolute), ("G91", DistanceMode::Incremental)],
    )
}

/// First line containing one of `codes` wins; inside a line, earlier codes win.
/// The stream is rewound whatever the outcome.
fn scan<S: Read + Seek, T: Copy>(
    stream: &mut NormalizedStream<S>,
    codes: &[(&str, T)],
) -> io::Result<Option<T>> {
    let found = find_code(stream, codes);
    stream.rewind()?;
    found
}

fn find_code<S: Read + Seek, T: Copy>(
    stream: &mut NormalizedStream<S>,
    codes: &[(&str, T)],
) -> io::Result<Option<T>> {
    for line in stream.lines() {
        let (_, line) = line?;
        if let Some((_, value)) = codes.iter().find(|(code, _)| line.contains(code)) {
            return Ok(Some(*value));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn stream(text: &str) -> NormalizedStream<Cursor<Vec<u8>>> {
        NormalizedStream::new(Cursor::new(text.as_bytes().to_vec()))
    }

    #[test]
    fn units() {
        assert_eq!(scan_units(&mut stream("G20\nG21\n")).unwrap(), Some(Units::Imperial));
        assert_eq!(scan_units(&mut stream("M03\nG21\nG20\n")).unwrap(), Some(Units::Metric));
        assert_eq!(scan_units(&mut stream("G90\nG00X1Y1\n")).unwrap(), None);
        assert_eq!(scan_units(&mut stream("")).unwrap(), None);
    }

    #[test]
    fn same_line_prefers_first_code() {
        assert_eq!(scan_units(&mut stream("G21G20\n")).unwrap(), Some(Units::Imperial));
        assert_eq!(
            scan_distance_mode(&mut stream("G91G90\n")).unwrap(),
            Some(DistanceMode::Absolute)
        );
    }

    #[test]
    fn distance_mode() {
        assert_eq!(
            scan_distance_mode(&mut stream("G21\nG90\n")).unwrap(),
            Some(DistanceMode::Absolute)
        );
        assert_eq!(
            scan_distance_mode(&mut stream("G91\nG90\n")).unwrap(),
            Some(DistanceMode::Incremental)
        );
        assert_eq!(scan_distance_mode(&mut stream("G21\n")).unwrap(), None);
    }

    #[test]
    fn rewinds_after_scan() {
        let mut s = stream("G21\nG90\nG00X1Y2\n");
        scan_units(&mut s).unwrap();
        assert_eq!(s.lines().count(), 3);
        s.rewind().unwrap();
        scan_distance_mode(&mut s).unwrap();
        assert_eq!(s.lines().count(), 3);

        let mut s = stream("M03\nM05\n");
        assert_eq!(scan_units(&mut s).unwrap(), None);
        assert_eq!(s.lines().count(), 2);
    }

    #[test]
    fn scales() {
        assert_eq!(Units::Metric.scale(), 40.0);
        assert_eq!(Units::Imperial.scale(), 1016.0);
        assert_eq!(Units::Metric.to_string(), "G21 (metric units)");
    }
}
