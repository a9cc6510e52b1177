//! Normalized G-code stream

use std::io::{self, BufRead, BufReader, Read, Seek};

/// Sanitized G-code, read line by line and rewound between passes
#[derive(Debug)]
pub struct NormalizedStream<S> {
    inner: BufReader<S>,
}

impl<S: Read + Seek> NormalizedStream<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner: BufReader::new(inner),
        }
    }

    /// Iterate over `(line number, text)` from the current position
    ///
    /// Lines have no length limit. The terminating newline is not included
    /// and bytes that are not valid UTF-8 are replaced.
    pub fn lines(&mut self) -> Lines<'_, S> {
        Lines {
            stream: self,
            number: 0,
            buf: Vec::new(),
        }
    }

    /// Go back to the start of the stream
    pub fn rewind(&mut self) -> io::Result<()> {
        self.inner.rewind()
    }
}

/// Iterator over normalized lines
#[derive(Debug)]
pub struct Lines<'t, S> {
    stream: &'t mut NormalizedStream<S>,
    number: u64,
    buf: Vec<u8>,
}

impl<S: Read + Seek> Iterator for Lines<'_, S> {
    type Item = io::Result<(u64, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.stream.inner.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                }
                self.number += 1;
                let text = String::from_utf8_lossy(&self.buf).into_owned();
                Some(Ok((self.number, text)))
            }
            Err(e) => Some(Err(e)),
        }
    }
}
