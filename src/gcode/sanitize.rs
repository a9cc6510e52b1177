//! Raw input normalization

use std::io::{self, BufRead, BufReader, BufWriter, Read, Seek, Write};

/// Bytes dropped from the source: BS, HT, VT, FF, CR, space and DEL
const STRIPPED: [u8; 7] = [0x08, 0x09, 0x0B, 0x0C, 0x0D, 0x20, 0x7F];

fn is_stripped(byte: &u8) -> bool {
    STRIPPED.contains(byte)
}

/// Copy `src` into `dest` without whitespace and control bytes
///
/// Newlines and every other byte are kept in their original order. When done
/// `dest` is flushed and rewound, so the normalized stream can be read from
/// the start. Returns the number of bytes kept.
pub fn sanitize<R, W>(src: R, dest: &mut W) -> io::Result<u64>
where
    R: Read,
    W: Write + Seek,
{
    let mut reader = BufReader::new(src);
    let mut writer = BufWriter::new(&mut *dest);
    let (mut kept, mut total) = (0_u64, 0_u64);

    loop {
        let chunk = reader.fill_buf()?;
        if chunk.is_empty() {
            break;
        }

        for part in chunk.split(is_stripped) {
            writer.write_all(part)?;
            kept += part.len() as u64;
        }

        let len = chunk.len();
        total += len as u64;
        reader.consume(len);
    }
    writer.flush()?;
    drop(writer);

    log::debug!("Normalized stream: {kept} bytes kept, {} removed", total - kept);
    dest.rewind()?;
    Ok(kept)
}
