//! Stream copying in fixed-size blocks.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Block size every copy loop reads with.
pub const BUFFER_SIZE: usize = 4096;

/// Copy everything from `reader` to `writer` and return the byte count.
/// The writer is flushed before returning.
pub fn copy<R: Read, W: Write>(reader: &mut R, writer: &mut W) -> io::Result<u64> {
    let mut buffer = [0u8; BUFFER_SIZE];
    let mut copied = 0u64;
    loop {
        let read = reader.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        writer.write_all(&buffer[..read])?;
        copied += read as u64;
    }
    writer.flush()?;
    Ok(copied)
}

/// Copy one file to another through buffered handles; returns the byte
/// count. Both handles close on drop.
pub fn copy_file(from: &Path, to: &Path) -> io::Result<u64> {
    let mut reader = BufReader::new(File::open(from)?);
    let mut writer = BufWriter::new(File::create(to)?);
    copy(&mut reader, &mut writer)
}

/// Drain a reader into a byte vector.
pub fn copy_to_vec<R: Read>(reader: &mut R) -> io::Result<Vec<u8>> {
    let mut out = Vec::with_capacity(BUFFER_SIZE);
    copy(reader, &mut out)?;
    Ok(out)
}

/// Drain a reader into a string; the bytes must be valid UTF-8.
pub fn copy_to_string<R: Read>(reader: &mut R) -> io::Result<String> {
    let bytes = copy_to_vec(reader)?;
    String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
