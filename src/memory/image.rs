//! Raw binary images

use crate::memory::{Error, Result};
use std::io;

/// Split an image into little-endian instruction words.
///
/// A trailing partial word is an error rather than being dropped.
pub fn words(bytes: &[u8]) -> Result<Vec<u32>> {
    if bytes.len() % 4 != 0 {
        return Err(Error::MisalignedImage {
            length: bytes.len(),
        });
    }

    Ok(bytes
        .chunks_exact(4)
        .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}

/// Read an entire image from a file and split it into words.
pub fn read_words<F>(file: &mut F) -> Result<Vec<u32>>
where
    F: io::Read,
{
    let mut data = Vec::new();
    file.read_to_end(&mut data)?;

    words(&data)
}
