//! Gzip framing for embedded payloads.
//!
//! The generator compresses each resolved schema with [`compress`] at build
//! time and generated loaders undo it with [`decompress`]. Headers carry no
//! modification time, so equal input always yields equal bytes.

use std::io::{Read, Write};

use flate2::Compression;
use flate2::GzBuilder;
use flate2::read::GzDecoder;

/// Compresses `data` into a gzip stream with a zeroed header timestamp.
///
/// # Errors
///
/// Returns the underlying I/O error if the encoder fails.
pub fn compress(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzBuilder::new()
        .mtime(0)
        .write(Vec::with_capacity(data.len() / 2), Compression::best());
    encoder.write_all(data)?;
    encoder.finish()
}

/// Decompresses a gzip stream produced by [`compress`].
///
/// # Errors
///
/// Returns an I/O error if `data` is not a valid gzip stream.
pub fn decompress(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(data);
    let mut out = Vec::with_capacity(data.len() * 4);
    decoder.read_to_end(&mut out)?;
    Ok(out)
}
