//! zlib codec for loose objects
//!
//! Every object file holds the zlib stream of the object's framed bytes,
//! which keeps the files readable by git itself.

use crate::errors::{StoreError, StoreResult};
use bytes::Bytes;
use flate2::{Decompress, FlushDecompress, Status};
use std::io::Write;

pub fn compress(data: &[u8]) -> StoreResult<Bytes> {
    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(data).map_err(StoreError::CorruptStream)?;

    encoder
        .finish()
        .map(Bytes::from)
        .map_err(StoreError::CorruptStream)
}

/// Inflate a zlib stream
///
/// Truncated input, a bad header, a checksum mismatch or trailing garbage all
/// surface as [`StoreError::CorruptStream`]; an empty result is only ever
/// returned for a stream that really encodes nothing.
pub fn decompress(data: &[u8]) -> StoreResult<Bytes> {
    let mut decoder = Decompress::new(true);
    let mut decompressed = Vec::with_capacity(data.len() * 4 + 64);

    loop {
        if decompressed.len() == decompressed.capacity() {
            decompressed.reserve(decompressed.capacity());
        }

        let before_in = decoder.total_in();
        let before_out = decoder.total_out();
        // `Finish` turns the first call into a one-shot inflate that fails on a short buffer
        let status = decoder
            .decompress_vec(
                &data[before_in as usize..],
                &mut decompressed,
                FlushDecompress::None,
            )
            .map_err(|e| corrupt(e.to_string()))?;

        match status {
            Status::StreamEnd => break,
            _ if decoder.total_in() == before_in && decoder.total_out() == before_out => {
                return Err(corrupt("truncated zlib stream".to_string()));
            }
            _ => {}
        }
    }

    if decoder.total_in() as usize != data.len() {
        return Err(corrupt("trailing bytes after zlib stream".to_string()));
    }

    Ok(decompressed.into())
}

fn corrupt(reason: String) -> StoreError {
    StoreError::CorruptStream(std::io::Error::new(std::io::ErrorKind::InvalidData, reason))
}
