//! Golomb-Rice compression for streams of fixed-width integers.
//!
//! A compressed stream is a 3-byte header (`k`, width, signedness) followed
//! by one variable-length codeword per source integer, packed LSB-first.
//! Small magnitudes dominate most integer streams, and that is exactly
//! where the code is short.

pub mod bitio;
pub mod error;
pub mod golomb;
pub mod header;

use bitio::{BitReader, BitWriter};
pub use error::CodecError;
pub use golomb::{GolombDecoder, GolombEncoder};
pub use header::{read_header, write_header, Config, Width, HEADER_SIZE};

fn load_le(chunk: &[u8]) -> u64 {
    let mut x = 0u64;
    for (i, &b) in chunk.iter().enumerate() {
        x |= u64::from(b) << (8 * i);
    }
    x
}

fn sign_extend(x: u64, bits: u32) -> i64 {
    let shift = 64 - bits;
    ((x << shift) as i64) >> shift
}

/// Compresses a buffer of little-endian fixed-width integers. The output
/// starts with the 3-byte header; an empty input yields exactly that.
pub fn compress(input: &[u8], cfg: &Config) -> Result<Vec<u8>, CodecError> {
    let chunk = cfg.width.bytes();
    if input.len() % chunk != 0 {
        return Err(CodecError::RaggedInput {
            len: input.len(),
            chunk,
        });
    }

    let mut bw = BitWriter::new();
    {
        let mut enc = GolombEncoder::new(&mut bw, cfg);
        for c in input.chunks_exact(chunk) {
            let raw = load_le(c);
            if cfg.signed {
                enc.encode(sign_extend(raw, cfg.width.bits()));
            } else {
                enc.encode_unsigned(raw);
            }
        }
    }
    let payload = bw.finish();

    let mut out = Vec::with_capacity(HEADER_SIZE + payload.len());
    out.extend_from_slice(&write_header(cfg));
    out.extend_from_slice(&payload);
    Ok(out)
}

/// Decompresses a buffer produced by [`compress`], recovering the
/// configuration from the header. Trailing padding bits decode as an
/// unterminated quotient run and end the stream.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>, CodecError> {
    let cfg = read_header(data)?;
    let chunk = cfg.width.bytes();

    let mut dec = GolombDecoder::new(BitReader::new(&data[HEADER_SIZE..]), &cfg);
    let mut out = Vec::new();
    while let Some((mag, negative)) = dec.decode() {
        let raw = if negative {
            (mag as i64).wrapping_neg() as u64
        } else {
            mag
        };
        out.extend_from_slice(&raw.to_le_bytes()[..chunk]);
    }
    Ok(out)
}
