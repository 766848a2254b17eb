use crate::bitio::{BitReader, BitWriter};
use crate::header::Config;

/// Overflow count: `x >> k`, unary-coded on the wire.
#[inline]
fn quotient(x: u64, k: u32) -> u64 {
    x.checked_shr(k).unwrap_or(0)
}

/// Low `k` bits of `x`, emitted as a fixed-width field.
#[inline]
fn remainder(x: u64, k: u32) -> u64 {
    if k == 64 {
        x
    } else {
        x & ((1u64 << k) - 1)
    }
}

/// Golomb-Rice encoder. Emits one codeword per integer:
/// `[sign bit, signed mode only] [q zero-bits + one] [k remainder bits MSB-first]`.
pub struct GolombEncoder<'a> {
    w: &'a mut BitWriter,
    k: u32,
    signed: bool,
}

impl<'a> GolombEncoder<'a> {
    pub fn new(w: &'a mut BitWriter, cfg: &Config) -> Self {
        Self {
            w,
            k: u32::from(cfg.k),
            signed: cfg.signed,
        }
    }

    /// Encodes one signed integer. The magnitude of the most negative
    /// value is taken with `unsigned_abs`, so it round-trips exactly.
    pub fn encode(&mut self, v: i64) {
        if self.signed {
            self.w.write_bit(v < 0);
        }
        self.put_codeword(v.unsigned_abs());
    }

    /// Encodes one unsigned integer; no sign bit is emitted.
    pub fn encode_unsigned(&mut self, v: u64) {
        self.put_codeword(v);
    }

    fn put_codeword(&mut self, x: u64) {
        let q = quotient(x, self.k);
        for _ in 0..q {
            self.w.write_bit(false);
        }
        self.w.write_bit(true);
        let r = remainder(x, self.k);
        for i in (0..self.k).rev() {
            self.w.write_bit((r >> i) & 1 != 0);
        }
    }
}

/// Golomb-Rice decoder. Yields `(magnitude, negative)` pairs until the
/// bit source runs out.
pub struct GolombDecoder<'a> {
    r: BitReader<'a>,
    k: u32,
    signed: bool,
}

impl<'a> GolombDecoder<'a> {
    pub fn new(r: BitReader<'a>, cfg: &Config) -> Self {
        Self {
            r,
            k: u32::from(cfg.k),
            signed: cfg.signed,
        }
    }

    /// Decodes the next codeword, or `None` at end of stream.
    ///
    /// The quotient scan doubles as the end-of-stream detector: the zero
    /// padding of the final byte looks like more quotient bits and runs
    /// into the end of the slice before a terminating one-bit appears.
    /// A codeword truncated mid-remainder is dropped, not reported.
    pub fn decode(&mut self) -> Option<(u64, bool)> {
        let negative = if self.signed {
            self.r.read_bit()?
        } else {
            false
        };
        let mut q: u64 = 0;
        loop {
            match self.r.read_bit() {
                Some(true) => break,
                Some(false) => q += 1,
                None => return None,
            }
        }
        let mut x = q.wrapping_shl(self.k);
        for i in (0..self.k).rev() {
            if self.r.read_bit()? {
                x |= 1u64 << i;
            }
        }
        Some((x, negative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::Width;

    fn cfg(k: u8, width: Width, signed: bool) -> Config {
        Config::new(k, width, signed).unwrap()
    }

    fn encode_one_signed(v: i64, c: &Config) -> Vec<u8> {
        let mut bw = BitWriter::new();
        GolombEncoder::new(&mut bw, c).encode(v);
        bw.finish()
    }

    #[test]
    fn known_bits_for_five() {
        // width=8, k=2, signed: 5 -> sign 0, unary 0 1, remainder 01
        let c = cfg(2, Width::W8, true);
        assert_eq!(encode_one_signed(5, &c), vec![0b0001_0100]);
    }

    #[test]
    fn known_bits_for_minus_five() {
        // same codeword with the sign bit flipped
        let c = cfg(2, Width::W8, true);
        assert_eq!(encode_one_signed(-5, &c), vec![0b0001_0101]);
    }

    #[test]
    fn zero_is_sign_then_terminator_then_k_zeros() {
        let c = cfg(2, Width::W8, true);
        assert_eq!(encode_one_signed(0, &c), vec![0b0000_0010]);
    }

    #[test]
    fn codeword_length_grows_with_magnitude() {
        let c = cfg(3, Width::W16, true);
        let mut prev_bits = 0usize;
        for v in 0..200i64 {
            // sign + q zeros + terminator + k remainder bits
            let bits = 1 + (v as u64 >> 3) as usize + 1 + 3;
            assert!(bits >= prev_bits);
            assert_eq!(encode_one_signed(v, &c).len(), bits.div_ceil(8));
            prev_bits = bits;
        }
    }

    #[test]
    fn roundtrip_all_i8_for_every_k() {
        for k in 0..=8u8 {
            let c = cfg(k, Width::W8, true);
            let mut bw = BitWriter::new();
            {
                let mut enc = GolombEncoder::new(&mut bw, &c);
                for v in i8::MIN..=i8::MAX {
                    enc.encode(i64::from(v));
                }
            }
            let bytes = bw.finish();
            let mut dec = GolombDecoder::new(BitReader::new(&bytes), &c);
            for v in i8::MIN..=i8::MAX {
                let (mag, neg) = dec.decode().unwrap();
                let got = if neg {
                    (mag as i64).wrapping_neg()
                } else {
                    mag as i64
                };
                assert_eq!(got as i8, v, "k={k}");
            }
            assert_eq!(dec.decode(), None);
        }
    }

    #[test]
    fn roundtrip_unsigned_without_sign_bit() {
        let c = cfg(4, Width::W16, false);
        let vals = [0u64, 1, 15, 16, 17, 255, 1000, 65535];
        let mut bw = BitWriter::new();
        {
            let mut enc = GolombEncoder::new(&mut bw, &c);
            for &v in &vals {
                enc.encode_unsigned(v);
            }
        }
        let bytes = bw.finish();
        let mut dec = GolombDecoder::new(BitReader::new(&bytes), &c);
        for &v in &vals {
            assert_eq!(dec.decode(), Some((v, false)));
        }
        assert_eq!(dec.decode(), None);
    }

    #[test]
    fn most_negative_value_roundtrips() {
        let c = cfg(64, Width::W64, true);
        let bytes = encode_one_signed(i64::MIN, &c);
        let mut dec = GolombDecoder::new(BitReader::new(&bytes), &c);
        let (mag, neg) = dec.decode().unwrap();
        assert!(neg);
        assert_eq!(mag, 1u64 << 63);
        assert_eq!((mag as i64).wrapping_neg(), i64::MIN);
    }

    #[test]
    fn k_64_unsigned_max_roundtrips() {
        let c = cfg(64, Width::W64, false);
        let mut bw = BitWriter::new();
        GolombEncoder::new(&mut bw, &c).encode_unsigned(u64::MAX);
        let bytes = bw.finish();
        // terminator + 64 remainder bits = 65 bits
        assert_eq!(bytes.len(), 9);
        let mut dec = GolombDecoder::new(BitReader::new(&bytes), &c);
        assert_eq!(dec.decode(), Some((u64::MAX, false)));
    }

    #[test]
    fn truncated_remainder_is_dropped() {
        // one byte, signed k=6: sign 0, q=1 (zero then one at bit 2), then
        // only 5 of the 6 remainder bits exist
        let c = cfg(6, Width::W8, true);
        let mut dec = GolombDecoder::new(BitReader::new(&[0b0000_0100]), &c);
        assert_eq!(dec.decode(), None);
    }
}
