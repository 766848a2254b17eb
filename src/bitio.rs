/// Bit writer — LSB-first, accumulates into a byte buffer.
///
/// The first bit written lands in bit 0 of the current byte, the next in
/// bit 1, and so on. A full byte is pushed immediately, so codec state is
/// one byte regardless of stream length.
pub struct BitWriter {
    buf: Vec<u8>,
    cur: u8,
    pos: u8,
}

impl BitWriter {
    pub fn new() -> Self {
        Self {
            buf: Vec::new(),
            cur: 0,
            pos: 0,
        }
    }

    #[inline]
    pub fn write_bit(&mut self, bit: bool) {
        if bit {
            self.cur |= 1 << self.pos;
        }
        self.pos += 1;
        if self.pos == 8 {
            self.buf.push(self.cur);
            self.cur = 0;
            self.pos = 0;
        }
    }

    /// Flushes a partially filled final byte (unused high bits stay zero)
    /// and yields the packed bytes.
    pub fn finish(mut self) -> Vec<u8> {
        if self.pos > 0 {
            self.buf.push(self.cur);
        }
        self.buf
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Bit reader — LSB-first, reads from a byte slice.
pub struct BitReader<'a> {
    d: &'a [u8],
    byte: usize,
    bit: u8,
}

impl<'a> BitReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            d: data,
            byte: 0,
            bit: 0,
        }
    }

    /// Returns the next bit, or `None` once the slice is consumed.
    #[inline]
    pub fn read_bit(&mut self) -> Option<bool> {
        if self.byte >= self.d.len() {
            return None;
        }
        let bit = (self.d[self.byte] >> self.bit) & 1;
        self.bit += 1;
        if self.bit == 8 {
            self.bit = 0;
            self.byte += 1;
        }
        Some(bit != 0)
    }

    /// True once every bit of the underlying slice has been consumed.
    pub fn exhausted(&self) -> bool {
        self.byte >= self.d.len()
    }
}
