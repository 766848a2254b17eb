use crate::error::CodecError;

/// Header: k(1) + width(1) + signed-as-0/1(1) = 3 bytes, written once at
/// the start of the compressed stream.
pub const HEADER_SIZE: usize = 3;

/// Integer width of the source stream, fixed after the header is read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Width {
    W8,
    W16,
    W32,
    W64,
}

impl Width {
    pub fn bits(self) -> u32 {
        match self {
            Width::W8 => 8,
            Width::W16 => 16,
            Width::W32 => 32,
            Width::W64 => 64,
        }
    }

    pub fn bytes(self) -> usize {
        self.bits() as usize / 8
    }
}

impl TryFrom<u8> for Width {
    type Error = CodecError;

    fn try_from(bits: u8) -> Result<Self, CodecError> {
        match bits {
            8 => Ok(Width::W8),
            16 => Ok(Width::W16),
            32 => Ok(Width::W32),
            64 => Ok(Width::W64),
            other => Err(CodecError::UnsupportedWidth(other)),
        }
    }
}

/// Immutable codec configuration: supplied by the caller for compression,
/// recovered from the header for decompression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub k: u8,
    pub width: Width,
    pub signed: bool,
}

impl Config {
    pub fn new(k: u8, width: Width, signed: bool) -> Result<Self, CodecError> {
        if u32::from(k) > width.bits() {
            return Err(CodecError::KOutOfRange {
                k,
                width: width.bits() as u8,
            });
        }
        Ok(Self { k, width, signed })
    }
}

pub fn write_header(cfg: &Config) -> [u8; HEADER_SIZE] {
    [cfg.k, cfg.width.bits() as u8, cfg.signed as u8]
}

pub fn read_header(data: &[u8]) -> Result<Config, CodecError> {
    if data.len() < HEADER_SIZE {
        return Err(CodecError::TruncatedHeader);
    }
    let width = Width::try_from(data[1])?;
    Config::new(data[0], width, data[2] != 0)
}
