use core::fmt;

/// Error type for values that fall outside the supported sample widths
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Error {
    /// Unsupported bit depth
    UnsupportedBitDepth(u16),
    /// Unsupported number of bytes per sample
    UnsupportedByteCount(u8),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedBitDepth(bits) => write!(f, "unsupported bit depth: {bits}"),
            Error::UnsupportedByteCount(bytes) => {
                write!(f, "unsupported bytes per sample: {bytes}")
            }
        }
    }
}

impl core::error::Error for Error {}
