use crate::error::Error;

/// Width of an integer PCM sample
#[derive(Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord, Hash)]
pub enum BitDepth {
    /// 8 bit samples, 1 byte
    BitDepth8,
    /// 16 bit samples, 2 bytes
    BitDepth16,
    /// 24 bit samples, 3 bytes
    BitDepth24,
    /// 32 bit samples, 4 bytes
    BitDepth32,
    /// 64 bit samples, 8 bytes
    BitDepth64,
}

impl BitDepth {
    /// Number of bits per sample
    pub const fn bits(self) -> u16 {
        match self {
            BitDepth::BitDepth8 => 8,
            BitDepth::BitDepth16 => 16,
            BitDepth::BitDepth24 => 24,
            BitDepth::BitDepth32 => 32,
            BitDepth::BitDepth64 => 64,
        }
    }

    /// Number of bytes per sample
    pub const fn bytes(self) -> u8 {
        (self.bits() / 8) as u8
    }

    /// Parse a bit count, `0` meaning "unknown".
    ///
    /// ```
    /// use pcmconv::{BitDepth, Error};
    ///
    /// assert_eq!(BitDepth::try_from_bits(24), Ok(Some(BitDepth::BitDepth24)));
    /// assert_eq!(BitDepth::try_from_bits(0), Ok(None));
    /// assert_eq!(BitDepth::try_from_bits(12), Err(Error::UnsupportedBitDepth(12)));
    /// ```
    pub fn try_from_bits(bits: u16) -> Result<Option<Self>, Error> {
        match bits {
            0 => Ok(None),
            8 => Ok(Some(BitDepth::BitDepth8)),
            16 => Ok(Some(BitDepth::BitDepth16)),
            24 => Ok(Some(BitDepth::BitDepth24)),
            32 => Ok(Some(BitDepth::BitDepth32)),
            64 => Ok(Some(BitDepth::BitDepth64)),
            _ => Err(Error::UnsupportedBitDepth(bits)),
        }
    }

    /// Parse a byte count, `0` meaning "unknown".
    pub fn try_from_bytes(bytes: u8) -> Result<Option<Self>, Error> {
        match bytes {
            0 => Ok(None),
            1 => Ok(Some(BitDepth::BitDepth8)),
            2 => Ok(Some(BitDepth::BitDepth16)),
            3 => Ok(Some(BitDepth::BitDepth24)),
            4 => Ok(Some(BitDepth::BitDepth32)),
            8 => Ok(Some(BitDepth::BitDepth64)),
            _ => Err(Error::UnsupportedByteCount(bytes)),
        }
    }

    /// Normalization divisor for this width: `2^(bits - 1)`, the magnitude of
    /// the most negative two's-complement value.
    pub const fn factor(self) -> f64 {
        (1u64 << (self.bits() - 1)) as f64
    }

    /// Guess the bit depth of `samples` unless `declared` is already known.
    ///
    /// Only the largest *positive* sample is looked at, negative excursions
    /// never change the estimate. The peak is put in the smallest bucket whose
    /// threshold it does not exceed:
    ///
    /// | peak                      | depth |
    /// |---------------------------|-------|
    /// | `..=127`                  | 8     |
    /// | `128..=32_767`            | 16    |
    /// | `32_768..=8_388_607`      | 24    |
    /// | `8_388_608..=4_294_967_295` | 32  |
    /// | `4_294_967_296..`         | 64    |
    ///
    /// ```
    /// use pcmconv::BitDepth;
    ///
    /// assert_eq!(BitDepth::infer(&[-40_000, 100], None), BitDepth::BitDepth8);
    /// assert_eq!(BitDepth::infer(&[32_768], None), BitDepth::BitDepth24);
    /// assert_eq!(BitDepth::infer(&[32_768], Some(BitDepth::BitDepth32)), BitDepth::BitDepth32);
    /// ```
    pub fn infer(samples: &[i64], declared: Option<BitDepth>) -> BitDepth {
        if let Some(depth) = declared {
            return depth;
        }

        let peak = samples.iter().copied().fold(0, i64::max);

        let mut depth = BitDepth::BitDepth8;
        if peak > 127 {
            depth = BitDepth::BitDepth16;
        }
        if peak > 32_767 {
            depth = BitDepth::BitDepth24;
        }
        if peak > 8_388_607 {
            depth = BitDepth::BitDepth32;
        }
        // Known quirk: this is u32::MAX, not i32::MAX, so peaks between
        // 2^31 and 2^32 - 1 still land in the 32 bit bucket.
        if peak > 4_294_967_295 {
            depth = BitDepth::BitDepth64;
        }

        log::debug!(
            "inferred {} bit samples from peak {} over {} samples",
            depth.bits(),
            peak,
            samples.len()
        );

        depth
    }
}

impl TryFrom<u16> for BitDepth {
    type Error = Error;

    fn try_from(bits: u16) -> Result<Self, Self::Error> {
        BitDepth::try_from_bits(bits)?.ok_or(Error::UnsupportedBitDepth(bits))
    }
}

impl From<BitDepth> for u16 {
    fn from(depth: BitDepth) -> Self {
        depth.bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn infer_thresholds() {
        init_logger();

        let cases: [(i64, BitDepth); 10] = [
            (0, BitDepth::BitDepth8),
            (127, BitDepth::BitDepth8),
            (128, BitDepth::BitDepth16),
            (32_767, BitDepth::BitDepth16),
            (32_768, BitDepth::BitDepth24),
            (8_388_607, BitDepth::BitDepth24),
            (8_388_608, BitDepth::BitDepth32),
            (2_147_483_648, BitDepth::BitDepth32),
            (4_294_967_295, BitDepth::BitDepth32),
            (4_294_967_296, BitDepth::BitDepth64),
        ];

        for (peak, expected) in cases {
            assert_eq!(BitDepth::infer(&[-1, peak, 3], None), expected, "peak {peak}");
        }
    }

    #[test]
    fn infer_ignores_negative_samples() {
        init_logger();

        assert_eq!(
            BitDepth::infer(&[i64::MIN, -32_768, 12], None),
            BitDepth::BitDepth8
        );
        assert_eq!(BitDepth::infer(&[-5, -6], None), BitDepth::BitDepth8);
    }

    #[test]
    fn infer_empty_defaults_to_8_bit() {
        assert_eq!(BitDepth::infer(&[], None), BitDepth::BitDepth8);
    }

    #[test]
    fn infer_trusts_declared_depth() {
        let depths = [
            BitDepth::BitDepth8,
            BitDepth::BitDepth16,
            BitDepth::BitDepth24,
            BitDepth::BitDepth32,
            BitDepth::BitDepth64,
        ];

        for depth in depths {
            assert_eq!(BitDepth::infer(&[i64::MAX], Some(depth)), depth);
            assert_eq!(BitDepth::infer(&[], Some(depth)), depth);
        }
    }

    #[test]
    fn bits_and_bytes() {
        assert_eq!(BitDepth::BitDepth8.bytes(), 1);
        assert_eq!(BitDepth::BitDepth24.bytes(), 3);
        assert_eq!(BitDepth::BitDepth64.bytes(), 8);
        assert_eq!(u16::from(BitDepth::BitDepth32), 32);
    }

    #[test]
    fn parse_bytes() {
        assert_eq!(BitDepth::try_from_bytes(0), Ok(None));
        assert_eq!(BitDepth::try_from_bytes(3), Ok(Some(BitDepth::BitDepth24)));
        assert_eq!(BitDepth::try_from_bytes(8), Ok(Some(BitDepth::BitDepth64)));
        assert_eq!(
            BitDepth::try_from_bytes(5),
            Err(Error::UnsupportedByteCount(5))
        );
    }

    #[test]
    fn try_from_rejects_unknown() {
        assert_eq!(BitDepth::try_from(16u16), Ok(BitDepth::BitDepth16));
        assert_eq!(BitDepth::try_from(0u16), Err(Error::UnsupportedBitDepth(0)));
        assert_eq!(BitDepth::try_from(20u16), Err(Error::UnsupportedBitDepth(20)));
    }

    #[test]
    fn factors() {
        assert_eq!(BitDepth::BitDepth8.factor(), 128.0);
        assert_eq!(BitDepth::BitDepth16.factor(), 32_768.0);
        assert_eq!(BitDepth::BitDepth24.factor(), 8_388_608.0);
        assert_eq!(BitDepth::BitDepth32.factor(), 2_147_483_648.0);
        assert_eq!(BitDepth::BitDepth64.factor(), 9_223_372_036_854_775_808.0);
    }
}
