use crate::bit_depth::BitDepth;
use alloc::vec::Vec;
use num_traits::float::FloatCore;

/// Trait for the floating point types integer samples can be converted into
pub trait FloatSample: Sized + Copy {
    /// Widen an integer sample as is, without scaling
    fn from_int(sample: i64) -> Self;
    /// Narrow a value computed in `f64` to the target type
    fn from_f64_sample(sample: f64) -> Self;
    /// Widen the sample to `f64`
    fn to_f64_sample(self) -> f64;
    /// Truncate toward zero, saturating at the `i64` bounds
    fn to_int(self) -> i64;
}

impl FloatSample for f32 {
    fn from_int(sample: i64) -> Self {
        sample as f32
    }
    fn from_f64_sample(sample: f64) -> Self {
        sample as f32
    }
    fn to_f64_sample(self) -> f64 {
        self as f64
    }
    fn to_int(self) -> i64 {
        self as i64
    }
}

impl FloatSample for f64 {
    fn from_int(sample: i64) -> Self {
        sample as f64
    }
    fn from_f64_sample(sample: f64) -> Self {
        sample
    }
    fn to_f64_sample(self) -> f64 {
        self
    }
    fn to_int(self) -> i64 {
        self as i64
    }
}

/// Scale integer samples of the given width into `[-1.0, 1.0]`.
///
/// Every sample is divided by [`BitDepth::factor`]. The most negative value of
/// the width maps to exactly `-1.0`, the most positive one to just below
/// `1.0`. Nothing is clamped: samples wider than `depth` come out with a
/// magnitude above one.
///
/// ```
/// use pcmconv::{normalize, BitDepth};
///
/// let samples: Vec<f32> = normalize(&[-32_768, 0, 16_384], BitDepth::BitDepth16);
/// assert_eq!(samples, vec![-1.0, 0.0, 0.5]);
/// ```
pub fn normalize<T: FloatSample>(samples: &[i64], depth: BitDepth) -> Vec<T> {
    let factor = depth.factor();

    samples
        .iter()
        .map(|&sample| T::from_f64_sample(sample as f64 / factor))
        .collect()
}

/// Inverse of [`normalize`]: scale back up by the width's factor and round to
/// the nearest integer, saturating at the `i64` bounds.
pub fn denormalize<T: FloatSample>(samples: &[T], depth: BitDepth) -> Vec<i64> {
    let factor = depth.factor();

    samples
        .iter()
        .map(|&sample| FloatCore::round(sample.to_f64_sample() * factor) as i64)
        .collect()
}

/// Widen integer samples to floats without any scaling.
pub fn widen<T: FloatSample>(samples: &[i64]) -> Vec<T> {
    samples.iter().map(|&sample| T::from_int(sample)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_normalize_16_bit_extremes() {
        let samples: Vec<f64> = normalize(&[-32_768, 32_767, 0], BitDepth::BitDepth16);

        assert_eq!(samples[0], -1.0);
        assert_eq!(samples[1], 32_767.0 / 32_768.0);
        assert!(samples[1] < 1.0);
        assert_eq!(samples[2], 0.0);

        let samples: Vec<f32> = normalize(&[-32_768, 32_767], BitDepth::BitDepth16);
        assert_eq!(samples, vec![-1.0, 0.9999695]);
    }

    #[test]
    fn test_normalize_each_width() {
        assert_eq!(normalize::<f64>(&[-128, 64], BitDepth::BitDepth8), vec![-1.0, 0.5]);
        assert_eq!(
            normalize::<f64>(&[-8_388_608, 4_194_304], BitDepth::BitDepth24),
            vec![-1.0, 0.5]
        );
        assert_eq!(
            normalize::<f64>(&[-2_147_483_648, 1_073_741_824], BitDepth::BitDepth32),
            vec![-1.0, 0.5]
        );
        assert_eq!(
            normalize::<f64>(&[i64::MIN, 0], BitDepth::BitDepth64),
            vec![-1.0, 0.0]
        );
    }

    #[test]
    fn test_normalize_does_not_clamp() {
        let samples: Vec<f64> = normalize(&[256, -512], BitDepth::BitDepth8);
        assert_eq!(samples, vec![2.0, -4.0]);
    }

    #[test]
    fn test_normalize_empty() {
        let samples: Vec<f32> = normalize(&[], BitDepth::BitDepth24);
        assert!(samples.is_empty());
    }

    #[test]
    fn test_widen_keeps_raw_values() {
        let input = [0, 1, -1, 32_767, -8_388_608, 4_294_967_296];
        let samples: Vec<f64> = widen(&input);

        assert_eq!(samples.len(), input.len());
        for (out, &sample) in samples.iter().zip(input.iter()) {
            assert_eq!(*out, sample as f64);
        }
    }

    #[test]
    fn test_denormalize_recovers_samples() {
        let cases: [(BitDepth, &[i64]); 4] = [
            (BitDepth::BitDepth8, &[-128, -1, 0, 1, 127]),
            (BitDepth::BitDepth16, &[-32_768, -1234, 0, 999, 32_767]),
            (BitDepth::BitDepth24, &[-8_388_608, -5, 0, 70_000, 8_388_607]),
            (BitDepth::BitDepth32, &[-2_147_483_648, 0, 2_147_483_647]),
        ];

        for (depth, input) in cases {
            let normalized: Vec<f64> = normalize(input, depth);
            assert_eq!(denormalize(&normalized, depth), input);
        }

        let normalized: Vec<f32> =
            normalize(&[-32_768, -3, 0, 12_345, 32_767], BitDepth::BitDepth16);
        assert_eq!(
            denormalize(&normalized, BitDepth::BitDepth16),
            vec![-32_768, -3, 0, 12_345, 32_767]
        );
    }

    #[test]
    fn test_denormalize_saturates() {
        let samples = denormalize(
            &[f64::INFINITY, f64::NEG_INFINITY, f64::NAN],
            BitDepth::BitDepth64,
        );
        assert_eq!(samples, vec![i64::MAX, i64::MIN, 0]);
    }

    #[test]
    fn test_float_sample_truncates() {
        assert_eq!(1.9f32.to_int(), 1);
        assert_eq!((-1.9f64).to_int(), -1);
        assert_eq!(f64::from_int(-42), -42.0);
        assert_eq!(f32::from_f64_sample(0.5), 0.5);
    }
}
