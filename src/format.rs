/// Channel layout and sample rate of a buffer
///
/// `Format` is a plain `Copy` value: every conversion hands the output its own
/// copy, so changing the format of one buffer never affects another.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Hash)]
pub struct Format {
    /// number of audio channels in the sample data, channels are interleaved
    pub num_channels: u16,
    /// sample rate, typical values are `44_100`, `48_000` or `96_000`
    pub sample_rate: u32,
}

impl Format {
    /// Create a new [`Format`]
    pub const fn new(num_channels: u16, sample_rate: u32) -> Self {
        Format {
            num_channels,
            sample_rate,
        }
    }

    /// Channel count used when dividing samples into frames.
    ///
    /// A zero channel count is treated as mono.
    pub const fn frame_width(&self) -> usize {
        if self.num_channels == 0 {
            1
        } else {
            self.num_channels as usize
        }
    }
}

/// Number of whole frames in `num_samples` interleaved samples.
///
/// Returns 0 when there is no format to go by.
pub(crate) fn frames(format: Option<&Format>, num_samples: usize) -> usize {
    match format {
        Some(format) => num_samples / format.frame_width(),
        None => 0,
    }
}
