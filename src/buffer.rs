use crate::bit_depth::BitDepth;
use crate::conversion::{FloatSample, denormalize, normalize, widen};
use crate::format::{Format, frames};
use alloc::vec::Vec;

/// Audio buffer with its PCM data stored as integers
#[derive(Debug, PartialEq, Clone, Default)]
pub struct IntBuffer {
    /// Channel layout and sample rate, if known
    pub format: Option<Format>,
    /// Interleaved samples
    pub data: Vec<i64>,
    /// Width the samples were encoded with, `None` when unknown
    pub source_bit_depth: Option<BitDepth>,
}

impl IntBuffer {
    /// Create a new [`IntBuffer`] with an unknown source bit depth
    pub fn new(data: Vec<i64>, format: Format) -> Self {
        IntBuffer {
            format: Some(format),
            data,
            source_bit_depth: None,
        }
    }

    /// Tag the buffer with the bit depth its samples were encoded with
    pub fn with_bit_depth(mut self, bit_depth: BitDepth) -> Self {
        self.source_bit_depth = Some(bit_depth);
        self
    }

    /// Format of the buffer
    pub fn format(&self) -> Option<Format> {
        self.format
    }

    /// Number of frames in the buffer, channels counting as one when zero
    pub fn num_frames(&self) -> usize {
        frames(self.format.as_ref(), self.data.len())
    }

    /// Declared source bit depth, or the one guessed from the samples.
    ///
    /// See [`BitDepth::infer`] for how the guess is made.
    pub fn bit_depth(&self) -> BitDepth {
        BitDepth::infer(&self.data, self.source_bit_depth)
    }

    /// Copy of the samples widened to `f64` as is, no scaling applied.
    ///
    /// ```
    /// use pcmconv::{Format, IntBuffer};
    ///
    /// let buffer = IntBuffer::new(vec![-2, 0, 32_767], Format::new(1, 48_000));
    /// assert_eq!(buffer.to_float_buffer().data, vec![-2.0, 0.0, 32_767.0]);
    /// ```
    pub fn to_float_buffer(&self) -> FloatBuffer {
        FloatBuffer {
            format: self.format,
            data: widen(&self.data),
        }
    }

    /// Copy of the samples normalized to `[-1.0, 1.0]` as `f32`.
    ///
    /// ```
    /// use pcmconv::{BitDepth, Format, IntBuffer};
    ///
    /// let buffer = IntBuffer::new(vec![-32_768, 16_384], Format::new(2, 44_100));
    /// assert_eq!(buffer.to_float32_buffer().data, vec![-1.0, 0.5]);
    ///
    /// let buffer = buffer.with_bit_depth(BitDepth::BitDepth24);
    /// assert_eq!(buffer.to_float32_buffer().data, vec![-1.0 / 256.0, 1.0 / 512.0]);
    /// ```
    pub fn to_float32_buffer(&self) -> Float32Buffer {
        Float32Buffer {
            format: self.format,
            data: self.normalized(),
        }
    }

    /// Same as [`IntBuffer::to_float32_buffer`] but with `f64` samples
    pub fn to_normalized_float_buffer(&self) -> FloatBuffer {
        FloatBuffer {
            format: self.format,
            data: self.normalized(),
        }
    }

    /// Deep copy of the buffer
    pub fn to_int_buffer(&self) -> IntBuffer {
        self.clone()
    }

    fn normalized<T: FloatSample>(&self) -> Vec<T> {
        normalize(&self.data, self.bit_depth())
    }
}

/// Audio buffer with its PCM data stored as `f64`
#[derive(Debug, PartialEq, Clone, Default)]
pub struct FloatBuffer {
    /// Channel layout and sample rate, if known
    pub format: Option<Format>,
    /// Interleaved samples
    pub data: Vec<f64>,
}

impl FloatBuffer {
    /// Create a new [`FloatBuffer`]
    pub fn new(data: Vec<f64>, format: Format) -> Self {
        FloatBuffer {
            format: Some(format),
            data,
        }
    }

    /// Format of the buffer
    pub fn format(&self) -> Option<Format> {
        self.format
    }

    /// Number of frames in the buffer, channels counting as one when zero
    pub fn num_frames(&self) -> usize {
        frames(self.format.as_ref(), self.data.len())
    }

    /// Deep copy of the buffer
    pub fn to_float_buffer(&self) -> FloatBuffer {
        self.clone()
    }

    /// Copy of the samples narrowed to `f32`
    pub fn to_float32_buffer(&self) -> Float32Buffer {
        Float32Buffer {
            format: self.format,
            data: self.data.iter().map(|&s| s as f32).collect(),
        }
    }

    /// Copy of the samples truncated toward zero, source bit depth unknown
    pub fn to_int_buffer(&self) -> IntBuffer {
        IntBuffer {
            format: self.format,
            data: self.data.iter().map(|s| s.to_int()).collect(),
            source_bit_depth: None,
        }
    }

    /// Scale normalized samples back up to integers of the given width
    pub fn denormalize(&self, bit_depth: BitDepth) -> IntBuffer {
        IntBuffer {
            format: self.format,
            data: denormalize(&self.data, bit_depth),
            source_bit_depth: Some(bit_depth),
        }
    }
}

/// Audio buffer with its PCM data stored as `f32`
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Float32Buffer {
    /// Channel layout and sample rate, if known
    pub format: Option<Format>,
    /// Interleaved samples
    pub data: Vec<f32>,
}

impl Float32Buffer {
    /// Create a new [`Float32Buffer`]
    pub fn new(data: Vec<f32>, format: Format) -> Self {
        Float32Buffer {
            format: Some(format),
            data,
        }
    }

    /// Format of the buffer
    pub fn format(&self) -> Option<Format> {
        self.format
    }

    /// Number of frames in the buffer, channels counting as one when zero
    pub fn num_frames(&self) -> usize {
        frames(self.format.as_ref(), self.data.len())
    }

    /// Copy of the samples widened to `f64`
    pub fn to_float_buffer(&self) -> FloatBuffer {
        FloatBuffer {
            format: self.format,
            data: self.data.iter().map(|s| s.to_f64_sample()).collect(),
        }
    }

    /// Deep copy of the buffer
    pub fn to_float32_buffer(&self) -> Float32Buffer {
        self.clone()
    }

    /// Copy of the samples truncated toward zero, source bit depth unknown
    pub fn to_int_buffer(&self) -> IntBuffer {
        IntBuffer {
            format: self.format,
            data: self.data.iter().map(|s| s.to_int()).collect(),
            source_bit_depth: None,
        }
    }

    /// Scale normalized samples back up to integers of the given width
    pub fn denormalize(&self, bit_depth: BitDepth) -> IntBuffer {
        IntBuffer {
            format: self.format,
            data: denormalize(&self.data, bit_depth),
            source_bit_depth: Some(bit_depth),
        }
    }
}

/// Any of the supported buffer kinds
///
/// ```
/// use pcmconv::{Buffer, Format, IntBuffer};
///
/// let buffer = Buffer::from(IntBuffer::new(vec![0, 64, -128, 127], Format::new(2, 8_000)));
///
/// assert_eq!(buffer.num_frames(), 2);
/// assert_eq!(buffer.to_float32_buffer().data, vec![0.0, 0.5, -1.0, 127.0 / 128.0]);
/// ```
#[derive(Debug, PartialEq, Clone)]
pub enum Buffer {
    /// Integer samples
    Int(IntBuffer),
    /// `f64` samples
    Float(FloatBuffer),
    /// `f32` samples
    Float32(Float32Buffer),
}

impl Buffer {
    /// Format of the buffer
    pub fn format(&self) -> Option<Format> {
        match self {
            Buffer::Int(buffer) => buffer.format(),
            Buffer::Float(buffer) => buffer.format(),
            Buffer::Float32(buffer) => buffer.format(),
        }
    }

    /// Number of samples in the buffer
    pub fn len(&self) -> usize {
        match self {
            Buffer::Int(buffer) => buffer.data.len(),
            Buffer::Float(buffer) => buffer.data.len(),
            Buffer::Float32(buffer) => buffer.data.len(),
        }
    }

    /// Returns true if the buffer holds no samples
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of frames in the buffer, channels counting as one when zero
    pub fn num_frames(&self) -> usize {
        match self {
            Buffer::Int(buffer) => buffer.num_frames(),
            Buffer::Float(buffer) => buffer.num_frames(),
            Buffer::Float32(buffer) => buffer.num_frames(),
        }
    }

    /// Convert to an [`IntBuffer`]
    pub fn to_int_buffer(&self) -> IntBuffer {
        match self {
            Buffer::Int(buffer) => buffer.to_int_buffer(),
            Buffer::Float(buffer) => buffer.to_int_buffer(),
            Buffer::Float32(buffer) => buffer.to_int_buffer(),
        }
    }

    /// Convert to a [`FloatBuffer`]
    pub fn to_float_buffer(&self) -> FloatBuffer {
        match self {
            Buffer::Int(buffer) => buffer.to_float_buffer(),
            Buffer::Float(buffer) => buffer.to_float_buffer(),
            Buffer::Float32(buffer) => buffer.to_float_buffer(),
        }
    }

    /// Convert to a [`Float32Buffer`]
    pub fn to_float32_buffer(&self) -> Float32Buffer {
        match self {
            Buffer::Int(buffer) => buffer.to_float32_buffer(),
            Buffer::Float(buffer) => buffer.to_float32_buffer(),
            Buffer::Float32(buffer) => buffer.to_float32_buffer(),
        }
    }
}

impl From<IntBuffer> for Buffer {
    fn from(buffer: IntBuffer) -> Self {
        Buffer::Int(buffer)
    }
}

impl From<FloatBuffer> for Buffer {
    fn from(buffer: FloatBuffer) -> Self {
        Buffer::Float(buffer)
    }
}

impl From<Float32Buffer> for Buffer {
    fn from(buffer: Float32Buffer) -> Self {
        Buffer::Float32(buffer)
    }
}

/// Number of frames in a buffer that may not be there at all.
///
/// ```
/// use pcmconv::{frame_count, Buffer, Format, IntBuffer};
///
/// let buffer = Buffer::from(IntBuffer::new(vec![0; 8], Format::new(2, 48_000)));
///
/// assert_eq!(frame_count(Some(&buffer)), 4);
/// assert_eq!(frame_count(None), 0);
/// ```
pub fn frame_count(buffer: Option<&Buffer>) -> usize {
    buffer.map_or(0, Buffer::num_frames)
}
