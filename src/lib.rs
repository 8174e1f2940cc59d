//! Basic `no_std` library for converting PCM sample buffers between integer
//! and floating point representations.
//!
//! Normalizing integer samples, guessing the bit depth when it isn't known:
//! ```
//! use pcmconv::{BitDepth, Format, IntBuffer};
//!
//! let buffer = IntBuffer::new(vec![-32_768, 0, 16_384, 32_767], Format::new(2, 48_000));
//!
//! // the largest positive sample fits in 16 bits
//! assert_eq!(buffer.bit_depth(), BitDepth::BitDepth16);
//! assert_eq!(buffer.num_frames(), 2);
//!
//! let floats = buffer.to_float32_buffer();
//! assert_eq!(floats.data, vec![-1.0, 0.0, 0.5, 32_767.0 / 32_768.0]);
//! assert_eq!(floats.format, buffer.format);
//! ```
//!
//! Declaring the bit depth skips the guess:
//! ```
//! use pcmconv::{BitDepth, Format, IntBuffer};
//!
//! let buffer = IntBuffer::new(vec![-128, 64], Format::new(1, 8_000))
//!     .with_bit_depth(BitDepth::BitDepth24);
//!
//! assert_eq!(buffer.to_float32_buffer().data, vec![-128.0 / 8_388_608.0, 64.0 / 8_388_608.0]);
//! ```
//!
//! Widening samples without any scaling, and working with slices directly:
//! ```
//! use pcmconv::{denormalize, normalize, widen, BitDepth, Format, IntBuffer};
//!
//! let buffer = IntBuffer::new(vec![1, -1, 300], Format::new(1, 44_100));
//! assert_eq!(buffer.to_float_buffer().data, vec![1.0, -1.0, 300.0]);
//!
//! let raw: Vec<f32> = widen(&[1, -1, 300]);
//! assert_eq!(raw, vec![1.0, -1.0, 300.0]);
//!
//! let normalized: Vec<f64> = normalize(&[-8_388_608, 8_388_607], BitDepth::BitDepth24);
//! assert_eq!(denormalize(&normalized, BitDepth::BitDepth24), vec![-8_388_608, 8_388_607]);
//! ```

#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod bit_depth;
mod buffer;
mod conversion;
mod error;
mod format;

pub use bit_depth::BitDepth;
pub use buffer::{Buffer, Float32Buffer, FloatBuffer, IntBuffer, frame_count};
pub use conversion::{FloatSample, denormalize, normalize, widen};
pub use error::Error;
pub use format::Format;
