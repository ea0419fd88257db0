//! Gain transform for raw MSU-1 style PCM tracks
//!
//! A track is an 8-byte header followed by little-endian signed 16-bit
//! samples. [`transform`] scales the samples and passes the header through.

mod error;
mod file;
mod track;

pub use error::TransformError;
pub use file::adjust_file;
pub use track::{transform, ClipStats, Header, PcmTrack, HEADER_LEN};
