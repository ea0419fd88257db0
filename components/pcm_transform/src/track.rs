// components/pcm_transform/src/track.rs
use crate::error::TransformError;

pub const HEADER_LEN: usize = 8;
const SAMPLE_BYTES: usize = 2;

/// The opaque 8-byte track header.
///
/// MSU-1 tracks store `"MSU1"` followed by a little-endian loop point here.
/// The bytes are never interpreted beyond [`Header::loop_point`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header([u8; HEADER_LEN]);

impl Header {
    pub const fn new(bytes: [u8; HEADER_LEN]) -> Self {
        Self(bytes)
    }

    pub const fn bytes(&self) -> &[u8; HEADER_LEN] {
        &self.0
    }

    /// Loop point in samples, as stored in the last four header bytes
    pub fn loop_point(&self) -> u32 {
        u32::from_le_bytes([self.0[4], self.0[5], self.0[6], self.0[7]])
    }
}

/// How many samples saturated while applying a gain
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClipStats {
    pub total: usize,
    pub clipped: usize,
}

/// A decoded track: header plus signed 16-bit samples
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PcmTrack {
    pub header: Header,
    pub samples: Vec<i16>,
}

impl PcmTrack {
    /// Split a raw buffer into header and little-endian samples.
    ///
    /// A payload with a trailing odd byte is rejected rather than truncated.
    pub fn decode(buffer: &[u8]) -> Result<Self, TransformError> {
        if buffer.len() < HEADER_LEN {
            return Err(TransformError::MissingHeader(buffer.len()));
        }
        let (header, payload) = buffer.split_at(HEADER_LEN);
        if payload.len() % SAMPLE_BYTES != 0 {
            return Err(TransformError::MalformedBuffer(payload.len()));
        }

        let mut header_bytes = [0u8; HEADER_LEN];
        header_bytes.copy_from_slice(header);

        let samples = payload
            .chunks_exact(SAMPLE_BYTES)
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
            .collect();

        Ok(Self {
            header: Header::new(header_bytes),
            samples,
        })
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_LEN + self.samples.len() * SAMPLE_BYTES);
        out.extend_from_slice(self.header.bytes());
        for sample in &self.samples {
            out.extend_from_slice(&sample.to_le_bytes());
        }
        out
    }

    /// Multiply every sample by `factor`, truncating toward zero and
    /// saturating at the i16 range.
    pub fn apply_gain(&mut self, factor: f64) -> ClipStats {
        let mut stats = ClipStats {
            total: self.samples.len(),
            clipped: 0,
        };
        for sample in &mut self.samples {
            let scaled = (*sample as f64 * factor).trunc();
            if scaled < i16::MIN as f64 || scaled > i16::MAX as f64 {
                stats.clipped += 1;
            }
            *sample = scaled.clamp(i16::MIN as f64, i16::MAX as f64) as i16;
        }
        stats
    }
}

/// Scale the PCM payload of `buffer` by `factor`, leaving the header untouched.
///
/// The output always has the same length as the input.
pub fn transform(buffer: &[u8], factor: f64) -> Result<Vec<u8>, TransformError> {
    let mut track = PcmTrack::decode(buffer)?;
    track.apply_gain(factor);
    Ok(track.encode())
}
