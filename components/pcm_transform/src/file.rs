use crate::error::TransformError;
use crate::track::{ClipStats, PcmTrack};
use std::path::Path;

/// Read `input`, scale its samples by `factor` and overwrite `output`.
pub fn adjust_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    factor: f64,
) -> Result<ClipStats, TransformError> {
    let input = input.as_ref();
    let output = output.as_ref();

    let buffer = std::fs::read(input).map_err(|e| TransformError::io(input, e))?;
    let mut track = PcmTrack::decode(&buffer)?;
    let stats = track.apply_gain(factor);

    tracing::debug!(
        "{}: {} samples, loop point {}, {} clipped",
        input.display(),
        stats.total,
        track.header.loop_point(),
        stats.clipped
    );

    std::fs::write(output, track.encode()).map_err(|e| TransformError::io(output, e))?;
    Ok(stats)
}
