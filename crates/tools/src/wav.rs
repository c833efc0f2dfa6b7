//! WAV file output for rendered audio

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// Write mono f32 samples to a 16-bit PCM WAV file
pub fn write_wav_file(samples: &[f32], path: &Path, sample_rate: u32) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec)
        .with_context(|| format!("Failed to create WAV file: {:?}", path))?;

    for sample in samples {
        let amplitude = (sample * 32767.0).clamp(-32767.0, 32767.0) as i16;
        writer.write_sample(amplitude)?;
    }

    writer.finalize()?;
    info!("Wrote {} samples to {:?}", samples.len(), path);
    Ok(())
}
