//! Rendering a thump to WAV bytes or to a file.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::SynthResult;
use crate::params::SynthParams;
use crate::quantize::OverflowPolicy;
use crate::synth::synthesize_with;
use crate::wav::WavResult;

/// Renders a thump to an in-memory WAV file, saturating on overflow.
pub fn render(params: &SynthParams) -> SynthResult<WavResult> {
    render_with(params, OverflowPolicy::Saturate)
}

/// Renders a thump to an in-memory WAV file with an explicit overflow policy.
pub fn render_with(params: &SynthParams, policy: OverflowPolicy) -> SynthResult<WavResult> {
    let sequence = synthesize_with(params, policy)?;
    Ok(WavResult::from_sequence(&sequence)?)
}

/// Renders a thump and writes it to `path`.
///
/// The file either appears complete or not at all: bytes go to a temporary
/// file next to `path`, which is renamed over `path` only after a successful
/// flush. The parent directory must already exist.
pub fn render_to_path(params: &SynthParams, path: impl AsRef<Path>) -> SynthResult<WavResult> {
    let result = render(params)?;
    write_atomically(path.as_ref(), &result.wav_data)?;
    Ok(result)
}

fn write_atomically(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Dropping the temp file on an early return removes it.
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|err| err.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SynthError;
    use crate::wav::compute_pcm_hash;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_reference() {
        let result = render(&SynthParams::thump()).unwrap();
        assert_eq!(result.num_frames, 8820);
        assert_eq!(result.wav_data.len(), 44 + 8820 * 2);
        assert_eq!(compute_pcm_hash(&result.wav_data), Some(result.pcm_hash));
    }

    #[test]
    fn test_render_to_path_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("thump.wav");

        let result = render_to_path(&SynthParams::thump(), &path).unwrap();

        let written = std::fs::read(&path).unwrap();
        assert_eq!(written, result.wav_data);
    }

    #[test]
    fn test_render_to_path_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("thump.wav");
        std::fs::write(&path, b"stale").unwrap();

        let result = render_to_path(&SynthParams::thump(), &path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), result.wav_data);
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("thump.wav");

        let err = render_to_path(&SynthParams::thump(), &path).unwrap_err();
        assert!(matches!(err, SynthError::Io(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_domain_error_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("thump.wav");
        let params = SynthParams::new(60.0, 0.2, 1.0, 0, 15.0);

        let err = render_to_path(&params, &path).unwrap_err();
        assert!(err.is_domain_error());
        assert!(!path.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_reject_policy_surfaces_overflow() {
        let params = SynthParams::new(60.0, 0.2, 2.0, 44100, 15.0);
        assert!(matches!(
            render_with(&params, OverflowPolicy::Reject),
            Err(SynthError::RangeOverflow { .. })
        ));
        assert!(render(&params).is_ok());
    }
}
