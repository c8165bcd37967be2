use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tracing::warn;

use super::encoding::{self, DecodedText, TextEncoding};

/// Read a subtitle file, decoding with fallback and normalizing line endings to `\n`
pub fn read_subtitle_file(path: &Path) -> Result<DecodedText> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read SRT file: {}", path.display()))?;

    let mut decoded = encoding::decode(&bytes);
    if decoded.encoding == TextEncoding::Latin9 {
        warn!(
            "{} is not valid UTF-8, decoding as {}",
            path.display(),
            decoded.encoding.as_str()
        );
    }
    decoded.text = normalize_newlines(&decoded.text);
    Ok(decoded)
}

fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Replace `path` with `content` without ever leaving it half written
///
/// The content is written to a temporary file next to the target and then
/// renamed over it.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    tmp.write_all(content).context("Failed to write temporary file")?;
    tmp.flush().context("Failed to flush temporary file")?;

    if let Ok(metadata) = std::fs::metadata(path) {
        std::fs::set_permissions(tmp.path(), metadata.permissions())
            .context("Failed to copy file permissions")?;
    }

    tmp.persist(path)
        .with_context(|| format!("Failed to replace {}", path.display()))?;
    Ok(())
}
