pub mod args;
pub mod config;

use anyhow::{Context, Result};
use args::Cli;
use clap::Parser;
use std::io::Write;
use tracing::info;

use crate::subtitle::process_document;
use crate::utils::{encoding, fs};

/// Execute the CLI with parsed arguments
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&cli, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Transform `cli.file`, writing the result back in place or to `out`
///
/// The whole document is transformed before anything is written, so a failing
/// entry never leaves the original file partially rewritten.
pub fn execute(cli: &Cli, out: &mut dyn Write) -> Result<usize> {
    let file_config = config::load(cli.config.as_deref())?;
    let pipeline = config::resolve(cli, &file_config)?;
    if pipeline.is_identity() {
        info!("No transformation requested, renumbering only");
    }

    let decoded = fs::read_subtitle_file(&cli.file)?;
    let document = process_document(&decoded.text, &pipeline)
        .with_context(|| format!("Failed to process {}", cli.file.display()))?;

    if cli.in_place {
        let bytes = encoding::encode(&document.content, decoded.encoding, decoded.bom)
            .with_context(|| format!("Failed to encode {}", cli.file.display()))?;
        fs::write_atomic(&cli.file, &bytes)?;
        info!(
            "Rewrote {} entries in {} ({})",
            document.entries,
            cli.file.display(),
            decoded.encoding.as_str()
        );
    } else {
        out.write_all(document.content.as_bytes())
            .context("Failed to write output")?;
        info!("Processed {} entries from {}", document.entries, cli.file.display());
    }

    Ok(document.entries)
}

fn setup_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    if quiet {
        // Suppress all output except errors
        return;
    }

    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    const SAMPLE: &str = "1\n00:00:01,000 --> 00:00:02,000\nHello [cough] world\n\n\
                          2\n00:00:10,000 --> 00:00:12,000\nStill here\n";

    fn cli_for(path: &Path, extra: &[&str]) -> Cli {
        let config = path.with_file_name("no-config.toml");
        std::fs::write(&config, "").unwrap();
        let mut argv = vec!["srttool".to_string(), "--config".to_string(), config.display().to_string()];
        argv.extend(extra.iter().map(|s| s.to_string()));
        argv.push(path.display().to_string());
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_execute_prints_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movie.srt");
        std::fs::write(&path, SAMPLE).unwrap();

        let mut out = Vec::new();
        let entries = execute(&cli_for(&path, &["-c"]), &mut out).unwrap();
        assert_eq!(entries, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1\n00:00:01,000 --> 00:00:02,000\n\n\n2\n00:00:10,000 --> 00:00:12,000\nStill here\n\n"
        );
        assert_eq!(std::fs::read_to_string(&path).unwrap(), SAMPLE);
    }

    #[test]
    fn test_execute_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movie.srt");
        std::fs::write(&path, SAMPLE).unwrap();

        let mut out = Vec::new();
        execute(&cli_for(&path, &["-i", "--shift", "-5"]), &mut out).unwrap();
        assert!(out.is_empty());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "1\n00:00:00,000 --> 00:00:00,000\nHello [cough] world\n\n\
             2\n00:00:05,000 --> 00:00:07,000\nStill here\n\n"
        );
    }

    #[test]
    fn test_failure_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.srt");
        let broken = format!("{}\nnot-a-number\n00:00:01,000 --> 00:00:02,000\nx\n", SAMPLE);
        std::fs::write(&path, &broken).unwrap();

        let mut out = Vec::new();
        assert!(execute(&cli_for(&path, &["-i", "-c"]), &mut out).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), broken);
    }

    #[test]
    fn test_latin9_round_trip_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("legacy.srt");
        let mut bytes = b"3\n00:00:01,000 --> 00:00:02,000\nCaf".to_vec();
        bytes.extend_from_slice(&[0xE9, b' ', 0xA4, b'\n']);
        std::fs::write(&path, &bytes).unwrap();

        let mut out = Vec::new();
        execute(&cli_for(&path, &["-i"]), &mut out).unwrap();

        let mut expected = b"1\n00:00:01,000 --> 00:00:02,000\nCaf".to_vec();
        expected.extend_from_slice(&[0xE9, b' ', 0xA4, b'\n', b'\n']);
        assert_eq!(std::fs::read(&path).unwrap(), expected);
    }

    #[test]
    fn test_latin9_to_stdout_is_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("legacy.srt");
        let mut bytes = b"1\n00:00:01,000 --> 00:00:02,000\n".to_vec();
        bytes.extend_from_slice(&[0xA4, b'5', b'\n']);
        std::fs::write(&path, &bytes).unwrap();

        let mut out = Vec::new();
        execute(&cli_for(&path, &[]), &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("€5\n"));
    }
}
