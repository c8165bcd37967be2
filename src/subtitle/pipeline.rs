use tracing::debug;

use super::clean::strip_annotations;
use super::error::SrtResult;
use super::rebalance::rebalance_three_to_two;
use super::retime::{RateConversion, ShiftOffset};
use super::srt::{split_blocks, SubtitleEntry};

/// Which transformations to apply; absent options leave entries untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineConfig {
    pub fps: Option<RateConversion>,
    pub shift: Option<ShiftOffset>,
    pub clear: bool,
    pub three: bool,
}

impl PipelineConfig {
    pub fn is_identity(&self) -> bool {
        self.fps.is_none() && self.shift.is_none() && !self.clear && !self.three
    }
}

/// Apply retime, shift, clean and rebalance, in that order
///
/// Each stage is skipped unless configured. Entries are independent, so
/// [`process_document`] only has to keep them in input order.
pub fn transform_entry(mut entry: SubtitleEntry, config: &PipelineConfig) -> SrtResult<SubtitleEntry> {
    if let Some(rate) = &config.fps {
        entry.start_time = rate.convert(entry.start_time)?;
        entry.end_time = rate.convert(entry.end_time)?;
        debug!(index = %entry.index, start = entry.start_time, end = entry.end_time, "retimed");
    }

    if let Some(shift) = &config.shift {
        entry.start_time = shift.apply(entry.start_time)?;
        entry.end_time = shift.apply(entry.end_time)?;
        debug!(index = %entry.index, start = entry.start_time, end = entry.end_time, "shifted");
    }

    if config.clear {
        let before = entry.lines.len();
        entry.lines = strip_annotations(entry.lines);
        if entry.lines.len() != before {
            debug!(index = %entry.index, removed = before - entry.lines.len(), "cleared annotations");
        }
    }

    if config.three && entry.lines.len() == 3 {
        entry.lines = rebalance_three_to_two(&entry.lines).into();
        debug!(index = %entry.index, "rebalanced three lines into two");
    }

    Ok(entry)
}

/// Parse, transform and render one raw block under a new index
pub fn process_entry(block: &str, index: usize, config: &PipelineConfig) -> SrtResult<String> {
    let entry = SubtitleEntry::parse(block)?;
    transform_entry(entry, config)?.to_srt(index)
}

/// Result of transforming a whole document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedDocument {
    pub content: String,
    pub entries: usize,
}

/// Transform every entry in order, renumbering from 1
///
/// Nothing is returned unless every entry succeeds.
pub fn process_document(content: &str, config: &PipelineConfig) -> SrtResult<ProcessedDocument> {
    let mut output = String::with_capacity(content.len());
    let mut entries = 0;

    for (index, block) in split_blocks(content).enumerate().map(|(i, b)| (i + 1, b)) {
        output.push_str(&process_entry(block, index, config)?);
        output.push('\n');
        entries = index;
    }

    Ok(ProcessedDocument {
        content: output,
        entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subtitle::error::SrtError;

    fn config() -> PipelineConfig {
        PipelineConfig::default()
    }

    #[test]
    fn test_identity_renumbers_and_normalizes() {
        let input = "5\n00:00:01,000 --> 00:00:02,000\nHello\n\n9\n0:0:3,5 --> 00:00:04,000\nWorld\n";
        let doc = process_document(input, &config()).unwrap();
        assert_eq!(doc.entries, 2);
        assert_eq!(
            doc.content,
            "1\n00:00:01,000 --> 00:00:02,000\nHello\n\n2\n00:00:03,005 --> 00:00:04,000\nWorld\n\n"
        );
    }

    #[test]
    fn test_clear_drops_whole_line() {
        let cfg = PipelineConfig { clear: true, ..config() };
        let out = process_entry("1\n00:00:01,000 --> 00:00:02,000\nHello [cough] world\n", 1, &cfg).unwrap();
        assert_eq!(out, "1\n00:00:01,000 --> 00:00:02,000\n\n");
    }

    #[test]
    fn test_fps_conversion() {
        let cfg = PipelineConfig {
            fps: Some(RateConversion::new("24".parse().unwrap(), "25".parse().unwrap()).unwrap()),
            ..config()
        };
        let out = process_entry("1\n00:00:10,000 --> 00:00:20,000\nx", 1, &cfg).unwrap();
        assert_eq!(out, "1\n00:00:09,600 --> 00:00:19,200\nx\n");
    }

    #[test]
    fn test_negative_shift_clamps() {
        let cfg = PipelineConfig {
            shift: Some(ShiftOffset::new("-5".parse().unwrap())),
            ..config()
        };
        let out = process_entry("1\n00:00:03,000 --> 00:00:04,000\nx", 1, &cfg).unwrap();
        assert_eq!(out, "1\n00:00:00,000 --> 00:00:00,000\nx\n");
    }

    #[test]
    fn test_retime_happens_before_shift() {
        let cfg = PipelineConfig {
            fps: Some(RateConversion::new("1".parse().unwrap(), "2".parse().unwrap()).unwrap()),
            shift: Some(ShiftOffset::new("1".parse().unwrap())),
            ..config()
        };
        let out = process_entry("1\n00:00:10,000 --> 00:00:20,000", 1, &cfg).unwrap();
        assert_eq!(out, "1\n00:00:06,000 --> 00:00:11,000\n\n");
    }

    #[test]
    fn test_retime_range_checked_before_shift() {
        let cfg = PipelineConfig {
            fps: Some(RateConversion::new("2".parse().unwrap(), "1".parse().unwrap()).unwrap()),
            shift: Some(ShiftOffset::new("-360000".parse().unwrap())),
            ..config()
        };
        let err = process_entry("1\n60:00:00,000 --> 60:00:01,000", 1, &cfg).unwrap_err();
        assert!(matches!(err, SrtError::Range(_)));
    }

    #[test]
    fn test_three_lines_rebalanced_after_clear() {
        let cfg = PipelineConfig { clear: true, three: true, ..config() };
        let block = "1\n00:00:01,000 --> 00:00:02,000\n[music]\na b c\nd e\nf";
        let out = process_entry(block, 1, &cfg).unwrap();
        assert_eq!(out, "1\n00:00:01,000 --> 00:00:02,000\na b c\nd e f\n");
    }

    #[test]
    fn test_rebalance_only_touches_three_lines() {
        let cfg = PipelineConfig { three: true, ..config() };
        let block = "1\n00:00:01,000 --> 00:00:02,000\na\nb\nc\nd";
        let out = process_entry(block, 1, &cfg).unwrap();
        assert_eq!(out, "1\n00:00:01,000 --> 00:00:02,000\na\nb\nc\nd\n");

        let out = process_entry("1\n00:00:01,000 --> 00:00:02,000\na b c\nd e\nf", 1, &config()).unwrap();
        assert_eq!(out, "1\n00:00:01,000 --> 00:00:02,000\na b c\nd e\nf\n");
    }

    #[test]
    fn test_failure_aborts_document() {
        let input = "1\n00:00:01,000 --> 00:00:02,000\nok\n\nbad\n00:00:01,000 --> 00:00:02,000\n";
        assert!(matches!(process_document(input, &config()), Err(SrtError::Format(_))));
    }

    #[test]
    fn test_huge_input_index_is_renumbered() {
        let input = "99999999999999999999999999\n00:00:01,000 --> 00:00:02,000\nx\n";
        let doc = process_document(input, &config()).unwrap();
        assert_eq!(doc.content, "1\n00:00:01,000 --> 00:00:02,000\nx\n\n");
    }

    #[test]
    fn test_empty_document() {
        let doc = process_document("\n\n  \n", &config()).unwrap();
        assert_eq!(doc.entries, 0);
        assert!(doc.content.is_empty());
    }
}
