use super::error::{SrtError, SrtResult};
use super::timestamp;

const TIME_SEPARATOR: &str = " --> ";

/// A single subtitle entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleEntry {
    pub index: String,   // as read, digits only
    pub start_time: u64, // milliseconds
    pub end_time: u64,   // milliseconds
    pub lines: Vec<String>,
}

impl SubtitleEntry {
    pub fn new(index: String, start_time: u64, end_time: u64, lines: Vec<String>) -> Self {
        Self {
            index,
            start_time,
            end_time,
            lines,
        }
    }

    /// Parse one entry block: index line, time range line, then text lines
    pub fn parse(block: &str) -> SrtResult<Self> {
        let mut lines = block.trim().lines();

        let index_line = lines.next().unwrap_or_default();
        if index_line.is_empty() || !index_line.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SrtError::Format(format!("Invalid SRT index: '{}'", index_line)));
        }
        let index = index_line.to_string();

        let time_line = lines.next().ok_or_else(|| {
            SrtError::Format(format!("Entry {} has no time range", index))
        })?;
        let parts: Vec<&str> = time_line.split(TIME_SEPARATOR).collect();
        if parts.len() != 2 {
            return Err(SrtError::Format(format!("Invalid time range: '{}'", time_line)));
        }

        let start_time = timestamp::decode(parts[0])?;
        let end_time = timestamp::decode(parts[1])?;
        let text = lines.map(str::to_string).collect();

        Ok(Self::new(index, start_time, end_time, text))
    }

    /// Convert to SRT format string under a new sequential index
    pub fn to_srt(&self, index: usize) -> SrtResult<String> {
        Ok(format!(
            "{}\n{}{}{}\n{}\n",
            index,
            timestamp::encode(self.start_time)?,
            TIME_SEPARATOR,
            timestamp::encode(self.end_time)?,
            self.lines.join("\n")
        ))
    }
}

/// Split SRT content into trimmed, non-empty entry blocks
pub fn split_blocks(content: &str) -> impl Iterator<Item = &str> {
    content
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
}
