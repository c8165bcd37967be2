use super::error::{SrtError, SrtResult};

const MS_PER_HOUR: u64 = 3_600_000;
const MS_PER_MINUTE: u64 = 60_000;
const MS_PER_SECOND: u64 = 1_000;

/// First millisecond count that no longer fits in two hour digits
pub const MAX_ENCODABLE_MS: u64 = 100 * MS_PER_HOUR;

/// Parse time from SRT format: HH:MM:SS,mmm
///
/// Minutes and seconds are not range checked, so `00:99:99,999` decodes.
pub fn decode(s: &str) -> SrtResult<u64> {
    let invalid = || SrtError::Format(format!("Invalid timestamp: '{}'", s));

    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 3 {
        return Err(invalid());
    }
    let (seconds, millis) = parts[2].split_once(',').ok_or_else(invalid)?;

    let field = |text: &str| -> SrtResult<u64> {
        let text = text.trim();
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        text.parse().map_err(|_| invalid())
    };

    let hours = field(parts[0])?;
    let minutes = field(parts[1])?;
    let seconds = field(seconds)?;
    let millis = field(millis)?;

    hours
        .checked_mul(MS_PER_HOUR)
        .and_then(|ms| ms.checked_add(minutes.checked_mul(MS_PER_MINUTE)?))
        .and_then(|ms| ms.checked_add(seconds.checked_mul(MS_PER_SECOND)?))
        .and_then(|ms| ms.checked_add(millis))
        .ok_or_else(|| SrtError::Range(format!("Timestamp too large: '{}'", s)))
}

/// Format time in SRT format: HH:MM:SS,mmm
pub fn encode(ms: u64) -> SrtResult<String> {
    ensure_encodable(ms)?;
    let hours = ms / MS_PER_HOUR;
    let minutes = (ms % MS_PER_HOUR) / MS_PER_MINUTE;
    let seconds = (ms % MS_PER_MINUTE) / MS_PER_SECOND;
    let millis = ms % MS_PER_SECOND;
    Ok(format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis))
}

/// Fails unless `ms` fits the two-digit hour field
pub fn ensure_encodable(ms: u64) -> SrtResult<()> {
    if ms >= MAX_ENCODABLE_MS {
        return Err(SrtError::Range(format!(
            "Timestamp exceeds 100 hours: {} ms",
            ms
        )));
    }
    Ok(())
}
