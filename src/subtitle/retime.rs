use super::error::{SrtError, SrtResult};
use super::rational::Rational;
use super::timestamp;

/// Rescales timestamps by `from / to`
///
/// The factor is kept as an exact [`Rational`]; only the final millisecond
/// value is rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateConversion {
    pub from: Rational,
    pub to: Rational,
}

impl RateConversion {
    pub fn new(from: Rational, to: Rational) -> SrtResult<Self> {
        for rate in [from, to] {
            if !rate.is_positive() {
                return Err(SrtError::Format(format!(
                    "Frame rate must be positive, got {}",
                    rate
                )));
            }
        }
        Ok(Self { from, to })
    }

    pub fn factor(&self) -> SrtResult<Rational> {
        self.from.checked_div(self.to)
    }

    /// Scale a millisecond count, rounding half to even
    ///
    /// Fails with a range error when the result no longer fits `HH:MM:SS,mmm`.
    pub fn convert(&self, ms: u64) -> SrtResult<u64> {
        let scaled = Rational::from_int(i128::from(ms)).checked_mul(self.factor()?)?;
        let rounded = scaled.round_half_even();
        let converted = u64::try_from(rounded)
            .map_err(|_| SrtError::Range(format!("Retimed value out of range: {}", rounded)))?;
        timestamp::ensure_encodable(converted)?;
        Ok(converted)
    }
}

/// A signed offset in seconds, applied with millisecond precision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftOffset {
    pub seconds: Rational,
}

impl ShiftOffset {
    pub fn new(seconds: Rational) -> Self {
        Self { seconds }
    }

    /// The offset in whole milliseconds, truncated toward zero
    pub fn delta_ms(&self) -> SrtResult<i128> {
        Ok(self
            .seconds
            .checked_mul(Rational::from_int(1000))?
            .trunc())
    }

    /// Add the offset to `ms`, clamping negative results to zero
    pub fn apply(&self, ms: u64) -> SrtResult<u64> {
        let shifted = i128::from(ms)
            .checked_add(self.delta_ms()?)
            .ok_or_else(|| SrtError::Range(format!("Shift overflows {} ms", ms)))?;
        if shifted < 0 {
            return Ok(0);
        }
        u64::try_from(shifted)
            .map_err(|_| SrtError::Range(format!("Shifted value out of range: {}", shifted)))
    }
}
