use std::fmt;
use std::str::FromStr;

use super::error::{SrtError, SrtResult};

/// Exact rational number for frame rates and time offsets
///
/// Always kept in lowest terms with a positive denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    num: i128,
    den: i128,
}

impl Rational {
    /// Create a new rational number, failing on a zero denominator
    pub fn new(num: i128, den: i128) -> SrtResult<Self> {
        if den == 0 {
            return Err(SrtError::Format(format!("zero denominator in {}/{}", num, den)));
        }
        if num == i128::MIN || den == i128::MIN {
            return Err(SrtError::Range(format!("{}/{} is out of range", num, den)));
        }
        let mut r = Rational { num, den };
        r.reduce();
        Ok(r)
    }

    /// Create a rational from an integer
    pub fn from_int(n: i128) -> Self {
        Rational { num: n, den: 1 }
    }

    pub fn is_positive(&self) -> bool {
        self.num > 0
    }

    fn reduce(&mut self) {
        let gcd = Self::gcd(self.num.abs(), self.den.abs());
        if gcd > 1 {
            self.num /= gcd;
            self.den /= gcd;
        }

        // Keep denominator positive
        if self.den < 0 {
            self.num = -self.num;
            self.den = -self.den;
        }
    }

    fn gcd(mut a: i128, mut b: i128) -> i128 {
        while b != 0 {
            let t = b;
            b = a % b;
            a = t;
        }
        a
    }

    pub fn checked_mul(self, other: Self) -> SrtResult<Self> {
        let num = self.num.checked_mul(other.num).ok_or_else(|| overflow(self, other))?;
        let den = self.den.checked_mul(other.den).ok_or_else(|| overflow(self, other))?;
        Rational::new(num, den)
    }

    pub fn checked_div(self, other: Self) -> SrtResult<Self> {
        if other.num == 0 {
            return Err(SrtError::Format(format!("division of {} by zero", self)));
        }
        let num = self.num.checked_mul(other.den).ok_or_else(|| overflow(self, other))?;
        let den = self.den.checked_mul(other.num).ok_or_else(|| overflow(self, other))?;
        Rational::new(num, den)
    }

    /// Round to the nearest integer, ties going to the even neighbour
    pub fn round_half_even(self) -> i128 {
        let floor = self.num.div_euclid(self.den);
        let rem = self.num.rem_euclid(self.den);
        match rem.cmp(&(self.den - rem)) {
            std::cmp::Ordering::Less => floor,
            std::cmp::Ordering::Greater => floor + 1,
            std::cmp::Ordering::Equal => {
                if floor % 2 == 0 {
                    floor
                } else {
                    floor + 1
                }
            }
        }
    }

    /// Drop the fractional part, rounding toward zero
    pub fn trunc(self) -> i128 {
        self.num / self.den
    }
}

fn overflow(a: Rational, b: Rational) -> SrtError {
    SrtError::Range(format!("arithmetic overflow combining {} and {}", a, b))
}

impl Default for Rational {
    fn default() -> Self {
        Rational { num: 0, den: 1 }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

/// Parses decimal text (`23.976`, `-5`, `.5`) or a fraction (`30000/1001`)
impl FromStr for Rational {
    type Err = SrtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let invalid = || SrtError::Format(format!("invalid number: '{}'", s));

        if let Some((num, den)) = text.split_once('/') {
            let num: i128 = num.trim().parse().map_err(|_| invalid())?;
            let den: i128 = den.trim().parse().map_err(|_| invalid())?;
            return Rational::new(num, den);
        }

        let (negative, unsigned) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };
        let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid());
        }
        if !int_part.bytes().chain(frac_part.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let mut num: i128 = 0;
        let mut den: i128 = 1;
        for digit in int_part.bytes().chain(frac_part.bytes()) {
            num = num
                .checked_mul(10)
                .and_then(|n| n.checked_add(i128::from(digit - b'0')))
                .ok_or_else(invalid)?;
        }
        for _ in 0..frac_part.len() {
            den = den.checked_mul(10).ok_or_else(invalid)?;
        }

        Rational::new(if negative { -num } else { num }, den)
    }
}
