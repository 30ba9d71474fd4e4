use crate::errors::InvalidChapterNumber;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A non-negative decimal chapter number, such as `3` or `2.5`.
///
/// Numbers are kept in canonical form: no leading zeros in the whole part
/// (except `0` itself) and no trailing zeros in the fractional part.
/// As a result, `2.50` and `2.5` cannot both exist, and the textual form
/// used within file names round-trips exactly.
///
/// # Examples
/// ```
/// use lnassist::naming::ChapterNumber;
///
/// let half: ChapterNumber = "2.5".parse().unwrap();
/// let whole = ChapterNumber::from(2u32);
///
/// assert!(whole < half);
/// assert_eq!("2.5", half.to_string());
/// assert!("02".parse::<ChapterNumber>().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChapterNumber {
    whole: u64,
    /// Fractional digits without trailing zeros (`""` for whole numbers).
    fraction: String,
}

pub(crate) static ZERO: ChapterNumber = ChapterNumber {
    whole: 0,
    fraction: String::new(),
};

impl ChapterNumber {
    /// The whole (integer) part of the number.
    pub fn whole(&self) -> u64 {
        self.whole
    }

    /// Returns `true` if the number has a fractional part (e.g., `2.5`).
    pub fn is_fractional(&self) -> bool {
        !self.fraction.is_empty()
    }

    /// Returns `true` if the number equals `0`.
    pub fn is_zero(&self) -> bool {
        self.whole == 0 && self.fraction.is_empty()
    }
}

impl From<u32> for ChapterNumber {
    fn from(whole: u32) -> Self {
        Self::from(u64::from(whole))
    }
}

impl From<u64> for ChapterNumber {
    fn from(whole: u64) -> Self {
        Self {
            whole,
            fraction: String::new(),
        }
    }
}

impl FromStr for ChapterNumber {
    type Err = InvalidChapterNumber;

    /// Only the canonical textual form is accepted.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidChapterNumber(value.to_owned());
        let (whole, fraction) = match value.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (value, None),
        };

        let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

        if !is_digits(whole) || (whole.len() > 1 && whole.starts_with('0')) {
            return Err(invalid());
        }
        if let Some(fraction) = fraction
            && (!is_digits(fraction) || fraction.ends_with('0'))
        {
            return Err(invalid());
        }

        Ok(Self {
            whole: whole.parse().map_err(|_| invalid())?,
            fraction: fraction.unwrap_or_default().to_owned(),
        })
    }
}

impl Display for ChapterNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.fraction.is_empty() {
            write!(f, "{}", self.whole)
        } else {
            write!(f, "{}.{}", self.whole, self.fraction)
        }
    }
}

impl PartialOrd for ChapterNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ChapterNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        // Without trailing zeros, comparing the fractional digits
        // lexicographically matches their numeric order (`25` < `5`).
        self.whole
            .cmp(&other.whole)
            .then_with(|| self.fraction.cmp(&other.fraction))
    }
}
