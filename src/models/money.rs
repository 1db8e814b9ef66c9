//! Rupee amounts
//!
//! All figures in the app are whole rupees, so amounts are stored as an `i64`
//! count of rupees. Display uses the `₹` sign with Indian digit grouping
//! (`₹1,00,000`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

/// A whole-rupee amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rupees(i64);

/// Error returned when a rupee amount cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RupeesParseError {
    Empty,
    InvalidFormat(String),
}

impl fmt::Display for RupeesParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Amount is required"),
            Self::InvalidFormat(s) => write!(f, "Invalid amount: '{}'", s),
        }
    }
}

impl std::error::Error for RupeesParseError {}

impl Rupees {
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    /// The raw rupee count
    pub const fn value(&self) -> i64 {
        self.0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// `pct` percent of this amount, rounded down
    ///
    /// Uses integer arithmetic so `Rupees::new(13125).percent(15)` is exactly
    /// 1968 with no floating-point drift.
    pub const fn percent(&self, pct: u32) -> Self {
        Self(self.0 * pct as i64 / 100)
    }

    /// This amount as a percentage of `whole`, rounded half away from zero
    pub fn share_of(&self, whole: Rupees) -> u32 {
        if whole.0 == 0 {
            return 0;
        }
        (self.0 as f64 / whole.0 as f64 * 100.0).round() as u32
    }

    /// Parse a user-entered amount
    ///
    /// Accepts "200", "₹200", "1,200" and "200.00". Fractions are dropped,
    /// matching how the voice form only ever deals in whole rupees.
    pub fn parse(s: &str) -> Result<Self, RupeesParseError> {
        let s = s.trim();
        let s = s.strip_prefix('₹').unwrap_or(s).trim();
        if s.is_empty() {
            return Err(RupeesParseError::Empty);
        }

        let digits: String = s.chars().filter(|c| *c != ',').collect();
        let whole = match digits.split_once('.') {
            Some((whole, frac)) if frac.chars().all(|c| c.is_ascii_digit()) => whole,
            Some(_) => return Err(RupeesParseError::InvalidFormat(s.to_string())),
            None => digits.as_str(),
        };

        if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
            return Err(RupeesParseError::InvalidFormat(s.to_string()));
        }

        whole
            .parse::<i64>()
            .map(Self)
            .map_err(|_| RupeesParseError::InvalidFormat(s.to_string()))
    }

    /// Format the number with Indian grouping and no currency sign
    pub fn grouped(&self) -> String {
        let digits = self.0.unsigned_abs().to_string();
        let sign = if self.0 < 0 { "-" } else { "" };

        if digits.len() <= 3 {
            return format!("{}{}", sign, digits);
        }

        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 2 {
            groups.push(&head[end - 2..end]);
            end -= 2;
        }
        groups.push(&head[..end]);
        groups.reverse();

        format!("{}{},{}", sign, groups.join(","), tail)
    }
}

impl Default for Rupees {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Rupees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{}", self.grouped())
    }
}

impl Add for Rupees {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Rupees {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Rupees {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl Sum for Rupees {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}
