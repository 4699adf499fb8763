use std::fmt;

/// A normalized (from, to) currency pair.
/// This is the cache key: codes are uppercased on construction so that
/// "usd" and "USD" address the same slot.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CurrencyPair {
    from: String,
    to: String,
}

impl CurrencyPair {
    /// Creates a pair, trimming and uppercasing both codes.
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: from.trim().to_uppercase(),
            to: to.trim().to_uppercase(),
        }
    }

    /// The currency being converted from.
    pub fn from_currency(&self) -> &str {
        &self.from
    }

    /// The currency being converted to.
    pub fn to_currency(&self) -> &str {
        &self.to
    }

    /// True when both sides name the same currency.
    pub fn is_identity(&self) -> bool {
        self.from == self.to
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.from, self.to)
    }
}
