use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Buy,
    Sell,
    Undetermined,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Direction {
    /// Resolve a provider's free-form final signal. Only BUY and SELL
    /// (any casing, nothing else around them) carry a direction.
    pub fn from_signal(signal: Option<&str>) -> Self {
        match signal.map(str::to_uppercase).as_deref() {
            Some("BUY") => Direction::Buy,
            Some("SELL") => Direction::Sell,
            _ => Direction::Undetermined,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Buy => "BUY",
            Direction::Sell => "SELL",
            Direction::Undetermined => "UNDETERMINED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_case_insensitively() {
        assert_eq!(Direction::from_signal(Some("buy")), Direction::Buy);
        assert_eq!(Direction::from_signal(Some("Sell")), Direction::Sell);
    }

    #[test]
    fn anything_else_is_undetermined() {
        assert_eq!(Direction::from_signal(Some("HOLD")), Direction::Undetermined);
        assert_eq!(Direction::from_signal(Some("")), Direction::Undetermined);
        assert_eq!(Direction::from_signal(Some("BUYY")), Direction::Undetermined);
        assert_eq!(Direction::from_signal(Some(" BUY ")), Direction::Undetermined);
        assert_eq!(Direction::from_signal(Some("sell\n")), Direction::Undetermined);
        assert_eq!(Direction::from_signal(None), Direction::Undetermined);
    }

    #[test]
    fn serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Direction::Sell).unwrap(), "\"SELL\"");
    }
}
