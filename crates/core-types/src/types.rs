// In crates/core-types/src/types.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A trading symbol, e.g. "EURUSD".
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(pub String);

impl Symbol {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A discrete bar interval.
///
/// `Current` is the "whatever chart the strategy is attached to" binding used by
/// global defaults that are not tied to a specific interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Timeframe {
    Current,
    M1,
    M5,
    M15,
    M30,
    H1,
    H4,
    D1,
    W1,
    MN1,
}

impl Timeframe {
    pub const ALL: [Timeframe; 10] = [
        Timeframe::Current,
        Timeframe::M1,
        Timeframe::M5,
        Timeframe::M15,
        Timeframe::M30,
        Timeframe::H1,
        Timeframe::H4,
        Timeframe::D1,
        Timeframe::W1,
        Timeframe::MN1,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::Current => "CURRENT",
            Timeframe::M1 => "M1",
            Timeframe::M5 => "M5",
            Timeframe::M15 => "M15",
            Timeframe::M30 => "M30",
            Timeframe::H1 => "H1",
            Timeframe::H4 => "H4",
            Timeframe::D1 => "D1",
            Timeframe::W1 => "W1",
            Timeframe::MN1 => "MN1",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Accepts both the "M5" naming and the "5m" interval style used by exchange APIs.
impl FromStr for Timeframe {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tf = match s.trim().to_ascii_lowercase().as_str() {
            "current" => Timeframe::Current,
            "m1" | "1m" => Timeframe::M1,
            "m5" | "5m" => Timeframe::M5,
            "m15" | "15m" => Timeframe::M15,
            "m30" | "30m" => Timeframe::M30,
            "h1" | "1h" => Timeframe::H1,
            "h4" | "4h" => Timeframe::H4,
            "d1" | "1d" => Timeframe::D1,
            "w1" | "1w" => Timeframe::W1,
            "mn1" | "1mo" => Timeframe::MN1,
            _ => return Err(Error::UnknownTimeframe(s.to_string())),
        };
        Ok(tf)
    }
}

/// Price field an indicator is computed on. Serialized as its integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum AppliedPrice {
    Close = 0,
    Open = 1,
    High = 2,
    Low = 3,
    Median = 4,
    Typical = 5,
    Weighted = 6,
}

impl TryFrom<i32> for AppliedPrice {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(AppliedPrice::Close),
            1 => Ok(AppliedPrice::Open),
            2 => Ok(AppliedPrice::High),
            3 => Ok(AppliedPrice::Low),
            4 => Ok(AppliedPrice::Median),
            5 => Ok(AppliedPrice::Typical),
            6 => Ok(AppliedPrice::Weighted),
            other => Err(Error::InvalidAppliedPrice(other)),
        }
    }
}

impl From<AppliedPrice> for i32 {
    fn from(price: AppliedPrice) -> Self {
        price as i32
    }
}

/// Identifies a strategy family. Each kind owns exactly one global default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Williams %R oscillator strategy.
    Wpr,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 1] = [StrategyKind::Wpr];

    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Wpr => "wpr",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wpr" => Ok(StrategyKind::Wpr),
            _ => Err(Error::UnknownStrategy(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeframe_parses_both_naming_styles() {
        assert_eq!("M1".parse::<Timeframe>().unwrap(), Timeframe::M1);
        assert_eq!("m15".parse::<Timeframe>().unwrap(), Timeframe::M15);
        assert_eq!("4h".parse::<Timeframe>().unwrap(), Timeframe::H4);
        assert_eq!("MN1".parse::<Timeframe>().unwrap(), Timeframe::MN1);
        assert_eq!(
            "7m".parse::<Timeframe>(),
            Err(Error::UnknownTimeframe("7m".to_string()))
        );
    }

    #[test]
    fn timeframe_display_matches_parse() {
        for tf in Timeframe::ALL {
            assert_eq!(tf.to_string().parse::<Timeframe>().unwrap(), tf);
        }
    }

    #[test]
    fn applied_price_rejects_unknown_codes() {
        assert_eq!(AppliedPrice::try_from(3), Ok(AppliedPrice::Low));
        assert_eq!(i32::from(AppliedPrice::Weighted), 6);
        assert_eq!(AppliedPrice::try_from(7), Err(Error::InvalidAppliedPrice(7)));
        assert_eq!(AppliedPrice::try_from(-1), Err(Error::InvalidAppliedPrice(-1)));
    }

    #[test]
    fn strategy_kind_is_case_insensitive() {
        assert_eq!("WPR".parse::<StrategyKind>().unwrap(), StrategyKind::Wpr);
        assert!("rsi".parse::<StrategyKind>().is_err());
    }
}
