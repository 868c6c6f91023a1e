use crate::error::CheckoutError;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Card expiration at month granularity.
///
/// Parses and displays as `MM/YYYY`, the format the merchant processor
/// expects on submission. Day and time of day carry no meaning for an
/// expiration; [`CardExpiration::month_start`] is the canonical date form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardExpiration {
    pub year: i32,
    pub month: u32,
}

impl CardExpiration {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// The first day of the expiration month, or `None` for an
    /// out-of-range month.
    pub fn month_start(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

impl fmt::Display for CardExpiration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:04}", self.month, self.year)
    }
}

impl FromStr for CardExpiration {
    type Err = CheckoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CheckoutError::Validation(format!("invalid expiration '{s}', expected MM/YYYY"));

        let (month, year) = s.split_once('/').ok_or_else(invalid)?;
        let month: u32 = month.trim().parse().map_err(|_| invalid())?;
        let year: i32 = year.trim().parse().map_err(|_| invalid())?;

        if !(1..=12).contains(&month) {
            return Err(invalid());
        }

        Ok(Self { year, month })
    }
}

impl Serialize for CardExpiration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CardExpiration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Card data supplied by the caller for a single purchase attempt.
///
/// Lives only for the duration of the request; the raw number and CCV are
/// never persisted, and `Debug` keeps them out of log output.
#[derive(Clone, PartialEq, Eq)]
pub struct CardInfo {
    pub number: String,
    pub name: String,
    pub expires: CardExpiration,
    pub ccv: String,
}

impl fmt::Debug for CardInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardInfo")
            .field("number", &"********")
            .field("name", &self.name)
            .field("expires", &self.expires)
            .field("ccv", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiration_parse_and_display() {
        let exp: CardExpiration = "08/2031".parse().unwrap();
        assert_eq!(exp, CardExpiration::new(2031, 8));
        assert_eq!(exp.to_string(), "08/2031");
    }

    #[test]
    fn test_expiration_rejects_bad_month() {
        assert!("13/2031".parse::<CardExpiration>().is_err());
        assert!("0/2031".parse::<CardExpiration>().is_err());
        assert!("2031-08".parse::<CardExpiration>().is_err());
        assert!("".parse::<CardExpiration>().is_err());
    }

    #[test]
    fn test_expiration_month_start() {
        let exp = CardExpiration::new(2031, 8);
        assert_eq!(exp.month_start(), NaiveDate::from_ymd_opt(2031, 8, 1));
    }

    #[test]
    fn test_debug_hides_card_data() {
        let card = CardInfo {
            number: "378282246310005".to_string(),
            name: "John Doe".to_string(),
            expires: CardExpiration::new(2031, 8),
            ccv: "001".to_string(),
        };

        let debug = format!("{card:?}");
        assert!(!debug.contains("378282246310005"));
        assert!(!debug.contains("001"));
        assert!(debug.contains("John Doe"));
    }
}
