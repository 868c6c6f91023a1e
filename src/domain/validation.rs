use crate::domain::card::{CardExpiration, CardInfo};
use crate::domain::ports::CardValidation;
use chrono::{Datelike, Months, NaiveDate, Utc};

/// Validates card numbers and expiration dates ahead of authorization.
///
/// Pure and local; the only ambient input is the current date for the
/// expiration window.
#[derive(Default)]
pub struct CardValidator;

impl CardValidator {
    pub fn new() -> Self {
        Self
    }

    /// Luhn checksum over the digit string.
    ///
    /// Every second digit from the right (the check digit excluded) is
    /// doubled, doubles above 9 subtract 9, and the adjusted digits are
    /// summed. The number passes only on a positive multiple of 10; an
    /// empty or all-zero string sums to 0 and is rejected, as is any
    /// non-digit character.
    pub fn validate_number(&self, number: &str) -> bool {
        let mut sum = 0u32;

        for (i, ch) in number.chars().rev().enumerate() {
            let Some(digit) = ch.to_digit(10) else {
                return false;
            };

            let mut digit = if i % 2 == 1 { digit * 2 } else { digit };
            if digit > 9 {
                digit -= 9;
            }
            sum += digit;
        }

        sum > 0 && sum % 10 == 0
    }

    /// The card must expire in the current month or later, and no further
    /// out than 60 months: `this_month <= expires < this_month + 61`.
    fn validate_expiration(&self, expires: &CardExpiration, today: NaiveDate) -> bool {
        let Some(expires) = expires.month_start() else {
            return false;
        };
        let Some(this_month) = NaiveDate::from_ymd_opt(today.year(), today.month(), 1) else {
            return false;
        };
        let Some(boundary) = this_month.checked_add_months(Months::new(61)) else {
            return false;
        };

        expires >= this_month && expires < boundary
    }
}

impl CardValidation for CardValidator {
    fn validate(&self, card: &CardInfo) -> bool {
        self.validate_number(&card.number)
            && self.validate_expiration(&card.expires, Utc::now().date_naive())
    }
}
