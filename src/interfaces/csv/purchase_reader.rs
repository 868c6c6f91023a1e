use crate::domain::card::{CardExpiration, CardInfo};
use crate::error::{CheckoutError, Result};
use serde::Deserialize;
use std::io::Read;

/// One purchase attempt: the order to fill plus the card presented for it.
/// Row shape: `order, number, name, expires, ccv` with `expires` as
/// `MM/YYYY`.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PurchaseRequest {
    pub order: u32,
    pub number: String,
    pub name: String,
    pub expires: CardExpiration,
    pub ccv: String,
}

impl PurchaseRequest {
    pub fn card_info(&self) -> CardInfo {
        CardInfo {
            number: self.number.clone(),
            name: self.name.clone(),
            expires: self.expires,
            ccv: self.ccv.clone(),
        }
    }
}

/// Reads purchase requests from a CSV source.
pub struct PurchaseReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PurchaseReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn purchases(self) -> impl Iterator<Item = Result<PurchaseRequest>> {
        self.reader
            .into_deserialize()
            .map(|row| row.map_err(CheckoutError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_purchase_rows() {
        let data = "order, number, name, expires, ccv\n1, 378282246310005, John Doe, 08/2031, 001";
        let reader = PurchaseReader::new(data.as_bytes());
        let purchases: Vec<Result<PurchaseRequest>> = reader.purchases().collect();

        assert_eq!(purchases.len(), 1);
        let purchase = purchases[0].as_ref().unwrap();
        assert_eq!(purchase.order, 1);
        assert_eq!(purchase.expires, CardExpiration::new(2031, 8));

        let card = purchase.card_info();
        assert_eq!(card.number, "378282246310005");
        assert_eq!(card.name, "John Doe");
        assert_eq!(card.ccv, "001");
    }

    #[test]
    fn test_bad_expiry_is_an_error() {
        let data = "order, number, name, expires, ccv\n1, 378282246310005, John Doe, 2031-08, 001";
        let reader = PurchaseReader::new(data.as_bytes());
        let purchases: Vec<Result<PurchaseRequest>> = reader.purchases().collect();

        assert!(purchases[0].is_err());
    }
}
