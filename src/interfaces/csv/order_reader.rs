use crate::domain::order::SalesOrder;
use crate::error::{CheckoutError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// One row of the order seed file: `order, customer, total`.
#[derive(Debug, Deserialize)]
struct OrderSeed {
    order: u32,
    customer: u32,
    total: Decimal,
}

/// Reads order seeds from a CSV source into unfilled [`SalesOrder`]s.
///
/// Wraps `csv::Reader` with whitespace trimming and lazy deserialization,
/// so large seed files stream without loading fully into memory.
pub struct OrderReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OrderReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn orders(self) -> impl Iterator<Item = Result<SalesOrder>> {
        self.reader.into_deserialize().map(|row| {
            row.map_err(CheckoutError::from)
                .map(|seed: OrderSeed| SalesOrder::new(seed.order, seed.customer, seed.total))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reads_seed_rows() {
        let data = "order, customer, total\n1, 7, 199.99\n2, 8, 15.00";
        let reader = OrderReader::new(data.as_bytes());
        let orders: Vec<Result<SalesOrder>> = reader.orders().collect();

        assert_eq!(orders.len(), 2);
        let first = orders[0].as_ref().unwrap();
        assert_eq!(first.order, 1);
        assert_eq!(first.customer, 7);
        assert_eq!(first.total, dec!(199.99));
        assert!(first.filled.is_none());
    }

    #[test]
    fn test_malformed_row_is_an_error() {
        let data = "order, customer, total\nnope, 7, 199.99";
        let reader = OrderReader::new(data.as_bytes());
        let orders: Vec<Result<SalesOrder>> = reader.orders().collect();

        assert!(orders[0].is_err());
    }
}
