use crate::domain::card::CardExpiration;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A customer's sales order.
///
/// `total` is the sum of the order's lines, computed by the intake layer;
/// the purchase workflow trusts it as given and never re-sums the lines.
/// The card fields hold only the post-purchase snapshot: the masked number
/// and the expiration month, never the raw card data.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct SalesOrder {
    pub order: u32,
    pub customer: u32,
    pub total: Decimal,
    pub ordered: DateTime<Utc>,
    pub filled: Option<DateTime<Utc>>,
    pub card_number: Option<String>,
    pub card_expires: Option<CardExpiration>,
    /// Authorization code slot. Present in the stored shape but never set
    /// by the purchase workflow; the code is only returned to the caller.
    pub card_authorized: Option<String>,
}

impl SalesOrder {
    /// Creates an unfilled order stamped with the current time.
    pub fn new(order: u32, customer: u32, total: Decimal) -> Self {
        Self {
            order,
            customer,
            total,
            ordered: Utc::now(),
            filled: None,
            card_number: None,
            card_expires: None,
            card_authorized: None,
        }
    }
}

/// A single line on a sales order. Read-only for the purchase workflow;
/// managed through the order store's line operations.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct SalesOrderLine {
    pub line: u32,
    pub order: u32,
    pub product: u32,
    pub quantity: u32,
    pub price: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_order_is_unfilled() {
        let order = SalesOrder::new(1, 7, dec!(99.95));

        assert_eq!(order.order, 1);
        assert_eq!(order.customer, 7);
        assert_eq!(order.total, dec!(99.95));
        assert!(order.filled.is_none());
        assert!(order.card_number.is_none());
        assert!(order.card_expires.is_none());
        assert!(order.card_authorized.is_none());
    }
}
