use crate::domain::order::SalesOrder;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

/// The externally visible shape of an order.
///
/// Card data is restricted outside the process: only the masked number
/// and the expiration month appear, and the authorization code never
/// leaves at all.
#[derive(Serialize)]
struct OrderRow<'a> {
    order: u32,
    customer: u32,
    total: String,
    ordered: DateTime<Utc>,
    filled: Option<DateTime<Utc>>,
    card_number: Option<&'a str>,
    card_expires: Option<String>,
}

impl<'a> From<&'a SalesOrder> for OrderRow<'a> {
    fn from(order: &'a SalesOrder) -> Self {
        Self {
            order: order.order,
            customer: order.customer,
            total: order.total.to_string(),
            ordered: order.ordered,
            filled: order.filled,
            card_number: order.card_number.as_deref(),
            card_expires: order.card_expires.map(|exp| exp.to_string()),
        }
    }
}

/// Writes final order state as CSV to any `Write` sink.
pub struct OrderWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> OrderWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_orders(&mut self, orders: &[SalesOrder]) -> Result<()> {
        for order in orders {
            self.writer.serialize(OrderRow::from(order))?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
