use super::card::CardInfo;
use super::order::{SalesOrder, SalesOrderLine};
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Card validation capability consumed by the purchase manager.
pub trait CardValidation: Send + Sync {
    /// Returns true only if the card number checksum and the expiration
    /// window both pass.
    fn validate(&self, card: &CardInfo) -> bool;
}

pub type CardValidationBox = Box<dyn CardValidation>;

/// Merchant-services authorization backend.
///
/// Implementations submit the amount and card data to an external
/// processor. `Ok(Some(code))` is an approval, `Ok(None)` a decline, and
/// `Err` a transport fault that propagates to the caller unretried.
#[async_trait]
pub trait MerchantAuthorizer: Send + Sync {
    async fn authorize(&self, amount: Decimal, card: &CardInfo) -> Result<Option<String>>;
}

pub type AuthorizerBox = Box<dyn MerchantAuthorizer>;

/// Persistence port for sales orders and their lines.
///
/// The store owns the orders; the purchase workflow borrows one order per
/// call and writes it back through `update_order`. No transactional
/// wrapping is provided here; concurrent writers are last-write-wins.
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn create_order(&self, order: SalesOrder) -> Result<()>;
    async fn order_by_id(&self, order_id: u32) -> Result<Option<SalesOrder>>;
    async fn orders(&self) -> Result<Vec<SalesOrder>>;
    async fn orders_by_customer(&self, customer_id: u32) -> Result<Vec<SalesOrder>>;
    async fn update_order(&self, order: SalesOrder) -> Result<()>;
    async fn delete_order(&self, order_id: u32) -> Result<()>;

    async fn create_line(&self, line: SalesOrderLine) -> Result<()>;
    async fn line_by_id(&self, line_id: u32) -> Result<Option<SalesOrderLine>>;
    async fn update_line(&self, line: SalesOrderLine) -> Result<()>;
    async fn delete_line(&self, line_id: u32) -> Result<()>;
}

pub type OrderStoreBox = Box<dyn OrderStore>;
