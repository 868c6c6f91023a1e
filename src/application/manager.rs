use crate::domain::card::CardInfo;
use crate::domain::order::SalesOrder;
use crate::domain::ports::{AuthorizerBox, CardValidationBox, OrderStoreBox};
use crate::error::Result;
use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Largest order total the business accepts for card purchase.
const MAX_ORDER_TOTAL: Decimal = dec!(250);

/// Orchestrates a purchase: amount policy, card validation, authorization,
/// and on approval the order update.
///
/// Stateless between calls; the injected collaborators are the only
/// retained state. The manager is the sole writer of the order on success;
/// callers get the mutated order back and must not persist it again.
pub struct PurchaseManager {
    validator: CardValidationBox,
    authorizer: AuthorizerBox,
    orders: OrderStoreBox,
}

impl PurchaseManager {
    pub fn new(validator: CardValidationBox, authorizer: AuthorizerBox, orders: OrderStoreBox) -> Self {
        Self {
            validator,
            authorizer,
            orders,
        }
    }

    /// Runs the purchase sequence for one order and card.
    ///
    /// Returns the authorization code on approval, `None` on a policy
    /// rejection or a processor decline. Each step gates the next: a
    /// failed amount check never reaches the validator, a failed card
    /// never reaches the processor, and a decline leaves the order
    /// untouched. Transport faults from the authorizer propagate as `Err`.
    pub async fn complete_purchase(
        &self,
        order: &mut SalesOrder,
        card: &CardInfo,
    ) -> Result<Option<String>> {
        if !Self::validate_total(order.total) {
            tracing::debug!(order = order.order, total = %order.total, "order total out of policy");
            return Ok(None);
        }

        if !self.validator.validate(card) {
            tracing::debug!(order = order.order, "card rejected by validator");
            return Ok(None);
        }

        let authorization = self.authorizer.authorize(order.total, card).await?;

        match &authorization {
            Some(_) => {
                order.card_number = Some(mask_card_number(&card.number));
                order.card_expires = Some(card.expires);
                order.filled = Some(Utc::now());
                // The authorization code is returned to the caller but not
                // written onto the order.
                self.orders.update_order(order.clone()).await?;
                tracing::info!(order = order.order, "purchase authorized");
            }
            None => {
                tracing::info!(order = order.order, "purchase declined by processor");
            }
        }

        Ok(authorization)
    }

    /// The order must total more than zero and at most 250 currency units.
    fn validate_total(total: Decimal) -> bool {
        total > Decimal::ZERO && total <= MAX_ORDER_TOTAL
    }
}

/// Replaces all but the last four characters with `*`, preserving length.
/// Numbers of four characters or fewer pass through unchanged.
fn mask_card_number(number: &str) -> String {
    let len = number.chars().count();
    if len > 4 {
        let tail: String = number.chars().skip(len - 4).collect();
        format!("{}{}", "*".repeat(len - 4), tail)
    } else {
        number.to_string()
    }
}
