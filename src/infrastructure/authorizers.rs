use crate::domain::card::CardInfo;
use crate::domain::ports::MerchantAuthorizer;
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

/// The always-approving demo client. Takes a float amount and the card
/// number, answers with a fresh code every time.
#[derive(Default)]
struct AlwaysAuthorize;

impl AlwaysAuthorize {
    fn authorize(&self, _amount: f64, _card_number: &str) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Development and demo backend: every submission is approved.
#[derive(Default)]
pub struct AlwaysApproveAuthorizer {
    client: AlwaysAuthorize,
}

impl AlwaysApproveAuthorizer {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MerchantAuthorizer for AlwaysApproveAuthorizer {
    async fn authorize(&self, amount: Decimal, card: &CardInfo) -> Result<Option<String>> {
        // The demo client takes a float; the narrowing stays inside this
        // adapter and never reaches the policy checks.
        let amount = amount.to_f64().unwrap_or_default();
        Ok(Some(self.client.authorize(amount, &card.number)))
    }
}

#[derive(Serialize)]
struct SubmitRequest<'a> {
    card_number: &'a str,
    name: &'a str,
    /// `MM/YYYY`, the processor's expected expiry format.
    expires: String,
    ccv: &'a str,
    amount: Decimal,
}

#[derive(Deserialize)]
struct SubmitResponse {
    authorization: Option<String>,
}

/// Submits the full card record to a merchant processor over HTTP.
///
/// A missing `authorization` in the response body is a decline; transport
/// failures and non-success statuses surface as errors and are left to the
/// caller; no retry and no local timeout beyond the client's defaults.
pub struct ProcessorAuthorizer {
    submit_url: Url,
    client: reqwest::Client,
}

impl ProcessorAuthorizer {
    pub fn new(submit_url: Url) -> Self {
        Self {
            submit_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl MerchantAuthorizer for ProcessorAuthorizer {
    async fn authorize(&self, amount: Decimal, card: &CardInfo) -> Result<Option<String>> {
        let request = SubmitRequest {
            card_number: &card.number,
            name: &card.name,
            expires: card.expires.to_string(),
            ccv: &card.ccv,
            amount,
        };

        tracing::debug!(%amount, url = %self.submit_url, "submitting authorization");

        let response = self
            .client
            .post(self.submit_url.clone())
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body: SubmitResponse = response.json().await?;
        Ok(body.authorization)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::CardExpiration;
    use rust_decimal_macros::dec;

    fn card() -> CardInfo {
        CardInfo {
            number: "378282246310005".to_string(),
            name: "John Doe".to_string(),
            expires: CardExpiration::new(2031, 8),
            ccv: "001".to_string(),
        }
    }

    #[tokio::test]
    async fn test_stub_always_approves() {
        let authorizer = AlwaysApproveAuthorizer::new();

        let code = authorizer.authorize(dec!(199.99), &card()).await.unwrap();
        assert!(code.is_some());
        assert!(!code.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_stub_issues_distinct_codes() {
        let authorizer = AlwaysApproveAuthorizer::new();

        let first = authorizer.authorize(dec!(1), &card()).await.unwrap();
        let second = authorizer.authorize(dec!(1), &card()).await.unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_submit_request_expiry_format() {
        let card = card();
        let request = SubmitRequest {
            card_number: &card.number,
            name: &card.name,
            expires: card.expires.to_string(),
            ccv: &card.ccv,
            amount: dec!(42),
        };

        assert_eq!(request.expires, "08/2031");
    }
}
