//! Stripe Checkout client for one-off donations
//!
//! Talks to Stripe's form-encoded REST API directly; only session creation
//! and retrieval are needed, so no SDK dependency.

use crate::error::{AppError, Result};
use serde::Deserialize;

const STRIPE_API_BASE: &str = "https://api.stripe.com/v1";
const CURRENCY: &str = "usd";

/// Checkout session as returned by Stripe (subset of fields we use)
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    pub url: Option<String>,
    pub status: Option<String>,
    pub amount_total: Option<i64>,
    pub currency: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    error: StripeErrorDetail,
}

#[derive(Debug, Deserialize)]
struct StripeErrorDetail {
    message: Option<String>,
}

pub struct StripeClient {
    http_client: reqwest::Client,
    secret_key: String,
    api_base: String,
}

impl StripeClient {
    pub fn new(secret_key: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            secret_key,
            api_base: STRIPE_API_BASE.to_string(),
        }
    }

    #[cfg(test)]
    fn with_api_base(secret_key: String, api_base: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            secret_key,
            api_base,
        }
    }

    /// Create a donation checkout session. `amount` is in major currency
    /// units; Stripe wants the minor unit.
    pub async fn create_donation_session(
        &self,
        amount: f64,
        origin: &str,
    ) -> Result<CheckoutSession> {
        if !(amount > 0.0) {
            return Err(AppError::BadRequest(
                "amount must be a positive number".to_string(),
            ));
        }

        let unit_amount = amount_to_cents(amount).to_string();
        let success_url = format!("{}/result?session_id={{CHECKOUT_SESSION_ID}}", origin);
        let cancel_url = success_url.clone();

        let params: Vec<(&str, &str)> = vec![
            ("submit_type", "donate"),
            ("mode", "payment"),
            ("payment_method_types[0]", "card"),
            ("line_items[0][price_data][currency]", CURRENCY),
            (
                "line_items[0][price_data][product_data][name]",
                "Support DevConnect",
            ),
            (
                "line_items[0][price_data][product_data][description]",
                "Donation helps us maintain and improve the platform",
            ),
            ("line_items[0][price_data][unit_amount]", &unit_amount),
            ("line_items[0][quantity]", "1"),
            ("success_url", &success_url),
            ("cancel_url", &cancel_url),
        ];

        let response = self
            .http_client
            .post(format!("{}/checkout/sessions", self.api_base))
            .bearer_auth(&self.secret_key)
            .form(&params)
            .send()
            .await?;

        Self::parse_session_response(response).await
    }

    /// Retrieve an existing checkout session for the result page
    pub async fn retrieve_session(&self, session_id: &str) -> Result<CheckoutSession> {
        if session_id.trim().is_empty() {
            return Err(AppError::BadRequest(
                "session_id parameter is required".to_string(),
            ));
        }

        let response = self
            .http_client
            .get(format!("{}/checkout/sessions/{}", self.api_base, session_id))
            .bearer_auth(&self.secret_key)
            .send()
            .await?;

        Self::parse_session_response(response).await
    }

    async fn parse_session_response(response: reqwest::Response) -> Result<CheckoutSession> {
        let status = response.status();
        if status.is_success() {
            let session: CheckoutSession = response
                .json()
                .await
                .map_err(|e| AppError::Payment(format!("Malformed Stripe response: {}", e)))?;
            return Ok(session);
        }

        let message = match response.json::<StripeErrorBody>().await {
            Ok(body) => body
                .error
                .message
                .unwrap_or_else(|| "Unknown Stripe error".to_string()),
            Err(_) => "Unknown Stripe error".to_string(),
        };

        if status.is_client_error() {
            Err(AppError::BadRequest(message))
        } else {
            Err(AppError::Payment(format!("{} - {}", status, message)))
        }
    }
}

/// Convert a major-unit amount to the minor unit Stripe expects
fn amount_to_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_to_cents() {
        assert_eq!(amount_to_cents(5.0), 500);
        assert_eq!(amount_to_cents(10.555), 1056);
        assert_eq!(amount_to_cents(0.01), 1);
    }

    #[tokio::test]
    async fn test_rejects_non_positive_amount() {
        let client =
            StripeClient::with_api_base("sk_test".into(), "http://localhost:1".into());

        let err = client
            .create_donation_session(0.0, "http://localhost:3000")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));

        let err = client
            .create_donation_session(-3.0, "http://localhost:3000")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_rejects_empty_session_id() {
        let client =
            StripeClient::with_api_base("sk_test".into(), "http://localhost:1".into());

        let err = client.retrieve_session("").await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
