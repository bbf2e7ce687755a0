/// Donation checkout handlers
use crate::config::Config;
use crate::error::Result;
use crate::models::{CreateCheckoutRequest, CreateCheckoutResponse};
use crate::services::StripeClient;
use actix_web::{web, HttpResponse};

/// Create a donation checkout session
///
/// POST /api/v1/donations/checkout
pub async fn create_checkout(
    stripe: web::Data<StripeClient>,
    config: web::Data<Config>,
    req: web::Json<CreateCheckoutRequest>,
) -> Result<HttpResponse> {
    let session = stripe
        .create_donation_session(req.amount, &config.stripe.checkout_origin)
        .await?;

    Ok(HttpResponse::Ok().json(CreateCheckoutResponse {
        session_id: session.id,
        url: session.url,
    }))
}

/// Retrieve a checkout session for the post-payment result page
///
/// GET /api/v1/donations/checkout/{session_id}
pub async fn get_checkout(
    stripe: web::Data<StripeClient>,
    session_id: web::Path<String>,
) -> Result<HttpResponse> {
    let session = stripe.retrieve_session(&session_id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "id": session.id,
        "status": session.status,
        "amount_total": session.amount_total,
        "currency": session.currency,
    })))
}
