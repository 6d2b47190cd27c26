//! Stripe Checkout integration.
//!
//! Sessions are created through the Stripe REST API with form-encoded line items
//! built from the order's stored items, so the amount charged always matches the
//! prices captured when the order was placed.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{order::OrderRepository, product::ProductRepository},
    error::AppError,
    model::{order::Order, payment::CheckoutSession},
};

const STRIPE_CHECKOUT_URL: &str = "https://api.stripe.com/v1/checkout/sessions";

/// Currency charged for every order.
const CURRENCY: &str = "sar";

/// Checkout label for order lines whose product was deleted.
const DISCONTINUED_PRODUCT: &str = "Discontinued product";

pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    stripe_secret_key: Option<&'a str>,
    client_url: &'a str,
}

impl<'a> PaymentService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        stripe_secret_key: Option<&'a str>,
        client_url: &'a str,
    ) -> Self {
        Self {
            db,
            http_client,
            stripe_secret_key,
            client_url,
        }
    }

    /// Creates a Checkout session for the order and stores its ID as the payment reference.
    ///
    /// # Returns
    /// - `Ok(CheckoutSession)` - Session ID and redirect URL
    /// - `Err(AppError::InternalError)` - Stripe is not configured
    /// - `Err(AppError::Upstream)` - Stripe rejected the request or was unreachable
    pub async fn create_checkout_session(&self, order: &Order) -> Result<CheckoutSession, AppError> {
        let Some(secret_key) = self.stripe_secret_key else {
            return Err(AppError::InternalError(
                "STRIPE_SECRET_KEY is not configured".to_string(),
            ));
        };

        let product_repo = ProductRepository::new(self.db);
        let mut names = Vec::with_capacity(order.items.len());
        for item in &order.items {
            let product = match item.product_id {
                Some(id) => product_repo.find_by_id(id).await?,
                None => None,
            };
            let name = match (product, item.product_id) {
                (Some(product), _) => product.name,
                (None, Some(id)) => format!("Product {}", id),
                (None, None) => DISCONTINUED_PRODUCT.to_string(),
            };
            names.push(name);
        }

        let form = checkout_form(order, &names, self.client_url);

        let response = self
            .http_client
            .post(STRIPE_CHECKOUT_URL)
            .basic_auth(secret_key, None::<&str>)
            .form(&form)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Stripe unreachable: {}", e)))?;

        let status = response.status();
        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("Invalid Stripe response: {}", e)))?;

        if !status.is_success() {
            let message = body["error"]["message"]
                .as_str()
                .unwrap_or("unknown error");
            return Err(AppError::Upstream(format!(
                "Stripe checkout failed ({}): {}",
                status, message
            )));
        }

        let id = body["id"]
            .as_str()
            .map(String::from)
            .ok_or_else(|| AppError::Upstream("Stripe response has no session id".to_string()))?;
        let url = body["url"].as_str().map(String::from);

        OrderRepository::new(self.db)
            .set_payment_reference(order.id, id.clone())
            .await?;
        tracing::info!("Created checkout session {} for order {}", id, order.id);

        Ok(CheckoutSession { id, url })
    }
}

/// Converts a price to the smallest currency unit (halalas).
fn minor_units(price: f64) -> i64 {
    (price * 100.0).round() as i64
}

/// Builds the form-encoded body of a Checkout session request.
///
/// `names` holds the product name for each order item, in item order.
fn checkout_form(order: &Order, names: &[String], client_url: &str) -> Vec<(String, String)> {
    let base = client_url.trim_end_matches('/');
    let mut form = vec![
        ("mode".to_string(), "payment".to_string()),
        ("payment_method_types[0]".to_string(), "card".to_string()),
        ("client_reference_id".to_string(), order.id.to_string()),
        ("success_url".to_string(), format!("{}/payment-success", base)),
        ("cancel_url".to_string(), format!("{}/payment-failed", base)),
    ];

    for (i, (item, name)) in order.items.iter().zip(names).enumerate() {
        let prefix = format!("line_items[{}]", i);
        form.push((
            format!("{}[price_data][currency]", prefix),
            CURRENCY.to_string(),
        ));
        form.push((
            format!("{}[price_data][product_data][name]", prefix),
            name.clone(),
        ));
        form.push((
            format!("{}[price_data][unit_amount]", prefix),
            minor_units(item.unit_price).to_string(),
        ));
        form.push((format!("{}[quantity]", prefix), item.quantity.to_string()));
    }

    form
}
