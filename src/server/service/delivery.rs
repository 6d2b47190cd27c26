//! Shipment booking with the supported carriers.
//!
//! SMSA and Aramex bookings are passed through to the carrier's HTTP endpoint with
//! the order and recipient details. Site pickup needs no carrier and is answered
//! locally.

use sea_orm::DatabaseConnection;
use serde_json::{json, Value};

use crate::server::{
    data::{order::OrderRepository, user::UserRepository},
    error::AppError,
    model::{
        delivery::Shipment,
        order::{DeliveryMethod, Order},
    },
};

/// Carrier endpoints; `None` when a carrier is not configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct CarrierEndpoints<'a> {
    pub smsa: Option<&'a str>,
    pub aramex: Option<&'a str>,
}

pub struct DeliveryService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    carriers: CarrierEndpoints<'a>,
}

impl<'a> DeliveryService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        carriers: CarrierEndpoints<'a>,
    ) -> Self {
        Self {
            db,
            http_client,
            carriers,
        }
    }

    /// Books delivery of the order with the chosen method.
    ///
    /// A tracking number returned by the carrier is stored on the order.
    ///
    /// # Returns
    /// - `Ok(Shipment)` - Booking result with the carrier's response
    /// - `Err(AppError::InternalError)` - The carrier endpoint is not configured
    /// - `Err(AppError::Upstream)` - The carrier was unreachable or rejected the booking
    pub async fn book(&self, order: &Order, method: DeliveryMethod) -> Result<Shipment, AppError> {
        let order_repo = OrderRepository::new(self.db);

        let endpoint = match method {
            DeliveryMethod::SitePickup => {
                let tracking_number = "site_pickup".to_string();
                order_repo
                    .set_tracking_number(order.id, tracking_number.clone())
                    .await?;

                return Ok(Shipment {
                    order_id: order.id,
                    method,
                    tracking_number: Some(tracking_number),
                    carrier_response: None,
                });
            }
            DeliveryMethod::Smsa => self.carriers.smsa,
            DeliveryMethod::Aramex => self.carriers.aramex,
        };
        let Some(endpoint) = endpoint else {
            return Err(AppError::InternalError(format!(
                "No endpoint configured for carrier {}",
                method.as_str()
            )));
        };

        let recipient = UserRepository::new(self.db).find_by_id(order.user_id).await?;
        let payload = json!({
            "order_id": order.id,
            "total_price": order.total_price,
            "items": order.items.iter().map(|item| json!({
                "product_id": item.product_id,
                "quantity": item.quantity,
            })).collect::<Vec<_>>(),
            "recipient": recipient.map(|user| json!({
                "name": user.full_name,
                "phone": user.phone,
                "address": user.address,
            })),
        });

        let response = self
            .http_client
            .post(endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                AppError::Upstream(format!("Carrier {} unreachable: {}", method.as_str(), e))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Upstream(format!(
                "Carrier {} rejected shipment with status {}",
                method.as_str(),
                status
            )));
        }

        let body: Value = response.json().await.map_err(|e| {
            AppError::Upstream(format!("Invalid response from {}: {}", method.as_str(), e))
        })?;

        let tracking_number = tracking_number_from(&body);
        if let Some(tracking) = &tracking_number {
            order_repo
                .set_tracking_number(order.id, tracking.clone())
                .await?;
            tracing::info!("Order {} shipped with {} as {}", order.id, method.as_str(), tracking);
        }

        Ok(Shipment {
            order_id: order.id,
            method,
            tracking_number,
            carrier_response: Some(body),
        })
    }
}

/// Extracts the tracking number from a carrier response, whichever key the carrier uses.
fn tracking_number_from(body: &Value) -> Option<String> {
    ["tracking_number", "trackingNumber", "awb"]
        .iter()
        .find_map(|key| match &body[key] {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    #[test]
    fn reads_tracking_number_under_known_keys() {
        assert_eq!(
            tracking_number_from(&json!({ "trackingNumber": "SM123" })).as_deref(),
            Some("SM123")
        );
        assert_eq!(
            tracking_number_from(&json!({ "awb": 4455 })).as_deref(),
            Some("4455")
        );
        assert_eq!(tracking_number_from(&json!({ "status": "queued" })), None);
    }

    #[tokio::test]
    async fn site_pickup_skips_carrier() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_commerce_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let (_, _, order) = factory::helpers::create_order_with_dependencies(db).await?;
        let order = OrderRepository::new(db).find_by_id(order.id).await?.unwrap();
        let client = reqwest::Client::new();

        let shipment = DeliveryService::new(db, &client, CarrierEndpoints::default())
            .book(&order, DeliveryMethod::SitePickup)
            .await?;
        let stored = OrderRepository::new(db).find_by_id(order.id).await?.unwrap();

        assert_eq!(shipment.tracking_number.as_deref(), Some("site_pickup"));
        assert!(shipment.carrier_response.is_none());
        assert_eq!(stored.tracking_number.as_deref(), Some("site_pickup"));

        Ok(())
    }

    #[tokio::test]
    async fn unconfigured_carrier_is_internal_error() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_commerce_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let (_, _, order) = factory::helpers::create_order_with_dependencies(db).await?;
        let order = OrderRepository::new(db).find_by_id(order.id).await?.unwrap();
        let client = reqwest::Client::new();

        let result = DeliveryService::new(db, &client, CarrierEndpoints::default())
            .book(&order, DeliveryMethod::Aramex)
            .await;

        assert!(matches!(result, Err(AppError::InternalError(_))));

        Ok(())
    }
}
