use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::cart::Cart;
use super::machine::{Machine, MachinePickupPoint};
use super::medicine::{Currency, Medicine};
use super::pickup_point::PickupPoint;

/// Order lifecycle, serialized as the backend's integer code (0..=6)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum OrderStatus {
    Created,
    Payed,
    Preorder,
    InDelivery,
    Completed,
    Canceled,
    Failed,
}

const ORDER_STATUSES: [OrderStatus; 7] = [
    OrderStatus::Created,
    OrderStatus::Payed,
    OrderStatus::Preorder,
    OrderStatus::InDelivery,
    OrderStatus::Completed,
    OrderStatus::Canceled,
    OrderStatus::Failed,
];

impl From<OrderStatus> for u8 {
    fn from(status: OrderStatus) -> Self {
        ORDER_STATUSES
            .iter()
            .position(|s| *s == status)
            .map(|idx| idx as u8)
            .unwrap_or(0)
    }
}

impl TryFrom<u8> for OrderStatus {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        ORDER_STATUSES
            .get(code as usize)
            .copied()
            .ok_or_else(|| format!("unknown order status {}", code))
    }
}

impl OrderStatus {
    /// i18n key; customers see Payed as "Accounted" and Preorder as "In preparing"
    pub fn label_key(&self) -> &'static str {
        match self {
            OrderStatus::Created => "order_status_created",
            OrderStatus::Payed => "order_status_accounted",
            OrderStatus::Preorder => "order_status_in_preparing",
            OrderStatus::InDelivery => "order_status_in_delivery",
            OrderStatus::Completed => "order_status_completed",
            OrderStatus::Canceled => "order_status_canceled",
            OrderStatus::Failed => "order_status_failed",
        }
    }

    /// Initial status of a checkout: machine delivery starts in preparation
    pub fn for_checkout(has_machine: bool) -> Self {
        if has_machine {
            OrderStatus::Preorder
        } else {
            OrderStatus::Payed
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicineInfo {
    pub id: String,
    pub count: u32,
}

/// Body of `POST /orders/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateOrder {
    pub user_id: String,
    pub machine_id: Option<String>,
    pub pickup_point_id: String,
    pub status: OrderStatus,
    pub payment_currency: Currency,
    pub medicines: Vec<MedicineInfo>,
}

impl CreateOrder {
    /// Checkout body for the cart; `None` until a pickup point is chosen
    pub fn from_cart(user_id: &str, cart: &Cart) -> Option<Self> {
        let pickup_point_id = cart.pickup_point_id.clone()?;
        Some(Self {
            user_id: user_id.to_string(),
            machine_id: cart.machine_id.clone(),
            pickup_point_id,
            status: OrderStatus::for_checkout(cart.machine_id.is_some()),
            payment_currency: cart.payment_currency,
            medicines: cart.order_lines(),
        })
    }
}

/// Body of `POST /orders/search`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSearch {
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub machine_id: Option<String>,
    pub pickup_point_id: String,
    pub status: OrderStatus,
    pub payment_currency: Currency,
    pub payment_amount: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    pub fn price_label(&self) -> String {
        format!("{:.2} {}", self.payment_amount, self.payment_currency)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderMedicine {
    pub id: String,
    pub order_id: String,
    pub medicine_id: String,
    pub medicine_count: u32,
    #[serde(default)]
    pub medicine: Option<Medicine>,
}

/// `GET /orders/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetail {
    #[serde(flatten)]
    pub order: Order,
    pub order_medicines: Vec<OrderMedicine>,
    pub pickup_point: PickupPoint,
    #[serde(default)]
    pub machine: Option<Machine>,
    #[serde(default)]
    pub machine_pickup_point: Option<MachinePickupPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_start_at_zero() {
        assert_eq!(u8::from(OrderStatus::Created), 0);
        assert_eq!(u8::from(OrderStatus::Failed), 6);
        assert_eq!(OrderStatus::try_from(3), Ok(OrderStatus::InDelivery));
        assert!(OrderStatus::try_from(7).is_err());
    }

    #[test]
    fn checkout_status_depends_on_machine() {
        assert_eq!(OrderStatus::for_checkout(false), OrderStatus::Payed);
        assert_eq!(OrderStatus::for_checkout(true), OrderStatus::Preorder);
    }

    #[test]
    fn create_order_body_shape() {
        let body = CreateOrder {
            user_id: "u-1".to_string(),
            machine_id: None,
            pickup_point_id: "pp-1".to_string(),
            status: OrderStatus::Payed,
            payment_currency: Currency::Eur,
            medicines: vec![MedicineInfo {
                id: "m-1".to_string(),
                count: 3,
            }],
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({
                "user_id": "u-1",
                "machine_id": null,
                "pickup_point_id": "pp-1",
                "status": 1,
                "payment_currency": "EUR",
                "medicines": [{ "id": "m-1", "count": 3 }]
            })
        );
    }

    #[test]
    fn checkout_needs_pickup_point() {
        let mut cart = Cart::default();
        cart.add(crate::models::cart::tests::medicine("a", 2.0), 3);
        assert_eq!(CreateOrder::from_cart("u-1", &cart), None);

        cart.select_pickup_point(Some("pp-1".to_string()));
        let order = CreateOrder::from_cart("u-1", &cart).unwrap();
        assert_eq!(order.status, OrderStatus::Payed);
        assert_eq!(order.machine_id, None);
        assert_eq!(order.medicines, vec![MedicineInfo { id: "a".to_string(), count: 3 }]);

        cart.select_machine(Some("mc-1".to_string()));
        let order = CreateOrder::from_cart("u-1", &cart).unwrap();
        assert_eq!(order.status, OrderStatus::Preorder);
        assert_eq!(order.payment_currency, Currency::Eur);
    }

    #[test]
    fn order_detail_flattens_order_fields() {
        let json = r#"{
            "id": "o-1",
            "user_id": "u-1",
            "machine_id": null,
            "pickup_point_id": "pp-1",
            "status": 2,
            "payment_currency": "EUR",
            "payment_amount": 12.5,
            "created_at": "2024-05-01T10:00:00Z",
            "updated_at": "2024-05-01T10:05:00Z",
            "order_medicines": [
                { "id": "om-1", "order_id": "o-1", "medicine_id": "m-1", "medicine_count": 2, "medicine": null }
            ],
            "pickup_point": {
                "id": "pp-1",
                "location": { "latitude": 50.4, "longitude": 30.5, "country": "Ukraine", "address": "Kyiv" },
                "is_available": true
            },
            "machine": null,
            "machine_pickup_point": null
        }"#;
        let detail: OrderDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.order.status, OrderStatus::Preorder);
        assert_eq!(detail.order.price_label(), "12.50 EUR");
        assert_eq!(detail.order_medicines[0].medicine_count, 2);
        assert_eq!(detail.pickup_point.location.country.as_deref(), Some("Ukraine"));
    }
}
