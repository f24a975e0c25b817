//! Client-side cart and its reducer operations.
//!
//! Invariants:
//! - at most one [`CartMedicine`] per medicine id
//! - every count is at least 1
//! - entries keep the position of their first insertion

use serde::{Deserialize, Serialize};

use super::medicine::{Currency, Medicine};
use super::order::MedicineInfo;

/// A medicine snapshot plus the quantity the customer wants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartMedicine {
    #[serde(flatten)]
    pub medicine: Medicine,
    pub count: u32,
}

impl CartMedicine {
    pub fn id(&self) -> &str {
        &self.medicine.id
    }

    pub fn line_total(&self) -> f64 {
        self.medicine.price * self.count as f64
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Cart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub machine_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_point_id: Option<String>,
    #[serde(default)]
    pub payment_currency: Currency,
    #[serde(default)]
    pub medicines: Vec<CartMedicine>,
}

impl Cart {
    /// Replaces the entry for `medicine.id` in place, or appends a new one
    pub fn add(&mut self, medicine: Medicine, count: u32) {
        let entry = CartMedicine {
            medicine,
            count: count.max(1),
        };
        match self.medicines.iter_mut().find(|m| m.id() == entry.id()) {
            Some(existing) => *existing = entry,
            None => self.medicines.push(entry),
        }
    }

    /// Overwrites the count of the first matching entry; unknown ids are ignored
    pub fn change_count(&mut self, medicine_id: &str, count: u32) {
        if let Some(entry) = self.medicines.iter_mut().find(|m| m.id() == medicine_id) {
            entry.count = count.max(1);
        }
    }

    pub fn remove(&mut self, medicine_id: &str) {
        self.medicines.retain(|m| m.id() != medicine_id);
    }

    /// Drops all lines and the delivery selection; the payment currency stays
    pub fn clear(&mut self) {
        self.medicines.clear();
        self.machine_id = None;
        self.pickup_point_id = None;
    }

    pub fn select_pickup_point(&mut self, pickup_point_id: Option<String>) {
        self.pickup_point_id = pickup_point_id;
    }

    pub fn select_machine(&mut self, machine_id: Option<String>) {
        self.machine_id = machine_id;
    }

    pub fn is_empty(&self) -> bool {
        self.medicines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.medicines.len()
    }

    pub fn get(&self, medicine_id: &str) -> Option<&CartMedicine> {
        self.medicines.iter().find(|m| m.id() == medicine_id)
    }

    pub fn total_price(&self) -> f64 {
        self.medicines.iter().map(CartMedicine::line_total).sum()
    }

    /// Order lines for `POST /orders/`
    pub fn order_lines(&self) -> Vec<MedicineInfo> {
        self.medicines
            .iter()
            .map(|m| MedicineInfo {
                id: m.id().to_string(),
                count: m.count,
            })
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::medicine::MedicineType;

    pub(crate) fn medicine(id: &str, price: f64) -> Medicine {
        Medicine {
            id: id.to_string(),
            kind: MedicineType::Tablet,
            name: format!("Medicine {}", id),
            description: String::new(),
            price,
            currency: Currency::Eur,
            prescription_needed: false,
            is_available: true,
        }
    }

    fn ids(cart: &Cart) -> Vec<&str> {
        cart.medicines.iter().map(CartMedicine::id).collect()
    }

    #[test]
    fn add_new_id_appends_one_entry() {
        let mut cart = Cart::default();
        cart.add(medicine("a", 1.0), 2);
        cart.add(medicine("b", 1.0), 3);

        assert_eq!(ids(&cart), vec!["a", "b"]);
        assert_eq!(cart.get("b").map(|m| m.count), Some(3));
    }

    #[test]
    fn add_existing_id_replaces_in_place() {
        let mut cart = Cart::default();
        cart.add(medicine("a", 1.0), 2);
        cart.add(medicine("b", 1.0), 1);

        let mut updated = medicine("a", 1.5);
        updated.name = "Renamed".to_string();
        cart.add(updated, 5);

        assert_eq!(cart.len(), 2);
        assert_eq!(ids(&cart), vec!["a", "b"]);
        let entry = cart.get("a").unwrap();
        assert_eq!(entry.count, 5);
        assert_eq!(entry.medicine.name, "Renamed");
    }

    #[test]
    fn readding_single_entry_keeps_length_one() {
        let mut cart = Cart::default();
        cart.add(medicine("a", 1.0), 2);
        cart.add(medicine("a", 1.0), 5);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.medicines[0].count, 5);
    }

    #[test]
    fn change_count_on_absent_id_is_noop() {
        let mut cart = Cart::default();
        cart.add(medicine("a", 1.0), 2);
        let before = cart.clone();

        cart.change_count("zzz", 9);
        assert_eq!(cart, before);

        cart.change_count("a", 9);
        assert_eq!(cart.get("a").map(|m| m.count), Some(9));
    }

    #[test]
    fn counts_never_drop_below_one() {
        let mut cart = Cart::default();
        cart.add(medicine("a", 1.0), 0);
        assert_eq!(cart.get("a").map(|m| m.count), Some(1));

        cart.change_count("a", 0);
        assert_eq!(cart.get("a").map(|m| m.count), Some(1));
    }

    #[test]
    fn remove_deletes_every_match_and_keeps_order() {
        let mut cart = Cart::default();
        cart.add(medicine("a", 1.0), 1);
        cart.add(medicine("b", 1.0), 1);
        cart.add(medicine("c", 1.0), 1);
        // Restored carts may carry duplicates written by older clients
        cart.medicines.push(CartMedicine {
            medicine: medicine("b", 1.0),
            count: 4,
        });

        cart.remove("b");
        assert_eq!(ids(&cart), vec!["a", "c"]);
    }

    #[test]
    fn clear_keeps_currency() {
        let mut cart = Cart {
            payment_currency: Currency::Uah,
            pickup_point_id: Some("pp-1".to_string()),
            ..Cart::default()
        };
        cart.add(medicine("a", 1.0), 1);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.pickup_point_id, None);
        assert_eq!(cart.payment_currency, Currency::Uah);
    }

    #[test]
    fn totals_and_order_lines() {
        let mut cart = Cart::default();
        cart.add(medicine("a", 2.5), 2);
        cart.add(medicine("b", 10.0), 1);

        assert!((cart.total_price() - 15.0).abs() < f64::EPSILON);
        let lines = cart.order_lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].id, "a");
        assert_eq!(lines[0].count, 2);
    }

    #[test]
    fn cart_medicine_is_flat_on_the_wire() {
        let entry = CartMedicine {
            medicine: medicine("a", 3.0),
            count: 2,
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["id"], "a");
        assert_eq!(value["count"], 2);
        assert_eq!(value["type"], 2);
    }
}
