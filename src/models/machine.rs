use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::medicine::{OrderBy, Pagination};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum MachineStatus {
    Unregistered,
    Registered,
    Dysfunctional,
}

impl From<MachineStatus> for u8 {
    fn from(status: MachineStatus) -> Self {
        match status {
            MachineStatus::Unregistered => 1,
            MachineStatus::Registered => 2,
            MachineStatus::Dysfunctional => 3,
        }
    }
}

impl TryFrom<u8> for MachineStatus {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(MachineStatus::Unregistered),
            2 => Ok(MachineStatus::Registered),
            3 => Ok(MachineStatus::Dysfunctional),
            other => Err(format!("unknown machine status {}", other)),
        }
    }
}

impl MachineStatus {
    pub fn label_key(&self) -> &'static str {
        match self {
            MachineStatus::Unregistered => "machine_status_unregistered",
            MachineStatus::Registered => "machine_status_registered",
            MachineStatus::Dysfunctional => "machine_status_dysfunctional",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MachineLocation {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl MachineLocation {
    pub fn display(&self) -> Option<String> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some(format!("{:.5}, {:.5}", lat, lng)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Machine {
    pub id: String,
    pub name: String,
    pub mac: String,
    pub location: MachineLocation,
    pub admin_user_id: String,
    pub status: MachineStatus,
    #[serde(default)]
    pub last_maintenance_date: Option<DateTime<Utc>>,
}

/// A scheduled stop of a delivery machine at a pickup point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachinePickupPoint {
    pub id: String,
    pub machine_id: String,
    pub pickup_point_id: String,
    pub arrival_at: DateTime<Utc>,
    pub departure_at: DateTime<Utc>,
    pub deliver_orders: bool,
}

/// Body of `POST /machines/search`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MachineSearch {
    pub simple_filters: serde_json::Map<String, serde_json::Value>,
    pub medicines: serde_json::Map<String, serde_json::Value>,
    pub pagination: Pagination,
    pub order_by: Option<OrderBy>,
}

impl MachineSearch {
    pub fn all(limit: u32) -> Self {
        Self {
            simple_filters: serde_json::Map::new(),
            medicines: serde_json::Map::new(),
            pagination: Pagination::first(limit),
            order_by: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn machine_deserializes_with_status_code() {
        let json = r#"{
            "id": "mc-1",
            "name": "Dispenser 7",
            "mac": "00:1B:44:11:3A:B7",
            "location": { "latitude": 50.4501, "longitude": 30.5234 },
            "admin_user_id": "u-9",
            "status": 2,
            "last_maintenance_date": null
        }"#;
        let machine: Machine = serde_json::from_str(json).unwrap();
        assert_eq!(machine.status, MachineStatus::Registered);
        assert_eq!(machine.location.display().as_deref(), Some("50.45010, 30.52340"));
    }

    #[test]
    fn search_all_serializes_null_order() {
        let body = serde_json::to_value(MachineSearch::all(50)).unwrap();
        assert_eq!(body["order_by"], serde_json::Value::Null);
        assert_eq!(body["pagination"]["limit"], 50);
    }
}
