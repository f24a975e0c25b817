use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl Location {
    /// "Country, address" with whatever parts are known
    pub fn display(&self) -> String {
        [self.country.as_deref(), self.address.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickupPoint {
    pub id: String,
    pub location: Location,
    pub is_available: bool,
}

impl PickupPoint {
    /// Points without a country are not offered at checkout
    pub fn is_selectable(&self) -> bool {
        self.location
            .country
            .as_deref()
            .is_some_and(|c| !c.is_empty())
    }
}

/// Body of `POST /pickup-points/search`; empty means "all"
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PickupPointSearch {}
