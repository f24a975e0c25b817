use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "USD")]
    Usd,
    #[default]
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "UAH")]
    Uah,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Uah => "UAH",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Dosage form, serialized as the backend's integer code (1..=10)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum MedicineType {
    Liquid,
    Tablet,
    Capsules,
    Topical,
    Suppositories,
    Drops,
    Inhalers,
    Injections,
    Patches,
    Sublingual,
}

const MEDICINE_TYPES: [MedicineType; 10] = [
    MedicineType::Liquid,
    MedicineType::Tablet,
    MedicineType::Capsules,
    MedicineType::Topical,
    MedicineType::Suppositories,
    MedicineType::Drops,
    MedicineType::Inhalers,
    MedicineType::Injections,
    MedicineType::Patches,
    MedicineType::Sublingual,
];

impl From<MedicineType> for u8 {
    fn from(kind: MedicineType) -> Self {
        MEDICINE_TYPES
            .iter()
            .position(|k| *k == kind)
            .map(|idx| idx as u8 + 1)
            .unwrap_or(1)
    }
}

impl TryFrom<u8> for MedicineType {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        code.checked_sub(1)
            .and_then(|idx| MEDICINE_TYPES.get(idx as usize).copied())
            .ok_or_else(|| format!("unknown medicine type {}", code))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medicine {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MedicineType,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub currency: Currency,
    pub prescription_needed: bool,
    pub is_available: bool,
}

// ----------------------------------------------------------------------------
// Search
// ----------------------------------------------------------------------------

/// Column filters applied server-side with equality
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MedicineFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prescription_needed: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pagination {
    pub offset: u32,
    pub limit: u32,
}

impl Pagination {
    pub fn first(limit: u32) -> Self {
        Self { offset: 0, limit }
    }

    pub fn has_previous(&self) -> bool {
        self.offset > 0
    }

    pub fn previous(self) -> Self {
        Self {
            offset: self.offset.saturating_sub(self.limit),
            ..self
        }
    }

    pub fn next(self) -> Self {
        Self {
            offset: self.offset + self.limit,
            ..self
        }
    }

    /// A short page means the server has nothing further
    pub fn has_next(&self, page_len: usize) -> bool {
        page_len >= self.limit as usize
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderBy {
    pub order_by_column: String,
    pub desc: bool,
}

impl OrderBy {
    pub fn by_name(desc: bool) -> Self {
        Self {
            order_by_column: "name".to_string(),
            desc,
        }
    }
}

/// Body of `POST /medicines/search`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MedicineSearch {
    pub simple_filters: MedicineFilters,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_substring: Option<String>,
    pub pagination: Pagination,
    pub order_by: OrderBy,
}

impl MedicineSearch {
    pub fn new(page_size: u32) -> Self {
        Self {
            simple_filters: MedicineFilters::default(),
            search_substring: None,
            pagination: Pagination::first(page_size),
            order_by: OrderBy::by_name(false),
        }
    }

    /// Empty input clears the substring filter
    pub fn with_substring(mut self, value: &str) -> Self {
        let value = value.trim();
        self.search_substring = (!value.is_empty()).then(|| value.to_string());
        self
    }

    /// Select values: `"true"`, `"false"`, anything else means "any"
    pub fn with_prescription_filter(mut self, value: &str) -> Self {
        self.simple_filters.prescription_needed = match value {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        };
        self
    }

    pub fn with_descending(mut self, desc: bool) -> Self {
        self.order_by.desc = desc;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn medicine_type_codes_start_at_one() {
        assert_eq!(u8::from(MedicineType::Liquid), 1);
        assert_eq!(u8::from(MedicineType::Sublingual), 10);
        assert_eq!(MedicineType::try_from(2), Ok(MedicineType::Tablet));
        assert!(MedicineType::try_from(0).is_err());
        assert!(MedicineType::try_from(11).is_err());
    }

    #[test]
    fn medicine_deserializes_backend_dto() {
        let json = r#"{
            "id": "m-1",
            "type": 2,
            "name": "Ibuprofen",
            "description": "200 mg",
            "price": 4.5,
            "currency": "UAH",
            "prescription_needed": false,
            "is_available": true
        }"#;
        let medicine: Medicine = serde_json::from_str(json).unwrap();
        assert_eq!(medicine.kind, MedicineType::Tablet);
        assert_eq!(medicine.currency, Currency::Uah);
    }

    #[test]
    fn default_search_body() {
        let body = serde_json::to_value(MedicineSearch::new(10)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "simple_filters": {},
                "pagination": { "offset": 0, "limit": 10 },
                "order_by": { "order_by_column": "name", "desc": false }
            })
        );
    }

    #[test]
    fn filters_from_form_values() {
        let search = MedicineSearch::new(10)
            .with_substring("  aspirin ")
            .with_prescription_filter("true")
            .with_descending(true);
        assert_eq!(search.search_substring.as_deref(), Some("aspirin"));
        assert_eq!(search.simple_filters.prescription_needed, Some(true));
        assert!(search.order_by.desc);

        let search = search.with_substring("   ").with_prescription_filter("any");
        assert_eq!(search.search_substring, None);
        assert_eq!(search.simple_filters.prescription_needed, None);
    }

    #[test]
    fn pagination_steps_by_page_size() {
        let page = Pagination::first(10);
        assert!(!page.has_previous());
        assert_eq!(page.previous().offset, 0);

        let page = page.next().next();
        assert_eq!(page.offset, 20);
        assert!(page.has_previous());
        assert_eq!(page.previous().offset, 10);

        assert!(page.has_next(10));
        assert!(!page.has_next(7));
    }
}
