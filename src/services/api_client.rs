// ============================================================================
// API CLIENT - HTTP only, no business logic
// ============================================================================
// Built from the current session on every use, so signing out drops the
// bearer credential from all later requests.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::UrlSearchParams;

use crate::config::CONFIG;
use crate::error::ApiError;
use crate::models::{
    CreateOrder, LoginForm, Machine, MachineSearch, Medicine, MedicineSearch, Order, OrderDetail,
    OrderSearch, PickupPoint, PickupPointSearch, RegisterRequest, TokenResponse, User, UserUpdate,
};

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Client for the configured backend
    pub fn from_config() -> Self {
        Self::new(CONFIG.api_url())
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn authorization_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.authorization_header() {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    async fn read<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let err = ApiError::from_status(status, &body);
            log::warn!("⚠️ {} {} -> {}", response.url(), status, err);
            return Err(err);
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.authorized(Request::get(&self.url(path))).send().await?;
        Self::read(response).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let response = self
            .authorized(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await?;
        Self::read(response).await
    }

    async fn patch<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let response = self
            .authorized(Request::patch(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await?;
        Self::read(response).await
    }

    // ------------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------------

    /// OAuth2 password form login
    pub async fn login(&self, form: &LoginForm) -> Result<TokenResponse, ApiError> {
        log::info!("🔐 Login for {}", form.username.trim());
        let params = UrlSearchParams::new().map_err(|e| ApiError::Request(format!("{:?}", e)))?;
        for (key, value) in form.form_fields() {
            params.append(key, value);
        }

        let response = Request::post(&self.url("auth/jwt/login"))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(params)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await?;
        Self::read(response).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<User, ApiError> {
        log::info!("📝 Registering {}", request.email);
        self.post("auth/register", request).await
    }

    // ------------------------------------------------------------------------
    // Users
    // ------------------------------------------------------------------------

    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.get("users/me").await
    }

    pub async fn update_current_user(&self, update: &UserUpdate) -> Result<User, ApiError> {
        self.patch("users/me", update).await
    }

    // ------------------------------------------------------------------------
    // Catalog & checkout
    // ------------------------------------------------------------------------

    pub async fn search_medicines(&self, search: &MedicineSearch) -> Result<Vec<Medicine>, ApiError> {
        let medicines: Vec<Medicine> = self.post("medicines/search", search).await?;
        log::info!(
            "💊 {} medicines (offset {})",
            medicines.len(),
            search.pagination.offset
        );
        Ok(medicines)
    }

    pub async fn search_pickup_points(&self, search: &PickupPointSearch) -> Result<Vec<PickupPoint>, ApiError> {
        self.post("pickup-points/search", search).await
    }

    pub async fn search_machines(&self, search: &MachineSearch) -> Result<Vec<Machine>, ApiError> {
        self.post("machines/search", search).await
    }

    pub async fn create_order(&self, order: &CreateOrder) -> Result<Order, ApiError> {
        log::info!("🧾 Creating order with {} lines", order.medicines.len());
        let created: Order = self.post("orders/", order).await?;
        log::info!("✅ Order {} created ({})", created.id, created.price_label());
        Ok(created)
    }

    // ------------------------------------------------------------------------
    // Orders
    // ------------------------------------------------------------------------

    pub async fn search_orders(&self, search: &OrderSearch) -> Result<Vec<Order>, ApiError> {
        self.post("orders/search", search).await
    }

    pub async fn get_order(&self, order_id: &str) -> Result<OrderDetail, ApiError> {
        self.get(&format!("orders/{}", order_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slashes() {
        let client = ApiClient::new("http://localhost:8000/api/v1/");
        assert_eq!(client.url("/orders/search"), "http://localhost:8000/api/v1/orders/search");
        assert_eq!(client.url("orders/"), "http://localhost:8000/api/v1/orders/");
    }

    #[test]
    fn bearer_header_only_with_token() {
        let client = ApiClient::new("http://api");
        assert_eq!(client.authorization_header(), None);

        let client = client.with_token(Some("jwt".to_string()));
        assert_eq!(client.authorization_header().as_deref(), Some("Bearer jwt"));

        let client = client.with_token(None);
        assert_eq!(client.authorization_header(), None);
    }

    #[test]
    fn empty_token_is_not_sent() {
        let client = ApiClient::new("http://api").with_token(Some(String::new()));
        assert_eq!(client.authorization_header(), None);
    }
}
