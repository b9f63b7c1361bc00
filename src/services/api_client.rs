// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP contra el backend.
// El bearer token se inyecta desde localStorage en cada llamada autenticada;
// login/register son las únicas rutas sin token.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder};

use crate::models::{
    AuthResponse, ClientProfile, CreateEstablishmentPayload, Establishment, LoginRequest, Order,
    OrderStatus, OwnershipResponse, Product, ProductPayload, RegisterRequest,
    UpdateEstablishmentPayload,
};
use crate::services::error::{error_from_response, session_expired, ApiError, MSG_NETWORK};
use crate::utils::{load_token, BACKEND_URL};

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
        }
    }

    /// Inyectar el header Authorization si hay token persistido
    fn authorized(builder: RequestBuilder) -> RequestBuilder {
        match load_token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// POST /auth/login - credenciales → token + perfil
    pub async fn login(&self, payload: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let url = format!("{}/auth/login", self.base_url);

        log::info!("🔐 Tentando login para: {}", payload.email);

        let response = Request::post(&url)
            .json(payload)
            .map_err(|e| ApiError::Network(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|_| ApiError::Network(MSG_NETWORK.to_string()))?;

        if !response.ok() {
            return Err(error_from_response(response).await);
        }
        response
            .json::<AuthResponse>()
            .await
            .map_err(|e| ApiError::Server(format!("Parse error: {}", e)))
    }

    /// POST /auth/register - crear cuenta → token + perfil
    pub async fn register(&self, payload: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let url = format!("{}/auth/register", self.base_url);

        log::info!("📝 Registrando nova conta para: {}", payload.email);

        let response = Request::post(&url)
            .json(payload)
            .map_err(|e| ApiError::Network(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|_| ApiError::Network(MSG_NETWORK.to_string()))?;

        if !response.ok() {
            return Err(error_from_response(response).await);
        }
        response
            .json::<AuthResponse>()
            .await
            .map_err(|e| ApiError::Server(format!("Parse error: {}", e)))
    }

    /// GET /clients/me - perfil del cliente autenticado (objeto pelado)
    pub async fn get_my_profile(&self) -> Result<ClientProfile, ApiError> {
        let url = format!("{}/clients/me", self.base_url);

        let response = Self::authorized(Request::get(&url))
            .send()
            .await
            .map_err(|_| ApiError::Network(MSG_NETWORK.to_string()))?;

        if response.status() == 401 {
            return Err(session_expired());
        }
        if !response.ok() {
            return Err(error_from_response(response).await);
        }
        response
            .json::<ClientProfile>()
            .await
            .map_err(|e| ApiError::Server(format!("Parse error: {}", e)))
    }

    /// GET /establishments/check-ownership - ¿el usuario ya administra una tienda?
    pub async fn check_ownership(&self) -> Result<OwnershipResponse, ApiError> {
        let url = format!("{}/establishments/check-ownership", self.base_url);

        let response = Self::authorized(Request::get(&url))
            .send()
            .await
            .map_err(|_| ApiError::Network(MSG_NETWORK.to_string()))?;

        if !response.ok() {
            return Err(error_from_response(response).await);
        }
        response
            .json::<OwnershipResponse>()
            .await
            .map_err(|e| ApiError::Server(format!("Parse error: {}", e)))
    }

    /// POST /establishments - crear tienda
    pub async fn create_establishment(
        &self,
        payload: &CreateEstablishmentPayload,
    ) -> Result<Establishment, ApiError> {
        let url = format!("{}/establishments", self.base_url);

        log::info!("🏪 Criando estabelecimento: {}", payload.name);

        let response = Self::authorized(Request::post(&url))
            .json(payload)
            .map_err(|e| ApiError::Network(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|_| ApiError::Network(MSG_NETWORK.to_string()))?;

        if !response.ok() {
            return Err(error_from_response(response).await);
        }
        response
            .json::<Establishment>()
            .await
            .map_err(|e| ApiError::Server(format!("Parse error: {}", e)))
    }

    /// GET /establishments/my-store - tienda del lojista
    pub async fn get_my_establishment(&self) -> Result<Establishment, ApiError> {
        let url = format!("{}/establishments/my-store", self.base_url);

        let response = Self::authorized(Request::get(&url))
            .send()
            .await
            .map_err(|_| ApiError::Network(MSG_NETWORK.to_string()))?;

        if response.status() == 401 {
            return Err(session_expired());
        }
        if !response.ok() {
            return Err(error_from_response(response).await);
        }
        response
            .json::<Establishment>()
            .await
            .map_err(|e| ApiError::Server(format!("Parse error: {}", e)))
    }

    /// PUT /establishments/my-store - actualizar tienda
    pub async fn update_establishment(
        &self,
        payload: &UpdateEstablishmentPayload,
    ) -> Result<Establishment, ApiError> {
        let url = format!("{}/establishments/my-store", self.base_url);

        let response = Self::authorized(Request::put(&url))
            .json(payload)
            .map_err(|e| ApiError::Network(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|_| ApiError::Network(MSG_NETWORK.to_string()))?;

        if !response.ok() {
            return Err(error_from_response(response).await);
        }
        response
            .json::<Establishment>()
            .await
            .map_err(|e| ApiError::Server(format!("Parse error: {}", e)))
    }

    /// GET /establishments/my-store/products - catálogo de la tienda
    pub async fn get_my_products(&self) -> Result<Vec<Product>, ApiError> {
        let url = format!("{}/establishments/my-store/products", self.base_url);

        let response = Self::authorized(Request::get(&url))
            .send()
            .await
            .map_err(|_| ApiError::Network(MSG_NETWORK.to_string()))?;

        if !response.ok() {
            return Err(error_from_response(response).await);
        }
        response
            .json::<Vec<Product>>()
            .await
            .map_err(|e| ApiError::Server(format!("Parse error: {}", e)))
    }

    /// POST /establishments/my-store/products - crear producto
    pub async fn create_product(&self, payload: &ProductPayload) -> Result<Product, ApiError> {
        let url = format!("{}/establishments/my-store/products", self.base_url);

        log::info!("📦 Criando produto: {}", payload.name);

        let response = Self::authorized(Request::post(&url))
            .json(payload)
            .map_err(|e| ApiError::Network(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|_| ApiError::Network(MSG_NETWORK.to_string()))?;

        if !response.ok() {
            return Err(error_from_response(response).await);
        }
        response
            .json::<Product>()
            .await
            .map_err(|e| ApiError::Server(format!("Parse error: {}", e)))
    }

    /// PUT /establishments/my-store/products/:id - actualizar producto
    pub async fn update_product(
        &self,
        product_id: &str,
        payload: &ProductPayload,
    ) -> Result<Product, ApiError> {
        let url = format!(
            "{}/establishments/my-store/products/{}",
            self.base_url, product_id
        );

        let response = Self::authorized(Request::put(&url))
            .json(payload)
            .map_err(|e| ApiError::Network(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|_| ApiError::Network(MSG_NETWORK.to_string()))?;

        if !response.ok() {
            return Err(error_from_response(response).await);
        }
        response
            .json::<Product>()
            .await
            .map_err(|e| ApiError::Server(format!("Parse error: {}", e)))
    }

    /// GET /establishments/my-store/orders - pedidos de la tienda
    pub async fn get_store_orders(&self) -> Result<Vec<Order>, ApiError> {
        let url = format!("{}/establishments/my-store/orders", self.base_url);

        let response = Self::authorized(Request::get(&url))
            .send()
            .await
            .map_err(|_| ApiError::Network(MSG_NETWORK.to_string()))?;

        if !response.ok() {
            return Err(error_from_response(response).await);
        }
        response
            .json::<Vec<Order>>()
            .await
            .map_err(|e| ApiError::Server(format!("Parse error: {}", e)))
    }

    /// PATCH /establishments/my-store/orders/:id/status - cambiar estado.
    /// La vista parchea localmente con el estado enviado; el cuerpo de la
    /// respuesta se ignora.
    pub async fn update_order_status(
        &self,
        order_id: &str,
        status: OrderStatus,
    ) -> Result<(), ApiError> {
        let url = format!(
            "{}/establishments/my-store/orders/{}/status",
            self.base_url, order_id
        );

        log::info!("🧾 Atualizando status do pedido {} → {:?}", order_id, status);

        let response = Self::authorized(Request::patch(&url))
            .json(&serde_json::json!({ "status": status }))
            .map_err(|e| ApiError::Network(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|_| ApiError::Network(MSG_NETWORK.to_string()))?;

        if !response.ok() {
            return Err(error_from_response(response).await);
        }
        Ok(())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
