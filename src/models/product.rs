use serde::{Deserialize, Serialize};

/// Producto del catálogo de la tienda
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Product {
    pub id: String,
    pub establishment_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub points_price: Option<u32>,
    #[serde(default)]
    pub photo_url: Option<String>,
    pub is_active: bool,
    pub created_at: String,
}

/// Payload de creación/edición de producto.
/// El backend recibe el precio como string, no como número.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ProductPayload {
    pub name: String,
    pub price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points_price: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}
