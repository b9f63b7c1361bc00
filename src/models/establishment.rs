use serde::{Deserialize, Serialize};

/// Establecimiento (tienda) del lojista, propiedad del servidor
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Establishment {
    pub id: String,
    pub owner_client_id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub address: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CreateEstablishmentPayload {
    pub name: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UpdateEstablishmentPayload {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
}

/// Respuesta de GET /establishments/check-ownership
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct OwnershipResponse {
    #[serde(rename = "hasEstablishment")]
    pub has_establishment: bool,
    #[serde(rename = "establishmentName", default)]
    pub establishment_name: Option<String>,
}
