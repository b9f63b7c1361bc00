// ============================================================================
// ESTABLISHMENT VIEWMODEL - CREACIÓN Y PERSONALIZACIÓN DE LA TIENDA
// ============================================================================

use crate::models::{CreateEstablishmentPayload, Establishment, UpdateEstablishmentPayload};
use crate::services::{ApiClient, ApiError};
use crate::state::SessionState;

pub struct EstablishmentViewModel {
    api: ApiClient,
}

impl EstablishmentViewModel {
    pub fn new() -> Self {
        Self {
            api: ApiClient::new(),
        }
    }

    /// Crear la tienda y promover la sesión a "dueño de establecimiento"
    pub async fn create_store(
        &self,
        session: &SessionState,
        payload: &CreateEstablishmentPayload,
    ) -> Result<Establishment, ApiError> {
        let establishment = self.api.create_establishment(payload).await?;
        log::info!("🏪 Loja criada: {}", establishment.name);
        session.update_establishment_info(&establishment.name);
        Ok(establishment)
    }

    pub async fn load_store(&self) -> Result<Establishment, ApiError> {
        self.api.get_my_establishment().await
    }

    /// Guardar la personalización y refrescar el nombre en la sesión
    pub async fn save_store(
        &self,
        session: &SessionState,
        payload: &UpdateEstablishmentPayload,
    ) -> Result<Establishment, ApiError> {
        let establishment = self.api.update_establishment(payload).await?;
        session.update_establishment_info(&establishment.name);
        Ok(establishment)
    }
}

impl Default for EstablishmentViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Formulario de creación de tienda (paso posterior al registro)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StoreForm {
    pub name: String,
    pub category: String,
    pub description: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

impl StoreForm {
    pub fn to_payload(&self) -> Result<CreateEstablishmentPayload, String> {
        if self.name.trim().is_empty()
            || self.category.trim().is_empty()
            || self.address.trim().is_empty()
        {
            return Err("Preencha nome, categoria e endereço da loja".to_string());
        }
        Ok(CreateEstablishmentPayload {
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            description: non_empty(&self.description),
            address: self.address.trim().to_string(),
            phone: non_empty(&self.phone),
            email: non_empty(&self.email),
        })
    }
}

/// Formulario de la pestaña "Personalizar"
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CustomizeForm {
    pub name: String,
    pub description: String,
    pub logo_url: String,
    pub cover_url: String,
}

impl CustomizeForm {
    /// Pre-cargar con los valores actuales de la tienda
    pub fn from_establishment(establishment: &Establishment) -> Self {
        Self {
            name: establishment.name.clone(),
            description: establishment.description.clone(),
            logo_url: establishment.logo_url.clone().unwrap_or_default(),
            cover_url: establishment.cover_url.clone().unwrap_or_default(),
        }
    }

    pub fn to_payload(&self) -> Result<UpdateEstablishmentPayload, String> {
        if self.name.trim().is_empty() {
            return Err("O nome da loja não pode ficar vazio".to_string());
        }
        Ok(UpdateEstablishmentPayload {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            logo_url: non_empty(&self.logo_url),
            cover_url: non_empty(&self.cover_url),
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn establishment() -> Establishment {
        Establishment {
            id: "est_1".to_string(),
            owner_client_id: "cli_1".to_string(),
            name: "Burguer da Vila".to_string(),
            category: "Lanchonete".to_string(),
            description: "O melhor hambúrguer do bairro".to_string(),
            address: "Rua das Flores, 42".to_string(),
            logo_url: Some("https://cdn.example.com/logo.png".to_string()),
            cover_url: None,
            created_at: "2025-02-01T10:00:00Z".to_string(),
            updated_at: "2025-02-01T10:00:00Z".to_string(),
        }
    }

    #[test]
    fn store_form_requires_name_category_and_address() {
        let form = StoreForm {
            name: "Burguer da Vila".to_string(),
            category: String::new(),
            address: "Rua das Flores, 42".to_string(),
            ..Default::default()
        };
        assert!(form.to_payload().is_err());
    }

    #[test]
    fn store_form_omits_empty_optionals() {
        let form = StoreForm {
            name: "Burguer da Vila".to_string(),
            category: "Lanchonete".to_string(),
            address: "Rua das Flores, 42".to_string(),
            ..Default::default()
        };
        let payload = form.to_payload().unwrap();
        assert!(payload.description.is_none());
        assert!(payload.phone.is_none());
        assert!(payload.email.is_none());
    }

    #[test]
    fn customize_form_prefills_from_the_store() {
        let form = CustomizeForm::from_establishment(&establishment());
        assert_eq!(form.name, "Burguer da Vila");
        assert_eq!(form.description, "O melhor hambúrguer do bairro");
        assert_eq!(form.logo_url, "https://cdn.example.com/logo.png");
        assert_eq!(form.cover_url, "");
    }

    #[test]
    fn customize_form_rejects_empty_name() {
        let mut form = CustomizeForm::from_establishment(&establishment());
        form.name = " ".to_string();
        assert!(form.to_payload().is_err());
    }
}
