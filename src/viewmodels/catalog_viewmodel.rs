// ============================================================================
// CATALOG VIEWMODEL - LÓGICA DEL CATÁLOGO DE PRODUCTOS
// ============================================================================
// Fetch único al montar + parche optimista local tras cada mutación
// exitosa (write-through cache sin invalidación, limitación conocida).
// ============================================================================

use crate::models::{Product, ProductPayload};
use crate::services::{ApiClient, ApiError};

/// ViewModel del catálogo - SOLO lógica de negocio
pub struct CatalogViewModel {
    api: ApiClient,
}

impl CatalogViewModel {
    pub fn new() -> Self {
        Self {
            api: ApiClient::new(),
        }
    }

    pub async fn load_products(&self) -> Result<Vec<Product>, ApiError> {
        let products = self.api.get_my_products().await?;
        log::info!("📦 {} produtos carregados", products.len());
        Ok(products)
    }

    pub async fn create_product(&self, payload: &ProductPayload) -> Result<Product, ApiError> {
        self.api.create_product(payload).await
    }

    pub async fn update_product(
        &self,
        product_id: &str,
        payload: &ProductPayload,
    ) -> Result<Product, ApiError> {
        self.api.update_product(product_id, payload).await
    }
}

impl Default for CatalogViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Estado local del formulario de alta/edición de producto
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub points_price: String,
    pub description: String,
    pub photo_url: String,
}

impl ProductForm {
    /// Pre-cargar el formulario de edición con los valores actuales
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: format!("{}", product.price),
            points_price: product
                .points_price
                .map(|p| p.to_string())
                .unwrap_or_default(),
            description: product.description.clone().unwrap_or_default(),
            photo_url: product.photo_url.clone().unwrap_or_default(),
        }
    }

    /// Validar y armar el payload. Rechazo = cero tráfico de red.
    pub fn to_payload(&self) -> Result<ProductPayload, String> {
        if self.name.trim().is_empty() || self.price.trim().is_empty() {
            return Err("Preencha nome e preço do produto".to_string());
        }
        let points_price = if self.points_price.trim().is_empty() {
            None
        } else {
            Some(
                self.points_price
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| "Preço em pontos inválido".to_string())?,
            )
        };
        Ok(ProductPayload {
            name: self.name.trim().to_string(),
            // El backend espera el precio como string
            price: self.price.trim().to_string(),
            points_price,
            description: if self.description.trim().is_empty() {
                None
            } else {
                Some(self.description.trim().to_string())
            },
            photo_url: if self.photo_url.trim().is_empty() {
                None
            } else {
                Some(self.photo_url.trim().to_string())
            },
        })
    }
}

/// Parche optimista: reemplazar por id, o agregar al final si es nuevo
pub fn upsert_product(products: &mut Vec<Product>, product: Product) {
    if let Some(slot) = products.iter_mut().find(|p| p.id == product.id) {
        *slot = product;
    } else {
        products.push(product);
    }
}

/// Remoción local. El backend todavía no expone delete de productos.
pub fn remove_product(products: &mut Vec<Product>, product_id: &str) {
    products.retain(|p| p.id != product_id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str) -> Product {
        Product {
            id: id.to_string(),
            establishment_id: "est_1".to_string(),
            name: name.to_string(),
            description: Some("Com queijo e bacon".to_string()),
            price: 25.9,
            points_price: Some(250),
            photo_url: None,
            is_active: true,
            created_at: "2025-03-01T09:00:00Z".to_string(),
        }
    }

    #[test]
    fn edit_form_prefills_every_field_from_the_product() {
        let form = ProductForm::from_product(&product("p1", "Hambúrguer Clássico"));

        assert_eq!(form.name, "Hambúrguer Clássico");
        assert_eq!(form.price, "25.9");
        assert_eq!(form.points_price, "250");
        assert_eq!(form.description, "Com queijo e bacon");
        assert_eq!(form.photo_url, "");
    }

    #[test]
    fn empty_name_is_rejected_before_any_network_call() {
        let mut form = ProductForm::from_product(&product("p1", "Hambúrguer"));
        form.name = "  ".to_string();

        let err = form.to_payload().unwrap_err();
        assert_eq!(err, "Preencha nome e preço do produto");
    }

    #[test]
    fn payload_sends_price_as_string_and_omits_empty_optionals() {
        let form = ProductForm {
            name: "Suco".to_string(),
            price: "8.50".to_string(),
            points_price: String::new(),
            description: String::new(),
            photo_url: String::new(),
        };

        let payload = form.to_payload().unwrap();
        assert_eq!(payload.price, "8.50");
        assert!(payload.points_price.is_none());
        assert!(payload.description.is_none());
        assert!(payload.photo_url.is_none());
    }

    #[test]
    fn invalid_points_price_is_rejected() {
        let mut form = ProductForm::from_product(&product("p1", "Suco"));
        form.points_price = "muitos".to_string();
        assert!(form.to_payload().is_err());
    }

    #[test]
    fn upsert_replaces_by_id_or_appends() {
        let mut products = vec![product("p1", "Hambúrguer"), product("p2", "Suco")];

        // Edición: reemplaza en el lugar
        upsert_product(&mut products, product("p1", "Hambúrguer Duplo"));
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "Hambúrguer Duplo");

        // Alta: agrega al final
        upsert_product(&mut products, product("p3", "Batata"));
        assert_eq!(products.len(), 3);
        assert_eq!(products[2].name, "Batata");
    }

    #[test]
    fn remove_is_local_and_by_id() {
        let mut products = vec![product("p1", "Hambúrguer"), product("p2", "Suco")];
        remove_product(&mut products, "p1");
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, "p2");
    }
}
