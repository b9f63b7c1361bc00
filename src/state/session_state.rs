// ============================================================================
// SESSION STATE - Estado de sesión del lojista
// ============================================================================
// Única fuente de verdad de "quién está logueado" y "si ya administra una
// tienda". Existe exactamente una por proceso, dentro de AppState.
// `client.is_some()` es LA definición de autenticado; `ownership_known`
// debe ser true antes de cualquier decisión de ruta que lea
// `has_establishment`.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{ClientProfile, OwnershipResponse};

/// Estado de sesión - mutaciones puras, sin red ni storage
#[derive(Clone)]
pub struct SessionState {
    pub client: Rc<RefCell<Option<ClientProfile>>>,
    pub ownership_known: Rc<RefCell<bool>>,
    pub has_establishment: Rc<RefCell<bool>>,
    pub establishment_name: Rc<RefCell<Option<String>>>,
    pub loading: Rc<RefCell<bool>>,
    hydrated: Rc<RefCell<bool>>,
}

impl SessionState {
    /// Crear estado de sesión vacío
    pub fn new() -> Self {
        Self {
            client: Rc::new(RefCell::new(None)),
            ownership_known: Rc::new(RefCell::new(false)),
            has_establishment: Rc::new(RefCell::new(false)),
            establishment_name: Rc::new(RefCell::new(None)),
            loading: Rc::new(RefCell::new(false)),
            hydrated: Rc::new(RefCell::new(false)),
        }
    }

    /// Autenticado = perfil presente
    pub fn is_authenticated(&self) -> bool {
        self.client.borrow().is_some()
    }

    pub fn get_client(&self) -> Option<ClientProfile> {
        self.client.borrow().clone()
    }

    /// Reemplazar el perfil completo (tras login/registro/hidratación)
    pub fn apply_profile(&self, profile: ClientProfile) {
        *self.client.borrow_mut() = Some(profile);
    }

    /// Aplicar el resultado del ownership check
    pub fn apply_ownership(&self, ownership: &OwnershipResponse) {
        *self.has_establishment.borrow_mut() = ownership.has_establishment;
        *self.establishment_name.borrow_mut() = ownership.establishment_name.clone();
        *self.ownership_known.borrow_mut() = true;
    }

    /// Cuenta recién creada: nunca tiene tienda, sin consultar al servidor
    pub fn force_no_establishment(&self) {
        *self.has_establishment.borrow_mut() = false;
        *self.establishment_name.borrow_mut() = None;
        *self.ownership_known.borrow_mut() = true;
    }

    /// Mutación local tras crear la tienda, sin refetch de sesión
    pub fn update_establishment_info(&self, name: &str) {
        *self.has_establishment.borrow_mut() = true;
        *self.establishment_name.borrow_mut() = Some(name.to_string());
        *self.ownership_known.borrow_mut() = true;
    }

    /// Volver al estado vacío (logout). Idempotente.
    /// No toca el flag de hidratación: hay una sola hidratación por proceso.
    pub fn clear(&self) {
        *self.client.borrow_mut() = None;
        *self.ownership_known.borrow_mut() = false;
        *self.has_establishment.borrow_mut() = false;
        *self.establishment_name.borrow_mut() = None;
        *self.loading.borrow_mut() = false;
    }

    pub fn get_has_establishment(&self) -> bool {
        *self.has_establishment.borrow()
    }

    pub fn get_establishment_name(&self) -> Option<String> {
        self.establishment_name.borrow().clone()
    }

    pub fn is_ownership_known(&self) -> bool {
        *self.ownership_known.borrow()
    }

    pub fn set_loading(&self, loading: bool) {
        *self.loading.borrow_mut() = loading;
    }

    pub fn get_loading(&self) -> bool {
        *self.loading.borrow()
    }

    /// Marcar el inicio de la hidratación. Devuelve false si ya ocurrió:
    /// montajes posteriores no deben re-disparar el flujo.
    pub fn begin_hydration(&self) -> bool {
        let mut hydrated = self.hydrated.borrow_mut();
        if *hydrated {
            return false;
        }
        *hydrated = true;
        true
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> ClientProfile {
        ClientProfile {
            id: 7,
            name: "João Lima".to_string(),
            email: "a@b.com".to_string(),
            cpf: "123.456.789-00".to_string(),
            date_of_birth: "1990-05-01".to_string(),
            points_balance: 120,
            created_at: "2025-01-15T10:00:00Z".to_string(),
        }
    }

    #[test]
    fn starts_empty_and_unauthenticated() {
        let session = SessionState::new();
        assert!(!session.is_authenticated());
        assert!(!session.is_ownership_known());
        assert!(!session.get_has_establishment());
        assert!(session.get_establishment_name().is_none());
    }

    #[test]
    fn clear_always_yields_empty_state() {
        let session = SessionState::new();
        session.apply_profile(profile());
        session.apply_ownership(&OwnershipResponse {
            has_establishment: true,
            establishment_name: Some("Loja X".to_string()),
        });
        session.set_loading(true);

        session.clear();

        assert!(!session.is_authenticated());
        assert!(!session.is_ownership_known());
        assert!(!session.get_has_establishment());
        assert!(session.get_establishment_name().is_none());
        assert!(!session.get_loading());

        // Idempotente: limpiar de nuevo no cambia nada
        session.clear();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn apply_ownership_marks_ownership_as_known() {
        let session = SessionState::new();
        session.apply_ownership(&OwnershipResponse {
            has_establishment: false,
            establishment_name: None,
        });
        assert!(session.is_ownership_known());
        assert!(!session.get_has_establishment());
    }

    #[test]
    fn update_establishment_info_sets_ownership_locally() {
        let session = SessionState::new();
        session.apply_profile(profile());
        session.update_establishment_info("Padaria do João");

        assert!(session.get_has_establishment());
        assert!(session.is_ownership_known());
        assert_eq!(
            session.get_establishment_name().as_deref(),
            Some("Padaria do João")
        );
    }

    #[test]
    fn hydration_runs_at_most_once() {
        let session = SessionState::new();
        assert!(session.begin_hydration());
        assert!(!session.begin_hydration());
        // Ni siquiera el logout rehabilita la hidratación
        session.clear();
        assert!(!session.begin_hydration());
    }
}
