// ============================================================================
// AUTH VIEWMODEL - LÓGICA DE SESIÓN
// ============================================================================
// Orquesta login, registro, logout e hidratación contra el ApiClient y
// aplica los resultados sobre SessionState. Devuelve la ruta destino;
// las vistas se encargan de navegar y mostrar toasts.
// ============================================================================

use crate::models::{ClientProfile, LoginRequest, OwnershipResponse, RegisterRequest};
use crate::services::{ApiClient, ApiError};
use crate::state::{DashboardTab, Route, SessionState};
use crate::utils::{clear_token, load_token, save_token};

/// ViewModel de autenticación - SOLO lógica de negocio
pub struct AuthViewModel {
    api: ApiClient,
}

impl AuthViewModel {
    pub fn new() -> Self {
        Self {
            api: ApiClient::new(),
        }
    }

    /// Hidratar la sesión desde el token persistido. Se ejecuta a lo sumo
    /// una vez por proceso y nunca propaga error al caller: cualquier falla
    /// borra el token y deja la sesión vacía.
    pub async fn hydrate(&self, session: &SessionState) {
        if !session.begin_hydration() {
            log::info!("ℹ️ Hidratación ya realizada, ignorando");
            return;
        }
        if load_token().is_none() {
            session.set_loading(false);
            return;
        }

        log::info!("💾 Token encontrado, restaurando sessão...");
        session.set_loading(true);

        let profile = self.api.get_my_profile().await;
        // Ownership debe quedar conocido antes de resolver la hidratación
        let ownership = if profile.is_ok() {
            Some(self.api.check_ownership().await)
        } else {
            None
        };

        if Self::apply_hydration(session, profile, ownership) {
            clear_token();
        }
        session.set_loading(false);
    }

    /// Aplicar los resultados de la hidratación sobre la sesión.
    /// Devuelve true si el token persistido fue rechazado y debe borrarse.
    /// Sin red ni storage: las llamadas y el borrado quedan en `hydrate`.
    fn apply_hydration(
        session: &SessionState,
        profile: Result<ClientProfile, ApiError>,
        ownership: Option<Result<OwnershipResponse, ApiError>>,
    ) -> bool {
        match profile {
            Ok(profile) => {
                session.apply_profile(profile);
                match ownership {
                    Some(Ok(ownership)) => session.apply_ownership(&ownership),
                    other => {
                        if let Some(Err(e)) = other {
                            log::warn!("⚠️ Erro verificando ownership na hidratação: {}", e);
                        }
                        session.apply_ownership(&OwnershipResponse {
                            has_establishment: false,
                            establishment_name: None,
                        });
                    }
                }
                log::info!("✅ Sessão restaurada desde o token persistido");
                false
            }
            Err(e) => {
                log::error!("❌ Token inválido ou expirado, limpando sessão: {}", e);
                session.clear();
                true
            }
        }
    }

    /// Login + verificación de ownership. Devuelve la ruta destino.
    pub async fn sign_in(
        &self,
        session: &SessionState,
        email: &str,
        password: &str,
    ) -> Result<Route, ApiError> {
        let payload = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let auth = self.api.login(&payload).await?;

        if let Err(e) = save_token(&auth.access_token) {
            log::error!("❌ Error guardando token: {}", e);
        }
        session.apply_profile(auth.client);

        log::info!("🔎 Verificando se o usuário já tem estabelecimento...");
        match self.api.check_ownership().await {
            Ok(ownership) => session.apply_ownership(&ownership),
            Err(e) => {
                // Mismo criterio que la hidratación: falla del check no
                // bloquea el login, reporta "sin tienda" y queda conocido
                log::warn!("⚠️ Erro verificando ownership: {}", e);
                session.apply_ownership(&OwnershipResponse {
                    has_establishment: false,
                    establishment_name: None,
                });
            }
        }

        Ok(Self::route_after_sign_in(session.get_has_establishment()))
    }

    /// Registro. Una cuenta nueva nunca tiene tienda: se fuerza
    /// has_establishment = false sin consultar al servidor.
    pub async fn sign_up(
        &self,
        session: &SessionState,
        payload: RegisterRequest,
    ) -> Result<Route, ApiError> {
        let auth = self.api.register(&payload).await?;

        if let Err(e) = save_token(&auth.access_token) {
            log::error!("❌ Error guardando token: {}", e);
        }
        session.apply_profile(auth.client);
        session.force_no_establishment();

        Ok(Route::RegisterStore)
    }

    /// Logout: borra el token persistido y vacía la sesión.
    /// Sin llamadas de red. Idempotente.
    pub fn sign_out(&self, session: &SessionState) {
        log::info!("👋 Logout - limpando sessão");
        clear_token();
        session.clear();
    }

    /// Decisión de ruta post-login según ownership
    pub fn route_after_sign_in(has_establishment: bool) -> Route {
        if has_establishment {
            Route::Dashboard(DashboardTab::Products)
        } else {
            Route::RegisterStore
        }
    }

    /// Validación local del formulario de login (nunca llega a la red)
    pub fn validate_login(email: &str, password: &str) -> Result<(), ApiError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(ApiError::Validation("Preencha todos os campos".to_string()));
        }
        Ok(())
    }
}

impl Default for AuthViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AuthResponse;
    use crate::state::{DashboardTab, SessionState};

    #[test]
    fn route_follows_ownership_result() {
        assert_eq!(
            AuthViewModel::route_after_sign_in(true),
            Route::Dashboard(DashboardTab::Products)
        );
        assert_eq!(
            AuthViewModel::route_after_sign_in(false),
            Route::RegisterStore
        );
    }

    #[test]
    fn login_validation_rejects_empty_fields() {
        assert!(AuthViewModel::validate_login("", "secret").is_err());
        assert!(AuthViewModel::validate_login("a@b.com", "").is_err());
        assert!(AuthViewModel::validate_login("a@b.com", "secret").is_ok());
    }

    // Escenario completo de login contra respuestas reales del backend:
    // token t1 + ownership {hasEstablishment: true, establishmentName: "Loja X"}
    #[test]
    fn sign_in_scenario_populates_session_and_routes_to_dashboard() {
        let auth: AuthResponse = serde_json::from_str(
            r#"{
                "access_token": "t1",
                "client": {
                    "id": 1,
                    "name": "Ana",
                    "email": "a@b.com",
                    "cpf": "111.222.333-44",
                    "date_of_birth": "1992-01-20",
                    "points_balance": 0,
                    "created_at": "2025-02-01T12:00:00Z"
                }
            }"#,
        )
        .unwrap();
        let ownership: OwnershipResponse = serde_json::from_str(
            r#"{ "hasEstablishment": true, "establishmentName": "Loja X" }"#,
        )
        .unwrap();

        let session = SessionState::new();
        session.apply_profile(auth.client);
        session.apply_ownership(&ownership);

        assert!(session.is_authenticated());
        assert!(session.get_has_establishment());
        assert_eq!(session.get_establishment_name().as_deref(), Some("Loja X"));
        assert_eq!(
            AuthViewModel::route_after_sign_in(session.get_has_establishment()),
            Route::Dashboard(DashboardTab::Products)
        );
    }

    // Tras sign_up el ownership queda forzado en false aunque el servidor
    // hubiera reportado una tienda: la ruta es siempre RegisterStore.
    #[test]
    fn sign_up_forces_no_establishment_and_register_store_route() {
        let session = SessionState::new();
        session.apply_ownership(&OwnershipResponse {
            has_establishment: true,
            establishment_name: Some("Loja Fantasma".to_string()),
        });

        session.force_no_establishment();

        assert!(!session.get_has_establishment());
        assert!(session.is_ownership_known());
        assert!(session.get_establishment_name().is_none());
        assert_eq!(
            AuthViewModel::route_after_sign_in(session.get_has_establishment()),
            Route::RegisterStore
        );
    }

    fn sample_profile() -> ClientProfile {
        serde_json::from_str(
            r#"{
                "id": 1,
                "name": "Ana",
                "email": "a@b.com",
                "cpf": "111.222.333-44",
                "date_of_birth": "1992-01-20",
                "points_balance": 0,
                "created_at": "2025-02-01T12:00:00Z"
            }"#,
        )
        .unwrap()
    }

    // Token persistido rechazado por el backend: la sesión queda vacía
    // y el token debe borrarse del storage.
    #[test]
    fn rejected_token_leaves_session_empty_and_drops_the_token() {
        let session = SessionState::new();

        let drop_token = AuthViewModel::apply_hydration(
            &session,
            Err(ApiError::Auth("Sessão expirada".to_string())),
            None,
        );

        assert!(drop_token);
        assert!(!session.is_authenticated());
        assert!(session.get_client().is_none());
        assert!(!session.is_ownership_known());
    }

    #[test]
    fn hydration_with_valid_token_restores_profile_and_ownership() {
        let session = SessionState::new();

        let drop_token = AuthViewModel::apply_hydration(
            &session,
            Ok(sample_profile()),
            Some(Ok(OwnershipResponse {
                has_establishment: true,
                establishment_name: Some("Loja X".to_string()),
            })),
        );

        assert!(!drop_token);
        assert!(session.is_authenticated());
        assert!(session.get_has_establishment());
        assert_eq!(session.get_establishment_name().as_deref(), Some("Loja X"));
    }

    // Falla del check de ownership: mismo criterio que sign_in, la sesión
    // queda autenticada con ownership conocido en false y sin borrar token.
    #[test]
    fn hydration_ownership_failure_resolves_to_no_establishment() {
        let session = SessionState::new();

        let drop_token = AuthViewModel::apply_hydration(
            &session,
            Ok(sample_profile()),
            Some(Err(ApiError::Network("offline".to_string()))),
        );

        assert!(!drop_token);
        assert!(session.is_authenticated());
        assert!(session.is_ownership_known());
        assert!(!session.get_has_establishment());
    }
}
