// ============================================================================
// APP - Aplicación principal
// ============================================================================
// Monta el árbol en #app y coordina el ciclo render → evento → re-render.
// La hidratación de sesión corre UNA sola vez por proceso, al arrancar:
// mientras tanto la vista muestra el splash (session.loading).
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, clear_children, get_element_by_id};
use crate::state::{AppState, Route};
use crate::utils::load_token;
use crate::viewmodels::AuthViewModel;
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    /// Crear nueva aplicación y disparar la hidratación de sesión
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();

        // Con token persistido mostramos el splash hasta hidratar
        if load_token().is_some() {
            state.session.set_loading(true);
        }

        // Re-render automático ante cambios de estado.
        // Timeout(0) batchea múltiples notificaciones del mismo tick.
        state.subscribe_to_changes(move || {
            Timeout::new(0, move || {
                crate::rerender_app();
            })
            .forget();
        });

        // Hidratación: restaurar sesión desde el token guardado
        {
            let state_clone = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let vm = AuthViewModel::new();
                vm.hydrate(&state_clone.session).await;

                let route = if state_clone.session.is_authenticated() {
                    AuthViewModel::route_after_sign_in(
                        state_clone.session.get_has_establishment(),
                    )
                } else {
                    Route::Landing
                };
                log::info!("💧 [APP] Hidratação concluída, rota inicial: {:?}", route);
                state_clone.navigate(route);
            });
        }

        Ok(Self { state, root })
    }

    /// Renderizar aplicación completa
    pub fn render(&mut self) -> Result<(), JsValue> {
        clear_children(&self.root);
        let app_view = render_app(&self.state)?;
        append_child(&self.root, &app_view)?;
        Ok(())
    }
}
