// ============================================================================
// APP VIEW - Despachador de vistas
// ============================================================================
// No hay router de URL: la vista actual es un enum y el render despacha
// sobre él. `resolve_route` aplica las guardas de sesión ANTES de
// renderizar: rutas privadas exigen login, y ninguna decisión que lea
// `has_establishment` se toma sin `ownership_known`.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::state::{AppState, DashboardTab, Route};
use crate::views::{
    render_dashboard, render_landing, render_login, render_register, render_register_store,
};

/// Guardas de navegación. Devuelve la ruta que corresponde renderizar
/// dado el estado de sesión, corrigiendo la ruta pedida si hace falta.
pub fn resolve_route(state: &AppState) -> Route {
    let requested = state.current_route();
    let session = &state.session;

    if !session.is_authenticated() {
        // Sin login solo hay rutas públicas
        return match requested {
            Route::Landing | Route::Login | Route::Register => requested,
            Route::RegisterStore | Route::Dashboard(_) => Route::Landing,
        };
    }

    if !session.is_ownership_known() {
        // Autenticado pero ownership pendiente: no decidir todavía
        return requested;
    }

    let has_store = session.get_has_establishment();
    match requested {
        // Logueado no vuelve a las pantallas públicas
        Route::Landing | Route::Login | Route::Register => {
            if has_store {
                Route::Dashboard(DashboardTab::Products)
            } else {
                Route::RegisterStore
            }
        }
        Route::RegisterStore => {
            if has_store {
                Route::Dashboard(DashboardTab::Products)
            } else {
                Route::RegisterStore
            }
        }
        Route::Dashboard(tab) => {
            if has_store {
                Route::Dashboard(tab)
            } else {
                Route::RegisterStore
            }
        }
    }
}

/// Renderizar la vista actual completa
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    if state.session.get_loading() {
        return render_splash();
    }

    let route = resolve_route(state);
    if route != state.current_route() {
        // Corregir la ruta sin notificar: ya estamos dentro del render
        *state.route.borrow_mut() = route;
    }

    match route {
        Route::Landing => render_landing(state),
        Route::Login => render_login(state),
        Route::Register => render_register(state),
        Route::RegisterStore => render_register_store(state),
        Route::Dashboard(tab) => render_dashboard(state, tab),
    }
}

/// Pantalla de carga durante la hidratación de sesión
fn render_splash() -> Result<Element, JsValue> {
    let screen = ElementBuilder::new("div")?.class("splash-screen").build();
    let spinner = ElementBuilder::new("div")?.class("spinner").build();
    let text = ElementBuilder::new("p")?.text("Carregando...").build();
    crate::dom::append_child(&screen, &spinner)?;
    crate::dom::append_child(&screen, &text)?;
    Ok(screen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClientProfile, OwnershipResponse};

    fn profile() -> ClientProfile {
        ClientProfile {
            id: 1,
            name: "Ana".to_string(),
            email: "ana@loja.com".to_string(),
            cpf: "111.222.333-44".to_string(),
            date_of_birth: "1992-08-10".to_string(),
            points_balance: 0,
            created_at: "2025-01-01T00:00:00Z".to_string(),
        }
    }

    fn state_at(route: Route) -> AppState {
        let state = AppState::new();
        *state.route.borrow_mut() = route;
        state
    }

    #[test]
    fn anonymous_user_cannot_reach_private_routes() {
        let state = state_at(Route::Dashboard(DashboardTab::Orders));
        assert_eq!(resolve_route(&state), Route::Landing);

        let state = state_at(Route::RegisterStore);
        assert_eq!(resolve_route(&state), Route::Landing);

        let state = state_at(Route::Login);
        assert_eq!(resolve_route(&state), Route::Login);
    }

    #[test]
    fn ownership_decision_waits_until_known() {
        let state = state_at(Route::Dashboard(DashboardTab::Products));
        state.session.apply_profile(profile());
        // ownership todavía desconocido: la ruta pedida se respeta
        assert_eq!(
            resolve_route(&state),
            Route::Dashboard(DashboardTab::Products)
        );
    }

    #[test]
    fn owner_is_sent_to_dashboard_and_kept_out_of_store_setup() {
        let state = state_at(Route::RegisterStore);
        state.session.apply_profile(profile());
        state.session.apply_ownership(&OwnershipResponse {
            has_establishment: true,
            establishment_name: Some("Loja X".to_string()),
        });
        assert_eq!(
            resolve_route(&state),
            Route::Dashboard(DashboardTab::Products)
        );

        // Las pantallas públicas también redirigen al panel
        *state.route.borrow_mut() = Route::Login;
        assert_eq!(
            resolve_route(&state),
            Route::Dashboard(DashboardTab::Products)
        );
    }

    #[test]
    fn user_without_store_is_sent_to_store_setup() {
        let state = state_at(Route::Dashboard(DashboardTab::Customize));
        state.session.apply_profile(profile());
        state.session.force_no_establishment();
        assert_eq!(resolve_route(&state), Route::RegisterStore);
    }

    #[test]
    fn dashboard_tab_is_preserved_for_owners() {
        let state = state_at(Route::Dashboard(DashboardTab::Orders));
        state.session.apply_profile(profile());
        state.session.update_establishment_info("Loja X");
        assert_eq!(resolve_route(&state), Route::Dashboard(DashboardTab::Orders));
    }
}
