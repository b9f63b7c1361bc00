// ============================================================================
// DASHBOARD VIEW - Shell del panel del lojista
// ============================================================================
// Header con la identidad de la sesión, sidebar de pestañas y un área
// de contenido que despacha sobre la pestaña activa. Cambiar de pestaña
// navega (re-render global), el contenido de cada pestaña se monta fresco.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::state::{AppState, DashboardTab, Route};
use crate::viewmodels::AuthViewModel;
use crate::views::{render_customize_tab, render_orders_tab, render_products_tab};

impl DashboardTab {
    fn label(&self) -> &'static str {
        match self {
            DashboardTab::Products => "Produtos",
            DashboardTab::Orders => "Pedidos",
            DashboardTab::Customize => "Personalizar",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            DashboardTab::Products => "📦",
            DashboardTab::Orders => "🧾",
            DashboardTab::Customize => "🎨",
        }
    }

    fn all() -> [DashboardTab; 3] {
        [
            DashboardTab::Products,
            DashboardTab::Orders,
            DashboardTab::Customize,
        ]
    }
}

pub fn render_dashboard(state: &AppState, active: DashboardTab) -> Result<Element, JsValue> {
    log::info!("🎬 [DASHBOARD] render_dashboard({:?})", active);

    let screen = ElementBuilder::new("div")?.class("dashboard-screen").build();

    // Header
    let header = ElementBuilder::new("header")?.class("dashboard-header").build();

    let store_name = state
        .session
        .get_establishment_name()
        .unwrap_or_else(|| "Minha Loja".to_string());
    let title = ElementBuilder::new("h1")?.text(&store_name).build();
    append_child(&header, &title)?;

    let header_right = ElementBuilder::new("div")?.class("header-actions").build();
    if let Some(client) = state.session.get_client() {
        let greeting = ElementBuilder::new("span")?
            .class("header-user")
            .text(&format!("Olá, {}", client.name))
            .build();
        append_child(&header_right, &greeting)?;
    }

    let logout_btn = ElementBuilder::new("button")?
        .class("btn-logout")
        .text("Sair")
        .build();
    {
        let state = state.clone();
        on_click(&logout_btn, move |_| {
            AuthViewModel::new().sign_out(&state.session);
            state.navigate(Route::Landing);
        })?;
    }
    append_child(&header_right, &logout_btn)?;
    append_child(&header, &header_right)?;

    // Layout: sidebar + contenido
    let body = ElementBuilder::new("div")?.class("dashboard-body").build();

    let sidebar = ElementBuilder::new("nav")?.class("dashboard-sidebar").build();
    for tab in DashboardTab::all() {
        let class = if tab == active {
            "sidebar-tab active"
        } else {
            "sidebar-tab"
        };
        let tab_btn = ElementBuilder::new("button")?
            .class(class)
            .text(&format!("{} {}", tab.icon(), tab.label()))
            .build();
        {
            let state = state.clone();
            on_click(&tab_btn, move |_| {
                state.navigate(Route::Dashboard(tab));
            })?;
        }
        append_child(&sidebar, &tab_btn)?;
    }

    let content = ElementBuilder::new("main")?.class("dashboard-content").build();
    let tab_view = match active {
        DashboardTab::Products => render_products_tab(state)?,
        DashboardTab::Orders => render_orders_tab(state)?,
        DashboardTab::Customize => render_customize_tab(state)?,
    };
    append_child(&content, &tab_view)?;

    append_child(&body, &sidebar)?;
    append_child(&body, &content)?;

    append_child(&screen, &header)?;
    append_child(&screen, &body)?;
    Ok(screen)
}
