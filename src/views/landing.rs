// ============================================================================
// LANDING VIEW - Pantalla inicial para visitantes
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::state::{AppState, Route};

pub fn render_landing(state: &AppState) -> Result<Element, JsValue> {
    let screen = ElementBuilder::new("div")?.class("landing-screen").build();

    let hero = ElementBuilder::new("div")?.class("landing-hero").build();

    let logo = ElementBuilder::new("div")?
        .class("logo-icon")
        .text("🏪")
        .build();

    let title = ElementBuilder::new("h1")?.text("Painel do Lojista").build();

    let subtitle = ElementBuilder::new("p")?
        .text("Gerencie sua loja, produtos e pedidos em um só lugar")
        .build();

    append_child(&hero, &logo)?;
    append_child(&hero, &title)?;
    append_child(&hero, &subtitle)?;

    let actions = ElementBuilder::new("div")?.class("landing-actions").build();

    let login_btn = ElementBuilder::new("button")?
        .class("btn-primary")
        .text("Entrar")
        .build();
    {
        let state = state.clone();
        on_click(&login_btn, move |_| {
            state.navigate(Route::Login);
        })?;
    }

    let register_btn = ElementBuilder::new("button")?
        .class("btn-secondary")
        .text("Criar conta")
        .build();
    {
        let state = state.clone();
        on_click(&register_btn, move |_| {
            state.navigate(Route::Register);
        })?;
    }

    append_child(&actions, &login_btn)?;
    append_child(&actions, &register_btn)?;

    append_child(&screen, &hero)?;
    append_child(&screen, &actions)?;
    Ok(screen)
}
