// ============================================================================
// LOGIN VIEW - Autenticación del lojista
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_click, on_submit, ElementBuilder};
use crate::state::{AppState, Route};
use crate::viewmodels::AuthViewModel;
use crate::views::fields::{clear_field_error, error_box, labeled_input, show_field_error};

const ERROR_BOX_ID: &str = "login-error";

pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    log::info!("🎬 [LOGIN] render_login()");

    // Estado local del formulario (en closures)
    let email = Rc::new(RefCell::new(String::new()));
    let password = Rc::new(RefCell::new(String::new()));
    let submitting = Rc::new(RefCell::new(false));

    let screen = ElementBuilder::new("div")?.class("auth-screen").build();
    let container = ElementBuilder::new("div")?.class("auth-container").build();

    // Header
    let header = ElementBuilder::new("div")?.class("auth-header").build();
    let logo = ElementBuilder::new("div")?
        .class("logo-icon")
        .text("🏪")
        .build();
    let title = ElementBuilder::new("h1")?.text("Entrar").build();
    let subtitle = ElementBuilder::new("p")?
        .text("Acesse o painel da sua loja")
        .build();
    append_child(&header, &logo)?;
    append_child(&header, &title)?;
    append_child(&header, &subtitle)?;

    // Formulario
    let form = ElementBuilder::new("form")?.class("auth-form").build();

    let email_group = labeled_input(
        "login-email",
        "E-mail",
        "email",
        "seu@email.com",
        email.clone(),
    )?;
    let password_group = labeled_input(
        "login-password",
        "Senha",
        "password",
        "Sua senha",
        password.clone(),
    )?;
    let error_el = error_box(ERROR_BOX_ID)?;

    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-primary")
        .text("Entrar")
        .build();

    // Submit: validar, autenticar y navegar según ownership
    {
        let email = email.clone();
        let password = password.clone();
        let submitting = submitting.clone();
        let state = state.clone();

        on_submit(&form, move || {
            if *submitting.borrow() {
                return;
            }
            clear_field_error(ERROR_BOX_ID);

            let email_val = email.borrow().clone();
            let password_val = password.borrow().clone();
            if let Err(e) = AuthViewModel::validate_login(&email_val, &password_val) {
                show_field_error(ERROR_BOX_ID, &e.to_string());
                return;
            }

            *submitting.borrow_mut() = true;
            let submitting = submitting.clone();
            let state = state.clone();

            spawn_local(async move {
                let vm = AuthViewModel::new();
                match vm.sign_in(&state.session, &email_val, &password_val).await {
                    Ok(route) => {
                        log::info!("✅ [LOGIN] Sessão iniciada");
                        state.navigate(route);
                    }
                    Err(e) => {
                        log::error!("❌ [LOGIN] {}", e);
                        show_field_error(ERROR_BOX_ID, &e.to_string());
                    }
                }
                *submitting.borrow_mut() = false;
            });
        })?;
    }

    append_child(&form, &email_group)?;
    append_child(&form, &password_group)?;
    append_child(&form, &error_el)?;
    append_child(&form, &submit_btn)?;

    // Link a registro
    let footer = ElementBuilder::new("p")?.class("auth-footer").build();
    let link = ElementBuilder::new("a")?
        .attr("href", "#")?
        .text("Não tem conta? Cadastre-se")
        .build();
    {
        let state = state.clone();
        on_click(&link, move |e| {
            e.prevent_default();
            state.navigate(Route::Register);
        })?;
    }
    append_child(&footer, &link)?;

    append_child(&container, &header)?;
    append_child(&container, &form)?;
    append_child(&container, &footer)?;
    append_child(&screen, &container)?;
    Ok(screen)
}
