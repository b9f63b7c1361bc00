// ============================================================================
// REGISTER STORE VIEW - Creación del establecimiento
// ============================================================================
// Paso obligatorio post-registro: una cuenta sin tienda cae acá hasta
// crear la suya. El éxito promueve la sesión localmente y entra al panel.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_click, on_submit, ElementBuilder};
use crate::state::{AppState, DashboardTab, Route};
use crate::viewmodels::establishment_viewmodel::StoreForm;
use crate::viewmodels::{AuthViewModel, EstablishmentViewModel};
use crate::views::fields::{
    clear_field_error, error_box, labeled_input, labeled_textarea, show_field_error,
};

const ERROR_BOX_ID: &str = "store-error";

pub fn render_register_store(state: &AppState) -> Result<Element, JsValue> {
    log::info!("🎬 [STORE] render_register_store()");

    let name = Rc::new(RefCell::new(String::new()));
    let category = Rc::new(RefCell::new(String::new()));
    let description = Rc::new(RefCell::new(String::new()));
    let address = Rc::new(RefCell::new(String::new()));
    let phone = Rc::new(RefCell::new(String::new()));
    let email = Rc::new(RefCell::new(String::new()));
    let submitting = Rc::new(RefCell::new(false));

    let screen = ElementBuilder::new("div")?.class("auth-screen").build();
    let container = ElementBuilder::new("div")?.class("auth-container").build();

    let header = ElementBuilder::new("div")?.class("auth-header").build();
    let title = ElementBuilder::new("h1")?.text("Cadastre sua loja").build();
    let subtitle = ElementBuilder::new("p")?
        .text("Falta pouco! Conte para os clientes sobre o seu negócio")
        .build();
    append_child(&header, &title)?;
    append_child(&header, &subtitle)?;

    let form = ElementBuilder::new("form")?.class("auth-form").build();
    append_child(
        &form,
        &labeled_input("store-name", "Nome da loja", "text", "Ex: Burguer da Vila", name.clone())?,
    )?;
    append_child(
        &form,
        &labeled_input(
            "store-category",
            "Categoria",
            "text",
            "Ex: Lanchonete",
            category.clone(),
        )?,
    )?;
    append_child(
        &form,
        &labeled_textarea(
            "store-description",
            "Descrição",
            "O que sua loja oferece?",
            description.clone(),
        )?,
    )?;
    append_child(
        &form,
        &labeled_input(
            "store-address",
            "Endereço",
            "text",
            "Rua, número, bairro",
            address.clone(),
        )?,
    )?;
    append_child(
        &form,
        &labeled_input(
            "store-phone",
            "Telefone (opcional)",
            "tel",
            "(11) 99999-9999",
            phone.clone(),
        )?,
    )?;
    append_child(
        &form,
        &labeled_input(
            "store-email",
            "E-mail da loja (opcional)",
            "email",
            "contato@loja.com",
            email.clone(),
        )?,
    )?;
    append_child(&form, &error_box(ERROR_BOX_ID)?)?;

    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-primary")
        .text("Criar loja")
        .build();
    append_child(&form, &submit_btn)?;

    {
        let state = state.clone();
        let submitting = submitting.clone();
        on_submit(&form, move || {
            if *submitting.borrow() {
                return;
            }
            clear_field_error(ERROR_BOX_ID);

            let store_form = StoreForm {
                name: name.borrow().clone(),
                category: category.borrow().clone(),
                description: description.borrow().clone(),
                address: address.borrow().clone(),
                phone: phone.borrow().clone(),
                email: email.borrow().clone(),
            };
            let payload = match store_form.to_payload() {
                Ok(payload) => payload,
                Err(msg) => {
                    show_field_error(ERROR_BOX_ID, &msg);
                    return;
                }
            };

            *submitting.borrow_mut() = true;
            let submitting = submitting.clone();
            let state = state.clone();
            spawn_local(async move {
                let vm = EstablishmentViewModel::new();
                match vm.create_store(&state.session, &payload).await {
                    Ok(_) => {
                        state.navigate(Route::Dashboard(DashboardTab::Products));
                    }
                    Err(e) => {
                        log::error!("❌ [STORE] {}", e);
                        show_field_error(ERROR_BOX_ID, &e.to_string());
                    }
                }
                *submitting.borrow_mut() = false;
            });
        })?;
    }

    // Salida de emergencia: cerrar sesión sin crear la tienda
    let footer = ElementBuilder::new("p")?.class("auth-footer").build();
    let logout_link = ElementBuilder::new("a")?
        .attr("href", "#")?
        .text("Sair da conta")
        .build();
    {
        let state = state.clone();
        on_click(&logout_link, move |e| {
            e.prevent_default();
            AuthViewModel::new().sign_out(&state.session);
            state.navigate(Route::Landing);
        })?;
    }
    append_child(&footer, &logout_link)?;

    append_child(&container, &header)?;
    append_child(&container, &form)?;
    append_child(&container, &footer)?;
    append_child(&screen, &container)?;
    Ok(screen)
}
