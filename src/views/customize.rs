// ============================================================================
// CUSTOMIZE TAB - Personalización del establecimiento
// ============================================================================
// Carga la tienda al montar, pre-llena el formulario y guarda vía PUT.
// El nombre actualizado se refleja en la sesión sin refetch.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, clear_children, on_submit, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::{CustomizeForm, EstablishmentViewModel};
use crate::views::fields::{
    clear_field_error, error_box, labeled_input, labeled_textarea, show_field_error,
};
use crate::views::toast::{show_toast, ToastKind};

const ERROR_BOX_ID: &str = "customize-error";

pub fn render_customize_tab(state: &AppState) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("tab-customize").build();

    let header = ElementBuilder::new("div")?.class("tab-header").build();
    let title = ElementBuilder::new("h2")?.text("Personalizar loja").build();
    append_child(&header, &title)?;
    append_child(&container, &header)?;

    // Host del formulario, llenado cuando llega la tienda
    let form_host = ElementBuilder::new("div")?.class("customize-form-host").build();
    let loading = ElementBuilder::new("p")?
        .class("tab-loading")
        .text("Carregando dados da loja...")
        .build();
    append_child(&form_host, &loading)?;
    append_child(&container, &form_host)?;

    {
        let state = state.clone();
        let form_host = form_host.clone();
        spawn_local(async move {
            let vm = EstablishmentViewModel::new();
            match vm.load_store().await {
                Ok(establishment) => {
                    let form = CustomizeForm::from_establishment(&establishment);
                    clear_children(&form_host);
                    if let Err(e) = render_customize_form(&form_host, &state, form) {
                        log::error!("❌ [CUSTOMIZE] Error renderizando formulário: {:?}", e);
                    }
                }
                Err(e) => {
                    log::error!("❌ [CUSTOMIZE] {}", e);
                    show_toast(ToastKind::Error, &e.to_string());
                    clear_children(&form_host);
                }
            }
        });
    }

    Ok(container)
}

fn render_customize_form(
    host: &Element,
    state: &AppState,
    initial: CustomizeForm,
) -> Result<(), JsValue> {
    let name = Rc::new(RefCell::new(initial.name));
    let description = Rc::new(RefCell::new(initial.description));
    let logo_url = Rc::new(RefCell::new(initial.logo_url));
    let cover_url = Rc::new(RefCell::new(initial.cover_url));
    let submitting = Rc::new(RefCell::new(false));

    let form = ElementBuilder::new("form")?.class("customize-form").build();
    append_child(
        &form,
        &labeled_input("cust-name", "Nome da loja", "text", "", name.clone())?,
    )?;
    append_child(
        &form,
        &labeled_textarea(
            "cust-description",
            "Descrição",
            "O que sua loja oferece?",
            description.clone(),
        )?,
    )?;
    append_child(
        &form,
        &labeled_input("cust-logo", "Logo (URL)", "url", "https://...", logo_url.clone())?,
    )?;
    append_child(
        &form,
        &labeled_input("cust-cover", "Capa (URL)", "url", "https://...", cover_url.clone())?,
    )?;
    append_child(&form, &error_box(ERROR_BOX_ID)?)?;

    let save_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-primary")
        .text("Salvar alterações")
        .build();
    append_child(&form, &save_btn)?;

    // Vista previa simple del logo
    if !logo_url.borrow().is_empty() {
        let preview = ElementBuilder::new("img")?
            .class("logo-preview")
            .attr("src", &logo_url.borrow())?
            .attr("alt", "Logo da loja")?
            .build();
        append_child(&form, &preview)?;
    }

    {
        let state = state.clone();
        on_submit(&form, move || {
            if *submitting.borrow() {
                return;
            }
            clear_field_error(ERROR_BOX_ID);

            let form_data = CustomizeForm {
                name: name.borrow().clone(),
                description: description.borrow().clone(),
                logo_url: logo_url.borrow().clone(),
                cover_url: cover_url.borrow().clone(),
            };
            let payload = match form_data.to_payload() {
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
                match vm.save_store(&state.session, &payload).await {
                    Ok(_) => {
                        show_toast(ToastKind::Success, "Loja atualizada!");
                        // El nombre en el header se actualiza en el próximo render
                        state.notify_subscribers();
                    }
                    Err(e) => {
                        log::error!("❌ [CUSTOMIZE] {}", e);
                        show_field_error(ERROR_BOX_ID, &e.to_string());
                    }
                }
                *submitting.borrow_mut() = false;
            });
        })?;
    }

    append_child(host, &form)?;
    Ok(())
}
