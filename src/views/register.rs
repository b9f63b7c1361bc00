// ============================================================================
// REGISTER VIEW - Wizard de registro en 3 pasos
// ============================================================================
// El wizard vive en un host que se re-renderiza localmente a cada paso,
// sin pasar por el re-render global. El estado del formulario es un
// Rc<RefCell<RegisterForm>> compartido por todos los pasos, así los
// campos sobreviven al ir y volver entre pasos.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, clear_children, on_click, on_submit, ElementBuilder};
use crate::state::{AppState, Route};
use crate::viewmodels::{AuthViewModel, RegisterForm, RegisterStep};
use crate::views::fields::{clear_field_error, error_box, labeled_input, show_field_error};

const ERROR_BOX_ID: &str = "register-error";

pub fn render_register(state: &AppState) -> Result<Element, JsValue> {
    log::info!("🎬 [REGISTER] render_register()");

    let form_state = Rc::new(RefCell::new(RegisterForm::new()));

    let screen = ElementBuilder::new("div")?.class("auth-screen").build();
    let container = ElementBuilder::new("div")?.class("auth-container").build();

    let header = ElementBuilder::new("div")?.class("auth-header").build();
    let title = ElementBuilder::new("h1")?.text("Criar conta").build();
    append_child(&header, &title)?;

    // Host del paso actual
    let step_host = ElementBuilder::new("div")?
        .id("register-step-host")?
        .build();
    render_step(&step_host, state, &form_state)?;

    let footer = ElementBuilder::new("p")?.class("auth-footer").build();
    let link = ElementBuilder::new("a")?
        .attr("href", "#")?
        .text("Já tem conta? Entrar")
        .build();
    {
        let state = state.clone();
        on_click(&link, move |e| {
            e.prevent_default();
            state.navigate(Route::Login);
        })?;
    }
    append_child(&footer, &link)?;

    append_child(&container, &header)?;
    append_child(&container, &step_host)?;
    append_child(&container, &footer)?;
    append_child(&screen, &container)?;
    Ok(screen)
}

/// Re-renderizar el paso actual dentro del host
fn render_step(
    host: &Element,
    state: &AppState,
    form_state: &Rc<RefCell<RegisterForm>>,
) -> Result<(), JsValue> {
    clear_children(host);

    let step = form_state.borrow().step;
    log::info!("📝 [REGISTER] Renderizando passo {}", step.ordinal());

    // Indicador de progreso
    let progress = ElementBuilder::new("div")?
        .class("wizard-progress")
        .text(&format!("Passo {} de 3", step.ordinal()))
        .build();
    append_child(host, &progress)?;

    let form = ElementBuilder::new("form")?.class("auth-form").build();

    // Buffers de los campos del paso, pre-cargados desde el estado
    // compartido para que volver atrás no pierda lo tipeado
    match step {
        RegisterStep::CollectingIdentity => {
            let name = Rc::new(RefCell::new(form_state.borrow().name.clone()));
            let email = Rc::new(RefCell::new(form_state.borrow().email.clone()));

            let name_group =
                labeled_input("reg-name", "Nome", "text", "Seu nome completo", name.clone())?;
            let email_group =
                labeled_input("reg-email", "E-mail", "email", "seu@email.com", email.clone())?;
            append_child(&form, &name_group)?;
            append_child(&form, &email_group)?;

            append_child(&form, &error_box(ERROR_BOX_ID)?)?;
            append_child(&form, &next_button()?)?;

            let host = host.clone();
            let state = state.clone();
            let form_state = form_state.clone();
            on_submit(&form, move || {
                {
                    let mut fs = form_state.borrow_mut();
                    fs.name = name.borrow().clone();
                    fs.email = email.borrow().clone();
                }
                advance_and_rerender(&host, &state, &form_state);
            })?;
        }
        RegisterStep::CollectingPersonalInfo => {
            let cpf = Rc::new(RefCell::new(form_state.borrow().cpf.clone()));
            let birth = Rc::new(RefCell::new(form_state.borrow().birth_date.clone()));

            let cpf_group =
                labeled_input("reg-cpf", "CPF", "text", "000.000.000-00", cpf.clone())?;
            let birth_group = labeled_input(
                "reg-birth",
                "Data de nascimento",
                "date",
                "",
                birth.clone(),
            )?;
            append_child(&form, &cpf_group)?;
            append_child(&form, &birth_group)?;

            append_child(&form, &error_box(ERROR_BOX_ID)?)?;
            append_child(&form, &back_button(host, state, form_state)?)?;
            append_child(&form, &next_button()?)?;

            let host = host.clone();
            let state = state.clone();
            let form_state = form_state.clone();
            on_submit(&form, move || {
                {
                    let mut fs = form_state.borrow_mut();
                    fs.cpf = cpf.borrow().clone();
                    fs.birth_date = birth.borrow().clone();
                }
                advance_and_rerender(&host, &state, &form_state);
            })?;
        }
        RegisterStep::CollectingCredentials => {
            let password = Rc::new(RefCell::new(form_state.borrow().password.clone()));
            let confirm = Rc::new(RefCell::new(form_state.borrow().confirm_password.clone()));

            let password_group = labeled_input(
                "reg-password",
                "Senha",
                "password",
                "Mínimo 6 caracteres",
                password.clone(),
            )?;
            let confirm_group = labeled_input(
                "reg-confirm",
                "Confirmar senha",
                "password",
                "Repita a senha",
                confirm.clone(),
            )?;
            append_child(&form, &password_group)?;
            append_child(&form, &confirm_group)?;

            append_child(&form, &error_box(ERROR_BOX_ID)?)?;
            append_child(&form, &back_button(host, state, form_state)?)?;

            let submit_btn = ElementBuilder::new("button")?
                .attr("type", "submit")?
                .class("btn-primary")
                .text("Criar conta")
                .build();
            append_child(&form, &submit_btn)?;

            let submitting = Rc::new(RefCell::new(false));
            let state = state.clone();
            let form_state = form_state.clone();
            on_submit(&form, move || {
                if *submitting.borrow() {
                    return;
                }
                clear_field_error(ERROR_BOX_ID);
                {
                    let mut fs = form_state.borrow_mut();
                    fs.password = password.borrow().clone();
                    fs.confirm_password = confirm.borrow().clone();
                }

                let payload = match form_state.borrow().validate_submit() {
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
                    let vm = AuthViewModel::new();
                    match vm.sign_up(&state.session, payload).await {
                        Ok(route) => {
                            log::info!("✅ [REGISTER] Conta criada");
                            state.navigate(route);
                        }
                        Err(e) => {
                            log::error!("❌ [REGISTER] {}", e);
                            show_field_error(ERROR_BOX_ID, &e.to_string());
                        }
                    }
                    *submitting.borrow_mut() = false;
                });
            })?;
        }
    }

    append_child(host, &form)?;
    Ok(())
}

fn next_button() -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-primary")
        .text("Continuar")
        .build())
}

/// Botón "Voltar": retrocede un paso conservando los campos
fn back_button(
    host: &Element,
    state: &AppState,
    form_state: &Rc<RefCell<RegisterForm>>,
) -> Result<Element, JsValue> {
    let btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-secondary")
        .text("Voltar")
        .build();

    let host = host.clone();
    let state = state.clone();
    let form_state = form_state.clone();
    on_click(&btn, move |_| {
        form_state.borrow_mut().back();
        if let Err(e) = render_step(&host, &state, &form_state) {
            log::error!("❌ [REGISTER] Error re-renderizando passo: {:?}", e);
        }
    })?;

    Ok(btn)
}

fn advance_and_rerender(
    host: &Element,
    state: &AppState,
    form_state: &Rc<RefCell<RegisterForm>>,
) {
    clear_field_error(ERROR_BOX_ID);
    let advanced = form_state.borrow_mut().advance();
    match advanced {
        Ok(()) => {
            if let Err(e) = render_step(host, state, form_state) {
                log::error!("❌ [REGISTER] Error re-renderizando passo: {:?}", e);
            }
        }
        Err(msg) => show_field_error(ERROR_BOX_ID, &msg),
    }
}
