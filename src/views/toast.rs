// ============================================================================
// TOAST - Notificaciones efímeras
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;

use crate::dom::{append_child, document, ElementBuilder};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

/// Mostrar un toast que se auto-remueve a los 3 segundos
pub fn show_toast(kind: ToastKind, message: &str) {
    if let Err(e) = try_show_toast(kind, message) {
        log::error!("❌ Error mostrando toast: {:?}", e);
    }
}

fn try_show_toast(kind: ToastKind, message: &str) -> Result<(), JsValue> {
    let doc = document().ok_or_else(|| JsValue::from_str("No document"))?;
    let body = doc.body().ok_or_else(|| JsValue::from_str("No body"))?;

    let toast = ElementBuilder::new("div")?.class(kind.class()).text(message).build();
    append_child(&body, &toast)?;

    let toast_clone = toast.clone();
    Timeout::new(3000, move || {
        toast_clone.remove();
    })
    .forget();

    Ok(())
}
