// ============================================================================
// FORM FIELDS - Helpers compartidos de formularios
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, event_target_value, on_input, ElementBuilder};

/// Crear form group con label + input controlado.
/// El valor vive en un Rc<RefCell<String>> capturado por el listener.
pub fn labeled_input(
    id: &str,
    label_text: &str,
    input_type: &str,
    placeholder: &str,
    value: Rc<RefCell<String>>,
) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?.class("form-group").build();

    let label = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label_text)
        .build();

    let input = ElementBuilder::new("input")?
        .class("form-input")
        .id(id)?
        .attr("type", input_type)?
        .attr("name", id)?
        .attr("placeholder", placeholder)?
        .attr("value", &value.borrow())?
        .build();

    {
        let value = value.clone();
        on_input(&input, move |e| {
            *value.borrow_mut() = event_target_value(&e);
        })?;
    }

    append_child(&group, &label)?;
    append_child(&group, &input)?;
    Ok(group)
}

/// Área de texto controlada, para descripciones largas
pub fn labeled_textarea(
    id: &str,
    label_text: &str,
    placeholder: &str,
    value: Rc<RefCell<String>>,
) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?.class("form-group").build();

    let label = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label_text)
        .build();

    let textarea = ElementBuilder::new("textarea")?
        .class("form-input")
        .id(id)?
        .attr("name", id)?
        .attr("placeholder", placeholder)?
        .attr("rows", "3")?
        .text(&value.borrow())
        .build();

    {
        use wasm_bindgen::JsCast;
        let value = value.clone();
        on_input(&textarea, move |e| {
            if let Some(target) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlTextAreaElement>().ok())
            {
                *value.borrow_mut() = target.value();
            }
        })?;
    }

    append_child(&group, &label)?;
    append_child(&group, &textarea)?;
    Ok(group)
}

/// Caja de error inline del formulario. Arranca oculta;
/// `show_field_error` la llena y la muestra.
pub fn error_box(id: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("form-error hidden")
        .id(id)?
        .build())
}

/// Mostrar un mensaje en la caja de error del formulario
pub fn show_field_error(id: &str, message: &str) {
    if let Some(el) = crate::dom::get_element_by_id(id) {
        el.set_text_content(Some(message));
        el.set_class_name("form-error");
    }
}

/// Ocultar la caja de error del formulario
pub fn clear_field_error(id: &str) {
    if let Some(el) = crate::dom::get_element_by_id(id) {
        el.set_text_content(Some(""));
        el.set_class_name("form-error hidden");
    }
}
