// ============================================================================
// PRODUCTS TAB - Catálogo de productos de la tienda
// ============================================================================
// Un fetch al montar, después todo es parche local: crear/editar hacen
// upsert sobre la copia en memoria y re-renderizan la lista, sin refetch.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, clear_children, on_click, on_submit, ElementBuilder};
use crate::models::Product;
use crate::state::AppState;
use crate::viewmodels::catalog_viewmodel::{remove_product, upsert_product};
use crate::viewmodels::{CatalogViewModel, ProductForm};
use crate::views::fields::{
    clear_field_error, error_box, labeled_input, labeled_textarea, show_field_error,
};
use crate::views::toast::{show_toast, ToastKind};

const ERROR_BOX_ID: &str = "product-error";

/// Contexto compartido entre la lista y el formulario de la pestaña
#[derive(Clone)]
struct ProductsCtx {
    products: Rc<RefCell<Vec<Product>>>,
    list_host: Element,
    form_host: Element,
}

pub fn render_products_tab(_state: &AppState) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("tab-products").build();

    // Header de la pestaña
    let header = ElementBuilder::new("div")?.class("tab-header").build();
    let title = ElementBuilder::new("h2")?.text("Produtos").build();
    let add_btn = ElementBuilder::new("button")?
        .class("btn-primary")
        .text("+ Novo Produto")
        .build();
    append_child(&header, &title)?;
    append_child(&header, &add_btn)?;

    let form_host = ElementBuilder::new("div")?.class("product-form-host").build();
    let list_host = ElementBuilder::new("div")?.class("product-list").build();

    let ctx = ProductsCtx {
        products: Rc::new(RefCell::new(Vec::new())),
        list_host: list_host.clone(),
        form_host: form_host.clone(),
    };

    // Alta: formulario vacío
    {
        let ctx = ctx.clone();
        on_click(&add_btn, move |_| {
            if let Err(e) = render_product_form(&ctx, ProductForm::default(), None) {
                log::error!("❌ [PRODUCTS] Error abrindo formulário: {:?}", e);
            }
        })?;
    }

    // Placeholder mientras llega el fetch inicial
    let loading = ElementBuilder::new("p")?
        .class("tab-loading")
        .text("Carregando produtos...")
        .build();
    append_child(&list_host, &loading)?;

    // Fetch inicial del catálogo
    {
        let ctx = ctx.clone();
        spawn_local(async move {
            let vm = CatalogViewModel::new();
            match vm.load_products().await {
                Ok(products) => {
                    *ctx.products.borrow_mut() = products;
                    if let Err(e) = render_product_list(&ctx) {
                        log::error!("❌ [PRODUCTS] Error renderizando lista: {:?}", e);
                    }
                }
                Err(e) => {
                    log::error!("❌ [PRODUCTS] {}", e);
                    show_toast(ToastKind::Error, &e.to_string());
                    clear_children(&ctx.list_host);
                }
            }
        });
    }

    append_child(&container, &header)?;
    append_child(&container, &form_host)?;
    append_child(&container, &list_host)?;
    Ok(container)
}

/// Re-renderizar la lista completa desde la copia en memoria
fn render_product_list(ctx: &ProductsCtx) -> Result<(), JsValue> {
    clear_children(&ctx.list_host);

    let products = ctx.products.borrow().clone();
    if products.is_empty() {
        let empty = ElementBuilder::new("div")?.class("empty-state").build();
        let icon = ElementBuilder::new("div")?.class("empty-icon").text("📦").build();
        let text = ElementBuilder::new("p")?
            .text("Nenhum produto cadastrado ainda")
            .build();
        append_child(&empty, &icon)?;
        append_child(&empty, &text)?;
        append_child(&ctx.list_host, &empty)?;
        return Ok(());
    }

    for product in products {
        let card = render_product_card(ctx, &product)?;
        append_child(&ctx.list_host, &card)?;
    }
    Ok(())
}

fn render_product_card(ctx: &ProductsCtx, product: &Product) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?.class("product-card").build();

    let info = ElementBuilder::new("div")?.class("product-info").build();
    let name = ElementBuilder::new("h3")?.text(&product.name).build();
    let price = ElementBuilder::new("span")?
        .class("product-price")
        .text(&format!("R$ {:.2}", product.price))
        .build();
    append_child(&info, &name)?;
    append_child(&info, &price)?;

    if let Some(points) = product.points_price {
        let points_el = ElementBuilder::new("span")?
            .class("product-points")
            .text(&format!("{} pontos", points))
            .build();
        append_child(&info, &points_el)?;
    }
    if let Some(description) = &product.description {
        let desc = ElementBuilder::new("p")?
            .class("product-description")
            .text(description)
            .build();
        append_child(&info, &desc)?;
    }

    let actions = ElementBuilder::new("div")?.class("product-actions").build();

    let edit_btn = ElementBuilder::new("button")?
        .class("btn-secondary")
        .text("Editar")
        .build();
    {
        let ctx = ctx.clone();
        let product = product.clone();
        on_click(&edit_btn, move |_| {
            let form = ProductForm::from_product(&product);
            if let Err(e) = render_product_form(&ctx, form, Some(product.id.clone())) {
                log::error!("❌ [PRODUCTS] Error abrindo edição: {:?}", e);
            }
        })?;
    }

    // Remoción solo local: el backend no expone delete de productos
    let remove_btn = ElementBuilder::new("button")?
        .class("btn-danger")
        .text("Remover")
        .build();
    {
        let ctx = ctx.clone();
        let product_id = product.id.clone();
        on_click(&remove_btn, move |_| {
            remove_product(&mut ctx.products.borrow_mut(), &product_id);
            if let Err(e) = render_product_list(&ctx) {
                log::error!("❌ [PRODUCTS] Error renderizando lista: {:?}", e);
            }
        })?;
    }

    append_child(&actions, &edit_btn)?;
    append_child(&actions, &remove_btn)?;

    append_child(&card, &info)?;
    append_child(&card, &actions)?;
    Ok(card)
}

/// Formulario de alta (editing = None) o edición (editing = Some(id)).
/// Se monta dentro del form_host y se desmonta al guardar o cancelar.
fn render_product_form(
    ctx: &ProductsCtx,
    initial: ProductForm,
    editing: Option<String>,
) -> Result<(), JsValue> {
    clear_children(&ctx.form_host);

    let name = Rc::new(RefCell::new(initial.name));
    let price = Rc::new(RefCell::new(initial.price));
    let points = Rc::new(RefCell::new(initial.points_price));
    let description = Rc::new(RefCell::new(initial.description));
    let photo_url = Rc::new(RefCell::new(initial.photo_url));
    let submitting = Rc::new(RefCell::new(false));

    let panel = ElementBuilder::new("div")?.class("product-form-panel").build();
    let title_text = if editing.is_some() {
        "Editar produto"
    } else {
        "Novo produto"
    };
    let title = ElementBuilder::new("h3")?.text(title_text).build();
    append_child(&panel, &title)?;

    let form = ElementBuilder::new("form")?.class("product-form").build();
    append_child(
        &form,
        &labeled_input("prod-name", "Nome", "text", "Ex: Hambúrguer Clássico", name.clone())?,
    )?;
    append_child(
        &form,
        &labeled_input("prod-price", "Preço (R$)", "text", "Ex: 25.90", price.clone())?,
    )?;
    append_child(
        &form,
        &labeled_input(
            "prod-points",
            "Preço em pontos (opcional)",
            "number",
            "Ex: 250",
            points.clone(),
        )?,
    )?;
    append_child(
        &form,
        &labeled_textarea(
            "prod-description",
            "Descrição (opcional)",
            "Detalhes do produto",
            description.clone(),
        )?,
    )?;
    append_child(
        &form,
        &labeled_input(
            "prod-photo",
            "Foto (URL, opcional)",
            "url",
            "https://...",
            photo_url.clone(),
        )?,
    )?;
    append_child(&form, &error_box(ERROR_BOX_ID)?)?;

    let cancel_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-secondary")
        .text("Cancelar")
        .build();
    {
        let form_host = ctx.form_host.clone();
        on_click(&cancel_btn, move |_| {
            clear_children(&form_host);
        })?;
    }

    let save_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-primary")
        .text("Salvar")
        .build();
    append_child(&form, &cancel_btn)?;
    append_child(&form, &save_btn)?;

    {
        let ctx = ctx.clone();
        on_submit(&form, move || {
            if *submitting.borrow() {
                return;
            }
            clear_field_error(ERROR_BOX_ID);

            let form_data = ProductForm {
                name: name.borrow().clone(),
                price: price.borrow().clone(),
                points_price: points.borrow().clone(),
                description: description.borrow().clone(),
                photo_url: photo_url.borrow().clone(),
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
            let ctx = ctx.clone();
            let editing = editing.clone();
            spawn_local(async move {
                let vm = CatalogViewModel::new();
                let result = match &editing {
                    Some(id) => vm.update_product(id, &payload).await,
                    None => vm.create_product(&payload).await,
                };
                match result {
                    Ok(saved) => {
                        upsert_product(&mut ctx.products.borrow_mut(), saved);
                        clear_children(&ctx.form_host);
                        if let Err(e) = render_product_list(&ctx) {
                            log::error!("❌ [PRODUCTS] Error renderizando lista: {:?}", e);
                        }
                        show_toast(ToastKind::Success, "Produto salvo!");
                    }
                    Err(e) => {
                        log::error!("❌ [PRODUCTS] {}", e);
                        show_field_error(ERROR_BOX_ID, &e.to_string());
                    }
                }
                *submitting.borrow_mut() = false;
            });
        })?;
    }

    append_child(&panel, &form)?;
    append_child(&ctx.form_host, &panel)?;
    Ok(())
}
