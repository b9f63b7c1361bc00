// ============================================================================
// ORDERS TAB - Gestión de pedidos de la tienda
// ============================================================================
// Fetch al montar, filtro por estado y avance de estado con parche
// optimista: tras el PATCH exitoso se muta la copia local y se
// re-renderiza la lista, sin refetch.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, clear_children, on_click, select_value, on_change, ElementBuilder};
use crate::models::{Order, OrderStatus};
use crate::state::AppState;
use crate::viewmodels::orders_viewmodel::{apply_status, day_stats, filter_by_status};
use crate::viewmodels::OrdersViewModel;
use crate::views::toast::{show_toast, ToastKind};

#[derive(Clone)]
struct OrdersCtx {
    orders: Rc<RefCell<Vec<Order>>>,
    filter: Rc<RefCell<Option<OrderStatus>>>,
    stats_host: Element,
    list_host: Element,
}

pub fn render_orders_tab(_state: &AppState) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("tab-orders").build();

    let header = ElementBuilder::new("div")?.class("tab-header").build();
    let title = ElementBuilder::new("h2")?.text("Pedidos").build();
    append_child(&header, &title)?;

    // Filtro por estado
    let filter_select = ElementBuilder::new("select")?.class("order-filter").build();
    let all_option = ElementBuilder::new("option")?
        .attr("value", "all")?
        .text("Todos")
        .build();
    append_child(&filter_select, &all_option)?;
    for status in OrderStatus::all() {
        let option = ElementBuilder::new("option")?
            .attr("value", status.as_str())?
            .text(status.label())
            .build();
        append_child(&filter_select, &option)?;
    }
    append_child(&header, &filter_select)?;

    let stats_host = ElementBuilder::new("div")?.class("order-stats").build();
    let list_host = ElementBuilder::new("div")?.class("order-list").build();

    let ctx = OrdersCtx {
        orders: Rc::new(RefCell::new(Vec::new())),
        filter: Rc::new(RefCell::new(None)),
        stats_host: stats_host.clone(),
        list_host: list_host.clone(),
    };

    {
        let ctx = ctx.clone();
        let select_el = filter_select.clone();
        on_change(&filter_select, move |_| {
            *ctx.filter.borrow_mut() = OrderStatus::parse(&select_value(&select_el));
            if let Err(e) = render_order_list(&ctx) {
                log::error!("❌ [ORDERS] Error renderizando lista: {:?}", e);
            }
        })?;
    }

    let loading = ElementBuilder::new("p")?
        .class("tab-loading")
        .text("Carregando pedidos...")
        .build();
    append_child(&list_host, &loading)?;

    // Fetch inicial
    {
        let ctx = ctx.clone();
        spawn_local(async move {
            let vm = OrdersViewModel::new();
            match vm.load_orders().await {
                Ok(orders) => {
                    *ctx.orders.borrow_mut() = orders;
                    if let Err(e) = render_order_list(&ctx) {
                        log::error!("❌ [ORDERS] Error renderizando lista: {:?}", e);
                    }
                }
                Err(e) => {
                    log::error!("❌ [ORDERS] {}", e);
                    show_toast(ToastKind::Error, &e.to_string());
                    clear_children(&ctx.list_host);
                }
            }
        });
    }

    append_child(&container, &header)?;
    append_child(&container, &stats_host)?;
    append_child(&container, &list_host)?;
    Ok(container)
}

/// Re-renderizar contadores + lista filtrada desde la copia local
fn render_order_list(ctx: &OrdersCtx) -> Result<(), JsValue> {
    clear_children(&ctx.stats_host);
    clear_children(&ctx.list_host);

    let orders = ctx.orders.borrow().clone();

    // Contadores del día
    let stats = day_stats(&orders);
    for (label, value) in [
        ("Pedidos", stats.total.to_string()),
        ("Preparando", stats.preparing.to_string()),
        ("Prontos", stats.ready.to_string()),
        ("Faturamento", format!("R$ {:.2}", stats.revenue)),
    ] {
        let card = ElementBuilder::new("div")?.class("stat-card").build();
        let value_el = ElementBuilder::new("span")?
            .class("stat-value")
            .text(&value)
            .build();
        let label_el = ElementBuilder::new("span")?
            .class("stat-label")
            .text(label)
            .build();
        append_child(&card, &value_el)?;
        append_child(&card, &label_el)?;
        append_child(&ctx.stats_host, &card)?;
    }

    let filtered = filter_by_status(&orders, *ctx.filter.borrow());
    if filtered.is_empty() {
        let empty = ElementBuilder::new("div")?.class("empty-state").build();
        let icon = ElementBuilder::new("div")?.class("empty-icon").text("🧾").build();
        let text = ElementBuilder::new("p")?.text("Nenhum pedido por aqui").build();
        append_child(&empty, &icon)?;
        append_child(&empty, &text)?;
        append_child(&ctx.list_host, &empty)?;
        return Ok(());
    }

    for order in filtered {
        let card = render_order_card(ctx, &order)?;
        append_child(&ctx.list_host, &card)?;
    }
    Ok(())
}

fn render_order_card(ctx: &OrdersCtx, order: &Order) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?.class("order-card").build();

    let top = ElementBuilder::new("div")?.class("order-top").build();
    let id_el = ElementBuilder::new("span")?
        .class("order-id")
        .text(&format!("Pedido #{}", order.short_id()))
        .build();
    let badge = ElementBuilder::new("span")?
        .class(order.status.badge_class())
        .text(order.status.label())
        .build();
    let time = ElementBuilder::new("span")?
        .class("order-time")
        .text(&order.time_label())
        .build();
    append_child(&top, &id_el)?;
    append_child(&top, &badge)?;
    append_child(&top, &time)?;

    let client = ElementBuilder::new("p")?
        .class("order-client")
        .text(&order.client.name)
        .build();
    let items = ElementBuilder::new("p")?
        .class("order-items")
        .text(&order.items_summary())
        .build();
    let total = ElementBuilder::new("p")?
        .class("order-total")
        .text(&format!("R$ {:.2}", order.total_amount))
        .build();

    append_child(&card, &top)?;
    append_child(&card, &client)?;
    append_child(&card, &items)?;
    append_child(&card, &total)?;

    // Botón de avance de estado, solo para estados no terminales
    if let Some((next_status, action_label)) = order.status.next_action() {
        let action_btn = ElementBuilder::new("button")?
            .class("btn-primary")
            .text(action_label)
            .build();
        {
            let ctx = ctx.clone();
            let order_id = order.id.clone();
            on_click(&action_btn, move |_| {
                let ctx = ctx.clone();
                let order_id = order_id.clone();
                spawn_local(async move {
                    let vm = OrdersViewModel::new();
                    match vm.update_status(&order_id, next_status).await {
                        Ok(()) => {
                            apply_status(&mut ctx.orders.borrow_mut(), &order_id, next_status);
                            if let Err(e) = render_order_list(&ctx) {
                                log::error!("❌ [ORDERS] Error renderizando lista: {:?}", e);
                            }
                        }
                        Err(e) => {
                            log::error!("❌ [ORDERS] {}", e);
                            show_toast(ToastKind::Error, &e.to_string());
                        }
                    }
                });
            })?;
        }
        append_child(&card, &action_btn)?;
    }

    Ok(card)
}
