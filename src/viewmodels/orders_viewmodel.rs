// ============================================================================
// ORDERS VIEWMODEL - LÓGICA DE GESTIÓN DE PEDIDOS
// ============================================================================
// Carga la lista de la tienda y avanza estados con parche optimista local:
// tras un PATCH exitoso se muta la copia en memoria, sin refetch.
// ============================================================================

use crate::models::{Order, OrderStatus};
use crate::services::{ApiClient, ApiError};

pub struct OrdersViewModel {
    api: ApiClient,
}

impl OrdersViewModel {
    pub fn new() -> Self {
        Self {
            api: ApiClient::new(),
        }
    }

    pub async fn load_orders(&self) -> Result<Vec<Order>, ApiError> {
        let orders = self.api.get_store_orders().await?;
        log::info!("🧾 {} pedidos carregados", orders.len());
        Ok(orders)
    }

    pub async fn update_status(
        &self,
        order_id: &str,
        status: OrderStatus,
    ) -> Result<(), ApiError> {
        self.api.update_order_status(order_id, status).await
    }
}

impl Default for OrdersViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Parche optimista del estado de un pedido en la lista local
pub fn apply_status(orders: &mut [Order], order_id: &str, status: OrderStatus) {
    if let Some(order) = orders.iter_mut().find(|o| o.id == order_id) {
        order.status = status;
    }
}

/// Contadores del cabezal de la pestaña de pedidos
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrderStats {
    pub total: usize,
    pub preparing: usize,
    pub ready: usize,
    pub revenue: f64,
}

/// Estadísticas de la lista cargada. Los cancelados no suman facturación.
pub fn day_stats(orders: &[Order]) -> OrderStats {
    let mut stats = OrderStats {
        total: orders.len(),
        ..Default::default()
    };
    for order in orders {
        match order.status {
            OrderStatus::Preparing => stats.preparing += 1,
            OrderStatus::Ready => stats.ready += 1,
            _ => {}
        }
        if order.status != OrderStatus::Cancelled {
            stats.revenue += order.total_amount;
        }
    }
    stats
}

/// Filtro de la pestaña: None = todos los estados
pub fn filter_by_status(orders: &[Order], status: Option<OrderStatus>) -> Vec<Order> {
    orders
        .iter()
        .filter(|o| status.map_or(true, |s| o.status == s))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OrderClient, OrderItem, OrderItemProduct};

    fn order(id: &str, status: OrderStatus, total_amount: f64) -> Order {
        Order {
            id: id.to_string(),
            status,
            total_amount,
            created_at: "2025-03-01T12:30:00+00:00".to_string(),
            client: OrderClient {
                name: "Maria Souza".to_string(),
            },
            order_items: vec![OrderItem {
                quantity: 1,
                product: OrderItemProduct {
                    name: "Hambúrguer".to_string(),
                },
            }],
        }
    }

    #[test]
    fn apply_status_patches_only_the_matching_order() {
        let mut orders = vec![
            order("ord_001", OrderStatus::Pending, 25.9),
            order("ord_002", OrderStatus::Pending, 12.0),
        ];

        apply_status(&mut orders, "ord_002", OrderStatus::Preparing);

        assert_eq!(orders[0].status, OrderStatus::Pending);
        assert_eq!(orders[1].status, OrderStatus::Preparing);
    }

    #[test]
    fn apply_status_ignores_unknown_ids() {
        let mut orders = vec![order("ord_001", OrderStatus::Pending, 25.9)];
        apply_status(&mut orders, "ord_999", OrderStatus::Ready);
        assert_eq!(orders[0].status, OrderStatus::Pending);
    }

    #[test]
    fn day_stats_counts_buckets_and_skips_cancelled_revenue() {
        let orders = vec![
            order("a", OrderStatus::Preparing, 10.0),
            order("b", OrderStatus::Preparing, 20.0),
            order("c", OrderStatus::Ready, 15.0),
            order("d", OrderStatus::Completed, 30.0),
            order("e", OrderStatus::Cancelled, 99.0),
        ];

        let stats = day_stats(&orders);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.preparing, 2);
        assert_eq!(stats.ready, 1);
        assert!((stats.revenue - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn filter_none_keeps_everything() {
        let orders = vec![
            order("a", OrderStatus::Pending, 10.0),
            order("b", OrderStatus::Ready, 15.0),
        ];
        assert_eq!(filter_by_status(&orders, None).len(), 2);
        let ready = filter_by_status(&orders, Some(OrderStatus::Ready));
        assert_eq!(ready.len(), 1);
        assert_eq!(ready[0].id, "b");
    }
}
