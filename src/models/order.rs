use serde::{Deserialize, Serialize};

/// Estado del pedido. El flujo normal es lineal:
/// pending → preparing → ready → completed. `cancelled` es terminal.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Etiqueta visible para el lojista
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pendente",
            OrderStatus::Preparing => "Preparando",
            OrderStatus::Ready => "Pronto",
            OrderStatus::Completed => "Entregue",
            OrderStatus::Cancelled => "Cancelado",
        }
    }

    /// Clase CSS del badge de estado
    pub fn badge_class(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "badge-pending",
            OrderStatus::Preparing => "badge-preparing",
            OrderStatus::Ready => "badge-ready",
            OrderStatus::Completed => "badge-completed",
            OrderStatus::Cancelled => "badge-cancelled",
        }
    }

    /// Próximo estado del flujo y etiqueta del botón de acción.
    /// None cuando el pedido ya es terminal.
    pub fn next_action(&self) -> Option<(OrderStatus, &'static str)> {
        match self {
            OrderStatus::Pending => Some((OrderStatus::Preparing, "Iniciar Preparo")),
            OrderStatus::Preparing => Some((OrderStatus::Ready, "Marcar como Pronto")),
            OrderStatus::Ready => Some((OrderStatus::Completed, "Marcar como Entregue")),
            OrderStatus::Completed | OrderStatus::Cancelled => None,
        }
    }

    /// Valor del wire y del <select> de filtro
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<OrderStatus> {
        OrderStatus::all().into_iter().find(|s| s.as_str() == value)
    }

    /// Todos los estados, en el orden del filtro de la vista
    pub fn all() -> [OrderStatus; 5] {
        [
            OrderStatus::Pending,
            OrderStatus::Preparing,
            OrderStatus::Ready,
            OrderStatus::Completed,
            OrderStatus::Cancelled,
        ]
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct OrderClient {
    pub name: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct OrderItemProduct {
    pub name: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct OrderItem {
    pub quantity: u32,
    pub product: OrderItemProduct,
}

/// Pedido de la tienda, propiedad del servidor
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Order {
    pub id: String,
    pub status: OrderStatus,
    pub total_amount: f64,
    pub created_at: String,
    pub client: OrderClient,
    pub order_items: Vec<OrderItem>,
}

impl Order {
    /// Últimos 6 caracteres del id, para mostrar "Pedido #xxxxxx"
    pub fn short_id(&self) -> &str {
        let start = self.id.len().saturating_sub(6);
        self.id.get(start..).unwrap_or(&self.id)
    }

    /// Resumen de items: "2x Hambúrguer, 1x Refrigerante"
    pub fn items_summary(&self) -> String {
        self.order_items
            .iter()
            .map(|item| format!("{}x {}", item.quantity, item.product.name))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Hora local HH:MM a partir del timestamp ISO del backend
    pub fn time_label(&self) -> String {
        chrono::DateTime::parse_from_rfc3339(&self.created_at)
            .map(|dt| dt.format("%H:%M").to_string())
            .unwrap_or_else(|_| self.created_at.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: &str, status: OrderStatus) -> Order {
        Order {
            id: id.to_string(),
            status,
            total_amount: 59.8,
            created_at: "2025-03-10T14:35:00+00:00".to_string(),
            client: OrderClient {
                name: "Maria Souza".to_string(),
            },
            order_items: vec![
                OrderItem {
                    quantity: 2,
                    product: OrderItemProduct {
                        name: "Hambúrguer Clássico".to_string(),
                    },
                },
                OrderItem {
                    quantity: 1,
                    product: OrderItemProduct {
                        name: "Refrigerante".to_string(),
                    },
                },
            ],
        }
    }

    #[test]
    fn status_flow_is_linear() {
        let (next, action) = OrderStatus::Pending.next_action().unwrap();
        assert_eq!(next, OrderStatus::Preparing);
        assert_eq!(action, "Iniciar Preparo");

        let (next, _) = OrderStatus::Preparing.next_action().unwrap();
        assert_eq!(next, OrderStatus::Ready);

        let (next, _) = OrderStatus::Ready.next_action().unwrap();
        assert_eq!(next, OrderStatus::Completed);

        assert!(OrderStatus::Completed.next_action().is_none());
        assert!(OrderStatus::Cancelled.next_action().is_none());
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&OrderStatus::Preparing).unwrap();
        assert_eq!(json, "\"preparing\"");
        let back: OrderStatus = serde_json::from_str("\"ready\"").unwrap();
        assert_eq!(back, OrderStatus::Ready);
    }

    #[test]
    fn as_str_round_trips_through_parse() {
        for status in OrderStatus::all() {
            assert_eq!(OrderStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(OrderStatus::parse("unknown"), None);
    }

    #[test]
    fn short_id_takes_last_six_chars() {
        let o = order("ord_9f3b21c7d4", OrderStatus::Pending);
        assert_eq!(o.short_id(), "21c7d4");
        let tiny = order("ab", OrderStatus::Pending);
        assert_eq!(tiny.short_id(), "ab");
    }

    #[test]
    fn items_summary_joins_quantities() {
        let o = order("ord_1", OrderStatus::Pending);
        assert_eq!(o.items_summary(), "2x Hambúrguer Clássico, 1x Refrigerante");
    }

    #[test]
    fn time_label_formats_hour_and_minute() {
        let o = order("ord_1", OrderStatus::Pending);
        assert_eq!(o.time_label(), "14:35");
    }
}
