//! List orders use case
//!
//! Backs the admin view: every order the backend has finalized.

use crate::ports::chat_gateway::{ChatGateway, GatewayError};
use orderchat_domain::OrderRecord;
use std::sync::Arc;
use tracing::info;

/// Orders grouped for display
#[derive(Debug, Clone, Default)]
pub struct OrderListing {
    pub orders: Vec<OrderRecord>,
    /// Sum of all order totals
    pub revenue: f64,
}

impl OrderListing {
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

/// Use case for the admin order listing
pub struct ListOrdersUseCase<G: ChatGateway + 'static> {
    gateway: Arc<G>,
}

impl<G: ChatGateway + 'static> ListOrdersUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Fetch finalized orders, newest last as the backend records them
    pub async fn execute(&self) -> Result<OrderListing, GatewayError> {
        let orders: Vec<_> = self
            .gateway
            .list_orders()
            .await?
            .into_iter()
            .filter(|o| o.finalized)
            .collect();
        let revenue = orders.iter().map(|o| o.summary.total).sum();

        info!("Fetched {} finalized orders", orders.len());
        Ok(OrderListing { orders, revenue })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use orderchat_domain::{BackendStatus, ChatReply, ChatRequest, Menu, OrderSummary};

    struct OrdersGateway(Vec<OrderRecord>);

    #[async_trait]
    impl ChatGateway for OrdersGateway {
        async fn send_turn(&self, _request: &ChatRequest) -> Result<ChatReply, GatewayError> {
            Err(GatewayError::Timeout)
        }

        async fn list_orders(&self) -> Result<Vec<OrderRecord>, GatewayError> {
            Ok(self.0.clone())
        }

        async fn menus(&self) -> Result<Menu, GatewayError> {
            Ok(Menu::default())
        }

        async fn status(&self) -> Result<BackendStatus, GatewayError> {
            Err(GatewayError::Timeout)
        }
    }

    fn record(order_id: &str, total: f64, finalized: bool) -> OrderRecord {
        OrderRecord {
            summary: OrderSummary {
                order_id: order_id.to_string(),
                items: vec![],
                total,
            },
            finalized,
            session_id: format!("conv-{}", order_id),
        }
    }

    #[tokio::test]
    async fn test_lists_finalized_orders_with_revenue() {
        let gateway = Arc::new(OrdersGateway(vec![
            record("1", 5.5, true),
            record("2", 3.0, false),
            record("3", 4.5, true),
        ]));
        let listing = ListOrdersUseCase::new(gateway).execute().await.unwrap();

        let ids: Vec<_> = listing.orders.iter().map(|o| o.summary.order_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(listing.revenue, 10.0);
    }

    #[tokio::test]
    async fn test_empty_listing() {
        let listing = ListOrdersUseCase::new(Arc::new(OrdersGateway(vec![])))
            .execute()
            .await
            .unwrap();
        assert!(listing.is_empty());
        assert_eq!(listing.revenue, 0.0);
    }
}
