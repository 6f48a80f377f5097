//! Show menu use case

use crate::ports::chat_gateway::{ChatGateway, GatewayError};
use orderchat_domain::{Menu, MenuItem};
use std::sync::Arc;
use tracing::info;

/// Use case for browsing the backend's menu
pub struct ShowMenuUseCase<G: ChatGateway + 'static> {
    gateway: Arc<G>,
}

impl<G: ChatGateway + 'static> ShowMenuUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Fetch the menu, optionally keeping only one category.
    ///
    /// The category match ignores case. Combos and extras carry no category
    /// in practice, so a filter usually leaves only items.
    pub async fn execute(&self, category: Option<&str>) -> Result<Menu, GatewayError> {
        let mut menu = self.gateway.menus().await?;

        if let Some(category) = category {
            let keep = |items: &mut Vec<MenuItem>| {
                items.retain(|item| {
                    item.category
                        .as_deref()
                        .is_some_and(|c| c.eq_ignore_ascii_case(category))
                })
            };
            keep(&mut menu.virtual_items.items);
            keep(&mut menu.virtual_items.combos);
            keep(&mut menu.upsells.items);
        }

        info!(
            "Fetched menu ({} sections, category: {:?})",
            menu.sections().len(),
            category
        );
        Ok(menu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use orderchat_domain::{
        BackendStatus, ChatReply, ChatRequest, OrderRecord, Upsells, VirtualItems,
    };

    struct MenuGateway(Menu);

    #[async_trait]
    impl ChatGateway for MenuGateway {
        async fn send_turn(&self, _request: &ChatRequest) -> Result<ChatReply, GatewayError> {
            Err(GatewayError::Timeout)
        }

        async fn list_orders(&self) -> Result<Vec<OrderRecord>, GatewayError> {
            Ok(vec![])
        }

        async fn menus(&self) -> Result<Menu, GatewayError> {
            Ok(self.0.clone())
        }

        async fn status(&self) -> Result<BackendStatus, GatewayError> {
            Err(GatewayError::Timeout)
        }
    }

    fn item(name: &str, category: Option<&str>) -> MenuItem {
        MenuItem {
            name: name.to_string(),
            category: category.map(str::to_string),
            price: Some(1.0),
        }
    }

    fn sample_menu() -> Menu {
        Menu {
            virtual_items: VirtualItems {
                items: vec![
                    item("Big Mac", Some("burgers")),
                    item("McFlurry", Some("desserts")),
                ],
                combos: vec![item("Big Mac Meal", None)],
            },
            upsells: Upsells {
                items: vec![item("Extra Cheese", None)],
            },
        }
    }

    #[tokio::test]
    async fn test_full_menu() {
        let use_case = ShowMenuUseCase::new(Arc::new(MenuGateway(sample_menu())));
        let menu = use_case.execute(None).await.unwrap();
        assert_eq!(menu, sample_menu());
    }

    #[tokio::test]
    async fn test_category_filter_ignores_case() {
        let use_case = ShowMenuUseCase::new(Arc::new(MenuGateway(sample_menu())));
        let menu = use_case.execute(Some("Desserts")).await.unwrap();

        assert_eq!(menu.virtual_items.items, vec![item("McFlurry", Some("desserts"))]);
        assert!(menu.virtual_items.combos.is_empty());
        assert!(menu.upsells.items.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_category_is_empty() {
        let use_case = ShowMenuUseCase::new(Arc::new(MenuGateway(sample_menu())));
        assert!(use_case.execute(Some("salads")).await.unwrap().is_empty());
    }
}
