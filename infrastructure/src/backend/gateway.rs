//! HTTP chat gateway implementation

use crate::backend::error::{HttpError, Result};
use async_trait::async_trait;
use orderchat_application::{ChatGateway, GatewayError};
use orderchat_domain::{BackendStatus, ChatReply, ChatRequest, Menu, OrderRecord};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};

/// Default backend address
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

const CHAT_PATH: &str = "chat";
const ORDERS_PATH: &str = "orders";
const MENUS_PATH: &str = "menus";

/// Gateway that talks to the ordering backend over HTTP
///
/// No retry, no authentication. Without a timeout a hung request waits
/// indefinitely.
pub struct HttpChatGateway {
    client: Client,
    base_url: Url,
}

impl HttpChatGateway {
    /// Create a gateway for the given base URL
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = Self::parse_base_url(base_url)?;

        let mut builder = Client::builder().user_agent(concat!(
            "order-chat/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        info!("HttpChatGateway initialized for {}", base_url);

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn parse_base_url(raw: &str) -> Result<Url> {
        let invalid = |reason: String| HttpError::InvalidBaseUrl {
            url: raw.to_string(),
            reason,
        };

        // Trailing slash so `join` appends instead of replacing the last segment
        let normalized = format!("{}/", raw.trim_end_matches('/'));
        let url = Url::parse(&normalized).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(invalid(format!("unsupported scheme '{}'", other))),
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| HttpError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path)?;
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        Self::read_json(response).await
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(HttpError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| HttpError::Decode {
            error: e.to_string(),
            raw: body,
        })
    }

    async fn post_chat(&self, request: &ChatRequest) -> Result<ChatReply> {
        let url = self.endpoint(CHAT_PATH)?;
        debug!("POST {} (conversation: {:?})", url, request.session_id);
        let response = self.client.post(url).json(request).send().await?;
        Self::read_json(response).await
    }
}

#[async_trait]
impl ChatGateway for HttpChatGateway {
    async fn send_turn(&self, request: &ChatRequest) -> std::result::Result<ChatReply, GatewayError> {
        Ok(self.post_chat(request).await?)
    }

    async fn list_orders(&self) -> std::result::Result<Vec<OrderRecord>, GatewayError> {
        Ok(self.get_json(ORDERS_PATH).await?)
    }

    async fn menus(&self) -> std::result::Result<Menu, GatewayError> {
        Ok(self.get_json(MENUS_PATH).await?)
    }

    async fn status(&self) -> std::result::Result<BackendStatus, GatewayError> {
        Ok(self.get_json("").await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Json, Router,
        http::StatusCode,
        routing::{get, post},
    };
    use serde_json::{Value, json};

    async fn spawn_backend(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    /// Stub that mirrors the real backend's greeting on a new conversation
    fn chat_stub() -> Router {
        Router::new().route(
            "/chat",
            post(|Json(body): Json<Value>| async move {
                let message = body["message"].as_str().unwrap_or_default().to_string();
                match body.get("session_id").and_then(Value::as_str) {
                    None => Json(json!({
                        "session_id": "abc",
                        "response": "Welcome to McDonald's! What can I get you started with?",
                        "finalized": false
                    })),
                    Some(conversation) => Json(json!({
                        "session_id": conversation,
                        "response": format!("You said: {}", message),
                        "finalized": true,
                        "order": {
                            "order_id": "1",
                            "items": [{"name": "Big Mac", "type": "burger", "price": 5.99}],
                            "total": 5.99,
                            "finalized": true,
                            "session_id": conversation
                        }
                    })),
                }
            }),
        )
    }

    #[test]
    fn test_parse_base_url() {
        let gateway = HttpChatGateway::new("http://localhost:8000", None).unwrap();
        assert_eq!(gateway.base_url().as_str(), "http://localhost:8000/");
        assert_eq!(
            gateway.endpoint(CHAT_PATH).unwrap().as_str(),
            "http://localhost:8000/chat"
        );
    }

    #[test]
    fn test_base_url_with_prefix_path() {
        let gateway = HttpChatGateway::new("https://example.com/api/", None).unwrap();
        assert_eq!(
            gateway.endpoint(ORDERS_PATH).unwrap().as_str(),
            "https://example.com/api/orders"
        );
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        assert!(matches!(
            HttpChatGateway::new("not a url", None),
            Err(HttpError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            HttpChatGateway::new("ftp://localhost:8000", None),
            Err(HttpError::InvalidBaseUrl { .. })
        ));
    }

    #[tokio::test]
    async fn test_first_turn_omits_conversation() {
        let base = spawn_backend(chat_stub()).await;
        let gateway = HttpChatGateway::new(&base, None).unwrap();

        let reply = gateway.send_turn(&ChatRequest::new("hi", None)).await.unwrap();
        assert_eq!(reply.session_id, "abc");
        assert!(!reply.finalized);
        assert!(reply.order.is_none());
    }

    #[tokio::test]
    async fn test_follow_up_turn_carries_conversation() {
        let base = spawn_backend(chat_stub()).await;
        let gateway = HttpChatGateway::new(&base, None).unwrap();

        let reply = gateway
            .send_turn(&ChatRequest::new("that's all", Some("abc")))
            .await
            .unwrap();
        assert_eq!(reply.response, "You said: that's all");
        assert!(reply.finalized);
        assert_eq!(reply.order.unwrap().total, 5.99);
    }

    #[tokio::test]
    async fn test_server_error_is_status() {
        let app = Router::new().route(
            "/chat",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let gateway = HttpChatGateway::new(&spawn_backend(app).await, None).unwrap();

        let error = gateway
            .send_turn(&ChatRequest::new("hi", None))
            .await
            .unwrap_err();
        assert!(matches!(error, GatewayError::Status { status: 500, ref body } if body == "boom"));
    }

    #[tokio::test]
    async fn test_malformed_reply_is_decode_error() {
        let app = Router::new().route(
            "/chat",
            post(|| async { Json(json!({"session_id": "abc"})) }),
        );
        let gateway = HttpChatGateway::new(&spawn_backend(app).await, None).unwrap();

        let error = gateway
            .send_turn(&ChatRequest::new("hi", None))
            .await
            .unwrap_err();
        assert!(matches!(error, GatewayError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_connection_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let gateway = HttpChatGateway::new(&format!("http://{}", addr), None).unwrap();
        let error = gateway
            .send_turn(&ChatRequest::new("hi", None))
            .await
            .unwrap_err();
        assert!(matches!(error, GatewayError::Connection(_)));
    }

    #[tokio::test]
    async fn test_slow_backend_times_out() {
        let app = Router::new().route(
            "/chat",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!({"session_id": "abc", "response": "late", "finalized": false}))
            }),
        );
        let base = spawn_backend(app).await;
        let gateway = HttpChatGateway::new(&base, Some(Duration::from_millis(100))).unwrap();

        let error = gateway
            .send_turn(&ChatRequest::new("hi", None))
            .await
            .unwrap_err();
        assert!(matches!(error, GatewayError::Timeout));
    }

    #[tokio::test]
    async fn test_list_orders_and_status() {
        let app = Router::new()
            .route("/", get(|| async { Json(json!({"message": "Backend is working!"})) }))
            .route(
                "/orders",
                get(|| async {
                    Json(json!([{
                        "order_id": "1",
                        "items": [{"name": "Big Mac", "type": "burger", "price": 5.99}],
                        "total": 5.99,
                        "finalized": true,
                        "session_id": "abc"
                    }]))
                }),
            );
        let gateway = HttpChatGateway::new(&spawn_backend(app).await, None).unwrap();

        let status = gateway.status().await.unwrap();
        assert_eq!(status.message, "Backend is working!");

        let orders = gateway.list_orders().await.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].summary.items[0].name, "Big Mac");
        assert_eq!(orders[0].session_id, "abc");
    }

    #[tokio::test]
    async fn test_menus() {
        let app = Router::new().route(
            "/menus",
            get(|| async {
                Json(json!({
                    "deals": {"deals": []},
                    "ingredients": {},
                    "virtual_items": {
                        "items": [{"name": "Big Mac", "category": "burgers", "price": 5.99}],
                        "combos": [{"name": "Big Mac Meal", "price": 8.99}]
                    },
                    "upsells": {"items": [{"name": "Extra Cheese", "price": 0.5}]}
                }))
            }),
        );
        let gateway = HttpChatGateway::new(&spawn_backend(app).await, None).unwrap();

        let menu = gateway.menus().await.unwrap();
        assert_eq!(menu.virtual_items.items[0].name, "Big Mac");
        assert_eq!(menu.virtual_items.combos[0].price, Some(8.99));
        assert_eq!(menu.upsells.items[0].name, "Extra Cheese");
    }

    #[tokio::test]
    async fn test_missing_menus_route_is_status_error() {
        let gateway = HttpChatGateway::new(&spawn_backend(Router::new()).await, None).unwrap();
        let error = gateway.menus().await.unwrap_err();
        assert!(matches!(error, GatewayError::Status { status: 404, .. }));
    }
}
