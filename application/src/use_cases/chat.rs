//! Chat use case
//!
//! Drives the send/receive cycle of every chat session. The session store
//! sits behind a single mutex; the lock is taken for each state transition
//! and never held across the backend call, so other sessions stay usable
//! while a reply is pending.

use crate::ports::chat_gateway::{ChatGateway, GatewayError};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use orderchat_domain::{
    ChatReply, ChatRequest, ChatSession, DomainError, SessionId, SessionStore,
};
use serde_json::json;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Reasons a send was not dispatched
///
/// A rejected send changes nothing: no message is appended and no request
/// is issued.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SendError {
    #[error("Select a chat or start a new one.")]
    NoActiveSession,

    #[error(transparent)]
    Rejected(#[from] DomainError),
}

/// Result of a dispatched send
///
/// Both variants leave the session idle with one system message appended.
#[derive(Debug)]
pub enum SendOutcome {
    /// The backend replied
    Replied { finalized: bool },
    /// The backend could not be reached; the error message was appended
    Failed(GatewayError),
}

impl SendOutcome {
    pub fn is_replied(&self) -> bool {
        matches!(self, SendOutcome::Replied { .. })
    }
}

/// Use case owning all chat state
pub struct ChatUseCase<G: ChatGateway + 'static> {
    gateway: Arc<G>,
    store: Arc<Mutex<SessionStore>>,
    logger: Arc<dyn ConversationLogger>,
}

impl<G: ChatGateway + 'static> Clone for ChatUseCase<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
            store: Arc::clone(&self.store),
            logger: Arc::clone(&self.logger),
        }
    }
}

impl<G: ChatGateway + 'static> ChatUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            store: Arc::new(Mutex::new(SessionStore::new())),
            logger: Arc::new(NoConversationLogger),
        }
    }

    /// Record every turn through the given transcript logger
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    fn store(&self) -> MutexGuard<'_, SessionStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Start a new chat and make it active
    pub fn create_session(&self) -> SessionId {
        let (id, name) = {
            let mut store = self.store();
            let id = store.create_session();
            let name = store.session(id).map(|s| s.name().to_string()).unwrap_or_default();
            (id, name)
        };

        info!("Created {} ({})", name, id);
        self.logger.log(ConversationEvent::new(
            "session_created",
            json!({ "session": id.to_string(), "name": name }),
        ));
        id
    }

    pub fn set_active_session(&self, id: SessionId) -> Result<(), DomainError> {
        self.store().set_active_session(id)
    }

    /// Select a chat by its 1-based position
    pub fn select_position(&self, position: usize) -> Result<SessionId, DomainError> {
        let mut store = self.store();
        let id = store.session_by_position(position)?.id();
        store.set_active_session(id)?;
        Ok(id)
    }

    pub fn set_input(&self, text: impl Into<String>) {
        self.store().set_input(text);
    }

    pub fn input(&self) -> String {
        self.store().input().to_string()
    }

    /// Read-only copy of the whole store
    pub fn snapshot(&self) -> SessionStore {
        self.store().clone()
    }

    pub fn active_session(&self) -> Option<ChatSession> {
        self.store().active_session().cloned()
    }

    pub fn session(&self, id: SessionId) -> Result<ChatSession, DomainError> {
        self.store().session(id).cloned()
    }

    /// Accept the input buffer as a turn for the active session
    pub fn begin_input(&self) -> Result<PendingTurn<G>, SendError> {
        let (id, text) = {
            let store = self.store();
            let id = store.active_id().ok_or(SendError::NoActiveSession)?;
            (id, store.input().to_string())
        };
        self.begin_message(id, &text)
    }

    /// Accept one user turn without waiting for the backend.
    ///
    /// On success the user message is appended, the session is awaiting a
    /// reply and the input buffer is cleared. A rejection changes nothing.
    pub fn begin_message(&self, id: SessionId, text: &str) -> Result<PendingTurn<G>, SendError> {
        let request = self.store().begin_send(id, text)?;

        debug!(
            "Dispatching turn for {} (conversation: {:?})",
            id, request.session_id
        );
        self.logger.log(ConversationEvent::new(
            "user_message",
            json!({
                "session": id.to_string(),
                "conversation_id": request.session_id,
                "text": request.message,
            }),
        ));

        Ok(PendingTurn {
            use_case: self.clone(),
            id,
            request,
        })
    }

    /// Send one user turn for a session and wait for its outcome.
    ///
    /// Transport failures are not errors here: they surface as a fixed
    /// system message and [`SendOutcome::Failed`].
    pub async fn send_message(&self, id: SessionId, text: &str) -> Result<SendOutcome, SendError> {
        Ok(self.begin_message(id, text)?.complete().await)
    }

    fn apply_reply(&self, id: SessionId, reply: ChatReply) -> SendOutcome {
        let finalized = reply.finalized;
        self.logger.log(ConversationEvent::new(
            "system_reply",
            json!({
                "session": id.to_string(),
                "conversation_id": reply.session_id,
                "text": reply.response,
                "finalized": reply.finalized,
                "order_id": reply.order.as_ref().map(|o| o.order_id.clone()),
            }),
        ));

        if let Err(e) = self.store().complete_send(id, reply) {
            warn!("Dropping reply for {}: {}", id, e);
        }
        info!("Reply received for {} (finalized: {})", id, finalized);
        SendOutcome::Replied { finalized }
    }

    fn apply_failure(&self, id: SessionId, error: GatewayError) -> SendOutcome {
        warn!("Chat turn for {} failed: {}", id, error);
        self.logger.log(ConversationEvent::new(
            "backend_error",
            json!({ "session": id.to_string(), "error": error.to_string() }),
        ));

        if let Err(e) = self.store().fail_send(id) {
            warn!("Dropping failure for {}: {}", id, e);
        }
        SendOutcome::Failed(error)
    }
}

/// A turn the store has accepted, still waiting for the backend.
///
/// The session stays in `AwaitingResponse` until [`PendingTurn::complete`]
/// has run, so the future must be driven to the end (typically on its own
/// task).
#[must_use = "the session stays awaiting a reply until the turn is completed"]
pub struct PendingTurn<G: ChatGateway + 'static> {
    use_case: ChatUseCase<G>,
    id: SessionId,
    request: ChatRequest,
}

impl<G: ChatGateway + 'static> PendingTurn<G> {
    pub fn session_id(&self) -> SessionId {
        self.id
    }

    /// Call the backend and apply the outcome to the session
    pub async fn complete(self) -> SendOutcome {
        let Self {
            use_case,
            id,
            request,
        } = self;

        match use_case.gateway.send_turn(&request).await {
            Ok(reply) => use_case.apply_reply(id, reply),
            Err(e) => use_case.apply_failure(id, e),
        }
    }
}
