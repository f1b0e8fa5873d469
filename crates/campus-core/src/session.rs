//! Session controller: the chat send protocol.
//!
//! Owns an explicit [`SessionContext`] (directory, log, selection) and drives
//! it through `Idle → Sending → Reconciling → Idle`:
//! 1. The user's message is appended to the log before any request is made
//! 2. The request carries the selection as it was at send time
//! 3. The reply (or a fixed placeholder on failure) is appended
//! 4. A first reply on a new session adopts the backend's conversation id
//!
//! Every request is split into a synchronous `begin_*` step that returns what
//! to send and an `apply_*`/`complete_*` step that takes the result, so the UI
//! can run the network call on its own executor. The `async` helpers chain the
//! two against a [`ChatBackendPort`].
//!
//! Each send gets a ticket recording the conversation it was issued for.
//! Moving the selection away abandons outstanding tickets for the old
//! conversation; their replies are not appended to the new log.

use campus_types::{
    Result,
    api::{ChatReply, ChatRequest, ConversationHistory},
    conversation::ConversationId,
    event::TicketId,
};

use crate::directory::ConversationDirectory;
use crate::message_log::MessageLog;
use crate::ports::ChatBackendPort;

/// Everything a chat session holds. Reset by reloading the page or by
/// switching backends.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    pub directory: ConversationDirectory,
    pub log: MessageLog,
    /// Weak reference into the directory. May name a provisional id.
    pub selected: Option<ConversationId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendState {
    Idle,
    Sending,
    Reconciling,
}

/// What `complete_send` did with a result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Reply appended to the log
    Replied,
    /// Placeholder appended to the log
    Failed,
    /// The selection moved on; nothing appended
    Abandoned,
    /// No such ticket
    Unknown,
}

/// A chat request ready to be dispatched
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingMessage {
    pub ticket: TicketId,
    pub request: ChatRequest,
}

#[derive(Debug, Clone)]
struct PendingSend {
    ticket: TicketId,
    origin: Option<ConversationId>,
    abandoned: bool,
}

pub struct SessionController {
    context: SessionContext,
    state: SendState,
    compose: String,
    pending: Vec<PendingSend>,
    next_ticket: u64,
    loading_directory: bool,
    loading_history: bool,
}

impl SessionController {
    pub fn new() -> Self {
        Self::with_context(SessionContext::default())
    }

    pub fn with_context(context: SessionContext) -> Self {
        Self {
            context,
            state: SendState::Idle,
            compose: String::new(),
            pending: Vec::new(),
            next_ticket: 0,
            loading_directory: false,
            loading_history: false,
        }
    }

    /// Drop the whole session, as when pointing at a different backend.
    /// Ticket numbering continues, so a result for a ticket issued before
    /// the reset can never settle a send issued after it.
    pub fn reset(&mut self) {
        log::info!(
            "Resetting session: {} send(s) in flight are forgotten",
            self.pending.len()
        );
        let next_ticket = self.next_ticket;
        *self = Self::new();
        self.next_ticket = next_ticket;
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    pub fn into_context(self) -> SessionContext {
        self.context
    }

    pub fn directory(&self) -> &ConversationDirectory {
        &self.context.directory
    }

    pub fn log(&self) -> &MessageLog {
        &self.context.log
    }

    pub fn selected(&self) -> Option<&ConversationId> {
        self.context.selected.as_ref()
    }

    pub fn state(&self) -> SendState {
        self.state
    }

    /// Sends awaiting a result, abandoned ones included
    pub fn in_flight(&self) -> usize {
        self.pending.len()
    }

    pub fn is_loading_directory(&self) -> bool {
        self.loading_directory
    }

    pub fn is_loading_history(&self) -> bool {
        self.loading_history
    }

    // ─── Compose input ───────────────────────────────────────

    pub fn compose(&self) -> &str {
        &self.compose
    }

    pub fn compose_mut(&mut self) -> &mut String {
        &mut self.compose
    }

    pub fn set_compose(&mut self, text: impl Into<String>) {
        self.compose = text.into();
    }

    /// Sending is gated on input only, never on network state.
    pub fn can_send(&self) -> bool {
        !self.compose.trim().is_empty()
    }

    // ─── Directory ───────────────────────────────────────────

    pub fn begin_directory_load(&mut self) {
        self.loading_directory = true;
    }

    /// Apply a `list_conversations` result. When nothing is selected yet the
    /// first conversation is selected; its id is returned if its history
    /// needs fetching.
    pub fn apply_directory(
        &mut self,
        result: Result<Vec<ConversationId>>,
    ) -> Option<ConversationId> {
        let outcome = self
            .context
            .directory
            .apply_loaded(result, self.context.selected.as_ref());
        let first = self.finish_directory_load(outcome)?;
        self.select_conversation(first)
    }

    pub async fn load_directory(&mut self, backend: &dyn ChatBackendPort) {
        self.begin_directory_load();
        let result = backend.list_conversations().await;
        let outcome = self
            .context
            .directory
            .apply_loaded(result, self.context.selected.as_ref());
        if let Some(first) = self.finish_directory_load(outcome) {
            self.select(backend, first).await;
        }
    }

    fn finish_directory_load(&mut self, outcome: Result<()>) -> Option<ConversationId> {
        self.loading_directory = false;
        if let Err(e) = outcome {
            log::error!("Failed to fetch conversations: {}", e);
            return None;
        }
        log::info!("Loaded {} conversations", self.context.directory.len());
        if self.context.selected.is_some() {
            return None;
        }
        self.context.directory.first().cloned()
    }

    // ─── Selection ───────────────────────────────────────────

    /// Start a new conversation under a provisional id and select it.
    pub fn create_conversation(&mut self) -> ConversationId {
        let id = self.context.directory.create_local();
        self.change_selection(Some(id.clone()));
        self.context.log.clear();
        self.loading_history = false;
        log::info!("Started local conversation {}", id);
        id
    }

    /// Select `id` and clear the log. Returns the id again when the backend
    /// knows it and its history must be fetched.
    pub fn select_conversation(&mut self, id: ConversationId) -> Option<ConversationId> {
        self.change_selection(Some(id.clone()));
        self.context.log.clear();
        self.loading_history = self.context.directory.is_acknowledged(&id);
        self.loading_history.then_some(id)
    }

    /// Apply a `fetch_conversation` result. Dropped unless `id` is the
    /// selection and its history is still awaited. Messages sent while the
    /// fetch was in flight stay in the log, after the history.
    pub fn apply_history(&mut self, id: &ConversationId, result: Result<ConversationHistory>) {
        if self.context.selected.as_ref() != Some(id) || !self.loading_history {
            log::debug!("Discarding history for {}: not awaited", id);
            return;
        }
        self.loading_history = false;
        match result {
            Ok(history) => self.context.log.merge_history(history),
            Err(e) => log::error!("Failed to fetch messages for {}: {}", id, e),
        }
    }

    pub async fn select(&mut self, backend: &dyn ChatBackendPort, id: ConversationId) {
        self.change_selection(Some(id.clone()));
        self.loading_history = true;
        let loaded = self
            .context
            .log
            .load_for(&id, &self.context.directory, backend)
            .await;
        self.loading_history = false;
        if let Err(e) = loaded {
            log::error!("Failed to fetch messages for {}: {}", id, e);
        }
    }

    fn change_selection(&mut self, new: Option<ConversationId>) {
        for pending in self
            .pending
            .iter_mut()
            .filter(|p| !p.abandoned && p.origin != new)
        {
            pending.abandoned = true;
            log::info!(
                "Abandoning send {:?}: selection moved away from {:?}",
                pending.ticket,
                pending.origin
            );
        }
        self.context.selected = new;
    }

    // ─── Send protocol ───────────────────────────────────────

    /// Send whatever is in the compose input.
    pub fn submit(&mut self) -> Option<OutgoingMessage> {
        if !self.can_send() {
            return None;
        }
        let text = std::mem::take(&mut self.compose);
        self.begin_send(text)
    }

    /// `Idle → Sending`: append the user message, clear the input and return
    /// the request to dispatch. Blank text is ignored.
    pub fn begin_send(&mut self, text: impl Into<String>) -> Option<OutgoingMessage> {
        let text = text.into();
        if text.trim().is_empty() {
            return None;
        }

        self.context.log.append_local(text.clone());
        self.compose.clear();

        let ticket = TicketId(self.next_ticket);
        self.next_ticket += 1;
        let origin = self.context.selected.clone();
        self.pending.push(PendingSend {
            ticket,
            origin: origin.clone(),
            abandoned: false,
        });
        self.state = SendState::Sending;
        log::debug!("Send {:?} dispatched for {:?}", ticket, origin);

        Some(OutgoingMessage {
            ticket,
            request: ChatRequest {
                message: text,
                conversation_id: origin,
            },
        })
    }

    /// Apply the result of a send started by `begin_send`.
    pub fn complete_send(&mut self, ticket: TicketId, result: Result<ChatReply>) -> SendOutcome {
        let Some(pos) = self.pending.iter().position(|p| p.ticket == ticket) else {
            log::warn!("Result for unknown send {:?}", ticket);
            return SendOutcome::Unknown;
        };
        let pending = self.pending.remove(pos);

        let outcome = if pending.abandoned {
            self.settle_abandoned(pending, result)
        } else {
            self.settle(pending, result)
        };

        self.state = if self.pending.is_empty() {
            SendState::Idle
        } else {
            SendState::Sending
        };
        outcome
    }

    /// Full round trip against `backend`. `None` when the text is blank.
    pub async fn send(
        &mut self,
        backend: &dyn ChatBackendPort,
        text: impl Into<String>,
    ) -> Option<SendOutcome> {
        let outgoing = self.begin_send(text)?;
        let result = backend.send_message(outgoing.request).await;
        Some(self.complete_send(outgoing.ticket, result))
    }

    fn settle(&mut self, pending: PendingSend, result: Result<ChatReply>) -> SendOutcome {
        match result {
            Ok(reply) => {
                self.state = SendState::Reconciling;
                self.context.log.append_remote(reply.reply);
                self.reconcile(pending.origin.as_ref(), reply.conversation_id, true);
                SendOutcome::Replied
            }
            Err(e) => {
                log::error!("Failed to send message: {}", e);
                self.context.log.append_placeholder();
                SendOutcome::Failed
            }
        }
    }

    fn settle_abandoned(&mut self, pending: PendingSend, result: Result<ChatReply>) -> SendOutcome {
        match result {
            Ok(reply) => {
                log::info!("Dropping reply for abandoned send {:?}", pending.ticket);
                // The backend still created or extended the conversation.
                self.reconcile(pending.origin.as_ref(), reply.conversation_id, false);
            }
            Err(e) => log::info!("Abandoned send {:?} failed: {}", pending.ticket, e),
        }
        SendOutcome::Abandoned
    }

    /// Register the backend's id for the conversation a send was issued on.
    /// `adopt` lets a reply to a session with no selection take it over.
    fn reconcile(&mut self, origin: Option<&ConversationId>, server: ConversationId, adopt: bool) {
        match origin {
            None => {
                self.context.directory.reconcile(None, server.clone());
                if adopt && self.context.selected.is_none() {
                    log::info!("New conversation {} acknowledged", server);
                    self.context.selected = Some(server);
                }
            }
            Some(local) if !self.context.directory.is_acknowledged(local) => {
                self.context.directory.reconcile(Some(local), server.clone());
                if *local != server {
                    log::info!("Provisional conversation {} is now {}", local, server);
                    if self.context.selected.as_ref() == Some(local) {
                        self.context.selected = Some(server.clone());
                    }
                    for p in self
                        .pending
                        .iter_mut()
                        .filter(|p| p.origin.as_ref() == Some(local))
                    {
                        p.origin = Some(server.clone());
                    }
                }
            }
            Some(established) => {
                if *established != server {
                    log::warn!(
                        "Backend answered conversation {} with id {}; keeping {}",
                        established,
                        server,
                        established
                    );
                }
            }
        }
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new()
    }
}
