//! Conversation directory: the ordered set of conversation ids the client knows.
//!
//! Most recently created entries sit at the front. Loaded entries keep the
//! backend's order, behind any local entries the backend has not listed yet.
//! Ids are unique; every mutation re-establishes that.

use std::collections::HashSet;

use campus_types::{
    Result,
    conversation::{Conversation, ConversationId, Provenance},
};

use crate::ports::ChatBackendPort;

#[derive(Debug, Clone, Default)]
pub struct ConversationDirectory {
    entries: Vec<Conversation>,
}

impl ConversationDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch every id from the backend and replace the acknowledged entries.
    /// On failure only local entries survive and the error is returned.
    pub async fn load(&mut self, backend: &dyn ChatBackendPort) -> Result<()> {
        let result = backend.list_conversations().await;
        self.apply_loaded(result, None)
    }

    /// Apply the outcome of a `list_conversations` call.
    ///
    /// Provisional entries and `keep` are retained ahead of the fetched ids
    /// when the backend did not list them: a load that started before the
    /// user created a conversation, or before a first reply registered one,
    /// must not make it vanish.
    pub fn apply_loaded(
        &mut self,
        result: Result<Vec<ConversationId>>,
        keep: Option<&ConversationId>,
    ) -> Result<()> {
        let (ids, outcome) = match result {
            Ok(ids) => (ids, Ok(())),
            Err(e) => (Vec::new(), Err(e)),
        };

        let fetched: HashSet<&ConversationId> = ids.iter().collect();
        let mut entries: Vec<Conversation> = self
            .entries
            .iter()
            .filter(|c| !fetched.contains(&c.id))
            .filter(|c| c.is_provisional() || Some(&c.id) == keep)
            .cloned()
            .collect();
        if !entries.is_empty() {
            log::debug!("Keeping {} local conversation(s) across reload", entries.len());
        }
        entries.extend(ids.iter().cloned().map(Conversation::acknowledged));

        self.entries = entries;
        self.dedupe();
        outcome
    }

    /// Replace all entries with backend-acknowledged ids, keeping their order.
    pub fn replace(&mut self, ids: Vec<ConversationId>) {
        self.entries = ids.into_iter().map(Conversation::acknowledged).collect();
        self.dedupe();
    }

    /// Mint a provisional id and put it at the front.
    pub fn create_local(&mut self) -> ConversationId {
        let id = ConversationId::generate();
        self.entries.insert(0, Conversation::provisional(id.clone()));
        id
    }

    /// Register `server` as acknowledged, replacing the provisional `local`
    /// entry when there is one, otherwise inserting at the front.
    ///
    /// Returns `false` when `server` was already acknowledged; in that case
    /// the only change is dropping a provisional `local` entry under a
    /// different name.
    pub fn reconcile(&mut self, local: Option<&ConversationId>, server: ConversationId) -> bool {
        let stale_local = local
            .filter(|l| **l != server)
            .and_then(|l| self.position_provisional(l));

        if self.is_acknowledged(&server) {
            if let Some(pos) = stale_local {
                self.entries.remove(pos);
            }
            return false;
        }

        let slot = local
            .and_then(|l| self.position_provisional(l))
            .or_else(|| self.position(&server));
        match slot {
            Some(pos) => self.entries[pos] = Conversation::acknowledged(server.clone()),
            None => self.entries.insert(0, Conversation::acknowledged(server.clone())),
        }
        for entry in self.entries.iter_mut().filter(|c| c.id == server) {
            entry.provenance = Provenance::Acknowledged;
        }
        self.dedupe();
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[Conversation] {
        &self.entries
    }

    pub fn first(&self) -> Option<&ConversationId> {
        self.entries.first().map(|c| &c.id)
    }

    pub fn get(&self, id: &ConversationId) -> Option<&Conversation> {
        self.entries.iter().find(|c| c.id == *id)
    }

    pub fn contains(&self, id: &ConversationId) -> bool {
        self.get(id).is_some()
    }

    /// Known to the backend, so its history can be fetched.
    pub fn is_acknowledged(&self, id: &ConversationId) -> bool {
        self.get(id)
            .is_some_and(|c| c.provenance == Provenance::Acknowledged)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, id: &ConversationId) -> Option<usize> {
        self.entries.iter().position(|c| c.id == *id)
    }

    fn position_provisional(&self, id: &ConversationId) -> Option<usize> {
        self.entries
            .iter()
            .position(|c| c.id == *id && c.is_provisional())
    }

    fn dedupe(&mut self) {
        let mut seen = HashSet::new();
        self.entries.retain(|c| seen.insert(c.id.clone()));
    }
}
