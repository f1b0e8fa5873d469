//! Event bus carrying backend completions to the UI.
//!
//! Single-threaded (WASM) with interior mutability. Every event is stamped
//! with the backend generation that was current when its request started.
//! Switching backends advances the generation, and `drain` drops anything
//! stamped with an older one, so a reply from the previous server never
//! reaches the new session.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use campus_types::event::DashboardEvent;

#[derive(Debug)]
struct Stamped {
    generation: u64,
    event: DashboardEvent,
}

/// Shared event bus. Clones share one queue and one generation counter.
#[derive(Clone)]
pub struct EventBus {
    queue: Rc<RefCell<VecDeque<Stamped>>>,
    generation: Rc<Cell<u64>>,
}

/// Emitting half handed to a spawned request. Remembers the generation it
/// was created under.
#[derive(Clone)]
pub struct EventSender {
    queue: Rc<RefCell<VecDeque<Stamped>>>,
    generation: u64,
}

impl EventSender {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn emit(&self, event: DashboardEvent) {
        self.queue.borrow_mut().push_back(Stamped {
            generation: self.generation,
            event,
        });
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            queue: Rc::new(RefCell::new(VecDeque::new())),
            generation: Rc::new(Cell::new(0)),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation.get()
    }

    /// Take a sender stamped with the current generation. Grab it before
    /// the request starts, not when it completes.
    pub fn sender(&self) -> EventSender {
        EventSender {
            queue: self.queue.clone(),
            generation: self.generation.get(),
        }
    }

    /// Publish under the current generation.
    pub fn emit(&self, event: DashboardEvent) {
        self.sender().emit(event);
    }

    /// Start a new generation. Events from earlier senders are discarded on
    /// the next drain.
    pub fn advance_generation(&self) -> u64 {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        log::info!("Event bus now at generation {}", next);
        next
    }

    /// Drain all current-generation events, oldest first.
    pub fn drain(&self) -> Vec<DashboardEvent> {
        let current = self.generation.get();
        let mut events = Vec::new();
        for stamped in self.queue.borrow_mut().drain(..) {
            if stamped.generation == current {
                events.push(stamped.event);
            } else {
                log::debug!(
                    "Dropping {} from generation {} (now {})",
                    event_name(&stamped.event),
                    stamped.generation,
                    current
                );
            }
        }
        events
    }

    /// Queued events, stale ones included
    pub fn has_pending(&self) -> bool {
        !self.queue.borrow().is_empty()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

fn event_name(event: &DashboardEvent) -> &'static str {
    match event {
        DashboardEvent::ConversationsLoaded(_) => "ConversationsLoaded",
        DashboardEvent::HistoryLoaded { .. } => "HistoryLoaded",
        DashboardEvent::ReplyReceived { .. } => "ReplyReceived",
        DashboardEvent::StudentsLoaded(_) => "StudentsLoaded",
        DashboardEvent::StudentCreated(_) => "StudentCreated",
        DashboardEvent::StudentDeleted { .. } => "StudentDeleted",
        DashboardEvent::AnalyticsLoaded(_) => "AnalyticsLoaded",
        DashboardEvent::Navigate(_) => "Navigate",
    }
}
