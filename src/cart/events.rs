use std::fmt;

/// Domain events emitted by [`CartStore`](super::CartStore) after each
/// mutation has been written through to storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    ItemAdded { id: String, quantity: u32 },
    ItemRemoved { id: String },
    QuantityUpdated { id: String, quantity: u32 },
    CartCleared,
    PersistFailed { reason: String },
}

type Listener = Box<dyn Fn(&CartEvent) + Send + Sync>;

/// Synchronous observer registry. Listeners run in registration order.
#[derive(Default)]
pub struct EventBus {
    listeners: Vec<Listener>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: Fn(&CartEvent) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn emit(&self, event: &CartEvent) {
        for listener in &self.listeners {
            listener(event);
        }
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
