use std::{collections::HashMap, sync::Arc};

use crate::{
    models::{CartLineItem, CatalogItem},
    storage::{LocalStorage, StorageError},
};

use super::events::{CartEvent, EventBus};

/// Storage key holding the serialized cart.
pub const CART_STORAGE_KEY: &str = "cart";

/// Ordered, id-keyed cart with write-through persistence.
///
/// Every mutation writes the full list to storage before returning and then
/// notifies subscribers. Storage failures never propagate to callers: a
/// failed read yields an empty cart and a failed write is logged and emitted
/// as [`CartEvent::PersistFailed`] while the in-memory change is kept.
pub struct CartStore {
    items: Vec<CartLineItem>,
    storage: Arc<dyn LocalStorage>,
    events: EventBus,
}

impl CartStore {
    /// Hydrate from `storage`, falling back to an empty cart.
    pub fn load(storage: Arc<dyn LocalStorage>) -> Self {
        let items = match storage.get_item(CART_STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<CartLineItem>>(&raw) {
                Ok(items) => normalize(items),
                Err(err) => {
                    tracing::error!(error = %err, "failed to parse stored cart; starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::error!(error = %err, "failed to read stored cart; starting empty");
                Vec::new()
            }
        };
        tracing::debug!(lines = items.len(), "cart hydrated");

        Self {
            items,
            storage,
            events: EventBus::new(),
        }
    }

    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: Fn(&CartEvent) + Send + Sync + 'static,
    {
        self.events.subscribe(listener);
    }

    /// Line items in display (insertion) order.
    pub fn line_items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Total units across all lines.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Saturates at `i64::MAX` rather than overflowing.
    pub fn subtotal(&self) -> i64 {
        self.items
            .iter()
            .map(CartLineItem::line_total)
            .fold(0, i64::saturating_add)
    }

    /// Add `quantity` units of `item`. Re-adding an id only bumps its
    /// quantity; the captured name, price and variant stay as first added.
    pub fn add_to_cart(&mut self, item: &CatalogItem, quantity: u32, variant: Option<String>) {
        if quantity == 0 {
            tracing::warn!(id = %item.id, "ignoring add with zero quantity");
            return;
        }

        match self.position(&item.id) {
            Some(idx) => {
                let line = &mut self.items[idx];
                line.quantity = line.quantity.saturating_add(quantity);
            }
            None => self.items.push(CartLineItem {
                id: item.id.clone(),
                name: item.name.clone(),
                price: item.price,
                image: Some(item.image_url.clone()),
                quantity,
                variant,
            }),
        }
        tracing::debug!(id = %item.id, quantity, "added to cart");

        self.commit(CartEvent::ItemAdded {
            id: item.id.clone(),
            quantity,
        });
    }

    /// Remove the line for `id`. Missing ids are a no-op.
    pub fn remove_from_cart(&mut self, id: &str) {
        self.items.retain(|item| item.id != id);
        tracing::debug!(id, "removed from cart");
        self.commit(CartEvent::ItemRemoved { id: id.to_string() });
    }

    /// Set the quantity for `id`. A quantity of zero or less removes the line.
    pub fn update_quantity(&mut self, id: &str, quantity: i64) {
        if quantity <= 0 {
            tracing::debug!(id, quantity, "non-positive quantity; removing line");
            self.remove_from_cart(id);
            return;
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        let Some(idx) = self.position(id) else {
            tracing::debug!(id, "quantity update for missing line");
            if let Some(failure) = self.persist_or_warn() {
                self.events.emit(&failure);
            }
            return;
        };
        self.items[idx].quantity = quantity;

        self.commit(CartEvent::QuantityUpdated {
            id: id.to_string(),
            quantity,
        });
    }

    pub fn clear_cart(&mut self) {
        self.items.clear();
        tracing::debug!("cart cleared");
        self.commit(CartEvent::CartCleared);
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    fn commit(&self, event: CartEvent) {
        let failure = self.persist_or_warn();
        self.events.emit(&event);
        if let Some(failure) = failure {
            self.events.emit(&failure);
        }
    }

    fn persist_or_warn(&self) -> Option<CartEvent> {
        match self.persist() {
            Ok(()) => None,
            Err(err) => {
                tracing::error!(error = %err, "failed to persist cart");
                Some(CartEvent::PersistFailed {
                    reason: err.to_string(),
                })
            }
        }
    }

    fn persist(&self) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&self.items)?;
        self.storage.set_item(CART_STORAGE_KEY, &raw)
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("items", &self.items)
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

/// Drop zero-quantity and negatively priced lines, and fold repeated ids
/// into their first row.
fn normalize(raw: Vec<CartLineItem>) -> Vec<CartLineItem> {
    let mut items: Vec<CartLineItem> = Vec::with_capacity(raw.len());
    let mut index: HashMap<String, usize> = HashMap::new();

    for item in raw {
        if item.quantity == 0 {
            tracing::warn!(id = %item.id, "dropping stored line with zero quantity");
            continue;
        }
        if item.price < 0 {
            tracing::warn!(
                id = %item.id,
                price = item.price,
                "dropping stored line with negative price"
            );
            continue;
        }
        if let Some(&idx) = index.get(&item.id) {
            tracing::warn!(id = %item.id, "merging duplicate stored line");
            items[idx].quantity = items[idx].quantity.saturating_add(item.quantity);
            continue;
        }
        index.insert(item.id.clone(), items.len());
        items.push(item);
    }

    items
}
