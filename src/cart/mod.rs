mod events;
mod store;

pub use events::CartEvent;
pub use store::{CART_STORAGE_KEY, CartStore};
