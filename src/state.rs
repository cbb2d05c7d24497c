use std::sync::Arc;

use parking_lot::Mutex;

use crate::{
    cart::CartStore,
    catalog::{Catalog, StaticCatalog},
    checkout::Pricing,
    config::AppConfig,
    notifications::NotificationCenter,
    storage::{FileStorage, LocalStorage},
};

#[derive(Clone)]
pub struct AppState {
    pub cart: Arc<Mutex<CartStore>>,
    pub catalog: Arc<dyn Catalog>,
    pub notifications: Arc<NotificationCenter>,
    pub pricing: Pricing,
    pub razorpay_key_id: String,
    pub jwt_secret: Option<String>,
}

impl AppState {
    pub fn new(storage: Arc<dyn LocalStorage>, catalog: Arc<dyn Catalog>, config: &AppConfig) -> Self {
        let notifications = Arc::new(NotificationCenter::new());
        let mut cart = CartStore::load(storage);
        notifications.attach(&mut cart);

        Self {
            cart: Arc::new(Mutex::new(cart)),
            catalog,
            notifications,
            pricing: config.pricing,
            razorpay_key_id: config.razorpay_key_id.clone(),
            jwt_secret: config.jwt_secret.clone(),
        }
    }

    /// File-backed cart with the compiled-in catalog.
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let storage = FileStorage::open(&config.cart_storage_dir)?;
        tracing::info!(dir = %storage.dir().display(), "cart storage opened");
        Ok(Self::new(
            Arc::new(storage),
            Arc::new(StaticCatalog::habstick()),
            config,
        ))
    }
}
