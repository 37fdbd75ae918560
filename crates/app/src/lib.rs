//! Application layer: configuration, the inventory session service, and the
//! line-oriented JSON command surface.

pub mod app;
pub mod config;

pub use app::errors::ServiceError;
pub use app::service::InventoryService;
pub use config::AppConfig;
