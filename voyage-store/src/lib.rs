pub mod app_config;
pub mod memory;

pub use app_config::{AppConfig, StoreConfig};
pub use memory::MemoryStore;
