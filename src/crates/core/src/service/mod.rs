//! Service layer

pub mod config;

pub use config::{AppConfig, ConfigManager, HostConfig, ResolverConfig};
