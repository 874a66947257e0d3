//! # Configuration data / 配置数据
//!
//! ## Responsibilities / 职责
//!
//! - Define configuration data structures / 定义配置数据结构
//! - Provide TOML → DTO mapping / 提供 TOML → DTO 的映射
//!
//! Reading the file is the loader's job (`sc-infra`); this module never touches the filesystem.

mod defaults;
mod model;

pub use model::{AppConfig, HistoryConfig, PollerConfig, StorageConfig};
