pub mod config;
pub mod history;

pub use config::load_config;
pub use history::FileHistoryStore;
