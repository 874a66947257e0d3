pub mod config;
pub mod run;
pub mod tracing;
pub mod wiring;

pub use config::resolve_config;
pub use run::{list_history, run_daemon};
pub use self::tracing::init_tracing_subscriber;
