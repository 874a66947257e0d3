use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("data local directory unavailable")]
    DataLocalDirUnavailable,

    #[error("config directory unavailable")]
    ConfigDirUnavailable,
}
