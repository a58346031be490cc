use thiserror::Error;

pub type Result<T> = std::result::Result<T, PluginError>;

#[derive(Debug, Error)]
pub enum PluginError {
    #[error("unknown display plugin: {0}")]
    UnknownPlugin(String),

    #[error("plugin executor failed: {0}")]
    Executor(String),
}
