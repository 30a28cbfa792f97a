mod settings;

pub use settings::{ApiConfig, LogConfig, SessionConfig, Settings, ENV_PREFIX};
