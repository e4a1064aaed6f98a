mod manager;

pub use manager::{
    BackendConfig, ConfigFile, ConfigManager, DEFAULT_BACKEND, ResolveOptions, ResolvedConfig,
    TutorConfig, resolve_config,
};
