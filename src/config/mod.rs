/// Administrator authorization policy
pub mod admins;

/// Bot settings loading from config.toml
pub mod settings;

pub use settings::Settings;
