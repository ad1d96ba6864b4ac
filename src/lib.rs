pub mod config;
pub mod probe;
pub mod report;

pub use config::{Config, EnvSource, ProcessEnv, RAPIDAPI_KEY_VAR};
pub use probe::{inspect, KeyProbeResult};
pub use report::{render, write_report};
