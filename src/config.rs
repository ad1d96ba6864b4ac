use std::env;

/// Name of the environment variable this tool probes.
pub const RAPIDAPI_KEY_VAR: &str = "RAPIDAPI_KEY";

/// Key-value lookup over some environment. The probe takes this as an
/// injected dependency so tests never have to mutate real process state.
pub trait EnvSource {
    fn get(&self, name: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub rapidapi_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::load(&ProcessEnv)
    }

    pub fn load(source: &dyn EnvSource) -> Self {
        Self {
            rapidapi_key: source.get(RAPIDAPI_KEY_VAR),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.rapidapi_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FakeEnv(HashMap<String, String>);

    impl EnvSource for FakeEnv {
        fn get(&self, name: &str) -> Option<String> {
            self.0.get(name).cloned()
        }
    }

    #[test]
    fn test_config_with_key() {
        let mut vars = HashMap::new();
        vars.insert(RAPIDAPI_KEY_VAR.to_string(), "test_key_12345".to_string());
        let config = Config::load(&FakeEnv(vars));
        assert!(config.has_api_key());
        assert_eq!(config.rapidapi_key, Some("test_key_12345".to_string()));
    }

    #[test]
    fn test_config_without_key() {
        let config = Config::load(&FakeEnv(HashMap::new()));
        assert!(!config.has_api_key());
        assert_eq!(config.rapidapi_key, None);
    }

    #[test]
    fn test_config_from_env() {
        let config = Config::from_env();
        // Just verify it doesn't panic
        let _ = config.has_api_key();
    }
}
