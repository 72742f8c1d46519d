use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    pub server_port: String,
    /// Directory holding the collection files; `None` selects the in-memory
    /// store.
    pub data_dir: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let server_port = lookup("SERVER_PORT")
            .or_else(|| lookup("PORT"))
            .unwrap_or_else(|| "3000".into());
        let backend = lookup("STORAGE_BACKEND").unwrap_or_else(|| "file".into());
        let data_dir = match backend.trim().to_ascii_lowercase().as_str() {
            "file" => Some(lookup("DATA_DIR").unwrap_or_else(|| "data".into())),
            "memory" => None,
            other => anyhow::bail!("unknown STORAGE_BACKEND `{other}` (expected `file` or `memory`)"),
        };
        Ok(Self {
            server_port,
            data_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn defaults_to_file_store_on_3000() {
        let cfg = from(&[]).unwrap();
        assert_eq!(cfg.server_port, "3000");
        assert_eq!(cfg.data_dir.as_deref(), Some("data"));
    }

    #[test]
    fn server_port_wins_over_port() {
        let cfg = from(&[("PORT", "8080"), ("SERVER_PORT", "9000")]).unwrap();
        assert_eq!(cfg.server_port, "9000");
        let cfg = from(&[("PORT", "8080")]).unwrap();
        assert_eq!(cfg.server_port, "8080");
    }

    #[test]
    fn backend_selection() {
        let cfg = from(&[("STORAGE_BACKEND", "Memory"), ("DATA_DIR", "/tmp/x")]).unwrap();
        assert!(cfg.data_dir.is_none());
        let cfg = from(&[("DATA_DIR", "/var/lib/shop")]).unwrap();
        assert_eq!(cfg.data_dir.as_deref(), Some("/var/lib/shop"));
        assert!(from(&[("STORAGE_BACKEND", "mongo")]).is_err());
    }
}
