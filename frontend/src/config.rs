use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:54321/rest/v1";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub anon_key: Option<String>,
}

/// Fully resolved settings used by the API client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub api_base_url: String,
    pub anon_key: String,
}

static RESOLVED: OnceLock<ResolvedConfig> = OnceLock::new();

impl RuntimeConfig {
    /// Fills gaps in `self` from `fallback`.
    pub fn or(self, fallback: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: self.api_base_url.or(fallback.api_base_url),
            anon_key: self.anon_key.or(fallback.anon_key),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.api_base_url.is_some() && self.anon_key.is_some()
    }

    pub fn resolve(self) -> ResolvedConfig {
        let api_base_url = self
            .api_base_url
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        ResolvedConfig {
            api_base_url,
            anon_key: self.anon_key.unwrap_or_default(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RuntimeConfig;

    fn read_key(obj: &js_sys::Object, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| {
            js_sys::Reflect::get(obj, &(*key).into())
                .ok()
                .filter(|v| !v.is_undefined() && !v.is_null())
                .and_then(|v| v.as_string())
        })
    }

    fn read_global(name: &str) -> Option<RuntimeConfig> {
        let w = web_sys::window()?;
        let any = js_sys::Reflect::get(&w, &name.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let obj = js_sys::Object::from(any);
        Some(RuntimeConfig {
            api_base_url: read_key(&obj, &["API_BASE_URL", "api_base_url"]),
            anon_key: read_key(&obj, &["ANON_KEY", "anon_key"]),
        })
    }

    // Optional globals: window.__MEMBERDESK_ENV (env.js) wins over window.__MEMBERDESK_CONFIG.
    pub fn snapshot_from_globals() -> RuntimeConfig {
        let env = read_global("__MEMBERDESK_ENV").unwrap_or_default();
        let cfg = read_global("__MEMBERDESK_CONFIG").unwrap_or_default();
        env.or(cfg)
    }

    pub async fn fetch_runtime_config() -> Option<RuntimeConfig> {
        let origin = web_sys::window()?.location().origin().ok()?;
        let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
        if !resp.status().is_success() {
            return None;
        }
        resp.json::<RuntimeConfig>().await.ok()
    }
}

async fn load() -> RuntimeConfig {
    #[cfg(target_arch = "wasm32")]
    {
        let globals = browser::snapshot_from_globals();
        if globals.is_complete() {
            return globals;
        }
        match browser::fetch_runtime_config().await {
            Some(file) => globals.or(file),
            None => {
                log::warn!("config.json unavailable, using defaults for missing settings");
                globals
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        RuntimeConfig::default()
    }
}

pub async fn resolved() -> ResolvedConfig {
    if let Some(cached) = RESOLVED.get() {
        return cached.clone();
    }
    let resolved = load().await.resolve();
    RESOLVED.get_or_init(|| resolved).clone()
}

pub async fn init() {
    let cfg = resolved().await;
    log::info!("runtime config resolved api_base_url={}", cfg.api_base_url);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_applies_defaults() {
        let resolved = RuntimeConfig::default().resolve();
        assert_eq!(resolved.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(resolved.anon_key, "");
    }

    #[test]
    fn resolve_trims_trailing_slash() {
        let resolved = RuntimeConfig {
            api_base_url: Some("https://db.example.org/rest/v1/".into()),
            anon_key: Some("anon".into()),
        }
        .resolve();
        assert_eq!(resolved.api_base_url, "https://db.example.org/rest/v1");
        assert_eq!(resolved.anon_key, "anon");
    }

    #[test]
    fn or_prefers_self_and_fills_gaps() {
        let env = RuntimeConfig {
            api_base_url: Some("https://env".into()),
            anon_key: None,
        };
        let file = RuntimeConfig {
            api_base_url: Some("https://file".into()),
            anon_key: Some("file-key".into()),
        };
        let merged = env.or(file);
        assert_eq!(merged.api_base_url.as_deref(), Some("https://env"));
        assert_eq!(merged.anon_key.as_deref(), Some("file-key"));
        assert!(merged.is_complete());
    }

    #[test]
    fn runtime_config_parses_config_json() {
        let cfg: RuntimeConfig =
            serde_json::from_str(r#"{"api_base_url":"https://db","anon_key":"k"}"#).unwrap();
        assert!(cfg.is_complete());
    }
}
