//! Application configuration.
//!
//! Values come from a lookup function so the browser build can feed in
//! build-time environment variables while tests pass plain maps. Blank
//! values count as unset.

use std::fmt;
use tracing::warn;

use crate::error::TipsError;

pub const DEFAULT_EXPENSES_KEY: &str = "cw_expenses_v1";
pub const DEFAULT_ESSENTIALS_KEY: &str = "cw_essentials_v2";
pub const DEFAULT_CURRENCY: &str = "AFN";
pub const DEFAULT_TIPS_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_TIPS_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TIPS_MAX_TOKENS: u32 = 200;

pub const ENV_EXPENSES_KEY: &str = "FAMILY_BUDGET_EXPENSES_KEY";
pub const ENV_ESSENTIALS_KEY: &str = "FAMILY_BUDGET_ESSENTIALS_KEY";
pub const ENV_CURRENCY: &str = "FAMILY_BUDGET_CURRENCY";
pub const ENV_TIPS_ENDPOINT: &str = "FAMILY_BUDGET_TIPS_ENDPOINT";
pub const ENV_TIPS_MODEL: &str = "FAMILY_BUDGET_TIPS_MODEL";
pub const ENV_TIPS_MAX_TOKENS: &str = "FAMILY_BUDGET_TIPS_MAX_TOKENS";
pub const ENV_TIPS_API_KEY: &str = "FAMILY_BUDGET_TIPS_API_KEY";

/// Settings for the savings-tips endpoint.
///
/// An absolute `endpoint` is called directly and needs `api_key`. A relative
/// endpoint such as `/api/tips` is a same-origin proxy that holds the
/// provider credential itself, so the browser never sees it.
#[derive(Clone, PartialEq, Eq)]
pub struct TipsConfig {
    pub endpoint: String,
    pub model: String,
    pub max_tokens: u32,
    pub api_key: Option<String>,
}

impl Default for TipsConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_TIPS_ENDPOINT.to_string(),
            model: DEFAULT_TIPS_MODEL.to_string(),
            max_tokens: DEFAULT_TIPS_MAX_TOKENS,
            api_key: None,
        }
    }
}

impl TipsConfig {
    pub fn uses_proxy(&self) -> bool {
        !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://"))
    }

    /// Bearer token to send, if any. Fails when a direct endpoint has no key.
    pub fn bearer_token(&self) -> Result<Option<&str>, TipsError> {
        match (&self.api_key, self.uses_proxy()) {
            (Some(key), _) => Ok(Some(key.as_str())),
            (None, true) => Ok(None),
            (None, false) => Err(TipsError::MissingCredential),
        }
    }
}

impl fmt::Debug for TipsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TipsConfig")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Storage key of the expense ledger
    pub expenses_key: String,
    /// Storage key of the essentials checklist
    pub essentials_key: String,
    /// Shown after every amount
    pub currency_label: String,
    pub tips: TipsConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            expenses_key: DEFAULT_EXPENSES_KEY.to_string(),
            essentials_key: DEFAULT_ESSENTIALS_KEY.to_string(),
            currency_label: DEFAULT_CURRENCY.to_string(),
            tips: TipsConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let max_tokens = match get(ENV_TIPS_MAX_TOKENS) {
            Some(raw) => match raw.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    warn!(value = %raw, "ignoring invalid {}", ENV_TIPS_MAX_TOKENS);
                    defaults.tips.max_tokens
                }
            },
            None => defaults.tips.max_tokens,
        };

        Self {
            expenses_key: get(ENV_EXPENSES_KEY).unwrap_or(defaults.expenses_key),
            essentials_key: get(ENV_ESSENTIALS_KEY).unwrap_or(defaults.essentials_key),
            currency_label: get(ENV_CURRENCY).unwrap_or(defaults.currency_label),
            tips: TipsConfig {
                endpoint: get(ENV_TIPS_ENDPOINT).unwrap_or(defaults.tips.endpoint),
                model: get(ENV_TIPS_MODEL).unwrap_or(defaults.tips.model),
                max_tokens,
                api_key: get(ENV_TIPS_API_KEY),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        AppConfig::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        assert_eq!(config_from(&[]), AppConfig::default());
    }

    #[test]
    fn test_overrides_and_blank_values() {
        let config = config_from(&[
            (ENV_CURRENCY, "USD"),
            (ENV_EXPENSES_KEY, "  "),
            (ENV_TIPS_ENDPOINT, "/api/tips"),
            (ENV_TIPS_MAX_TOKENS, "350"),
        ]);
        assert_eq!(config.currency_label, "USD");
        assert_eq!(config.expenses_key, DEFAULT_EXPENSES_KEY);
        assert_eq!(config.tips.endpoint, "/api/tips");
        assert_eq!(config.tips.max_tokens, 350);
    }

    #[test]
    fn test_invalid_max_tokens_falls_back() {
        assert_eq!(config_from(&[(ENV_TIPS_MAX_TOKENS, "lots")]).tips.max_tokens, DEFAULT_TIPS_MAX_TOKENS);
        assert_eq!(config_from(&[(ENV_TIPS_MAX_TOKENS, "0")]).tips.max_tokens, DEFAULT_TIPS_MAX_TOKENS);
    }

    #[test]
    fn test_bearer_token_rules() {
        let direct = TipsConfig::default();
        assert_eq!(direct.bearer_token(), Err(TipsError::MissingCredential));

        let keyed = TipsConfig { api_key: Some("sk-test".into()), ..TipsConfig::default() };
        assert_eq!(keyed.bearer_token(), Ok(Some("sk-test")));

        let proxy = TipsConfig { endpoint: "/api/tips".into(), ..TipsConfig::default() };
        assert!(proxy.uses_proxy());
        assert_eq!(proxy.bearer_token(), Ok(None));
    }

    #[test]
    fn test_debug_redacts_key() {
        let keyed = TipsConfig { api_key: Some("sk-secret".into()), ..TipsConfig::default() };
        let printed = format!("{:?}", keyed);
        assert!(!printed.contains("sk-secret"));
        assert!(printed.contains("<redacted>"));
    }
}
