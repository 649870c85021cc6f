use shared::config::{
    ENV_CURRENCY, ENV_ESSENTIALS_KEY, ENV_EXPENSES_KEY, ENV_TIPS_API_KEY, ENV_TIPS_ENDPOINT, ENV_TIPS_MAX_TOKENS,
    ENV_TIPS_MODEL,
};
use shared::AppConfig;

/// Configuration baked in at build time from `FAMILY_BUDGET_*` variables.
/// Nothing here is read from source, so no credential is committed.
pub fn load_app_config() -> AppConfig {
    AppConfig::from_lookup(build_env)
}

fn build_env(name: &str) -> Option<String> {
    let value = match name {
        ENV_EXPENSES_KEY => option_env!("FAMILY_BUDGET_EXPENSES_KEY"),
        ENV_ESSENTIALS_KEY => option_env!("FAMILY_BUDGET_ESSENTIALS_KEY"),
        ENV_CURRENCY => option_env!("FAMILY_BUDGET_CURRENCY"),
        ENV_TIPS_ENDPOINT => option_env!("FAMILY_BUDGET_TIPS_ENDPOINT"),
        ENV_TIPS_MODEL => option_env!("FAMILY_BUDGET_TIPS_MODEL"),
        ENV_TIPS_MAX_TOKENS => option_env!("FAMILY_BUDGET_TIPS_MAX_TOKENS"),
        ENV_TIPS_API_KEY => option_env!("FAMILY_BUDGET_TIPS_API_KEY"),
        _ => None,
    };
    value.map(str::to_string)
}
