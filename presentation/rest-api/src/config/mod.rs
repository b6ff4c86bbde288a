pub mod app_config;
pub mod cors_config;
pub mod database_config;
pub mod server_config;

/// Reads a boolean switch. Unset keeps `default`; `0`, `false`, `no` and
/// `off` (any case) turn it off; any other value turns it on.
fn parse_flag(raw: Option<&str>, default: bool) -> bool {
    match raw.map(|value| value.trim().to_ascii_lowercase()) {
        None => default,
        Some(value) => !matches!(value.as_str(), "0" | "false" | "no" | "off"),
    }
}

fn env_flag(key: &str, default: bool) -> bool {
    parse_flag(std::env::var(key).ok().as_deref(), default)
}
