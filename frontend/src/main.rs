use fantasy_shared::LoginConfig;
use log::Level;
use yew::prelude::*;

mod components;
mod navigation;
mod pages;
#[cfg(test)]
mod test_support;

const DEFAULT_LOG_LEVEL: Level = Level::Debug;

/// Falls back to the defaults when the build-time overrides are invalid.
fn resolve_login_config(url: Option<&str>, label: Option<&str>) -> LoginConfig {
    LoginConfig::from_overrides(url, label).unwrap_or_else(|err| {
        log::error!("Invalid login configuration, using defaults: {err}");
        LoginConfig::default()
    })
}

fn login_config() -> LoginConfig {
    resolve_login_config(option_env!("LOGIN_URL"), option_env!("LOGIN_LABEL"))
}

/// Parses a level name; `Err` carries the rejected value.
fn parse_log_level(raw: Option<&str>) -> Result<Level, &str> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(DEFAULT_LOG_LEVEL),
        Some(v) => v.parse().map_err(|_| v),
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = use_state(login_config);

    html! { <pages::login::Login config={(*config).clone()} /> }
}

fn main() {
    let level = parse_log_level(option_env!("FRONTEND_LOG"));
    wasm_logger::init(wasm_logger::Config::new(level.unwrap_or(DEFAULT_LOG_LEVEL)));
    if let Err(raw) = level {
        log::warn!("Unknown FRONTEND_LOG level {raw:?}, using {DEFAULT_LOG_LEVEL}");
    }

    yew::Renderer::<App>::new().render();
}
