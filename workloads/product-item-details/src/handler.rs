//! Spin HTTP entry point: server-side render of the details page.

use spin_sdk::http::{IntoResponse, Request, Response};
use spin_sdk::http_component;

use trendz_auth::{CookieCredentials, CookieJar};
use trendz_core::{ComponentConfig, RouteMatch, RoutePattern, PRODUCT_DETAILS_ROUTE};
use trendz_data::{FetchClient, SpinTransport};

use crate::{ProductItemDetails, StepperQuery};

/// Build the config: the file named by the `config_file` variable if set,
/// then overrides from the other Spin variables. A config file that fails
/// to load is returned alongside the defaults so it can be logged.
fn load_config() -> (ComponentConfig, Option<anyhow::Error>) {
    let (mut config, load_error) = match spin_sdk::variables::get("config_file") {
        Ok(path) => match ComponentConfig::load(&path) {
            Ok(config) => (config, None),
            Err(e) => (ComponentConfig::default(), Some(e)),
        },
        Err(_) => (ComponentConfig::default(), None),
    };

    if let Ok(url) = spin_sdk::variables::get("api_base_url") {
        config = config.with_api_base_url(url);
    }
    if let Ok(cookie) = spin_sdk::variables::get("token_cookie") {
        config = config.with_token_cookie(cookie);
    }
    if let Ok(level) = spin_sdk::variables::get("log_level") {
        config.log_level = level;
    }
    if let Ok(format) = spin_sdk::variables::get("log_format") {
        config.log_format = format;
    }
    (config, load_error)
}

#[http_component]
async fn handle(req: Request) -> anyhow::Result<impl IntoResponse> {
    let (config, config_error) = load_config();

    let path = req.path().split('?').next().unwrap_or_default().to_string();
    let pattern = RoutePattern::new(PRODUCT_DETAILS_ROUTE);
    let route = pattern
        .matches(&path)
        .unwrap_or_else(|| RouteMatch::new(path.clone(), Default::default()));
    let stepper = StepperQuery::parse(req.query());

    let jar = req
        .header("cookie")
        .and_then(|v| v.as_str())
        .map(CookieJar::parse)
        .unwrap_or_default();
    let credentials = CookieCredentials::with_cookie_name(jar, config.token_cookie.clone());

    let client = FetchClient::new(SpinTransport);
    let mut component = ProductItemDetails::new(&route, config);

    if let Some(e) = config_error {
        component
            .logger()
            .warn_builder("config file not loaded, using defaults")
            .field("error", format!("{:#}", e))
            .emit();
    }
    component
        .logger()
        .info_builder("request started")
        .field("path", path.clone())
        .field("route", pattern.as_str())
        .emit();

    component.mount(&client, &credentials).await;
    component.apply_stepper_query(&stepper);

    let status = component.http_status();
    let body = component.render_page();
    let request_id = component.logger().request_id().to_string();
    let metrics = component.metrics().finalize(Some(status));

    let finished = if status >= 500 {
        component.logger().error_builder("request finished")
    } else {
        component.logger().info_builder("request finished")
    };
    finished
        .field_i64("status", i64::from(status))
        .field("state", component.state().status.name())
        .field("metrics", metrics.to_json())
        .emit();

    Ok(Response::builder()
        .status(status)
        .header("content-type", "text/html; charset=utf-8")
        .header("x-request-id", request_id)
        .body(body)
        .build())
}
