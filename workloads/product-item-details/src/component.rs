//! The product item details component.
//!
//! Lifecycle:
//! 1. [`ProductItemDetails::new`] with the route match: status `Initial`.
//! 2. [`ProductItemDetails::begin_fetch`]: status `InProgress`, synchronously,
//!    returning a [`PendingFetch`] that owns everything the request needs.
//! 3. [`PendingFetch::run`] awaits the API without borrowing the component.
//! 4. [`ProductItemDetails::complete`] applies the result, unless the fetch was
//!    cancelled or superseded in the meantime.
//!
//! [`ProductItemDetails::mount`] runs steps 2-4 in one call. Dropping the
//! component cancels any fetch still in flight.

use std::time::Instant;

use trendz_auth::CredentialProvider;
use trendz_catalog::ProductId;
use trendz_core::{product_details_path, ComponentConfig, RequestId, RouteMatch};
use trendz_data::FetchClient;
use trendz_observability::{
    DependencyMetrics, LogFormat, LogLevel, MetricsCollector, StructuredLogger,
};

use crate::fetch::{details_from_response, request_product, settle};
use crate::lifecycle::CancellationToken;
use crate::page::render_page;
use crate::query::{StepAction, StepperQuery};
use crate::sections::{
    render_error_view, render_failure_view, render_loading_view, render_product_details_view,
    ErrorViewLinks, SimilarItemRenderer, SimilarProductItem, PRODUCT_NOT_FOUND_HEADING,
};
use crate::state::{ApiStatus, ErrorKind, ViewState};

/// Route parameter holding the product id.
pub const PRODUCT_ID_PARAM: &str = "id";

/// Metrics tag of the product details fetch.
pub const PRODUCT_DEPENDENCY: &str = "product-details";

/// Product item details component.
pub struct ProductItemDetails {
    product_id: Option<ProductId>,
    route_path: String,
    config: ComponentConfig,
    state: ViewState,
    fetch_token: Option<CancellationToken>,
    logger: StructuredLogger,
    metrics: MetricsCollector,
    similar_item: Box<dyn SimilarItemRenderer>,
}

impl ProductItemDetails {
    /// Component name used in logs.
    pub const NAME: &'static str = "product-item-details";

    /// Create the component for a matched route.
    ///
    /// A missing or empty `id` parameter is not an error here; the fetch
    /// settles to the not-found view without a request.
    pub fn new(route: &RouteMatch, config: ComponentConfig) -> Self {
        let product_id = route
            .param(PRODUCT_ID_PARAM)
            .filter(|id| !id.is_empty())
            .map(ProductId::from);

        let logger = StructuredLogger::new(RequestId::generate())
            .with_component(Self::NAME)
            .with_route(route.path.clone())
            .with_min_level(config.log_level.parse().unwrap_or(LogLevel::Info))
            .with_format(config.log_format.parse().unwrap_or(LogFormat::Json));

        let metrics = Self::metrics_for(&logger, &route.path);

        Self {
            product_id,
            route_path: route.path.clone(),
            config,
            state: ViewState::new(),
            fetch_token: None,
            logger,
            metrics,
            similar_item: Box::new(SimilarProductItem),
        }
    }

    fn metrics_for(logger: &StructuredLogger, route_path: &str) -> MetricsCollector {
        let mut metrics = MetricsCollector::new(logger.request_id().clone());
        metrics.set_component(Self::NAME);
        metrics.set_route(route_path);
        metrics
    }

    /// Replace the logger. Metrics follow the new logger's request id.
    pub fn with_logger(mut self, logger: StructuredLogger) -> Self {
        self.metrics = Self::metrics_for(&logger, &self.route_path);
        self.logger = logger;
        self
    }

    /// Replace the similar product list item renderer.
    pub fn with_similar_item_renderer(
        mut self,
        renderer: impl SimilarItemRenderer + 'static,
    ) -> Self {
        self.similar_item = Box::new(renderer);
        self
    }

    /// The product this component shows.
    pub fn product_id(&self) -> Option<&ProductId> {
        self.product_id.as_ref()
    }

    /// Current view state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// The component's logger.
    pub fn logger(&self) -> &StructuredLogger {
        &self.logger
    }

    /// Metrics collected for this request.
    pub fn metrics(&self) -> &MetricsCollector {
        &self.metrics
    }

    /// Whether a fetch has been started and not yet applied.
    pub fn is_fetching(&self) -> bool {
        self.fetch_token.is_some()
    }

    /// Mount: start the fetch and apply its result.
    pub async fn mount(&mut self, client: &FetchClient, credentials: &dyn CredentialProvider) {
        let pending = self.begin_fetch();
        let completion = pending.run(client, credentials).await;
        self.complete(completion);
    }

    /// Move to `InProgress` and hand out the fetch to run.
    ///
    /// A fetch started earlier is cancelled; its completion will be discarded.
    pub fn begin_fetch(&mut self) -> PendingFetch {
        if let Some(previous) = self.fetch_token.take() {
            previous.cancel();
            self.logger.debug("superseding in-flight fetch");
        }

        let token = CancellationToken::new();
        self.fetch_token = Some(token.clone());
        self.state.status = ApiStatus::InProgress;

        self.logger
            .debug_builder("fetch started")
            .field(
                "product_id",
                self.product_id
                    .as_ref()
                    .map(|id| id.to_string())
                    .unwrap_or_default(),
            )
            .emit();

        PendingFetch {
            product_id: self.product_id.clone(),
            url: self
                .product_id
                .as_ref()
                .map(|id| self.config.product_url(id.as_str())),
            token,
            logger: self.logger.clone(),
        }
    }

    /// Apply a finished fetch. Returns whether the state changed.
    pub fn complete(&mut self, completion: FetchCompletion) -> bool {
        let (token, status, dependency) = match completion {
            FetchCompletion::Settled {
                token,
                status,
                dependency,
            } => (token, status, dependency),
            FetchCompletion::Cancelled => return false,
        };

        if let Some(dependency) = dependency {
            self.metrics.record_dependency(dependency);
        }

        let current = self
            .fetch_token
            .as_ref()
            .is_some_and(|t| t.same_as(&token));
        if token.is_cancelled() || !current {
            self.logger.warn("discarding stale fetch completion");
            return false;
        }

        self.fetch_token = None;
        self.logger
            .info_builder("status changed")
            .field("from", self.state.status.name())
            .field("to", status.name())
            .emit();
        self.metrics.record_settled(status.name());
        self.state.status = status;
        true
    }

    /// Tear the component down, cancelling any fetch in flight.
    pub fn unmount(self) {
        self.logger.debug("unmounting");
    }

    /// Raise the quantity by one.
    pub fn increment_quantity(&mut self) {
        self.state.quantity = self.state.quantity.incremented();
        self.log_quantity();
    }

    /// Lower the quantity by one, stopping at one.
    pub fn decrement_quantity(&mut self) {
        self.state.quantity = self.state.quantity.decremented();
        self.log_quantity();
    }

    /// Replay a stepper submission: restore the submitted quantity, then
    /// apply the pressed button.
    pub fn apply_stepper_query(&mut self, query: &StepperQuery) {
        if let Some(quantity) = query.quantity() {
            self.state.quantity = quantity;
        }
        match query.step {
            Some(StepAction::Increment) => self.increment_quantity(),
            Some(StepAction::Decrement) => self.decrement_quantity(),
            None => {}
        }
    }

    fn log_quantity(&self) {
        self.logger
            .debug_builder("quantity changed")
            .field_i64("quantity", i64::from(self.state.quantity.get()))
            .emit();
    }

    /// Render the component body for the current state.
    pub fn render(&self) -> String {
        match &self.state.status {
            ApiStatus::Initial | ApiStatus::InProgress => render_loading_view(),
            ApiStatus::Success(details) => render_product_details_view(
                details,
                self.state.quantity,
                self.similar_item.as_ref(),
            ),
            ApiStatus::Failure => render_failure_view(&self.config.listing_route),
            ApiStatus::Error(kind) => render_error_view(
                kind,
                ErrorViewLinks {
                    retry: &self.retry_path(),
                    login: &self.config.login_route,
                },
            ),
        }
    }

    /// Render the full page: shell, header and component body.
    pub fn render_page(&self) -> String {
        let title = match &self.state.status {
            ApiStatus::Success(details) => details.product.title.as_str(),
            ApiStatus::Failure => PRODUCT_NOT_FOUND_HEADING,
            ApiStatus::Initial | ApiStatus::InProgress | ApiStatus::Error(_) => "Product",
        };
        render_page(title, &self.render())
    }

    /// HTTP status for serving the rendered page.
    pub fn http_status(&self) -> u16 {
        match &self.state.status {
            ApiStatus::Initial | ApiStatus::InProgress | ApiStatus::Success(_) => 200,
            ApiStatus::Failure => 404,
            ApiStatus::Error(ErrorKind::Unauthorized) => 401,
            ApiStatus::Error(
                ErrorKind::Upstream { .. } | ErrorKind::Transport(_) | ErrorKind::Decode(_),
            ) => 502,
        }
    }

    fn retry_path(&self) -> String {
        match &self.product_id {
            Some(id) => product_details_path(id.as_str()),
            None if !self.route_path.is_empty() => self.route_path.clone(),
            None => self.config.listing_route.clone(),
        }
    }
}

impl Drop for ProductItemDetails {
    fn drop(&mut self) {
        if let Some(token) = self.fetch_token.take() {
            token.cancel();
        }
    }
}

impl std::fmt::Debug for ProductItemDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductItemDetails")
            .field("product_id", &self.product_id)
            .field("status", &self.state.status.name())
            .field("quantity", &self.state.quantity)
            .finish_non_exhaustive()
    }
}

/// A started fetch, detached from the component so it can be awaited while
/// the component keeps handling events.
#[derive(Debug)]
pub struct PendingFetch {
    product_id: Option<ProductId>,
    url: Option<String>,
    token: CancellationToken,
    logger: StructuredLogger,
}

/// Result of running a [`PendingFetch`].
#[derive(Debug)]
pub enum FetchCompletion {
    /// The fetch finished; apply `status` if `token` is still current.
    Settled {
        token: CancellationToken,
        status: ApiStatus,
        /// Timing of the upstream call, when one was made.
        dependency: Option<DependencyMetrics>,
    },
    /// The fetch was cancelled before it could finish.
    Cancelled,
}

impl PendingFetch {
    /// The token that cancels this fetch.
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Run the request. The token is checked before sending and again after
    /// the response arrives.
    pub async fn run(
        self,
        client: &FetchClient,
        credentials: &dyn CredentialProvider,
    ) -> FetchCompletion {
        if self.token.is_cancelled() {
            self.logger.debug("fetch cancelled before request");
            return FetchCompletion::Cancelled;
        }

        let (Some(product_id), Some(url)) = (self.product_id, self.url) else {
            self.logger.warn("route has no product id");
            return FetchCompletion::Settled {
                token: self.token,
                status: ApiStatus::Failure,
                dependency: None,
            };
        };

        let started = Instant::now();
        let response = request_product(client, credentials, &url).await;
        let elapsed = started.elapsed();
        let response_status = response.as_ref().ok().map(|r| r.status);
        let result = response.and_then(|r| details_from_response(&r));

        if self.token.is_cancelled() {
            self.logger
                .info_builder("fetch finished after cancellation, result dropped")
                .field("product_id", product_id.to_string())
                .emit();
            return FetchCompletion::Cancelled;
        }

        match &result {
            Ok(details) => self
                .logger
                .info_builder("product loaded")
                .field("product_id", product_id.to_string())
                .field_i64("similar_products", details.similar_products.len() as i64)
                .duration_ms("latency_ms", elapsed)
                .emit(),
            Err(e) => self
                .logger
                .warn_builder("product load failed")
                .field("product_id", product_id.to_string())
                .field("error", e.to_string())
                .duration_ms("latency_ms", elapsed)
                .emit(),
        }

        let dependency = DependencyMetrics::new(PRODUCT_DEPENDENCY, &url, elapsed)
            .with_status(response_status);
        let dependency = match &result {
            Ok(_) => dependency.succeeded(),
            Err(e) => dependency.failed(e.to_string()),
        };

        FetchCompletion::Settled {
            token: self.token,
            status: settle(result),
            dependency: Some(dependency),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use futures::executor::block_on;
    use trendz_auth::{BearerToken, StaticCredentials};
    use trendz_data::{FetchError, HttpTransport, ReplayTransport, Request, Response};

    fn route(id: &str) -> RouteMatch {
        let mut params = HashMap::new();
        params.insert(PRODUCT_ID_PARAM.to_string(), id.to_string());
        RouteMatch::new(product_details_path(id), params)
    }

    fn component(id: &str) -> ProductItemDetails {
        let logger = StructuredLogger::new(RequestId::from_string("test"))
            .with_min_level(LogLevel::Debug)
            .with_capture();
        ProductItemDetails::new(&route(id), ComponentConfig::default()).with_logger(logger)
    }

    fn creds() -> StaticCredentials {
        StaticCredentials::new(BearerToken::new("tok").unwrap())
    }

    // === Quantity Tests ===

    #[test]
    fn test_decrement_never_below_one() {
        let mut c = component("1");
        for _ in 0..5 {
            c.decrement_quantity();
        }
        assert_eq!(c.state().quantity.get(), 1);
    }

    #[test]
    fn test_increment_five_times() {
        let mut c = component("1");
        for _ in 0..5 {
            c.increment_quantity();
        }
        assert_eq!(c.state().quantity.get(), 6);
    }

    #[test]
    fn test_interleaved_steps() {
        let mut c = component("1");
        c.increment_quantity();
        c.increment_quantity();
        c.decrement_quantity();
        c.increment_quantity();
        assert_eq!(c.state().quantity.get(), 3);

        let mut c = component("1");
        c.increment_quantity();
        c.decrement_quantity();
        c.decrement_quantity();
        c.increment_quantity();
        assert_eq!(c.state().quantity.get(), 2);
    }

    #[test]
    fn test_quantity_changes_logged() {
        let mut c = component("1");
        c.increment_quantity();
        let entries = c.logger().captured();
        let last = entries.last().unwrap();
        assert_eq!(last.message, "quantity changed");
        assert_eq!(last.field("quantity"), Some(&serde_json::json!(2)));
    }

    #[test]
    fn test_stepper_query_restores_then_steps() {
        let mut c = component("1");
        c.apply_stepper_query(&StepperQuery::parse("quantity=4&step=increment"));
        assert_eq!(c.state().quantity.get(), 5);

        c.apply_stepper_query(&StepperQuery::parse("quantity=1&step=decrement"));
        assert_eq!(c.state().quantity.get(), 1);

        c.apply_stepper_query(&StepperQuery::parse("quantity=7"));
        assert_eq!(c.state().quantity.get(), 7);
    }

    #[test]
    fn test_empty_stepper_query_keeps_quantity() {
        let mut c = component("1");
        c.increment_quantity();
        c.apply_stepper_query(&StepperQuery::parse("ref=home"));
        assert_eq!(c.state().quantity.get(), 2);
    }

    // === Metrics Tests ===

    #[test]
    fn test_metrics_record_fetch_and_settled_state() {
        let transport = ReplayTransport::new().with_json(
            "https://apis.ccbp.in/products/1",
            404,
            serde_json::Value::Null,
        );
        let client = FetchClient::new(transport);
        let mut c = component("1");

        block_on(c.mount(&client, &creds()));

        assert_eq!(c.metrics().settled_state(), Some("FAILURE"));
        let deps: Vec<_> = c.metrics().dependencies().collect();
        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].tag, PRODUCT_DEPENDENCY);
        assert_eq!(deps[0].url, "https://apis.ccbp.in/products/1");
        assert_eq!(deps[0].status_code, Some(404));
        assert!(!deps[0].success);

        let snapshot = c.metrics().finalize(Some(c.http_status()));
        assert_eq!(snapshot.request_id, "test");
        assert_eq!(snapshot.component.as_deref(), Some(ProductItemDetails::NAME));
        assert_eq!(snapshot.status_code, Some(404));
    }

    #[test]
    fn test_metrics_without_response_have_no_status() {
        let client = FetchClient::new(ReplayTransport::new());
        let mut c = component("1");

        block_on(c.mount(&client, &creds()));

        let deps: Vec<_> = c.metrics().dependencies().collect();
        assert_eq!(deps[0].status_code, None);
        assert!(deps[0].error.is_some());
        assert_eq!(c.metrics().settled_state(), Some("ERROR"));
    }

    #[test]
    fn test_missing_id_records_no_dependency() {
        let client = FetchClient::new(ReplayTransport::new());
        let mut c = ProductItemDetails::new(&RouteMatch::default(), ComponentConfig::default());

        block_on(c.mount(&client, &creds()));

        assert_eq!(c.metrics().dependencies().count(), 0);
        assert_eq!(c.metrics().settled_state(), Some("FAILURE"));
    }

    // === Lifecycle Tests ===

    #[test]
    fn test_begin_fetch_sets_in_progress() {
        let mut c = component("1");
        assert_eq!(c.state().status, ApiStatus::Initial);
        let _pending = c.begin_fetch();
        assert_eq!(c.state().status, ApiStatus::InProgress);
        assert!(c.is_fetching());
    }

    #[test]
    fn test_superseded_fetch_is_discarded() {
        let client = FetchClient::new(ReplayTransport::new());
        let mut c = component("1");
        let first = c.begin_fetch();
        let second = c.begin_fetch();
        assert!(first.token().is_cancelled());

        let stale = block_on(first.run(&client, &creds()));
        assert!(!c.complete(stale));
        assert_eq!(c.state().status, ApiStatus::InProgress);

        let fresh = block_on(second.run(&client, &creds()));
        assert!(c.complete(fresh));
        assert!(c.state().status.is_settled());
    }

    /// Cancels the fetch while the request is in flight.
    struct CancelDuringSend(CancellationToken);

    #[async_trait::async_trait(?Send)]
    impl HttpTransport for CancelDuringSend {
        async fn send(&self, _request: Request) -> Result<Response, FetchError> {
            self.0.cancel();
            Ok(Response::json_body(404, &serde_json::Value::Null))
        }
    }

    #[test]
    fn test_cancelled_during_request_is_dropped() {
        let mut c = component("1");
        let pending = c.begin_fetch();
        let client = FetchClient::new(CancelDuringSend(pending.token().clone()));

        let completion = block_on(pending.run(&client, &creds()));
        assert!(matches!(completion, FetchCompletion::Cancelled));
        assert!(!c.complete(completion));
        assert_eq!(c.state().status, ApiStatus::InProgress);
    }

    #[test]
    fn test_cancelled_before_request_sends_nothing() {
        let transport = std::rc::Rc::new(ReplayTransport::new());
        let client = FetchClient::from_shared(transport.clone());
        let mut c = component("1");
        let pending = c.begin_fetch();
        pending.token().cancel();

        let completion = block_on(pending.run(&client, &creds()));
        assert!(matches!(completion, FetchCompletion::Cancelled));
        assert!(transport.sent().is_empty());
    }

    #[test]
    fn test_drop_cancels_in_flight_fetch() {
        let mut c = component("1");
        let pending = c.begin_fetch();
        let token = pending.token().clone();
        c.unmount();
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_missing_id_settles_to_failure_without_request() {
        let transport = std::rc::Rc::new(ReplayTransport::new());
        let client = FetchClient::from_shared(transport.clone());
        let mut c = ProductItemDetails::new(&RouteMatch::default(), ComponentConfig::default())
            .with_logger(StructuredLogger::new(RequestId::from_string("t")).with_capture());

        block_on(c.mount(&client, &creds()));
        assert_eq!(c.state().status, ApiStatus::Failure);
        assert!(transport.sent().is_empty());
    }

    // === Status Mapping Tests ===

    #[test]
    fn test_http_status_per_state() {
        let mut c = component("1");
        assert_eq!(c.http_status(), 200);
        c.state.status = ApiStatus::Failure;
        assert_eq!(c.http_status(), 404);
        c.state.status = ApiStatus::Error(ErrorKind::Unauthorized);
        assert_eq!(c.http_status(), 401);
        c.state.status = ApiStatus::Error(ErrorKind::Transport("x".into()));
        assert_eq!(c.http_status(), 502);
    }

    #[test]
    fn test_error_view_retry_link() {
        let mut c = component("42");
        c.state.status = ApiStatus::Error(ErrorKind::Upstream { status: 500 });
        assert!(c.render().contains(r#"<a href="/products/42">"#));
    }
}
