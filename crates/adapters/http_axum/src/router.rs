//! Axum router assembly.

use axum::Router;
use axum::middleware;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use procgate_app::ports::ProcedureStore;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// `/ping` sits outside the bearer guard so liveness probes need no
/// credentials; every resource route sits behind it. Includes a
/// [`TraceLayer`] that logs each HTTP request/response at the `DEBUG`
/// level using the `tracing` ecosystem.
pub fn build<S>(state: AppState<S>) -> Router
where
    S: ProcedureStore + Send + Sync + 'static,
{
    let guarded = crate::api::routes::<S>().route_layer(middleware::from_fn_with_state(
        state.clone(),
        crate::auth::require_bearer::<S>,
    ));

    Router::new()
        .route("/ping", get(ping))
        .merge(guarded)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn ping() -> &'static str {
    "pong"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::BearerAuth;
    use axum::body::{Body, to_bytes};
    use axum::http::{Method, Request, StatusCode, header};
    use axum::response::Response;
    use procgate_app::dispatcher::Dispatcher;
    use procgate_app::registry::ResourceRegistry;
    use procgate_domain::error::DispatchError;
    use procgate_domain::procedure::ProcedureName;
    use procgate_domain::request::ProcedureParams;
    use procgate_domain::resource::Resource;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    /// Store stub answering every procedure with fixed values.
    #[derive(Default)]
    struct StubStore {
        scalar: Option<String>,
        rowcount: u64,
    }

    impl StubStore {
        fn with_scalar(value: impl Into<String>) -> Self {
            Self {
                scalar: Some(value.into()),
                rowcount: 0,
            }
        }

        fn with_rowcount(rowcount: u64) -> Self {
            Self {
                scalar: None,
                rowcount,
            }
        }
    }

    impl ProcedureStore for StubStore {
        async fn run_scalar(
            &self,
            _procedure: &ProcedureName,
            _params: &ProcedureParams,
        ) -> Result<Option<String>, DispatchError> {
            Ok(self.scalar.clone())
        }

        async fn run_rowcount(
            &self,
            _procedure: &ProcedureName,
            _params: &ProcedureParams,
        ) -> Result<u64, DispatchError> {
            Ok(self.rowcount)
        }
    }

    fn state_with(store: StubStore, auth: BearerAuth) -> AppState<StubStore> {
        let mut registry = ResourceRegistry::new();
        registry
            .register(Resource::new("customer", "customers", "CustomerID").unwrap())
            .unwrap();
        AppState::new(Dispatcher::new(store), registry, auth)
    }

    fn secured(store: StubStore) -> Router {
        build(state_with(store, BearerAuth::tokens(["secret"])))
    }

    fn authed(method: Method, uri: &str, body: Body) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::AUTHORIZATION, "Bearer secret")
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .unwrap()
    }

    async fn read_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn sample_row() -> Value {
        json!({
            "CustomerID": 4,
            "CustomerName": "Northwind Traders",
            "PhoneNumber": "(308) 555-0150",
            "FaxNumber": null,
            "WebsiteURL": "http://www.northwind.com",
            "Delivery": {
                "AddressLine1": "Shop 12",
                "AddressLine2": "Main Street",
                "PostalCode": "90210"
            }
        })
    }

    // -------------------------------------------------------------
    // ping and auth
    // -------------------------------------------------------------

    #[tokio::test]
    async fn should_answer_ping_without_credentials() {
        let app = secured(StubStore::default());

        let response = app
            .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"pong");
    }

    #[tokio::test]
    async fn should_reject_request_without_token() {
        let app = secured(StubStore::with_scalar("[]"));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/customers")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn should_reject_request_with_wrong_token() {
        let app = secured(StubStore::with_scalar("[]"));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/customers")
                    .header(header::AUTHORIZATION, "Bearer nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn should_serve_resources_without_token_when_open() {
        let app = build(state_with(
            StubStore::with_scalar("[]"),
            BearerAuth::open(),
        ));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/customers")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    // -------------------------------------------------------------
    // reads
    // -------------------------------------------------------------

    #[tokio::test]
    async fn should_list_collection_as_json_array() {
        let rows = json!([sample_row()]);
        let app = secured(StubStore::with_scalar(rows.to_string()));

        let response = app
            .oneshot(authed(Method::GET, "/customers", Body::empty()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await, rows);
    }

    #[tokio::test]
    async fn should_list_empty_array_when_store_returns_nothing() {
        let app = secured(StubStore::default());

        let response = app
            .oneshot(authed(Method::GET, "/customers", Body::empty()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn should_read_single_item() {
        let app = secured(StubStore::with_scalar(sample_row().to_string()));

        let response = app
            .oneshot(authed(Method::GET, "/customer/4", Body::empty()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await, sample_row());
    }

    #[tokio::test]
    async fn should_return_not_found_when_item_absent() {
        let app = secured(StubStore::default());

        let response = app
            .oneshot(authed(Method::GET, "/customer/99", Body::empty()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_resource() {
        let app = secured(StubStore::default());

        let response = app
            .oneshot(authed(Method::GET, "/widgets", Body::empty()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_reject_non_integer_id_segment() {
        let app = secured(StubStore::with_scalar("{}"));

        let response = app
            .oneshot(authed(Method::GET, "/customer/not-a-number", Body::empty()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    // -------------------------------------------------------------
    // writes
    // -------------------------------------------------------------

    #[tokio::test]
    async fn should_create_item_and_point_at_it() {
        let app = secured(StubStore::with_scalar(sample_row().to_string()));
        let body = Body::from(json!({"CustomerName": "Northwind Traders"}).to_string());

        let response = app
            .oneshot(authed(Method::PUT, "/customer", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response
                .headers()
                .get(header::LOCATION)
                .and_then(|value| value.to_str().ok()),
            Some("/customer/4")
        );
        assert_eq!(read_json(response).await, sample_row());
    }

    #[tokio::test]
    async fn should_omit_location_when_row_has_no_integer_key() {
        let row = json!({"CustomerName": "Northwind Traders"});
        let app = secured(StubStore::with_scalar(row.to_string()));

        let response = app
            .oneshot(authed(
                Method::PUT,
                "/customer",
                Body::from(row.to_string()),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert!(response.headers().get(header::LOCATION).is_none());
    }

    #[tokio::test]
    async fn should_reject_create_when_store_declines() {
        let app = secured(StubStore::default());
        let body = Body::from(json!({"CustomerName": ""}).to_string());

        let response = app
            .oneshot(authed(Method::PUT, "/customer", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_reject_body_that_is_not_json() {
        let app = secured(StubStore::with_scalar(sample_row().to_string()));

        let response = app
            .oneshot(authed(
                Method::PUT,
                "/customer",
                Body::from("definitely not json"),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_update_item_with_no_content() {
        let app = secured(StubStore::with_rowcount(1));
        let body = Body::from(json!({"PhoneNumber": "(308) 555-0199"}).to_string());

        let response = app
            .oneshot(authed(Method::PATCH, "/customer/4", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn should_reject_update_that_touches_no_rows() {
        let app = secured(StubStore::with_rowcount(0));
        let body = Body::from(json!({"PhoneNumber": "(308) 555-0199"}).to_string());

        let response = app
            .oneshot(authed(Method::PATCH, "/customer/99", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_delete_item_with_no_content() {
        let app = secured(StubStore::with_rowcount(1));

        let response = app
            .oneshot(authed(Method::DELETE, "/customer/4", Body::empty()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn should_reject_delete_that_touches_no_rows() {
        let app = secured(StubStore::with_rowcount(0));

        let response = app
            .oneshot(authed(Method::DELETE, "/customer/99", Body::empty()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    // -------------------------------------------------------------
    // method discipline
    // -------------------------------------------------------------

    #[tokio::test]
    async fn should_refuse_post_before_touching_the_store() {
        let app = secured(StubStore::default());

        let response = app
            .oneshot(authed(Method::POST, "/customers", Body::empty()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn should_refuse_put_on_collection_slug() {
        let app = secured(StubStore::with_scalar(sample_row().to_string()));

        let response = app
            .oneshot(authed(Method::PUT, "/customers", Body::from("{}")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn should_refuse_put_on_item_with_id() {
        let app = secured(StubStore::with_scalar(sample_row().to_string()));

        let response = app
            .oneshot(authed(Method::PUT, "/customer/4", Body::from("{}")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
