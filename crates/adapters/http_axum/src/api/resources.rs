//! Generic JSON REST handlers shared by every registered resource.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde_json::Value;

use procgate_app::ports::ProcedureStore;
use procgate_app::registry::ResourceRef;
use procgate_domain::request::DispatchRequest;
use procgate_domain::resource::Resource;
use procgate_domain::verb::Verb;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the single-segment routes.
pub enum CollectionResponse {
    /// `GET /{collection}` — the rows as one JSON array.
    Ok(Json<Value>),
    /// `PUT /{item}` — the created row, plus a reference to it when the
    /// row exposes its key.
    Created {
        location: Option<String>,
        body: Json<Value>,
    },
}

impl IntoResponse for CollectionResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
            Self::Created {
                location: Some(location),
                body,
            } => (StatusCode::CREATED, [(header::LOCATION, location)], body).into_response(),
            Self::Created {
                location: None,
                body,
            } => (StatusCode::CREATED, body).into_response(),
        }
    }
}

/// Possible responses from the `/{resource}/{id}` routes.
pub enum ItemResponse {
    /// `GET /{item}/{id}` — the row as a JSON object.
    Ok(Json<Value>),
    /// A mutation that changed at least one row.
    NoContent,
}

impl IntoResponse for ItemResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /{collection}` and `PUT /{item}`
///
/// The verb is validated first, so an unsupported method is refused
/// before the routing table or the store is consulted.
pub async fn collection<S>(
    State(state): State<AppState<S>>,
    Path(slug): Path<String>,
    method: Method,
    body: Bytes,
) -> Result<CollectionResponse, ApiError>
where
    S: ProcedureStore + Send + Sync + 'static,
{
    let verb: Verb = method.as_str().parse()?;
    match (state.registry.find(&slug), verb) {
        (Some(ResourceRef::Collection(resource)), Verb::Get) => list(&state, resource).await,
        (Some(ResourceRef::Item(resource)), Verb::Put) => create(&state, resource, &body).await,
        (Some(_), _) => Err(ApiError::MethodNotAllowed),
        (None, _) => Err(ApiError::NotFound),
    }
}

/// `GET`, `PATCH` and `DELETE` on `/{item}/{id}`
pub async fn item<S>(
    State(state): State<AppState<S>>,
    Path((slug, id)): Path<(String, i64)>,
    method: Method,
    body: Bytes,
) -> Result<ItemResponse, ApiError>
where
    S: ProcedureStore + Send + Sync + 'static,
{
    let verb: Verb = method.as_str().parse()?;
    let Some(ResourceRef::Item(resource)) = state.registry.find(&slug) else {
        return Err(ApiError::NotFound);
    };
    match verb {
        Verb::Get => read(&state, resource, id).await,
        Verb::Patch => update(&state, resource, id, &body).await,
        Verb::Delete => delete(&state, resource, id).await,
        Verb::Put => Err(ApiError::MethodNotAllowed),
    }
}

async fn list<S>(state: &AppState<S>, resource: &Resource) -> Result<CollectionResponse, ApiError>
where
    S: ProcedureStore + Send + Sync + 'static,
{
    let request = DispatchRequest::new(Verb::Get, resource.collection().clone());
    let rows = state
        .dispatcher
        .execute(&request)
        .await?
        .unwrap_or_else(|| Value::Array(Vec::new()));
    Ok(CollectionResponse::Ok(Json(rows)))
}

async fn create<S>(
    state: &AppState<S>,
    resource: &Resource,
    body: &Bytes,
) -> Result<CollectionResponse, ApiError>
where
    S: ProcedureStore + Send + Sync + 'static,
{
    let payload = parse_payload(body)?;
    let request = DispatchRequest::new(Verb::Put, resource.item().clone()).with_payload(payload);
    match state.dispatcher.execute(&request).await? {
        Some(row) => {
            let location = location_for(resource, &row);
            Ok(CollectionResponse::Created {
                location,
                body: Json(row),
            })
        }
        None => Err(ApiError::Rejected("no row was created".to_owned())),
    }
}

async fn read<S>(
    state: &AppState<S>,
    resource: &Resource,
    id: i64,
) -> Result<ItemResponse, ApiError>
where
    S: ProcedureStore + Send + Sync + 'static,
{
    let request = DispatchRequest::new(Verb::Get, resource.item().clone()).with_id(id);
    match state.dispatcher.execute(&request).await? {
        Some(row) => Ok(ItemResponse::Ok(Json(row))),
        None => Err(ApiError::NotFound),
    }
}

async fn update<S>(
    state: &AppState<S>,
    resource: &Resource,
    id: i64,
    body: &Bytes,
) -> Result<ItemResponse, ApiError>
where
    S: ProcedureStore + Send + Sync + 'static,
{
    let payload = parse_payload(body)?;
    let request = DispatchRequest::new(Verb::Patch, resource.item().clone())
        .with_id(id)
        .with_payload(payload);
    match state.dispatcher.execute(&request).await? {
        Some(_) => Ok(ItemResponse::NoContent),
        None => Err(ApiError::Rejected("no row was updated".to_owned())),
    }
}

async fn delete<S>(
    state: &AppState<S>,
    resource: &Resource,
    id: i64,
) -> Result<ItemResponse, ApiError>
where
    S: ProcedureStore + Send + Sync + 'static,
{
    let request = DispatchRequest::new(Verb::Delete, resource.item().clone()).with_id(id);
    match state.dispatcher.execute(&request).await? {
        Some(_) => Ok(ItemResponse::NoContent),
        None => Err(ApiError::Rejected("no row was deleted".to_owned())),
    }
}

fn parse_payload(body: &Bytes) -> Result<Value, ApiError> {
    serde_json::from_slice(body)
        .map_err(|_| ApiError::Rejected("request body is not valid JSON".to_owned()))
}

/// Derive the `Location` of a created row from its key field.
///
/// A row that does not expose an integer key still gets a `201`, just
/// without the header.
fn location_for(resource: &Resource, row: &Value) -> Option<String> {
    match row.get(resource.id_field()).and_then(Value::as_i64) {
        Some(id) => Some(format!("/{}/{id}", resource.item())),
        None => {
            tracing::warn!(
                field = resource.id_field(),
                "created row carries no integer key, omitting Location"
            );
            None
        }
    }
}
