//! Request extractors shared by every handler.

use std::convert::Infallible;
use std::ops::Deref;

use async_trait::async_trait;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use sea_orm::DatabaseConnection;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::JsonApiError;
use crate::state::ServerState;

/// Request-scoped database handle. Opened when a handler is entered and
/// released when the handler returns, on success or failure.
pub struct UnitOfWork {
    conn: DatabaseConnection,
}

impl UnitOfWork {
    pub fn conn(&self) -> &DatabaseConnection {
        &self.conn
    }
}

impl Deref for UnitOfWork {
    type Target = DatabaseConnection;

    fn deref(&self) -> &Self::Target {
        &self.conn
    }
}

impl Drop for UnitOfWork {
    fn drop(&mut self) {
        debug!("unit of work released");
    }
}

#[async_trait]
impl FromRequestParts<ServerState> for UnitOfWork {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &ServerState) -> Result<Self, Self::Rejection> {
        debug!(method = %parts.method, path = %parts.uri.path(), "unit of work opened");
        Ok(Self { conn: state.db.clone() })
    }
}

/// `Json` with malformed or mistyped bodies reported as 400.
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(JsonApiError::bad_request(rejection.body_text())),
        }
    }
}

/// `Query` with a JSON error body.
pub struct ValidQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => Err(JsonApiError::bad_request(rejection.body_text())),
        }
    }
}

/// `Path` with a JSON error body.
pub struct ValidPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => Err(JsonApiError::bad_request(rejection.body_text())),
        }
    }
}
