use std::sync::Arc;

use {
    axum::{
        Json, Router,
        extract::{State, rejection::JsonRejection},
        http::StatusCode,
        response::{IntoResponse, Response},
        routing::post,
    },
    serde::Serialize,
    skillroute_config::ServerConfig,
    skillroute_protocol::{ErrorShape, Event, error_codes},
    skillroute_routing::Dispatcher,
    tokio::net::TcpListener,
    tracing::{debug, info, warn},
};

/// Build the axum app serving `dispatcher` on `POST {path}`.
pub fn build_app<R>(dispatcher: Arc<Dispatcher<R>>, path: &str) -> Router
where
    R: Serialize + Send + 'static,
{
    Router::new()
        .route(path, post(skill_handler::<R>))
        .with_state(dispatcher)
}

/// Bind to the configured address and serve until the listener fails.
pub async fn serve<R>(config: &ServerConfig, dispatcher: Arc<Dispatcher<R>>) -> anyhow::Result<()>
where
    R: Serialize + Send + 'static,
{
    let listener = TcpListener::bind((config.bind.as_str(), config.port)).await?;
    info!(
        addr = %listener.local_addr()?,
        path = %config.path,
        routes = dispatcher.len(),
        "skill endpoint listening"
    );
    axum::serve(listener, build_app(dispatcher, &config.path)).await?;
    Ok(())
}

async fn skill_handler<R>(
    State(dispatcher): State<Arc<Dispatcher<R>>>,
    body: Result<Json<Event>, JsonRejection>,
) -> Response
where
    R: Serialize + Send + 'static,
{
    let event = match body {
        Ok(Json(event)) => event,
        Err(rejection) => {
            debug!(error = %rejection, "rejected request body");
            return error_response(ErrorShape::new(
                error_codes::INVALID_REQUEST,
                rejection.body_text(),
                rejection.status().as_u16(),
            ));
        },
    };

    match dispatcher.dispatch(&event).await {
        Ok(response) => Json(response).into_response(),
        Err(e) => {
            if e.status() >= 500 {
                warn!(error = %e, kind = %event.kind(), "dispatch failed");
            }
            error_response(e.to_error_shape())
        },
    }
}

fn error_response(shape: ErrorShape) -> Response {
    let status = StatusCode::from_u16(shape.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(shape)).into_response()
}
