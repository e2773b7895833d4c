//! Maintenance API 模块

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/v1", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/remove-base64", post(handler::remove_base64))
}
