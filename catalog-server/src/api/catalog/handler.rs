//! Catalog Resolution Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::response::CatalogResponse;

use crate::core::ServerState;
use crate::utils::AppResult;

/// GET /v1/{url} - 解析分类 slug + facet 选择器
///
/// `url` 形如 `shoes__color_red__size_42`。未命中的 slug 返回 404，
/// 这里有意区分 NotFound 与内部错误 (不再统一折叠为 500)。
pub async fn resolve(
    State(state): State<ServerState>,
    Path(url): Path<String>,
) -> AppResult<Json<CatalogResponse>> {
    let resolved = state.resolver().resolve(&url).await?;
    Ok(Json(CatalogResponse::new(resolved.into())))
}
