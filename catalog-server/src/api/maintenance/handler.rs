//! Maintenance Handlers

use axum::extract::State;

use crate::core::ServerState;
use crate::utils::AppResult;

/// POST /v1/remove-base64 - 清理内联 base64 图片字段
///
/// 幂等操作；无匹配记录时同样返回成功。
pub async fn remove_base64(State(state): State<ServerState>) -> AppResult<&'static str> {
    let report = state.sanitizer().sanitize().await?;
    tracing::info!(cleared = report.total(), "remove-base64 sweep completed");
    Ok("success")
}
