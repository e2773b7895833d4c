//! API 路由模块
//!
//! # 结构
//!
//! - [`catalog`] - 分类/facet 解析接口 (`GET /v1/{url}`)
//! - [`maintenance`] - 维护接口 (`POST /v1/remove-base64`)
//! - [`health`] - 健康检查

pub mod convert;

pub mod catalog;
pub mod health;
pub mod maintenance;

// Re-export common types for handlers
pub use crate::utils::AppResult;
