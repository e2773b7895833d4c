//! Vitryna Catalog Server - 电商目录解析服务
//!
//! # 架构概述
//!
//! 本模块是目录服务的主入口，提供以下核心功能：
//!
//! - **解析管道** (`services/resolver`): slug + facet 选择器 → option 集合
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储
//! - **HTTP API** (`api`): `/v1` RESTful 接口
//! - **维护** (`services/image_sanitizer`): base64 图片字段清理
//!
//! # 模块结构
//!
//! ```text
//! catalog-server/src/
//! ├── core/          # 配置、状态、服务器、错误
//! ├── api/           # HTTP 路由和处理器
//! ├── services/      # 解析管道、协作者接口、清理
//! ├── db/            # 数据库层 (models + repository)
//! └── utils/         # 错误、日志等工具
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};
pub use services::{CatalogResolver, ImageSanitizer, ResolvedCatalog};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
 _    ___ __
| |  / (_) /________  ______  ____ _
| | / / / __/ ___/ / / / __ \/ __ `/
| |/ / / /_/ /  / /_/ / / / / /_/ /
|___/_/\__/_/   \__, /_/ /_/\__,_/
               /____/
    "#
    );
}
