use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db::DbService;
use crate::services::{
    AncestryBuilder, CatalogResolver, DbAncestryBuilder, DbTagResolver, ImageSanitizer,
    NameThenIdOrderer, OptionOrderer, TagResolver,
};

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，克隆成本极低。
///
/// # 组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式数据库 |
/// | orderer | Arc<dyn OptionOrderer> | viewed-with 排序规则 |
/// | ancestry | Arc<dyn AncestryBuilder> | 面包屑构建器 |
/// | tags | Arc<dyn TagResolver> | 标签解析器 |
///
/// 三个协作者接口默认使用数据库实现；集成方可以在构造时替换。
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
    /// viewed-with 选项排序规则
    pub orderer: Arc<dyn OptionOrderer>,
    /// 面包屑构建器
    pub ancestry: Arc<dyn AncestryBuilder>,
    /// 标签解析器
    pub tags: Arc<dyn TagResolver>,
}

impl std::fmt::Debug for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerState")
            .field("config", &self.config)
            .finish()
    }
}

impl ServerState {
    /// 创建服务器状态 (手动构造，用于注入自定义协作者)
    ///
    /// 通常使用 [`ServerState::initialize`] 方法代替
    pub fn new(
        config: Config,
        db: Surreal<Db>,
        orderer: Arc<dyn OptionOrderer>,
        ancestry: Arc<dyn AncestryBuilder>,
        tags: Arc<dyn TagResolver>,
    ) -> Self {
        Self {
            config,
            db,
            orderer,
            ancestry,
            tags,
        }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构 (确保目录存在)
    /// 2. 数据库 (work_dir/database)
    /// 3. 默认协作者 (面包屑、标签、排序)
    ///
    /// # Panics
    ///
    /// 数据库初始化失败时 panic
    pub async fn initialize(config: &Config) -> Self {
        config
            .ensure_work_dir_structure()
            .expect("Failed to create work directory structure");

        let db_service = DbService::new(&config.database_dir())
            .await
            .expect("Failed to initialize database");
        let db = db_service.db;

        Self::new(
            config.clone(),
            db.clone(),
            Arc::new(NameThenIdOrderer),
            Arc::new(DbAncestryBuilder::new(db.clone())),
            Arc::new(DbTagResolver::new(db)),
        )
    }

    /// 获取数据库实例
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    /// 构造解析服务 (按请求构造，成本为几次 Arc 克隆)
    pub fn resolver(&self) -> CatalogResolver {
        CatalogResolver::new(
            self.db.clone(),
            self.orderer.clone(),
            self.ancestry.clone(),
            self.tags.clone(),
        )
    }

    /// 构造图片清理服务
    pub fn sanitizer(&self) -> ImageSanitizer {
        ImageSanitizer::new(self.db.clone())
    }
}
