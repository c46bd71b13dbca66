// ==========================================
// 供应商台账管理 - 核心库
// ==========================================
// 技术栈: Tauri + Rust (会话内存态数据, 无本地持久化)
// 系统定位: 会计辅助工具 (供应商 CRUD + CSV 导入导出)
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 外部协作方 - 供应商接口 (vendorsApi)
pub mod client;

// 列表控制器 - 供应商列表状态
pub mod store;

// 表单控制器 - 新增/编辑状态机
pub mod form;

// 导入层 - CSV 导入管道
pub mod importer;

// 导出层 - CSV 模板/数据导出
pub mod exporter;

// API 层 - 业务接口
pub mod api;

// 应用层 - Tauri 集成
pub mod app;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    FieldErrors, FormDraft, FormField, FormMode, FormPhase, ImportReport, UploadDraft, Vendor,
    VendorFields,
};

// 外部协作方
pub use client::{ClientError, ClientResult, InMemoryVendorsApi, VendorsApi};

// 控制器
pub use form::FormController;
pub use store::VendorStore;

// 导入/导出
pub use exporter::{export_data, export_template, ExportFile};
pub use importer::{ImportError, ImportPipeline, ImportResult, SubmitPolicy};

// API
pub use api::{ApiError, ApiResult, ImportApi, VendorApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "供应商台账管理系统";

// ==========================================
// 预编译检查
// ==========================================
