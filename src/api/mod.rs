// ==========================================
// 供应商台账管理 - 页面 API 层
// ==========================================
// 职责: 组合存储/表单/导入导出, 向外暴露页面级操作
// ==========================================

pub mod error;
pub mod import_api;
pub mod vendor_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use import_api::{ExportOutcome, ImportApi};
pub use vendor_api::{VendorApi, DELETE_FALLBACK, SAVE_FALLBACK};
