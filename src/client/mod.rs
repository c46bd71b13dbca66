// ==========================================
// 供应商台账管理 - 外部协作方层
// ==========================================
// 职责: 定义供应商外部接口契约 (vendorsApi)
// 红线: 本层不持有列表状态, 不做表单/导入逻辑
// ==========================================

pub mod error;
pub mod memory;
pub mod vendors_api;

// 重导出核心类型
pub use error::{ClientError, ClientResult};
pub use memory::InMemoryVendorsApi;
pub use vendors_api::VendorsApi;
