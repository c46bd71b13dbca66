// ==========================================
// 供应商台账管理 - 领域模型层
// ==========================================
// 职责: 定义领域实体、表单/导入值对象
// 红线: 不含外部接口调用, 不含解析/提交逻辑
// ==========================================

pub mod form;
pub mod import;
pub mod vendor;

// 重导出核心类型
pub use form::{FieldErrors, FormDraft, FormField, FormMode, FormPhase, FormSnapshot};
pub use import::{ImportReport, UploadDraft};
pub use vendor::{Vendor, VendorFields};
