// ==========================================
// 供应商台账管理 - 导入层
// ==========================================
// 职责: 上传文件 → 朴素 CSV 解析 → 候选记录 → 逐条提交
// 红线: 不解析二进制电子表格（仅扩展名/MIME 白名单放行）
//       无重试, 无回滚（部分失败保留已提交记录）
// ==========================================

pub mod error;
pub mod file_filter;
pub mod pipeline;
pub mod row_parser;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use file_filter::validate_upload;
pub use pipeline::{ImportPipeline, SubmitPolicy, UPLOAD_FALLBACK};
pub use row_parser::{parse_vendor_rows, ParsedRows};
