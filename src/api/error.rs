// ==========================================
// 供应商台账管理 - API 层错误类型
// ==========================================

use crate::exporter::ExportError;
use crate::importer::ImportError;
use thiserror::Error;

/// 页面 API 错误
///
/// 展示归属:
/// - FetchFailed / SaveFailed / DeleteFailed 的消息写入页面级错误横幅
/// - ValidationFailed 只体现为表单字段错误, 不携带横幅消息
/// - Import 属于导入弹窗局部错误, 不写横幅
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    FetchFailed(String),

    #[error("Validation failed")]
    ValidationFailed,

    #[error("{0}")]
    SaveFailed(String),

    #[error("{0}")]
    DeleteFailed(String),

    /// 表单不在该操作要求的状态（如未打开时提交）
    #[error("Invalid form state: {0}")]
    InvalidFormState(String),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// API 层 Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
