use crate::api::ApiError;
use crate::importer::ImportError;
use serde::{Deserialize, Serialize};

// ==========================================
// 公共工具: 错误映射、结果序列化
// ==========================================

/// 错误响应（返回给前端）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(super) struct ErrorResponse {
    /// 错误代码
    pub code: String,

    /// 错误消息（可直接展示）
    pub message: String,

    /// 详细信息（可选）
    pub details: Option<serde_json::Value>,
}

/// 将ApiError转换为JSON字符串（Tauri要求）
pub(super) fn map_api_error(err: ApiError) -> String {
    let error_response = ErrorResponse {
        code: match &err {
            ApiError::FetchFailed(_) => "FETCH_FAILED",
            ApiError::ValidationFailed => "VALIDATION_FAILED",
            ApiError::SaveFailed(_) => "SAVE_FAILED",
            ApiError::DeleteFailed(_) => "DELETE_FAILED",
            ApiError::InvalidFormState(_) => "INVALID_FORM_STATE",
            ApiError::Import(_) => "IMPORT_ERROR",
            ApiError::Export(_) => "EXPORT_ERROR",
            ApiError::Other(_) => "OTHER_ERROR",
        }
        .to_string(),
        message: err.to_string(),
        details: match &err {
            ApiError::Import(ImportError::RowSubmitFailed { row, submitted, .. }) => {
                Some(serde_json::json!({ "row": row, "submitted": submitted }))
            }
            _ => None,
        },
    };

    serde_json::to_string(&error_response).unwrap_or_else(|_| err.to_string())
}

/// 将结果序列化为JSON字符串（Tauri要求）
pub(super) fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("序列化失败: {}", e))
}
