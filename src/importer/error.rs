// ==========================================
// 供应商台账管理 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 契约: Display 文案即用户可见文案（模态框内展示, 英文为产品语言）
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    /// 扩展名与 MIME 双白名单均未命中
    #[error("Please upload a CSV or Excel file")]
    UnsupportedFileType { file_name: String, mime_type: String },

    #[error("Failed to read file: {0}")]
    FileRead(String),

    // ===== 结构错误 =====
    /// 非空行不足两行（表头 + 至少一行数据）
    #[error("File must contain headers and at least one data row")]
    MissingHeaderOrRows,

    /// 表头缺少必需列
    #[error("File must contain \"Vendor ID\" and \"Vendor Name\" columns")]
    MissingColumns,

    /// 数据行全部被过滤, 无候选记录
    #[error("No valid vendor data found in file")]
    NoValidRows,

    // ===== 提交错误 =====
    /// 第 row 行提交失败; 此前 submitted 行已生效, 不回滚
    #[error("{message}")]
    RowSubmitFailed {
        row: usize,
        submitted: usize,
        message: String,
    },

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileRead(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
