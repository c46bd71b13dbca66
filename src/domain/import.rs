// ==========================================
// 供应商台账管理 - 导入领域模型
// ==========================================
// 用途: 上传草稿与导入批次报告
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// UploadDraft - 上传草稿
// ==========================================
// 生命周期: 模态框关闭或上传成功后丢弃
// 说明: 仅持有文件标识信息; 类型白名单校验在 importer::file_filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadDraft {
    /// 原始文件名（扩展名白名单按此判断）
    pub file_name: String,
    /// 浏览器/系统上报的 MIME 类型
    pub mime_type: String,
}

impl UploadDraft {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
        }
    }
}

// ==========================================
// ImportReport - 导入批次报告
// ==========================================
// 说明: 被跳过的数据行计入 skipped_rows 并上报
//       （候选过滤语义本身不变, 跳过不构成错误）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    /// 批次 ID（UUID, 用于日志关联）
    pub batch_id: String,
    /// 非空数据行总数（不含表头）
    pub data_rows: usize,
    /// 因必填列缺失被跳过的行数
    pub skipped_rows: usize,
    /// 成功提交的记录数
    pub imported: usize,
    /// 导入耗时（毫秒）
    pub elapsed_ms: i64,
    /// 批次完成时间
    pub imported_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_wire_format() {
        let report = ImportReport {
            batch_id: "b-1".to_string(),
            data_rows: 3,
            skipped_rows: 1,
            imported: 2,
            elapsed_ms: 12,
            imported_at: Utc::now(),
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"skippedRows\":1"));
        assert!(json.contains("\"imported\":2"));
    }
}
