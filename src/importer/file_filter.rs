// ==========================================
// 供应商台账管理 - 上传文件类型过滤
// ==========================================
// 准入规则: MIME 命中白名单 或 扩展名命中白名单（任一即可）
// 说明: 仅按标识放行, 不做内容嗅探 — .xlsx/.xls 会被当作
//       纯文本读入, 除非恰好是 CSV 否则在解析阶段失败
// ==========================================

use crate::domain::UploadDraft;
use crate::importer::error::{ImportError, ImportResult};

/// MIME 白名单
const ALLOWED_MIME_TYPES: [&str; 3] = [
    "text/csv",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
];

/// 扩展名白名单（含点, 比较前统一小写）
const ALLOWED_EXTENSIONS: [&str; 3] = [".csv", ".xlsx", ".xls"];

/// 校验上传草稿的文件类型
///
/// # 返回
/// - Ok(()): 类型被接受
/// - Err(ImportError::UnsupportedFileType): 两个白名单均未命中
pub fn validate_upload(draft: &UploadDraft) -> ImportResult<()> {
    if ALLOWED_MIME_TYPES.contains(&draft.mime_type.as_str()) {
        return Ok(());
    }

    let extension = draft
        .file_name
        .rfind('.')
        .map(|idx| draft.file_name[idx..].to_lowercase())
        .unwrap_or_default();
    if ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Ok(());
    }

    tracing::debug!(
        file_name = %draft.file_name,
        mime_type = %draft.mime_type,
        "上传文件类型被拒绝"
    );
    Err(ImportError::UnsupportedFileType {
        file_name: draft.file_name.clone(),
        mime_type: draft.mime_type.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_by_mime_type() {
        // MIME 命中时不看扩展名
        let draft = UploadDraft::new("vendors.dat", "text/csv");
        assert!(validate_upload(&draft).is_ok());
    }

    #[test]
    fn test_accept_by_extension_case_insensitive() {
        let draft = UploadDraft::new("Vendors.CSV", "application/octet-stream");
        assert!(validate_upload(&draft).is_ok());

        let draft = UploadDraft::new("book.XLSX", "");
        assert!(validate_upload(&draft).is_ok());

        let draft = UploadDraft::new("legacy.xls", "");
        assert!(validate_upload(&draft).is_ok());
    }

    #[test]
    fn test_reject_unknown_type() {
        let draft = UploadDraft::new("vendors.txt", "text/plain");
        let err = validate_upload(&draft).unwrap_err();
        assert_eq!(err.to_string(), "Please upload a CSV or Excel file");
    }

    #[test]
    fn test_reject_file_without_extension() {
        let draft = UploadDraft::new("vendors", "application/octet-stream");
        assert!(validate_upload(&draft).is_err());
    }
}
