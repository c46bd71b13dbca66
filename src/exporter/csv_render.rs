// ==========================================
// 供应商台账管理 - CSV 渲染
// ==========================================
// 职责: 两个纯同步操作 — 空白模板 / 当前列表数据
// 红线: 字段整体加双引号但不转义内嵌引号/逗号 —
//       与既有前端行为一致; 含逗号或引号的字段往返不安全（已知风险）
// ==========================================

use crate::domain::Vendor;
use serde::Serialize;

/// 导出表头（模板与数据文件共用首行）
pub const EXPORT_HEADER: &str = "Vendor ID,Vendor Name";

/// 模板文件固定文件名
pub const TEMPLATE_FILE_NAME: &str = "vendors_template.csv";

/// 数据文件固定文件名
pub const DATA_FILE_NAME: &str = "vendors_data.csv";

// ==========================================
// ExportFile - 渲染产物
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportFile {
    pub file_name: String,
    pub content: String,
}

/// 渲染空白模板（仅表头一行, 展示期望的导入格式）
pub fn export_template() -> ExportFile {
    ExportFile {
        file_name: TEMPLATE_FILE_NAME.to_string(),
        content: EXPORT_HEADER.to_string(),
    }
}

/// 渲染当前供应商列表
///
/// 每行两个字段各自整体包裹双引号, 不做转义
pub fn export_data(vendors: &[Vendor]) -> ExportFile {
    let mut lines = Vec::with_capacity(vendors.len() + 1);
    lines.push(EXPORT_HEADER.to_string());
    for vendor in vendors {
        lines.push(format!(
            "\"{}\",\"{}\"",
            vendor.vendor_id, vendor.vendor_name
        ));
    }
    ExportFile {
        file_name: DATA_FILE_NAME.to_string(),
        content: lines.join("\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vendor(id: i64, vendor_id: &str, vendor_name: &str) -> Vendor {
        Vendor {
            id,
            vendor_id: vendor_id.to_string(),
            vendor_name: vendor_name.to_string(),
        }
    }

    #[test]
    fn test_template_is_header_only() {
        let file = export_template();
        assert_eq!(file.file_name, "vendors_template.csv");
        assert_eq!(file.content, "Vendor ID,Vendor Name");
    }

    #[test]
    fn test_export_empty_list_matches_template_first_line() {
        let file = export_data(&[]);
        assert_eq!(file.file_name, "vendors_data.csv");
        assert_eq!(file.content.lines().next(), Some("Vendor ID,Vendor Name"));
        assert_eq!(file.content.lines().count(), 1);
    }

    #[test]
    fn test_export_quotes_each_field() {
        let file = export_data(&[vendor(1, "V-1", "Acme"), vendor(2, "V-2", "Beta")]);
        let lines: Vec<&str> = file.content.lines().collect();
        assert_eq!(lines, vec![
            "Vendor ID,Vendor Name",
            "\"V-1\",\"Acme\"",
            "\"V-2\",\"Beta\"",
        ]);
    }

    #[test]
    fn test_embedded_quote_and_comma_are_not_escaped() {
        // 已知往返风险: 内嵌引号/逗号原样写出
        let file = export_data(&[vendor(1, "V\"1", "A,B")]);
        let line = file.content.lines().nth(1).unwrap();
        assert_eq!(line, "\"V\"1\",\"A,B\"");
    }
}
