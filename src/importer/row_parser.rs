// ==========================================
// 供应商台账管理 - 朴素 CSV 行解析器
// ==========================================
// 算法（刻意保持朴素, 与既有前端行为一致）:
//   1. 按 \n 切分, 丢弃纯空白行
//   2. 非空行不足 2 行 → 结构错误
//   3. 表头单元格: trim → 小写 → 删除所有双引号字符
//   4. 定位 "vendor id"/"vendorid" 与 "vendor name"/"vendorname" 列（首个命中）
//   5. 数据单元格: trim → 删除所有双引号字符
//   6. 两目标列均非空才构成候选记录, 否则跳过该行（计数上报）
// 红线: 逗号按朴素切分, 不支持引号包裹字段内的逗号转义
// ==========================================

use crate::domain::VendorFields;
use crate::importer::error::{ImportError, ImportResult};

/// "Vendor ID" 列的可接受表头（规范化后比较）
const VENDOR_ID_HEADERS: [&str; 2] = ["vendor id", "vendorid"];

/// "Vendor Name" 列的可接受表头（规范化后比较）
const VENDOR_NAME_HEADERS: [&str; 2] = ["vendor name", "vendorname"];

/// 解析结果
#[derive(Debug, Clone)]
pub struct ParsedRows {
    /// 候选记录（保持文件内出现顺序）
    pub candidates: Vec<VendorFields>,
    /// 非空数据行总数（不含表头）
    pub data_rows: usize,
    /// 因必填列缺失被跳过的行数
    pub skipped_rows: usize,
}

/// 表头单元格规范化
fn clean_header(raw: &str) -> String {
    raw.trim().to_lowercase().replace('"', "")
}

/// 数据单元格规范化
///
/// 注意顺序: 先 trim 再删引号 — `  "V-1"  ` → `V-1`,
/// 但 `" V-1 "` → ` V-1 `（引号内侧空白会保留, 与既有行为一致）
fn clean_cell(raw: &str) -> String {
    raw.trim().replace('"', "")
}

/// 将文件文本解析为供应商候选记录
///
/// # 返回
/// - Ok(ParsedRows): 至少一条候选记录
/// - Err(ImportError): 结构错误（行数不足 / 缺列 / 无有效数据）
pub fn parse_vendor_rows(text: &str) -> ImportResult<ParsedRows> {
    let lines: Vec<&str> = text.split('\n').filter(|l| !l.trim().is_empty()).collect();
    if lines.len() < 2 {
        return Err(ImportError::MissingHeaderOrRows);
    }

    // 表头定位
    let headers: Vec<String> = lines[0].split(',').map(clean_header).collect();
    let id_idx = headers
        .iter()
        .position(|h| VENDOR_ID_HEADERS.contains(&h.as_str()));
    let name_idx = headers
        .iter()
        .position(|h| VENDOR_NAME_HEADERS.contains(&h.as_str()));
    let (Some(id_idx), Some(name_idx)) = (id_idx, name_idx) else {
        return Err(ImportError::MissingColumns);
    };

    // 数据行提取
    let mut candidates = Vec::new();
    let mut skipped_rows = 0usize;
    for (line_no, line) in lines.iter().enumerate().skip(1) {
        let cells: Vec<String> = line.split(',').map(clean_cell).collect();
        let vendor_id = cells.get(id_idx).cloned().unwrap_or_default();
        let vendor_name = cells.get(name_idx).cloned().unwrap_or_default();

        if vendor_id.is_empty() || vendor_name.is_empty() {
            skipped_rows += 1;
            tracing::warn!(row = line_no + 1, "数据行缺少必填列, 已跳过");
            continue;
        }
        candidates.push(VendorFields {
            vendor_id,
            vendor_name,
        });
    }

    if candidates.is_empty() {
        return Err(ImportError::NoValidRows);
    }

    Ok(ParsedRows {
        candidates,
        data_rows: lines.len() - 1,
        skipped_rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_parse_preserves_order() {
        let text = "Vendor ID,Vendor Name\nV-1,Acme\nV-2,Beta\n";
        let parsed = parse_vendor_rows(text).unwrap();
        assert_eq!(parsed.data_rows, 2);
        assert_eq!(parsed.skipped_rows, 0);
        assert_eq!(
            parsed.candidates,
            vec![
                VendorFields::new("V-1", "Acme"),
                VendorFields::new("V-2", "Beta"),
            ]
        );
    }

    #[test]
    fn test_header_matching_is_case_and_spacing_insensitive() {
        let text = "\"VENDORID\" , \"Vendor Name\"\nV-1,Acme\n";
        let parsed = parse_vendor_rows(text).unwrap();
        assert_eq!(parsed.candidates.len(), 1);
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let text = "Notes,Vendor Name,Vendor ID\nhello,Acme,V-1\n";
        let parsed = parse_vendor_rows(text).unwrap();
        assert_eq!(parsed.candidates[0], VendorFields::new("V-1", "Acme"));
    }

    #[test]
    fn test_blank_lines_are_dropped_before_counting() {
        let text = "\n  \nVendor ID,Vendor Name\n\nV-1,Acme\n   \n";
        let parsed = parse_vendor_rows(text).unwrap();
        assert_eq!(parsed.data_rows, 1);
    }

    #[test]
    fn test_too_few_lines() {
        assert!(matches!(
            parse_vendor_rows(""),
            Err(ImportError::MissingHeaderOrRows)
        ));
        assert!(matches!(
            parse_vendor_rows("Vendor ID,Vendor Name\n"),
            Err(ImportError::MissingHeaderOrRows)
        ));
    }

    #[test]
    fn test_missing_columns() {
        let text = "ID,Name\nV-1,Acme\n";
        assert!(matches!(
            parse_vendor_rows(text),
            Err(ImportError::MissingColumns)
        ));

        // 只有其中一列也不行
        let text = "Vendor ID,Name\nV-1,Acme\n";
        assert!(matches!(
            parse_vendor_rows(text),
            Err(ImportError::MissingColumns)
        ));
    }

    #[test]
    fn test_rows_with_missing_fields_are_skipped() {
        let text = "Vendor ID,Vendor Name\nV-1,Acme\n,Bad\nV-2,Beta\n";
        let parsed = parse_vendor_rows(text).unwrap();
        assert_eq!(parsed.skipped_rows, 1);
        assert_eq!(
            parsed.candidates,
            vec![
                VendorFields::new("V-1", "Acme"),
                VendorFields::new("V-2", "Beta"),
            ]
        );
    }

    #[test]
    fn test_short_row_counts_as_skipped() {
        // 行内单元格数不足, 目标列缺失 → 跳过
        let text = "Vendor ID,Vendor Name\nV-1\nV-2,Beta\n";
        let parsed = parse_vendor_rows(text).unwrap();
        assert_eq!(parsed.skipped_rows, 1);
        assert_eq!(parsed.candidates.len(), 1);
    }

    #[test]
    fn test_all_rows_invalid() {
        let text = "Vendor ID,Vendor Name\n,\n,Missing\n";
        assert!(matches!(
            parse_vendor_rows(text),
            Err(ImportError::NoValidRows)
        ));
    }

    #[test]
    fn test_quote_stripping_in_cells() {
        let text = "Vendor ID,Vendor Name\n\"V-1\",\"Acme\"\n";
        let parsed = parse_vendor_rows(text).unwrap();
        assert_eq!(parsed.candidates[0], VendorFields::new("V-1", "Acme"));
    }

    #[test]
    fn test_quoted_comma_is_not_escaped() {
        // 朴素切分: 引号不保护逗号 — "A,B" 被切成两个单元格
        let text = "Vendor ID,Vendor Name\nV-1,\"Acme, Inc\"\n";
        let parsed = parse_vendor_rows(text).unwrap();
        assert_eq!(parsed.candidates[0].vendor_name, "Acme");
    }

    #[test]
    fn test_crlf_line_endings() {
        // \r 随单元格 trim 被去除
        let text = "Vendor ID,Vendor Name\r\nV-1,Acme\r\n";
        let parsed = parse_vendor_rows(text).unwrap();
        assert_eq!(parsed.candidates[0], VendorFields::new("V-1", "Acme"));
    }
}
