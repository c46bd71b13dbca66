// ==========================================
// 供应商台账管理 - 导出文件落盘
// ==========================================
// 目录解析顺序: 环境变量覆盖 → 用户下载目录 → 当前目录
// ==========================================

use crate::exporter::csv_render::ExportFile;
use std::path::PathBuf;
use thiserror::Error;

/// 导出目录环境变量（便于调试/测试/CI）
pub const EXPORT_DIR_ENV: &str = "VENDOR_CONSOLE_EXPORT_DIR";

/// 导出落盘错误类型
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write export file: {0}")]
    WriteFailed(String),
}

/// 解析导出目标目录
pub fn resolve_export_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(EXPORT_DIR_ENV) {
        let trimmed = dir.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    if let Some(dir) = dirs::download_dir() {
        return dir;
    }

    PathBuf::from(".")
}

/// 将渲染产物写入解析出的导出目录
///
/// # 返回
/// - Ok(PathBuf): 写入的完整路径
/// - Err(ExportError): 目录创建或写入失败
pub fn save_export(file: &ExportFile) -> Result<PathBuf, ExportError> {
    save_export_to(resolve_export_dir(), file)
}

/// 将渲染产物写入指定目录（测试与自定义目标场景）
pub fn save_export_to(dir: PathBuf, file: &ExportFile) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(&dir).map_err(|e| ExportError::WriteFailed(e.to_string()))?;
    let path = dir.join(&file.file_name);
    std::fs::write(&path, &file.content).map_err(|e| ExportError::WriteFailed(e.to_string()))?;
    tracing::info!(
        path = %path.display(),
        bytes = file.content.len(),
        "导出文件已写入"
    );
    Ok(path)
}
