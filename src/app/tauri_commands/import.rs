use crate::app::state::AppState;
use std::path::Path;

use super::common::{map_api_error, to_json};

// ==========================================
// 供应商导入导出相关命令
// ==========================================

/// 导入供应商数据文件
#[tauri::command(rename_all = "snake_case")]
pub async fn import_vendor_file(
    state: tauri::State<'_, AppState>,
    file_path: String,
    mime_type: String,
) -> Result<String, String> {
    tracing::info!("[import_vendor_file] 收到请求: file_path={}", file_path);

    let report = state
        .import_api
        .import_vendor_file(Path::new(&file_path), &mime_type)
        .await
        .map_err(|e| {
            tracing::error!("[import_vendor_file] 导入失败: {:?}", e);
            map_api_error(e)
        })?;

    tracing::info!("[import_vendor_file] 导入成功: {:?}", report);
    to_json(&report)
}

/// 导出空白模板
#[tauri::command(rename_all = "snake_case")]
pub async fn export_vendor_template(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let outcome = state
        .import_api
        .export_template()
        .map_err(map_api_error)?;
    to_json(&outcome)
}

/// 导出当前供应商列表
#[tauri::command(rename_all = "snake_case")]
pub async fn export_vendor_data(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let outcome = state.import_api.export_data().map_err(map_api_error)?;
    to_json(&outcome)
}
