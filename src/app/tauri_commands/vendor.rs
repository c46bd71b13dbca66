use crate::app::state::AppState;
use crate::domain::FormField;

use super::common::{map_api_error, to_json};

// ==========================================
// 供应商列表与表单相关命令
// ==========================================

/// 拉取供应商列表（整表）
#[tauri::command(rename_all = "snake_case")]
pub async fn list_vendors(state: tauri::State<'_, AppState>) -> Result<String, String> {
    state
        .vendor_api
        .load_vendors()
        .await
        .map_err(map_api_error)?;
    to_json(&state.vendor_api.vendors())
}

/// 打开新增表单
#[tauri::command(rename_all = "snake_case")]
pub async fn open_vendor_form(state: tauri::State<'_, AppState>) -> Result<String, String> {
    state.vendor_api.open_create();
    to_json(&state.vendor_api.form_snapshot())
}

/// 按列表行打开编辑表单
#[tauri::command(rename_all = "snake_case")]
pub async fn open_vendor_edit(
    state: tauri::State<'_, AppState>,
    id: i64,
) -> Result<String, String> {
    state.vendor_api.open_edit(id).map_err(map_api_error)?;
    to_json(&state.vendor_api.form_snapshot())
}

/// 写入表单字段
#[tauri::command(rename_all = "snake_case")]
pub async fn edit_vendor_field(
    state: tauri::State<'_, AppState>,
    field: String,
    value: String,
) -> Result<String, String> {
    let field = FormField::parse(&field).ok_or_else(|| format!("未知表单字段: {}", field))?;
    state.vendor_api.edit_field(field, value);
    to_json(&state.vendor_api.form_snapshot())
}

/// 关闭表单（丢弃草稿）
#[tauri::command(rename_all = "snake_case")]
pub async fn close_vendor_form(state: tauri::State<'_, AppState>) -> Result<String, String> {
    state.vendor_api.close_form();
    to_json(&state.vendor_api.form_snapshot())
}

/// 提交表单（新增或更新由表单模式决定）
#[tauri::command(rename_all = "snake_case")]
pub async fn submit_vendor_form(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let vendor = state
        .vendor_api
        .submit_form()
        .await
        .map_err(map_api_error)?;
    to_json(&vendor)
}

/// 删除当前编辑中的供应商
#[tauri::command(rename_all = "snake_case")]
pub async fn delete_current_vendor(state: tauri::State<'_, AppState>) -> Result<String, String> {
    state
        .vendor_api
        .delete_vendor()
        .await
        .map_err(map_api_error)?;
    to_json(&state.vendor_api.vendors())
}

/// 表单状态快照
#[tauri::command(rename_all = "snake_case")]
pub async fn get_form_state(state: tauri::State<'_, AppState>) -> Result<String, String> {
    to_json(&state.vendor_api.form_snapshot())
}

/// 页面级错误横幅
#[tauri::command(rename_all = "snake_case")]
pub async fn get_page_error(state: tauri::State<'_, AppState>) -> Result<String, String> {
    to_json(&state.vendor_api.page_error())
}

/// 用户点击 Dismiss
#[tauri::command(rename_all = "snake_case")]
pub async fn dismiss_page_error(state: tauri::State<'_, AppState>) -> Result<String, String> {
    state.vendor_api.dismiss_page_error();
    to_json(&state.vendor_api.page_error())
}
