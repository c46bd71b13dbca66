// ==========================================
// 供应商台账管理 - Tauri 命令（按域拆分）
// ==========================================
// 职责: Tauri 命令定义, 连接前端与后端 API
// ==========================================

#![cfg(feature = "tauri-app")]

mod common;
mod import;
mod vendor;

pub use import::*;
pub use vendor::*;
