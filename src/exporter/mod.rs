// ==========================================
// 供应商台账管理 - 导出层
// ==========================================
// 职责: 渲染模板/数据 CSV（纯函数）并落盘到下载目录
// ==========================================

pub mod csv_render;
pub mod download;

// 重导出核心类型
pub use csv_render::{export_data, export_template, ExportFile, EXPORT_HEADER};
pub use download::{resolve_export_dir, save_export, save_export_to, ExportError};
