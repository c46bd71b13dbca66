// ==========================================
// 供应商台账管理 - 表单控制器层
// ==========================================

pub mod controller;

pub use controller::{FormController, VENDOR_ID_REQUIRED, VENDOR_NAME_REQUIRED};
