// ==========================================
// 供应商台账管理 - 列表控制器层
// ==========================================

pub mod vendor_store;

pub use vendor_store::{VendorStore, FETCH_FALLBACK};
