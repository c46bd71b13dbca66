// ==========================================
// 供应商台账管理 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// ==========================================

use crate::api::{ImportApi, VendorApi};
use crate::client::{InMemoryVendorsApi, VendorsApi};
use crate::store::VendorStore;
use std::sync::Arc;

/// 应用状态
///
/// 包含所有API实例和共享资源
/// 在Tauri应用中作为全局状态管理
pub struct AppState {
    /// 供应商列表控制器（页面级错误横幅也在这里）
    pub store: Arc<VendorStore>,

    /// 供应商页面API（列表/表单/提交/删除）
    pub vendor_api: Arc<VendorApi>,

    /// 导入导出API
    pub import_api: Arc<ImportApi>,
}

impl AppState {
    /// 基于任意后端客户端创建应用状态
    pub fn new(client: Arc<dyn VendorsApi>) -> Self {
        tracing::info!("初始化AppState");

        let store = Arc::new(VendorStore::new(client.clone()));
        let vendor_api = Arc::new(VendorApi::new(client.clone(), store.clone()));
        let import_api = Arc::new(ImportApi::new(client, store.clone()));

        tracing::info!("AppState初始化完成");
        Self {
            store,
            vendor_api,
            import_api,
        }
    }

    /// 使用内存后端创建应用状态（演示与离线开发）
    pub fn with_in_memory() -> Self {
        Self::new(Arc::new(InMemoryVendorsApi::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VendorFields;

    #[tokio::test]
    async fn test_state_wires_shared_store() {
        let state = AppState::with_in_memory();

        state.vendor_api.open_create();
        state
            .vendor_api
            .edit_field(crate::domain::FormField::VendorId, "V-1");
        state
            .vendor_api
            .edit_field(crate::domain::FormField::VendorName, "Acme");
        state.vendor_api.submit_form().await.unwrap();

        // vendor_api 与 import_api 共享同一个 store
        assert_eq!(state.store.vendors().len(), 1);
        assert_eq!(state.vendor_api.vendors().len(), 1);
        assert_eq!(
            state.store.vendors()[0].fields(),
            VendorFields::new("V-1", "Acme")
        );
    }
}
