// ==========================================
// 供应商台账管理 - 供应商列表控制器
// ==========================================
// 职责: 持有列表快照 / 加载标志 / 页面级错误横幅
// 红线: 不分页, 不过滤, 不排序; 变更成功后由上层触发整表重拉
// 失败语义: 列表保持上一次已知状态, 仅记录错误文案
// ==========================================

use crate::client::{ClientError, VendorsApi};
use crate::domain::Vendor;
use std::sync::{Arc, Mutex, MutexGuard};

/// 列表拉取失败且无业务消息时的兜底文案
pub const FETCH_FALLBACK: &str = "Failed to fetch vendors";

#[derive(Default)]
struct StoreState {
    vendors: Vec<Vendor>,
    loading: bool,
    error: Option<String>,
}

// ==========================================
// VendorStore - 供应商列表控制器
// ==========================================
pub struct VendorStore {
    client: Arc<dyn VendorsApi>,
    state: Mutex<StoreState>,
}

impl VendorStore {
    pub fn new(client: Arc<dyn VendorsApi>) -> Self {
        Self {
            client,
            state: Mutex::new(StoreState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, StoreState> {
        // 单写者事件循环语义下毒化只可能来自测试内 panic; 直接接管内层数据
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// 整表加载, 替换本地快照
    ///
    /// # 返回
    /// - Ok(usize): 加载后的记录数
    /// - Err(ClientError): 拉取失败（错误文案已写入页面横幅, 旧列表保留）
    pub async fn load(&self) -> Result<usize, ClientError> {
        {
            let mut state = self.state();
            state.loading = true;
            state.error = None;
        }

        let result = self.client.get_all().await;

        let mut state = self.state();
        state.loading = false;
        match result {
            Ok(vendors) => {
                let count = vendors.len();
                state.vendors = vendors;
                tracing::debug!(count = count, "供应商列表已刷新");
                Ok(count)
            }
            Err(e) => {
                // 列表保持上一次已知状态
                let message = e
                    .display_message()
                    .unwrap_or(FETCH_FALLBACK)
                    .to_string();
                tracing::warn!(error = %e, "供应商列表加载失败");
                state.error = Some(message);
                Err(e)
            }
        }
    }

    /// 当前列表快照（owned clone, 调用方可自由持有）
    pub fn vendors(&self) -> Vec<Vendor> {
        self.state().vendors.clone()
    }

    /// 按服务端 id 查找
    pub fn find(&self, id: i64) -> Option<Vendor> {
        self.state().vendors.iter().find(|v| v.id == id).cloned()
    }

    pub fn is_loading(&self) -> bool {
        self.state().loading
    }

    /// 页面级错误横幅文案
    pub fn error(&self) -> Option<String> {
        self.state().error.clone()
    }

    /// 写入页面级错误（表单保存/删除失败时由 API 层调用）
    pub fn set_error(&self, message: impl Into<String>) {
        self.state().error = Some(message.into());
    }

    /// 用户点击 Dismiss
    pub fn dismiss_error(&self) {
        self.state().error = None;
    }
}
