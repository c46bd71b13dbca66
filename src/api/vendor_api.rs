// ==========================================
// 供应商台账管理 - 供应商页面操作
// ==========================================
// 职责: 把列表控制器与表单状态机接到后端客户端上,
//       实现"校验 → 提交 → 成功刷新 / 失败横幅"的页面流程
// 锁纪律: 表单锁从不跨 await 持有 — begin_submit 取出载荷后立即释放
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::client::VendorsApi;
use crate::domain::{FormField, FormMode, FormSnapshot, Vendor};
use crate::form::FormController;
use crate::store::VendorStore;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{info, instrument, warn};

/// 保存失败且无业务消息时的兜底文案
pub const SAVE_FALLBACK: &str = "Failed to save vendor";

/// 删除失败且无业务消息时的兜底文案
pub const DELETE_FALLBACK: &str = "Failed to delete vendor";

// ==========================================
// VendorApi - 页面操作入口
// ==========================================
pub struct VendorApi {
    client: Arc<dyn VendorsApi>,
    store: Arc<VendorStore>,
    form: Mutex<FormController>,
}

impl VendorApi {
    pub fn new(client: Arc<dyn VendorsApi>, store: Arc<VendorStore>) -> Self {
        Self {
            client,
            store,
            form: Mutex::new(FormController::new()),
        }
    }

    fn form(&self) -> MutexGuard<'_, FormController> {
        self.form.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    // ==========================================
    // 列表操作
    // ==========================================

    /// 整表加载（页面挂载与变更成功后调用）
    pub async fn load_vendors(&self) -> ApiResult<usize> {
        self.store.load().await.map_err(|e| {
            let message = e
                .display_message()
                .unwrap_or(crate::store::FETCH_FALLBACK)
                .to_string();
            ApiError::FetchFailed(message)
        })
    }

    /// 当前列表快照
    pub fn vendors(&self) -> Vec<Vendor> {
        self.store.vendors()
    }

    /// 页面级错误横幅
    pub fn page_error(&self) -> Option<String> {
        self.store.error()
    }

    pub fn dismiss_page_error(&self) {
        self.store.dismiss_error()
    }

    // ==========================================
    // 表单操作
    // ==========================================

    /// 打开新增模态框
    pub fn open_create(&self) {
        self.form().open_create();
    }

    /// 按列表行打开编辑模态框
    pub fn open_edit(&self, id: i64) -> ApiResult<()> {
        let vendor = self
            .store
            .find(id)
            .ok_or_else(|| ApiError::InvalidFormState(format!("vendor {} not in list", id)))?;
        self.form().open_edit(&vendor);
        Ok(())
    }

    /// 写入表单字段
    pub fn edit_field(&self, field: FormField, value: impl Into<String>) {
        self.form().set_field(field, value);
    }

    /// 关闭模态框（丢弃草稿）
    pub fn close_form(&self) {
        self.form().close();
    }

    /// 表单状态快照
    pub fn form_snapshot(&self) -> FormSnapshot {
        self.form().snapshot()
    }

    // ==========================================
    // 提交流程
    // ==========================================

    /// 提交表单: 校验通过后按模式走新增或更新
    ///
    /// # 返回
    /// - Ok(Vendor): 保存成功, 模态框已关闭, 列表已尽力刷新
    /// - Err(ValidationFailed): 校验失败, 字段错误已写入, 零接口调用
    /// - Err(SaveFailed): 后端拒绝或传输失败, 模态框保持打开, 横幅已写入
    #[instrument(skip(self))]
    pub async fn submit_form(&self) -> ApiResult<Vendor> {
        // === 步骤 1: 锁内校验并取出载荷 ===
        let (mode, fields) = {
            let mut form = self.form();
            if !form.validate() {
                return Err(ApiError::ValidationFailed);
            }
            form.begin_submit()
                .ok_or_else(|| ApiError::InvalidFormState("form is not open".to_string()))?
        };

        // === 步骤 2: 锁外调用后端 ===
        let result = match mode {
            FormMode::Create => self.client.create(&fields).await,
            FormMode::Edit(id) => self.client.update(id, &fields).await,
        };

        // === 步骤 3: 回写结果 ===
        match result {
            Ok(vendor) => {
                self.form().finish_submit(true);
                info!(id = vendor.id, vendor_id = %vendor.vendor_id, "供应商已保存");
                self.refresh_after_mutation().await;
                Ok(vendor)
            }
            Err(e) => {
                self.form().finish_submit(false);
                let message = e.display_message().unwrap_or(SAVE_FALLBACK).to_string();
                warn!(error = %e, "供应商保存失败");
                self.store.set_error(message.clone());
                Err(ApiError::SaveFailed(message))
            }
        }
    }

    /// 删除当前编辑中的供应商
    ///
    /// 仅在编辑模态框内可用（删除按钮只在 Edit 模式渲染）
    #[instrument(skip(self))]
    pub async fn delete_vendor(&self) -> ApiResult<()> {
        let id = {
            let mut form = self.form();
            let FormMode::Edit(id) = form.mode() else {
                return Err(ApiError::InvalidFormState(
                    "delete is only available when editing".to_string(),
                ));
            };
            form.begin_submit().ok_or_else(|| {
                ApiError::InvalidFormState("form is not open".to_string())
            })?;
            id
        };

        match self.client.delete(id).await {
            Ok(()) => {
                self.form().finish_submit(true);
                info!(id = id, "供应商已删除");
                self.refresh_after_mutation().await;
                Ok(())
            }
            Err(e) => {
                self.form().finish_submit(false);
                let message = e.display_message().unwrap_or(DELETE_FALLBACK).to_string();
                warn!(id = id, error = %e, "供应商删除失败");
                self.store.set_error(message.clone());
                Err(ApiError::DeleteFailed(message))
            }
        }
    }

    /// 变更成功后的尽力刷新: 刷新失败只写横幅, 不覆盖变更本身的成功结果
    async fn refresh_after_mutation(&self) {
        if let Err(e) = self.store.load().await {
            warn!(error = %e, "变更后的列表刷新失败");
        }
    }
}
