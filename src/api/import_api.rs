// ==========================================
// 供应商台账管理 - 导入导出页面操作
// ==========================================
// 错误归属: 导入错误属于导入弹窗局部, 不写页面横幅
// ==========================================

use crate::api::error::ApiResult;
use crate::client::VendorsApi;
use crate::domain::{ImportReport, UploadDraft};
use crate::exporter;
use crate::importer::{ImportPipeline, SubmitPolicy};
use crate::store::VendorStore;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// 导出操作结果（序列化给前端提示框）
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOutcome {
    pub file_name: String,
    pub saved_to: String,
    pub rows: usize,
}

// ==========================================
// ImportApi - 导入导出入口
// ==========================================
pub struct ImportApi {
    pipeline: ImportPipeline,
    store: Arc<VendorStore>,
}

impl ImportApi {
    pub fn new(client: Arc<dyn VendorsApi>, store: Arc<VendorStore>) -> Self {
        Self {
            pipeline: ImportPipeline::new(client),
            store,
        }
    }

    /// 指定提交策略（默认逐条顺序提交）
    pub fn with_policy(
        client: Arc<dyn VendorsApi>,
        store: Arc<VendorStore>,
        policy: SubmitPolicy,
    ) -> Self {
        Self {
            pipeline: ImportPipeline::with_policy(client, policy),
            store,
        }
    }

    // ==========================================
    // 导入
    // ==========================================

    /// 从磁盘文件导入供应商数据
    pub async fn import_vendor_file(
        &self,
        path: &Path,
        mime_type: &str,
    ) -> ApiResult<ImportReport> {
        let report = self.pipeline.import_file(path, mime_type).await?;
        self.refresh_after_import().await;
        Ok(report)
    }

    /// 从已读取的文本导入（前端已持有文件内容时）
    pub async fn import_vendor_text(
        &self,
        draft: &UploadDraft,
        text: &str,
    ) -> ApiResult<ImportReport> {
        let report = self.pipeline.import_text(draft, text).await?;
        self.refresh_after_import().await;
        Ok(report)
    }

    /// 导入成功后的尽力刷新
    async fn refresh_after_import(&self) {
        if let Err(e) = self.store.load().await {
            warn!(error = %e, "导入后的列表刷新失败");
        }
    }

    // ==========================================
    // 导出
    // ==========================================

    /// 导出空白模板到下载目录
    pub fn export_template(&self) -> ApiResult<ExportOutcome> {
        let file = exporter::export_template();
        let path = exporter::save_export(&file)?;
        info!(path = %path.display(), "模板已导出");
        Ok(ExportOutcome {
            file_name: file.file_name,
            saved_to: path.display().to_string(),
            rows: 0,
        })
    }

    /// 导出当前供应商列表到下载目录
    pub fn export_data(&self) -> ApiResult<ExportOutcome> {
        let vendors = self.store.vendors();
        let rows = vendors.len();
        let file = exporter::export_data(&vendors);
        let path = exporter::save_export(&file)?;
        info!(path = %path.display(), rows = rows, "数据已导出");
        Ok(ExportOutcome {
            file_name: file.file_name,
            saved_to: path.display().to_string(),
            rows,
        })
    }
}
