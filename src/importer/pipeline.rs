// ==========================================
// 供应商台账管理 - CSV 导入管道
// ==========================================
// 流程: 类型过滤 → 读文本 → 朴素解析 → 候选记录 → 提交
// 提交策略: 默认逐条顺序提交（限速与有序性为既定选择, 非性能优化）
// 部分失败: 首个失败即终止, 已提交记录保留, 不回滚
// ==========================================

use crate::client::VendorsApi;
use crate::domain::{ImportReport, UploadDraft, VendorFields};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_filter;
use crate::importer::row_parser;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

/// 行提交失败且无业务消息时的兜底文案
pub const UPLOAD_FALLBACK: &str = "Failed to upload file";

/// 提交策略
///
/// Sequential: 逐条 await, 上一条完成才发起下一条（默认）
/// Concurrent: 全部同时发起; 结果仍按文件顺序归并, 首个失败作为整体错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPolicy {
    #[default]
    Sequential,
    Concurrent,
}

// ==========================================
// ImportPipeline - 导入管道
// ==========================================
pub struct ImportPipeline {
    client: Arc<dyn VendorsApi>,
    policy: SubmitPolicy,
}

impl ImportPipeline {
    /// 创建导入管道（默认顺序提交）
    pub fn new(client: Arc<dyn VendorsApi>) -> Self {
        Self {
            client,
            policy: SubmitPolicy::Sequential,
        }
    }

    /// 指定提交策略
    pub fn with_policy(client: Arc<dyn VendorsApi>, policy: SubmitPolicy) -> Self {
        Self { client, policy }
    }

    /// 从磁盘文件导入
    ///
    /// 文件按 UTF-8 读入（非法序列做替换, 与浏览器 file.text() 语义一致）；
    /// 二进制电子表格因此会进入解析阶段并在那里失败
    pub async fn import_file(&self, path: &Path, mime_type: &str) -> ImportResult<ImportReport> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        let draft = UploadDraft::new(file_name, mime_type);
        file_filter::validate_upload(&draft)?;

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ImportError::FileRead(format!("{}: {}", path.display(), e)))?;
        let text = String::from_utf8_lossy(&bytes);
        self.run(&draft, &text).await
    }

    /// 从已读取的文本导入（前端已持有文件内容时）
    pub async fn import_text(
        &self,
        draft: &UploadDraft,
        text: &str,
    ) -> ImportResult<ImportReport> {
        file_filter::validate_upload(draft)?;
        self.run(draft, text).await
    }

    // ==========================================
    // 管道主流程
    // ==========================================
    #[instrument(skip_all, fields(file_name = %draft.file_name))]
    async fn run(&self, draft: &UploadDraft, text: &str) -> ImportResult<ImportReport> {
        let start = Instant::now();
        let batch_id = Uuid::new_v4().to_string();
        info!(batch_id = %batch_id, "开始导入供应商数据");

        // === 步骤 1: 解析文本 ===
        let parsed = row_parser::parse_vendor_rows(text)?;
        info!(
            batch_id = %batch_id,
            data_rows = parsed.data_rows,
            skipped_rows = parsed.skipped_rows,
            candidates = parsed.candidates.len(),
            "文件解析完成"
        );

        // === 步骤 2: 提交候选记录 ===
        let imported = match self.policy {
            SubmitPolicy::Sequential => self.submit_sequential(&parsed.candidates).await?,
            SubmitPolicy::Concurrent => self.submit_concurrent(&parsed.candidates).await?,
        };

        let report = ImportReport {
            batch_id,
            data_rows: parsed.data_rows,
            skipped_rows: parsed.skipped_rows,
            imported,
            elapsed_ms: start.elapsed().as_millis() as i64,
            imported_at: chrono::Utc::now(),
        };
        info!(
            batch_id = %report.batch_id,
            imported = report.imported,
            elapsed_ms = report.elapsed_ms,
            "导入完成"
        );
        Ok(report)
    }

    /// 顺序提交: 逐条 await, 首个失败即终止剩余提交
    async fn submit_sequential(&self, candidates: &[VendorFields]) -> ImportResult<usize> {
        let mut submitted = 0usize;
        for (idx, fields) in candidates.iter().enumerate() {
            match self.client.create(fields).await {
                Ok(vendor) => {
                    submitted += 1;
                    debug!(row = idx + 1, id = vendor.id, vendor_id = %fields.vendor_id, "行提交成功");
                }
                Err(e) => {
                    error!(row = idx + 1, submitted = submitted, error = %e, "行提交失败, 终止剩余提交");
                    let message = e
                        .display_message()
                        .unwrap_or(UPLOAD_FALLBACK)
                        .to_string();
                    return Err(ImportError::RowSubmitFailed {
                        row: idx + 1,
                        submitted,
                        message,
                    });
                }
            }
        }
        Ok(submitted)
    }

    /// 并发提交: 全部同时发起, 按文件顺序归并结果
    ///
    /// 失败时已完成的请求同样不回滚; submitted 为成功归并数
    async fn submit_concurrent(&self, candidates: &[VendorFields]) -> ImportResult<usize> {
        let pending: Vec<_> = candidates.iter().map(|f| self.client.create(f)).collect();
        let results = futures::future::join_all(pending).await;

        let mut submitted = 0usize;
        for (idx, result) in results.into_iter().enumerate() {
            match result {
                Ok(_) => submitted += 1,
                Err(e) => {
                    error!(row = idx + 1, error = %e, "并发提交中的行失败");
                    let message = e
                        .display_message()
                        .unwrap_or(UPLOAD_FALLBACK)
                        .to_string();
                    return Err(ImportError::RowSubmitFailed {
                        row: idx + 1,
                        submitted,
                        message,
                    });
                }
            }
        }
        Ok(submitted)
    }
}
