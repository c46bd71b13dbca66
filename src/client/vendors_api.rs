// ==========================================
// 供应商台账管理 - vendorsApi Trait
// ==========================================
// 职责: 定义外部供应商接口（不包含实现）
// 说明: 四个操作均可能失败; id 由服务端分配
// ==========================================

use crate::client::error::ClientResult;
use crate::domain::{Vendor, VendorFields};
use async_trait::async_trait;

// ==========================================
// VendorsApi Trait
// ==========================================
// 用途: 供应商 CRUD 外部契约
// 实现者: InMemoryVendorsApi（会话内存态）; 测试替身
#[async_trait]
pub trait VendorsApi: Send + Sync {
    /// 拉取全部供应商
    ///
    /// # 返回
    /// - Ok(Vec<Vendor>): 当前全量列表
    /// - Err(ClientError): 传输或服务端错误
    async fn get_all(&self) -> ClientResult<Vec<Vendor>>;

    /// 创建供应商（服务端分配 id）
    async fn create(&self, fields: &VendorFields) -> ClientResult<Vendor>;

    /// 按 id 更新供应商
    async fn update(&self, id: i64, fields: &VendorFields) -> ClientResult<Vendor>;

    /// 按 id 删除供应商
    async fn delete(&self, id: i64) -> ClientResult<()>;
}
