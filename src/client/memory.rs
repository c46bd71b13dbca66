// ==========================================
// 供应商台账管理 - 内存态协作方实现
// ==========================================
// 用途: 桌面应用的会话内数据源（不跨会话持久化）
//       兼作测试与演示后端
// ==========================================

use crate::client::error::{ClientError, ClientResult};
use crate::client::vendors_api::VendorsApi;
use crate::domain::{Vendor, VendorFields};
use async_trait::async_trait;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

// ==========================================
// InMemoryVendorsApi - 内存态供应商接口
// ==========================================
pub struct InMemoryVendorsApi {
    vendors: Mutex<Vec<Vendor>>,
    next_id: AtomicI64,
}

impl InMemoryVendorsApi {
    pub fn new() -> Self {
        Self {
            vendors: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// 以种子数据初始化（演示/测试场景）
    pub fn with_seed(seed: Vec<VendorFields>) -> Self {
        let api = Self::new();
        {
            let mut vendors = api
                .vendors
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            for fields in seed {
                let id = api.next_id.fetch_add(1, Ordering::SeqCst);
                vendors.push(Vendor {
                    id,
                    vendor_id: fields.vendor_id,
                    vendor_name: fields.vendor_name,
                });
            }
        }
        api
    }

    fn lock(&self) -> ClientResult<std::sync::MutexGuard<'_, Vec<Vendor>>> {
        self.vendors
            .lock()
            .map_err(|e| ClientError::Transport(format!("state lock poisoned: {}", e)))
    }
}

impl Default for InMemoryVendorsApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VendorsApi for InMemoryVendorsApi {
    async fn get_all(&self) -> ClientResult<Vec<Vendor>> {
        Ok(self.lock()?.clone())
    }

    async fn create(&self, fields: &VendorFields) -> ClientResult<Vendor> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let vendor = Vendor {
            id,
            vendor_id: fields.vendor_id.clone(),
            vendor_name: fields.vendor_name.clone(),
        };
        self.lock()?.push(vendor.clone());
        tracing::debug!(id = id, vendor_id = %vendor.vendor_id, "供应商已创建");
        Ok(vendor)
    }

    async fn update(&self, id: i64, fields: &VendorFields) -> ClientResult<Vendor> {
        let mut vendors = self.lock()?;
        let vendor = vendors
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or_else(|| ClientError::Rejected(format!("Vendor not found: {}", id)))?;
        vendor.vendor_id = fields.vendor_id.clone();
        vendor.vendor_name = fields.vendor_name.clone();
        Ok(vendor.clone())
    }

    async fn delete(&self, id: i64) -> ClientResult<()> {
        let mut vendors = self.lock()?;
        let before = vendors.len();
        vendors.retain(|v| v.id != id);
        if vendors.len() == before {
            return Err(ClientError::Rejected(format!("Vendor not found: {}", id)));
        }
        tracing::debug!(id = id, "供应商已删除");
        Ok(())
    }
}
