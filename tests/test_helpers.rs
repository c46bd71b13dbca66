// ==========================================
// 测试辅助: 脚本化后端客户端
// ==========================================
// 职责: 记录调用顺序, 按脚本注入失败, 验证提交时序
// ==========================================

use async_trait::async_trait;
use std::sync::Mutex;
use vendor_console::client::{ClientError, ClientResult, VendorsApi};
use vendor_console::domain::{Vendor, VendorFields};

#[derive(Default)]
struct Inner {
    vendors: Vec<Vendor>,
    next_id: i64,
    create_calls: usize,
    created: Vec<VendorFields>,
    // 第 n 次 create 调用返回业务拒绝（1 起始）
    fail_create_at: Option<(usize, String)>,
    fail_get_all: Option<Failure>,
    fail_update: Option<Failure>,
    fail_delete: Option<Failure>,
}

/// 注入的失败类型
#[derive(Clone)]
pub enum Failure {
    /// 业务拒绝, 消息可直接展示
    Rejected(String),
    /// 传输层失败, 消息不展示（走兜底文案）
    Transport(String),
}

impl Failure {
    fn to_error(&self) -> ClientError {
        match self {
            Failure::Rejected(m) => ClientError::Rejected(m.clone()),
            Failure::Transport(m) => ClientError::Transport(m.clone()),
        }
    }
}

/// 脚本化的供应商后端客户端
pub struct ScriptedVendorsApi {
    state: Mutex<Inner>,
}

impl ScriptedVendorsApi {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(Inner {
                next_id: 1,
                ..Inner::default()
            }),
        }
    }

    pub fn with_seed(seed: Vec<VendorFields>) -> Self {
        let api = Self::new();
        {
            let mut inner = api.state.lock().unwrap();
            for fields in seed {
                let id = inner.next_id;
                inner.next_id += 1;
                inner.vendors.push(Vendor {
                    id,
                    vendor_id: fields.vendor_id,
                    vendor_name: fields.vendor_name,
                });
            }
        }
        api
    }

    /// 第 n 次 create（1 起始）返回业务拒绝
    pub fn fail_create_at(self, n: usize, message: &str) -> Self {
        self.state.lock().unwrap().fail_create_at = Some((n, message.to_string()));
        self
    }

    pub fn fail_get_all(self, failure: Failure) -> Self {
        self.state.lock().unwrap().fail_get_all = Some(failure);
        self
    }

    /// 运行中切换 get_all 的失败脚本（测试同一 store 的连续加载）
    pub fn set_fail_get_all(&self, failure: Option<Failure>) {
        self.state.lock().unwrap().fail_get_all = failure;
    }

    pub fn fail_update(self, failure: Failure) -> Self {
        self.state.lock().unwrap().fail_update = Some(failure);
        self
    }

    pub fn fail_delete(self, failure: Failure) -> Self {
        self.state.lock().unwrap().fail_delete = Some(failure);
        self
    }

    /// 成功落库的 create 载荷, 按调用顺序
    pub fn created(&self) -> Vec<VendorFields> {
        self.state.lock().unwrap().created.clone()
    }

    /// create 被调用的总次数（含失败的那次）
    pub fn create_calls(&self) -> usize {
        self.state.lock().unwrap().create_calls
    }

    pub fn stored(&self) -> Vec<Vendor> {
        self.state.lock().unwrap().vendors.clone()
    }
}

#[async_trait]
impl VendorsApi for ScriptedVendorsApi {
    async fn get_all(&self) -> ClientResult<Vec<Vendor>> {
        let inner = self.state.lock().unwrap();
        if let Some(failure) = &inner.fail_get_all {
            return Err(failure.to_error());
        }
        Ok(inner.vendors.clone())
    }

    async fn create(&self, fields: &VendorFields) -> ClientResult<Vendor> {
        let mut inner = self.state.lock().unwrap();
        inner.create_calls += 1;
        if let Some((n, message)) = &inner.fail_create_at {
            if inner.create_calls == *n {
                return Err(ClientError::Rejected(message.clone()));
            }
        }
        let id = inner.next_id;
        inner.next_id += 1;
        let vendor = Vendor {
            id,
            vendor_id: fields.vendor_id.clone(),
            vendor_name: fields.vendor_name.clone(),
        };
        inner.vendors.push(vendor.clone());
        inner.created.push(fields.clone());
        Ok(vendor)
    }

    async fn update(&self, id: i64, fields: &VendorFields) -> ClientResult<Vendor> {
        let mut inner = self.state.lock().unwrap();
        if let Some(failure) = &inner.fail_update {
            return Err(failure.to_error());
        }
        let Some(vendor) = inner.vendors.iter_mut().find(|v| v.id == id) else {
            return Err(ClientError::Rejected(format!("Vendor not found: {}", id)));
        };
        vendor.vendor_id = fields.vendor_id.clone();
        vendor.vendor_name = fields.vendor_name.clone();
        Ok(vendor.clone())
    }

    async fn delete(&self, id: i64) -> ClientResult<()> {
        let mut inner = self.state.lock().unwrap();
        if let Some(failure) = &inner.fail_delete {
            return Err(failure.to_error());
        }
        let before = inner.vendors.len();
        inner.vendors.retain(|v| v.id != id);
        if inner.vendors.len() == before {
            return Err(ClientError::Rejected(format!("Vendor not found: {}", id)));
        }
        Ok(())
    }
}
