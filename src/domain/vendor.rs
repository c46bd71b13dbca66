// ==========================================
// 供应商台账管理 - 供应商领域模型
// ==========================================
// 对齐: 协作方 REST 契约 (vendorsApi), 线格式为 camelCase JSON
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Vendor - 供应商记录
// ==========================================
// 红线: id 由服务端分配, 客户端不可变更
// 生命周期: 表单提交或 CSV 导入创建; 按 id 原地更新/删除;
//           列表在每次成功变更后整表重拉, 不做增量合并
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    /// 服务端分配的主键
    pub id: i64,
    /// 用户自定义业务键（客户端不校验唯一性）
    pub vendor_id: String,
    /// 供应商名称
    pub vendor_name: String,
}

// ==========================================
// VendorFields - 创建/更新载荷
// ==========================================
// 用途: 表单提交与导入管道的候选记录共用此结构
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorFields {
    pub vendor_id: String,
    pub vendor_name: String,
}

impl VendorFields {
    pub fn new(vendor_id: impl Into<String>, vendor_name: impl Into<String>) -> Self {
        Self {
            vendor_id: vendor_id.into(),
            vendor_name: vendor_name.into(),
        }
    }
}

impl Vendor {
    /// 取出可编辑字段（进入编辑表单时使用）
    pub fn fields(&self) -> VendorFields {
        VendorFields {
            vendor_id: self.vendor_id.clone(),
            vendor_name: self.vendor_name.clone(),
        }
    }
}
