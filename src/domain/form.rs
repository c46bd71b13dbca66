// ==========================================
// 供应商台账管理 - 表单领域模型
// ==========================================
// 状态机: Closed → Open(Create) | Open(Edit) → Submitting → Closed
// 职责: 仅定义类型; 状态迁移逻辑在 form::FormController
// ==========================================

use crate::domain::vendor::VendorFields;
use serde::{Deserialize, Serialize};

/// 表单模式
///
/// Create 无既有身份; Edit 绑定服务端分配的 id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "id", rename_all = "camelCase")]
pub enum FormMode {
    Create,
    Edit(i64),
}

/// 表单阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormPhase {
    Closed,
    Open,
    Submitting,
}

/// 表单字段标识（字段级错误与输入事件按此寻址）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    VendorId,
    VendorName,
}

impl FormField {
    /// 按线格式字段名解析（前端输入事件携带 camelCase 名称）
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "vendorId" => Some(FormField::VendorId),
            "vendorName" => Some(FormField::VendorName),
            _ => None,
        }
    }
}

// ==========================================
// FormDraft - 表单草稿
// ==========================================
// 生命周期: 随模态框打开创建, 关闭或提交成功后丢弃
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDraft {
    pub vendor_id: String,
    pub vendor_name: String,
}

impl FormDraft {
    /// 转为提交载荷
    ///
    /// 注意: 不做 trim — 仅校验阶段做 trim 判空, 提交值原样发送
    pub fn to_fields(&self) -> VendorFields {
        VendorFields {
            vendor_id: self.vendor_id.clone(),
            vendor_name: self.vendor_name.clone(),
        }
    }
}

// ==========================================
// FieldErrors - 字段级校验错误映射
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_name: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.vendor_id.is_none() && self.vendor_name.is_none()
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::VendorId => self.vendor_id.as_deref(),
            FormField::VendorName => self.vendor_name.as_deref(),
        }
    }

    pub fn clear(&mut self, field: FormField) {
        match field {
            FormField::VendorId => self.vendor_id = None,
            FormField::VendorName => self.vendor_name = None,
        }
    }
}

// ==========================================
// FormSnapshot - 表单状态快照
// ==========================================
// 用途: 序列化给前端渲染（模态框标题/按钮禁用态/字段错误提示）
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSnapshot {
    pub phase: FormPhase,
    pub form_mode: FormMode,
    pub draft: FormDraft,
    pub errors: FieldErrors,
}
