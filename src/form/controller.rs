// ==========================================
// 供应商台账管理 - 表单状态机
// ==========================================
// 状态机: Closed → Open(Create) | Open(Edit) → Submitting → Closed
// 职责: 纯状态迁移与校验, 不做任何外部接口调用
// 防御: 模态框关闭后到达的迟到完成必须是 no-op（请求不可取消）
// ==========================================

use crate::domain::{
    FieldErrors, FormDraft, FormField, FormMode, FormPhase, FormSnapshot, Vendor, VendorFields,
};

/// 字段级"必填"校验文案
pub const VENDOR_ID_REQUIRED: &str = "Vendor ID is required";
pub const VENDOR_NAME_REQUIRED: &str = "Vendor Name is required";

// ==========================================
// FormController - 新增/编辑表单控制器
// ==========================================
pub struct FormController {
    phase: FormPhase,
    mode: FormMode,
    draft: FormDraft,
    errors: FieldErrors,
}

impl FormController {
    pub fn new() -> Self {
        Self {
            phase: FormPhase::Closed,
            mode: FormMode::Create,
            draft: FormDraft::default(),
            errors: FieldErrors::default(),
        }
    }

    // ==========================================
    // 模态框开关
    // ==========================================

    /// 打开新增表单（空草稿, 无既有身份）
    pub fn open_create(&mut self) {
        self.phase = FormPhase::Open;
        self.mode = FormMode::Create;
        self.draft = FormDraft::default();
        self.errors = FieldErrors::default();
    }

    /// 打开编辑表单（草稿预填既有字段, 绑定服务端 id）
    pub fn open_edit(&mut self, vendor: &Vendor) {
        self.phase = FormPhase::Open;
        self.mode = FormMode::Edit(vendor.id);
        self.draft = FormDraft {
            vendor_id: vendor.vendor_id.clone(),
            vendor_name: vendor.vendor_name.clone(),
        };
        self.errors = FieldErrors::default();
    }

    /// 关闭模态框, 丢弃草稿与错误
    ///
    /// 任何阶段均可调用; 在 Submitting 阶段关闭不会中止在途请求,
    /// 迟到的 finish_submit 会发现表单已关闭并保持 no-op
    pub fn close(&mut self) {
        self.phase = FormPhase::Closed;
        self.mode = FormMode::Create;
        self.draft = FormDraft::default();
        self.errors = FieldErrors::default();
    }

    // ==========================================
    // 输入与校验
    // ==========================================

    /// 写入字段值; 编辑即清除该字段的校验错误
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::VendorId => self.draft.vendor_id = value,
            FormField::VendorName => self.draft.vendor_name = value,
        }
        self.errors.clear(field);
    }

    /// 校验草稿: 两字段 trim 后判空, 失败写入字段级错误
    ///
    /// 注意: trim 仅用于判空, 不回写草稿 — 提交值保持原样
    pub fn validate(&mut self) -> bool {
        let mut errors = FieldErrors::default();
        if self.draft.vendor_id.trim().is_empty() {
            errors.vendor_id = Some(VENDOR_ID_REQUIRED.to_string());
        }
        if self.draft.vendor_name.trim().is_empty() {
            errors.vendor_name = Some(VENDOR_NAME_REQUIRED.to_string());
        }
        let passed = errors.is_empty();
        self.errors = errors;
        passed
    }

    // ==========================================
    // 提交生命周期
    // ==========================================

    /// 进入 Submitting 阶段, 取出提交载荷
    ///
    /// # 返回
    /// - Some((mode, fields)): 表单处于 Open 阶段, 已进入 Submitting
    /// - None: 表单未打开或已在提交中（等价于按钮禁用态）
    pub fn begin_submit(&mut self) -> Option<(FormMode, VendorFields)> {
        if self.phase != FormPhase::Open {
            return None;
        }
        self.phase = FormPhase::Submitting;
        Some((self.mode, self.draft.to_fields()))
    }

    /// 结束提交: 成功则关闭并清空, 失败则回到 Open（草稿保留）
    ///
    /// 提交标志在两种结果下都会复位; 表单已被用户关闭时为 no-op
    pub fn finish_submit(&mut self, success: bool) {
        if self.phase != FormPhase::Submitting {
            return;
        }
        if success {
            self.close();
        } else {
            self.phase = FormPhase::Open;
        }
    }

    // ==========================================
    // 只读访问
    // ==========================================

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_open(&self) -> bool {
        self.phase != FormPhase::Closed
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// 状态快照（序列化给前端）
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            phase: self.phase,
            form_mode: self.mode,
            draft: self.draft.clone(),
            errors: self.errors.clone(),
        }
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}
