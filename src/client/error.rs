// ==========================================
// 供应商台账管理 - 协作方错误类型
// ==========================================
// 工具: thiserror 派生宏
// 契约: 拒绝消息若存在则对用户原样展示,
//       否则由调用方按操作类别使用固定兜底文案
// ==========================================

use thiserror::Error;

/// 协作方错误类型
#[derive(Error, Debug)]
pub enum ClientError {
    /// 服务端拒绝, 携带可展示的业务消息
    #[error("{0}")]
    Rejected(String),

    /// 传输层失败（网络中断/超时/解码失败, 无业务消息）
    #[error("transport failure: {0}")]
    Transport(String),

    /// 通用错误
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ClientError {
    /// 取可向用户展示的消息; None 表示应使用操作级兜底文案
    pub fn display_message(&self) -> Option<&str> {
        match self {
            ClientError::Rejected(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Result 类型别名
pub type ClientResult<T> = Result<T, ClientError>;
