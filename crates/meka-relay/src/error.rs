//! 中继层错误类型定义

use meka_driver::DriverError;
use thiserror::Error;

/// 中继层错误类型
#[derive(Error, Debug)]
pub enum RelayError {
    /// 文本消息无法解析成对应命令的字段（单条消息被跳过）
    #[error("Failed to parse message {message:?}: {reason}")]
    Parse { message: String, reason: String },

    /// 驱动层错误（协议校验失败可恢复；传输失败致命）
    #[error("Driver error: {0}")]
    Driver(#[from] DriverError),

    /// 消息接收失败（socket 错误，对会话致命）
    #[error("Receive error: {0}")]
    Receive(#[from] std::io::Error),

    /// 配置文件无法读取或包含无法识别的选项
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl RelayError {
    pub(crate) fn parse(message: &str, reason: impl Into<String>) -> Self {
        Self::Parse {
            message: message.to_string(),
            reason: reason.into(),
        }
    }

    /// 该错误是否终结当前会话
    ///
    /// 解析错误与单条命令的取值错误跳过当条消息后继续；
    /// socket/传输错误终止会话。
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::Parse { .. } => false,
            Self::Driver(e) => e.is_fatal(),
            Self::Receive(_) => true,
            Self::InvalidConfig(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meka_protocol::ProtocolError;
    use meka_uart::TransportError;

    #[test]
    fn test_parse_errors_are_recoverable() {
        assert!(!RelayError::parse("motion,6,a,b,c", "bad int").is_fatal());
    }

    #[test]
    fn test_range_errors_are_recoverable() {
        let err: RelayError = DriverError::from(ProtocolError::ValueOutOfRange {
            field: "fwd".to_string(),
            value: 200,
            min: -128,
            max: 127,
        })
        .into();
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_transport_errors_are_fatal() {
        let err: RelayError = DriverError::from(TransportError::Disconnected).into();
        assert!(err.is_fatal());
    }
}
