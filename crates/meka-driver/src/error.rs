//! 驱动层错误类型定义

use meka_protocol::ProtocolError;
use meka_uart::TransportError;
use thiserror::Error;

/// 驱动层错误类型
#[derive(Error, Debug)]
pub enum DriverError {
    /// 协议校验/编码错误（单条命令被拒绝，会话可继续）
    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// 传输错误（设备断开等，对当前会话致命）
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

impl DriverError {
    /// 该错误是否终结当前会话
    ///
    /// 协议错误只拒绝单条命令；传输错误意味着设备不可达。
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_errors_are_recoverable() {
        let err: DriverError = ProtocolError::ValueOutOfRange {
            field: "height".to_string(),
            value: 300,
            min: 1,
            max: 127,
        }
        .into();
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_transport_errors_are_fatal() {
        let err: DriverError = TransportError::Disconnected.into();
        assert!(err.is_fatal());
        assert!(format!("{}", err).contains("disconnected"));
    }
}
