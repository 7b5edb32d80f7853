//! # Meka UART Adapter Layer
//!
//! BLE/UART 传输抽象层，提供统一的写入接口。
//!
//! 真实的 BLE 适配器（扫描、连接、服务发现、断开）属于外部
//! 集成层，不在本 crate 范围内：集成方为自己的 BLE 栈实现
//! [`UartTransport`] 即可。本 crate 自带两个实现：
//!
//! - [`TraceUart`]：把待写入的帧以十六进制记入日志，用于
//!   无硬件的 dry-run
//! - `MockUart`（`mock` feature）：记录写入的帧供测试断言

use thiserror::Error;

pub mod trace;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use trace::TraceUart;

#[cfg(any(test, feature = "mock"))]
pub use mock::MockUart;

/// 传输层统一错误类型
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    /// 设备已断开，对当前会话是致命错误
    #[error("Device disconnected")]
    Disconnected,

    #[error("Device Error: {0}")]
    Device(String),
}

/// 面向设备的只写传输
///
/// 一次 `write` 对应一条完整的命令帧。实现方不做分帧，也不
/// 追加终止符——帧已经是线上格式。
pub trait UartTransport {
    fn write(&mut self, bytes: &[u8]) -> Result<(), TransportError>;
}

impl<T: UartTransport + ?Sized> UartTransport for &mut T {
    fn write(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        (**self).write(bytes)
    }
}

impl<T: UartTransport + ?Sized> UartTransport for Box<T> {
    fn write(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        (**self).write(bytes)
    }
}
