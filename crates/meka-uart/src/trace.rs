//! Dry-run 传输：只记日志，不触硬件

use crate::{TransportError, UartTransport};
use tracing::info;

/// 把每次写入以十六进制记入日志的传输实现
///
/// 用于 `relayd --dry-run` 以及没有 BLE 硬件的集成调试。
/// 永不失败。
#[derive(Debug, Default)]
pub struct TraceUart {
    frames_written: u64,
}

impl TraceUart {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已写入的帧数
    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }
}

impl UartTransport for TraceUart {
    fn write(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        self.frames_written += 1;
        info!("uart write [{}]", hex::encode(bytes));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_uart_counts_writes() {
        let mut uart = TraceUart::new();
        uart.write(&[0x02, 0x10, 0x13, 0x00]).unwrap();
        uart.write(&[0x03, 0x07, 0x01, 0x0c, 0x00]).unwrap();
        assert_eq!(uart.frames_written(), 2);
    }
}
