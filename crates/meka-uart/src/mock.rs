//! 测试用 Mock 传输
//!
//! 记录写入的帧供断言，并支持脚本化注入失败。

use crate::{TransportError, UartTransport};
use std::sync::{Arc, Mutex};

/// MockUart 用于测试
///
/// 内部状态用 `Arc<Mutex<..>>` 共享，`clone` 出的句柄观察同一
/// 份写入记录，方便在把传输移交给控制器之后仍能断言。
#[derive(Clone, Default)]
pub struct MockUart {
    written: Arc<Mutex<Vec<Vec<u8>>>>,
    fail_after: Arc<Mutex<Option<usize>>>,
}

impl MockUart {
    pub fn new() -> Self {
        Self::default()
    }

    /// 前 `n` 次写入成功，之后的写入返回 `Disconnected`
    pub fn fail_after(&self, n: usize) {
        *self.fail_after.lock().unwrap() = Some(n);
    }

    /// 取出目前记录的全部帧（清空记录）
    pub fn take_written(&self) -> Vec<Vec<u8>> {
        std::mem::take(&mut *self.written.lock().unwrap())
    }

    /// 目前记录的帧，十六进制形式
    pub fn written_hex(&self) -> Vec<String> {
        self.written.lock().unwrap().iter().map(hex::encode).collect()
    }
}

impl UartTransport for MockUart {
    fn write(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        if let Some(n) = *self.fail_after.lock().unwrap() {
            if self.written.lock().unwrap().len() >= n {
                return Err(TransportError::Disconnected);
            }
        }
        self.written.lock().unwrap().push(bytes.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_uart_records_writes() {
        let mut uart = MockUart::new();
        let handle = uart.clone();
        uart.write(&[0x01, 0x02]).unwrap();
        assert_eq!(handle.written_hex(), vec!["0102".to_string()]);
    }

    #[test]
    fn test_mock_uart_scripted_failure() {
        let mut uart = MockUart::new();
        uart.fail_after(1);
        uart.write(&[0x01]).unwrap();
        assert!(matches!(
            uart.write(&[0x02]),
            Err(TransportError::Disconnected)
        ));
        assert_eq!(uart.take_written().len(), 1);
    }
}
