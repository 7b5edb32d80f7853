//! MotionController 构建器

use crate::controller::MotionController;
use crate::error::DriverError;
use meka_protocol::{ProtocolError, HEIGHT_MAX, HEIGHT_MIN};
use meka_uart::UartTransport;
use std::time::Duration;

/// 默认命令间隔
///
/// 实测 0.5s 以下连续写入时固件会开始丢帧。
pub const DEFAULT_MESSAGE_DELAY: Duration = Duration::from_millis(500);

/// 默认站立高度
pub const DEFAULT_HEIGHT: u8 = 50;

/// MotionController 构建器
///
/// # 示例
///
/// ```rust
/// use meka_driver::MotionControllerBuilder;
/// use meka_uart::TraceUart;
/// use std::time::Duration;
///
/// let controller = MotionControllerBuilder::new()
///     .message_delay(Duration::from_millis(200))
///     .default_height(60)
///     .build(TraceUart::new())
///     .unwrap();
/// assert_eq!(controller.current_height(), 60);
/// ```
#[derive(Debug, Clone)]
pub struct MotionControllerBuilder {
    message_delay: Duration,
    default_height: i32,
}

impl Default for MotionControllerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MotionControllerBuilder {
    pub fn new() -> Self {
        Self {
            message_delay: DEFAULT_MESSAGE_DELAY,
            default_height: i32::from(DEFAULT_HEIGHT),
        }
    }

    /// 设置命令间隔（固件节流，见 [`DEFAULT_MESSAGE_DELAY`]）
    pub fn message_delay(mut self, delay: Duration) -> Self {
        self.message_delay = delay;
        self
    }

    /// 设置会话起始的站立高度
    pub fn default_height(mut self, height: i32) -> Self {
        self.default_height = height;
        self
    }

    /// 构建控制器，校验起始高度落在 1..=127
    pub fn build<T: UartTransport>(self, uart: T) -> Result<MotionController<T>, DriverError> {
        if !(HEIGHT_MIN..=HEIGHT_MAX).contains(&self.default_height) {
            return Err(ProtocolError::ValueOutOfRange {
                field: "default_height".to_string(),
                value: self.default_height,
                min: HEIGHT_MIN,
                max: HEIGHT_MAX,
            }
            .into());
        }
        Ok(MotionController::new(
            uart,
            self.message_delay,
            self.default_height as u8,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meka_uart::MockUart;

    #[test]
    fn test_builder_defaults() {
        let controller = MotionControllerBuilder::new().build(MockUart::new()).unwrap();
        assert_eq!(controller.current_height(), DEFAULT_HEIGHT);
        assert_eq!(controller.message_delay(), DEFAULT_MESSAGE_DELAY);
    }

    #[test]
    fn test_builder_rejects_invalid_default_height() {
        assert!(MotionControllerBuilder::new()
            .default_height(0)
            .build(MockUart::new())
            .is_err());
        assert!(MotionControllerBuilder::new()
            .default_height(128)
            .build(MockUart::new())
            .is_err());
    }
}
