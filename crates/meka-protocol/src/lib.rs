//! # Meka Protocol
//!
//! Mekamon BLE/UART 命令帧协议定义（无硬件依赖）
//!
//! ## 模块
//!
//! - `checksum`: 帧校验和计算
//! - `cobs`: Consistent Overhead Byte Stuffing 编码
//! - `frame`: 命令帧构建（打包 → 填充 → 校验和 → 终止符 → 十六进制）
//! - `command`: 类型化机器人命令及取值校验
//!
//! ## 帧格式
//!
//! 每条命令是一个有符号字节（[-128, 127]）序列，首元素为操作码。
//! 线上帧格式为：
//!
//! ```text
//! COBS(signed_bytes) ++ checksum ++ 0x00
//! ```
//!
//! 协议只需要编码方向：固件发回的帧不在本 crate 的解析范围内。
//! 命令字节语义由 Wes Freeman（Wezzoid）对 Mekamon 官方 App 的
//! 逆向工程得出，见 <https://hackaday.io/project/159212>。

pub mod checksum;
pub mod cobs;
pub mod command;
pub mod frame;

// 重新导出常用类型
pub use checksum::checksum;
pub use command::{init_sequence, RobotCommand, HEIGHT_MAX, HEIGHT_MIN, OPCODE_HEIGHT, OPCODE_MOTION};
pub use frame::{encode, encode_frame, Command, FRAME_TERMINATOR};

use thiserror::Error;

/// 有符号字节的下界
pub const SIGNED_BYTE_MIN: i32 = -128;

/// 有符号字节的上界
pub const SIGNED_BYTE_MAX: i32 = 127;

/// 协议编码错误类型
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProtocolError {
    /// 数值超出字段允许范围
    ///
    /// 校验失败即拒绝，绝不静默截断或钳位。
    #[error("{field} out of range: {value} not in [{min}, {max}]")]
    ValueOutOfRange {
        field: String,
        value: i32,
        min: i32,
        max: i32,
    },

    /// 内部编码不变量被破坏（上游校验通过后不应出现）
    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl ProtocolError {
    /// 构造一个有符号字节越界错误
    pub(crate) fn signed_byte(field: impl Into<String>, value: i32) -> Self {
        Self::ValueOutOfRange {
            field: field.into(),
            value,
            min: SIGNED_BYTE_MIN,
            max: SIGNED_BYTE_MAX,
        }
    }
}

/// 校验一个值落在有符号字节范围内
pub fn check_signed_byte(field: &str, value: i32) -> Result<i8, ProtocolError> {
    if (SIGNED_BYTE_MIN..=SIGNED_BYTE_MAX).contains(&value) {
        Ok(value as i8)
    } else {
        Err(ProtocolError::signed_byte(field, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_signed_byte_bounds() {
        assert_eq!(check_signed_byte("v", 127), Ok(127i8));
        assert_eq!(check_signed_byte("v", -128), Ok(-128i8));
        assert!(check_signed_byte("v", 128).is_err());
        assert!(check_signed_byte("v", -129).is_err());
    }

    #[test]
    fn test_out_of_range_error_names_field() {
        let err = check_signed_byte("turn", 200).unwrap_err();
        let msg = format!("{}", err);
        assert!(msg.contains("turn"), "error message: {}", msg);
        assert!(msg.contains("200"), "error message: {}", msg);
    }
}
