//! 命令帧构建
//!
//! 把整数命令序列变成可直接写入 UART 的帧：
//!
//! ```text
//! pack（有符号字节） → COBS 填充 → 追加校验和 → 追加 0x00 → 十六进制
//! ```
//!
//! 全程为纯函数：同一命令永远产生同一帧，无时钟、无状态依赖。

use crate::{check_signed_byte, checksum::checksum, cobs, ProtocolError};

/// 帧终止符
pub const FRAME_TERMINATOR: u8 = 0x00;

/// 一条待编码的机器人命令
///
/// 命令是一个有序整数序列，首元素按约定为操作码（`6`=运动、
/// `4`=高度等）。构建后不可变；元素在编码时才做有符号字节
/// 范围校验，越界在产生任何字节之前失败。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    ints: Vec<i32>,
}

impl Command {
    /// 从整数序列创建命令
    pub fn new(ints: impl Into<Vec<i32>>) -> Self {
        Self { ints: ints.into() }
    }

    /// 命令的整数序列
    pub fn ints(&self) -> &[i32] {
        &self.ints
    }

    /// 操作码（首元素），空命令返回 `None`
    pub fn opcode(&self) -> Option<i32> {
        self.ints.first().copied()
    }
}

impl From<&[i32]> for Command {
    fn from(ints: &[i32]) -> Self {
        Self::new(ints)
    }
}

impl<const N: usize> From<[i32; N]> for Command {
    fn from(ints: [i32; N]) -> Self {
        Self::new(ints.to_vec())
    }
}

/// 把命令元素打包为二补数字节
///
/// 任一元素越界即失败，不产出部分结果。
fn pack_signed(ints: &[i32]) -> Result<Vec<u8>, ProtocolError> {
    let mut raw = Vec::with_capacity(ints.len());
    for (i, &v) in ints.iter().enumerate() {
        let b = check_signed_byte(&format!("command[{}]", i), v)?;
        raw.push(b as u8);
    }
    Ok(raw)
}

/// 编码为线上帧字节
///
/// 返回 `COBS(packed) ++ checksum ++ 0x00`，可直接写入传输层。
pub fn encode_frame(cmd: &Command) -> Result<Vec<u8>, ProtocolError> {
    let raw = pack_signed(cmd.ints())?;
    let mut frame = cobs::stuff(&raw);
    frame.push(checksum(&frame));
    frame.push(FRAME_TERMINATOR);
    Ok(frame)
}

/// 编码为小写十六进制文本
///
/// 两字符一字节，无分隔符、无前缀。这是日志与协议文档里帧的
/// 规范表示；传输层写入的是 [`encode_frame`] 的原始字节。
pub fn encode(cmd: &Command) -> Result<String, ProtocolError> {
    Ok(hex::encode(encode_frame(cmd)?))
}
