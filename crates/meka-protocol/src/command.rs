//! 类型化机器人命令
//!
//! 在裸整数序列之上提供带校验的命令变体。构造即校验：
//! 越界直接返回 [`ProtocolError::ValueOutOfRange`]，绝不钳位。

use crate::{check_signed_byte, Command, ProtocolError};

/// 运动命令操作码
pub const OPCODE_MOTION: i32 = 6;

/// 高度设置操作码
pub const OPCODE_HEIGHT: i32 = 4;

/// 站立高度下界（0 与 128 均非法）
pub const HEIGHT_MIN: i32 = 1;

/// 站立高度上界
pub const HEIGHT_MAX: i32 = 127;

/// 固定"旋转"命令的转向速度
const TURN_SPEED: i8 = 80;

/// 一条经过校验的机器人命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RobotCommand {
    /// 运动：`[6, fwd, strafe, turn]`
    Motion { fwd: i8, strafe: i8, turn: i8 },

    /// 站立高度：`[4, 0, 7, height]`
    Height { height: u8 },

    /// 任意整数序列，逃生舱口；仅受有符号字节范围约束
    Raw { description: String, ints: Vec<i32> },

    /// 停止所有运动：`[6, 0, 0, 0]`
    Stop,

    /// 原地旋转：`[6, 0, 0, 80]`
    Turn,
}

impl RobotCommand {
    /// 构造运动命令，三个分量各自校验 [-128, 127]
    pub fn motion(fwd: i32, strafe: i32, turn: i32) -> Result<Self, ProtocolError> {
        Ok(Self::Motion {
            fwd: check_signed_byte("fwd", fwd)?,
            strafe: check_signed_byte("strafe", strafe)?,
            turn: check_signed_byte("turn", turn)?,
        })
    }

    /// 构造高度命令，高度必须落在 1..=127
    pub fn height(height: i32) -> Result<Self, ProtocolError> {
        if (HEIGHT_MIN..=HEIGHT_MAX).contains(&height) {
            Ok(Self::Height {
                height: height as u8,
            })
        } else {
            Err(ProtocolError::ValueOutOfRange {
                field: "height".to_string(),
                value: height,
                min: HEIGHT_MIN,
                max: HEIGHT_MAX,
            })
        }
    }

    /// 构造原始命令；元素范围推迟到编码时校验
    pub fn raw(description: impl Into<String>, ints: Vec<i32>) -> Self {
        Self::Raw {
            description: description.into(),
            ints,
        }
    }

    /// 日志里使用的命令描述
    pub fn description(&self) -> &str {
        match self {
            Self::Motion { .. } => "Moving Mekamon",
            Self::Height { .. } => "Setting Mekamon height",
            Self::Raw { description, .. } => description,
            Self::Stop => "Stopping Mekamon",
            Self::Turn => "Turning Mekamon",
        }
    }

    /// 展开为待编码的整数序列
    pub fn to_command(&self) -> Command {
        match self {
            Self::Motion { fwd, strafe, turn } => Command::from([
                OPCODE_MOTION,
                i32::from(*fwd),
                i32::from(*strafe),
                i32::from(*turn),
            ]),
            Self::Height { height } => {
                Command::from([OPCODE_HEIGHT, 0, 7, i32::from(*height)])
            },
            Self::Raw { ints, .. } => Command::new(ints.clone()),
            Self::Stop => Command::from([OPCODE_MOTION, 0, 0, 0]),
            Self::Turn => Command::from([OPCODE_MOTION, 0, 0, i32::from(TURN_SPEED)]),
        }
    }
}

/// 会话起始的配对/接管握手序列
///
/// 固定三条命令：`[16]`、`[7,1]`、停止。顺序是协议的一部分，
/// 不得重排或并行发送。
pub fn init_sequence() -> [Command; 3] {
    [
        Command::from([16]),
        Command::from([7, 1]),
        Command::from([OPCODE_MOTION, 0, 0, 0]),
    ]
}
