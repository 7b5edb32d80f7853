//! 文本消息分类器
//!
//! 按固定优先级对消息做大小写不敏感的子串匹配：
//!
//! ```text
//! exit > motion > height > raw（其余可解析的逗号分隔整数） > fallback
//! ```
//!
//! 匹配是子串式且顺序敏感的：同时含多个关键字的消息按列出的
//! 优先级派发（`"motion,exit"` 是退出，不是运动命令），不看
//! 哪个关键字"更具体"。分类结果是穷尽的枚举，派发由类型系统
//! 检查而不是散落的字符串嗅探。

use crate::error::RelayError;

/// 分类后的命令类别
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandKind {
    /// 终止会话
    Exit,

    /// 运动命令字段
    Motion { fwd: i32, strafe: i32, turn: i32 },

    /// 高度命令字段
    Height { height: i32 },

    /// 原始整数序列，首字段为描述
    Raw { description: String, ints: Vec<i32> },

    /// 无匹配：触发 turn + stop 回退
    Unrecognized,
}

/// 运动消息的固定操作码字段
const MOTION_OPCODE: i32 = 6;

/// 对一条文本消息分类
///
/// 关键字命中但字段不合法（数量、数值类型、运动操作码不为 6）
/// 返回 [`RelayError::Parse`]；调用方跳过该消息继续会话。
/// 完全无匹配不是错误，返回 [`CommandKind::Unrecognized`]。
pub fn classify(message: &str) -> Result<CommandKind, RelayError> {
    let lower = message.to_lowercase();

    if lower.contains("exit") {
        return Ok(CommandKind::Exit);
    }

    if lower.contains("motion") {
        return parse_motion(message);
    }

    if lower.contains("height") {
        return parse_height(message);
    }

    parse_raw(message)
}

fn parse_int(message: &str, field: &str, text: &str) -> Result<i32, RelayError> {
    text.trim()
        .parse::<i32>()
        .map_err(|_| RelayError::parse(message, format!("{} is not an integer: {:?}", field, text)))
}

/// `"motion,6,<fwd>,<strafe>,<turn>"`
fn parse_motion(message: &str) -> Result<CommandKind, RelayError> {
    let fields: Vec<&str> = message.split(',').collect();
    if fields.len() != 5 {
        return Err(RelayError::parse(
            message,
            format!("motion expects 5 fields, got {}", fields.len()),
        ));
    }
    let opcode = parse_int(message, "opcode", fields[1])?;
    if opcode != MOTION_OPCODE {
        return Err(RelayError::parse(
            message,
            format!("motion opcode must be {}, got {}", MOTION_OPCODE, opcode),
        ));
    }
    Ok(CommandKind::Motion {
        fwd: parse_int(message, "fwd", fields[2])?,
        strafe: parse_int(message, "strafe", fields[3])?,
        turn: parse_int(message, "turn", fields[4])?,
    })
}

/// `"height,<value>"`
fn parse_height(message: &str) -> Result<CommandKind, RelayError> {
    let fields: Vec<&str> = message.split(',').collect();
    if fields.len() != 2 {
        return Err(RelayError::parse(
            message,
            format!("height expects 2 fields, got {}", fields.len()),
        ));
    }
    Ok(CommandKind::Height {
        height: parse_int(message, "height", fields[1])?,
    })
}

/// `"<description>,<i0>,<i1>,..."` — 没有保留关键字，只要
/// 描述后的所有字段都是整数就按原始命令处理，否则走回退。
fn parse_raw(message: &str) -> Result<CommandKind, RelayError> {
    let fields: Vec<&str> = message.split(',').collect();
    if fields.len() < 2 {
        return Ok(CommandKind::Unrecognized);
    }
    let mut ints = Vec::with_capacity(fields.len() - 1);
    for field in &fields[1..] {
        match field.trim().parse::<i32>() {
            Ok(v) => ints.push(v),
            Err(_) => return Ok(CommandKind::Unrecognized),
        }
    }
    Ok(CommandKind::Raw {
        description: fields[0].trim().to_string(),
        ints,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_takes_priority_over_motion() {
        assert_eq!(classify("motion,exit").unwrap(), CommandKind::Exit);
        assert_eq!(classify("EXIT").unwrap(), CommandKind::Exit);
        assert_eq!(classify("please exit now").unwrap(), CommandKind::Exit);
    }

    #[test]
    fn test_motion_parsing() {
        assert_eq!(
            classify("motion,6,1,-2,10").unwrap(),
            CommandKind::Motion {
                fwd: 1,
                strafe: -2,
                turn: 10
            }
        );
        // 大小写不敏感
        assert_eq!(
            classify("MOTION,6,0,0,0").unwrap(),
            CommandKind::Motion {
                fwd: 0,
                strafe: 0,
                turn: 0
            }
        );
    }

    #[test]
    fn test_motion_field_count_is_enforced() {
        assert!(classify("motion,6,1,2").is_err());
        assert!(classify("motion,6,1,2,3,4").is_err());
    }

    #[test]
    fn test_motion_bad_int_is_parse_error() {
        let err = classify("motion,6,a,0,0").unwrap_err();
        assert!(!err.is_fatal());
        assert!(format!("{}", err).contains("fwd"));
    }

    #[test]
    fn test_motion_unexpected_opcode_is_parse_error() {
        assert!(classify("motion,7,0,0,0").is_err());
    }

    #[test]
    fn test_height_parsing() {
        assert_eq!(
            classify("height,55").unwrap(),
            CommandKind::Height { height: 55 }
        );
        assert!(classify("height").is_err());
        assert!(classify("height,55,1").is_err());
        assert!(classify("height,tall").is_err());
    }

    #[test]
    fn test_raw_parsing() {
        assert_eq!(
            classify("probe,16").unwrap(),
            CommandKind::Raw {
                description: "probe".to_string(),
                ints: vec![16]
            }
        );
        assert_eq!(
            classify("leg wiggle,7,1").unwrap(),
            CommandKind::Raw {
                description: "leg wiggle".to_string(),
                ints: vec![7, 1]
            }
        );
    }

    #[test]
    fn test_unrecognized_messages() {
        assert_eq!(classify("hello").unwrap(), CommandKind::Unrecognized);
        assert_eq!(classify("").unwrap(), CommandKind::Unrecognized);
        assert_eq!(classify("probe,1,abc").unwrap(), CommandKind::Unrecognized);
    }

    #[test]
    fn test_keyword_wins_over_raw_shape() {
        // 描述里带关键字的消息按关键字派发，这是子串匹配的约定行为
        assert!(classify("height probe,1,2").is_err());
    }
}
