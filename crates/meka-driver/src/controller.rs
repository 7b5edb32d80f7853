//! MotionController - 设备侧控制接口
//!
//! 一个控制器对应一个已连接的设备会话，独占传输句柄。
//! 所有高层操作都收敛到 [`MotionController::execute`]：
//! 编码 → 写入 → 固定间隔休眠。间隔无论写入成败都会执行，
//! 命令串行推进本身就是速率限制的实现方式。

use crate::error::DriverError;
use meka_protocol::{encode_frame, init_sequence, Command, RobotCommand};
use meka_uart::UartTransport;
use std::time::Duration;
use tracing::info;

/// Mekamon 运动控制器
///
/// 设备侧状态只有一个字段：当前站立高度。它只在高度命令
/// **成功写入之后** 才更新，发送失败不会留下半新状态。
pub struct MotionController<T: UartTransport> {
    uart: T,
    message_delay: Duration,
    current_height: u8,
}

impl<T: UartTransport> MotionController<T> {
    pub(crate) fn new(uart: T, message_delay: Duration, current_height: u8) -> Self {
        Self {
            uart,
            message_delay,
            current_height,
        }
    }

    /// 当前站立高度
    pub fn current_height(&self) -> u8 {
        self.current_height
    }

    /// 配置的命令间隔
    pub fn message_delay(&self) -> Duration {
        self.message_delay
    }

    /// 发送原语：编码 → 写入 → 节流休眠
    ///
    /// 返回写入帧的十六进制文本。休眠不以写入成功为条件：
    /// 即使失败，下一条命令仍要等满间隔。
    pub fn execute(&mut self, command: &Command, desc: &str) -> Result<String, DriverError> {
        let frame = encode_frame(command)?;
        let hexstr = hex::encode(&frame);
        info!("  -- {}: [{}]", desc, hexstr);

        let result = self.uart.write(&frame);
        spin_sleep::sleep(self.message_delay);
        result?;

        Ok(hexstr)
    }

    /// 发送一条类型化命令
    pub fn send(&mut self, command: &RobotCommand) -> Result<String, DriverError> {
        self.execute(&command.to_command(), command.description())
    }

    /// 接管握手：按固定顺序发送三条初始化命令
    ///
    /// 任何一条失败即中止剩余序列并上抛错误。
    pub fn pwn_device(&mut self) -> Result<(), DriverError> {
        let seq = init_sequence();
        for (index, command) in seq.iter().enumerate() {
            self.execute(command, &pwn_desc(index, seq.len()))?;
        }
        Ok(())
    }

    /// 发送运动命令 `[6, fwd, strafe, turn]`
    pub fn move_motion(&mut self, fwd: i32, strafe: i32, turn: i32) -> Result<(), DriverError> {
        let command = RobotCommand::motion(fwd, strafe, turn)?;
        info!("Moving Mekamon -- fwd: {} strafe: {} turn: {}", fwd, strafe, turn);
        self.send(&command)?;
        Ok(())
    }

    /// 设置站立高度 `[4, 0, 7, height]`
    ///
    /// `current_height` 在发送成功后才更新。
    pub fn set_height(&mut self, height: i32) -> Result<(), DriverError> {
        let command = RobotCommand::height(height)?;
        self.send(&command)?;
        self.current_height = height as u8;
        Ok(())
    }

    /// 发送任意整数序列（手动调试的逃生舱口）
    ///
    /// 跳过领域校验，元素仍受有符号字节范围约束。
    pub fn send_raw(&mut self, description: &str, ints: Vec<i32>) -> Result<(), DriverError> {
        let command = RobotCommand::raw(description, ints);
        self.send(&command)?;
        Ok(())
    }

    /// 停止所有运动
    pub fn stop(&mut self) -> Result<(), DriverError> {
        self.send(&RobotCommand::Stop)?;
        Ok(())
    }

    /// 原地旋转
    pub fn turn(&mut self) -> Result<(), DriverError> {
        self.send(&RobotCommand::Turn)?;
        Ok(())
    }
}

/// 握手日志描述，序号保持 0 起始
fn pwn_desc(index: usize, total: usize) -> String {
    format!("Pwning Mekamon message [{}/{}]", index, total)
}
