//! 会话中继循环
//!
//! 单线程、全阻塞：收一条消息 → 分类 → 派发到控制器 →
//! 控制器内部的固定间隔完成节流，然后才收下一条。没有队列，
//! 串行化本身就是速率限制。

use crate::classify::{classify, CommandKind};
use crate::error::RelayError;
use meka_driver::{DriverError, MotionController};
use meka_uart::UartTransport;
use tracing::{info, warn};

/// 阻塞式文本消息源
///
/// 一次调用返回一条消息；socket 错误对会话致命。
pub trait TextSource {
    fn receive(&mut self) -> Result<String, RelayError>;
}

impl<S: TextSource + ?Sized> TextSource for &mut S {
    fn receive(&mut self) -> Result<String, RelayError> {
        (**self).receive()
    }
}

/// 文本命令中继
///
/// 独占一个消息源和一个控制器；`run` 返回即会话结束，
/// 善后（设备断开、socket 释放）由调用方执行。
pub struct CommandRelay<S: TextSource, T: UartTransport> {
    source: S,
    controller: MotionController<T>,
}

impl<S: TextSource, T: UartTransport> CommandRelay<S, T> {
    pub fn new(source: S, controller: MotionController<T>) -> Self {
        Self { source, controller }
    }

    /// 运行会话循环直到收到 `exit` 或发生致命错误
    ///
    /// 单条消息的解析失败和取值越界只跳过该消息；传输/接收
    /// 错误向上传播，由调用方统一走善后路径。
    pub fn run(&mut self) -> Result<(), RelayError> {
        loop {
            let message = self.source.receive()?;

            let kind = match classify(&message) {
                Ok(kind) => kind,
                Err(err) => {
                    warn!("Skipping malformed message: {}", err);
                    continue;
                },
            };

            match kind {
                CommandKind::Exit => {
                    info!("Exit message received, terminating session");
                    return Ok(());
                },
                CommandKind::Motion { fwd, strafe, turn } => {
                    dispatch(self.controller.move_motion(fwd, strafe, turn))?;
                },
                CommandKind::Height { height } => {
                    dispatch(self.controller.set_height(height))?;
                },
                CommandKind::Raw { description, ints } => {
                    info!("Processing raw message: {:?}", message);
                    dispatch(self.controller.send_raw(&description, ints))?;
                },
                CommandKind::Unrecognized => {
                    // 约定的回退行为：原地转一下再停住
                    warn!("Unrecognized message {:?}, falling back to turn + stop", message);
                    dispatch(self.controller.turn())?;
                    dispatch(self.controller.stop())?;
                },
            }
        }
    }

    /// 拆回消息源与控制器（供善后/复用）
    pub fn into_parts(self) -> (S, MotionController<T>) {
        (self.source, self.controller)
    }
}

/// 可恢复错误记日志后吞掉，致命错误上抛
fn dispatch(result: Result<(), DriverError>) -> Result<(), RelayError> {
    match result {
        Ok(()) => Ok(()),
        Err(err) if err.is_fatal() => Err(err.into()),
        Err(err) => {
            warn!("Command rejected: {}", err);
            Ok(())
        },
    }
}
