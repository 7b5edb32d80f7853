//! # Meka Relay
//!
//! 把网络上收到的文本控制消息转成设备命令的中继层。
//!
//! ## 模块
//!
//! - `classify`: 文本消息分类器（关键字优先级 → 类型化命令变体）
//! - `relay`: 阻塞式会话循环（接收 → 分类 → 派发 → 节流）
//! - `config`: 中继配置（绑定地址、命令间隔、初始高度等）
//! - `udp`: 基于 `std::net::UdpSocket` 的消息源
//!
//! ## 会话模型
//!
//! 一个会话 = 一个中继 + 一个控制器 + 一个传输，单线程串行，
//! 没有队列也没有并发派发。含 `exit` 的消息或传输错误结束会话；
//! 无论以哪种方式结束，设备断开等善后都由调用方在返回后执行。

pub mod classify;
pub mod config;
pub mod error;
pub mod relay;
pub mod udp;

// 重新导出常用类型
pub use classify::{classify, CommandKind};
pub use config::RelayConfig;
pub use error::RelayError;
pub use relay::{CommandRelay, TextSource};
pub use udp::UdpTextSource;
