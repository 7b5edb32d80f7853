//! # Meka Driver
//!
//! 面向设备的控制层：持有传输句柄与设备侧状态（当前站立高度），
//! 提供高层操作（接管握手、运动、高度、原始命令、停止、旋转），
//! 并对每次发送强制执行固定的命令间隔。
//!
//! 固件无法承受不限速的连续写入，因此节流不是可选项：所有发送
//! 路径都收敛到同一个 `execute` 原语，按配置的间隔串行推进。

pub mod builder;
pub mod controller;
pub mod error;

// 重新导出常用类型
pub use builder::MotionControllerBuilder;
pub use controller::MotionController;
pub use error::DriverError;
