//! # relayd
//!
//! UDP → Mekamon 命令中继守护进程。
//!
//! 接收逗号分隔的文本控制消息（`motion,6,<fwd>,<strafe>,<turn>`、
//! `height,<h>`、任意原始整数序列、`exit`），转成帧后推给设备。
//!
//! BLE 适配器本身在集成层：本二进制内置的传输把帧以十六进制
//! 记入日志（dry-run），接真实设备时以 `meka-relay` 为库、
//! 给自己的 BLE 栈实现 `UartTransport` 即可。
//!
//! ```bash
//! relayd --config relayd.toml
//! # 另一个终端
//! echo -n "motion,6,0,0,10" | nc -u -w0 192.168.4.2 6789
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use meka_driver::MotionControllerBuilder;
use meka_relay::{CommandRelay, RelayConfig, UdpTextSource};
use meka_uart::TraceUart;
use std::net::UdpSocket;
use std::path::PathBuf;
use tracing::{error, info};

/// UDP → Mekamon 命令中继
#[derive(Parser, Debug)]
#[command(name = "relayd")]
#[command(about = "UDP-to-BLE command relay daemon for Mekamon robots", long_about = None)]
#[command(version)]
struct Cli {
    /// 配置文件路径（不存在时使用默认配置）
    #[arg(short, long, default_value = "relayd.toml")]
    config: PathBuf,

    /// 覆盖绑定地址
    #[arg(long)]
    bind: Option<String>,

    /// 覆盖 UDP 端口
    #[arg(long)]
    port: Option<u16>,

    /// 覆盖命令间隔（毫秒）
    #[arg(long)]
    delay_ms: Option<u64>,

    /// 覆盖起始站立高度
    #[arg(long)]
    height: Option<i32>,
}

fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("relayd=info".parse()?)
                .add_directive("meka_driver=info".parse()?)
                .add_directive("meka_relay=info".parse()?)
                .add_directive("meka_uart=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    let mut config = RelayConfig::load(&cli.config).context("loading config")?;
    if let Some(bind) = cli.bind {
        config.bind_addr = bind;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.message_delay_ms = delay_ms;
    }
    if let Some(height) = cli.height {
        config.default_height = height;
    }
    info!(
        "relayd starting: bind={} delay={}ms height={} search_timeout={}s",
        config.socket_addr(),
        config.message_delay_ms,
        config.default_height,
        config.search_timeout_secs,
    );

    let source = UdpTextSource::bind(config.socket_addr()).context("binding UDP socket")?;

    // Ctrl-C 走和 exit 消息同一条善后路径：给自己发一条 exit
    let local_addr = source.local_addr()?;
    ctrlc::set_handler(move || {
        if let Ok(sock) = UdpSocket::bind("0.0.0.0:0") {
            let _ = sock.send_to(b"exit", local_addr);
        }
    })
    .context("installing Ctrl-C handler")?;

    let mut controller = MotionControllerBuilder::new()
        .message_delay(config.message_delay())
        .default_height(config.default_height)
        .build(TraceUart::new())?;

    // 接管握手；任何一条失败都不进入会话循环
    controller.pwn_device()?;

    let mut relay = CommandRelay::new(source, controller);
    let outcome = relay.run();

    match &outcome {
        Ok(()) => info!("Session ended by exit message"),
        Err(e) => error!("Session ended with error: {}", e),
    }

    // 善后对成功与失败路径一视同仁：socket 随 drop 释放，
    // 设备断开由外部 BLE 集成层在此之后执行
    info!("Releasing transport, BLE disconnect is up to the adapter layer");
    drop(relay);

    outcome.map_err(Into::into)
}
