//! 中继配置
//!
//! TOML 文件 + 默认值。默认值沿用实机部署的约定：UDP 绑定
//! `192.168.4.2:6789`、命令间隔 0.5s。会话运行期间不支持
//! 动态改配置。

use crate::error::RelayError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// 中继与会话配置
///
/// 只接受已知选项：文件里出现未识别的键直接报错，而不是
/// 静默忽略拼错的配置。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RelayConfig {
    /// UDP 绑定地址
    pub bind_addr: String,

    /// UDP 端口
    pub port: u16,

    /// 命令间隔（毫秒）
    pub message_delay_ms: u64,

    /// 会话起始站立高度（1..=127，由驱动层校验）
    pub default_height: i32,

    /// BLE 设备搜索超时（秒），转交给外部 BLE 集成层
    pub search_timeout_secs: u64,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            bind_addr: "192.168.4.2".to_string(),
            port: 6789,
            message_delay_ms: 500,
            default_height: 50,
            search_timeout_secs: 10,
        }
    }
}

impl RelayConfig {
    /// 从 TOML 文件加载；文件不存在时返回默认配置
    pub fn load(path: &Path) -> Result<Self, RelayError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| RelayError::InvalidConfig(format!("{}: {}", path.display(), e)))?;
        toml::from_str(&content)
            .map_err(|e| RelayError::InvalidConfig(format!("{}: {}", path.display(), e)))
    }

    /// 命令间隔
    pub fn message_delay(&self) -> Duration {
        Duration::from_millis(self.message_delay_ms)
    }

    /// 设备搜索超时
    pub fn search_timeout(&self) -> Duration {
        Duration::from_secs(self.search_timeout_secs)
    }

    /// `bind_addr:port` 形式的 socket 地址
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}
