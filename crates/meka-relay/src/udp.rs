//! UDP 消息源
//!
//! 基于 `std::net::UdpSocket` 的阻塞接收，一个数据报一条消息。

use crate::error::RelayError;
use crate::relay::TextSource;
use std::net::{ToSocketAddrs, UdpSocket};
use tracing::{debug, info, warn};

/// IPv4 上单个 UDP 数据报的载荷上限
const MAX_DATAGRAM: usize = 65_507;

/// UDP 文本消息源
pub struct UdpTextSource {
    socket: UdpSocket,
    buf: Vec<u8>,
}

impl UdpTextSource {
    /// 绑定到给定地址
    pub fn bind(addr: impl ToSocketAddrs) -> Result<Self, RelayError> {
        let socket = UdpSocket::bind(addr)?;
        info!("UDP server listening on {}", socket.local_addr()?);
        Ok(Self {
            socket,
            buf: vec![0u8; MAX_DATAGRAM],
        })
    }

    /// 实际绑定到的地址
    pub fn local_addr(&self) -> Result<std::net::SocketAddr, RelayError> {
        Ok(self.socket.local_addr()?)
    }
}

impl TextSource for UdpTextSource {
    fn receive(&mut self) -> Result<String, RelayError> {
        let (len, peer) = self.socket.recv_from(&mut self.buf)?;
        if len == self.buf.len() {
            // 理论上收不到比载荷上限还长的数据报；真出现说明被截断
            warn!("Datagram from {} fills the receive buffer, may be truncated", peer);
        }
        let message = String::from_utf8_lossy(&self.buf[..len]).trim().to_string();
        debug!("Received {:?} from {}", message, peer);
        Ok(message)
    }
}
