//! 帧校验和计算
//!
//! 固件对每一帧用一个尾随字节做校验。公式来自对官方 App
//! BLE 流量的逆向抓包，必须逐位保持一致，否则设备直接丢帧。

/// 计算一帧的校验和字节
///
/// 输入是 **COBS 填充后** 的字节序列（不含校验和与终止符），
/// 不是原始命令字节。
///
/// 公式：`(sum(bytes) + 1) mod 256`。
///
/// 抓包记录里在求和之后还有一步 `xor 256`，对 8 位回绕后的和
/// 恒为无效操作，这里不保留。末尾 `+1` 的用意未知（可能是想做
/// 二补数取负 `(256 - sum) mod 256` 而写错）——改动前必须用
/// 实机固件验证，目前按观测到的字节序列原样实现。
pub fn checksum(bytes: &[u8]) -> u8 {
    let sum: u32 = bytes.iter().map(|&b| u32::from(b)).sum();
    ((sum + 1) % 256) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_empty() {
        assert_eq!(checksum(&[]), 1);
    }

    #[test]
    fn test_checksum_known_frames() {
        // 停止命令 [6,0,0,0] 填充后为 02 06 01 01 01，校验和 0x0c
        assert_eq!(checksum(&[0x02, 0x06, 0x01, 0x01, 0x01]), 0x0c);
        // 初始化命令 [16] 填充后为 02 10，校验和 0x13
        assert_eq!(checksum(&[0x02, 0x10]), 0x13);
        // 初始化命令 [7,1] 填充后为 03 07 01，校验和 0x0c
        assert_eq!(checksum(&[0x03, 0x07, 0x01]), 0x0c);
    }

    #[test]
    fn test_checksum_wraps_mod_256() {
        assert_eq!(checksum(&[0xff]), 0);
        assert_eq!(checksum(&[0xff, 0x01]), 1);
        assert_eq!(checksum(&[0x80, 0x80]), 1);
    }
}
