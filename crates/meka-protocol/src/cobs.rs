//! Consistent Overhead Byte Stuffing 编码
//!
//! 固件以 `0x00` 作为帧终止符，因此载荷内部不允许出现零字节。
//! COBS 用"到下一个零字节的距离"前缀替换每个零字节，输出保证
//! 不含 `0x00`，且开销固定为每 254 字节最多 1 字节。
//!
//! 本协议只有主机 → 设备方向，所以只实现编码器；标准 COBS
//! 解码器可以无损还原输出。

/// 对一段字节做 COBS 填充
///
/// 输出不包含终止符 `0x00`，由帧构建层追加。
///
/// 组码语义：每组以一个 1..=255 的组码开头，表示到下一个零字节
/// （或数据末尾）的距离；组码 `0xFF` 表示 254 个非零字节后没有
/// 零字节，需要开启新组。
pub fn stuff(data: &[u8]) -> Vec<u8> {
    // 最坏情况每 254 字节多 1 字节开销，再加首组码
    let mut out = Vec::with_capacity(data.len() + data.len() / 254 + 1);

    let mut code_idx = 0;
    out.push(0); // 组码占位，稍后回填
    let mut code: u8 = 1;

    for &b in data {
        if b == 0 {
            out[code_idx] = code;
            code_idx = out.len();
            out.push(0);
            code = 1;
        } else {
            out.push(b);
            code += 1;
            if code == 0xff {
                out[code_idx] = code;
                code_idx = out.len();
                out.push(0);
                code = 1;
            }
        }
    }

    out[code_idx] = code;
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stuff_empty() {
        assert_eq!(stuff(&[]), vec![0x01]);
    }

    #[test]
    fn test_stuff_no_zeros() {
        assert_eq!(stuff(&[0x10]), vec![0x02, 0x10]);
        assert_eq!(stuff(&[0x07, 0x01]), vec![0x03, 0x07, 0x01]);
    }

    #[test]
    fn test_stuff_with_zeros() {
        // [6,0,0,0] → 02 06 01 01 01
        assert_eq!(
            stuff(&[0x06, 0x00, 0x00, 0x00]),
            vec![0x02, 0x06, 0x01, 0x01, 0x01]
        );
    }

    #[test]
    fn test_stuff_single_zero() {
        assert_eq!(stuff(&[0x00]), vec![0x01, 0x01]);
    }

    #[test]
    fn test_stuff_zero_then_data() {
        assert_eq!(stuff(&[0x00, 0x11]), vec![0x01, 0x02, 0x11]);
    }

    #[test]
    fn test_stuff_long_run_emits_ff_group() {
        // 254 个非零字节装满一组，组码 0xFF，后跟空尾组
        let data = vec![0x01u8; 254];
        let out = stuff(&data);
        assert_eq!(out.len(), 256);
        assert_eq!(out[0], 0xff);
        assert_eq!(out[255], 0x01);
        assert!(!out.contains(&0x00));
    }

    #[test]
    fn test_stuff_255_bytes() {
        let data = vec![0x02u8; 255];
        let out = stuff(&data);
        assert_eq!(out[0], 0xff);
        // 剩余 1 字节进入第二组
        assert_eq!(out[255], 0x02);
        assert_eq!(out[256], 0x02);
        assert_eq!(out.len(), 257);
        assert!(!out.contains(&0x00));
    }

    #[test]
    fn test_stuff_output_never_contains_zero() {
        let data = [0x00, 0xff, 0x00, 0x00, 0x12, 0x00];
        assert!(!stuff(&data).contains(&0x00));
    }
}
