use rand::Rng;

const CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnpqrstuvwxyz23456789";

/// 生成指定长度的随机字符串，字符集剔除了易混淆字符
pub fn generate_random_code(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_code_length_and_charset() {
        let code = generate_random_code(16);
        assert_eq!(code.len(), 16);
        assert!(code.bytes().all(|b| CHARSET.contains(&b)));
    }
}
