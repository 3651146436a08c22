//! bcrypt 기반 비밀번호 코덱
//!
//! bcrypt 는 입력의 앞 72 바이트만 사용하므로, 해싱과 검증 양쪽에서
//! 동일하게 UTF-8 바이트 기준 72 바이트로 잘라낸 뒤 처리합니다.

use crate::config::PasswordConfig;
use crate::core::errors::{AppResult, ErrorContext};

/// bcrypt 입력 한도 (바이트)
pub const MAX_PASSWORD_BYTES: usize = 72;

/// 평문 비밀번호와 저장용 해시 사이의 변환기
#[derive(Debug, Clone)]
pub struct PasswordCodec {
    cost: u32,
}

impl PasswordCodec {
    pub fn new(config: &PasswordConfig) -> Self {
        Self { cost: config.bcrypt_cost }
    }

    /// 비밀번호를 솔트가 포함된 bcrypt 해시로 변환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - cost 가 bcrypt 허용 범위를 벗어난 경우 등
    pub fn hash(&self, password: &str) -> AppResult<String> {
        let start = std::time::Instant::now();

        let hashed = bcrypt::hash(truncate(password), self.cost)
            .context("비밀번호 해싱 실패")?;

        log::debug!("Password hashing took: {:?}", start.elapsed());
        Ok(hashed)
    }

    /// 비밀번호가 해시와 일치하는지 확인합니다.
    ///
    /// 해시 형식이 잘못된 경우에도 에러 없이 `false` 를 돌려줍니다.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        match bcrypt::verify(truncate(password), hash) {
            Ok(matched) => matched,
            Err(e) => {
                log::warn!("비밀번호 해시 검증 불가: {}", e);
                false
            }
        }
    }
}

/// UTF-8 바이트 기준으로 앞 72 바이트만 남깁니다 (순수한 접미사 제거).
fn truncate(password: &str) -> &[u8] {
    let bytes = password.as_bytes();
    &bytes[..bytes.len().min(MAX_PASSWORD_BYTES)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;

    fn codec() -> PasswordCodec {
        PasswordCodec::new(&PasswordConfig { bcrypt_cost: 4 })
    }

    #[test]
    fn test_hash_then_verify() {
        let codec = codec();
        let hashed = codec.hash("Sup3rSecret!").unwrap();

        assert!(codec.verify("Sup3rSecret!", &hashed));
        assert!(!codec.verify("wrong", &hashed));
    }

    #[test]
    fn test_hashes_are_salted() {
        let codec = codec();

        let first = codec.hash("Sup3rSecret!").unwrap();
        let second = codec.hash("Sup3rSecret!").unwrap();

        assert_ne!(first, second);
        assert!(codec.verify("Sup3rSecret!", &first));
        assert!(codec.verify("Sup3rSecret!", &second));
    }

    #[test]
    fn test_password_of_exactly_72_bytes() {
        let codec = codec();
        let password = "a".repeat(72);
        let hashed = codec.hash(&password).unwrap();

        assert!(codec.verify(&password, &hashed));
        assert!(!codec.verify(&"a".repeat(71), &hashed));
    }

    #[test]
    fn test_long_password_verifies() {
        let codec = codec();
        let password = "correct horse battery staple ".repeat(5);
        assert!(password.len() > MAX_PASSWORD_BYTES);

        let hashed = codec.hash(&password).unwrap();

        assert!(codec.verify(&password, &hashed));
    }

    #[test]
    fn test_truncation_equivalence() {
        let codec = codec();
        let prefix = "p".repeat(MAX_PASSWORD_BYTES);
        let hashed = codec.hash(&format!("{}first-suffix", prefix)).unwrap();

        assert!(codec.verify(&format!("{}a-completely-different-suffix", prefix), &hashed));
        assert!(codec.verify(&prefix, &hashed));
    }

    #[test]
    fn test_multibyte_truncation_is_a_byte_suffix_drop() {
        let codec = codec();
        // "가" 는 3 바이트, 25 개 = 75 바이트 -> 72 바이트 경계에서 잘린다
        let password = "가".repeat(25);
        let truncated = truncate(&password);

        assert_eq!(truncated.len(), MAX_PASSWORD_BYTES);
        assert_eq!(truncated, &password.as_bytes()[..MAX_PASSWORD_BYTES]);

        let hashed = codec.hash(&password).unwrap();
        assert!(codec.verify(&format!("{}나", "가".repeat(24)), &hashed));
    }

    #[test]
    fn test_distinct_passwords_do_not_match() {
        let codec = codec();
        let hashed = codec.hash("first-password").unwrap();

        assert!(!codec.verify("second-password", &hashed));
        assert!(!codec.verify("", &hashed));
    }

    #[test]
    fn test_malformed_hash_returns_false() {
        let codec = codec();

        assert!(!codec.verify("Sup3rSecret!", "not-a-bcrypt-hash"));
        assert!(!codec.verify("Sup3rSecret!", ""));
        assert!(!codec.verify("Sup3rSecret!", "$2b$04$tooshort"));
    }

    #[test]
    fn test_invalid_cost_is_an_error() {
        let codec = PasswordCodec::new(&PasswordConfig { bcrypt_cost: 2 });
        assert!(matches!(codec.hash("Sup3rSecret!"), Err(AppError::InternalError(_))));
    }
}
