//! # 문자열 유틸리티
//!
//! 요청 값 정리에 쓰는 공통 함수들입니다.

/// 이메일을 비교/저장용으로 정규화합니다. (앞뒤 공백 제거, 소문자)
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// 공백뿐인 선택 문자열을 `None` 으로 바꿉니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  User@Herm.IO "), "user@herm.io");
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(None), None);
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(Some(" tok ".to_string())), Some("tok".to_string()));
    }
}
