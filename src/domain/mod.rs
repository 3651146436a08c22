//! 도메인 계층
//!
//! 엔티티(MongoDB 문서), 모델(값 객체), DTO(API 계약)로 구성됩니다.

pub mod entities;
pub mod dto;
pub mod models;
