//! BSON 시각과 chrono 시각 사이의 변환
//!
//! 엔티티는 `bson::DateTime`(밀리초 정밀도)으로 저장하고,
//! 응답과 서비스 로직은 `chrono::DateTime<Utc>` 를 사용합니다.

use chrono::{DateTime, Utc};
use mongodb::bson;

pub fn to_chrono(value: bson::DateTime) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(value.timestamp_millis()).unwrap_or_default()
}

pub fn to_bson(value: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(value.timestamp_millis())
}
