//! タイムスタンプ正規化
//!
//! 現在時刻を固定タイムゾーン（America/Los_Angeles）の
//! `YYYY-MM-DDTHH:mm:ss PST` 形式に変換する。
//!
//! ラベル`PST`は固定文字列であり、夏時間（PDT）期間中も変わらない。
//! UTCオフセットの指標として扱ってはならない。

use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::America::Los_Angeles;

/// タイムスタンプ末尾に付与するゾーンラベル
pub const ZONE_LABEL: &str = "PST";

const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// 日時部分の形（`D`=数字）
const DATETIME_SHAPE: &[u8; 19] = b"DDDD-DD-DDTDD:DD:DD";

/// 指定時刻を正規化済み文字列に変換する
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    format!(
        "{} {}",
        instant.with_timezone(&Los_Angeles).format(DATETIME_FORMAT),
        ZONE_LABEL
    )
}

/// 現在時刻の正規化済み文字列
pub fn now_timestamp() -> String {
    format_timestamp(Utc::now())
}

/// 正規化済みタイムスタンプの形式に一致するか判定する
pub fn is_normalized_timestamp(value: &str) -> bool {
    let Some(datetime) = value
        .strip_suffix(ZONE_LABEL)
        .and_then(|rest| rest.strip_suffix(' '))
    else {
        return false;
    };

    if datetime.len() != DATETIME_SHAPE.len() {
        return false;
    }
    let shape_ok = datetime
        .bytes()
        .zip(DATETIME_SHAPE.iter())
        .all(|(actual, &expected)| match expected {
            b'D' => actual.is_ascii_digit(),
            sep => actual == sep,
        });

    shape_ok && NaiveDateTime::parse_from_str(datetime, DATETIME_FORMAT).is_ok()
}
