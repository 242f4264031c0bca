//! Property-based tests using proptest

use chrono::{DateTime, Utc};
use proptest::prelude::*;
use serde_json::json;

use timeclock::clock::compare_contractors;
use timeclock::clock::timestamp::{format_timestamp, is_normalized_timestamp, ZONE_LABEL};
use timeclock::common::types::{AggregateView, ClockAction, ClockRequest, ContractorLogs};

// 1970-01-01 .. 2199-12-31
const MAX_SECS: i64 = 7_258_118_399;

// ---------------------------------------------------------------------------
// タイムスタンプ正規化
// ---------------------------------------------------------------------------

proptest! {
    /// 任意の時刻で固定フォーマットになる
    #[test]
    fn timestamp_always_matches_fixed_format(secs in 0i64..MAX_SECS) {
        let instant = DateTime::<Utc>::from_timestamp(secs, 0).unwrap();
        let formatted = format_timestamp(instant);
        prop_assert!(is_normalized_timestamp(&formatted), "bad format: {}", formatted);
        prop_assert!(formatted.ends_with(ZONE_LABEL));
    }

    /// ローカル時刻はUTCより7時間または8時間遅れている
    #[test]
    fn timestamp_offset_is_pacific(secs in 0i64..MAX_SECS) {
        let instant = DateTime::<Utc>::from_timestamp(secs, 0).unwrap();
        let formatted = format_timestamp(instant);
        let local = chrono::NaiveDateTime::parse_from_str(
            formatted.trim_end_matches(ZONE_LABEL).trim_end(),
            "%Y-%m-%dT%H:%M:%S",
        ).unwrap();
        let offset_hours = (instant.naive_utc() - local).num_hours();
        prop_assert!(offset_hours == 7 || offset_hours == 8, "offset {}", offset_hours);
    }

    /// 秒単位の時刻順はタイムスタンプの文字列順を逆転させない（同一オフセット期間内）
    #[test]
    fn timestamp_string_order_within_hour(secs in 0i64..MAX_SECS, delta in 0i64..60) {
        let a = DateTime::<Utc>::from_timestamp(secs - secs % 3600, 0).unwrap();
        let b = DateTime::<Utc>::from_timestamp(secs - secs % 3600 + delta, 0).unwrap();
        prop_assert!(format_timestamp(a) <= format_timestamp(b));
    }
}

// ---------------------------------------------------------------------------
// 集計ビューの並び
// ---------------------------------------------------------------------------

proptest! {
    /// 小文字ASCIIのIDでは辞書順と一致し、contractorsとdataが同順・同長
    #[test]
    fn aggregate_order_is_lexicographic_for_lowercase(
        ids in prop::collection::hash_set("[a-z]{1,8}", 0..20),
    ) {
        let mut data: Vec<ContractorLogs> = ids
            .iter()
            .map(|id| ContractorLogs { contractor: id.clone(), logs: vec![] })
            .collect();
        data.sort_by(|a, b| compare_contractors(&a.contractor, &b.contractor));
        let view = AggregateView::from_sorted(data);

        let mut expected: Vec<String> = ids.into_iter().collect();
        expected.sort();
        prop_assert_eq!(&view.contractors, &expected);
        prop_assert_eq!(view.contractors.len(), view.data.len());
        for (id, entry) in view.contractors.iter().zip(view.data.iter()) {
            prop_assert_eq!(id, &entry.contractor);
        }
    }

    /// 比較は全順序（反対称）
    #[test]
    fn compare_contractors_is_antisymmetric(a in "[A-Za-z0-9]{0,6}", b in "[A-Za-z0-9]{0,6}") {
        prop_assert_eq!(compare_contractors(&a, &b), compare_contractors(&b, &a).reverse());
        if compare_contractors(&a, &b) == std::cmp::Ordering::Equal {
            prop_assert_eq!(a, b);
        }
    }
}

// ---------------------------------------------------------------------------
// リクエスト検証
// ---------------------------------------------------------------------------

proptest! {
    /// in/out 以外のアクションはすべて拒否
    #[test]
    fn unknown_actions_are_rejected(action in "\\PC{1,10}") {
        prop_assume!(action != "in" && action != "out");
        let result = ClockRequest::from_json(&json!({"contractor": "alice", "action": action}));
        prop_assert!(result.is_err());
        prop_assert!(result.unwrap_err().is_client_error());
    }

    /// 空でない契約者IDと有効なアクションは常に受理
    #[test]
    fn valid_requests_are_accepted(contractor in "\\PC{1,16}", out in any::<bool>()) {
        let action = if out { "out" } else { "in" };
        let req = ClockRequest::from_json(&json!({"contractor": contractor.clone(), "action": action})).unwrap();
        prop_assert_eq!(req.contractor, contractor);
        prop_assert_eq!(req.action, if out { ClockAction::Out } else { ClockAction::In });
    }
}
