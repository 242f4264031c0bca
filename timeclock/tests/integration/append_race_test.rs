//! 同一契約者への同時追記の挙動
//!
//! `unguarded`は read-modify-write が重なると後勝ちで片方が消える。
//! `serialized`では同じ状況でもすべて残る。

use std::sync::Arc;
use std::time::Duration;

use timeclock::clock::{AppendMode, ClockLog};
use timeclock::common::types::ClockAction;

use crate::support::app::create_test_store;
use crate::support::stores::SlowReadStore;

const READ_DELAY: Duration = Duration::from_millis(100);

async fn slow_clock_log(mode: AppendMode) -> ClockLog {
    let store = Arc::new(SlowReadStore::new(create_test_store().await, READ_DELAY));
    ClockLog::new(store, mode).unwrap()
}

#[tokio::test]
async fn unguarded_concurrent_appends_lose_an_update() {
    let log = slow_clock_log(AppendMode::Unguarded).await;

    let (first, second) = tokio::join!(
        log.append("alice", ClockAction::In),
        log.append("alice", ClockAction::Out),
    );
    first.unwrap();
    second.unwrap();

    // 両方とも空のログを読んでから書き戻すため1件しか残らない
    assert_eq!(log.get_one("alice").await.unwrap().len(), 1);
}

#[tokio::test]
async fn serialized_concurrent_appends_keep_every_entry() {
    let log = slow_clock_log(AppendMode::Serialized).await;

    let (first, second) = tokio::join!(
        log.append("alice", ClockAction::In),
        log.append("alice", ClockAction::Out),
    );
    first.unwrap();
    second.unwrap();

    let logs = log.get_one("alice").await.unwrap();
    assert_eq!(logs.len(), 2);
}

#[tokio::test]
async fn serialized_appends_from_many_tasks() {
    let log = slow_clock_log(AppendMode::Serialized).await;

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let log = log.clone();
            let action = if i % 2 == 0 {
                ClockAction::In
            } else {
                ClockAction::Out
            };
            tokio::spawn(async move { log.append("bob", action).await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(log.get_one("bob").await.unwrap().len(), 8);
}

#[tokio::test]
async fn different_contractors_never_conflict_even_unguarded() {
    let log = slow_clock_log(AppendMode::Unguarded).await;

    let (a, b) = tokio::join!(
        log.append("alice", ClockAction::In),
        log.append("bob", ClockAction::In),
    );
    a.unwrap();
    b.unwrap();

    let view = log.get_all().await.unwrap();
    assert_eq!(view.contractors, vec!["alice", "bob"]);
    assert!(view.data.iter().all(|entry| entry.logs.len() == 1));
}
