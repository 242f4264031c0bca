//! 契約者単位の追記ロック
//!
//! 同一契約者への read-modify-write を1サイクルずつ直列化する。
//! 異なる契約者のロックは互いに干渉しない。

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::{Mutex as TokioMutex, OwnedMutexGuard};

type LockMap = HashMap<String, Arc<TokioMutex<()>>>;

/// 契約者IDごとの非同期ロック表
#[derive(Clone, Debug, Default)]
pub struct AppendLocks {
    inner: Arc<Mutex<LockMap>>,
}

impl AppendLocks {
    /// 指定契約者のロックを取得するまで待機する
    pub async fn acquire(&self, contractor: &str) -> ContractorGuard {
        let lock = {
            let mut map = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            map.entry(contractor.to_string()).or_default().clone()
        };
        let guard = lock.lock_owned().await;
        ContractorGuard {
            locks: self.clone(),
            contractor: contractor.to_string(),
            guard: Some(guard),
        }
    }

    /// 保持中または待機中のロックが存在する契約者数
    pub fn active(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn release(&self, contractor: &str) {
        let mut map = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        // 表以外に参照がなければ誰も保持・待機していない
        if map
            .get(contractor)
            .is_some_and(|lock| Arc::strong_count(lock) == 1)
        {
            map.remove(contractor);
        }
    }
}

/// 1回の read-modify-write の間だけ保持されるガード
#[derive(Debug)]
pub struct ContractorGuard {
    locks: AppendLocks,
    contractor: String,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for ContractorGuard {
    fn drop(&mut self) {
        drop(self.guard.take());
        self.locks.release(&self.contractor);
    }
}
