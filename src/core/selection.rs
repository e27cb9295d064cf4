use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{PoisonError, RwLock};
use uuid::Uuid;

use super::emotion::{EmotionKind, PerEmotion};

/// How many records `stats()` returns in `recent`
pub const DEFAULT_RECENT_LIMIT: usize = 10;

/// One logged selection. Never modified after it is appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionRecord {
    pub id: Uuid,
    pub emotion: EmotionKind,
    pub timestamp: DateTime<Utc>,
    pub client_address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionStats {
    pub total: usize,
    pub counts_by_emotion: PerEmotion<usize>,
    pub most_common: Option<EmotionKind>,
    pub recent: Vec<SelectionRecord>,
}

/// Append-only, in-memory selection history shared across requests.
///
/// Records live for the lifetime of the process. There is no eviction and no
/// removal API.
#[derive(Debug, Default)]
pub struct SelectionLog {
    records: RwLock<Vec<SelectionRecord>>,
}

impl SelectionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp a new record with the current instant and append it.
    ///
    /// The timestamp is taken while holding the write lock so that insertion
    /// order and timestamp order agree.
    pub fn append(&self, emotion: EmotionKind, client_address: impl Into<String>) -> SelectionRecord {
        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        let record = SelectionRecord {
            id: Uuid::new_v4(),
            emotion,
            timestamp: Utc::now(),
            client_address: client_address.into(),
        };
        records.push(record.clone());
        record
    }

    pub fn len(&self) -> usize {
        self.records.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> SelectionStats {
        self.stats_with_limit(DEFAULT_RECENT_LIMIT)
    }

    /// Aggregate over a snapshot of the log
    pub fn stats_with_limit(&self, recent_limit: usize) -> SelectionStats {
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);

        let mut counts_by_emotion = PerEmotion::<usize>::default();
        for record in records.iter() {
            *counts_by_emotion.get_mut(record.emotion) += 1;
        }

        let recent_start = records.len().saturating_sub(recent_limit);

        SelectionStats {
            total: records.len(),
            most_common: most_common(&counts_by_emotion),
            counts_by_emotion,
            recent: records[recent_start..].to_vec(),
        }
    }
}

/// Highest count wins; ties go to the earlier kind in canonical order
fn most_common(counts: &PerEmotion<usize>) -> Option<EmotionKind> {
    let mut best: Option<(EmotionKind, usize)> = None;
    for (kind, &count) in counts.iter() {
        if count == 0 {
            continue;
        }
        match best {
            Some((_, best_count)) if best_count >= count => {}
            _ => best = Some((kind, count)),
        }
    }
    best.map(|(kind, _)| kind)
}
