//! Acknowledgment returned by every write against the store.

use serde::{Deserialize, Serialize};

/// Result of one INSERT/UPDATE/DELETE.
///
/// `id` is the row id assigned by the last insert on the connection and
/// is only meaningful for inserts; `changes` is the affected-row count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteAck {
    pub id: i64,
    pub changes: u64,
}

impl WriteAck {
    pub fn new(id: i64, changes: u64) -> Self {
        Self { id, changes }
    }

    /// Returns true if the statement touched no row.
    pub fn is_noop(&self) -> bool {
        self.changes == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_id_and_changes() {
        let json = serde_json::to_value(WriteAck::new(100, 1)).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 100, "changes": 1 }));
    }

    #[test]
    fn zero_changes_is_noop() {
        assert!(WriteAck::new(0, 0).is_noop());
        assert!(!WriteAck::new(3, 1).is_noop());
    }
}
