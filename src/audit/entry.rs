//! History entries
//!
//! Each saved change to the inventory or the warning level becomes one entry.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{SpoolRecord, UpdatedRecord};

/// Kind of change, as shown in `history` output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A saved change, with the values needed to describe it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Change {
    SpoolAdded {
        spool: SpoolRecord,
    },
    SpoolAdjusted {
        before: SpoolRecord,
        after: SpoolRecord,
    },
    SpoolRemoved {
        spool: SpoolRecord,
    },
    /// `previous` is `None` when the stored level could not be read
    WarningLevelChanged {
        previous: Option<i64>,
        current: i64,
    },
}

impl Change {
    pub fn operation(&self) -> Operation {
        match self {
            Change::SpoolAdded { .. } => Operation::Create,
            Change::SpoolAdjusted { .. } | Change::WarningLevelChanged { .. } => Operation::Update,
            Change::SpoolRemoved { .. } => Operation::Delete,
        }
    }

    /// What was changed: a `TYPE/COLOR` key or the warning level
    pub fn subject(&self) -> String {
        match self {
            Change::SpoolAdded { spool } | Change::SpoolRemoved { spool } => spool.key(),
            Change::SpoolAdjusted { after, .. } => after.key(),
            Change::WarningLevelChanged { .. } => "warning level".to_string(),
        }
    }

    /// One-line description of the values involved
    pub fn details(&self) -> String {
        match self {
            Change::SpoolAdded { spool } | Change::SpoolRemoved { spool } => spool.to_string(),
            Change::SpoolAdjusted { before, after } => {
                format!("{} g -> {} g", before.quantity_grams, after.quantity_grams)
            }
            Change::WarningLevelChanged { previous, current } => match previous {
                Some(previous) => format!("{} g -> {} g", previous, current),
                None => format!("(unreadable) -> {} g", current),
            },
        }
    }
}

/// One line of the history log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub change: Change,
}

impl AuditEntry {
    /// Stamp a change with the current time
    pub fn new(change: Change) -> Self {
        Self {
            timestamp: Utc::now(),
            change,
        }
    }

    pub fn spool_added(spool: &SpoolRecord) -> Self {
        Self::new(Change::SpoolAdded {
            spool: spool.clone(),
        })
    }

    pub fn spool_adjusted(updated: &UpdatedRecord) -> Self {
        Self::new(Change::SpoolAdjusted {
            before: updated.before.clone(),
            after: updated.after.clone(),
        })
    }

    pub fn spool_removed(spool: &SpoolRecord) -> Self {
        Self::new(Change::SpoolRemoved {
            spool: spool.clone(),
        })
    }

    pub fn warning_level_changed(previous: Option<i64>, current: i64) -> Self {
        Self::new(Change::WarningLevelChanged { previous, current })
    }

    pub fn operation(&self) -> Operation {
        self.change.operation()
    }
}

impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {}: {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation(),
            self.change.subject(),
            self.change.details()
        )
    }
}
