//! Bounded record of state switches.
//!
//! Every switch the machine performs is kept for diagnostics, oldest first,
//! up to a configurable limit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// What caused a state switch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwitchCause {
    /// An AnyState connection qualified.
    Global,
    /// A connection of the active state qualified.
    Local,
    /// The host set the current state directly.
    Forced,
}

/// Record of a single switch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateSwitch {
    /// Name of the state being left
    pub from: String,
    /// Name of the state being entered
    pub to: String,
    pub cause: SwitchCause,
    /// Accumulated machine time (seconds) when the switch happened
    pub machine_time: f64,
    /// Wall-clock time of the switch
    pub timestamp: DateTime<Utc>,
}

/// Ordered, bounded history of switches.
///
/// # Example
///
/// ```rust
/// use animstate::core::{StateSwitch, SwitchCause, SwitchHistory};
/// use chrono::Utc;
///
/// let mut history = SwitchHistory::new(2);
/// for (from, to) in [("Idle", "Walk"), ("Walk", "Run"), ("Run", "Idle")] {
///     history.record(StateSwitch {
///         from: from.to_string(),
///         to: to.to_string(),
///         cause: SwitchCause::Local,
///         machine_time: 0.0,
///         timestamp: Utc::now(),
///     });
/// }
///
/// // Oldest entry dropped
/// assert_eq!(history.path(), vec!["Walk", "Run", "Idle"]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "StoredHistory")]
pub struct SwitchHistory {
    switches: VecDeque<StateSwitch>,
    limit: usize,
}

/// Serialized form, replayed through `record` so the limit holds on load.
#[derive(Deserialize)]
struct StoredHistory {
    switches: VecDeque<StateSwitch>,
    limit: usize,
}

impl From<StoredHistory> for SwitchHistory {
    fn from(stored: StoredHistory) -> Self {
        let mut history = Self::new(stored.limit);
        for switch in stored.switches {
            history.record(switch);
        }
        history
    }
}

impl Default for SwitchHistory {
    fn default() -> Self {
        Self::new(64)
    }
}

impl SwitchHistory {
    /// Create an empty history keeping at most `limit` switches.
    ///
    /// A limit of zero disables recording.
    pub fn new(limit: usize) -> Self {
        Self {
            switches: VecDeque::with_capacity(limit.min(1024)),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn record(&mut self, switch: StateSwitch) {
        if self.limit == 0 {
            return;
        }
        while self.switches.len() >= self.limit {
            self.switches.pop_front();
        }
        self.switches.push_back(switch);
    }

    /// State names traversed: the first `from`, then every `to`.
    pub fn path(&self) -> Vec<&str> {
        let mut path = Vec::with_capacity(self.switches.len() + 1);
        if let Some(first) = self.switches.front() {
            path.push(first.from.as_str());
        }
        path.extend(self.switches.iter().map(|s| s.to.as_str()));
        path
    }

    /// Wall-clock time between the first and last recorded switch.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.switches.front()?, self.switches.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Machine time (seconds) between the first and last recorded switch.
    pub fn machine_span(&self) -> Option<f64> {
        let (first, last) = (self.switches.front()?, self.switches.back()?);
        Some(last.machine_time - first.machine_time)
    }

    pub fn switches(&self) -> impl Iterator<Item = &StateSwitch> {
        self.switches.iter()
    }

    pub fn last(&self) -> Option<&StateSwitch> {
        self.switches.back()
    }

    pub fn len(&self) -> usize {
        self.switches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.switches.is_empty()
    }

    pub fn clear(&mut self) {
        self.switches.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn switch(from: &str, to: &str, machine_time: f64) -> StateSwitch {
        StateSwitch {
            from: from.to_string(),
            to: to.to_string(),
            cause: SwitchCause::Local,
            machine_time,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = SwitchHistory::new(8);
        assert!(history.is_empty());
        assert!(history.path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.machine_span().is_none());
    }

    #[test]
    fn path_follows_switches() {
        let mut history = SwitchHistory::new(8);
        history.record(switch("Idle", "Walk", 0.5));
        history.record(switch("Walk", "Run", 1.5));

        assert_eq!(history.path(), vec!["Idle", "Walk", "Run"]);
        assert_eq!(history.machine_span(), Some(1.0));
        assert_eq!(history.last().map(|s| s.to.as_str()), Some("Run"));
    }

    #[test]
    fn limit_drops_oldest() {
        let mut history = SwitchHistory::new(2);
        history.record(switch("A", "B", 0.0));
        history.record(switch("B", "C", 1.0));
        history.record(switch("C", "D", 2.0));

        assert_eq!(history.len(), 2);
        assert_eq!(history.path(), vec!["B", "C", "D"]);
    }

    #[test]
    fn zero_limit_disables_recording() {
        let mut history = SwitchHistory::new(0);
        history.record(switch("A", "B", 0.0));
        assert!(history.is_empty());
    }

    #[test]
    fn single_switch_has_zero_duration() {
        let mut history = SwitchHistory::new(4);
        history.record(switch("A", "B", 0.0));

        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = SwitchHistory::new(4);
        history.record(switch("Idle", "Walk", 0.25));

        let json = serde_json::to_string(&history).unwrap();
        let restored: SwitchHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.len(), 1);
        assert_eq!(restored.limit(), 4);
        assert_eq!(restored.last(), history.last());
    }

    #[test]
    fn deserialization_enforces_limit() {
        let mut oversized = SwitchHistory::new(8);
        oversized.record(switch("A", "B", 0.0));
        oversized.record(switch("B", "C", 1.0));
        oversized.record(switch("C", "D", 2.0));

        let json = serde_json::to_string(&oversized)
            .unwrap()
            .replace("\"limit\":8", "\"limit\":1");
        let restored: SwitchHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.limit(), 1);
        assert_eq!(restored.len(), 1);
        assert_eq!(restored.path(), vec!["C", "D"]);

        let json = serde_json::to_string(&oversized)
            .unwrap()
            .replace("\"limit\":8", "\"limit\":0");
        let disabled: SwitchHistory = serde_json::from_str(&json).unwrap();
        assert!(disabled.is_empty());
    }
}
