//! Undo/redo history stack.
//!
//! Groups of [`HistoryItem`]s are recorded in the order the edits happened.
//! Undo reverts the newest group and parks its inverse on the redo side;
//! redo does the opposite. Groups are applied atomically, so a group that
//! no longer fits the state is left on its stack and the state untouched.

use std::collections::VecDeque;

use serde_json::Value;
use tracing::{debug, warn};

use super::apply::apply_history_items;
use super::types::{ApplyOptions, HistoryError, HistoryItem};

fn default_max_depth() -> usize {
    50
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Undo groups kept before the oldest is dropped.
    pub max_depth: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct History {
    undo: VecDeque<Vec<HistoryItem>>,
    redo: Vec<Vec<HistoryItem>>,
    config: HistoryConfig,
}

impl History {
    pub fn new(config: HistoryConfig) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: Vec::new(),
            config,
        }
    }

    /// Record a group of items as one undo step. Empty groups are ignored.
    ///
    /// Recording clears everything that could be redone.
    pub fn record(&mut self, group: Vec<HistoryItem>) {
        if group.is_empty() {
            return;
        }
        self.redo.clear();
        self.undo.push_back(group);
        while self.undo.len() > self.config.max_depth {
            self.undo.pop_front();
        }
        debug!(depth = self.undo.len(), "recorded history group");
    }

    pub fn record_item(&mut self, item: HistoryItem) {
        self.record(vec![item]);
    }

    /// Revert the newest group. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self, root: &mut Value) -> Result<bool, HistoryError> {
        let Some(group) = self.undo.pop_back() else {
            return Ok(false);
        };
        if let Err(err) = apply_history_items(root, &group, &ApplyOptions { atomic: true }) {
            warn!(%err, "undo failed, keeping group");
            self.undo.push_back(group);
            return Err(err);
        }
        self.redo.push(invert_group(&group));
        debug!(undo = self.undo.len(), redo = self.redo.len(), "undo");
        Ok(true)
    }

    /// Replay the newest undone group. Returns `false` when there is nothing
    /// to redo.
    pub fn redo(&mut self, root: &mut Value) -> Result<bool, HistoryError> {
        let Some(group) = self.redo.pop() else {
            return Ok(false);
        };
        if let Err(err) = apply_history_items(root, &group, &ApplyOptions { atomic: true }) {
            warn!(%err, "redo failed, keeping group");
            self.redo.push(group);
            return Err(err);
        }
        self.undo.push_back(invert_group(&group));
        debug!(undo = self.undo.len(), redo = self.redo.len(), "redo");
        Ok(true)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

/// The group that undoes `group` once it has itself been applied.
///
/// Groups are reverted last item first, so the inverses are stored in
/// reverse to replay the original order.
fn invert_group(group: &[HistoryItem]) -> Vec<HistoryItem> {
    group.iter().rev().map(HistoryItem::inverse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::edit::{insert_value, set_value};
    use media_editor_path::parse_path;
    use serde_json::json;

    #[test]
    fn undo_redo_single_edit() {
        let mut state = json!({"scale": 1});
        let mut history = History::default();
        let item = set_value(&mut state, parse_path("/scale"), json!(2)).unwrap().unwrap();
        history.record_item(item);

        assert!(history.undo(&mut state).unwrap());
        assert_eq!(state, json!({"scale": 1}));
        assert!(history.can_redo());

        assert!(history.redo(&mut state).unwrap());
        assert_eq!(state, json!({"scale": 2}));
        assert!(!history.can_redo());
        assert!(history.can_undo());
    }

    #[test]
    fn undo_redo_group_preserves_order() {
        let mut state = json!({"layers": []});
        let mut history = History::default();
        let group = vec![
            insert_value(&mut state, parse_path("/layers/0"), json!({"id": 1, "scale": 1})).unwrap(),
            set_value(&mut state, parse_path("/layers/0/scale"), json!(3)).unwrap().unwrap(),
        ];
        history.record(group);
        let edited = state.clone();

        history.undo(&mut state).unwrap();
        assert_eq!(state, json!({"layers": []}));
        history.redo(&mut state).unwrap();
        assert_eq!(state, edited);
        history.undo(&mut state).unwrap();
        assert_eq!(state, json!({"layers": []}));
    }

    #[test]
    fn empty_stacks_report_false() {
        let mut state = json!({});
        let mut history = History::default();
        history.record(vec![]);
        assert!(!history.undo(&mut state).unwrap());
        assert!(!history.redo(&mut state).unwrap());
    }

    #[test]
    fn record_clears_redo() {
        let mut state = json!({"a": 1});
        let mut history = History::default();
        history.record_item(set_value(&mut state, parse_path("/a"), json!(2)).unwrap().unwrap());
        history.undo(&mut state).unwrap();
        history.record_item(set_value(&mut state, parse_path("/a"), json!(5)).unwrap().unwrap());
        assert!(!history.can_redo());
        assert_eq!(history.undo_len(), 1);
    }

    #[test]
    fn depth_is_bounded() {
        let mut state = json!({"a": 0});
        let mut history = History::new(HistoryConfig { max_depth: 3 });
        for i in 1..=5 {
            history.record_item(set_value(&mut state, parse_path("/a"), json!(i)).unwrap().unwrap());
        }
        assert_eq!(history.undo_len(), 3);
        while history.undo(&mut state).unwrap() {}
        assert_eq!(state, json!({"a": 2}));
    }

    #[test]
    fn failed_undo_keeps_group() {
        let mut state = json!({"layers": [{"id": 1}]});
        let mut history = History::default();
        history.record_item(HistoryItem::set(parse_path("/layers/3/scale"), json!(1), json!(2)));
        assert!(history.undo(&mut state).is_err());
        assert_eq!(history.undo_len(), 1);
        assert_eq!(state, json!({"layers": [{"id": 1}]}));
    }
}
