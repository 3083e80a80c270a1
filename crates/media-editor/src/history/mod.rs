//! Undo/redo patch engine.
//!
//! Edits to the editor state are recorded as [`HistoryItem`]s addressed by
//! path. Applying an item reverts its edit in place; its [`inverse`]
//! replays it.
//!
//! # Changes
//!
//! - `Set` — a value was overwritten; reverting writes the old value back.
//! - `Inserted` — an element was added to a sequence; reverting removes it.
//! - `Removed` — an element was taken out of a sequence; reverting puts it
//!   back.
//!
//! Sequence targets may carry a `find_by` identity so they are located by
//! their `id` field rather than a position that other edits have shifted.
//!
//! [`inverse`]: HistoryItem::inverse

pub mod apply;
pub mod codec;
pub mod edit;
pub mod stack;
pub mod types;
pub mod util;

pub use apply::{apply_history_item, apply_history_items};
pub use codec::json::{from_json, from_json_items, to_json, to_json_items};
pub use edit::{insert_value, remove_value, set_value};
pub use stack::{History, HistoryConfig};
pub use types::{ApplyOptions, Change, FindBy, HistoryError, HistoryItem};
pub use util::{find_index_by_id, record_change};
