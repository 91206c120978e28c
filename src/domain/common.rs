use serde::{de::DeserializeOwned, Serialize};

/// Row identifier shared by every table.
pub type RecordId = u32;

/// Row types that can live in a CSV table store.
pub trait TableRecord: Serialize + DeserializeOwned + Clone {
    /// File stem of the backing table, e.g. `products`.
    const TABLE_NAME: &'static str;
    /// Fixed column schema, in on-disk order. Must match the struct's field
    /// order, since rows are serialized positionally under this header.
    const COLUMNS: &'static [&'static str];

    fn id(&self) -> RecordId;
    fn set_id(&mut self, id: RecordId);
}

/// Next identifier for a table: `max(existing) + 1`, or `1` when empty.
/// A monotonic counter, not reuse-avoidance: deleting the max row frees
/// its identifier for the next add.
pub fn next_record_id<T: TableRecord>(rows: &[T]) -> RecordId {
    rows.iter()
        .map(TableRecord::id)
        .max()
        .map_or(1, |max| max + 1)
}
