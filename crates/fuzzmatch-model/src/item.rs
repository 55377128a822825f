use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// A non-blank, trimmed value together with its position in the original input.
///
/// `row_index` always refers to the unfiltered sequence the caller supplied, so
/// reports can be joined back to the source rows after blank entries are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StringItem {
    value: String,
    row_index: usize,
}

impl StringItem {
    /// Builds an item from a raw cell value, trimming surrounding whitespace.
    ///
    /// Returns [`ModelError::BlankValue`] for empty or whitespace-only input.
    pub fn new(raw: &str, row_index: usize) -> Result<Self> {
        let value = raw.trim();
        if value.is_empty() {
            return Err(ModelError::BlankValue { row_index });
        }
        Ok(Self {
            value: value.to_string(),
            row_index,
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn row_index(&self) -> usize {
        self.row_index
    }
}

/// Converts a raw sequence into items, skipping blank entries but keeping the
/// original indices.
pub fn collect_items<S: AsRef<str>>(values: &[S]) -> Vec<StringItem> {
    values
        .iter()
        .enumerate()
        .filter_map(|(idx, raw)| StringItem::new(raw.as_ref(), idx).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_and_keeps_index() {
        let item = StringItem::new("  Acme Ltd ", 4).unwrap();
        assert_eq!(item.value(), "Acme Ltd");
        assert_eq!(item.row_index(), 4);
    }

    #[test]
    fn new_rejects_blank() {
        assert_eq!(
            StringItem::new(" \t ", 2),
            Err(ModelError::BlankValue { row_index: 2 })
        );
    }

    #[test]
    fn collect_items_preserves_original_positions() {
        let items = collect_items(&["a", "", "  ", "b"]);
        let indices: Vec<usize> = items.iter().map(StringItem::row_index).collect();
        assert_eq!(indices, vec![0, 3]);
    }
}
