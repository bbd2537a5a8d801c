//! Hashed element identifiers.

/// Numeric id derived from an element's label string.
///
/// Ids are stable across frames for the same label, which is what makes
/// hover and bounds queries work in an immediate-mode loop: the element tree
/// is rebuilt from scratch every frame, but `ElementId::from_label("sidebar")`
/// lands on the same slot each time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ElementId(pub u32);

impl ElementId {
    /// Hashes a label with the one-at-a-time scheme the layout engine uses
    /// internally, so ids computed here agree with ids the engine derives
    /// from the same label.
    pub fn from_label(label: &str) -> Self {
        let mut hash: u32 = 0;
        for &byte in label.as_bytes() {
            hash = hash.wrapping_add(u32::from(byte));
            hash = hash.wrapping_add(hash << 10);
            hash ^= hash >> 6;
        }
        hash = hash.wrapping_add(hash << 3);
        hash ^= hash >> 11;
        hash = hash.wrapping_add(hash << 15);
        // Offset by one so a valid id is never zero.
        Self(hash.wrapping_add(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_label_same_id() {
        assert_eq!(ElementId::from_label("sidebar"), ElementId::from_label("sidebar"));
    }

    #[test]
    fn distinct_labels_distinct_ids() {
        assert_ne!(ElementId::from_label("sidebar"), ElementId::from_label("topbar"));
        assert_ne!(ElementId::from_label("a"), ElementId::from_label("b"));
    }

    #[test]
    fn empty_label_is_nonzero() {
        assert_ne!(ElementId::from_label(""), ElementId(0));
    }
}
