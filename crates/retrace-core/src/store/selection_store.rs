use crate::models::MomentKey;

/// Sub-store for the set of selected calendar moments.
///
/// Keys are unique and kept sorted newest-first. The store never bounds the
/// selection size; granularity scoping is enforced one level up by
/// `HistoryStore`.
#[derive(Debug, Default)]
pub struct SelectionStore {
    moments: Vec<MomentKey>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Getters =====

    pub fn moments(&self) -> &[MomentKey] {
        &self.moments
    }

    pub fn contains(&self, key: &MomentKey) -> bool {
        self.moments.contains(key)
    }

    pub fn is_empty(&self) -> bool {
        self.moments.is_empty()
    }

    // ===== Mutations =====

    /// Remove `key` if selected, otherwise add it and restore descending order.
    pub fn toggle(&mut self, key: MomentKey) {
        if let Some(pos) = self.moments.iter().position(|k| *k == key) {
            self.moments.remove(pos);
        } else {
            self.moments.push(key);
            self.moments.sort_by(|a, b| b.cmp(a));
        }
    }

    pub fn clear(&mut self) {
        self.moments.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day_key(d: u32) -> MomentKey {
        MomentKey::Day(NaiveDate::from_ymd_opt(2024, 1, d).unwrap())
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut selection = SelectionStore::new();
        selection.toggle(day_key(15));
        assert!(selection.contains(&day_key(15)));

        selection.toggle(day_key(15));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_twice_restores_prior_set() {
        let mut selection = SelectionStore::new();
        selection.toggle(day_key(15));
        selection.toggle(day_key(17));
        let before: Vec<MomentKey> = selection.moments().to_vec();

        selection.toggle(day_key(16));
        selection.toggle(day_key(16));
        assert_eq!(selection.moments(), before.as_slice());
    }

    #[test]
    fn test_moments_sorted_descending() {
        let mut selection = SelectionStore::new();
        selection.toggle(day_key(15));
        selection.toggle(day_key(19));
        selection.toggle(day_key(17));

        assert_eq!(
            selection.moments(),
            &[day_key(19), day_key(17), day_key(15)]
        );
    }

    #[test]
    fn test_clear_empties_selection() {
        let mut selection = SelectionStore::new();
        selection.toggle(day_key(15));
        selection.toggle(day_key(16));
        selection.clear();
        assert!(selection.is_empty());
    }
}
