//! Owned value array with a parallel "mapped in this stage" marker.

use crate::rule::MappingRule;
use crate::AlmanacError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueSet {
    values: Vec<i64>,
    mapped: Vec<bool>,
    mapped_count: usize,
}

impl ValueSet {
    pub fn new(values: Vec<i64>) -> Self {
        let mapped = vec![false; values.len()];
        Self {
            values,
            mapped,
            mapped_count: 0,
        }
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn mapped_flags(&self) -> &[bool] {
        &self.mapped
    }

    pub fn mapped_count(&self) -> usize {
        self.mapped_count
    }

    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    /// True once every slot has been rewritten in the current stage.
    pub fn is_fully_mapped(&self) -> bool {
        self.mapped_count == self.values.len()
    }

    /// Rewrite every unmapped slot that falls in the rule's source range.
    /// Returns how many slots were rewritten.
    pub fn apply_rule(&mut self, rule: &MappingRule) -> Result<usize, AlmanacError> {
        let mut hits = 0;
        for (value, mapped) in self.values.iter_mut().zip(self.mapped.iter_mut()) {
            if *mapped {
                continue;
            }
            if let Some(dest) = rule.map(*value)? {
                *value = dest;
                *mapped = true;
                hits += 1;
                self.mapped_count += 1;
            }
        }
        Ok(hits)
    }

    /// Clear all markers at a stage boundary.
    pub fn reset_stage(&mut self) {
        self.mapped.fill(false);
        self.mapped_count = 0;
    }

    pub fn min(&self) -> Option<i64> {
        self.values.iter().copied().min()
    }

    pub fn into_values(self) -> Vec<i64> {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(d: i64, s: i64, l: i64) -> MappingRule {
        MappingRule::new(d, s, l)
    }

    #[test]
    fn first_match_wins_within_stage() {
        let mut set = ValueSet::new(vec![5]);
        assert_eq!(set.apply_rule(&rule(100, 0, 10)).unwrap(), 1);
        assert_eq!(set.apply_rule(&rule(200, 0, 10)).unwrap(), 0);
        assert_eq!(set.values(), &[105]);
    }

    #[test]
    fn mapped_slot_is_not_remapped_by_later_rule_on_new_value() {
        // 5 -> 15 lands inside the second rule's source, but is already mapped.
        let mut set = ValueSet::new(vec![5]);
        set.apply_rule(&rule(15, 5, 1)).unwrap();
        set.apply_rule(&rule(0, 15, 1)).unwrap();
        assert_eq!(set.values(), &[15]);
    }

    #[test]
    fn reset_clears_every_marker() {
        let mut set = ValueSet::new(vec![1, 2, 3]);
        set.apply_rule(&rule(10, 1, 2)).unwrap();
        assert_eq!(set.mapped_count(), 2);
        set.reset_stage();
        assert_eq!(set.mapped_count(), 0);
        assert!(set.mapped_flags().iter().all(|m| !m));
        assert_eq!(set.values(), &[10, 11, 3]);
    }

    #[test]
    fn fully_mapped_tracks_count() {
        let mut set = ValueSet::new(vec![1, 2]);
        assert!(!set.is_fully_mapped());
        set.apply_rule(&rule(0, 0, 10)).unwrap();
        assert!(set.is_fully_mapped());
        assert_eq!(set.min(), Some(1));
    }

    #[test]
    fn overflowing_match_is_an_error() {
        let mut set = ValueSet::new(vec![3, 20]);
        assert!(matches!(
            set.apply_rule(&rule(i64::MAX - 1, 0, 10)),
            Err(AlmanacError::Overflow { value: 3, .. })
        ));
    }
}
