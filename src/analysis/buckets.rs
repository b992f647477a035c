//! analysis::buckets
//!
//! Ordered mapping from a key to the issue numbers assigned to it.

use std::borrow::Borrow;

use crate::core::types::IssueNumber;

/// Keys in a fixed order, each with the issues assigned to it.
///
/// Keys registered up front keep their position even when empty, so
/// reports list every bucket in the same order run to run. Issue numbers
/// keep insertion order within a bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buckets<K> {
    entries: Vec<(K, Vec<IssueNumber>)>,
}

impl<K> Default for Buckets<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: PartialEq> Buckets<K> {
    /// Empty buckets for `keys`, in order. Duplicate keys are dropped.
    pub fn with_keys(keys: impl IntoIterator<Item = K>) -> Self {
        let mut buckets = Self::default();
        for key in keys {
            if buckets.position(&key).is_none() {
                buckets.entries.push((key, Vec::new()));
            }
        }
        buckets
    }

    /// Assign `number` to `key`. Unknown keys are appended at the end.
    pub fn insert(&mut self, key: K, number: IssueNumber) {
        match self.position(&key) {
            Some(idx) => self.entries[idx].1.push(number),
            None => self.entries.push((key, vec![number])),
        }
    }

    /// Issues assigned to `key`. Empty for unknown keys.
    pub fn get<Q>(&self, key: &Q) -> &[IssueNumber]
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.entries
            .iter()
            .find(|(k, _)| k.borrow() == key)
            .map(|(_, v)| v.as_slice())
            .unwrap_or(&[])
    }

    /// Number of issues assigned to `key`.
    pub fn count<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.get(key).len()
    }

    /// True if `number` is assigned to `key`.
    pub fn contains<Q>(&self, key: &Q, number: IssueNumber) -> bool
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.get(key).contains(&number)
    }

    /// Keys `number` is assigned to, in bucket order.
    pub fn keys_of(&self, number: IssueNumber) -> Vec<&K> {
        self.entries
            .iter()
            .filter(|(_, v)| v.contains(&number))
            .map(|(k, _)| k)
            .collect()
    }

    /// Buckets in order, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[IssueNumber])> {
        self.entries.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Non-empty buckets in order.
    pub fn non_empty(&self) -> impl Iterator<Item = (&K, &[IssueNumber])> {
        self.iter().filter(|(_, v)| !v.is_empty())
    }

    /// Sum of bucket sizes. Exceeds the issue count when issues sit in
    /// several buckets.
    pub fn total_memberships(&self) -> usize {
        self.entries.iter().map(|(_, v)| v.len()).sum()
    }

    fn position(&self, key: &K) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }
}
