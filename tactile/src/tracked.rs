// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

/// Per-element recognizer state in installation order.
///
/// Synthetic events for several elements are emitted by walking this list, so
/// the order is the order in which elements were first subscribed.
#[derive(Debug)]
pub(crate) struct Tracked<K, S> {
    entries: Vec<(K, S)>,
}

impl<K, S> Default for Tracked<K, S> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: Copy + PartialEq, S> Tracked<K, S> {
    /// Adds state for `element` unless it already has some.
    pub(crate) fn insert_with(&mut self, element: K, make: impl FnOnce() -> S) {
        if !self.contains(element) {
            self.entries.push((element, make()));
        }
    }

    pub(crate) fn remove(&mut self, element: K) -> Option<S> {
        let index = self.entries.iter().position(|(k, _)| *k == element)?;
        Some(self.entries.remove(index).1)
    }

    pub(crate) fn contains(&self, element: K) -> bool {
        self.entries.iter().any(|(k, _)| *k == element)
    }

    pub(crate) fn get_mut(&mut self, element: K) -> Option<&mut S> {
        self.entries
            .iter_mut()
            .find(|(k, _)| *k == element)
            .map(|(_, s)| s)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (K, &S)> {
        self.entries.iter().map(|(k, s)| (*k, s))
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (K, &mut S)> {
        self.entries.iter_mut().map(|(k, s)| (*k, s))
    }
}
