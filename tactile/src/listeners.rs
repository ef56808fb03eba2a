// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::event::{Behavior, EventKind, SyntheticEvent};

/// Identifies a listener registered with [`Gestures::on`](crate::Gestures::on).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

struct Listener<K> {
    id: ListenerId,
    element: K,
    kind: EventKind,
    callback: Box<dyn FnMut(&SyntheticEvent<K>)>,
}

/// Listeners in registration order.
pub(crate) struct Listeners<K> {
    entries: Vec<Listener<K>>,
    next_id: u64,
}

impl<K: fmt::Debug> fmt::Debug for Listeners<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|l| (l.id, &l.element, l.kind)))
            .finish()
    }
}

impl<K> Default for Listeners<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }
}

impl<K: Copy + PartialEq> Listeners<K> {
    pub(crate) fn add(
        &mut self,
        element: K,
        kind: EventKind,
        callback: Box<dyn FnMut(&SyntheticEvent<K>)>,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Listener {
            id,
            element,
            kind,
            callback,
        });
        id
    }

    /// Removes a listener, returning what it was attached to.
    pub(crate) fn remove(&mut self, id: ListenerId) -> Option<(K, EventKind)> {
        let index = self.entries.iter().position(|l| l.id == id)?;
        let removed = self.entries.remove(index);
        Some((removed.element, removed.kind))
    }

    /// Returns `true` if any listener on `element` needs `behavior`.
    pub(crate) fn uses(&self, element: K, behavior: Behavior) -> bool {
        self.entries
            .iter()
            .any(|l| l.element == element && l.kind.behavior() == behavior)
    }

    /// Calls every listener for the event's element and kind; returns how
    /// many ran.
    pub(crate) fn emit(&mut self, event: &SyntheticEvent<K>) -> usize {
        let (element, kind) = (event.target(), event.kind());
        let mut ran = 0;
        for listener in &mut self.entries {
            if listener.element == element && listener.kind == kind {
                (listener.callback)(event);
                ran += 1;
            }
        }
        ran
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
