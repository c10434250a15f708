// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

/// A live, shared list of raw report items.
///
/// Cloning a `SharedData` does not copy the items: every clone is a handle to
/// the same underlying list, so a mutation through any handle is observed by
/// all of them. Access is single-threaded (`Rc`/`RefCell`).
///
/// ```
/// use report_forge::model::SharedData;
///
/// let data = SharedData::new();
/// let alias = data.clone();
/// data.push("Revenue: $50000");
/// assert_eq!(alias.len(), 1);
/// assert!(data.ptr_eq(&alias));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedData(Rc<RefCell<Vec<String>>>);

impl SharedData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, item: impl Into<String>) {
        self.0.borrow_mut().push(item.into());
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Read access to the live list.
    pub fn borrow(&self) -> Ref<'_, Vec<String>> {
        self.0.borrow()
    }

    /// Write access to the live list. Panics if a read borrow is outstanding.
    pub fn borrow_mut(&self) -> RefMut<'_, Vec<String>> {
        self.0.borrow_mut()
    }

    /// Copy of the current items.
    pub fn to_vec(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    /// True when both handles point at the same list.
    pub fn ptr_eq(&self, other: &SharedData) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Vec<String>> for SharedData {
    fn from(items: Vec<String>) -> Self {
        Self(Rc::new(RefCell::new(items)))
    }
}

impl<S: Into<String>> FromIterator<S> for SharedData {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from(iter.into_iter().map(Into::into).collect::<Vec<String>>())
    }
}
