// Copyright 2024 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! Shared ownership of a native menu.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::backend::{self, RawMenu};

/// Who is responsible for destroying a native menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    /// The wrapper destroys the menu when its last clone is dropped.
    Owned,
    /// Something else (a parent menu, a window, foreign code) destroys it.
    Borrowed,
}

thread_local! {
    /// The live handle of every wrapped native menu on this thread.
    static LIVE: RefCell<HashMap<RawMenu, Weak<HandleState>>> = RefCell::new(HashMap::new());
}

struct HandleState {
    raw: RawMenu,
    ownership: Cell<Ownership>,
}

impl Drop for HandleState {
    fn drop(&mut self) {
        // The thread-local may already be gone during thread teardown.
        let _ = LIVE.try_with(|live| {
            let mut live = live.borrow_mut();
            if live.get(&self.raw).map_or(false, |weak| weak.strong_count() == 0) {
                live.remove(&self.raw);
            }
        });
        if self.ownership.get() == Ownership::Borrowed {
            return;
        }
        tracing::trace!("destroying {:?}", self.raw);
        if let Err(err) = backend::destroy_menu(self.raw) {
            tracing::warn!("failed to destroy menu {:?}: {}", self.raw, err);
        }
    }
}

/// A reference-counted native menu.
///
/// There is at most one live state per native menu on a thread: wrapping a
/// menu that is already wrapped joins the existing state. An ownership
/// change made through any wrapper is therefore seen by all of them, and at
/// most one of them can destroy the menu.
#[derive(Clone)]
pub(crate) struct MenuHandle(Rc<HandleState>);

impl MenuHandle {
    /// Wraps `raw`, joining its live handle if it has one.
    ///
    /// Joining with [`Ownership::Owned`] takes ownership over for every
    /// wrapper; joining with [`Ownership::Borrowed`] leaves it unchanged.
    pub fn new(raw: RawMenu, ownership: Ownership) -> MenuHandle {
        LIVE.with(|live| {
            let mut live = live.borrow_mut();
            if let Some(state) = live.get(&raw).and_then(Weak::upgrade) {
                let handle = MenuHandle(state);
                if ownership == Ownership::Owned {
                    handle.take_ownership();
                }
                return handle;
            }
            let state = Rc::new(HandleState {
                raw,
                ownership: Cell::new(ownership),
            });
            live.insert(raw, Rc::downgrade(&state));
            MenuHandle(state)
        })
    }

    pub fn raw(&self) -> RawMenu {
        self.0.raw
    }

    pub fn ownership(&self) -> Ownership {
        self.0.ownership.get()
    }

    /// Hands destruction of the native menu over to whatever it was just
    /// attached to.
    pub fn release_to_parent(&self) {
        if self.0.ownership.replace(Ownership::Borrowed) == Ownership::Owned {
            tracing::debug!("{:?} is now owned by its parent", self.0.raw);
        }
    }

    /// Makes the wrappers responsible for destroying the native menu again,
    /// after it was detached from whatever owned it.
    pub fn take_ownership(&self) {
        if self.0.ownership.replace(Ownership::Owned) == Ownership::Borrowed {
            tracing::debug!("{:?} is now owned by its wrappers", self.0.raw);
        }
    }
}

impl fmt::Debug for MenuHandle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("MenuHandle")
            .field("raw", &self.0.raw)
            .field("ownership", &self.0.ownership.get())
            .finish()
    }
}
