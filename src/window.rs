// Copyright 2024 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! Attaching menu bars to top-level windows.

use crate::backend::{self, RawWindow};
use crate::error::Error;
use crate::menu::{MenuBar, Ownership};

/// A top-level window that can carry a [`MenuBar`].
///
/// This does not own the window; it only gives access to its menu bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    raw: RawWindow,
}

impl Window {
    pub fn from_raw(raw: RawWindow) -> Window {
        Window { raw }
    }

    pub fn raw(&self) -> RawWindow {
        self.raw
    }

    /// Attaches `bar` to the window.
    ///
    /// The window destroys its menu bar when it is itself destroyed, so every
    /// wrapper of `bar` becomes a borrowing view. The previously attached bar,
    /// if any, is detached and handed back to the caller to own; wrappers of
    /// it that are still alive own it again too.
    pub fn set_menu_bar(&self, bar: &MenuBar) -> Result<Option<MenuBar>, Error> {
        let previous = backend::window_menu(self.raw)?;
        let raw = bar.core().raw();
        backend::set_window_menu(self.raw, Some(raw))?;
        bar.core().handle().release_to_parent();
        tracing::debug!("attached {:?} to {:?}", raw, self.raw);
        Ok(previous
            .filter(|previous| *previous != raw)
            .map(|previous| MenuBar::from_raw(previous, Ownership::Owned)))
    }

    /// The menu bar currently attached to the window.
    ///
    /// The window keeps ownership of it.
    pub fn menu_bar(&self) -> Result<Option<MenuBar>, Error> {
        let raw = backend::window_menu(self.raw)?;
        Ok(raw.map(|raw| MenuBar::from_raw(raw, Ownership::Borrowed)))
    }

    /// Detaches the menu bar from the window, handing it back to the caller
    /// to own.
    pub fn take_menu_bar(&self) -> Result<Option<MenuBar>, Error> {
        let previous = backend::window_menu(self.raw)?;
        if previous.is_some() {
            backend::set_window_menu(self.raw, None)?;
        }
        Ok(previous.map(|raw| MenuBar::from_raw(raw, Ownership::Owned)))
    }
}
