// Copyright 2024 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use super::{Item, ItemCursor, ItemDescription, Items, MenuCore, Ownership};
use crate::backend::{self, RawMenu};
use crate::error::Error;

/// Main application window menu bar.
///
/// A menu bar supports the same item operations as a [`Menu`], but it can
/// only be attached to a [`Window`]; it cannot be nested inside another menu.
///
/// [`Menu`]: super::Menu
/// [`Window`]: crate::Window
#[derive(Clone, PartialEq, Eq)]
pub struct MenuBar {
    core: MenuCore,
}

impl MenuBar {
    /// Creates a new, empty native menu bar owned by this wrapper.
    pub fn new() -> Result<MenuBar, Error> {
        let raw = backend::create_menu_bar()?;
        Ok(MenuBar::from_raw(raw, Ownership::Owned))
    }

    /// Wraps an existing native menu bar.
    ///
    /// Joins any wrappers of the same bar that are still alive, as
    /// [`Menu::from_raw`](super::Menu::from_raw) does.
    pub fn from_raw(raw: RawMenu, ownership: Ownership) -> MenuBar {
        MenuBar {
            core: MenuCore::new(raw, ownership),
        }
    }

    /// To allow [`Window`](crate::Window) to reach the native handle.
    pub(crate) fn core(&self) -> &MenuCore {
        &self.core
    }

    pub fn len(&self) -> usize {
        self.core.len()
    }

    pub fn is_empty(&self) -> bool {
        self.core.is_empty()
    }

    pub fn append(&self, description: impl Into<ItemDescription>) -> Result<(), Error> {
        self.core.append(description.into())
    }

    pub fn insert(
        &self,
        description: impl Into<ItemDescription>,
        at: ItemCursor<'_>,
    ) -> Result<(), Error> {
        self.core.insert(description.into(), at)
    }

    pub fn get(&self, index: usize) -> Result<Item, Error> {
        self.core.get(index)
    }

    pub fn begin(&self) -> ItemCursor<'_> {
        self.core.begin()
    }

    pub fn end(&self) -> ItemCursor<'_> {
        self.core.end()
    }

    pub fn items(&self) -> Items<'_> {
        self.core.items()
    }

    pub fn default_item(&self) -> ItemCursor<'_> {
        self.core.default_item()
    }

    pub fn set_default_item(&self, at: ItemCursor<'_>) -> Result<(), Error> {
        self.core.set_default_item(at)
    }

    /// Tests if the underlying native menu bar still exists.
    ///
    /// Windows take over the lifetime of their menu bar and destroy it when
    /// they themselves are destroyed, so a bar can become invalid outside
    /// the control of this wrapper.
    pub fn is_valid(&self) -> bool {
        self.core.is_valid()
    }

    pub fn ownership(&self) -> Ownership {
        self.core.handle().ownership()
    }
}

impl fmt::Debug for MenuBar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("MenuBar").field(&self.core).finish()
    }
}

impl<'a> IntoIterator for &'a MenuBar {
    type Item = Result<Item, Error>;
    type IntoIter = Items<'a>;

    fn into_iter(self) -> Items<'a> {
        self.items()
    }
}
