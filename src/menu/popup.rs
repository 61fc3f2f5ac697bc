// Copyright 2024 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use super::{Item, ItemCursor, ItemDescription, Items, MenuCore, Ownership};
use crate::backend::{self, RawMenu};
use crate::error::Error;

/// A drop-down or context menu.
///
/// Cloning a `Menu` gives another view of the same native menu. Two menus
/// compare equal when they wrap the same native menu; two separately
/// created empty menus are never equal.
///
/// A menu can be nested inside another menu or a [`MenuBar`] through a
/// [`SubMenuItemDescription`]. The parent then takes over its destruction.
///
/// [`MenuBar`]: super::MenuBar
/// [`SubMenuItemDescription`]: super::SubMenuItemDescription
#[derive(Clone, PartialEq, Eq)]
pub struct Menu {
    core: MenuCore,
}

impl Menu {
    /// Creates a new, empty native menu owned by this wrapper.
    pub fn new() -> Result<Menu, Error> {
        let raw = backend::create_popup_menu()?;
        Ok(Menu::from_raw(raw, Ownership::Owned))
    }

    /// Wraps an existing native menu.
    ///
    /// With [`Ownership::Owned`] the menu is destroyed when the last clone of
    /// the wrapper is dropped; make sure nothing else destroys it too.
    ///
    /// If the menu is already wrapped on this thread, the new wrapper joins
    /// the existing ones and shares their ownership. Passing
    /// [`Ownership::Owned`] then makes all of them owners.
    pub fn from_raw(raw: RawMenu, ownership: Ownership) -> Menu {
        Menu {
            core: MenuCore::new(raw, ownership),
        }
    }

    pub(crate) fn core(&self) -> &MenuCore {
        &self.core
    }

    /// Returns the number of items in the menu.
    pub fn len(&self) -> usize {
        self.core.len()
    }

    pub fn is_empty(&self) -> bool {
        self.core.is_empty()
    }

    /// Appends an item onto the end of the menu.
    pub fn append(&self, description: impl Into<ItemDescription>) -> Result<(), Error> {
        self.core.append(description.into())
    }

    /// Inserts an item at the given cursor position, shuffling later items
    /// along.
    pub fn insert(
        &self,
        description: impl Into<ItemDescription>,
        at: ItemCursor<'_>,
    ) -> Result<(), Error> {
        self.core.insert(description.into(), at)
    }

    /// Reads the item at `index`.
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

    /// The cursor on the default item, or [`end`](Self::end) when no item
    /// is the default.
    pub fn default_item(&self) -> ItemCursor<'_> {
        self.core.default_item()
    }

    /// Makes the item under `at` the default one, replacing any previous
    /// default. Passing [`end`](Self::end) clears the default.
    pub fn set_default_item(&self, at: ItemCursor<'_>) -> Result<(), Error> {
        self.core.set_default_item(at)
    }

    /// Tests if the underlying native menu still exists.
    ///
    /// Once nested in a parent, a menu is destroyed along with the parent,
    /// which may happen outside the control of this wrapper.
    pub fn is_valid(&self) -> bool {
        self.core.is_valid()
    }

    /// Whether this wrapper will destroy the native menu.
    pub fn ownership(&self) -> Ownership {
        self.core.handle().ownership()
    }
}

impl fmt::Debug for Menu {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Menu").field(&self.core).finish()
    }
}

impl<'a> IntoIterator for &'a Menu {
    type Item = Result<Item, Error>;
    type IntoIter = Items<'a>;

    fn into_iter(self) -> Items<'a> {
        self.items()
    }
}
