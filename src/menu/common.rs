// Copyright 2024 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! The engine shared by [`Menu`](super::Menu) and [`MenuBar`](super::MenuBar).

use std::fmt;

use super::{Item, ItemCursor, ItemDescription, Items, MenuHandle, Ownership};
use crate::backend::{self, RawMenu};
use crate::error::Error;

/// Positional operations on one native menu.
///
/// Clones share the native menu; two cores are equal when they wrap the
/// same native menu, whatever their contents.
#[derive(Clone)]
pub(crate) struct MenuCore {
    handle: MenuHandle,
}

impl MenuCore {
    pub fn new(raw: RawMenu, ownership: Ownership) -> MenuCore {
        MenuCore {
            handle: MenuHandle::new(raw, ownership),
        }
    }

    pub fn handle(&self) -> &MenuHandle {
        &self.handle
    }

    pub fn raw(&self) -> RawMenu {
        self.handle.raw()
    }

    /// Asks the native menu how many items it holds.
    ///
    /// A menu that no longer exists reports zero items.
    pub fn len(&self) -> usize {
        match backend::item_count(self.raw()) {
            Ok(len) => len,
            Err(err) => {
                tracing::warn!("cannot count items of {:?}: {}", self.raw(), err);
                0
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn append(&self, description: ItemDescription) -> Result<(), Error> {
        self.insert_at(description, self.len())
    }

    pub fn insert(&self, description: ItemDescription, at: ItemCursor<'_>) -> Result<(), Error> {
        let position = self.position_of(at)?;
        self.insert_at(description, position)
    }

    fn insert_at(&self, description: ItemDescription, position: usize) -> Result<(), Error> {
        let len = self.len();
        if position > len {
            return Err(out_of_range(position, len));
        }
        let (native, child) = description.into_native();
        backend::insert_item(self.raw(), position, native)?;
        // Only once the native insert succeeded does the parent own the child.
        if let Some(child) = child {
            child.release_to_parent();
        }
        tracing::trace!("inserted item at {} of {:?}", position, self.raw());
        Ok(())
    }

    pub fn begin(&self) -> ItemCursor<'_> {
        ItemCursor::new(self, 0)
    }

    pub fn end(&self) -> ItemCursor<'_> {
        ItemCursor::new(self, self.len())
    }

    /// Reads the item at `index`.
    pub fn get(&self, index: usize) -> Result<Item, Error> {
        let len = self.len();
        if index >= len {
            return Err(out_of_range(index, len));
        }
        let native = backend::item_info(self.raw(), index)?;
        Ok(Item::from_native(native))
    }

    pub fn items(&self) -> Items<'_> {
        Items::new(self, self.len())
    }

    /// The cursor on the default item, or [`end`](Self::end) when there is none.
    pub fn default_item(&self) -> ItemCursor<'_> {
        match backend::default_item(self.raw()) {
            Ok(Some(position)) => ItemCursor::new(self, position),
            Ok(None) => self.end(),
            Err(err) => {
                tracing::warn!("cannot read default item of {:?}: {}", self.raw(), err);
                self.end()
            }
        }
    }

    /// Makes the item under `at` the default one. Passing the end cursor
    /// clears the default.
    pub fn set_default_item(&self, at: ItemCursor<'_>) -> Result<(), Error> {
        let position = self.position_of(at)?;
        let len = self.len();
        if position > len {
            return Err(out_of_range(position, len));
        }
        let position = (position < len).then_some(position);
        backend::set_default_item(self.raw(), position)?;
        Ok(())
    }

    /// Whether the native menu still exists.
    pub fn is_valid(&self) -> bool {
        backend::is_menu(self.raw())
    }

    fn position_of(&self, at: ItemCursor<'_>) -> Result<usize, Error> {
        if at.belongs_to(self) {
            Ok(at.position())
        } else {
            Err(Error::ForeignCursor)
        }
    }
}

pub(crate) fn out_of_range(position: usize, len: usize) -> Error {
    Error::OutOfRange {
        position: isize::try_from(position).unwrap_or(isize::MAX),
        len,
    }
}

impl PartialEq for MenuCore {
    fn eq(&self, other: &MenuCore) -> bool {
        self.raw() == other.raw()
    }
}

impl Eq for MenuCore {}

impl fmt::Debug for MenuCore {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&self.handle, f)
    }
}
