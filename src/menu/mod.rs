// Copyright 2024 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! Menus, menu bars and their items.
//!
//! [`Menu`] and [`MenuBar`] share one engine: a reference-counted handle to
//! the native menu plus the positional operations on it. Positions are
//! exposed through [`ItemCursor`]s, which behave like random-access
//! iterators: they can sit on any item or one past the last one, and
//! stepping outside that range is an [`Error::OutOfRange`].
//!
//! Dereferencing a cursor reads the native slot and produces an [`Item`]
//! snapshot. Nothing is cached: the native menu can change under us, so the
//! item count is queried every time a range matters.
//!
//! [`Error::OutOfRange`]: crate::Error::OutOfRange

mod bar;
mod common;
mod cursor;
mod description;
mod handle;
mod item;
mod popup;

pub use bar::MenuBar;
pub use cursor::{find_first_item_with_id, ConstItemCursor, ItemCursor, Items};
pub use description::{
    CommandItemDescription, ItemDescription, SeparatorDescription, SubMenuItemDescription,
};
pub use handle::Ownership;
pub use item::{CommandItem, Item, SubMenuItem};
pub use popup::Menu;

pub(crate) use common::MenuCore;
pub(crate) use handle::MenuHandle;
