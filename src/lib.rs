// Copyright 2024 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! Wrappers for native menus and menu bars.
//!
//! A native menu is a mutable, position-addressed resource owned by the
//! platform. The types here wrap one such resource and expose it through
//! cursors ([`ItemCursor`]) and a standard iterator ([`Items`]), so that
//! menus can be built, inspected and searched without touching the raw API.
//!
//! # Ownership
//!
//! Every [`Menu`] and [`MenuBar`] shares a reference-counted handle with its
//! clones. Clones are views of the same native menu, not copies of its
//! contents. Whether the native menu is destroyed when the last view goes
//! away depends on its [`Ownership`]:
//!
//! - a freshly created menu is [`Ownership::Owned`];
//! - a menu inserted into another menu as a sub-menu becomes
//!   [`Ownership::Borrowed`], because the parent destroys its children;
//! - a menu bar attached to a [`Window`] becomes borrowed for the same reason.
//!
//! Wrapping a native menu that is already wrapped joins the existing
//! wrappers, so there is only ever one ownership state per native menu.
//!
//! Since a parent can be destroyed behind our back, a wrapper can outlive the
//! native menu it points at. Use [`Menu::is_valid`] before touching a menu
//! whose parent may be gone.
//!
//! # Example
//!
//! ```
//! use druid_menu::{find_first_item_with_id, CommandItemDescription, Menu, MenuBar};
//! use druid_menu::SubMenuItemDescription;
//!
//! # fn main() -> Result<(), druid_menu::Error> {
//! let file = Menu::new()?;
//! file.append(CommandItemDescription::new("&Open", 1))?;
//! file.append(CommandItemDescription::new("E&xit", 2))?;
//!
//! let bar = MenuBar::new()?;
//! bar.append(SubMenuItemDescription::new("&File", file.clone()))?;
//!
//! assert_eq!(bar.len(), 1);
//! let exit = find_first_item_with_id(file.begin(), file.end(), 2)?;
//! assert_eq!(exit.item()?.label(), Some("E&xit"));
//! # Ok(())
//! # }
//! ```

#![deny(rustdoc::broken_intra_doc_links)]

pub(crate) mod backend;
pub mod error;
pub mod menu;
pub mod window;

#[cfg(test)]
mod tests;

pub use backend::{RawMenu, RawWindow};
pub use error::{Error, PlatformError};
pub use menu::{
    find_first_item_with_id, CommandItem, CommandItemDescription, ConstItemCursor, Item,
    ItemCursor, ItemDescription, Items, Menu, MenuBar, Ownership, SeparatorDescription,
    SubMenuItem, SubMenuItemDescription,
};
pub use window::Window;
