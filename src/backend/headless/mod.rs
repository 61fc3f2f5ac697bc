// Copyright 2024 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! An in-process stand-in for the native menu API.
//!
//! Menus and windows live in a thread-local registry. Handles behave the way
//! Win32 handles do: destroying a menu destroys every sub-menu attached to it,
//! destroying a window destroys its menu bar, and a destroyed handle simply
//! stops being valid.

pub mod error;
mod menu;
mod window;

use std::cell::RefCell;
use std::collections::HashMap;

use self::error::Error;
use super::{NativeItem, NativeItemKind, RawMenu, RawWindow};

pub(crate) use menu::*;
pub(crate) use window::*;

thread_local! {
    static REGISTRY: RefCell<Registry> = RefCell::new(Registry::default());
}

fn with_registry<R>(f: impl FnOnce(&mut Registry) -> R) -> R {
    REGISTRY.with(|registry| f(&mut registry.borrow_mut()))
}

#[derive(Default)]
struct Registry {
    /// Shared by menus and windows; zero stays reserved as the null handle.
    last_id: usize,
    menus: HashMap<RawMenu, MenuRecord>,
    windows: HashMap<RawWindow, WindowRecord>,
}

#[derive(Debug)]
struct MenuRecord {
    is_bar: bool,
    slots: Vec<Slot>,
}

#[derive(Debug)]
struct Slot {
    item: NativeItem,
    is_default: bool,
}

#[derive(Debug, Default)]
struct WindowRecord {
    menu: Option<RawMenu>,
}

impl Registry {
    fn next_id(&mut self) -> usize {
        self.last_id += 1;
        self.last_id
    }

    fn menu(&self, raw: RawMenu) -> Result<&MenuRecord, Error> {
        self.menus.get(&raw).ok_or(Error::NoSuchMenu(raw))
    }

    fn menu_mut(&mut self, raw: RawMenu) -> Result<&mut MenuRecord, Error> {
        self.menus.get_mut(&raw).ok_or(Error::NoSuchMenu(raw))
    }

    /// Removes a menu and, recursively, every sub-menu attached to it.
    fn destroy_menu(&mut self, raw: RawMenu) -> Result<(), Error> {
        let record = self.menus.remove(&raw).ok_or(Error::NoSuchMenu(raw))?;
        for slot in record.slots {
            if let NativeItemKind::SubMenu(child) = slot.item.kind {
                // The child may have been destroyed independently already.
                if self.destroy_menu(child).is_err() {
                    tracing::trace!("sub-menu {:?} of {:?} already gone", child, raw);
                }
            }
        }
        Ok(())
    }
}
