// Copyright 2024 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

use super::error::Error;
use super::{with_registry, RawMenu, RawWindow};

/// Creates a bare top-level window able to carry a menu bar.
#[cfg(test)]
pub(crate) fn create_window() -> RawWindow {
    with_registry(|registry| {
        let raw = RawWindow(registry.next_id());
        registry.windows.insert(raw, super::WindowRecord::default());
        tracing::trace!("created window {:?}", raw);
        raw
    })
}

/// Destroys a window along with the menu bar attached to it.
#[cfg(test)]
pub(crate) fn destroy_window(raw: RawWindow) -> Result<(), Error> {
    with_registry(|registry| {
        let record = registry
            .windows
            .remove(&raw)
            .ok_or(Error::NoSuchWindow(raw))?;
        if let Some(menu) = record.menu {
            if registry.destroy_menu(menu).is_err() {
                tracing::trace!("menu bar {:?} of {:?} already gone", menu, raw);
            }
        }
        Ok(())
    })
}

pub(crate) fn set_window_menu(window: RawWindow, menu: Option<RawMenu>) -> Result<(), Error> {
    with_registry(|registry| {
        if let Some(menu) = menu {
            registry.menu(menu)?;
        }
        let record = registry
            .windows
            .get_mut(&window)
            .ok_or(Error::NoSuchWindow(window))?;
        record.menu = menu;
        Ok(())
    })
}

pub(crate) fn window_menu(window: RawWindow) -> Result<Option<RawMenu>, Error> {
    with_registry(|registry| {
        let record = registry
            .windows
            .get(&window)
            .ok_or(Error::NoSuchWindow(window))?;
        // Like `GetMenu`, a dangling menu reads back as no menu at all.
        Ok(record
            .menu
            .filter(|menu| registry.menus.contains_key(menu)))
    })
}
