// Copyright 2024 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

use super::error::Error;
use super::{with_registry, MenuRecord, NativeItem, NativeItemKind, RawMenu, Slot};

fn create(is_bar: bool) -> RawMenu {
    with_registry(|registry| {
        let raw = RawMenu(registry.next_id());
        registry.menus.insert(
            raw,
            MenuRecord {
                is_bar,
                slots: Vec::new(),
            },
        );
        tracing::trace!("created {} {:?}", if is_bar { "menu bar" } else { "menu" }, raw);
        raw
    })
}

pub(crate) fn create_popup_menu() -> Result<RawMenu, Error> {
    Ok(create(false))
}

pub(crate) fn create_menu_bar() -> Result<RawMenu, Error> {
    Ok(create(true))
}

pub(crate) fn destroy_menu(raw: RawMenu) -> Result<(), Error> {
    with_registry(|registry| registry.destroy_menu(raw))
}

pub(crate) fn is_menu(raw: RawMenu) -> bool {
    with_registry(|registry| registry.menus.contains_key(&raw))
}

#[cfg(test)]
pub(crate) fn is_menu_bar(raw: RawMenu) -> Result<bool, Error> {
    with_registry(|registry| Ok(registry.menu(raw)?.is_bar))
}

pub(crate) fn item_count(raw: RawMenu) -> Result<usize, Error> {
    with_registry(|registry| Ok(registry.menu(raw)?.slots.len()))
}

pub(crate) fn item_info(raw: RawMenu, position: usize) -> Result<NativeItem, Error> {
    with_registry(|registry| {
        let slots = &registry.menu(raw)?.slots;
        slots
            .get(position)
            .map(|slot| slot.item.clone())
            .ok_or(Error::BadPosition {
                position,
                len: slots.len(),
            })
    })
}

pub(crate) fn insert_item(raw: RawMenu, position: usize, item: NativeItem) -> Result<(), Error> {
    with_registry(|registry| {
        if let NativeItemKind::SubMenu(child) = item.kind {
            let child = registry.menu(child)?;
            debug_assert!(!child.is_bar, "a menu bar cannot be nested in a menu");
        }
        let slots = &mut registry.menu_mut(raw)?.slots;
        if position > slots.len() {
            return Err(Error::BadPosition {
                position,
                len: slots.len(),
            });
        }
        slots.insert(
            position,
            Slot {
                item,
                is_default: false,
            },
        );
        Ok(())
    })
}

pub(crate) fn set_default_item(raw: RawMenu, position: Option<usize>) -> Result<(), Error> {
    with_registry(|registry| {
        let slots = &mut registry.menu_mut(raw)?.slots;
        if let Some(position) = position {
            if position >= slots.len() {
                return Err(Error::BadPosition {
                    position,
                    len: slots.len(),
                });
            }
        }
        for (index, slot) in slots.iter_mut().enumerate() {
            slot.is_default = Some(index) == position;
        }
        Ok(())
    })
}

pub(crate) fn default_item(raw: RawMenu) -> Result<Option<usize>, Error> {
    with_registry(|registry| {
        Ok(registry
            .menu(raw)?
            .slots
            .iter()
            .position(|slot| slot.is_default))
    })
}
