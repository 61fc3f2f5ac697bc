// Copyright 2024 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! Safe wrappers for the positional `HMENU` calls.

use std::mem;
use std::ptr;

use winapi::shared::minwindef::{FALSE, UINT};
use winapi::shared::windef::HMENU;
use winapi::um::winuser::*;

use super::error::Error;
use super::util::ToWide;
use crate::backend::{NativeItem, NativeItemKind, RawMenu};

/// `GetMenuDefaultItem` and friends use this for "no item".
const NO_ITEM: UINT = UINT::MAX;

const BY_POSITION: UINT = 1;

fn empty_item_info() -> MENUITEMINFOW {
    let mut info: MENUITEMINFOW = unsafe { mem::zeroed() };
    info.cbSize = mem::size_of::<MENUITEMINFOW>() as UINT;
    info
}

fn check_created(hmenu: HMENU) -> Result<RawMenu, Error> {
    if hmenu.is_null() {
        Err(Error::last())
    } else {
        let raw = RawMenu::from_hmenu(hmenu);
        tracing::trace!("created {:?}", raw);
        Ok(raw)
    }
}

pub(crate) fn create_popup_menu() -> Result<RawMenu, Error> {
    check_created(unsafe { CreatePopupMenu() })
}

pub(crate) fn create_menu_bar() -> Result<RawMenu, Error> {
    check_created(unsafe { CreateMenu() })
}

pub(crate) fn destroy_menu(raw: RawMenu) -> Result<(), Error> {
    if unsafe { DestroyMenu(raw.as_hmenu()) } == FALSE {
        Err(Error::last())
    } else {
        Ok(())
    }
}

pub(crate) fn is_menu(raw: RawMenu) -> bool {
    unsafe { IsMenu(raw.as_hmenu()) != FALSE }
}

pub(crate) fn item_count(raw: RawMenu) -> Result<usize, Error> {
    let count = unsafe { GetMenuItemCount(raw.as_hmenu()) };
    if count < 0 {
        Err(Error::last())
    } else {
        Ok(count as usize)
    }
}

pub(crate) fn item_info(raw: RawMenu, position: usize) -> Result<NativeItem, Error> {
    let hmenu = raw.as_hmenu();
    let mut info = empty_item_info();
    info.fMask = MIIM_FTYPE | MIIM_STATE | MIIM_ID | MIIM_SUBMENU | MIIM_STRING;
    unsafe {
        if GetMenuItemInfoW(hmenu, position as UINT, BY_POSITION as _, &mut info) == FALSE {
            return Err(Error::last());
        }
    }

    let (ftype, fstate, id, submenu) = (info.fType, info.fState, info.wID, info.hSubMenu);
    let kind = if !submenu.is_null() {
        NativeItemKind::SubMenu(RawMenu::from_hmenu(submenu))
    } else if ftype & MFT_SEPARATOR != 0 {
        NativeItemKind::Separator
    } else {
        NativeItemKind::Command(id)
    };

    let label = if kind == NativeItemKind::Separator {
        None
    } else {
        // The first call reported the label length without the terminator.
        let mut buf = vec![0u16; info.cch as usize + 1];
        let mut text = empty_item_info();
        text.fMask = MIIM_STRING;
        text.dwTypeData = buf.as_mut_ptr();
        text.cch = buf.len() as UINT;
        unsafe {
            if GetMenuItemInfoW(hmenu, position as UINT, BY_POSITION as _, &mut text) == FALSE {
                return Err(Error::last());
            }
        }
        let len = (text.cch as usize).min(buf.len() - 1);
        Some(String::from_utf16_lossy(&buf[..len]))
    };

    Ok(NativeItem {
        kind,
        label,
        enabled: fstate & MFS_DISABLED == 0,
        checked: fstate & MFS_CHECKED != 0,
    })
}

pub(crate) fn insert_item(raw: RawMenu, position: usize, item: NativeItem) -> Result<(), Error> {
    let mut info = empty_item_info();
    info.fMask = MIIM_FTYPE | MIIM_STATE;
    if !item.enabled {
        info.fState |= MFS_DISABLED;
    }
    if item.checked {
        info.fState |= MFS_CHECKED;
    }
    match item.kind {
        NativeItemKind::Command(id) => {
            info.fMask |= MIIM_ID;
            info.wID = id;
        }
        NativeItemKind::SubMenu(child) => {
            info.fMask |= MIIM_SUBMENU;
            info.hSubMenu = child.as_hmenu();
        }
        NativeItemKind::Separator => info.fType |= MFT_SEPARATOR,
    }

    // Must outlive the insert call below.
    let mut wide = match (&item.kind, &item.label) {
        (NativeItemKind::Separator, _) | (_, None) => None,
        (_, Some(label)) => Some(label.as_str().to_wide()),
    };
    if let Some(wide) = wide.as_mut() {
        info.fMask |= MIIM_STRING;
        info.fType |= MFT_STRING;
        info.dwTypeData = wide.as_mut_ptr();
        info.cch = (wide.len() - 1) as UINT;
    } else {
        info.dwTypeData = ptr::null_mut();
    }

    unsafe {
        if InsertMenuItemW(raw.as_hmenu(), position as UINT, BY_POSITION as _, &info) == FALSE {
            return Err(Error::last());
        }
    }
    Ok(())
}

pub(crate) fn set_default_item(raw: RawMenu, position: Option<usize>) -> Result<(), Error> {
    let item = position.map_or(NO_ITEM, |position| position as UINT);
    if unsafe { SetMenuDefaultItem(raw.as_hmenu(), item, BY_POSITION) } == FALSE {
        Err(Error::last())
    } else {
        Ok(())
    }
}

pub(crate) fn default_item(raw: RawMenu) -> Result<Option<usize>, Error> {
    let position = unsafe { GetMenuDefaultItem(raw.as_hmenu(), BY_POSITION, GMDI_USEDISABLED) };
    if position == NO_ITEM {
        if is_menu(raw) {
            Ok(None)
        } else {
            Err(Error::last())
        }
    } else {
        Ok(Some(position as usize))
    }
}
