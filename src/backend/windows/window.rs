// Copyright 2024 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

use std::ptr;

use winapi::shared::minwindef::FALSE;
use winapi::shared::winerror::ERROR_INVALID_WINDOW_HANDLE;
use winapi::um::winuser::{DrawMenuBar, GetMenu, IsWindow, SetMenu};

use super::error::Error;
use crate::backend::{RawMenu, RawWindow};

pub(crate) fn set_window_menu(window: RawWindow, menu: Option<RawMenu>) -> Result<(), Error> {
    let hwnd = window.as_hwnd();
    let hmenu = menu.map_or(ptr::null_mut(), RawMenu::as_hmenu);
    unsafe {
        if SetMenu(hwnd, hmenu) == FALSE {
            return Err(Error::last());
        }
        if DrawMenuBar(hwnd) == FALSE {
            tracing::warn!("failed to redraw menu bar: {}", Error::last());
        }
    }
    Ok(())
}

pub(crate) fn window_menu(window: RawWindow) -> Result<Option<RawMenu>, Error> {
    let hwnd = window.as_hwnd();
    unsafe {
        if IsWindow(hwnd) == FALSE {
            return Err(Error::from_win32(ERROR_INVALID_WINDOW_HANDLE));
        }
        let hmenu = GetMenu(hwnd);
        Ok((!hmenu.is_null()).then(|| RawMenu::from_hmenu(hmenu)))
    }
}
