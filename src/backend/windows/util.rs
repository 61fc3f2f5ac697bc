// Copyright 2017 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! Conversions between Rust and Win32 strings and handles.

use std::ffi::OsStr;
use std::os::windows::ffi::OsStrExt;

use winapi::shared::windef::{HMENU, HWND};

use crate::backend::{RawMenu, RawWindow};

pub trait ToWide {
    fn to_wide(&self) -> Vec<u16>;
}

impl<T> ToWide for T
where
    T: AsRef<OsStr> + ?Sized,
{
    fn to_wide(&self) -> Vec<u16> {
        self.as_ref().encode_wide().chain(Some(0)).collect()
    }
}

impl RawMenu {
    /// Wraps an `HMENU` obtained from the system.
    pub fn from_hmenu(hmenu: HMENU) -> RawMenu {
        RawMenu(hmenu as usize)
    }

    pub fn as_hmenu(self) -> HMENU {
        self.0 as HMENU
    }
}

impl RawWindow {
    /// Wraps an `HWND` obtained from the system.
    pub fn from_hwnd(hwnd: HWND) -> RawWindow {
        RawWindow(hwnd as usize)
    }

    pub fn as_hwnd(self) -> HWND {
        self.0 as HWND
    }
}
