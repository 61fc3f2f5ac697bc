// Copyright 2024 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! Platform specific implementations of the positional menu API.
//!
//! Every backend exposes the same set of free functions operating on
//! [`RawMenu`] and [`RawWindow`] identifiers, plus an `error` module.

cfg_if::cfg_if! {
    if #[cfg(all(target_os = "windows", not(feature = "headless")))] {
        mod windows;
        pub(crate) use windows::*;
    } else {
        mod headless;
        pub(crate) use headless::*;
    }
}

/// The platform identifier of a native menu.
///
/// This is a plain value; holding one keeps nothing alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawMenu(pub(crate) usize);

/// The platform identifier of a top-level window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawWindow(pub(crate) usize);

/// What a single native menu slot contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NativeItem {
    pub kind: NativeItemKind,
    /// `None` for separators.
    pub label: Option<String>,
    pub enabled: bool,
    pub checked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NativeItemKind {
    Command(u32),
    SubMenu(RawMenu),
    Separator,
}

impl NativeItem {
    pub fn separator() -> NativeItem {
        NativeItem {
            kind: NativeItemKind::Separator,
            label: None,
            enabled: true,
            checked: false,
        }
    }
}
