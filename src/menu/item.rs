// Copyright 2024 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! Snapshots of menu items.

use super::{Menu, Ownership};
use crate::backend::{NativeItem, NativeItemKind};

/// What a menu slot held at the moment it was read.
///
/// An `Item` is a copy: later changes to the menu are not reflected in it.
#[derive(Debug, Clone)]
pub enum Item {
    /// An entry that sends a command identifier when chosen.
    Command(CommandItem),
    /// An entry that opens a nested menu.
    SubMenu(SubMenuItem),
    /// A dividing line.
    Separator,
}

/// A command entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandItem {
    id: u32,
    label: String,
    enabled: bool,
    checked: bool,
}

/// An entry opening a nested menu.
#[derive(Debug, Clone)]
pub struct SubMenuItem {
    label: String,
    enabled: bool,
    menu: Menu,
}

impl Item {
    pub(crate) fn from_native(native: NativeItem) -> Item {
        let NativeItem {
            kind,
            label,
            enabled,
            checked,
        } = native;
        let label = label.unwrap_or_default();
        match kind {
            NativeItemKind::Command(id) => Item::Command(CommandItem {
                id,
                label,
                enabled,
                checked,
            }),
            NativeItemKind::SubMenu(raw) => Item::SubMenu(SubMenuItem {
                label,
                enabled,
                // The parent destroys its sub-menus.
                menu: Menu::from_raw(raw, Ownership::Borrowed),
            }),
            NativeItemKind::Separator => Item::Separator,
        }
    }

    /// The command identifier, for command entries.
    pub fn id(&self) -> Option<u32> {
        match self {
            Item::Command(command) => Some(command.id),
            _ => None,
        }
    }

    /// The visible text, if the entry has any.
    pub fn label(&self) -> Option<&str> {
        match self {
            Item::Command(command) => Some(&command.label),
            Item::SubMenu(sub_menu) => Some(&sub_menu.label),
            Item::Separator => None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        match self {
            Item::Command(command) => command.enabled,
            Item::SubMenu(sub_menu) => sub_menu.enabled,
            Item::Separator => true,
        }
    }
}

impl CommandItem {
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the entry shows a check mark.
    pub fn is_checked(&self) -> bool {
        self.checked
    }
}

impl SubMenuItem {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The nested menu. It belongs to the parent menu and is destroyed
    /// along with it.
    pub fn menu(&self) -> &Menu {
        &self.menu
    }
}
