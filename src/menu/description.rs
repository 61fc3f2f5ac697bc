// Copyright 2024 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! Descriptions of items to insert into a menu.

use super::{Menu, MenuHandle};
use crate::backend::{NativeItem, NativeItemKind};

/// A command entry to insert.
///
/// The label has all the fun behavior of Win32 menu text: `&` marks the
/// access key and `&&` is a literal ampersand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandItemDescription {
    label: String,
    id: u32,
    enabled: bool,
    checked: bool,
}

impl CommandItemDescription {
    pub fn new(label: impl Into<String>, id: u32) -> CommandItemDescription {
        CommandItemDescription {
            label: label.into(),
            id,
            enabled: true,
            checked: false,
        }
    }

    /// Gray the entry out.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Show a check mark next to the entry.
    pub fn checked(mut self) -> Self {
        self.checked = true;
        self
    }
}

/// A nested menu entry to insert.
///
/// Inserting it hands the nested menu over to the parent: from then on the
/// parent destroys it, and every clone of `menu` becomes a borrowing view.
#[derive(Debug, Clone)]
pub struct SubMenuItemDescription {
    label: String,
    menu: Menu,
    enabled: bool,
}

impl SubMenuItemDescription {
    pub fn new(label: impl Into<String>, menu: Menu) -> SubMenuItemDescription {
        SubMenuItemDescription {
            label: label.into(),
            menu,
            enabled: true,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// A separator line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeparatorDescription;

/// Anything that can be inserted into a menu.
#[derive(Debug, Clone)]
pub enum ItemDescription {
    Command(CommandItemDescription),
    SubMenu(SubMenuItemDescription),
    Separator(SeparatorDescription),
}

impl ItemDescription {
    /// Splits the description into the native slot contents and, for nested
    /// menus, the handle whose ownership moves to the parent.
    pub(crate) fn into_native(self) -> (NativeItem, Option<MenuHandle>) {
        match self {
            ItemDescription::Command(command) => (
                NativeItem {
                    kind: NativeItemKind::Command(command.id),
                    label: Some(command.label),
                    enabled: command.enabled,
                    checked: command.checked,
                },
                None,
            ),
            ItemDescription::SubMenu(sub_menu) => {
                let handle = sub_menu.menu.core().handle().clone();
                let native = NativeItem {
                    kind: NativeItemKind::SubMenu(handle.raw()),
                    label: Some(sub_menu.label),
                    enabled: sub_menu.enabled,
                    checked: false,
                };
                (native, Some(handle))
            }
            ItemDescription::Separator(_) => (NativeItem::separator(), None),
        }
    }
}

impl From<CommandItemDescription> for ItemDescription {
    fn from(src: CommandItemDescription) -> ItemDescription {
        ItemDescription::Command(src)
    }
}

impl From<SubMenuItemDescription> for ItemDescription {
    fn from(src: SubMenuItemDescription) -> ItemDescription {
        ItemDescription::SubMenu(src)
    }
}

impl From<SeparatorDescription> for ItemDescription {
    fn from(src: SeparatorDescription) -> ItemDescription {
        ItemDescription::Separator(src)
    }
}
