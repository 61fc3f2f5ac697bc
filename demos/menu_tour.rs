// Copyright 2024 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! Builds a small application menu bar and walks it.

use druid_menu::{
    find_first_item_with_id, CommandItemDescription, Item, Menu, MenuBar, SeparatorDescription,
    SubMenuItemDescription,
};

const ID_OPEN: u32 = 0x100;
const ID_SAVE: u32 = 0x101;
const ID_EXIT: u32 = 0x102;
const ID_WRAP: u32 = 0x200;

fn print_menu(items: druid_menu::Items, depth: usize) -> anyhow::Result<()> {
    for item in items {
        let indent = "  ".repeat(depth);
        match item? {
            Item::Command(command) => {
                let check = if command.is_checked() { "[x] " } else { "" };
                tracing::info!("{indent}{check}{} ({:#x})", command.label(), command.id());
            }
            Item::SubMenu(sub_menu) => {
                tracing::info!("{indent}{} >", sub_menu.label());
                print_menu(sub_menu.menu().items(), depth + 1)?;
            }
            Item::Separator => tracing::info!("{indent}----"),
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let file = Menu::new()?;
    file.append(CommandItemDescription::new("&Open", ID_OPEN))?;
    file.append(CommandItemDescription::new("&Save", ID_SAVE).disabled())?;
    file.append(SeparatorDescription)?;
    file.append(CommandItemDescription::new("E&xit", ID_EXIT))?;
    file.set_default_item(file.begin())?;

    let view = Menu::new()?;
    view.append(CommandItemDescription::new("&Word Wrap", ID_WRAP).checked())?;

    let bar = MenuBar::new()?;
    bar.append(SubMenuItemDescription::new("&File", file.clone()))?;
    bar.insert(SubMenuItemDescription::new("&View", view), bar.end())?;

    print_menu(bar.items(), 0)?;

    let exit = find_first_item_with_id(file.begin(), file.end(), ID_EXIT)?;
    tracing::info!(
        "exit sits at position {} of {}, default is at {}",
        exit.position(),
        file.len(),
        file.default_item().position()
    );
    Ok(())
}
