// Copyright 2024 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! Tests of the menu wrappers that cross module boundaries.
//!
//! These are not especially interested in the details of the items (except
//! where they affect the menu's behaviour). Every scenario runs against both
//! menus and menu bars, wrapped both as owners and as borrowers.


use static_assertions::assert_not_impl_any;

use crate::backend;
use crate::error::Error;
use crate::menu::{
    find_first_item_with_id, CommandItemDescription, ConstItemCursor, Item, ItemCursor, Menu,
    MenuBar, Ownership, SubMenuItemDescription,
};
use harness::*;

assert_not_impl_any!(Menu: Send, Sync);
assert_not_impl_any!(MenuBar: Send, Sync);
assert_not_impl_any!(ItemCursor<'static>: Send, Sync);

fn command(label: &str, id: u32) -> CommandItemDescription {
    CommandItemDescription::new(label, id)
}

fn ids<M: TestSubject>(menu: &M) -> Vec<Option<u32>> {
    menu.core()
        .items()
        .map(|item| item.unwrap().id())
        .collect()
}

fn set_up_test_menu<M: TestSubject>(menu: &M) {
    let core = menu.core();
    core.append(command("Command1", 1).into()).unwrap();
    core.append(command("Command2", 2).into()).unwrap();
    core.append(command("Command3", 3).into()).unwrap();
}

fn assert_empty<M: TestSubject>(menu: &M) {
    let core = menu.core();
    assert_eq!(core.begin(), core.end());
    assert_eq!(core.len(), 0);
    assert!(matches!(core.get(0), Err(Error::OutOfRange { .. })));
    if let Some(item) = core.items().next() {
        panic!("empty menu should not iterate, got {item:?}");
    }
}

fn assert_single_item<M: TestSubject>(menu: &M) {
    let core = menu.core();
    assert_ne!(core.begin(), core.end());
    assert_eq!(core.len(), 1);
    assert!(core.get(0).is_ok());
    assert_eq!(
        core.get(1).unwrap_err(),
        Error::OutOfRange {
            position: 1,
            len: 1
        }
    );
}

/// A wrapped menu holding two commands inserted behind its back.
fn two_raw_commands<M: TestSubject>() -> TestMenu<M> {
    let t = TestMenu::<M>::create(Ownership::Owned);
    insert_raw_command(t.raw(), "C", 42);
    insert_raw_command(t.raw(), "D", 43);
    t
}

mod scenarios {
    use super::*;

    pub fn empty<M: TestSubject>(t: TestMenu<M>) {
        assert_empty(t.menu());
        t.check_ownership();
    }

    pub fn create_command<M: TestSubject>(t: TestMenu<M>) {
        t.menu().core().append(command("Command", 42).into()).unwrap();
        assert_single_item(t.menu());
        t.check_ownership();
    }

    pub fn existing_command<M: TestSubject>(t: TestMenu<M>) {
        insert_raw_command(t.raw(), "C", 42);
        assert_single_item(t.menu());
        t.check_ownership();
    }

    pub fn create_submenu<M: TestSubject>(t: TestMenu<M>) {
        let sub = Menu::new().unwrap();
        sub.append(command("Boo", 1)).unwrap();
        t.menu()
            .core()
            .append(SubMenuItemDescription::new("Pop", sub.clone()).into())
            .unwrap();

        assert_single_item(t.menu());
        assert_eq!(sub.ownership(), Ownership::Borrowed);
        t.check_ownership();
        // Whoever destroyed the parent destroyed the sub-menu with it.
        assert!(!sub.is_valid());
    }

    pub fn default_item<M: TestSubject>(t: TestMenu<M>) {
        let core = t.menu().core();
        core.append(command("First", 1).into()).unwrap();
        let sub = Menu::new().unwrap();
        sub.append(command("Boo", 1)).unwrap();
        core.append(SubMenuItemDescription::new("Second", sub).into()).unwrap();
        core.append(command("Third", 1).into()).unwrap();

        assert_eq!(core.default_item(), core.end());

        for n in 0..3 {
            let at = (core.begin() + n).unwrap();
            core.set_default_item(at).unwrap();
            assert_eq!(core.default_item(), at);
        }

        core.set_default_item(core.end()).unwrap();
        assert_eq!(core.default_item(), core.end());

        t.check_ownership();
    }

    pub fn insert<M: TestSubject>(t: TestMenu<M>, offset: isize, expected: [u32; 4]) {
        let core = t.menu().core();
        set_up_test_menu(t.menu());
        let at = (core.begin() + offset).unwrap();
        core.insert(command("Interloper", 42).into(), at).unwrap();

        assert_eq!(core.len(), 4);
        let expected: Vec<_> = expected.iter().copied().map(Some).collect();
        assert_eq!(ids(t.menu()), expected);
        t.check_ownership();
    }

    pub fn stale_cursor_faults<M: TestSubject>(t: TestMenu<M>) {
        let core = t.menu().core();
        set_up_test_menu(t.menu());
        let end = core.end();
        let last = (end - 1).unwrap();

        // The parent of a menu can destroy it at any time.
        backend::destroy_menu(t.raw()).unwrap();
        assert!(!core.is_valid());
        assert!(matches!(last.item(), Err(Error::OutOfRange { .. })));
        assert_eq!(
            core.insert(command("Late", 9).into(), end),
            Err(Error::OutOfRange {
                position: 3,
                len: 0
            })
        );
    }

    pub fn stale_range_faults<M: TestSubject>(t: TestMenu<M>) {
        let core = t.menu().core();
        set_up_test_menu(t.menu());
        let (first, last) = (core.begin(), core.end());
        let mut items = core.items();
        assert_eq!(items.next().unwrap().unwrap().id(), Some(1));

        backend::destroy_menu(t.raw()).unwrap();
        assert!(matches!(
            find_first_item_with_id(first, last, 2),
            Err(Error::OutOfRange { .. })
        ));
        assert!(matches!(items.next(), Some(Err(Error::OutOfRange { .. }))));
        assert!(matches!(items.next_back(), Some(Err(Error::OutOfRange { .. }))));
        assert!(items.next().is_none());
    }

    pub fn rewrapping_joins_the_existing_wrapper<M: TestSubject>(t: TestMenu<M>) {
        let ownership = t.menu().core().handle().ownership();
        let view = M::wrap(t.raw(), Ownership::Borrowed);
        assert_eq!(&view, t.menu());
        assert_eq!(view.core().handle().ownership(), ownership);

        // Both wrappers now answer to the same ownership.
        view.core().handle().release_to_parent();
        assert_eq!(t.menu().core().handle().ownership(), Ownership::Borrowed);
        drop(view);
        assert!(backend::is_menu(t.raw()));

        let owner = M::wrap(t.raw(), Ownership::Owned);
        assert_eq!(t.menu().core().handle().ownership(), Ownership::Owned);
        drop(owner);
        assert!(backend::is_menu(t.raw()));
        let raw = t.raw();
        drop(t);
        assert!(!backend::is_menu(raw));
    }
}

macro_rules! wrapped_menu_tests {
    ($($module:ident: $subject:ty, $ownership:expr;)*) => {$(
        mod $module {
            use super::*;
            use test_log::test;

            fn fixture() -> TestMenu<$subject> {
                TestMenu::create($ownership)
            }

            #[test]
            fn existing_empty_menu() {
                scenarios::empty(fixture());
            }

            #[test]
            fn create_command() {
                scenarios::create_command(fixture());
            }

            #[test]
            fn existing_command() {
                scenarios::existing_command(fixture());
            }

            #[test]
            fn create_submenu() {
                scenarios::create_submenu(fixture());
            }

            #[test]
            fn default_item() {
                scenarios::default_item(fixture());
            }

            #[test]
            fn insert_beginning() {
                scenarios::insert(fixture(), 0, [42, 1, 2, 3]);
            }

            #[test]
            fn insert_middle() {
                scenarios::insert(fixture(), 2, [1, 2, 42, 3]);
            }

            #[test]
            fn insert_end() {
                scenarios::insert(fixture(), 3, [1, 2, 3, 42]);
            }

            #[test]
            fn stale_cursor_faults() {
                scenarios::stale_cursor_faults(fixture());
            }

            #[test]
            fn stale_range_faults() {
                scenarios::stale_range_faults(fixture());
            }

            #[test]
            fn rewrapping_joins_the_existing_wrapper() {
                scenarios::rewrapping_joins_the_existing_wrapper(fixture());
            }
        }
    )*};
}

wrapped_menu_tests! {
    owned_menu: Menu, Ownership::Owned;
    borrowed_menu: Menu, Ownership::Borrowed;
    owned_menu_bar: MenuBar, Ownership::Owned;
    borrowed_menu_bar: MenuBar, Ownership::Borrowed;
}

macro_rules! cursor_tests {
    ($($module:ident: $subject:ty;)*) => {$(
        mod $module {
            use super::*;
            use test_log::test;

            #[test]
            fn iterator_copy() {
                let t = TestMenu::<$subject>::create(Ownership::Owned);
                let core = t.menu().core();

                let mut start = core.begin();
                let mut const_start: ConstItemCursor = core.begin().into();
                assert_eq!(start, const_start);

                start = core.begin();
                const_start = core.begin().into();
                assert_eq!(start, const_start);
            }

            #[test]
            fn iterator_increment() {
                let t = two_raw_commands::<$subject>();
                let core = t.menu().core();

                let mut it = core.begin();
                assert_ne!(it, core.end());
                it.increment().unwrap();
                assert_ne!(it, core.begin());
                assert_ne!(it, core.end());
                it.increment().unwrap();
                assert_eq!(it, core.end());
                assert!(matches!(it.increment(), Err(Error::OutOfRange { .. })));
                assert_eq!(it, core.end());
            }

            #[test]
            fn iterator_decrement() {
                let t = two_raw_commands::<$subject>();
                let core = t.menu().core();

                let mut it = core.end();
                assert_ne!(it, core.begin());
                it.decrement().unwrap();
                assert_ne!(it, core.begin());
                assert_ne!(it, core.end());
                it.decrement().unwrap();
                assert_eq!(it, core.begin());
                assert!(matches!(it.decrement(), Err(Error::OutOfRange { .. })));
            }

            #[test]
            fn iterator_advance() {
                let t = two_raw_commands::<$subject>();
                let core = t.menu().core();

                let it = core.begin();
                assert_ne!(it, core.end());
                let it = (it + 2).unwrap();
                assert_eq!(it, core.end());
                assert!((it + 1).is_err());
                assert!((it - 3).is_err());
            }

            #[test]
            fn iterator_reverse() {
                let t = two_raw_commands::<$subject>();
                let core = t.menu().core();

                let it = core.end();
                assert_ne!(it, core.begin());
                let it = (it - 2).unwrap();
                assert_eq!(it, core.begin());
                assert!((it - 1).is_err());
                assert!((it + 3).is_err());
            }

            #[test]
            fn iterator_distance() {
                let t = two_raw_commands::<$subject>();
                let core = t.menu().core();

                assert_eq!(core.begin() - core.begin(), 0);
                assert_eq!(core.begin() - core.end(), -2);
                assert_eq!(core.end() - core.begin(), 2);
                assert_eq!((core.end() - core.begin()) as usize, core.len());
            }

            #[test]
            fn dereference_end_fails() {
                let t = two_raw_commands::<$subject>();
                let core = t.menu().core();

                assert_eq!(core.begin().item().unwrap().label(), Some("C"));
                assert!(core.end().item().is_err());
            }

            #[test]
            fn find_empty() {
                let t = TestMenu::<$subject>::create(Ownership::Owned);
                let core = t.menu().core();

                assert_eq!(find_first_item_with_id(core.begin(), core.end(), 1), Ok(core.end()));
            }

            #[test]
            fn find() {
                let t = TestMenu::<$subject>::create(Ownership::Owned);
                set_up_test_menu(t.menu());
                let core = t.menu().core();
                let (begin, end) = (core.begin(), core.end());
                let at = |n: isize| (begin + n).unwrap();

                for id in 1..=3 {
                    let found = find_first_item_with_id(begin, end, id).unwrap();
                    assert_eq!(found.item().unwrap().id(), Some(id));
                }

                // Non-existent item should not be found.
                assert_eq!(find_first_item_with_id(begin, end, 42), Ok(end));

                // Items outside the range should not be found.
                assert_eq!(find_first_item_with_id(at(1), end, 1), Ok(end));
                assert_eq!(find_first_item_with_id(at(2), end, 2), Ok(end));
                assert_eq!(find_first_item_with_id(at(3), end, 3), Ok(end));
                let last = (end - 1).unwrap();
                assert_eq!(find_first_item_with_id(begin, last, 3), Ok(last));
                let last = (end - 2).unwrap();
                assert_eq!(find_first_item_with_id(begin, last, 2), Ok(last));
                let last = (end - 3).unwrap();
                assert_eq!(find_first_item_with_id(begin, last, 3), Ok(last));
            }

            #[test]
            fn find_despite_duplicates() {
                let t = TestMenu::<$subject>::create(Ownership::Owned);
                set_up_test_menu(t.menu());
                let core = t.menu().core();
                core.append(command("Interloper", 2).into()).unwrap();

                let first = find_first_item_with_id(core.begin(), core.end(), 2).unwrap();
                assert_eq!(first.item().unwrap().label(), Some("Command2"));

                let next = (first + 1).unwrap();
                let second = find_first_item_with_id(next, core.end(), 2).unwrap();
                assert_eq!(second.item().unwrap().label(), Some("Interloper"));

                assert_ne!(first, second);
            }
        }
    )*};
}

cursor_tests! {
    menu_cursors: Menu;
    menu_bar_cursors: MenuBar;
}

mod fresh {
    use super::*;
    use test_log::test;

    #[test]
    fn create_empty_menu() {
        scenarios::empty(TestMenu::adopt(Menu::new().unwrap()));
    }

    #[test]
    fn empty_menu_bar() {
        scenarios::empty(TestMenu::adopt(MenuBar::new().unwrap()));
    }

    #[test]
    fn create_command_in_new_menu_bar() {
        scenarios::create_command(TestMenu::adopt(MenuBar::new().unwrap()));
    }

    #[test]
    fn menu_copy() {
        let m = Menu::new().unwrap();

        let mut n = m.clone();
        assert_eq!(m, n);

        let p = Menu::new().unwrap();
        n = p.clone();
        assert_eq!(n, p);
        assert_ne!(n, m);
    }

    #[test]
    fn menu_bar_copy() {
        let m = MenuBar::new().unwrap();
        let n = m.clone();
        assert_eq!(m, n);
        assert_ne!(m, MenuBar::new().unwrap());
    }

    #[test]
    fn sub_menu_items_view_the_nested_menu() {
        let bar = MenuBar::new().unwrap();
        let file = Menu::new().unwrap();
        file.append(command("Open", 1)).unwrap();
        bar.append(SubMenuItemDescription::new("File", file.clone())).unwrap();

        let Item::SubMenu(item) = bar.get(0).unwrap() else {
            panic!("expected a sub-menu");
        };
        assert_eq!(item.menu(), &file);
        assert_eq!(item.menu().ownership(), Ownership::Borrowed);
        item.menu().append(command("Close", 2)).unwrap();
        assert_eq!(file.len(), 2);
    }
}
