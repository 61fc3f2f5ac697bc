// Copyright 2024 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! Random-access cursors over menu positions.

use std::fmt;
use std::iter::FusedIterator;
use std::ops::{Add, Sub};

use super::{Item, MenuCore};
use crate::error::Error;

/// A position in a menu, from the first item up to one past the last.
///
/// A cursor is a plain `(menu, position)` pair. It does not track changes to
/// the menu: if items are removed out from under it, using it again fails
/// with [`Error::OutOfRange`] instead of reading the wrong slot.
///
/// `ItemCursor` is the cursor that designates positions to mutate, as taken
/// by [`Menu::insert`] and [`Menu::set_default_item`]. It converts into the
/// read-only [`ConstItemCursor`], but not the other way round.
///
/// [`Menu::insert`]: super::Menu::insert
/// [`Menu::set_default_item`]: super::Menu::set_default_item
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ItemCursor<'a> {
    core: &'a MenuCore,
    position: usize,
}

impl<'a> ItemCursor<'a> {
    pub(crate) fn new(core: &'a MenuCore, position: usize) -> ItemCursor<'a> {
        ItemCursor { core, position }
    }

    pub(crate) fn belongs_to(&self, core: &MenuCore) -> bool {
        self.core == core
    }

    /// The zero-based position of this cursor.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Reads the item under the cursor.
    ///
    /// Fails with [`Error::OutOfRange`] on the end cursor.
    pub fn item(&self) -> Result<Item, Error> {
        self.core.get(self.position)
    }

    /// Returns the cursor `n` positions away.
    ///
    /// Landing exactly on the end position is allowed; anything before the
    /// first item or past the end is an [`Error::OutOfRange`].
    pub fn offset(self, n: isize) -> Result<ItemCursor<'a>, Error> {
        let len = self.core.len();
        let target = (self.position as isize).saturating_add(n);
        if target < 0 || target as usize > len {
            return Err(Error::OutOfRange {
                position: target,
                len,
            });
        }
        Ok(ItemCursor {
            position: target as usize,
            ..self
        })
    }

    /// Moves to the next position.
    pub fn increment(&mut self) -> Result<(), Error> {
        *self = self.offset(1)?;
        Ok(())
    }

    /// Moves to the previous position.
    pub fn decrement(&mut self) -> Result<(), Error> {
        *self = self.offset(-1)?;
        Ok(())
    }

    /// Borrows this position as a read-only cursor.
    pub fn as_const(self) -> ConstItemCursor<'a> {
        ConstItemCursor(self)
    }
}

impl fmt::Debug for ItemCursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ItemCursor")
            .field("menu", &self.core.raw())
            .field("position", &self.position)
            .finish()
    }
}

impl<'a> Add<isize> for ItemCursor<'a> {
    type Output = Result<ItemCursor<'a>, Error>;

    fn add(self, n: isize) -> Self::Output {
        self.offset(n)
    }
}

impl<'a> Sub<isize> for ItemCursor<'a> {
    type Output = Result<ItemCursor<'a>, Error>;

    fn sub(self, n: isize) -> Self::Output {
        match n.checked_neg() {
            Some(n) => self.offset(n),
            None => Err(Error::OutOfRange {
                position: isize::MIN,
                len: self.core.len(),
            }),
        }
    }
}

/// The signed distance between two cursors.
///
/// # Panics
///
/// Panics if the cursors belong to different menus.
impl<'a> Sub for ItemCursor<'a> {
    type Output = isize;

    fn sub(self, origin: ItemCursor<'a>) -> isize {
        assert!(
            self.core == origin.core,
            "cannot measure the distance between cursors of different menus"
        );
        self.position as isize - origin.position as isize
    }
}

/// A read-only position in a menu.
///
/// Obtained from an [`ItemCursor`]; supports the same navigation but cannot
/// be used to designate an insertion point or the default item.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ConstItemCursor<'a>(ItemCursor<'a>);

impl<'a> ConstItemCursor<'a> {
    pub fn position(&self) -> usize {
        self.0.position
    }

    pub fn item(&self) -> Result<Item, Error> {
        self.0.item()
    }

    pub fn offset(self, n: isize) -> Result<ConstItemCursor<'a>, Error> {
        self.0.offset(n).map(ConstItemCursor)
    }

    pub fn increment(&mut self) -> Result<(), Error> {
        self.0.increment()
    }

    pub fn decrement(&mut self) -> Result<(), Error> {
        self.0.decrement()
    }
}

impl fmt::Debug for ConstItemCursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ConstItemCursor")
            .field("menu", &self.0.core.raw())
            .field("position", &self.0.position)
            .finish()
    }
}

impl<'a> From<ItemCursor<'a>> for ConstItemCursor<'a> {
    fn from(cursor: ItemCursor<'a>) -> ConstItemCursor<'a> {
        ConstItemCursor(cursor)
    }
}

impl<'a> PartialEq<ItemCursor<'a>> for ConstItemCursor<'a> {
    fn eq(&self, other: &ItemCursor<'a>) -> bool {
        self.0 == *other
    }
}

impl<'a> PartialEq<ConstItemCursor<'a>> for ItemCursor<'a> {
    fn eq(&self, other: &ConstItemCursor<'a>) -> bool {
        *self == other.0
    }
}

impl<'a> Add<isize> for ConstItemCursor<'a> {
    type Output = Result<ConstItemCursor<'a>, Error>;

    fn add(self, n: isize) -> Self::Output {
        (self.0 + n).map(ConstItemCursor)
    }
}

impl<'a> Sub<isize> for ConstItemCursor<'a> {
    type Output = Result<ConstItemCursor<'a>, Error>;

    fn sub(self, n: isize) -> Self::Output {
        (self.0 - n).map(ConstItemCursor)
    }
}

impl<'a> Sub for ConstItemCursor<'a> {
    type Output = isize;

    fn sub(self, origin: ConstItemCursor<'a>) -> isize {
        self.0 - origin.0
    }
}

/// An iterator over the items of a menu, front to back.
///
/// The range is fixed when the iterator is created. Each step reads the
/// native slot afresh, so a menu that shrinks mid-iteration yields errors for
/// the vanished positions.
pub struct Items<'a> {
    core: &'a MenuCore,
    front: usize,
    back: usize,
}

impl<'a> Items<'a> {
    pub(crate) fn new(core: &'a MenuCore, len: usize) -> Items<'a> {
        Items {
            core,
            front: 0,
            back: len,
        }
    }
}

impl Iterator for Items<'_> {
    type Item = Result<Item, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.core.get(self.front);
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Items<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.core.get(self.back))
    }
}

impl ExactSizeIterator for Items<'_> {}

impl FusedIterator for Items<'_> {}

/// Finds the first item in `[first, last)` whose identifier is `id`.
///
/// Returns `last` when no item matches. To find a later duplicate, search
/// again starting one past the previous match.
///
/// Reading an item that is no longer there, because the menu shrank or was
/// destroyed after the cursors were taken, is an error rather than a miss.
pub fn find_first_item_with_id<'a>(
    first: ItemCursor<'a>,
    last: ItemCursor<'a>,
    id: u32,
) -> Result<ItemCursor<'a>, Error> {
    let mut cursor = first;
    while cursor != last {
        if cursor.item()?.id() == Some(id) {
            return Ok(cursor);
        }
        cursor.increment()?;
    }
    Ok(last)
}
