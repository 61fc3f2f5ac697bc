// Copyright 2024 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! Errors raised by menu wrappers.

use std::fmt;

use crate::backend::error as backend;

pub use crate::backend::error::Error as PlatformError;

/// Menu errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A cursor or index was outside the legal range of the menu.
    ///
    /// Cursors may sit anywhere in `0..=len`; items only exist in `0..len`.
    OutOfRange {
        /// The offending position. Negative when arithmetic moved before the
        /// first item.
        position: isize,
        /// The number of items in the menu when the check was made.
        len: usize,
    },
    /// A cursor belonging to a different menu was used to designate a
    /// position in this one.
    ForeignCursor,
    /// Platform specific error.
    Platform(PlatformError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Error::OutOfRange { position, len } => write!(
                f,
                "Menu position {position} is out of range for a menu of {len} items."
            ),
            Error::ForeignCursor => write!(f, "The cursor does not belong to this menu."),
            Error::Platform(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for Error {}

impl From<backend::Error> for Error {
    fn from(src: backend::Error) -> Error {
        Error::Platform(src)
    }
}
