// Copyright 2024 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! Errors from the in-process menu registry.

use std::fmt;

use crate::backend::{RawMenu, RawWindow};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The menu was never created or has already been destroyed.
    NoSuchMenu(RawMenu),
    /// The window was never created or has already been destroyed.
    NoSuchWindow(RawWindow),
    /// A positional call addressed a slot the menu does not have.
    BadPosition { position: usize, len: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Error::NoSuchMenu(raw) => write!(f, "No menu with handle {:#x}", raw.0),
            Error::NoSuchWindow(raw) => write!(f, "No window with handle {:#x}", raw.0),
            Error::BadPosition { position, len } => {
                write!(f, "Position {position} is invalid for a menu of {len} items")
            }
        }
    }
}

impl std::error::Error for Error {}
