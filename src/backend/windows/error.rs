// Copyright 2019 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! Errors from the Win32 menu API.

use std::fmt;

use winapi::shared::winerror::{HRESULT, HRESULT_FROM_WIN32};
use winapi::um::errhandlingapi::GetLastError;

/// Error codes. At the moment, this is little more than HRESULT, but that
/// might change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Hr(HRESULT),
}

impl Error {
    /// Captures the calling thread's last Win32 error.
    pub(crate) fn last() -> Error {
        Error::from_win32(unsafe { GetLastError() })
    }

    pub(crate) fn from_win32(code: u32) -> Error {
        Error::Hr(HRESULT_FROM_WIN32(code))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match *self {
            Error::Hr(hr) => write!(f, "HRESULT 0x{:x}", hr),
        }
    }
}

impl std::error::Error for Error {}

impl From<HRESULT> for Error {
    fn from(hr: HRESULT) -> Error {
        Error::Hr(hr)
    }
}
