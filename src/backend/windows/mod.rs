// Copyright 2024 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! Win32 implementation of the positional menu API.

pub mod error;
mod menu;
mod util;
mod window;

pub(crate) use menu::*;
pub(crate) use window::*;
