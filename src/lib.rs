// Copyright 2026 Bmn Contributors
// SPDX-License-Identifier: Apache-2.0

//! bmn library — query bugmenot.com for shared logins.
//!
//! This library crate exposes the pipeline modules for integration testing.

#![allow(clippy::new_without_default)]

pub mod cli;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod model;
pub mod render;
