// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Core application state: notebooks, navigation, and the drawing surface.

pub mod nav;
pub mod notebook;
pub mod session;
pub mod surface;
