// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the Study Signal application.

pub mod canvas;
pub mod detail;
pub mod gallery;
pub mod map_modal;
pub mod sound_modal;
pub mod stamp_board;
