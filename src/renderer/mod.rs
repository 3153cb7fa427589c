// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

pub mod axes;
pub mod chart;
pub mod colors;
pub mod png;

pub use axes::*;
pub use chart::*;
pub use colors::*;
pub use png::*;
