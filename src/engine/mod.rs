// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

pub mod resistance;
pub mod sampling;
pub mod statistics;

pub use resistance::*;
pub use sampling::*;
pub use statistics::*;
