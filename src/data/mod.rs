// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

pub mod catalog;
pub mod material;
pub mod quantity;
pub mod trace;

pub use catalog::*;
pub use material::*;
pub use quantity::*;
pub use trace::*;
