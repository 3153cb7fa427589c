// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use crate::error::{Error, Result};
use crate::units::Unit;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A measured value carried as a best estimate plus a min/max interval.
///
/// Values are stored exactly as given. Some published data sheet rows have an
/// estimate outside their own range; [`Quantity::validated`] rejects those,
/// every other factory keeps them as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    estimate: f64,
    min: f64,
    max: f64,
    unit: Unit,
}

impl Quantity {
    pub fn from_point(value: f64, unit: Unit) -> Self {
        Self {
            estimate: value,
            min: value,
            max: value,
            unit,
        }
    }

    /// Estimate is the midpoint of `min` and `max`.
    pub fn from_range(min: f64, max: f64, unit: Unit) -> Self {
        Self {
            estimate: 0.5 * (min + max),
            min,
            max,
            unit,
        }
    }

    pub fn from_center_and_range(center: f64, min: f64, max: f64, unit: Unit) -> Self {
        Self {
            estimate: center,
            min,
            max,
            unit,
        }
    }

    pub fn plus_or_minus(center: f64, tolerance: f64, unit: Unit) -> Self {
        let tolerance = tolerance.abs();
        Self::from_center_and_range(center, center - tolerance, center + tolerance, unit)
    }

    pub fn validated(center: f64, min: f64, max: f64, unit: Unit) -> Result<Self> {
        let quantity = Self::from_center_and_range(center, min, max, unit);
        if quantity.is_ordered() {
            Ok(quantity)
        } else {
            Err(Error::InvalidRange {
                estimate: center,
                min,
                max,
            })
        }
    }

    pub fn estimate(&self) -> f64 {
        self.estimate
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn is_point(&self) -> bool {
        self.min == self.max
    }

    pub fn is_ordered(&self) -> bool {
        self.min <= self.estimate && self.estimate <= self.max
    }

    /// The interval endpoints, `[min, max]`.
    pub fn bounds(&self) -> [f64; 2] {
        [self.min, self.max]
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, from {} to {} {}",
            self.estimate, self.min, self.max, self.unit
        )
    }
}
