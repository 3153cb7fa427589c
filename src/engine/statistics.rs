// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator).
    pub stdev: f64,
    pub min: f64,
    pub max: f64,
}

impl SummaryStatistics {
    pub fn from_population(values: &[f64]) -> Result<Self> {
        if values.len() < 2 {
            return Err(Error::InsufficientData {
                required: 2,
                actual: values.len(),
            });
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
        let min = values.iter().fold(f64::INFINITY, |a, &b| a.min(b));
        let max = values.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));

        Ok(Self {
            count: values.len(),
            mean,
            stdev: variance.sqrt(),
            min,
            max,
        })
    }
}

impl fmt::Display for SummaryStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.3}\t{:.3}\t{:.3}\t{:.3}",
            self.mean, self.stdev, self.min, self.max
        )
    }
}

/// Base-10 logarithm of every value. Derived resistances are strictly positive.
pub fn log10_population(values: &[f64]) -> Result<Vec<f64>> {
    values
        .iter()
        .map(|&v| {
            if v > 0.0 {
                Ok(v.log10())
            } else {
                Err(Error::NonPositiveValue(v))
            }
        })
        .collect()
}
