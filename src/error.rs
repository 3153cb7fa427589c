// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use crate::units::Unit;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Incompatible units: cannot convert {from} to {to}")]
    IncompatibleUnits { from: Unit, to: Unit },

    #[error("Material not found: {0}")]
    NotFound(String),

    #[error("Duplicate material name: {0}")]
    DuplicateMaterial(String),

    #[error("Insufficient data: need at least {required} samples, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("Non-positive value {0} cannot be log-transformed")]
    NonPositiveValue(f64),

    #[error("Invalid unit selection '{0}', expected 'mOhms/Sq' or 'Ohms/Sq'")]
    InvalidUnitSelection(String),

    #[error("Invalid range: {min} <= {estimate} <= {max} does not hold")]
    InvalidRange { estimate: f64, min: f64, max: f64 },

    #[error("Render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
