// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use crate::data::Quantity;

/// `count` evenly spaced values from `min` to `max`, both ends included.
///
/// A degenerate interval yields `count` copies of its single value.
pub fn divide_interval(min: f64, max: f64, count: usize) -> Vec<f64> {
    if min == max {
        return vec![min; count];
    }

    match count {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let step = (max - min) / (count as f64 - 1.0);
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        max
                    } else {
                        min + (i as f64) * step
                    }
                })
                .collect()
        }
    }
}

pub fn sample_quantity(quantity: &Quantity, count: usize) -> Vec<f64> {
    divide_interval(quantity.min(), quantity.max(), count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Unit;
    use approx::assert_relative_eq;

    #[test]
    fn test_endpoints_and_count() {
        let samples = divide_interval(0.2, 2.0, 10);

        assert_eq!(samples.len(), 10);
        assert_eq!(samples[0], 0.2);
        assert_eq!(samples[9], 2.0);
        assert_relative_eq!(samples[1], 0.4, epsilon = 1e-12);
        assert!(samples.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_degenerate_interval() {
        assert_eq!(divide_interval(12.0, 12.0, 4), vec![12.0; 4]);
        assert_eq!(divide_interval(12.0, 12.0, 1), vec![12.0]);
    }

    #[test]
    fn test_small_counts() {
        assert!(divide_interval(1.0, 2.0, 0).is_empty());
        assert_eq!(divide_interval(1.0, 2.0, 1), vec![1.0]);
        assert_eq!(divide_interval(1.0, 2.0, 2), vec![1.0, 2.0]);
    }

    #[test]
    fn test_sample_quantity_uses_bounds() {
        let thickness = Quantity::from_center_and_range(15.0, 5.0, 30.0, Unit::Micrometer);
        let samples = sample_quantity(&thickness, 6);

        assert_eq!(samples, vec![5.0, 10.0, 15.0, 20.0, 25.0, 30.0]);
    }
}
