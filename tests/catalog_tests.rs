// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use ink_resistivity::data::*;
use ink_resistivity::{Error, Unit};

#[test]
fn test_quantity_accessors_are_unmodified() {
    let cases = [
        (1.0, 1.0, 1.0),
        (2.5, 1.0, 4.0),
        (0.0, -3.0, 3.0),
        (1e-3, 1e-4, 1e-2),
    ];

    for (estimate, min, max) in cases {
        let q = Quantity::from_center_and_range(estimate, min, max, Unit::Micrometer);
        assert_eq!(q.estimate(), estimate);
        assert_eq!(q.min(), min);
        assert_eq!(q.max(), max);
        assert_eq!(q.unit(), Unit::Micrometer);
    }
}

#[test]
fn test_validated_quantity_rejects_misordered_rows() {
    assert!(Quantity::validated(20.0, 10.0, 30.0, Unit::Micrometer).is_ok());

    let result = Quantity::validated(19.0, 22.0, 27.0, Unit::MicroOhmCentimeter);
    assert!(matches!(result, Err(Error::InvalidRange { .. })));
}

#[test]
fn test_standard_catalog_metal_indices() {
    let catalog = Catalog::standard().unwrap();

    assert_eq!(catalog.by_name("silver").unwrap().plot_index, 20);
    assert_eq!(catalog.by_name("copper").unwrap().plot_index, 21);

    let metals = catalog.by_category(Category::Metal);
    assert_eq!(metals.len(), 11);
    for (offset, metal) in metals.iter().enumerate() {
        assert_eq!(metal.plot_index, 20 + offset as u32);
        assert!(metal.is_metal());
    }
}

#[test]
fn test_carbon_view_in_insertion_order() {
    let catalog = Catalog::standard().unwrap();
    let names: Vec<&str> = catalog
        .by_category(Category::Carbon)
        .iter()
        .map(|m| m.name.as_str())
        .collect();

    assert_eq!(names, vec!["jr-700lv", "jr-700hv", "hpr-059"]);
}

#[test]
fn test_category_views_cover_catalog() {
    let catalog = Catalog::standard().unwrap();
    let total: usize = Category::ALL
        .iter()
        .map(|c| catalog.by_category(*c).len())
        .sum();

    assert_eq!(total, catalog.len());
    assert!(!catalog.is_empty());
}

#[test]
fn test_missing_material_is_reported() {
    let catalog = Catalog::standard().unwrap();

    match catalog.by_name("unobtainium") {
        Err(Error::NotFound(name)) => assert_eq!(name, "unobtainium"),
        other => panic!("expected NotFound, got {other:?}"),
    }
    assert!(catalog.select(&["copper", "unobtainium"]).is_err());
}

#[test]
fn test_builders_do_not_share_counters() {
    let spec = || {
        MaterialSpec::new(
            Category::Carbon,
            "test-ink",
            Quantity::from_point(1000.0, Unit::MicroOhmCentimeter),
            Quantity::from_range(5.0, 15.0, Unit::Micrometer),
        )
    };

    let mut first = CatalogBuilder::new();
    first.add(spec()).unwrap();
    let mut second = CatalogBuilder::new();
    second.add(spec()).unwrap();

    let first = first.build();
    let second = second.build();
    assert_eq!(
        first.by_name("test-ink").unwrap().plot_index,
        second.by_name("test-ink").unwrap().plot_index
    );
    assert_eq!(first.by_name("test-ink").unwrap().plot_index, 120);
}

#[test]
fn test_heater_trace_squares() {
    let units = ink_resistivity::UnitConverter::new();
    let heater = TraceGeometry::heater(&units).unwrap();

    approx::assert_relative_eq!(heater.squares(), 5.08, max_relative = 1e-9);
}
