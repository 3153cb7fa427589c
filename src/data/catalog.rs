// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use crate::data::material::{Category, Material};
use crate::data::quantity::Quantity;
use crate::error::{Error, Result};
use crate::units::Unit;
use std::collections::HashMap;

/// Read-only table of materials, keyed by name and kept in insertion order.
#[derive(Debug, Clone)]
pub struct Catalog {
    materials: Vec<Material>,
    name_to_index: HashMap<String, usize>,
}

impl Catalog {
    /// The built-in printed-electronics material table.
    pub fn standard() -> Result<Self> {
        Self::from_rows(standard_rows())
    }

    /// Build a catalog from rows in order, failing on the first repeated name.
    pub fn from_rows(rows: impl IntoIterator<Item = MaterialSpec>) -> Result<Self> {
        let mut builder = CatalogBuilder::new();
        for row in rows {
            builder.add(row)?;
        }
        Ok(builder.build())
    }

    pub fn by_name(&self, name: &str) -> Result<&Material> {
        self.name_to_index
            .get(name)
            .and_then(|&index| self.materials.get(index))
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    pub fn by_category(&self, category: Category) -> Vec<&Material> {
        self.materials
            .iter()
            .filter(|m| m.category == category)
            .collect()
    }

    /// Look up several materials at once, failing on the first unknown name.
    pub fn select(&self, names: &[&str]) -> Result<Vec<&Material>> {
        names.iter().map(|name| self.by_name(name)).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.materials.iter()
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Materials that carry a published sheet resistance.
    pub fn with_sheet_resistance(&self) -> Vec<&Material> {
        self.materials
            .iter()
            .filter(|m| m.sheet_resistance.is_some())
            .collect()
    }
}

/// One row of input data before a plot index is assigned.
#[derive(Debug, Clone)]
pub struct MaterialSpec {
    pub category: Category,
    pub name: String,
    pub bulk_resistivity: Quantity,
    pub thickness: Quantity,
    pub sheet_resistance: Option<Quantity>,
}

impl MaterialSpec {
    pub fn new(
        category: Category,
        name: impl Into<String>,
        bulk_resistivity: Quantity,
        thickness: Quantity,
    ) -> Self {
        Self {
            category,
            name: name.into(),
            bulk_resistivity,
            thickness,
            sheet_resistance: None,
        }
    }

    pub fn with_sheet_resistance(mut self, sheet_resistance: Quantity) -> Self {
        self.sheet_resistance = Some(sheet_resistance);
        self
    }
}

/// Assigns plot indices per category while materials are added.
///
/// The first material of a category lands on the category's base index and
/// each following one takes the next slot.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    materials: Vec<Material>,
    name_to_index: HashMap<String, usize>,
    next_index: HashMap<Category, u32>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, spec: MaterialSpec) -> Result<&Material> {
        if self.name_to_index.contains_key(&spec.name) {
            return Err(Error::DuplicateMaterial(spec.name));
        }

        let slot = self
            .next_index
            .entry(spec.category)
            .or_insert_with(|| spec.category.base_plot_index());
        let plot_index = *slot;
        *slot += 1;

        let index = self.materials.len();
        self.name_to_index.insert(spec.name.clone(), index);
        self.materials.push(Material {
            category: spec.category,
            name: spec.name,
            bulk_resistivity: spec.bulk_resistivity,
            thickness: spec.thickness,
            sheet_resistance: spec.sheet_resistance,
            plot_index,
        });

        Ok(&self.materials[index])
    }

    pub fn build(self) -> Catalog {
        Catalog {
            materials: self.materials,
            name_to_index: self.name_to_index,
        }
    }
}

fn standard_rows() -> Vec<MaterialSpec> {
    let br = |center, min, max| {
        Quantity::from_center_and_range(center, min, max, Unit::MicroOhmCentimeter)
    };
    let th = |center, min, max| Quantity::from_center_and_range(center, min, max, Unit::Micrometer);
    let sr = |center, min, max| {
        Quantity::from_center_and_range(center, min, max, Unit::MilliOhmPerSquare)
    };
    let metal = |name: &str, bulk: f64| {
        MaterialSpec::new(
            Category::Metal,
            name,
            Quantity::plus_or_minus(bulk, 0.1, Unit::MicroOhmCentimeter),
            th(34.8, 17.4, 69.6),
        )
    };

    let mut rows = vec![
        metal("silver", 1.60),
        metal("copper", 1.70),
        metal("gold", 2.40),
        metal("aluminium", 2.80),
        metal("zinc", 5.50),
        metal("nickel", 7.00),
        metal("brass", 7.50),
        metal("platinum", 9.80),
        metal("iron", 10.00),
        metal("tin", 11.00),
        metal("lead", 19.00),
    ];

    let flexo = [
        ("pfi-500", br(8.00, 7.00, 9.00), th(0.510, 0.120, 0.900), sr(350.0, 100.0, 600.0)),
        ("pfi-600", br(6.00, 5.00, 7.00), th(0.770, 0.140, 1.400), sr(200.0, 50.0, 350.0)),
        ("pfi-722", br(6.00, 5.00, 7.00), th(0.770, 0.140, 1.400), sr(200.0, 50.0, 350.0)),
        ("pfi-rsa6004", br(11.00, 10.00, 12.00), th(0.303, 0.125, 0.480), sr(525.0, 250.0, 800.0)),
        ("pfi-rsa6012", br(9.00, 8.00, 10.00), th(0.315, 0.130, 0.500), sr(400.0, 200.0, 600.0)),
    ];
    rows.extend(flexo.into_iter().map(|(name, bulk, thickness, sheet)| {
        MaterialSpec::new(Category::Flexo, name, bulk, thickness).with_sheet_resistance(sheet)
    }));

    let inkjet_thickness = th(1.000, 0.200, 2.000);
    let inkjet = [
        ("ci-004", br(12.00, 12.00, 12.00)),
        ("ci-005", br(9.00, 9.00, 9.00)),
        ("ici-002hv", br(9.15, 7.50, 10.80)),
        ("js-a101a", br(19.40, 7.80, 31.00)),
        ("js-a102a", br(19.40, 7.80, 31.00)),
        ("js-a191", br(19.40, 7.80, 31.00)),
        ("js-b25hv", br(2.80, 2.80, 2.80)),
    ];
    rows.extend(
        inkjet
            .into_iter()
            .map(|(name, bulk)| MaterialSpec::new(Category::Inkjet, name, bulk, inkjet_thickness)),
    );

    let screen_thickness = th(15.0, 5.0, 30.0);
    let screen = [
        ("cp-007", br(17.50, 17.50, 17.50)),
        ("cp-008", br(25.00, 25.00, 25.00)),
        ("cp-009", br(25.00, 25.00, 25.00)),
        ("hps-021lv", br(10.00, 10.00, 10.00)),
        ("hps-fg32", br(17.50, 11.00, 24.00)),
        ("hps-fg57b", br(19.00, 22.00, 27.00)),
        ("ici-021", br(50.00, 50.00, 50.00)),
        ("psi-211", br(9.00, 9.00, 9.00)),
        ("psi-219", br(11.00, 11.00, 11.00)),
    ];
    rows.extend(
        screen
            .into_iter()
            .map(|(name, bulk)| MaterialSpec::new(Category::Screen, name, bulk, screen_thickness)),
    );

    let aerosol_thickness = th(2.00, 1.00, 5.00);
    rows.push(MaterialSpec::new(
        Category::Aerosol,
        "ci-006",
        br(5.10, 3.40, 6.80),
        aerosol_thickness,
    ));
    rows.push(MaterialSpec::new(
        Category::Aerosol,
        "pspi-1000",
        br(8.50, 8.50, 8.50),
        aerosol_thickness,
    ));

    // Carbon-loaded inks; hpr-059 is a screen paste, the others are inkjet
    rows.push(MaterialSpec::new(
        Category::Carbon,
        "jr-700lv",
        br(1.200e6, 1.100e6, 1.300e6),
        th(1.000, 0.200, 2.000),
    ));
    rows.push(MaterialSpec::new(
        Category::Carbon,
        "jr-700hv",
        br(0.550e6, 0.520e6, 0.850e6),
        th(1.000, 0.200, 2.000),
    ));
    rows.push(MaterialSpec::new(
        Category::Carbon,
        "hpr-059",
        br(0.762e6, 0.698e6, 0.889e6),
        th(20.000, 5.000, 50.000),
    ));

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_size() {
        let catalog = Catalog::standard().unwrap();
        assert_eq!(catalog.len(), 37);
        assert_eq!(catalog.len(), standard_rows().len());
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_from_rows_rejects_repeated_names() {
        let mut rows = standard_rows();
        rows.push(MaterialSpec::new(
            Category::Carbon,
            "copper",
            Quantity::from_point(1.0e6, Unit::MicroOhmCentimeter),
            Quantity::from_point(10.0, Unit::Micrometer),
        ));

        let err = Catalog::from_rows(rows).unwrap_err();
        assert!(matches!(err, Error::DuplicateMaterial(ref name) if name == "copper"));
    }

    #[test]
    fn test_plot_indices_per_category() {
        let catalog = Catalog::standard().unwrap();

        assert_eq!(catalog.by_name("silver").unwrap().plot_index, 20);
        assert_eq!(catalog.by_name("copper").unwrap().plot_index, 21);
        assert_eq!(catalog.by_name("lead").unwrap().plot_index, 30);
        assert_eq!(catalog.by_name("pfi-500").unwrap().plot_index, 40);
        assert_eq!(catalog.by_name("ci-004").unwrap().plot_index, 60);
        assert_eq!(catalog.by_name("cp-007").unwrap().plot_index, 80);
        assert_eq!(catalog.by_name("ci-006").unwrap().plot_index, 100);
        assert_eq!(catalog.by_name("hpr-059").unwrap().plot_index, 122);
    }

    #[test]
    fn test_by_category_keeps_insertion_order() {
        let catalog = Catalog::standard().unwrap();
        let names: Vec<&str> = catalog
            .by_category(Category::Carbon)
            .iter()
            .map(|m| m.name.as_str())
            .collect();

        assert_eq!(names, vec!["jr-700lv", "jr-700hv", "hpr-059"]);
        assert_eq!(catalog.by_category(Category::Flexo).len(), 5);
    }

    #[test]
    fn test_by_name_not_found() {
        let catalog = Catalog::standard().unwrap();
        let err = catalog.by_name("unobtainium").unwrap_err();
        assert!(matches!(err, Error::NotFound(ref name) if name == "unobtainium"));

        assert!(catalog.select(&["copper", "unobtainium"]).is_err());
        assert_eq!(catalog.select(&["silver", "copper", "gold"]).unwrap().len(), 3);
    }

    #[test]
    fn test_builder_rejects_duplicates() {
        let mut builder = CatalogBuilder::new();
        let spec = MaterialSpec::new(
            Category::Screen,
            "paste",
            Quantity::from_point(10.0, Unit::MicroOhmCentimeter),
            Quantity::from_range(5.0, 30.0, Unit::Micrometer),
        );

        assert!(builder.add(spec.clone()).is_ok());
        assert!(matches!(
            builder.add(spec),
            Err(Error::DuplicateMaterial(_))
        ));
    }

    #[test]
    fn test_builders_do_not_share_counters() {
        let spec = |name: &str| {
            MaterialSpec::new(
                Category::Aerosol,
                name,
                Quantity::from_point(5.0, Unit::MicroOhmCentimeter),
                Quantity::from_point(2.0, Unit::Micrometer),
            )
        };

        let mut first = CatalogBuilder::new();
        first.add(spec("a")).unwrap();
        first.add(spec("b")).unwrap();

        let mut second = CatalogBuilder::new();
        assert_eq!(second.add(spec("c")).unwrap().plot_index, 100);
    }

    #[test]
    fn test_raw_rows_are_preserved() {
        let catalog = Catalog::standard().unwrap();
        let paste = catalog.by_name("hps-fg57b").unwrap();

        assert_eq!(paste.bulk_resistivity.estimate(), 19.0);
        assert_eq!(paste.bulk_resistivity.min(), 22.0);
        assert!(!paste.bulk_resistivity.is_ordered());
    }

    #[test]
    fn test_sheet_resistance_rows() {
        let catalog = Catalog::standard().unwrap();
        let with_sheet = catalog.with_sheet_resistance();

        assert_eq!(with_sheet.len(), 5);
        assert!(with_sheet.iter().all(|m| m.category == Category::Flexo));
        assert_eq!(
            with_sheet[0].sheet_resistance.unwrap().unit(),
            Unit::MilliOhmPerSquare
        );
    }
}
