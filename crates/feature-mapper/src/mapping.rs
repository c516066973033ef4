//! External to Internal Field Rename Table

/// Fixed mapping from API schema field names to the column names the trained
/// pipeline was fit against. This table is the single source of truth for
/// the naming contract: total over the 17 external fields and injective over
/// the internal names.
pub const RENAME_TABLE: [(&str, &str); 17] = [
    ("Levy", "Levy"),
    ("Manufacturer", "Manufacturer"),
    ("Model", "Model"),
    ("Prod_year", "Prod. year"),
    ("Category", "Category"),
    ("Leather_interior", "Leather interior"),
    ("Fuel_type", "Fuel type"),
    ("Engine_volume", "Engine volume"),
    ("Mileage", "Mileage"),
    ("Cylinders", "Cylinders"),
    ("Gear_box_type", "Gear box type"),
    ("Drive_wheels", "Drive wheels"),
    ("Wheel", "Wheel"),
    ("Color", "Color"),
    ("Airbags", "Airbags"),
    ("Age", "Age"),
    ("Mileage_per_year", "Mileage_per_year"),
];

/// Resolve an external field name to its internal column name.
pub fn internal_name(external: &str) -> Option<&'static str> {
    RENAME_TABLE
        .iter()
        .find(|(api, _)| *api == external)
        .map(|(_, internal)| *internal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_is_total_over_external_schema() {
        let externals: HashSet<&str> = RENAME_TABLE.iter().map(|(api, _)| *api).collect();
        assert_eq!(externals.len(), 17);

        // Every schema field has exactly one destination
        for field in [
            "Levy",
            "Manufacturer",
            "Model",
            "Prod_year",
            "Category",
            "Leather_interior",
            "Fuel_type",
            "Engine_volume",
            "Mileage",
            "Cylinders",
            "Gear_box_type",
            "Drive_wheels",
            "Wheel",
            "Color",
            "Airbags",
            "Age",
            "Mileage_per_year",
        ] {
            assert!(internal_name(field).is_some(), "no mapping for {field}");
        }
    }

    #[test]
    fn test_table_is_injective() {
        let internals: HashSet<&str> = RENAME_TABLE.iter().map(|(_, col)| *col).collect();
        assert_eq!(internals.len(), RENAME_TABLE.len());
    }

    #[test]
    fn test_renamed_fields() {
        assert_eq!(internal_name("Prod_year"), Some("Prod. year"));
        assert_eq!(internal_name("Leather_interior"), Some("Leather interior"));
        assert_eq!(internal_name("Fuel_type"), Some("Fuel type"));
        assert_eq!(internal_name("Gear_box_type"), Some("Gear box type"));
        assert_eq!(internal_name("Drive_wheels"), Some("Drive wheels"));
        assert_eq!(internal_name("Engine_volume"), Some("Engine volume"));
    }

    #[test]
    fn test_unknown_field() {
        assert_eq!(internal_name("Horsepower"), None);
    }
}
