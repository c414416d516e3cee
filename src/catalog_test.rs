use approx::assert_relative_eq;

use crate::catalog::CatalogStore;
use crate::color::Rgb;
use crate::error::ComparatorError;

#[test]
fn test_builtin_lookup() {
    let catalog = CatalogStore::builtin();
    assert_eq!(catalog.len(), 14);

    let sun = catalog.lookup("sun").unwrap();
    assert_eq!(sun.display_name, "Sun");
    assert_relative_eq!(sun.diameter_km, 1392700.0);
    assert_eq!(sun.color, Rgb::new(0xff, 0xcc, 0x00));
    assert_eq!(sun.category, "Star");

    assert!(catalog.lookup("pluto").is_none());
    assert!(catalog.lookup("").is_none());
}

#[test]
fn test_builtin_diameters_are_positive() {
    let catalog = CatalogStore::builtin();
    for entry in catalog.entries() {
        assert!(entry.diameter_km > 0.0, "{}", entry.key);
        assert!(catalog.contains(&entry.key));
    }
}

#[test]
fn test_from_json() {
    let json = r##"[
        {"key": "io", "display_name": "Io", "diameter_km": 3643.2, "color": "#e6d36a", "category": "Moon"},
        {"key": "europa", "display_name": "Europa", "diameter_km": 3121.6, "color": "#b8a58a", "category": "Moon"}
    ]"##;
    let catalog = CatalogStore::from_json(json).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.entries()[0].key, "io");
    assert_relative_eq!(catalog.lookup("europa").unwrap().diameter_km, 3121.6);
}

#[test]
fn test_from_json_rejects_duplicates_and_bad_diameters() {
    let duplicate = r##"[
        {"key": "io", "display_name": "Io", "diameter_km": 3643.2, "color": "#e6d36a", "category": "Moon"},
        {"key": "io", "display_name": "Io", "diameter_km": 3643.2, "color": "#e6d36a", "category": "Moon"}
    ]"##;
    assert!(matches!(CatalogStore::from_json(duplicate), Err(ComparatorError::Catalog(_))));

    let zero = r##"[{"key": "dust", "display_name": "Dust", "diameter_km": 0.0, "color": "#ffffff", "category": "?"}]"##;
    assert!(matches!(CatalogStore::from_json(zero), Err(ComparatorError::Catalog(_))));

    let bad_color = r##"[{"key": "x", "display_name": "X", "diameter_km": 1.0, "color": "red", "category": "?"}]"##;
    assert!(matches!(CatalogStore::from_json(bad_color), Err(ComparatorError::Json(_))));
}
