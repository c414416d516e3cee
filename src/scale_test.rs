use approx::assert_relative_eq;

use crate::catalog::CatalogStore;
use crate::display_list::DisplayList;
use crate::error::ComparatorError;
use crate::scale::{compute_scale, format_diameter_km, format_thousands, ScaleReadout};

fn list_of(keys: &[&str]) -> DisplayList {
    let catalog = CatalogStore::builtin();
    let mut list = DisplayList::new();
    list.reset_to(&catalog, keys[0]).unwrap();
    for key in &keys[1..] {
        list.append(&catalog, key).unwrap();
    }
    list
}

#[test]
fn test_scale_fits_largest_body_to_seventy_percent() {
    let list = list_of(&["earth"]);
    let scale = compute_scale(list.all(), 700.0).unwrap();
    assert_relative_eq!(scale * 12742.0, 490.0, epsilon = 1e-9);

    let list = list_of(&["earth", "sun", "moon"]);
    let scale = compute_scale(list.all(), 700.0).unwrap();
    assert_relative_eq!(scale * 1392700.0, 490.0, epsilon = 1e-9);
}

#[test]
fn test_scale_degenerate_viewport_is_zero() {
    let list = list_of(&["earth"]);
    assert_eq!(compute_scale(list.all(), 0.0).unwrap(), 0.0);
    assert_eq!(compute_scale(list.all(), -12.0).unwrap(), 0.0);
    assert_eq!(compute_scale(list.all(), f64::NAN).unwrap(), 0.0);
}

#[test]
fn test_scale_empty_list_fails() {
    assert!(matches!(compute_scale(&[], 700.0), Err(ComparatorError::EmptyList)));
}

#[test]
fn test_readout_selection_by_magnitude() {
    // Earth alone at 700 px: 12742 / 490 = 26.0 km per pixel
    assert_eq!(ScaleReadout::from_scale(490.0 / 12742.0).to_string(), "1 pixel = 26.00 km");

    // Betelgeuse at 700 px: 887,000,000 / 490 km per pixel
    assert_eq!(
        ScaleReadout::from_scale(490.0 / 887_000_000.0).to_string(),
        "1 pixel = 1,810,204.08 km"
    );

    assert_eq!(ScaleReadout::from_scale(4.0).to_string(), "4.00 pixels = 1 km");
    assert_eq!(ScaleReadout::from_scale(1.0).to_string(), "1 pixel = 1.00 km");
    assert_eq!(ScaleReadout::from_scale(0.0), ScaleReadout::Unavailable);
}

#[test]
fn test_format_thousands() {
    assert_eq!(format_thousands(0.0, 0), "0");
    assert_eq!(format_thousands(999.0, 0), "999");
    assert_eq!(format_thousands(1000.0, 0), "1,000");
    assert_eq!(format_thousands(1392700.0, 0), "1,392,700");
    assert_eq!(format_thousands(887000000.0, 2), "887,000,000.00");
    assert_eq!(format_thousands(-12345.678, 1), "-12,345.7");
    assert_eq!(format_thousands(-0.001, 2), "0.00");
}

#[test]
fn test_format_diameter_km() {
    assert_eq!(format_diameter_km(12742.0), "12,742");
    assert_eq!(format_diameter_km(3643.2), "3,643.2");
    assert_eq!(format_diameter_km(0.12345), "0.123");
}
