//! Pixel-per-kilometer scale shared by every displayed body.
//!
//! The scale is derived from the largest displayed diameter so that body
//! spans `FILL_FRACTION` of the viewport height. It is recomputed from
//! scratch each frame.

use crate::display_list::{max_diameter, DisplayedInstance};
use crate::error::Result;
use std::fmt;

/// Fraction of the viewport height taken by the largest body's diameter.
pub const FILL_FRACTION: f64 = 0.7;

/// Returns pixels per km, or `0.0` for a zero, negative or non-finite
/// viewport height. A zero scale means nothing should be drawn.
pub fn compute_scale(instances: &[DisplayedInstance], viewport_height: f64) -> Result<f64> {
    let max_diameter = max_diameter(instances)?;
    if !viewport_height.is_finite() || viewport_height <= 0.0 {
        return Ok(0.0);
    }
    let target_pixel_size = viewport_height * FILL_FRACTION;
    Ok(target_pixel_size / max_diameter)
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ScaleReadout {
    Unavailable,
    KmPerPixel(f64),
    PixelsPerKm(f64),
}

impl ScaleReadout {
    pub fn from_scale(scale: f64) -> Self {
        if !scale.is_finite() || scale <= 0.0 {
            return ScaleReadout::Unavailable;
        }
        let km_per_pixel = 1.0 / scale;
        if km_per_pixel >= 1.0 {
            ScaleReadout::KmPerPixel(km_per_pixel)
        } else {
            ScaleReadout::PixelsPerKm(scale)
        }
    }
}

impl fmt::Display for ScaleReadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleReadout::Unavailable => f.write_str("—"),
            ScaleReadout::KmPerPixel(km) => write!(f, "1 pixel = {} km", format_thousands(*km, 2)),
            ScaleReadout::PixelsPerKm(px) => write!(f, "{} pixels = 1 km", format_thousands(*px, 2)),
        }
    }
}

/// Fixed-decimal formatting with `,` between groups of three integer digits.
pub fn format_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(formatted.len() + int_part.len() / 3 + 1);
    if value.is_sign_negative() && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        grouped.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

/// Diameter text for labels: grouped, at most three decimals, trailing
/// zeros dropped.
pub fn format_diameter_km(diameter_km: f64) -> String {
    let text = format_thousands(diameter_km, 3);
    match text.split_once('.') {
        Some((int_part, frac)) => {
            let frac = frac.trim_end_matches('0');
            if frac.is_empty() {
                int_part.to_string()
            } else {
                format!("{int_part}.{frac}")
            }
        }
        None => text,
    }
}
