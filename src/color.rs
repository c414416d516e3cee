//! RGB colors for catalog entries and sphere shading.
//!
//! Catalog colors arrive as `#rrggbb` strings. Shading derives lighter and
//! darker variants by adding or subtracting a percentage of full scale to
//! each channel and clamping to [0, 255].

use crate::error::{ComparatorError, Result};
use eframe::egui;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn from_u32(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }

    pub fn from_hex(text: &str) -> Result<Self> {
        let digits = text.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ComparatorError::InvalidColor(text.to_string()));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ComparatorError::InvalidColor(text.to_string()))?;
        Ok(Self::from_u32(value))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn lighten(&self, percent: f64) -> Self {
        let amount = channel_amount(percent);
        self.map_channels(|c| (c as i32 + amount).min(255))
    }

    pub fn darken(&self, percent: f64) -> Self {
        let amount = channel_amount(percent);
        self.map_channels(|c| (c as i32 - amount).max(0))
    }

    /// Linear blend in sRGB space; `t` is clamped to [0, 1].
    pub fn lerp(&self, other: Rgb, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Self::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    pub fn to_color32(&self) -> egui::Color32 {
        egui::Color32::from_rgb(self.r, self.g, self.b)
    }

    fn map_channels(&self, f: impl Fn(u8) -> i32) -> Self {
        let clamp = |v: i32| v.clamp(0, 255) as u8;
        Self::new(clamp(f(self.r)), clamp(f(self.g)), clamp(f(self.b)))
    }
}

fn channel_amount(percent: f64) -> i32 {
    (percent * 255.0 / 100.0).round() as i32
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Rgb {
    type Error = ComparatorError;

    fn try_from(value: String) -> Result<Self> {
        Rgb::from_hex(&value)
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_hex()
    }
}
