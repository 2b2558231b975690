use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Default series colors, cycled by series index.
pub const COLOR_PALETTE: [&str; 20] = [
    "#5470c6", // blue
    "#91cc75", // green
    "#fac858", // yellow
    "#ee6666", // red
    "#73c0de", // light blue
    "#3ba272", // dark green
    "#fc8452", // orange
    "#9a60b4", // purple
    "#ea7ccc", // pink
    "#ff9f7f", // coral
    "#ffdb5c", // gold
    "#37a2da", // sky blue
    "#32c5e9", // cyan
    "#67e0e3", // turquoise
    "#9fe6b8", // mint
    "#ffd93d", // bright yellow
    "#ff6b6b", // bright red
    "#4ecdc4", // teal
    "#45b7d1", // steel blue
    "#96ceb4", // sage green
];

/// How default colors are picked for series without user-chosen styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    /// Plain palette cycling; index 20 repeats index 0.
    #[default]
    Cyclic,
    /// Palette colors first, then blends of two palette entries.
    Blended,
}

impl ColorScheme {
    #[must_use]
    pub fn color_for_index(self, index: usize) -> String {
        match self {
            Self::Cyclic => color_by_index(index).to_owned(),
            Self::Blended => unique_color_by_index(index),
        }
    }
}

/// 24-bit RGB color written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl HexColor {
    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Linear per-channel blend; `ratio` 0 keeps `self`, 1 yields `other`.
    #[must_use]
    pub fn blend(self, other: Self, ratio: f64) -> Self {
        let mix = |a: u8, b: u8| -> u8 {
            let value = f64::from(a) + (f64::from(b) - f64::from(a)) * ratio;
            value.round().clamp(0.0, 255.0) as u8
        };
        Self {
            red: mix(self.red, other.red),
            green: mix(self.green, other.green),
            blue: mix(self.blue, other.blue),
        }
    }
}

impl FromStr for HexColor {
    type Err = ChartError;

    fn from_str(input: &str) -> ChartResult<Self> {
        let hex = input.strip_prefix('#').unwrap_or(input);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ChartError::InvalidData(format!(
                "color `{input}` must be a #rrggbb hex string"
            )));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|e| ChartError::InvalidData(format!("color `{input}`: {e}")))
        };
        Ok(Self {
            red: channel(0..2)?,
            green: channel(2..4)?,
            blue: channel(4..6)?,
        })
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

#[must_use]
pub fn color_by_index(index: usize) -> &'static str {
    COLOR_PALETTE[index % COLOR_PALETTE.len()]
}

/// Distinct color for any index.
///
/// Indices past the palette blend the base entry with a neighbour chosen by
/// cycle count, at ratios 0.25, 0.5 and 0.75 in rotation.
#[must_use]
pub fn unique_color_by_index(index: usize) -> String {
    let len = COLOR_PALETTE.len();
    if index < len {
        return COLOR_PALETTE[index].to_owned();
    }

    let cycle = index / len;
    let base_index = index % len;
    let blend_index = (base_index + cycle + 1) % len;
    let ratio = ((cycle % 3) + 1) as f64 / 4.0;

    blend_palette_entries(base_index, blend_index, ratio)
}

/// Blends two `#rrggbb` colors.
pub fn blend_colors(first: &str, second: &str, ratio: f64) -> ChartResult<String> {
    let first: HexColor = first.parse()?;
    let second: HexColor = second.parse()?;
    Ok(first.blend(second, ratio).to_string())
}

fn blend_palette_entries(base_index: usize, blend_index: usize, ratio: f64) -> String {
    match (
        COLOR_PALETTE[base_index].parse::<HexColor>(),
        COLOR_PALETTE[blend_index].parse::<HexColor>(),
    ) {
        (Ok(base), Ok(blend)) => base.blend(blend, ratio).to_string(),
        // palette entries are literals checked by tests
        _ => COLOR_PALETTE[base_index].to_owned(),
    }
}
