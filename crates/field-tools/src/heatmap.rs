#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use field_core::TerritoryId;
use field_influence::{FieldTerritory, InfluenceMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb`, suitable for terminals and map markup.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Observed value range across a finalized influence map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValueRange {
    min: i64,
    max: i64,
}

impl ValueRange {
    /// `None` for an empty sequence.
    pub fn from_values(values: impl IntoIterator<Item = i64>) -> Option<Self> {
        let mut values = values.into_iter();
        let first = values.next()?;
        let mut range = Self {
            min: first,
            max: first,
        };
        for value in values {
            range.min = range.min.min(value);
            range.max = range.max.max(value);
        }
        Some(range)
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    /// `(value - min) / (max - min)`, clamped to `[0, 1]`.
    ///
    /// A degenerate range (`min == max`) normalizes to 1.0: a uniform field
    /// reads as uniformly saturated rather than uniformly cold.
    pub fn normalized(&self, value: i64) -> f32 {
        if self.max == self.min {
            return 1.0;
        }
        let t = (value - self.min) as f32 / (self.max - self.min) as f32;
        t.clamp(0.0, 1.0)
    }
}

/// Range over every territory value in `map`; `None` for an empty map.
pub fn map_range<T: TerritoryId>(map: &InfluenceMap<T>) -> Option<ValueRange> {
    ValueRange::from_values(map.territories().map(FieldTerritory::value))
}

/// Interpolate per channel between `cold` and `hot` by the value's position
/// in `range`.
pub fn shade(range: ValueRange, value: i64, cold: Rgb, hot: Rgb) -> Rgb {
    let t = range.normalized(value);
    Rgb {
        r: lerp_channel(cold.r, hot.r, t),
        g: lerp_channel(cold.g, hot.g, t),
        b: lerp_channel(cold.b, hot.b, t),
    }
}

fn lerp_channel(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round() as u8
}
