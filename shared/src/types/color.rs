//! Color value and its persisted record.

use serde::{Deserialize, Serialize};

/// RGBA color with fractional components in the 0.0..=1.0 range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub opacity: f64,
}

impl Color {
    /// Creates a color from its components
    pub const fn new(red: f64, green: f64, blue: f64, opacity: f64) -> Self {
        Self {
            red,
            green,
            blue,
            opacity,
        }
    }
}

impl Default for Color {
    /// Opaque white, matching the record's component defaults
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }
}

/// Persisted color record round-tripping through [`Color`]
///
/// Components absent from the stored document decode to 1.0, so a partial
/// record yields opaque white rather than a decode failure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorData {
    #[serde(default = "component_default")]
    red: f64,

    #[serde(default = "component_default")]
    green: f64,

    #[serde(default = "component_default")]
    blue: f64,

    #[serde(default = "component_default")]
    opacity: f64,
}

fn component_default() -> f64 {
    1.0
}

impl ColorData {
    /// Creates a record from raw components
    pub fn new(red: f64, green: f64, blue: f64, opacity: f64) -> Self {
        Self {
            red,
            green,
            blue,
            opacity,
        }
    }

    /// The color value this record persists
    pub fn color(&self) -> Color {
        Color::new(self.red, self.green, self.blue, self.opacity)
    }
}

impl Default for ColorData {
    fn default() -> Self {
        Color::default().into()
    }
}

impl From<Color> for ColorData {
    fn from(color: Color) -> Self {
        Self::new(color.red, color.green, color.blue, color.opacity)
    }
}

impl From<ColorData> for Color {
    fn from(data: ColorData) -> Self {
        data.color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < EPSILON, "{} != {}", a, b);
    }

    #[test]
    fn test_color_round_trip() {
        let data = ColorData::new(0.25, 0.5, 0.75, 0.9);
        let color = data.color();
        let back = ColorData::from(color);

        assert_close(color.red, 0.25);
        assert_close(color.green, 0.5);
        assert_close(color.blue, 0.75);
        assert_close(color.opacity, 0.9);
        assert_eq!(back, data);
    }

    #[test]
    fn test_serde_round_trip() {
        let data = ColorData::new(0.1, 0.2, 0.3, 0.4);
        let json = serde_json::to_string(&data).unwrap();
        let decoded: ColorData = serde_json::from_str(&json).unwrap();

        let (a, b) = (data.color(), decoded.color());
        assert_close(a.red, b.red);
        assert_close(a.green, b.green);
        assert_close(a.blue, b.blue);
        assert_close(a.opacity, b.opacity);
    }

    #[test]
    fn test_missing_components_default_to_one() {
        let decoded: ColorData = serde_json::from_str(r#"{"red": 0.5}"#).unwrap();
        let color = decoded.color();

        assert_close(color.red, 0.5);
        assert_close(color.green, 1.0);
        assert_close(color.blue, 1.0);
        assert_close(color.opacity, 1.0);
    }

    #[test]
    fn test_default_is_opaque_white() {
        let color = ColorData::default().color();
        assert_close(color.red, 1.0);
        assert_close(color.green, 1.0);
        assert_close(color.blue, 1.0);
        assert_close(color.opacity, 1.0);
    }
}
