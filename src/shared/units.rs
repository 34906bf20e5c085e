//! Längeneinheiten und Umrechnung.

use serde::{Deserialize, Serialize};

/// Unterstützte Längeneinheiten für Koordinaten und Punktdichte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    #[serde(alias = "mm")]
    Millimeter,
    #[default]
    #[serde(alias = "cm")]
    Centimeter,
    #[serde(alias = "m")]
    Meter,
    #[serde(alias = "in")]
    Inch,
    #[serde(alias = "ft")]
    Foot,
}

impl LengthUnit {
    /// Zentimeter pro Einheit.
    pub fn centimeters_per_unit(self) -> f64 {
        match self {
            LengthUnit::Millimeter => 0.1,
            LengthUnit::Centimeter => 1.0,
            LengthUnit::Meter => 100.0,
            LengthUnit::Inch => 2.54,
            LengthUnit::Foot => 30.48,
        }
    }

    /// Rechnet `value` von dieser Einheit in `target` um.
    pub fn convert(self, value: f64, target: LengthUnit) -> f64 {
        if self == target {
            return value;
        }
        value * self.centimeters_per_unit() / target.centimeters_per_unit()
    }

    /// Kurzes Einheitenzeichen für Log-Ausgaben.
    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Millimeter => "mm",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Meter => "m",
            LengthUnit::Inch => "in",
            LengthUnit::Foot => "ft",
        }
    }
}

impl std::str::FromStr for LengthUnit {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mm" | "millimeter" => Ok(LengthUnit::Millimeter),
            "cm" | "centimeter" => Ok(LengthUnit::Centimeter),
            "m" | "meter" => Ok(LengthUnit::Meter),
            "in" | "inch" => Ok(LengthUnit::Inch),
            "ft" | "foot" => Ok(LengthUnit::Foot),
            other => anyhow::bail!("Unbekannte Längeneinheit: {}", other),
        }
    }
}

/// Länge mit Einheit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Length {
    pub value: f64,
    pub unit: LengthUnit,
}

impl Length {
    pub fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    pub fn centimeters(value: f64) -> Self {
        Self::new(value, LengthUnit::Centimeter)
    }

    /// Wert in der Einheit `unit`.
    pub fn to(self, unit: LengthUnit) -> f64 {
        self.unit.convert(self.value, unit)
    }

    pub fn to_centimeters(self) -> f64 {
        self.to(LengthUnit::Centimeter)
    }
}

impl std::fmt::Display for Length {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.value, self.unit.symbol())
    }
}
