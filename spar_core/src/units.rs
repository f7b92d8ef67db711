//! # Unit Types
//!
//! Type-safe wrappers for the units that cross the input boundary. Everything
//! inside the engine is SI (metres, newtons, pascals, kilograms); the wrappers
//! exist so that the one place that converts from display units (millimetres,
//! gigapascals, grams per cubic centimetre) is explicit and tested.
//!
//! ## Example
//!
//! ```rust
//! use spar_core::units::{Meters, Millimeters};
//!
//! let od = Millimeters(20.0);
//! let od_m: Meters = od.into();
//! assert!((od_m.0 - 0.02).abs() < 1e-15);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Length Units
// ============================================================================

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

// ============================================================================
// Stress / Modulus Units
// ============================================================================

/// Stress in pascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pascals(pub f64);

/// Stress in megapascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Megapascals(pub f64);

/// Modulus in gigapascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gigapascals(pub f64);

impl From<Megapascals> for Pascals {
    fn from(mpa: Megapascals) -> Self {
        Pascals(mpa.0 * 1.0e6)
    }
}

impl From<Pascals> for Megapascals {
    fn from(pa: Pascals) -> Self {
        Megapascals(pa.0 / 1.0e6)
    }
}

impl From<Gigapascals> for Pascals {
    fn from(gpa: Gigapascals) -> Self {
        Pascals(gpa.0 * 1.0e9)
    }
}

impl From<Pascals> for Gigapascals {
    fn from(pa: Pascals) -> Self {
        Gigapascals(pa.0 / 1.0e9)
    }
}

// ============================================================================
// Density Units
// ============================================================================

/// Density in kilograms per cubic metre
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgPerM3(pub f64);

/// Density in grams per cubic centimetre
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GPerCm3(pub f64);

impl From<GPerCm3> for KgPerM3 {
    fn from(g: GPerCm3) -> Self {
        KgPerM3(g.0 * 1000.0)
    }
}

impl From<KgPerM3> for GPerCm3 {
    fn from(kg: KgPerM3) -> Self {
        GPerCm3(kg.0 / 1000.0)
    }
}

// ============================================================================
// Section Properties
// ============================================================================

/// Second moment of area in m^4
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct M4(pub f64);

/// Second moment of area in mm^4
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mm4(pub f64);

impl From<M4> for Mm4 {
    fn from(m4: M4) -> Self {
        Mm4(m4.0 * 1.0e12)
    }
}

impl From<Mm4> for M4 {
    fn from(mm4: Mm4) -> Self {
        M4(mm4.0 * 1.0e-12)
    }
}

// ============================================================================
// Raw Value Access
// ============================================================================

macro_rules! impl_value {
    ($($type:ty),+ $(,)?) => {
        $(
            impl $type {
                /// Get the raw f64 value
                pub fn value(self) -> f64 {
                    self.0
                }
            }
        )+
    };
}

impl_value!(Meters, Millimeters, Pascals, Megapascals, Gigapascals, KgPerM3, GPerCm3, M4, Mm4);

// ============================================================================
// Infinite-aware serde
// ============================================================================

/// Serde adapter for `Option<f64>` values that may be `+inf`.
///
/// JSON has no infinity literal and `serde_json` writes it as `null`, which
/// would collide with `None`. Infinite values are written as the string
/// `"inf"` (or `"-inf"`) instead.
pub mod serde_ratio {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            None => serializer.serialize_none(),
            Some(v) if *v == f64::INFINITY => serializer.serialize_some("inf"),
            Some(v) if *v == f64::NEG_INFINITY => serializer.serialize_some("-inf"),
            Some(v) => serializer.serialize_some(v),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        match Option::<Repr>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Repr::Number(v)) => Ok(Some(v)),
            Some(Repr::Text(text)) => match text.as_str() {
                "inf" => Ok(Some(f64::INFINITY)),
                "-inf" => Ok(Some(f64::NEG_INFINITY)),
                other => Err(serde::de::Error::custom(format!("expected number or \"inf\", got \"{}\"", other))),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mm_to_m() {
        let mm = Millimeters(18.0);
        let m: Meters = mm.into();
        assert!((m.0 - 0.018).abs() < 1e-15);
    }

    #[test]
    fn test_gpa_to_pa() {
        let e: Pascals = Gigapascals(140.0).into();
        assert_eq!(e.0, 140.0e9);
        let back: Gigapascals = e.into();
        assert_eq!(back.0, 140.0);
    }

    #[test]
    fn test_density_conversion() {
        let rho: KgPerM3 = GPerCm3(1.6).into();
        assert!((rho.0 - 1600.0).abs() < 1e-9);
    }

    #[test]
    fn test_inertia_conversion() {
        let i: Mm4 = M4(2.7e-9).into();
        assert!((i.0 - 2700.0).abs() < 1e-6);
    }

    #[test]
    fn test_value_unwraps() {
        assert_eq!(Millimeters(20.0).value(), 20.0);
        assert_eq!(Meters::from(Millimeters(500.0)).value(), 0.5);
    }

    #[test]
    fn test_serialization() {
        let mm = Millimeters(20.0);
        let json = serde_json::to_string(&mm).unwrap();
        assert_eq!(json, "20.0");

        let roundtrip: Millimeters = serde_json::from_str(&json).unwrap();
        assert_eq!(mm, roundtrip);
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Holder {
        #[serde(with = "serde_ratio")]
        factor: Option<f64>,
    }

    #[test]
    fn test_infinite_ratio_roundtrip() {
        let holder = Holder { factor: Some(f64::INFINITY) };
        let json = serde_json::to_string(&holder).unwrap();
        assert_eq!(json, r#"{"factor":"inf"}"#);
        let roundtrip: Holder = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, holder);

        let finite = Holder { factor: Some(2.5) };
        let roundtrip: Holder = serde_json::from_str(&serde_json::to_string(&finite).unwrap()).unwrap();
        assert_eq!(roundtrip, finite);

        let none = Holder { factor: None };
        let json = serde_json::to_string(&none).unwrap();
        assert_eq!(json, r#"{"factor":null}"#);
        let roundtrip: Holder = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, none);
    }
}
