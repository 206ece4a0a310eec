//! Energy units and conversion constants
//!
//! Only energy is ever converted; every other unit is stored as reported.

// ============================================================================
// Energy Conversion Constants
// ============================================================================

/// Kilojoules per kilocalorie (thermochemical calorie)
pub const KJ_PER_KCAL: f64 = 4.184;

/// Unit an energy value was reported in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyUnit {
    Kilocalorie,
    Kilojoule,
}

impl EnergyUnit {
    /// Recognize an upstream unit name.
    ///
    /// Anything that is not a kilojoule spelling is treated as kilocalories,
    /// which is what FoodData Central reports when the unit is absent.
    pub fn from_unit_name(unit: Option<&str>) -> Self {
        let Some(unit) = unit else {
            return EnergyUnit::Kilocalorie;
        };

        match unit.trim().to_lowercase().as_str() {
            "kj" | "kilojoule" | "kilojoules" => EnergyUnit::Kilojoule,
            _ => EnergyUnit::Kilocalorie,
        }
    }

    /// Convert a value in this unit to kilocalories
    pub fn to_kcal(&self, value: f64) -> f64 {
        match self {
            EnergyUnit::Kilocalorie => value,
            EnergyUnit::Kilojoule => value / KJ_PER_KCAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognize_kilojoules() {
        assert_eq!(EnergyUnit::from_unit_name(Some("kJ")), EnergyUnit::Kilojoule);
        assert_eq!(EnergyUnit::from_unit_name(Some("KJ")), EnergyUnit::Kilojoule);
        assert_eq!(EnergyUnit::from_unit_name(Some("KCAL")), EnergyUnit::Kilocalorie);
        assert_eq!(EnergyUnit::from_unit_name(None), EnergyUnit::Kilocalorie);
    }

    #[test]
    fn test_to_kcal() {
        assert!((EnergyUnit::Kilojoule.to_kcal(418.4) - 100.0).abs() < 1e-9);
        assert_eq!(EnergyUnit::Kilocalorie.to_kcal(61.0), 61.0);
    }
}
