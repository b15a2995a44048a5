//! Enumerated input categories and their multiplier tables
//!
//! Each table is a fixed `(category, multiplier)` listing indexed by the
//! enum discriminant, so the numbers live in one auditable place.

use serde::{Deserialize, Serialize};

/// Biological sex category for the Mifflin-St Jeor equation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Some(Sex::Male),
            "female" | "f" => Some(Sex::Female),
            _ => None,
        }
    }

    /// Constant term added to the Mifflin-St Jeor sum
    pub fn bmr_constant(&self) -> f64 {
        match self {
            Sex::Male => 5.0,
            Sex::Female => -161.0,
        }
    }
}

// ============================================================================
// Calorie activity level
// ============================================================================

/// Activity tier used to scale BMR into TDEE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary = 0,
    /// Light exercise 1-3 days/week
    Light = 1,
    /// Moderate exercise 3-5 days/week
    Moderate = 2,
    /// Hard exercise 6-7 days/week
    Active = 3,
    /// Very hard exercise or a physical job
    VeryActive = 4,
}

/// TDEE multipliers, indexed by `ActivityLevel` discriminant
const ACTIVITY_MULTIPLIERS: [f64; 5] = [1.2, 1.375, 1.55, 1.725, 1.9];

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "sedentary" => Some(ActivityLevel::Sedentary),
            "light" | "lightly_active" => Some(ActivityLevel::Light),
            "moderate" | "moderately_active" => Some(ActivityLevel::Moderate),
            "active" => Some(ActivityLevel::Active),
            "very_active" | "very active" | "very-active" => Some(ActivityLevel::VeryActive),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (little or no exercise)",
            ActivityLevel::Light => "Lightly active (1-3 days/week)",
            ActivityLevel::Moderate => "Moderately active (3-5 days/week)",
            ActivityLevel::Active => "Very active (6-7 days/week)",
            ActivityLevel::VeryActive => "Extra active (physical job or twice-daily training)",
        }
    }

    pub fn multiplier(&self) -> f64 {
        ACTIVITY_MULTIPLIERS[*self as usize]
    }

    /// The full multiplier table
    pub fn table() -> Vec<(ActivityLevel, f64)> {
        Self::ALL.iter().map(|a| (*a, a.multiplier())).collect()
    }
}

// ============================================================================
// Water intake activity
// ============================================================================

/// Coarser activity tier used for hydration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterActivity {
    Low = 0,
    Moderate = 1,
    High = 2,
}

const WATER_ACTIVITY_MULTIPLIERS: [f64; 3] = [1.0, 1.2, 1.5];

impl WaterActivity {
    pub const ALL: [WaterActivity; 3] =
        [WaterActivity::Low, WaterActivity::Moderate, WaterActivity::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            WaterActivity::Low => "low",
            WaterActivity::Moderate => "moderate",
            WaterActivity::High => "high",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(WaterActivity::Low),
            "moderate" => Some(WaterActivity::Moderate),
            "high" => Some(WaterActivity::High),
            _ => None,
        }
    }

    pub fn multiplier(&self) -> f64 {
        WATER_ACTIVITY_MULTIPLIERS[*self as usize]
    }

    pub fn table() -> Vec<(WaterActivity, f64)> {
        Self::ALL.iter().map(|a| (*a, a.multiplier())).collect()
    }
}

// ============================================================================
// Climate
// ============================================================================

/// Ambient climate adjustment for hydration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Climate {
    #[default]
    Normal = 0,
    Hot = 1,
    Humid = 2,
}

const CLIMATE_MULTIPLIERS: [f64; 3] = [1.0, 1.2, 1.15];

impl Climate {
    pub const ALL: [Climate; 3] = [Climate::Normal, Climate::Hot, Climate::Humid];

    pub fn as_str(&self) -> &'static str {
        match self {
            Climate::Normal => "normal",
            Climate::Hot => "hot",
            Climate::Humid => "humid",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "normal" | "temperate" => Some(Climate::Normal),
            "hot" => Some(Climate::Hot),
            "humid" => Some(Climate::Humid),
            _ => None,
        }
    }

    pub fn multiplier(&self) -> f64 {
        CLIMATE_MULTIPLIERS[*self as usize]
    }

    pub fn table() -> Vec<(Climate, f64)> {
        Self::ALL.iter().map(|c| (*c, c.multiplier())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_table() {
        let expected = [1.2, 1.375, 1.55, 1.725, 1.9];
        for (i, (level, mult)) in ActivityLevel::table().into_iter().enumerate() {
            assert_eq!(level, ActivityLevel::ALL[i]);
            assert_eq!(mult, expected[i]);
        }
    }

    #[test]
    fn test_water_and_climate_tables() {
        assert_eq!(WaterActivity::Low.multiplier(), 1.0);
        assert_eq!(WaterActivity::Moderate.multiplier(), 1.2);
        assert_eq!(WaterActivity::High.multiplier(), 1.5);
        assert_eq!(Climate::Normal.multiplier(), 1.0);
        assert_eq!(Climate::Hot.multiplier(), 1.2);
        assert_eq!(Climate::Humid.multiplier(), 1.15);
    }

    #[test]
    fn test_parse_activity_level() {
        assert_eq!(ActivityLevel::from_str("very_active"), Some(ActivityLevel::VeryActive));
        assert_eq!(ActivityLevel::from_str("Very Active"), Some(ActivityLevel::VeryActive));
        assert_eq!(ActivityLevel::from_str("lightly_active"), Some(ActivityLevel::Light));
        assert_eq!(ActivityLevel::from_str("couch"), None);
    }

    #[test]
    fn test_parse_round_trips_as_str() {
        for level in ActivityLevel::ALL {
            assert_eq!(ActivityLevel::from_str(level.as_str()), Some(level));
        }
        for activity in WaterActivity::ALL {
            assert_eq!(WaterActivity::from_str(activity.as_str()), Some(activity));
        }
        for climate in Climate::ALL {
            assert_eq!(Climate::from_str(climate.as_str()), Some(climate));
        }
        for sex in Sex::ALL {
            assert_eq!(Sex::from_str(sex.as_str()), Some(sex));
        }
    }

    #[test]
    fn test_sex_is_closed() {
        assert_eq!(Sex::from_str("F"), Some(Sex::Female));
        assert_eq!(Sex::from_str("other"), None);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&ActivityLevel::VeryActive).unwrap();
        assert_eq!(json, "\"very_active\"");
        let climate: Climate = serde_json::from_str("\"humid\"").unwrap();
        assert_eq!(climate, Climate::Humid);
    }
}
