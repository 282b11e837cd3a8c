//! Maps an AQI value onto a respiratory risk tier.

use crate::models::{RiskAssessment, RiskLevel};

const LOW_MESSAGE: &str = "Air quality is satisfactory; little to no risk.";
const MEDIUM_MESSAGE: &str = "Sensitive individuals may experience minor issues.";
const HIGH_MESSAGE: &str = "Everyone may begin to experience health effects.";

/// Classifies `aqi`: below 100 is Low, 100 through 200 inclusive is Medium, above is High.
///
/// The same thresholds apply whatever scale the reporting provider uses.
pub fn classify(aqi: f64) -> RiskAssessment {
    if aqi < 100.0 {
        RiskAssessment {
            level: RiskLevel::Low,
            message: LOW_MESSAGE,
        }
    } else if aqi <= 200.0 {
        RiskAssessment {
            level: RiskLevel::Medium,
            message: MEDIUM_MESSAGE,
        }
    } else {
        RiskAssessment {
            level: RiskLevel::High,
            message: HIGH_MESSAGE,
        }
    }
}
