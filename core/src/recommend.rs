use crate::models::RiskLevel;

/// Fixed recommendation per risk level.
pub fn recommend_action(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::High => {
            "Immediate inspection and repair required. Consider shutdown until resolved."
        }
        RiskLevel::Medium => "Schedule maintenance soon and monitor condition.",
        RiskLevel::Low => "No urgent action required. Routine monitoring is sufficient.",
    }
}
