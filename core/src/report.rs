use crate::models::AnalysisResult;
use serde_json::{json, Value};

/// The content after the last '(' of the summary, closing parenthesis
/// removed. With a well-formed summary this is the keyword-hit annotation;
/// a summary without parentheses falls through unchanged.
pub fn details_line(summary: &str) -> String {
    summary
        .rsplit('(')
        .next()
        .unwrap_or(summary)
        .replace(')', "")
}

/// Render the fixed console report.
pub fn print_report(result: &AnalysisResult) {
    println!("\n=== Inspection Analysis ===");
    println!("Summary:");
    println!("{}", result.summary);

    println!("\nDetails:");
    println!("{}", details_line(&result.summary));

    println!("\nRisk level:");
    println!("{}", result.risk_level);

    println!("\nRecommended action:");
    println!("{}", result.recommended_action);
    println!("===========================\n");
}

pub fn json_envelope(command: &str, status: &str, data: Value) -> Value {
    json!({
        "command": command,
        "status": status,
        "data": data,
    })
}

/// JSON rendering of a result, wrapped in the standard envelope.
pub fn to_json(result: &AnalysisResult) -> Value {
    json_envelope("analyze", "ok", json!({ "result": result }))
}
