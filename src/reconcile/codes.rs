//! Survey-code to display-label translation.

/// Label reported for gender/age codes outside the known tables.
pub const UNKNOWN_LABEL: &str = "Unknown";

static DIET_CODES: &[(&str, &str)] = &[
    ("vegan", "vegan"),
    ("veggie", "vegetarian"),
    ("fish", "fish"),
    ("meat", "low_meat"),
    ("meat50", "medium_meat"),
    ("meat100", "high_meat"),
];

static GENDER_CODES: &[(&str, &str)] = &[("female", "Female"), ("male", "Male")];

static AGE_BRACKETS: &[&str] = &["20-29", "30-39", "40-49", "50-59", "60-69", "70-79"];

fn normalize(code: &str) -> String {
    code.trim().to_lowercase()
}

/// Translates a raw diet-group code into its display-stable identifier.
///
/// Unrecognized codes pass through in normalized form rather than falling
/// back to [`UNKNOWN_LABEL`]; see DESIGN.md for why this asymmetry with
/// gender/age is kept. An empty code stays empty, which marks the record
/// for dropping.
pub fn diet_label(code: &str) -> String {
    let code = normalize(code);
    DIET_CODES
        .iter()
        .find(|(raw, _)| *raw == code)
        .map(|(_, label)| label.to_string())
        .unwrap_or(code)
}

/// Translates a raw gender code; anything outside the table is `Unknown`.
pub fn gender_label(code: &str) -> String {
    let code = normalize(code);
    GENDER_CODES
        .iter()
        .find(|(raw, _)| *raw == code)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| UNKNOWN_LABEL.to_string())
}

/// Translates a raw age-bracket code; anything outside the table is `Unknown`.
pub fn age_label(code: &str) -> String {
    let code = normalize(code);
    if AGE_BRACKETS.contains(&code.as_str()) {
        code
    } else {
        UNKNOWN_LABEL.to_string()
    }
}
