//! Prompt text for downstream language-model analysis of summarized frame data.

/// Build a single analysis instruction embedding `values` and the free-text `summary`.
///
/// ```rust
/// use sheet_frame::prompt::analysis_prompt;
///
/// let prompt = analysis_prompt("January expenses", &[100.5, 200.0]);
/// assert_eq!(
///     prompt,
///     "Analyze these financial movements: [100.5 200]. Context: January expenses. \
///      Give me savings advice."
/// );
/// ```
pub fn analysis_prompt(summary: &str, values: &[f64]) -> String {
    let values: Vec<String> = values.iter().map(f64::to_string).collect();
    format!(
        "Analyze these financial movements: [{}]. Context: {summary}. Give me savings advice.",
        values.join(" ")
    )
}
