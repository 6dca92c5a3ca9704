//! Text formatting helpers shared by all measures

/// Format a whole-second duration as `MM:SS`, or `M:SS` when
/// `suppress_leading_zero` is set
///
/// There is no hour component: an hour renders as `60:00`.
pub fn format_duration(total_seconds: u64, suppress_leading_zero: bool) -> String {
    let seconds = total_seconds % 60;
    let minutes = (total_seconds - seconds) / 60;
    let width = if suppress_leading_zero { 1 } else { 2 };
    format!("{minutes:0width$}:{seconds:02}")
}
