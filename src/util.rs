/// Parse a textual weight into a finite `f64`.
///
/// Surrounding whitespace is ignored. Returns `None` for anything that is not a number,
/// and also for `NaN` and infinities, which Rust would otherwise happily parse.
pub fn parse_weight(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|weight| weight.is_finite())
}
