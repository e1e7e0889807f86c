use kitrubric_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse a weight that must lie in [0, 1]
pub fn parse_unit_weight(s: &str) -> std::result::Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(format!("{} is outside [0, 1]", value));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!(parse_format("json"), Ok(OutputFormat::Json));
        assert!(parse_format("records").is_err());
    }

    #[test]
    fn test_parse_unit_weight() {
        assert_eq!(parse_unit_weight("0.25"), Ok(0.25));
        assert_eq!(parse_unit_weight("1"), Ok(1.0));
        assert!(parse_unit_weight("1.5").is_err());
        assert!(parse_unit_weight("-0.1").is_err());
        assert!(parse_unit_weight("NaN").is_err());
        assert!(parse_unit_weight("lots").is_err());
    }
}
