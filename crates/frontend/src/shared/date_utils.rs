/// Date display formatting
///
/// Payload dates are ISO strings; these helpers reformat them for badges
/// and list rows without parsing into date types.

/// `"2024-03-15"` or `"2024-03-15T14:02:26Z"` -> `"15.03.2024"`
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    let mut parts = date_part.splitn(3, '-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day)) => format!("{}.{}.{}", day, month, year),
        _ => date_str.to_string(),
    }
}

/// `"2024-03-15T14:02:26.123Z"` -> `"15.03.2024 14:02"`
pub fn format_datetime(datetime_str: &str) -> String {
    let Some((date_part, time_part)) = datetime_str.split_once('T') else {
        return format_date(datetime_str);
    };
    let hhmm = &time_part[..time_part.len().min(5)];
    format!("{} {}", format_date(date_part), hhmm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15.03.2024 14:02");
        assert_eq!(format_datetime("2024-12-31T23:59:59Z"), "31.12.2024 23:59");
    }

    #[test]
    fn test_invalid_input_passes_through() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_datetime("invalid"), "invalid");
    }
}
