use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

/// Query parameters for the trend time series
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
pub struct TimeSeriesQuery {
    /// Comma-separated province names; all provinces when omitted.
    /// Present but empty is rejected with 400.
    #[param(example = "Aceh,Riau,Jambi")]
    pub provinces: Option<String>,

    /// Length of the window in days, ending yesterday
    #[validate(range(min = 1, max = 365, message = "days must be between 1 and 365"))]
    #[param(minimum = 1, maximum = 365)]
    pub days: Option<u32>,
}

/// Split a comma-separated province list, dropping blanks.
///
/// An empty or blank string yields an empty list, which callers treat as
/// "nothing selected" rather than "use the default".
pub fn parse_province_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_province_list() {
        assert_eq!(
            parse_province_list("Aceh, Sumatera Utara ,Riau"),
            vec!["Aceh", "Sumatera Utara", "Riau"]
        );
        assert!(parse_province_list("").is_empty());
        assert!(parse_province_list(" , ").is_empty());
    }

    #[test]
    fn test_days_validation() {
        let ok = TimeSeriesQuery {
            provinces: None,
            days: Some(30),
        };
        assert!(ok.validate().is_ok());

        let too_long = TimeSeriesQuery {
            provinces: None,
            days: Some(400),
        };
        assert!(too_long.validate().is_err());

        let unset = TimeSeriesQuery {
            provinces: None,
            days: None,
        };
        assert!(unset.validate().is_ok());
    }
}
