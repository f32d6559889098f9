use thiserror::Error;

/// Separator used in record date keys ("DD-MM-YYYY")
pub const DATE_KEY_SEPARATOR: char = '-';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateKeyError {
    #[error("date key '{key}' has {parts} parts, expected 3 (DD-MM-YYYY)")]
    PartCount { key: String, parts: usize },

    #[error("date key '{key}' has a non-numeric year '{year}'")]
    Year { key: String, year: String },
}

/// Day, month and year substrings of a "DD-MM-YYYY" key.
///
/// Parts are taken positionally from the split and are not validated. A key
/// with too few separators leaves the trailing parts as `None`, which never
/// compares equal to a selector value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParts<'a> {
    pub day: Option<&'a str>,
    pub month: Option<&'a str>,
    pub year: Option<&'a str>,
}

impl<'a> DateParts<'a> {
    /// Permissive split, used by filtering
    pub fn parse(key: &'a str) -> Self {
        let mut parts = key.split(DATE_KEY_SEPARATOR);
        Self {
            day: parts.next(),
            month: parts.next(),
            year: parts.next(),
        }
    }

    /// Split that requires exactly three parts
    pub fn parse_strict(key: &'a str) -> Result<Self, DateKeyError> {
        let parts = key.split(DATE_KEY_SEPARATOR).count();
        if parts != 3 {
            return Err(DateKeyError::PartCount {
                key: key.to_string(),
                parts,
            });
        }
        Ok(Self::parse(key))
    }

    /// Year as an integer, for deriving the year selector range
    pub fn year_number(&self) -> Option<i32> {
        self.year?.trim().parse::<i32>().ok()
    }
}

/// Integer year of a well-formed key
pub fn parse_year(key: &str) -> Result<i32, DateKeyError> {
    let parts = DateParts::parse_strict(key)?;
    parts.year_number().ok_or_else(|| DateKeyError::Year {
        key: key.to_string(),
        year: parts.year.unwrap_or_default().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positional() {
        let parts = DateParts::parse("05-04-2025");
        assert_eq!(parts.day, Some("05"));
        assert_eq!(parts.month, Some("04"));
        assert_eq!(parts.year, Some("2025"));
        assert_eq!(parts.year_number(), Some(2025));
    }

    #[test]
    fn test_parse_malformed_leaves_missing_parts() {
        let parts = DateParts::parse("05/04/2025");
        assert_eq!(parts.day, Some("05/04/2025"));
        assert_eq!(parts.month, None);
        assert_eq!(parts.year, None);
        assert_eq!(parts.year_number(), None);
    }

    #[test]
    fn test_parse_strict() {
        assert!(DateParts::parse_strict("01-04-2025").is_ok());
        assert_eq!(
            DateParts::parse_strict("01-04"),
            Err(DateKeyError::PartCount {
                key: "01-04".to_string(),
                parts: 2
            })
        );
        assert!(DateParts::parse_strict("01-04-2025-1").is_err());
    }

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("15-03-2024"), Ok(2024));
        assert!(matches!(
            parse_year("15-03-abcd"),
            Err(DateKeyError::Year { .. })
        ));
    }
}
