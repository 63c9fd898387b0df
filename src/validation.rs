use chrono::NaiveDate;

use crate::error::{KinError, KinResult};
use crate::model::PersonId;

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> KinResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(KinError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Trims an optional string, returning None if blank.
pub fn trim_optional(value: Option<&str>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// A death date, when both are known, may not precede the birth date.
pub fn dates_in_order(birth: Option<NaiveDate>, death: Option<NaiveDate>) -> KinResult<()> {
    match (birth, death) {
        (Some(b), Some(d)) if d < b => Err(KinError::DeathBeforeBirth),
        _ => Ok(()),
    }
}

/// A relation edge may not point back at its owner.
pub fn not_self(owner: PersonId, target: Option<PersonId>, field: &str) -> KinResult<()> {
    if target == Some(owner) {
        Err(KinError::SelfReference {
            field: field.to_string(),
        })
    } else {
        Ok(())
    }
}

/// Parses `YYYY-MM-DD`, also accepting a trailing time part
/// (`1990-05-15T00:00:00.000Z`).
pub fn parse_date(value: &str) -> KinResult<NaiveDate> {
    let trimmed = value.trim();
    let date_part = trimmed.split('T').next().unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(|_| KinError::InvalidDate {
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Id;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn non_blank_trims_whitespace() {
        assert_eq!(non_blank("  Amina  ", "name").unwrap(), "Amina");
    }

    #[test]
    fn non_blank_rejects_whitespace_only() {
        assert!(matches!(
            non_blank("   ", "name"),
            Err(KinError::BlankField { .. })
        ));
    }

    #[test]
    fn trim_optional_returns_none_for_blank() {
        assert_eq!(trim_optional(Some("   ")), None);
        assert_eq!(trim_optional(None), None);
        assert_eq!(trim_optional(Some(" bio ")), Some("bio".to_string()));
    }

    #[test]
    fn death_may_not_precede_birth() {
        assert!(dates_in_order(Some(ymd(1950, 1, 1)), Some(ymd(2010, 6, 1))).is_ok());
        assert!(dates_in_order(Some(ymd(1950, 1, 1)), Some(ymd(1950, 1, 1))).is_ok());
        assert!(dates_in_order(None, Some(ymd(1950, 1, 1))).is_ok());
        assert!(matches!(
            dates_in_order(Some(ymd(1950, 1, 2)), Some(ymd(1950, 1, 1))),
            Err(KinError::DeathBeforeBirth)
        ));
    }

    #[test]
    fn not_self_rejects_loop() {
        let id = Id::generate();
        assert!(not_self(id, None, "father").is_ok());
        assert!(not_self(id, Some(Id::generate()), "father").is_ok());
        assert!(matches!(
            not_self(id, Some(id), "spouse"),
            Err(KinError::SelfReference { .. })
        ));
    }

    #[test]
    fn parse_date_accepts_plain_and_timestamped() {
        assert_eq!(parse_date("1990-05-15").unwrap(), ymd(1990, 5, 15));
        assert_eq!(parse_date("1990-05-15T00:00:00.000Z").unwrap(), ymd(1990, 5, 15));
        assert!(parse_date("15/05/1990").is_err());
    }
}
