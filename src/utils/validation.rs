use crate::utils::error::{Result, ZoneError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ZoneError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ZoneError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ZoneError::MissingConfigError {
        field: field_name.to_string(),
    })
}

// Values are embedded verbatim, so only emptiness is rejected.
pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ZoneError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output", "zonefile.zone").is_ok());
        assert!(validate_path("output", "out/dir/zonefile.zone").is_ok());
        assert!(validate_path("output", "").is_err());
        assert!(validate_path("output", "zone\0file").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("hash.aman.run".to_string());
        let absent: Option<String> = None;

        assert_eq!(
            validate_required_field("domain", &present).unwrap(),
            "hash.aman.run"
        );
        assert!(matches!(
            validate_required_field("domain", &absent),
            Err(ZoneError::MissingConfigError { field }) if field == "domain"
        ));
    }

    #[test]
    fn test_validate_non_empty_string_keeps_odd_values() {
        assert!(validate_non_empty_string("domain", "not a domain!").is_ok());
        assert!(validate_non_empty_string("canister", " ").is_ok());
        assert!(validate_non_empty_string("canister", "").is_err());
    }
}
