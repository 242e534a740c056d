use super::ApiError;
use crate::models::Status;

const MAX_COMMENT_LEN: usize = 2000;

pub fn validate_status(status: Option<&str>) -> Result<Status, ApiError> {
    let status = status.ok_or_else(|| ApiError::validation("Status is required"))?;

    status.parse().map_err(|_| {
        let allowed: Vec<&str> = Status::ALL.iter().map(|s| s.as_str()).collect();
        ApiError::validation(format!(
            "Invalid status '{status}'. Must be one of: {}",
            allowed.join(", ")
        ))
    })
}

/// A comment must be present but may be empty.
pub fn validate_comment(comment: Option<&str>) -> Result<&str, ApiError> {
    let comment = comment.ok_or_else(|| ApiError::validation("Comment is required"))?;

    if comment.chars().count() > MAX_COMMENT_LEN {
        return Err(ApiError::validation(format!(
            "Comment must be {MAX_COMMENT_LEN} characters or less"
        )));
    }

    Ok(comment)
}

pub fn validate_credentials<'a>(
    username: Option<&'a str>,
    password: Option<&'a str>,
) -> Result<(&'a str, &'a str), ApiError> {
    let username = username
        .filter(|u| !u.trim().is_empty())
        .ok_or_else(|| ApiError::validation("Username is required"))?;
    let password = password
        .filter(|p| !p.is_empty())
        .ok_or_else(|| ApiError::validation("Password is required"))?;

    Ok((username, password))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_must_be_present_and_enumerated() {
        assert_eq!(validate_status(Some("UP")).unwrap(), Status::Up);
        assert_eq!(
            validate_status(Some("UP WITH ISSUES")).unwrap(),
            Status::UpWithIssues
        );
        assert!(matches!(
            validate_status(None),
            Err(ApiError::ValidationError(_))
        ));
        assert!(matches!(
            validate_status(Some("BROKEN")),
            Err(ApiError::ValidationError(_))
        ));
        assert!(validate_status(Some("up")).is_err());
    }

    #[test]
    fn comment_may_be_empty_but_not_missing() {
        assert_eq!(validate_comment(Some("")).unwrap(), "");
        assert_eq!(validate_comment(Some("fixed")).unwrap(), "fixed");
        assert!(validate_comment(None).is_err());
        assert!(validate_comment(Some(&"x".repeat(MAX_COMMENT_LEN + 1))).is_err());
    }

    #[test]
    fn credentials_require_both_fields() {
        assert_eq!(
            validate_credentials(Some("admin"), Some("admin123")).unwrap(),
            ("admin", "admin123")
        );
        assert!(validate_credentials(None, Some("x")).is_err());
        assert!(validate_credentials(Some("admin"), None).is_err());
        assert!(validate_credentials(Some(" "), Some("x")).is_err());
        assert!(validate_credentials(Some("admin"), Some("")).is_err());
    }
}
