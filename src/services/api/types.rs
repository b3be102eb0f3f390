//! Wire types for the console admin API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A storage bucket as returned by the listing call.
///
/// Snapshot data; never mutated locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    /// Bucket name, unique per server.
    pub name: String,
    /// Aggregate used space in bytes.
    #[serde(default)]
    pub size: u64,
    /// Creation timestamp, when the server reports one.
    #[serde(default)]
    pub creation_date: Option<DateTime<Utc>>,
}

/// Response envelope for `GET /api/v1/buckets`.
///
/// An absent, `null`, or empty `buckets` field all mean zero results.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BucketList {
    #[serde(default)]
    buckets: Option<Vec<Bucket>>,
}

impl BucketList {
    /// Consume the envelope, normalizing the missing/null/empty cases.
    pub fn into_buckets(self) -> Vec<Bucket> {
        self.buckets.unwrap_or_default()
    }
}

/// Request body for `POST /api/v1/buckets`.
#[derive(Debug, Clone, Serialize)]
pub struct MakeBucketRequest {
    pub name: String,
}

/// Error document returned by the admin API.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub code: Option<i64>,
    pub message: String,
    #[serde(default, rename = "detailedMessage")]
    pub detailed_message: Option<String>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.detailed_message {
            Some(detail) if !detail.is_empty() => write!(f, "{}: {}", self.message, detail),
            _ => write!(f, "{}", self.message),
        }
    }
}

/// Validate a bucket name against S3 naming rules.
///
/// Names are 3-63 characters of lowercase letters, digits, dots and
/// hyphens, must start and end with a letter or digit, and must not look
/// like an IPv4 address.
pub fn validate_bucket_name(name: &str) -> Result<(), String> {
    if name.len() < 3 || name.len() > 63 {
        return Err("Bucket name must be between 3 and 63 characters".to_string());
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '.' || c == '-')
    {
        return Err(
            "Bucket name may only contain lowercase letters, digits, dots and hyphens"
                .to_string(),
        );
    }
    let first = name.chars().next().unwrap_or(' ');
    let last = name.chars().last().unwrap_or(' ');
    if !first.is_ascii_alphanumeric() || !last.is_ascii_alphanumeric() {
        return Err("Bucket name must start and end with a letter or digit".to_string());
    }
    if name.contains("..") {
        return Err("Bucket name must not contain consecutive dots".to_string());
    }
    let octets: Vec<&str> = name.split('.').collect();
    if octets.len() == 4 && octets.iter().all(|o| o.parse::<u8>().is_ok()) {
        return Err("Bucket name must not be formatted like an IP address".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_list_missing_field() {
        let list: BucketList = serde_json::from_str("{}").unwrap();
        assert!(list.into_buckets().is_empty());
    }

    #[test]
    fn test_bucket_list_null_field() {
        let list: BucketList = serde_json::from_str(r#"{"buckets": null}"#).unwrap();
        assert!(list.into_buckets().is_empty());
    }

    #[test]
    fn test_bucket_list_empty_field() {
        let list: BucketList = serde_json::from_str(r#"{"buckets": []}"#).unwrap();
        assert!(list.into_buckets().is_empty());
    }

    #[test]
    fn test_bucket_list_parses_records() {
        let body = r#"{"buckets": [{"name": "logs", "size": 1024}, {"name": "media"}]}"#;
        let buckets = serde_json::from_str::<BucketList>(body).unwrap().into_buckets();
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].name, "logs");
        assert_eq!(buckets[0].size, 1024);
        // size defaults to zero when the server omits it
        assert_eq!(buckets[1].size, 0);
    }

    #[test]
    fn test_bucket_list_ignores_extra_fields() {
        let body = r#"{"buckets": [{"name": "a", "size": 1}], "total": 99}"#;
        let buckets = serde_json::from_str::<BucketList>(body).unwrap().into_buckets();
        assert_eq!(buckets.len(), 1);
    }

    #[test]
    fn test_validate_bucket_name_accepts_valid_names() {
        assert!(validate_bucket_name("my-bucket").is_ok());
        assert!(validate_bucket_name("my-bucket.backup").is_ok());
        assert!(validate_bucket_name("abc").is_ok());
        assert!(validate_bucket_name("logs2024").is_ok());
    }

    #[test]
    fn test_validate_bucket_name_rejects_invalid_names() {
        assert!(validate_bucket_name("ab").is_err());
        assert!(validate_bucket_name(&"a".repeat(64)).is_err());
        assert!(validate_bucket_name("MyBucket").is_err());
        assert!(validate_bucket_name("-leading").is_err());
        assert!(validate_bucket_name("trailing-").is_err());
        assert!(validate_bucket_name("has_underscore").is_err());
        assert!(validate_bucket_name("a..b").is_err());
        assert!(validate_bucket_name("192.168.1.1").is_err());
    }

    #[test]
    fn test_api_error_display() {
        let err: ApiError =
            serde_json::from_str(r#"{"message": "access denied", "detailedMessage": "key expired"}"#)
                .unwrap();
        assert_eq!(err.to_string(), "access denied: key expired");

        let bare: ApiError = serde_json::from_str(r#"{"message": "access denied"}"#).unwrap();
        assert_eq!(bare.to_string(), "access denied");
    }
}
