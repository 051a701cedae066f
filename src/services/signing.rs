//! HMAC request signing with a profile's access key.

use crate::config::AccessKey;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// The headers to attach to a signed request.
pub struct Signature {
    pub date: String,
    pub authorization: String,
}

/// The canonical string covered by the signature: method, path+query, date
/// and signing email, newline-joined.
fn string_to_sign(method: &str, path_and_query: &str, date: &str, email: &str) -> String {
    format!("{}\n{}\n{}\n{}", method, path_and_query, date, email)
}

/// Signs the request parts with the access key, producing the `X-Els-Date`
/// and `Authorization` header values.
pub fn sign(
    key: &AccessKey,
    method: &str,
    path_and_query: &str,
    now: DateTime<Utc>,
) -> anyhow::Result<Signature> {
    let date = now.to_rfc2822();
    let canonical = string_to_sign(method, path_and_query, &date, &key.email);

    let mut mac = HmacSha256::new_from_slice(key.secret_access_key.as_bytes())
        .map_err(|e| anyhow::anyhow!("invalid signing key: {}", e))?;
    mac.update(canonical.as_bytes());
    let sig = hex::encode(mac.finalize().into_bytes());

    Ok(Signature {
        date,
        authorization: format!("ELS {}:{}", key.id, sig),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn key() -> AccessKey {
        AccessKey {
            id: "anID".to_string(),
            secret_access_key: "aSecret".to_string(),
            email: "me@example.com".to_string(),
            expiry_date: None,
        }
    }

    #[test]
    fn canonical_string_covers_all_parts() {
        let s = string_to_sign("GET", "/vendors/v1?cursor=c", "date", "me@example.com");
        assert_eq!(s, "GET\n/vendors/v1?cursor=c\ndate\nme@example.com");
    }

    #[test]
    fn signature_is_deterministic_for_a_fixed_instant() {
        let now = Utc.with_ymd_and_hms(2018, 7, 1, 12, 0, 0).unwrap();
        let a = sign(&key(), "GET", "/vendors/v1", now).unwrap();
        let b = sign(&key(), "GET", "/vendors/v1", now).unwrap();
        assert_eq!(a.authorization, b.authorization);
        assert!(a.authorization.starts_with("ELS anID:"));
        assert_eq!(a.date, now.to_rfc2822());
    }

    #[test]
    fn signature_varies_with_the_path() {
        let now = Utc.with_ymd_and_hms(2018, 7, 1, 12, 0, 0).unwrap();
        let a = sign(&key(), "GET", "/vendors/v1", now).unwrap();
        let b = sign(&key(), "GET", "/vendors/v2", now).unwrap();
        assert_ne!(a.authorization, b.authorization);
    }
}
