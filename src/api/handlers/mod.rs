//! HTTP request handlers.

pub mod auth_handler;
pub mod blog_handler;

pub use auth_handler::auth_routes;
pub use blog_handler::blog_routes;

use serde::{Deserialize, Deserializer};

/// Read a JSON `null` string field as empty, same as an absent one.
///
/// Pair with `#[serde(default)]` so validation reports the field's own rule
/// instead of a deserialization error.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Form {
        #[serde(default, deserialize_with = "null_as_empty")]
        name: String,
    }

    #[test]
    fn test_null_absent_and_present() {
        let null: Form = serde_json::from_str(r#"{"name":null}"#).unwrap();
        let absent: Form = serde_json::from_str("{}").unwrap();
        let present: Form = serde_json::from_str(r#"{"name":"asha"}"#).unwrap();

        assert_eq!(null.name, "");
        assert_eq!(absent.name, "");
        assert_eq!(present.name, "asha");
    }

    #[test]
    fn test_wrong_type_still_rejected() {
        assert!(serde_json::from_str::<Form>(r#"{"name":42}"#).is_err());
    }
}
