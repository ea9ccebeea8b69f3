//! ActiveCampaign v3 API request and response bodies.
//!
//! Only the fields this crate reads or writes are modelled. Ids arrive as
//! strings from the API but some proxies emit numbers, so both are accepted.

use serde::{Deserialize, Deserializer, Serialize};

// ════════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════════

/// `POST /api/3/contacts`
#[derive(Debug, Serialize)]
pub struct ContactEnvelope<'a> {
    pub contact: ContactBody<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactBody<'a> {
    pub email: &'a str,
    pub first_name: &'a str,
    pub field_values: Vec<FieldValue<'a>>,
}

#[derive(Debug, Serialize)]
pub struct FieldValue<'a> {
    pub field: &'a str,
    pub value: &'a str,
}

/// `POST /api/3/tags`
#[derive(Debug, Serialize)]
pub struct TagEnvelope<'a> {
    pub tag: TagBody<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagBody<'a> {
    pub tag: &'a str,
    pub tag_type: &'a str,
}

/// `POST /api/3/contactTags`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactTagEnvelope<'a> {
    pub contact_tag: ContactTagBody<'a>,
}

#[derive(Debug, Serialize)]
pub struct ContactTagBody<'a> {
    pub contact: &'a str,
    pub tag: &'a str,
}

// ════════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Default, Deserialize)]
pub struct ContactResponse {
    #[serde(default)]
    pub contact: Option<IdOnly>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TagResponse {
    #[serde(default)]
    pub tag: Option<IdOnly>,
}

#[derive(Debug, Deserialize)]
pub struct IdOnly {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: Option<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn contact_body_uses_camel_case() {
        let body = ContactEnvelope {
            contact: ContactBody {
                email: "a@example.com",
                first_name: "Ada",
                field_values: vec![FieldValue {
                    field: "1",
                    value: "bold",
                }],
            },
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"contact": {
                "email": "a@example.com",
                "firstName": "Ada",
                "fieldValues": [{"field": "1", "value": "bold"}]
            }})
        );
    }

    #[test]
    fn contact_tag_body_shape() {
        let body = ContactTagEnvelope {
            contact_tag: ContactTagBody {
                contact: "7",
                tag: "12",
            },
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"contactTag": {"contact": "7", "tag": "12"}})
        );
    }

    #[test]
    fn ids_accept_strings_and_numbers() {
        let s: ContactResponse = serde_json::from_value(json!({"contact": {"id": "42"}})).unwrap();
        let n: ContactResponse = serde_json::from_value(json!({"contact": {"id": 42}})).unwrap();
        assert_eq!(s.contact.unwrap().id.as_deref(), Some("42"));
        assert_eq!(n.contact.unwrap().id.as_deref(), Some("42"));
    }

    #[test]
    fn missing_ids_are_none() {
        let r: TagResponse = serde_json::from_value(json!({"tag": {}})).unwrap();
        assert!(r.tag.unwrap().id.is_none());
        let r: TagResponse = serde_json::from_value(json!({})).unwrap();
        assert!(r.tag.is_none());
    }
}
