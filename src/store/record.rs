//! Student record types
//!
//! `Student` is the stored entity. `StudentFields` is the shape of every
//! write payload: the full field set for a create, any subset for an update.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A stored student record
///
/// The five fields the typed interface declares non-null are still kept as
/// `Option` here: the verb-based create endpoint performs no validation, so a
/// record may legitimately hold an absent value for any of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Store-assigned identifier
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub address: Option<String>,
    pub nationality: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Student {
    /// Build a record from a write payload, copying every field verbatim
    pub fn from_fields(id: impl Into<String>, fields: StudentFields) -> Self {
        Self {
            id: id.into(),
            first_name: fields.first_name,
            last_name: fields.last_name,
            date_of_birth: fields.date_of_birth,
            address: fields.address,
            nationality: fields.nationality,
            email: fields.email,
            phone: fields.phone,
        }
    }
}

/// The seven mutable fields of a student, each optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentFields {
    #[serde(deserialize_with = "scalar_field")]
    pub first_name: Option<String>,
    #[serde(deserialize_with = "scalar_field")]
    pub last_name: Option<String>,
    #[serde(deserialize_with = "scalar_field")]
    pub date_of_birth: Option<String>,
    #[serde(deserialize_with = "scalar_field")]
    pub address: Option<String>,
    #[serde(deserialize_with = "scalar_field")]
    pub nationality: Option<String>,
    #[serde(deserialize_with = "scalar_field")]
    pub email: Option<String>,
    #[serde(deserialize_with = "scalar_field")]
    pub phone: Option<String>,
}

/// Read any JSON scalar as a field value
///
/// Numbers and `true` are kept in their JSON text form. `null`, `false` and
/// zero read as absent, so an update carrying them changes nothing. Arrays
/// and objects are rejected.
fn scalar_field<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null | Value::Bool(false) => Ok(None),
        Value::Bool(true) => Ok(Some("true".to_string())),
        Value::Number(n) if n.as_f64() == Some(0.0) => Ok(None),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::String(s) => Ok(Some(s)),
        other => Err(de::Error::custom(format!(
            "expected a string or scalar, found {}",
            match other {
                Value::Array(_) => "an array",
                _ => "an object",
            }
        ))),
    }
}

impl StudentFields {
    /// Payload with the five required fields set and no contact details
    pub fn required(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        date_of_birth: impl Into<String>,
        address: impl Into<String>,
        nationality: impl Into<String>,
    ) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            date_of_birth: Some(date_of_birth.into()),
            address: Some(address.into()),
            nationality: Some(nationality.into()),
            email: None,
            phone: None,
        }
    }

    /// Set the email address
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the phone number
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}
