use serde_json::{Map, Value};

use super::errors::ApiError;
use crate::db::Flag;

/// Typed payload for the mastery and bookmark flag updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagUpdate {
    pub pkey: i64,
    pub flag: Flag,
}

/// Typed payload for word registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub eng_val: String,
    pub jap_val: String,
}

/// Typed payload for word deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deletion {
    pub pkey: i64,
}

/// Parses a raw request body once and checks fields on demand. Every failure
/// at any stage (malformed JSON, missing key, wrong type, bad value) collapses
/// into the single `ApiError::Validation`, the one kind the dispatch boundary
/// maps to the Bad-Request response.
#[derive(Debug)]
pub struct Validator {
    payload: Map<String, Value>,
}

impl Validator {
    pub fn new(raw: &str) -> Result<Self, ApiError> {
        let parsed: Value = serde_json::from_str(raw).map_err(|_| ApiError::Validation)?;
        match parsed {
            Value::Object(payload) => Ok(Self { payload }),
            _ => Err(ApiError::Validation),
        }
    }

    fn field(&self, key: &str) -> Result<&Value, ApiError> {
        self.payload.get(key).ok_or(ApiError::Validation)
    }

    /// Present and convertible to an integer.
    pub fn pkey(&self) -> Result<i64, ApiError> {
        match self.field("pkey")? {
            Value::String(raw) => raw.parse().map_err(|_| ApiError::Validation),
            Value::Number(num) => num.as_i64().ok_or(ApiError::Validation),
            _ => Err(ApiError::Validation),
        }
    }

    /// Present and exactly one of the two flag spellings.
    pub fn flag(&self) -> Result<Flag, ApiError> {
        self.field("flag")?
            .as_str()
            .and_then(Flag::parse)
            .ok_or(ApiError::Validation)
    }

    /// Present and non-empty.
    pub fn english(&self) -> Result<String, ApiError> {
        match self.field("eng_val")?.as_str() {
            Some(value) if !value.is_empty() => Ok(value.to_string()),
            _ => Err(ApiError::Validation),
        }
    }

    /// Taken verbatim; only presence (and being text) is required.
    pub fn japanese(&self) -> Result<String, ApiError> {
        self.field("jap_val")?
            .as_str()
            .map(str::to_string)
            .ok_or(ApiError::Validation)
    }

    pub fn pkey_flag(&self) -> Result<FlagUpdate, ApiError> {
        Ok(FlagUpdate { pkey: self.pkey()?, flag: self.flag()? })
    }

    pub fn register(&self) -> Result<Registration, ApiError> {
        Ok(Registration { eng_val: self.english()?, jap_val: self.japanese()? })
    }

    pub fn pkey_only(&self) -> Result<Deletion, ApiError> {
        Ok(Deletion { pkey: self.pkey()? })
    }
}
