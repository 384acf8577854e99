//! Help entry: one `{ appname, appid, path }` record from a context-help map.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Error, MalformedReason, Result};

pub const FIELD_APPNAME: &str = "appname";
pub const FIELD_APPID: &str = "appid";
pub const FIELD_PATH: &str = "path";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HelpEntry {
    /// Owning product/module; empty for the default scope.
    #[serde(rename = "appname")]
    pub application_name: String,
    #[serde(rename = "appid")]
    pub identifier: String,
    /// Relative help topic path. Opaque; only checked for non-emptiness.
    #[serde(rename = "path")]
    pub resource_path: String,
}

impl HelpEntry {
    pub fn new(
        application_name: impl Into<String>,
        identifier: impl Into<String>,
        resource_path: impl Into<String>,
    ) -> Self {
        HelpEntry {
            application_name: application_name.into(),
            identifier: identifier.into(),
            resource_path: resource_path.into(),
        }
    }

    /// Build an entry from a raw JSON record at position `index`.
    /// `appname` may be absent; `appid` and `path` must be non-empty strings.
    pub fn from_record(index: usize, record: &Value) -> Result<Self> {
        let malformed = |reason| Error::MalformedData { index, reason };
        let object = record
            .as_object()
            .ok_or_else(|| malformed(MalformedReason::NotAnObject))?;

        let application_name = match object.get(FIELD_APPNAME) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(name)) => name.clone(),
            Some(_) => return Err(malformed(MalformedReason::NotAString(FIELD_APPNAME))),
        };
        let identifier = required_str(object, FIELD_APPID).map_err(malformed)?;
        let resource_path = required_str(object, FIELD_PATH).map_err(malformed)?;

        Ok(HelpEntry {
            application_name,
            identifier: identifier.to_string(),
            resource_path: resource_path.to_string(),
        })
    }

    /// Schema check for entries built in code rather than parsed.
    pub fn check(&self, index: usize) -> Result<()> {
        let reason = if self.identifier.trim().is_empty() {
            MalformedReason::EmptyField(FIELD_APPID)
        } else if self.resource_path.trim().is_empty() {
            MalformedReason::EmptyField(FIELD_PATH)
        } else {
            return Ok(());
        };
        Err(Error::MalformedData { index, reason })
    }
}

fn required_str<'a>(
    object: &'a Map<String, Value>,
    field: &'static str,
) -> std::result::Result<&'a str, MalformedReason> {
    match object.get(field) {
        None | Some(Value::Null) => Err(MalformedReason::MissingField(field)),
        Some(Value::String(value)) if value.trim().is_empty() => {
            Err(MalformedReason::EmptyField(field))
        }
        Some(Value::String(value)) => Ok(value),
        Some(_) => Err(MalformedReason::NotAString(field)),
    }
}
