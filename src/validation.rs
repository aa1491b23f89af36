use serde_json::Value;
use thiserror::Error;

/// Describes the fields a JSON request body may carry.
///
/// Fields are checked in declaration order so that error messages list them
/// the same way every time. Unknown fields are ignored, and `null` counts as
/// absent.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use serverless_items::validation::{FieldType, Schema};
///
/// let schema = Schema::new()
///     .required("name", FieldType::String)
///     .optional("description", FieldType::String);
///
/// assert!(schema.validate(&json!({"name": "Widget"})).is_ok());
/// assert!(schema.validate(&json!({"description": "no name"})).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<Field>,
}

#[derive(Debug, Clone)]
struct Field {
    name: String,
    field_type: FieldType,
    required: bool,
}

/// The JSON type a field must have when present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// A string. When required, it must also be non-empty.
    String,
    Object,
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FieldType::String => "string",
            FieldType::Object => "object",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Request body must be a JSON object")]
    NotAnObject,
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),
    #[error("Field '{field}' must be of type {expected}")]
    InvalidType { field: String, expected: FieldType },
}

impl Schema {
    /// Creates a new empty `Schema`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(self, name: impl Into<String>, field_type: FieldType) -> Self {
        self.add_field(name, field_type, true)
    }

    pub fn optional(self, name: impl Into<String>, field_type: FieldType) -> Self {
        self.add_field(name, field_type, false)
    }

    fn add_field(mut self, name: impl Into<String>, field_type: FieldType, required: bool) -> Self {
        self.fields.push(Field {
            name: name.into(),
            field_type,
            required,
        });
        self
    }

    /// Names of the required fields, in declaration order.
    pub fn required_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|field| field.required)
            .map(|field| field.name.as_str())
            .collect()
    }

    /// Checks `body` against the schema. Absent or blank required fields are
    /// reported ahead of any type mismatch.
    pub fn validate(&self, body: &Value) -> Result<(), ValidationError> {
        let object = body.as_object().ok_or(ValidationError::NotAnObject)?;
        let present = |field: &Field| object.get(&field.name).filter(|value| !value.is_null());

        let missing: Vec<String> = self
            .fields
            .iter()
            .filter(|&field| field.required && present(field).map_or(true, is_blank))
            .map(|field| field.name.clone())
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        for field in &self.fields {
            if let Some(value) = present(field) {
                if !field.field_type.matches(value) {
                    return Err(ValidationError::InvalidType {
                        field: field.name.clone(),
                        expected: field.field_type,
                    });
                }
            }
        }
        Ok(())
    }
}

impl FieldType {
    fn matches(&self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::Object => value.is_object(),
        }
    }
}

fn is_blank(value: &Value) -> bool {
    value.as_str().is_some_and(|s| s.trim().is_empty())
}

/// Schema for `POST /items`.
pub fn create_item_schema() -> Schema {
    Schema::new()
        .required("name", FieldType::String)
        .optional("description", FieldType::String)
}

/// Schema for `POST /reports`.
pub fn create_report_schema() -> Schema {
    Schema::new()
        .required("name", FieldType::String)
        .optional("contact", FieldType::String)
        .required("location", FieldType::Object)
        .required("imageKey", FieldType::String)
}
