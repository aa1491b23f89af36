use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::HashMap;

/// A raw DynamoDB record: the attribute map sent to and received from a table.
///
/// Entities are converted into records with `serde_dynamo`; key records used
/// for point reads and deletes are built by hand with `set_string`.
///
/// # Example
///
/// ```
/// use serverless_items::dynamodb::Record;
///
/// let key = Record::new().set_string("itemId", "abc123");
/// assert_eq!(key.into_attributes().len(), 1);
/// ```
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Record {
    pub(crate) attributes: HashMap<String, AttributeValue>,
}

impl Record {
    /// Creates a new empty `Record`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a string attribute.
    pub fn set_string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes
            .insert(key.into(), AttributeValue::S(value.into()));
        self
    }

    pub fn into_attributes(self) -> HashMap<String, AttributeValue> {
        self.attributes
    }
}

impl From<HashMap<String, AttributeValue>> for Record {
    fn from(attributes: HashMap<String, AttributeValue>) -> Self {
        Self { attributes }
    }
}
