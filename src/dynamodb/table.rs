/// DynamoDB table configuration.
///
/// Names a table and the attribute that acts as its partition key. Every table
/// used by the handlers has a simple primary key (partition key only): items
/// are addressed by `itemId` and reports by `reportId`.
///
/// Table names are injected by the deployment environment, so they are owned
/// strings rather than constants.
///
/// # Example
///
/// ```
/// use serverless_items::dynamodb::Table;
///
/// let table = Table::new("items-dev", "itemId");
/// assert_eq!(table.name(), "items-dev");
/// assert_eq!(table.partition_key(), "itemId");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    name: String,
    partition_key: &'static str,
}

impl Table {
    /// Creates a new `Table` instance.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the DynamoDB table.
    /// * `partition_key` - The name of the partition key attribute.
    pub fn new(name: impl Into<String>, partition_key: &'static str) -> Self {
        Self {
            name: name.into(),
            partition_key,
        }
    }

    /// Returns the name of the table.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the partition key of the table.
    pub fn partition_key(&self) -> &'static str {
        self.partition_key
    }
}
