use anyhow::{Context, Result};
use aws_sdk_dynamodb::{
    operation::{create_table::CreateTableOutput, scan::ScanOutput},
    types::{
        AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ScalarAttributeType,
    },
    Client,
};
use tracing::{debug, info};

use crate::dynamodb::{Record, Table};

/// DynamoDB client wrapper for the handful of operations the handlers need.
///
/// Each method performs exactly one logical request against the table (a scan
/// may span several pages). Nothing here retries: retry and timeout behaviour
/// is whatever the SDK client was configured with.
///
/// # Operations
/// - **Get**: Retrieve a record by its primary key
/// - **Put**: Write a record, replacing any record with the same key
/// - **Delete**: Remove a record; deleting a missing key is not an error
/// - **Scan**: Read every record in a table
///
/// # Example
///
/// ```no_run
/// use serverless_items::dynamodb::{DynamoDb, Record};
///
/// # async fn run() -> anyhow::Result<()> {
/// let config = aws_config::load_from_env().await;
/// let ddb = DynamoDb::new(&config);
///
/// let item = Record::new()
///     .set_string("itemId", "abc123")
///     .set_string("name", "Widget");
/// ddb.put_item("items", item).await?;
///
/// let key = Record::new().set_string("itemId", "abc123");
/// let found = ddb.get_item("items", key).await?;
/// assert!(found.is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DynamoDb {
    client: Client,
}

impl DynamoDb {
    /// Creates a new `DynamoDb` instance.
    pub fn new(sdk_config: &aws_config::SdkConfig) -> Self {
        Self {
            client: Client::new(sdk_config),
        }
    }

    /// Wraps an already configured SDK client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    // --- Table Operations ---

    /// Creates a table keyed by a string partition key if it doesn't exist.
    ///
    /// Only used to provision DynamoDB Local for integration runs; deployed
    /// tables are created by the infrastructure stack.
    pub async fn create_table_if_not_exists(
        &self,
        table: &Table,
    ) -> Result<Option<CreateTableOutput>> {
        if self.table_exists(table.name()).await? {
            info!("Table '{}' exists", table.name());
            return Ok(None);
        }

        let attribute_definition = AttributeDefinition::builder()
            .attribute_name(table.partition_key())
            .attribute_type(ScalarAttributeType::S)
            .build()?;

        let key_schema = KeySchemaElement::builder()
            .attribute_name(table.partition_key())
            .key_type(KeyType::Hash)
            .build()?;

        let output = self
            .client
            .create_table()
            .table_name(table.name())
            .billing_mode(BillingMode::PayPerRequest)
            .attribute_definitions(attribute_definition)
            .key_schema(key_schema)
            .send()
            .await
            .with_context(|| format!("failed to create table '{}'", table.name()))?;
        info!("Table '{}' created", table.name());
        Ok(Some(output))
    }

    /// Checks if a table exists.
    pub async fn table_exists(&self, table_name: &str) -> Result<bool> {
        let tables = self.client.list_tables().send().await?;
        Ok(tables.table_names().contains(&table_name.to_string()))
    }

    // --- Item Operations ---

    /// Puts a record into a DynamoDB table, unconditionally.
    pub async fn put_item(&self, table_name: &str, record: Record) -> Result<()> {
        self.client
            .put_item()
            .table_name(table_name)
            .set_item(Some(record.attributes))
            .send()
            .await
            .with_context(|| format!("PutItem on '{table_name}' failed"))?;

        debug!("Item added to '{table_name}'");
        Ok(())
    }

    /// Gets a record from a DynamoDB table by its key.
    pub async fn get_item(&self, table_name: &str, key: Record) -> Result<Option<Record>> {
        let response = self
            .client
            .get_item()
            .table_name(table_name)
            .set_key(Some(key.attributes))
            .send()
            .await
            .with_context(|| format!("GetItem on '{table_name}' failed"))?;

        Ok(response.item.map(Record::from))
    }

    /// Deletes a record from a DynamoDB table.
    ///
    /// No condition expression is attached, so the call succeeds whether or
    /// not the key existed.
    pub async fn delete_item(&self, table_name: &str, key: Record) -> Result<()> {
        self.client
            .delete_item()
            .table_name(table_name)
            .set_key(Some(key.attributes))
            .send()
            .await
            .with_context(|| format!("DeleteItem on '{table_name}' failed"))?;

        debug!("Item deleted from '{table_name}'");
        Ok(())
    }

    // --- Scan Operations ---

    /// Scans a whole table, following pagination until it is exhausted.
    pub async fn scan_table(&self, table_name: &str) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        let mut last_evaluated_key = None;

        loop {
            let mut scan = self.client.scan().table_name(table_name);

            if let Some(key) = last_evaluated_key {
                scan = scan.set_exclusive_start_key(Some(key));
            }

            let response: ScanOutput = scan
                .send()
                .await
                .with_context(|| format!("Scan on '{table_name}' failed"))?;

            if let Some(page) = response.items {
                records.extend(page.into_iter().map(Record::from));
            }

            last_evaluated_key = response.last_evaluated_key;

            if last_evaluated_key.is_none() {
                break;
            }
        }

        debug!("Scanned {} records from '{table_name}'", records.len());
        Ok(records)
    }
}
