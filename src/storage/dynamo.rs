use std::collections::HashMap;
use std::marker::PhantomData;

use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;

use crate::dynamodb::{DynamoDb, Record, Table};
use crate::storage::{Entity, Repository};

/// [`Repository`] backed by a DynamoDB table.
///
/// Entities are converted to and from attribute maps with `serde_dynamo`, so
/// the stored attribute names are the entity's serialized field names.
#[derive(Debug, Clone)]
pub struct DynamoRepository<T> {
    db: DynamoDb,
    table: Table,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity> DynamoRepository<T> {
    pub fn new(db: DynamoDb, table_name: impl Into<String>) -> Self {
        Self {
            db,
            table: Table::new(table_name, T::PARTITION_KEY),
            _entity: PhantomData,
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    fn key_record(&self, key: &str) -> Record {
        Record::new().set_string(self.table.partition_key(), key)
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for DynamoRepository<T> {
    async fn get(&self, key: &str) -> Result<Option<T>> {
        let record = self.db.get_item(self.table.name(), self.key_record(key)).await?;

        record
            .map(|record| {
                serde_dynamo::from_item(record.into_attributes())
                    .with_context(|| format!("malformed {} record '{key}'", T::NAME))
            })
            .transpose()
    }

    async fn put(&self, entity: &T) -> Result<()> {
        let attributes: HashMap<String, AttributeValue> = serde_dynamo::to_item(entity)
            .with_context(|| format!("cannot encode {} '{}'", T::NAME, entity.key()))?;

        self.db
            .put_item(self.table.name(), Record::from(attributes))
            .await
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.db
            .delete_item(self.table.name(), self.key_record(key))
            .await
    }

    async fn scan(&self) -> Result<Vec<T>> {
        let records = self.db.scan_table(self.table.name()).await?;

        records
            .into_iter()
            .map(|record| {
                serde_dynamo::from_item(record.into_attributes())
                    .with_context(|| format!("malformed {} record in scan", T::NAME))
            })
            .collect()
    }
}
