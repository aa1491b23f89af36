use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;
use serverless_items::events::{process_event, EventNotification};
use serverless_items::{config, logging};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    logging::init_logging(config::LogFormat::from_env())?;

    let event_bus = std::env::var(config::EVENT_BUS_VAR).unwrap_or_else(|_| "default".to_string());
    info!(event_bus = %event_bus, "Event processor ready");

    run(service_fn(|event: LambdaEvent<Value>| async move {
        process_event(&EventNotification::from_payload(event.payload));
        Ok::<(), Error>(())
    }))
    .await
}
