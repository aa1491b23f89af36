use lambda_http::{run, service_fn, Error};
use serverless_items::{app, config, logging};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    logging::init_logging(config::LogFormat::from_env())?;

    let config = config::Config::from_env()?;
    let sdk_config = aws_config::load_from_env().await;
    let state = app::AppState::from_config(&config, &sdk_config);

    info!("HTTP handlers ready");
    run(service_fn(|event| app::route(&state, event))).await
}
