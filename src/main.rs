use std::process::ExitCode;
use std::sync::Arc;

use cme_insights::api::{server, ApiContext};
use cme_insights::config::{self, Settings};
use cme_insights::store::MongoStore;

#[tokio::main]
async fn main() -> ExitCode {
    cme_insights::init_tracing();
    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(err) => {
            tracing::error!(%err, "configuration error");
            return ExitCode::FAILURE;
        }
    };

    let store = match MongoStore::connect(&settings.mongo_uri, &settings.database_name).await {
        Ok(store) => store,
        Err(err) => {
            tracing::error!(%err, "cannot construct store client");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = store.ping().await {
        tracing::error!(%err, database = %settings.database_name, "store unreachable");
        return ExitCode::FAILURE;
    }
    tracing::info!(database = %settings.database_name, "connected to store");

    let ctx = ApiContext::new(Arc::new(store));
    if let Err(err) = server::serve(settings.listen_addr, ctx).await {
        tracing::error!(%err, "server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
