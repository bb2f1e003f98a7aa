use super::schema::CREATES;
use anyhow::Context;
use std::sync::Arc;
use tokio_postgres::Client;

/// Connect to the database named by DB_URL, ensure the strategy table
/// exists, and return the shared client.
pub async fn db() -> anyhow::Result<Arc<Client>> {
    log::info!("connecting to database");
    let tls = tokio_postgres::tls::NoTls;
    let ref url = std::env::var("DB_URL").context("DB_URL must be set")?;
    let (client, connection) = tokio_postgres::connect(url, tls)
        .await
        .context("database connection failed")?;
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            log::error!("database connection closed: {}", e);
        }
    });
    client
        .execute("SET client_min_messages TO WARNING", &[])
        .await
        .context("set client_min_messages")?;
    client
        .batch_execute(CREATES)
        .await
        .context("create strategy table")?;
    Ok(Arc::new(client))
}
