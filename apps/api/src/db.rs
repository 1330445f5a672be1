use anyhow::{Context, Result};
use mongodb::{bson::doc, Client, Database};
use tracing::{error, info};

/// Used when the connection string does not name a database.
pub const DEFAULT_DATABASE: &str = "aijobmatcher";

/// Builds the MongoDB handle. The driver connects lazily, so this only fails
/// on a malformed URI; reachability is checked by [`verify_connection`].
pub async fn connect(mongodb_uri: &str) -> Result<Database> {
    let client = Client::with_uri_str(mongodb_uri)
        .await
        .context("MONGODB_URI is not a valid MongoDB connection string")?;

    let db = client
        .default_database()
        .unwrap_or_else(|| client.database(DEFAULT_DATABASE));

    info!("MongoDB client initialized (database: {})", db.name());
    Ok(db)
}

/// Pings the server once and logs the outcome. Never fails the caller.
pub async fn verify_connection(db: Database) {
    match db.run_command(doc! { "ping": 1 }).await {
        Ok(_) => info!("MongoDB connected"),
        Err(e) => error!("MongoDB connection error: {e}"),
    }
}
