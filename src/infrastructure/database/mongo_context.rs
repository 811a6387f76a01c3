use std::error::Error;
use serde::{Deserialize, Serialize};
use mongodb::{bson::doc, options::ClientOptions, Client, Collection, Database};
use regex::Regex;

/// The single long-lived connection to the document store.
///
/// Built once at startup and shared by clone; the driver's client is
/// internally pooled, so there is no teardown step.
#[derive(Clone, Debug)]
pub struct MongoContext {
    db: Database
}

impl MongoContext {

    /// Validates `uri`, connects and pings `db_name` before handing out
    /// the context.
    pub async fn init(uri: &str, db_name: &str) -> Result<MongoContext, Box<dyn Error>> {
        Self::validate_mongo_uri(uri)?;
        log::info!("Connecting to MongoDB database {}", db_name);

        let mut client_options = ClientOptions::parse(uri).await?;
        client_options.app_name = Some("LostPetsApp".to_string());

        let db = Client::with_options(client_options)
            .map_err(|e| format!("Failed to create MongoDB client: {}", e))?
            .database(db_name);

        db.run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| format!("Failed to connect to MongoDB: {}", e))?;

        log::info!("Connected to MongoDB database {}", db_name);
        Ok(MongoContext { db })
    }

    pub fn collection<T>(&self, name: &str) -> Collection<T>
    where
        T: Send + Sync + Unpin + for<'de> Deserialize<'de> + Serialize,
    {
        self.db.collection::<T>(name)
    }

    fn validate_mongo_uri(uri: &str) -> Result<(), Box<dyn Error>> {
        let trimmed_uri = uri.trim();
        if trimmed_uri.is_empty() {
            return Err("Invalid MongoDB URI: cannot be empty or whitespace".into());
        }

        let host_part = if let Some(rest) = trimmed_uri.strip_prefix("mongodb://") {
            rest
        } else if let Some(rest) = trimmed_uri.strip_prefix("mongodb+srv://") {
            rest
        } else {
            return Err(format!("Invalid MongoDB URI: must start with 'mongodb://' or 'mongodb+srv://'. Got: {}", uri).into());
        };

        if host_part.trim().is_empty() {
            return Err("Invalid MongoDB URI: missing host after protocol".into());
        }

        if uri.contains(char::is_whitespace) {
            return Err("Invalid MongoDB URI: cannot contain whitespace".into());
        }

        let re = Regex::new(r"^mongodb(\+srv)?://([^/\s]+)(/.*)?$")?;
        if !re.is_match(trimmed_uri) {
            return Err(format!("Invalid MongoDB URI format. Expected format: mongodb://host[:port][/database] or mongodb+srv://host[/database]. Got: {}", uri).into());
        }

        Ok(())
    }

}
