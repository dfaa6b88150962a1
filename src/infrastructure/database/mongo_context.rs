use serde::{Deserialize, Serialize};
use mongodb::{options::ClientOptions, Client, ClientSession, Collection, Database};
use regex::Regex;

use crate::utils::errors::ApiError;

const APP_NAME: &str = "PetClinic";

#[derive(Clone, Debug)]
pub struct MongoContext {
    client: Client,
    db: Database
}

impl MongoContext {

    pub async fn init(uri: &str, db_name: &str) -> Result<MongoContext, ApiError> {
        Self::validate_mongo_uri(uri)?;

        log::info!("Connecting to MongoDB database {}", db_name);

        let mut client_options = ClientOptions::parse(uri).await?;
        client_options.app_name = Some(APP_NAME.to_string());

        let client = Client::with_options(client_options)?;

        client.list_database_names()
            .await
            .map_err(|e| {
                log::error!("Failed to connect to MongoDB: {}", e);
                e
            })?;

        let db = client.database(db_name);
        log::info!("Connected to MongoDB database {}", db_name);

        Ok(MongoContext { client, db })
    }

    pub async fn start_session(&self) -> Result<ClientSession, ApiError> {
        Ok(self.client.start_session().await?)
    }

    pub fn collection<T>(&self, name: &str) -> Collection<T>
    where
        T: Send + Sync + Unpin + for<'de> Deserialize<'de> + Serialize,
    {
        self.db.collection::<T>(name)
    }

    fn validate_mongo_uri(uri: &str) -> Result<(), ApiError> {
        if uri.trim().is_empty() {
            return Err(ApiError::InvalidData("MongoDB URI cannot be empty".to_string()));
        }

        if uri.contains(char::is_whitespace) {
            return Err(ApiError::InvalidData("MongoDB URI cannot contain whitespace".to_string()));
        }

        let re = Regex::new(r"^mongodb(\+srv)?://([^/\s]+)(/.*)?$")
            .map_err(|e| ApiError::InternalServerError(e.to_string()))?;

        if !re.is_match(uri) {
            return Err(ApiError::InvalidData(format!(
                "Expected mongodb://host[:port][/database] or mongodb+srv://host[/database], got: {}",
                uri
            )));
        }

        Ok(())
    }

}
