use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::ReturnDocument;
use mongodb::{ClientSession, Collection};
use serde::{Deserialize, Serialize};

use crate::domain::owner::model::Owner;
use crate::domain::owner::repository::OwnerRepository;
use crate::infrastructure::database::mongo_context::MongoContext;
use crate::utils::errors::ApiError;

const OWNERS_COLLECTION: &str = "owners";
const COUNTERS_COLLECTION: &str = "counters";

/// Per-collection id sequence, advanced with `$inc`.
#[derive(Serialize, Deserialize, Debug)]
struct Counter {
    #[serde(rename = "_id")]
    id: String,
    seq: i64,
}

pub struct MongoOwnerRepository {
    context: MongoContext,
    owners: Collection<Owner>,
    counters: Collection<Counter>,
}

impl MongoOwnerRepository {
    pub fn new(context: &MongoContext) -> Self {
        Self {
            context: context.clone(),
            owners: context.collection(OWNERS_COLLECTION),
            counters: context.collection(COUNTERS_COLLECTION),
        }
    }

    async fn next_id(&self, session: &mut ClientSession) -> Result<i64, ApiError> {
        let counter = self.counters
            .find_one_and_update(
                doc! { "_id": OWNERS_COLLECTION },
                doc! { "$inc": { "seq": 1_i64 } },
            )
            .upsert(true)
            .return_document(ReturnDocument::After)
            .session(&mut *session)
            .await?
            .ok_or_else(|| ApiError::InternalServerError("Owner id sequence is missing".to_string()))?;

        Ok(counter.seq)
    }
}

#[async_trait]
impl OwnerRepository for MongoOwnerRepository {
    type Session = ClientSession;

    async fn session(&self) -> Result<Self::Session, ApiError> {
        self.context.start_session().await
    }

    async fn save(&self, session: &mut Self::Session, mut owner: Owner) -> Result<Owner, ApiError> {
        match owner.id {
            // Causally consistent session, no transaction: a failed insert leaves a gap in the ids.
            None => {
                owner.id = Some(self.next_id(session).await?);
                self.owners.insert_one(&owner).session(&mut *session).await?;
            }
            Some(id) => {
                let result = self.owners
                    .replace_one(doc! { "_id": id }, &owner)
                    .session(&mut *session)
                    .await?;

                if result.matched_count == 0 {
                    return Err(ApiError::owner_not_found(id));
                }
            }
        }
        Ok(owner)
    }

    async fn find_by_id(&self, session: &mut Self::Session, id: i64) -> Result<Option<Owner>, ApiError> {
        match self.owners.find_one(doc! { "_id": id }).session(&mut *session).await {
            Ok(owner) => Ok(owner),
            Err(e) => Err(ApiError::MongoError(e))
        }
    }

    async fn find_by_last_name(&self, session: &mut Self::Session, last_name: &str) -> Result<Vec<Owner>, ApiError> {
        let filter = doc! { "lastName": { "$regex": format!("^{}", regex::escape(last_name)) } };

        let mut cursor = self.owners
            .find(filter)
            .sort(doc! { "_id": 1 })
            .session(&mut *session)
            .await?;

        let owners: Vec<Owner> = cursor.stream(&mut *session).try_collect().await?;
        Ok(owners)
    }
}
