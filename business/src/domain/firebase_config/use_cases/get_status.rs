use async_trait::async_trait;

use crate::domain::firebase_config::errors::FirebaseConfigError;
use crate::domain::firebase_config::model::FirebaseConfigSummary;
use crate::domain::shared::value_objects::Actor;

pub struct GetFirebaseConfigStatusParams {
    pub actor: Actor,
}

#[async_trait]
pub trait GetFirebaseConfigStatusUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetFirebaseConfigStatusParams,
    ) -> Result<FirebaseConfigSummary, FirebaseConfigError>;
}
