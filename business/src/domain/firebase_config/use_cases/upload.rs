use async_trait::async_trait;

use crate::domain::firebase_config::errors::FirebaseConfigError;
use crate::domain::firebase_config::model::ServiceAccountConfig;
use crate::domain::shared::value_objects::Actor;

pub struct UploadFirebaseConfigParams {
    pub actor: Actor,
    pub contents: Vec<u8>,
}

#[async_trait]
pub trait UploadFirebaseConfigUseCase: Send + Sync {
    async fn execute(
        &self,
        params: UploadFirebaseConfigParams,
    ) -> Result<ServiceAccountConfig, FirebaseConfigError>;
}
