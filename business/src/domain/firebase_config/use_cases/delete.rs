use async_trait::async_trait;

use crate::domain::firebase_config::errors::FirebaseConfigError;
use crate::domain::shared::value_objects::Actor;

pub struct DeleteFirebaseConfigParams {
    pub actor: Actor,
}

#[async_trait]
pub trait DeleteFirebaseConfigUseCase: Send + Sync {
    async fn execute(&self, params: DeleteFirebaseConfigParams) -> Result<(), FirebaseConfigError>;
}
