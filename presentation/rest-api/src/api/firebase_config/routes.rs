use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::firebase_config::use_cases::delete::{
    DeleteFirebaseConfigParams, DeleteFirebaseConfigUseCase,
};
use business::domain::firebase_config::use_cases::get_status::{
    GetFirebaseConfigStatusParams, GetFirebaseConfigStatusUseCase,
};
use business::domain::firebase_config::use_cases::upload::{
    UploadFirebaseConfigParams, UploadFirebaseConfigUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::firebase_config::dto::{FirebaseConfigResponse, UploadFirebaseConfigRequest};
use crate::api::security::FirebaseBearer;
use crate::api::tags::ApiTags;

pub struct FirebaseConfigApi {
    upload_use_case: Arc<dyn UploadFirebaseConfigUseCase>,
    get_status_use_case: Arc<dyn GetFirebaseConfigStatusUseCase>,
    delete_use_case: Arc<dyn DeleteFirebaseConfigUseCase>,
    max_upload_bytes: usize,
}

impl FirebaseConfigApi {
    pub fn new(
        upload_use_case: Arc<dyn UploadFirebaseConfigUseCase>,
        get_status_use_case: Arc<dyn GetFirebaseConfigStatusUseCase>,
        delete_use_case: Arc<dyn DeleteFirebaseConfigUseCase>,
        max_upload_bytes: usize,
    ) -> Self {
        Self {
            upload_use_case,
            get_status_use_case,
            delete_use_case,
            max_upload_bytes,
        }
    }
}

/// Firebase push configuration API
///
/// Admin-only endpoints managing the service-account credential used
/// for push notifications.
#[OpenApi]
impl FirebaseConfigApi {
    /// Upload a service-account config
    ///
    /// Validates the uploaded JSON and, when it is a complete
    /// `service_account` credential, stores it verbatim. Invalid uploads
    /// leave the stored config untouched. Files over `MAX_UPLOAD_BYTES`
    /// are refused with 413 before being read.
    #[oai(
        path = "/pwa/firebase-config",
        method = "post",
        tag = "ApiTags::FirebaseConfig"
    )]
    async fn upload_firebase_config(
        &self,
        auth: FirebaseBearer,
        body: UploadFirebaseConfigRequest,
    ) -> UploadFirebaseConfigResponse {
        let Some(file) = body.file else {
            return UploadFirebaseConfigResponse::BadRequest(ErrorResponse::new(
                "ValidationError",
                "firebase_config.file_missing",
            ));
        };

        if file.size() > self.max_upload_bytes {
            tracing::warn!(
                size = file.size(),
                limit = self.max_upload_bytes,
                "refused oversized firebase config upload"
            );
            return UploadFirebaseConfigResponse::PayloadTooLarge(ErrorResponse::new(
                "ValidationError",
                "firebase_config.file_too_large",
            ));
        }

        let contents = match file.into_vec().await {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!(error = %e, "could not read uploaded firebase config");
                return UploadFirebaseConfigResponse::BadRequest(ErrorResponse::new(
                    "ValidationError",
                    "firebase_config.file_unreadable",
                ));
            }
        };

        match self
            .upload_use_case
            .execute(UploadFirebaseConfigParams {
                actor: auth.0,
                contents,
            })
            .await
        {
            Ok(config) => UploadFirebaseConfigResponse::Created(Json(config.summary().into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    403 => UploadFirebaseConfigResponse::Forbidden(json),
                    422 => UploadFirebaseConfigResponse::UnprocessableEntity(json),
                    _ => UploadFirebaseConfigResponse::InternalError(json),
                }
            }
        }
    }

    /// Show the stored config
    ///
    /// Returns identifying details of the stored credential, never the key.
    #[oai(
        path = "/pwa/firebase-config",
        method = "get",
        tag = "ApiTags::FirebaseConfig"
    )]
    async fn get_firebase_config(&self, auth: FirebaseBearer) -> GetFirebaseConfigResponse {
        match self
            .get_status_use_case
            .execute(GetFirebaseConfigStatusParams { actor: auth.0 })
            .await
        {
            Ok(summary) => GetFirebaseConfigResponse::Ok(Json(summary.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    403 => GetFirebaseConfigResponse::Forbidden(json),
                    404 => GetFirebaseConfigResponse::NotFound(json),
                    _ => GetFirebaseConfigResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove the stored config
    #[oai(
        path = "/pwa/firebase-config",
        method = "delete",
        tag = "ApiTags::FirebaseConfig"
    )]
    async fn delete_firebase_config(&self, auth: FirebaseBearer) -> DeleteFirebaseConfigResponse {
        match self
            .delete_use_case
            .execute(DeleteFirebaseConfigParams { actor: auth.0 })
            .await
        {
            Ok(()) => DeleteFirebaseConfigResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    403 => DeleteFirebaseConfigResponse::Forbidden(json),
                    404 => DeleteFirebaseConfigResponse::NotFound(json),
                    _ => DeleteFirebaseConfigResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum UploadFirebaseConfigResponse {
    #[oai(status = 201)]
    Created(Json<FirebaseConfigResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 413)]
    PayloadTooLarge(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetFirebaseConfigResponse {
    #[oai(status = 200)]
    Ok(Json<FirebaseConfigResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteFirebaseConfigResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
