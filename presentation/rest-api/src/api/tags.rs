use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    /// Push-notification credentials uploaded by forum administrators
    FirebaseConfig,
}
