/// Holds the raw service-account JSON used for push delivery.
/// Lives under the `askvortsov-pwa` namespace shared by the extension's settings.
pub const FIREBASE_CONFIG_KEY: &str = "askvortsov-pwa.firebaseConfig";
