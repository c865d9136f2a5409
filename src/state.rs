use crate::config::cors::CorsConfig;
use crate::config::database::init_database;
use crate::config::email::EmailConfig;
use crate::config::jwt::JwtConfig;
use crate::modules::products::model::Product;
use crate::modules::users::model::User;
use crate::store::Collection;

#[derive(Clone)]
pub struct AppState {
    pub users: Collection<User>,
    pub products: Collection<Product>,
    pub jwt_config: JwtConfig,
    pub email_config: EmailConfig,
    pub cors_config: CorsConfig,
}

pub async fn init_app_state() -> AppState {
    let database = init_database().await;

    AppState {
        users: Collection::mongo(database.collection("users")),
        products: Collection::mongo(database.collection("products")),
        jwt_config: JwtConfig::from_env(),
        email_config: EmailConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl AppState {
    /// State backed by the in-memory store, with email sending disabled and
    /// a fixed signing secret so tests can mint their own session tokens.
    pub fn in_memory() -> Self {
        Self {
            users: Collection::memory(),
            products: Collection::memory(),
            jwt_config: JwtConfig {
                secret: "test-secret-key".to_string(),
                session_ttl: 86400,
            },
            email_config: EmailConfig {
                enabled: false,
                smtp_host: "localhost".to_string(),
                smtp_port: 1025,
                smtp_username: String::new(),
                smtp_password: String::new(),
                from_email: "no-reply@fithub.com".to_string(),
                from_name: "FitHub".to_string(),
                base_url: "http://localhost:8081".to_string(),
            },
            cors_config: CorsConfig {
                allowed_origins: vec![],
            },
        }
    }
}
