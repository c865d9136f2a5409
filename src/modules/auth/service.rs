use mongodb::bson::{Bson, doc};
use tracing::{instrument, warn};

use crate::config::email::EmailConfig;
use crate::config::jwt::JwtConfig;
use crate::modules::users::model::{Role, User};
use crate::store::{Collection, Filter};
use crate::utils::email::EmailService;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_session_token;
use crate::utils::password::{hash_password, verify_password};
use crate::utils::token::generate_verification_token;

use super::model::{LoginRequest, SignupRequest};

pub struct AuthService;

impl AuthService {
    /// Creates an unverified account and sends the verification mail. If the
    /// mail cannot be sent, the freshly inserted record is deleted again so
    /// no unreachable account is left behind.
    #[instrument(skip(users, email_config, dto))]
    pub async fn signup(
        users: &Collection<User>,
        email_config: &EmailConfig,
        dto: SignupRequest,
    ) -> Result<(), AppError> {
        let existing = users
            .find_one(Filter::Eq("email", Bson::String(dto.email.clone())))
            .await
            .map_err(AppError::database)?;
        if existing.is_some() {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Email already exists"
            )));
        }

        let hashed_password = hash_password(&dto.password)?;
        let verification_token = generate_verification_token()?;

        let user = User {
            id: None,
            email: dto.email.clone(),
            password: hashed_password,
            verified: false,
            verification_token: Some(verification_token.clone()),
            role: Role::User,
        };

        let id = users.insert_one(&user).await.map_err(AppError::database)?;

        let mailer = EmailService::new(email_config.clone());
        if let Err(send_err) = mailer
            .send_verification_email(&dto.email, &verification_token)
            .await
        {
            if let Err(delete_err) = users.delete_by_id(id).await {
                warn!(
                    user_id = %id,
                    error = %delete_err,
                    "Failed to roll back user after email failure"
                );
            }
            return Err(send_err);
        }

        Ok(())
    }

    /// Redeems a verification token: marks the account verified and clears
    /// the token so it cannot be replayed.
    #[instrument(skip(users, token))]
    pub async fn verify_email(users: &Collection<User>, token: &str) -> Result<(), AppError> {
        if token.is_empty() {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Verification token is required"
            )));
        }

        let user = users
            .find_one(Filter::Eq(
                "verification_token",
                Bson::String(token.to_string()),
            ))
            .await
            .map_err(AppError::database)?
            .ok_or_else(|| {
                AppError::bad_request(anyhow::anyhow!("Invalid or expired verification token"))
            })?;

        let id = user
            .id
            .ok_or_else(|| AppError::internal(anyhow::anyhow!("Stored user is missing an id")))?;

        let matched = users
            .update_by_id(id, doc! { "verified": true, "verification_token": Bson::Null })
            .await
            .map_err(AppError::database)?;
        if matched == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("User not found")));
        }

        Ok(())
    }

    /// Checks the credentials and the verified flag, then issues a signed
    /// session token embedding the user's id and role.
    #[instrument(skip(users, jwt_config, dto))]
    pub async fn login(
        users: &Collection<User>,
        jwt_config: &JwtConfig,
        dto: LoginRequest,
    ) -> Result<String, AppError> {
        let user = users
            .find_one(Filter::Eq("email", Bson::String(dto.email.clone())))
            .await
            .map_err(AppError::database)?
            .ok_or_else(|| {
                AppError::unauthorized(anyhow::anyhow!("Invalid email or password"))
            })?;

        let is_valid = verify_password(&dto.password, &user.password)?;
        if !is_valid {
            return Err(AppError::unauthorized(anyhow::anyhow!(
                "Invalid email or password"
            )));
        }

        if !user.verified {
            return Err(AppError::unauthorized(anyhow::anyhow!(
                "Email not verified"
            )));
        }

        let id = user
            .id
            .ok_or_else(|| AppError::internal(anyhow::anyhow!("Stored user is missing an id")))?;

        create_session_token(id, user.role, jwt_config)
    }
}
