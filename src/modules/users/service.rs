use mongodb::bson::{Bson, doc, oid::ObjectId};
use tracing::instrument;

use crate::store::{Collection, Filter, ListQuery};
use crate::utils::errors::AppError;
use crate::utils::password::{hash_password, verify_password};

use super::model::{ChangePasswordDto, CreateUserDto, PublicUser, UpdateProfileDto, User};

pub struct UserService;

impl UserService {
    pub async fn list_users(users: &Collection<User>) -> Result<Vec<PublicUser>, AppError> {
        let users = users
            .find(&ListQuery::default())
            .await
            .map_err(AppError::database)?;

        Ok(users.into_iter().map(PublicUser::from).collect())
    }

    #[instrument(skip(users, dto))]
    pub async fn create_user(
        users: &Collection<User>,
        dto: CreateUserDto,
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

        let user = User {
            id: None,
            email: dto.email,
            password: hash_password(&dto.password)?,
            verified: dto.verified.unwrap_or(false),
            verification_token: None,
            role: dto.role.unwrap_or_default(),
        };

        users.insert_one(&user).await.map_err(AppError::database)?;
        Ok(())
    }

    pub async fn delete_user(users: &Collection<User>, id: &str) -> Result<(), AppError> {
        let id = ObjectId::parse_str(id)
            .map_err(|_| AppError::bad_request(anyhow::anyhow!("Invalid user ID")))?;
        users.delete_by_id(id).await.map_err(AppError::database)?;
        Ok(())
    }

    /// Writes back exactly the profile fields present in the request.
    #[instrument(skip(users, dto))]
    pub async fn update_profile(
        users: &Collection<User>,
        dto: UpdateProfileDto,
    ) -> Result<(), AppError> {
        let id = ObjectId::parse_str(&dto.id)
            .map_err(|_| AppError::bad_request(anyhow::anyhow!("Invalid user ID")))?;

        let mut set = doc! {};
        if let Some(email) = &dto.email {
            set.insert("email", email.as_str());
        }
        if set.is_empty() {
            return Ok(());
        }

        let matched = users
            .update_by_id(id, set)
            .await
            .map_err(AppError::database)?;
        if matched == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("User not found")));
        }

        Ok(())
    }

    #[instrument(skip(users, dto))]
    pub async fn change_password(
        users: &Collection<User>,
        dto: ChangePasswordDto,
    ) -> Result<(), AppError> {
        let id = ObjectId::parse_str(&dto.user_id)
            .map_err(|_| AppError::bad_request(anyhow::anyhow!("Invalid user ID")))?;

        let user = users
            .find_by_id(id)
            .await
            .map_err(AppError::database)?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))?;

        let is_valid = verify_password(&dto.old_password, &user.password)?;
        if !is_valid {
            return Err(AppError::unauthorized(anyhow::anyhow!(
                "Invalid old password"
            )));
        }

        let hashed = hash_password(&dto.new_password)?;
        let matched = users
            .update_by_id(id, doc! { "password": hashed })
            .await
            .map_err(AppError::database)?;
        if matched == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("User not found")));
        }

        Ok(())
    }
}
