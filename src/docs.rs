use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{LoginRequest, LoginResponse, SignupRequest, StatusResponse};
use crate::modules::products::model::{Product, UpdateProductDto};
use crate::modules::users::model::{
    ChangePasswordDto, CreateUserDto, PublicUser, Role, UpdateProfileDto,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::signup_user,
        crate::modules::auth::controller::verify_email,
        crate::modules::auth::controller::login_user,
        crate::modules::users::controller::admin_create_user,
        crate::modules::users::controller::admin_delete_user,
        crate::modules::users::controller::update_profile,
        crate::modules::users::controller::change_password,
        crate::modules::products::controller::get_products,
        crate::modules::products::controller::create_product,
        crate::modules::products::controller::update_product,
        crate::modules::products::controller::delete_product,
    ),
    components(
        schemas(
            SignupRequest,
            LoginRequest,
            LoginResponse,
            StatusResponse,
            ErrorResponse,
            CreateUserDto,
            UpdateProfileDto,
            ChangePasswordDto,
            PublicUser,
            Role,
            Product,
            UpdateProductDto,
        )
    ),
    modifiers(&SessionCookieSecurity),
    tags(
        (name = "Authentication", description = "Signup, email verification and login"),
        (name = "Products", description = "Catalog browsing and management"),
        (name = "Profile", description = "Self-service profile and password management"),
        (name = "Admin", description = "Administrator-only user management"),
    ),
    info(
        title = "FitHub API",
        description = "HTTP backend for the FitHub fitness goods storefront",
    )
)]
pub struct ApiDoc;

/// Documents the session cookie so "Try it out" requests carry it.
struct SessionCookieSecurity;

impl Modify for SessionCookieSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(
                    crate::middleware::auth::SESSION_COOKIE,
                ))),
            );
        }
    }
}
