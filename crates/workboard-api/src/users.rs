use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use workboard_types::api::{
    CreateUserRequest, DeleteUserRequest, EditUserRequest, MessageResponse, UploadImageResponse,
    UserSummary,
};

use crate::error::{ApiError, ApiResult};
use crate::state::{AppState, with_db};
use crate::upload;
use crate::validation::{is_valid_email, is_valid_full_name, is_valid_password};

const MSG_INVALID_EMAIL: &str = "Please enter a valid email address.";
const MSG_INVALID_PASSWORD: &str = "Password must be at least 8 characters long and include an uppercase letter, a number, and a special character.";

pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> ApiResult<impl IntoResponse> {
    let full_name = req.full_name.filter(|v| !v.is_empty());
    let email = req.email.filter(|v| !v.is_empty());
    let password = req.password.filter(|v| !v.is_empty());

    let (Some(full_name), Some(email), Some(password)) = (full_name, email, password) else {
        return Err(ApiError::MissingField(
            "Inadequate details to create user".into(),
        ));
    };

    if !is_valid_full_name(&full_name) {
        return Err(ApiError::InvalidFormat(
            "Full name can only contain letters and spaces and must not be blank.".into(),
        ));
    }

    if !is_valid_email(&email) {
        return Err(ApiError::InvalidFormat(MSG_INVALID_EMAIL.into()));
    }

    if !is_valid_password(&password) {
        return Err(ApiError::InvalidFormat(MSG_INVALID_PASSWORD.into()));
    }

    let existing = {
        let email = email.clone();
        with_db(&state, move |db| db.get_user_by_email(&email)).await?
    };
    if existing.is_some() {
        return Err(ApiError::Duplicate("User already exists.".into()));
    }

    let password_hash = hash_password(&password)?;
    let id = Uuid::new_v4().to_string();
    with_db(&state, move |db| {
        db.create_user(&id, &full_name, &email, &password_hash)
    })
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User created successfully!".into(),
        }),
    ))
}

pub async fn edit_user(
    State(state): State<AppState>,
    Json(req): Json<EditUserRequest>,
) -> ApiResult<impl IntoResponse> {
    let email = req
        .email
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::MissingField("Email is required!".into()))?;

    let full_name = req.full_name.filter(|v| !v.is_empty());
    let password = req.password.filter(|v| !v.is_empty());

    if full_name.is_none() && password.is_none() {
        return Err(ApiError::MissingField("No field provided to update.".into()));
    }

    if !is_valid_email(&email) {
        return Err(ApiError::InvalidFormat(MSG_INVALID_EMAIL.into()));
    }

    let user = {
        let email = email.clone();
        with_db(&state, move |db| db.get_user_by_email(&email)).await?
    }
    .ok_or_else(|| ApiError::NotFound("User not found.".into()))?;

    let mut new_name = user.full_name;
    let mut new_hash = user.password.clone();

    if let Some(name) = full_name {
        if !is_valid_full_name(&name) {
            return Err(ApiError::InvalidFormat(
                "Full name must contain only letters and spaces and cannot be blank.".into(),
            ));
        }
        new_name = name;
    }

    if let Some(new_password) = password {
        // Changing the password requires proving knowledge of the old one.
        let old_password = req
            .old_password
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                ApiError::MissingField("Old password is required to change password.".into())
            })?;

        if !verify_password(&old_password, &user.password)? {
            return Err(ApiError::AuthMismatch("Old password is incorrect.".into()));
        }

        if !is_valid_password(&new_password) {
            return Err(ApiError::InvalidFormat(MSG_INVALID_PASSWORD.into()));
        }

        new_hash = hash_password(&new_password)?;
    }

    {
        let email = email.clone();
        with_db(&state, move |db| db.update_user(&email, &new_name, &new_hash)).await?;
    }

    Ok(Json(MessageResponse {
        message: format!("User details of {} updated successfully!", email),
    }))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Json(req): Json<DeleteUserRequest>,
) -> ApiResult<impl IntoResponse> {
    let email = req
        .email
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::MissingField("Email Id must be provided".into()))?;

    if !is_valid_email(&email) {
        return Err(ApiError::InvalidFormat(MSG_INVALID_EMAIL.into()));
    }

    let removed = {
        let email = email.clone();
        with_db(&state, move |db| db.delete_user(&email)).await?
    };
    if removed == 0 {
        return Err(ApiError::NotFound("User not found.".into()));
    }

    // The user's uploaded image, if any, stays on disk. See DESIGN.md.
    Ok(Json(MessageResponse {
        message: format!("User with email {} deleted successfully!", email),
    }))
}

pub async fn get_all_users(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let users = with_db(&state, |db| db.list_users()).await?;

    if users.is_empty() {
        return Err(ApiError::NotFound("No users found.".into()));
    }

    let users: Vec<UserSummary> = users
        .into_iter()
        .map(|u| UserSummary {
            full_name: u.full_name,
            email: u.email,
            password: u.password,
        })
        .collect();

    Ok(Json(users))
}

pub async fn upload_image(
    State(state): State<AppState>,
    multipart: Multipart,
) -> ApiResult<impl IntoResponse> {
    let form = upload::read_form(multipart).await?;

    let email = form
        .field("email")
        .ok_or_else(|| ApiError::MissingField("Email Id must be provided".into()))?;

    if !is_valid_email(&email) {
        return Err(ApiError::InvalidFormat(MSG_INVALID_EMAIL.into()));
    }

    {
        let email = email.clone();
        with_db(&state, move |db| db.get_user_by_email(&email))
            .await?
            .ok_or_else(|| ApiError::NotFound("User not found.".into()))?;
    }

    let image = form.image.ok_or(ApiError::NoFile)?;
    upload::check_image(&image)?;

    let file_path = state
        .user_images
        .save(&image.file_name, &image.data)
        .await
        .map_err(ApiError::Store)?;

    // No rollback: if this update fails the stored file stays orphaned.
    {
        let email = email.clone();
        let file_path = file_path.clone();
        with_db(&state, move |db| db.set_user_image(&email, &file_path)).await?;
    }

    Ok(Json(UploadImageResponse {
        message: "Image uploaded successfully!".into(),
        file_path,
    }))
}

fn hash_password(password: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| ApiError::Store(anyhow::anyhow!("password hashing failed: {}", e)))?
        .to_string();
    Ok(hash)
}

fn verify_password(password: &str, stored_hash: &str) -> Result<bool, ApiError> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| ApiError::Store(anyhow::anyhow!("stored password hash unreadable: {}", e)))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
