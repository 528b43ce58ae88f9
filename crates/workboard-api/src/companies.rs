use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use workboard_db::models::CompanyRow;
use workboard_types::api::{CompanyImage, CompanyImagesResponse, CompanyUploadResponse};
use workboard_types::models::Company;

use crate::error::{ApiError, ApiResult};
use crate::state::{AppState, with_db};
use crate::upload;
use crate::{parse_id, parse_timestamp};

/// Every successful upload inserts a fresh company record. Uploading
/// twice under the same name yields two records.
pub async fn upload_company_image(
    State(state): State<AppState>,
    multipart: Multipart,
) -> ApiResult<impl IntoResponse> {
    let form = upload::read_form(multipart).await?;

    let company_name = form
        .field("companyName")
        .ok_or_else(|| ApiError::MissingField("Company name must be provided.".into()))?;

    let image = form.image.ok_or(ApiError::NoFile)?;
    upload::check_image(&image)?;

    let image_path = state
        .company_images
        .save(&image.file_name, &image.data)
        .await
        .map_err(ApiError::Store)?;

    let row = {
        let id = Uuid::new_v4().to_string();
        with_db(&state, move |db| {
            db.insert_company(&id, &company_name, &image_path)
        })
        .await?
    };

    Ok((
        StatusCode::CREATED,
        Json(CompanyUploadResponse {
            message: "Company image uploaded successfully!".into(),
            data: company_from_row(row),
        }),
    ))
}

pub async fn get_company_images(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let companies = with_db(&state, |db| db.list_companies()).await?;

    if companies.is_empty() {
        return Err(ApiError::NotFound("No company images found.".into()));
    }

    let images: Vec<CompanyImage> = companies
        .into_iter()
        .map(|c| CompanyImage {
            company_name: c.company_name,
            image_path: c.image_path,
        })
        .collect();

    Ok(Json(CompanyImagesResponse {
        message: "Company images retrieved successfully!".into(),
        images,
    }))
}

fn company_from_row(row: CompanyRow) -> Company {
    Company {
        id: parse_id(&row.id),
        company_name: row.company_name,
        image_path: row.image_path,
        created_at: parse_timestamp(&row.created_at),
        updated_at: parse_timestamp(&row.updated_at),
    }
}
