use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use uuid::Uuid;

use workboard_db::models::JobRow;
use workboard_types::api::{CreateJobRequest, JobCreatedResponse, JobListResponse};
use workboard_types::models::Job;

use crate::error::{ApiError, ApiResult};
use crate::state::{AppState, with_db};
use crate::validation::{is_valid_apply_link, is_valid_salary};
use crate::{parse_id, parse_timestamp};

pub async fn create_job(
    State(state): State<AppState>,
    Json(req): Json<CreateJobRequest>,
) -> ApiResult<impl IntoResponse> {
    let company_name = req.company_name.filter(|v| !v.is_empty());
    let job_title = req.job_title.filter(|v| !v.is_empty());
    let description = req.description.filter(|v| !v.is_empty());
    let salary = req.salary.filter(|v| !v.is_empty());
    let apply_link = req.apply_link.filter(|v| !v.is_empty());

    let (Some(company_name), Some(job_title), Some(description), Some(salary), Some(apply_link)) =
        (company_name, job_title, description, salary, apply_link)
    else {
        return Err(ApiError::MissingField("All fields are required".into()));
    };

    if !is_valid_salary(&salary) {
        return Err(ApiError::InvalidFormat(
            "Salary must be in the format '$70,000 - 100,000 per year'".into(),
        ));
    }

    if !is_valid_apply_link(&apply_link) {
        return Err(ApiError::InvalidFormat(
            "Invalid URL format for applyLink".into(),
        ));
    }

    let row = {
        let id = Uuid::new_v4().to_string();
        with_db(&state, move |db| {
            db.insert_job(&id, &company_name, &job_title, &description, &salary, &apply_link)
        })
        .await?
    };

    Ok((
        StatusCode::CREATED,
        Json(JobCreatedResponse {
            message: "Job created successfully".into(),
            job: job_from_row(row),
        }),
    ))
}

pub async fn get_all_jobs(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let jobs = with_db(&state, |db| db.list_jobs()).await?;

    if jobs.is_empty() {
        return Err(ApiError::NotFound("No jobs available".into()));
    }

    let jobs: Vec<Job> = jobs.into_iter().map(job_from_row).collect();

    Ok(Json(JobListResponse { jobs }))
}

fn job_from_row(row: JobRow) -> Job {
    Job {
        id: parse_id(&row.id),
        company_name: row.company_name,
        job_title: row.job_title,
        description: row.description,
        salary: row.salary,
        apply_link: row.apply_link,
        posted_at: parse_timestamp(&row.posted_at),
    }
}
