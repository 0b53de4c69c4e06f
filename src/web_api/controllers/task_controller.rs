use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use crate::app_state::SharedState;
use crate::create_task_request::CreateTaskRequest;
use crate::list_tasks_query::ListTasksQuery;
use crate::task::Task;
use crate::update_task_request::UpdateTaskRequest;
use crate::web_api::error::ApiError;

pub struct TaskController {}

impl TaskController {
    /// GET /api/tasks
    pub async fn list(
        State(state): State<SharedState>,
        Query(query): Query<ListTasksQuery>,
    ) -> Result<Json<Vec<Task>>, ApiError> {
        let filter = query.validate()?;
        let tasks = state.store.list(&filter)?;
        Ok(Json(tasks))
    }

    /// POST /api/tasks
    pub async fn create(
        State(state): State<SharedState>,
        payload: Result<Json<CreateTaskRequest>, JsonRejection>,
    ) -> Result<(StatusCode, Json<Task>), ApiError> {
        let Json(payload) = payload?;
        let new_task = payload.validate()?;

        let task = Task::new(new_task.title, new_task.priority, new_task.category);
        state.store.insert(&task)?;

        tracing::info!(id = %task.id, "task created");
        Ok((StatusCode::CREATED, Json(task)))
    }

    /// PATCH /api/tasks/{id}
    pub async fn update(
        State(state): State<SharedState>,
        Path(id): Path<String>,
        payload: Result<Json<UpdateTaskRequest>, JsonRejection>,
    ) -> Result<Json<Task>, ApiError> {
        let id = parse_id(&id)?;
        let Json(payload) = payload?;
        let patch = payload.validate()?;

        match state.store.update(id, &patch)? {
            Some(task) => Ok(Json(task)),
            None => Err(ApiError::NotFound),
        }
    }

    /// DELETE /api/tasks/{id}
    pub async fn delete(
        State(state): State<SharedState>,
        Path(id): Path<String>,
    ) -> Result<StatusCode, ApiError> {
        let id = parse_id(&id)?;

        if state.store.delete(id)? {
            tracing::info!(%id, "task deleted");
            Ok(StatusCode::NO_CONTENT)
        } else {
            Err(ApiError::NotFound)
        }
    }
}

/// Path ids arrive as raw text. Blank and non-UUID ids are rejected
/// here, before the store is touched.
fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApiError::invalid_id());
    }
    Uuid::parse_str(trimmed).map_err(|_| ApiError::invalid_id())
}
