//! HTTP routing and handlers for the medtrack REST API.
//!
//! Each handler is a thin translation layer: pull the calling principal from
//! the `x-principal` header where the operation needs one, hand the typed
//! arguments to [`MedicineService`], and map the outcome to a status code
//! with the error's display text as the body. All domain rules live in
//! `medtrack-core`.

use std::sync::Arc;

use axum::{
    extract::{Path as AxumPath, Query, State},
    http::{HeaderMap, StatusCode},
    response::Json,
    routing::{delete, get, post, put},
    Router,
};
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use utoipa::{IntoParams, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use medtrack_core::{MedicineError, MedicineRecord, MedicineService, NewMedicine, Principal};
use medtrack_types::{
    AddCommentReq, AddTagsReq, AssignReq, ChangeStatusReq, CreateMedicineReq, HealthRes, Medicine,
    MedicineListRes, ReminderRes, SetPriorityReq, UpdateMedicineReq,
};

/// Header carrying the opaque caller identity, supplied by the host
/// environment in front of this service.
pub const PRINCIPAL_HEADER: &str = "x-principal";

/// Application state shared across REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<MedicineService>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        initial_page,
        load_more,
        create_medicine,
        search_medicines,
        overdue_medicines,
        medicines_by_tag,
        medicines_by_status,
        medicines_by_creator,
        get_medicine,
        update_medicine,
        delete_medicine,
        add_tags,
        add_comment,
        complete_medicine,
        assign_medicine,
        change_status,
        set_priority,
        due_reminder,
    ),
    components(schemas(
        HealthRes,
        Medicine,
        MedicineListRes,
        CreateMedicineReq,
        UpdateMedicineReq,
        AddTagsReq,
        AddCommentReq,
        AssignReq,
        ChangeStatusReq,
        SetPriorityReq,
        ReminderRes,
    ))
)]
pub struct ApiDoc;

/// Builds the REST router with all medicine routes, Swagger UI and CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/medicines", get(initial_page))
        .route("/medicines", post(create_medicine))
        .route("/medicines/page", get(load_more))
        .route("/medicines/search", get(search_medicines))
        .route("/medicines/overdue", get(overdue_medicines))
        .route("/medicines/tag/:tag", get(medicines_by_tag))
        .route("/medicines/status/:status", get(medicines_by_status))
        .route("/medicines/creator/:creator", get(medicines_by_creator))
        .route("/medicines/:id", get(get_medicine))
        .route("/medicines/:id", put(update_medicine))
        .route("/medicines/:id", delete(delete_medicine))
        .route("/medicines/:id/tags", post(add_tags))
        .route("/medicines/:id/comments", post(add_comment))
        .route("/medicines/:id/complete", post(complete_medicine))
        .route("/medicines/:id/assignee", put(assign_medicine))
        .route("/medicines/:id/status", put(change_status))
        .route("/medicines/:id/priority", put(set_priority))
        .route("/medicines/:id/reminder", get(due_reminder))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Extracts the calling principal from the request headers.
///
/// # Errors
/// Returns `401 Unauthorized` if the header is missing or empty.
fn principal_from_headers(headers: &HeaderMap) -> Result<Principal, (StatusCode, String)> {
    match headers.get(PRINCIPAL_HEADER).and_then(|v| v.to_str().ok()) {
        Some(value) if !value.is_empty() => Ok(Principal::from(value)),
        _ => Err((
            StatusCode::UNAUTHORIZED,
            format!("missing {PRINCIPAL_HEADER} header"),
        )),
    }
}

/// Maps a core error to an HTTP status with the error text as the body.
fn error_response(op: &'static str, err: MedicineError) -> (StatusCode, String) {
    let status = match &err {
        MedicineError::InvalidInput(_)
        | MedicineError::ExpiryInPast
        | MedicineError::PageOutOfRange { .. } => StatusCode::BAD_REQUEST,
        MedicineError::NoRecords | MedicineError::NotFound(_) => StatusCode::NOT_FOUND,
        MedicineError::NotCreator(_) => StatusCode::FORBIDDEN,
        MedicineError::NoAssignee(_) | MedicineError::NotOverdue(_) => StatusCode::CONFLICT,
        MedicineError::DuplicateId(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        tracing::error!("{op} error: {err}");
    } else {
        tracing::warn!("{op} rejected: {err}");
    }

    (status, err.to_string())
}

fn to_wire(record: MedicineRecord) -> Medicine {
    Medicine {
        id: record.id.to_string(),
        creator: record.creator.to_string(),
        title: record.title,
        description: record.description,
        created_date: record.created_date.to_rfc3339(),
        updated_at: record.updated_at.map(|t| t.to_rfc3339()),
        expiry_date: record.expiry_date.to_rfc3339(),
        assigned_to: record.assigned_to,
        tags: record.tags,
        status: record.status,
        priority: record.priority,
        comments: record.comments,
    }
}

fn to_wire_list(records: Vec<MedicineRecord>) -> Json<MedicineListRes> {
    Json(MedicineListRes {
        medicines: records.into_iter().map(to_wire).collect(),
    })
}

/// Pagination arguments for the load-more query.
#[derive(Debug, Deserialize, IntoParams)]
pub struct PageParams {
    pub offset: i64,
    pub limit: i64,
}

/// Free-text search arguments.
#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchParams {
    pub q: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for monitoring and load balancer probes.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "medtrack REST API is alive".into(),
    })
}

#[utoipa::path(
    get,
    path = "/medicines",
    responses(
        (status = 200, description = "First page of medicines", body = MedicineListRes),
        (status = 404, description = "No medicines stored")
    )
)]
/// Returns the initial page of medicines in store order.
///
/// An empty store is reported as `404` with a descriptive body, matching the
/// "no records" behaviour of the underlying operation.
#[axum::debug_handler]
async fn initial_page(
    State(state): State<AppState>,
) -> Result<Json<MedicineListRes>, (StatusCode, String)> {
    state
        .service
        .initial_page()
        .map(to_wire_list)
        .map_err(|e| error_response("initial page", e))
}

#[utoipa::path(
    get,
    path = "/medicines/page",
    params(PageParams),
    responses(
        (status = 200, description = "Requested slice of medicines", body = MedicineListRes),
        (status = 400, description = "Negative or out-of-range pagination arguments"),
        (status = 404, description = "No medicines stored")
    )
)]
/// Returns the slice `[offset, offset + limit)` of all medicines.
#[axum::debug_handler]
async fn load_more(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<MedicineListRes>, (StatusCode, String)> {
    state
        .service
        .load_more(params.offset, params.limit)
        .map(to_wire_list)
        .map_err(|e| error_response("load more", e))
}

#[utoipa::path(
    post,
    path = "/medicines",
    request_body = CreateMedicineReq,
    responses(
        (status = 201, description = "Medicine created", body = Medicine),
        (status = 400, description = "Missing field or past expiry date"),
        (status = 401, description = "Missing principal header")
    )
)]
/// Creates a new medicine record.
///
/// The caller becomes the record's creator and is afterwards the only
/// identity allowed to mutate or delete it (comments and completion
/// excepted). The system assigns the id, creation timestamp and the
/// `"In Progress"` status.
#[axum::debug_handler]
async fn create_medicine(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreateMedicineReq>,
) -> Result<(StatusCode, Json<Medicine>), (StatusCode, String)> {
    let caller = principal_from_headers(&headers)?;
    let payload = NewMedicine {
        title: req.title,
        description: req.description,
        assigned_to: req.assigned_to,
        expiry_date: req.expiry_date,
    };

    state
        .service
        .create(&caller, payload)
        .map(|record| (StatusCode::CREATED, Json(to_wire(record))))
        .map_err(|e| error_response("create medicine", e))
}

#[utoipa::path(
    get,
    path = "/medicines/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Medicines matching the query", body = MedicineListRes)
    )
)]
/// Case-insensitive substring search over title and description.
/// An empty result is a success.
#[axum::debug_handler]
async fn search_medicines(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<MedicineListRes> {
    to_wire_list(state.service.search(&params.q))
}

#[utoipa::path(
    get,
    path = "/medicines/overdue",
    responses(
        (status = 200, description = "Medicines past expiry and not completed", body = MedicineListRes)
    )
)]
/// All medicines whose expiry is in the past and whose status is not
/// `"Completed"`.
#[axum::debug_handler]
async fn overdue_medicines(State(state): State<AppState>) -> Json<MedicineListRes> {
    to_wire_list(state.service.get_overdue())
}

#[utoipa::path(
    get,
    path = "/medicines/tag/{tag}",
    responses(
        (status = 200, description = "Medicines carrying the tag", body = MedicineListRes)
    )
)]
/// Exact-match tag filter.
#[axum::debug_handler]
async fn medicines_by_tag(
    State(state): State<AppState>,
    AxumPath(tag): AxumPath<String>,
) -> Json<MedicineListRes> {
    to_wire_list(state.service.get_by_tag(&tag))
}

#[utoipa::path(
    get,
    path = "/medicines/status/{status}",
    responses(
        (status = 200, description = "Medicines with the exact status", body = MedicineListRes)
    )
)]
/// Exact-match status filter.
#[axum::debug_handler]
async fn medicines_by_status(
    State(state): State<AppState>,
    AxumPath(status): AxumPath<String>,
) -> Json<MedicineListRes> {
    to_wire_list(state.service.get_by_status(&status))
}

#[utoipa::path(
    get,
    path = "/medicines/creator/{creator}",
    responses(
        (status = 200, description = "Medicines created by this principal", body = MedicineListRes)
    )
)]
/// All medicines created by the given principal.
#[axum::debug_handler]
async fn medicines_by_creator(
    State(state): State<AppState>,
    AxumPath(creator): AxumPath<String>,
) -> Json<MedicineListRes> {
    to_wire_list(state.service.get_by_creator(&Principal::from(creator)))
}

#[utoipa::path(
    get,
    path = "/medicines/{id}",
    responses(
        (status = 200, description = "The requested medicine", body = Medicine),
        (status = 400, description = "Empty or malformed id"),
        (status = 401, description = "Missing principal header"),
        (status = 403, description = "Caller is not the creator"),
        (status = 404, description = "Unknown id")
    )
)]
/// Fetches a single medicine by id. Restricted to the record's creator.
#[axum::debug_handler]
async fn get_medicine(
    State(state): State<AppState>,
    headers: HeaderMap,
    AxumPath(id): AxumPath<String>,
) -> Result<Json<Medicine>, (StatusCode, String)> {
    let caller = principal_from_headers(&headers)?;
    state
        .service
        .get_by_id(&caller, &id)
        .map(|record| Json(to_wire(record)))
        .map_err(|e| error_response("get medicine", e))
}

#[utoipa::path(
    put,
    path = "/medicines/{id}",
    request_body = UpdateMedicineReq,
    responses(
        (status = 200, description = "Medicine updated", body = Medicine),
        (status = 401, description = "Missing principal header"),
        (status = 403, description = "Caller is not the creator"),
        (status = 404, description = "Unknown id")
    )
)]
/// Overwrites title, description, assignee and expiry date, stamping
/// `updated_at`. The expiry date is not re-validated against the current
/// time; that check applies at creation only.
#[axum::debug_handler]
async fn update_medicine(
    State(state): State<AppState>,
    headers: HeaderMap,
    AxumPath(id): AxumPath<String>,
    Json(req): Json<UpdateMedicineReq>,
) -> Result<Json<Medicine>, (StatusCode, String)> {
    let caller = principal_from_headers(&headers)?;
    let payload = NewMedicine {
        title: req.title,
        description: req.description,
        assigned_to: req.assigned_to,
        expiry_date: req.expiry_date,
    };

    state
        .service
        .update(&caller, &id, payload)
        .map(|record| Json(to_wire(record)))
        .map_err(|e| error_response("update medicine", e))
}

#[utoipa::path(
    delete,
    path = "/medicines/{id}",
    responses(
        (status = 200, description = "The deleted medicine, as confirmation", body = Medicine),
        (status = 401, description = "Missing principal header"),
        (status = 403, description = "Caller is not the creator"),
        (status = 404, description = "Unknown id")
    )
)]
/// Removes a medicine permanently and returns it as confirmation.
#[axum::debug_handler]
async fn delete_medicine(
    State(state): State<AppState>,
    headers: HeaderMap,
    AxumPath(id): AxumPath<String>,
) -> Result<Json<Medicine>, (StatusCode, String)> {
    let caller = principal_from_headers(&headers)?;
    state
        .service
        .delete(&caller, &id)
        .map(|record| Json(to_wire(record)))
        .map_err(|e| error_response("delete medicine", e))
}

#[utoipa::path(
    post,
    path = "/medicines/{id}/tags",
    request_body = AddTagsReq,
    responses(
        (status = 200, description = "Medicine with tags appended", body = Medicine),
        (status = 400, description = "Empty tag list"),
        (status = 401, description = "Missing principal header"),
        (status = 403, description = "Caller is not the creator"),
        (status = 404, description = "Unknown id")
    )
)]
/// Appends tags to a medicine and stamps `updated_at`.
#[axum::debug_handler]
async fn add_tags(
    State(state): State<AppState>,
    headers: HeaderMap,
    AxumPath(id): AxumPath<String>,
    Json(req): Json<AddTagsReq>,
) -> Result<Json<Medicine>, (StatusCode, String)> {
    let caller = principal_from_headers(&headers)?;
    state
        .service
        .add_tags(&caller, &id, req.tags)
        .map(|record| Json(to_wire(record)))
        .map_err(|e| error_response("add tags", e))
}

#[utoipa::path(
    post,
    path = "/medicines/{id}/comments",
    request_body = AddCommentReq,
    responses(
        (status = 200, description = "Medicine with comment appended", body = Medicine),
        (status = 400, description = "Missing comment"),
        (status = 404, description = "Unknown id")
    )
)]
/// Appends a comment. Commenting is open to any caller; no principal header
/// is required.
#[axum::debug_handler]
async fn add_comment(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
    Json(req): Json<AddCommentReq>,
) -> Result<Json<Medicine>, (StatusCode, String)> {
    state
        .service
        .add_comment(&id, req.comment)
        .map(|record| Json(to_wire(record)))
        .map_err(|e| error_response("add comment", e))
}

#[utoipa::path(
    post,
    path = "/medicines/{id}/complete",
    responses(
        (status = 200, description = "Medicine marked completed", body = Medicine),
        (status = 404, description = "Unknown id"),
        (status = 409, description = "No assignee on the medicine")
    )
)]
/// Marks a medicine `"Completed"`. Requires an assignee but no particular
/// caller identity.
#[axum::debug_handler]
async fn complete_medicine(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<Json<Medicine>, (StatusCode, String)> {
    state
        .service
        .mark_completed(&id)
        .map(|record| Json(to_wire(record)))
        .map_err(|e| error_response("complete medicine", e))
}

#[utoipa::path(
    put,
    path = "/medicines/{id}/assignee",
    request_body = AssignReq,
    responses(
        (status = 200, description = "Medicine reassigned", body = Medicine),
        (status = 401, description = "Missing principal header"),
        (status = 403, description = "Caller is not the creator"),
        (status = 404, description = "Unknown id")
    )
)]
/// Overwrites the assignee. Does not stamp `updated_at`.
#[axum::debug_handler]
async fn assign_medicine(
    State(state): State<AppState>,
    headers: HeaderMap,
    AxumPath(id): AxumPath<String>,
    Json(req): Json<AssignReq>,
) -> Result<Json<Medicine>, (StatusCode, String)> {
    let caller = principal_from_headers(&headers)?;
    state
        .service
        .assign(&caller, &id, req.assigned_to)
        .map(|record| Json(to_wire(record)))
        .map_err(|e| error_response("assign medicine", e))
}

#[utoipa::path(
    put,
    path = "/medicines/{id}/status",
    request_body = ChangeStatusReq,
    responses(
        (status = 200, description = "Medicine status changed", body = Medicine),
        (status = 401, description = "Missing principal header"),
        (status = 403, description = "Caller is not the creator"),
        (status = 404, description = "Unknown id")
    )
)]
/// Overwrites the status with an arbitrary label. The status field is not a
/// closed set.
#[axum::debug_handler]
async fn change_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    AxumPath(id): AxumPath<String>,
    Json(req): Json<ChangeStatusReq>,
) -> Result<Json<Medicine>, (StatusCode, String)> {
    let caller = principal_from_headers(&headers)?;
    state
        .service
        .change_status(&caller, &id, req.status)
        .map(|record| Json(to_wire(record)))
        .map_err(|e| error_response("change status", e))
}

#[utoipa::path(
    put,
    path = "/medicines/{id}/priority",
    request_body = SetPriorityReq,
    responses(
        (status = 200, description = "Medicine priority set", body = Medicine),
        (status = 401, description = "Missing principal header"),
        (status = 403, description = "Caller is not the creator"),
        (status = 404, description = "Unknown id")
    )
)]
/// Overwrites the priority label.
#[axum::debug_handler]
async fn set_priority(
    State(state): State<AppState>,
    headers: HeaderMap,
    AxumPath(id): AxumPath<String>,
    Json(req): Json<SetPriorityReq>,
) -> Result<Json<Medicine>, (StatusCode, String)> {
    let caller = principal_from_headers(&headers)?;
    state
        .service
        .set_priority(&caller, &id, req.priority)
        .map(|record| Json(to_wire(record)))
        .map_err(|e| error_response("set priority", e))
}

#[utoipa::path(
    get,
    path = "/medicines/{id}/reminder",
    responses(
        (status = 200, description = "Reminder message for an overdue medicine", body = ReminderRes),
        (status = 404, description = "Unknown id"),
        (status = 409, description = "Medicine is not overdue or already completed")
    )
)]
/// Due-date reminder for an overdue, not-yet-completed medicine.
#[axum::debug_handler]
async fn due_reminder(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<Json<ReminderRes>, (StatusCode, String)> {
    state
        .service
        .due_reminder(&id)
        .map(|message| Json(ReminderRes { message }))
        .map_err(|e| error_response("due reminder", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use chrono::{Duration, TimeZone, Utc};
    use http_body_util::BodyExt;
    use medtrack_core::{CoreConfig, ManualClock};
    use tower::ServiceExt;

    fn test_app() -> (Router, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::starting_at(
            Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap(),
        ));
        let service = Arc::new(MedicineService::new(
            Arc::new(CoreConfig::default()),
            clock.clone(),
        ));
        (router(AppState { service }), clock)
    }

    fn create_req(principal: &str, title: &str) -> Request<Body> {
        let body = serde_json::json!({
            "title": title,
            "description": format!("{title} twice daily"),
            "assigned_to": "nurse-1",
            "expiry_date": "2026-09-10T00:00:00Z",
        });
        Request::builder()
            .method("POST")
            .uri("/medicines")
            .header("content-type", "application/json")
            .header(PRINCIPAL_HEADER, principal)
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_reports_alive() {
        let (app, _) = test_app();
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["ok"], true);
    }

    #[tokio::test]
    async fn create_then_fetch_round_trips() {
        let (app, _) = test_app();

        let response = app.clone().oneshot(create_req("alice", "Aspirin")).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = json_body(response).await;
        assert_eq!(created["creator"], "alice");
        assert_eq!(created["status"], "In Progress");
        assert!(created["updated_at"].is_null());

        let id = created["id"].as_str().unwrap().to_owned();
        let response = app
            .oneshot(
                Request::get(format!("/medicines/{id}"))
                    .header(PRINCIPAL_HEADER, "alice")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let fetched = json_body(response).await;
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn create_without_principal_is_unauthorized() {
        let (app, _) = test_app();
        let body = serde_json::json!({
            "title": "Aspirin",
            "description": "desc",
            "assigned_to": "nurse-1",
            "expiry_date": "2026-09-10T00:00:00Z",
        });
        let response = app
            .oneshot(
                Request::post("/medicines")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn create_with_empty_title_is_bad_request() {
        let (app, _) = test_app();
        let body = serde_json::json!({
            "title": "",
            "description": "desc",
            "assigned_to": "nurse-1",
            "expiry_date": "2026-09-10T00:00:00Z",
        });
        let response = app
            .oneshot(
                Request::post("/medicines")
                    .header("content-type", "application/json")
                    .header(PRINCIPAL_HEADER, "alice")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.contains("title cannot be empty"));
    }

    #[tokio::test]
    async fn non_creator_update_is_forbidden() {
        let (app, _) = test_app();
        let response = app.clone().oneshot(create_req("alice", "Aspirin")).await.unwrap();
        let created = json_body(response).await;
        let id = created["id"].as_str().unwrap().to_owned();

        let body = serde_json::json!({
            "title": "Hijacked",
            "description": "x",
            "assigned_to": "x",
            "expiry_date": "2026-09-10T00:00:00Z",
        });
        let response = app
            .oneshot(
                Request::put(format!("/medicines/{id}"))
                    .header("content-type", "application/json")
                    .header(PRINCIPAL_HEADER, "bob")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn completing_unassigned_medicine_is_conflict() {
        let (app, _) = test_app();
        let response = app.clone().oneshot(create_req("alice", "Aspirin")).await.unwrap();
        let created = json_body(response).await;
        let id = created["id"].as_str().unwrap().to_owned();

        // Clear the assignee; creation always sets one.
        let body = serde_json::json!({ "assigned_to": "" });
        let response = app
            .clone()
            .oneshot(
                Request::put(format!("/medicines/{id}/assignee"))
                    .header("content-type", "application/json")
                    .header(PRINCIPAL_HEADER, "alice")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(
                Request::post(format!("/medicines/{id}/complete"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn negative_pagination_is_bad_request() {
        let (app, _) = test_app();
        let response = app
            .clone()
            .oneshot(create_req("alice", "Aspirin"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .oneshot(
                Request::get("/medicines/page?offset=-1&limit=2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn initial_page_on_empty_store_is_not_found() {
        let (app, _) = test_app();
        let response = app
            .oneshot(Request::get("/medicines").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn overdue_view_tracks_the_clock() {
        let (app, clock) = test_app();
        app.clone().oneshot(create_req("alice", "Aspirin")).await.unwrap();

        let response = app
            .clone()
            .oneshot(Request::get("/medicines/overdue").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = json_body(response).await;
        assert_eq!(body["medicines"].as_array().unwrap().len(), 0);

        clock.advance(Duration::days(30));
        let response = app
            .oneshot(Request::get("/medicines/overdue").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = json_body(response).await;
        assert_eq!(body["medicines"].as_array().unwrap().len(), 1);
    }
}
