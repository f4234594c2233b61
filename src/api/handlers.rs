//! HTTP request handlers for the cafe operations API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::costing::{log_usage, usage_report};
use crate::error::OpsError;
use crate::models::{AttendanceMark, Employee, Material};
use crate::payroll::{calculate_salary, request_advance, toggle_attendance};

use super::request::{
    AdvanceRequest, CreateEmployeeRequest, CreateMaterialRequest, LogUsageRequest, LoginRequest,
    PayrollQuery, ReportQuery, ToggleAttendanceRequest, UpdateEmployeeRequest,
    UpdateMaterialRequest,
};
use super::response::{ApiError, ApiErrorResponse, EmployeeView, ToggleResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/login", post(login_handler))
        .route(
            "/employees",
            get(list_employees_handler).post(create_employee_handler),
        )
        .route(
            "/employees/:id",
            put(update_employee_handler).delete(delete_employee_handler),
        )
        .route("/attendance/toggle", post(toggle_attendance_handler))
        .route("/attendance/:employee_id", get(get_attendance_handler))
        .route("/advances", post(create_advance_handler))
        .route("/payroll/:employee_id", get(payroll_handler))
        .route(
            "/materials",
            get(list_materials_handler).post(create_material_handler),
        )
        .route(
            "/materials/:id",
            put(update_material_handler).delete(delete_material_handler),
        )
        .route("/usage", post(log_usage_handler))
        .route("/reports", get(report_handler))
        .with_state(state)
}

/// Turns a body-extraction rejection into the API error response.
fn json_rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
            // Missing required fields are reported as validation errors.
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (StatusCode::BAD_REQUEST, Json(error)).into_response()
}

/// Handler for POST /login.
///
/// Whether a password is checked depends on the per-role credential
/// policy; an unknown id and a wrong password are indistinguishable to
/// the caller.
async fn login_handler(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let unauthorized =
        || (StatusCode::UNAUTHORIZED, Json(ApiError::invalid_credentials())).into_response();

    let Some(employee) = state.store().employee(&request.employee_id) else {
        warn!(correlation_id = %correlation_id, "Login attempt for unknown employee");
        return unauthorized();
    };

    if state.config().requires_credential(employee.role) {
        let matches = match (&employee.password, &request.password) {
            (Some(stored), Some(presented)) => stored == presented,
            _ => false,
        };
        if !matches {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %employee.id,
                "Login rejected by credential policy"
            );
            return unauthorized();
        }
    }

    info!(correlation_id = %correlation_id, employee_id = %employee.id, "Login succeeded");
    Json(EmployeeView::from(employee)).into_response()
}

/// Handler for GET /employees.
async fn list_employees_handler(State(state): State<AppState>) -> Response {
    let employees: Vec<EmployeeView> = state
        .store()
        .employees()
        .into_iter()
        .map(EmployeeView::from)
        .collect();
    Json(employees).into_response()
}

/// Handler for POST /employees.
async fn create_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateEmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    if let Some(rate) = request.custom_rate {
        if rate < Decimal::ZERO {
            let error: ApiErrorResponse =
                OpsError::validation("custom_rate must not be negative").into();
            return error.into_response();
        }
    }

    let employee = Employee {
        id: Uuid::new_v4().to_string(),
        name: request.name,
        role: request.role,
        custom_rate: request.custom_rate,
        password: request.password,
    };
    state.store().insert_employee(employee.clone());

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee.id,
        role = employee.role.as_str(),
        "Employee created"
    );
    (StatusCode::CREATED, Json(EmployeeView::from(employee))).into_response()
}

/// Handler for PUT /employees/{id}.
async fn update_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateEmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    if let Some(Some(rate)) = request.custom_rate {
        if rate < Decimal::ZERO {
            let error: ApiErrorResponse =
                OpsError::validation("custom_rate must not be negative").into();
            return error.into_response();
        }
    }

    match state.store().update_employee(&id, request.into()) {
        Ok(employee) => Json(EmployeeView::from(employee)).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for DELETE /employees/{id}. Cascades to the employee's
/// attendance marks and advances.
async fn delete_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.store().delete_employee(&id) {
        Ok(()) => {
            info!(correlation_id = %correlation_id, employee_id = %id, "Employee deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for GET /attendance/{employee_id}.
async fn get_attendance_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Response {
    if state.store().employee(&employee_id).is_none() {
        let error: ApiErrorResponse = OpsError::EmployeeNotFound { id: employee_id }.into();
        return error.into_response();
    }

    let mut marks: Vec<AttendanceMark> = state
        .store()
        .attendance_for(&employee_id)
        .into_iter()
        .map(|(date, status)| AttendanceMark {
            employee_id: employee_id.clone(),
            date,
            status,
        })
        .collect();
    marks.sort_by_key(|mark| mark.date);
    Json(marks).into_response()
}

/// Handler for POST /attendance/toggle.
///
/// Cycles the clicked day through untracked -> WORKED -> OFF ->
/// untracked. Future dates are rejected.
async fn toggle_attendance_handler(
    State(state): State<AppState>,
    payload: Result<Json<ToggleAttendanceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let today = Utc::now().date_naive();
    match toggle_attendance(&request.employee_id, request.date, today, state.store()) {
        Ok(status) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %request.employee_id,
                date = %request.date,
                status = ?status,
                "Attendance toggled"
            );
            Json(ToggleResponse {
                employee_id: request.employee_id,
                date: request.date,
                status,
            })
            .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Attendance toggle rejected");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /advances.
async fn create_advance_handler(
    State(state): State<AppState>,
    payload: Result<Json<AdvanceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let now = Utc::now();
    match request_advance(
        &request.employee_id,
        request.amount,
        now,
        state.store(),
        state.config(),
    ) {
        Ok(advance) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %advance.employee_id,
                amount = %advance.amount,
                "Advance recorded"
            );
            (StatusCode::CREATED, Json(advance)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Advance rejected");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /payroll/{employee_id}?year=&month=.
///
/// Returns the payroll summary, or a JSON `null` body for an employee
/// outside payroll (the manager role).
async fn payroll_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    Query(query): Query<PayrollQuery>,
) -> Response {
    if let Err(err) = query.validate() {
        return ApiErrorResponse::from(err).into_response();
    }
    if state.store().employee(&employee_id).is_none() {
        let error: ApiErrorResponse = OpsError::EmployeeNotFound { id: employee_id }.into();
        return error.into_response();
    }

    let summary = calculate_salary(
        &employee_id,
        query.year,
        query.month,
        state.store(),
        state.config(),
    );
    Json(summary).into_response()
}

/// Handler for GET /materials.
async fn list_materials_handler(State(state): State<AppState>) -> Response {
    Json(state.store().materials()).into_response()
}

/// Handler for POST /materials.
async fn create_material_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateMaterialRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    if let Err(err) = request.validate() {
        return ApiErrorResponse::from(err).into_response();
    }

    let material = Material {
        id: Uuid::new_v4().to_string(),
        name: request.name,
        unit: request.unit,
        package_size: request.package_size.unwrap_or(Decimal::ONE),
        package_price: request.package_price,
    };
    state.store().insert_material(material.clone());

    info!(
        correlation_id = %correlation_id,
        material_id = %material.id,
        "Material created"
    );
    (StatusCode::CREATED, Json(material)).into_response()
}

/// Handler for PUT /materials/{id}.
async fn update_material_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateMaterialRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    if let Err(err) = request.validate() {
        return ApiErrorResponse::from(err).into_response();
    }

    match state.store().update_material(&id, request.into()) {
        Ok(material) => Json(material).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for DELETE /materials/{id}. Rejected while usage events
/// still reference the material.
async fn delete_material_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    match state.store().delete_material(&id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for POST /usage.
async fn log_usage_handler(
    State(state): State<AppState>,
    payload: Result<Json<LogUsageRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let measure = match request.measure() {
        Ok(measure) => measure,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Usage request rejected");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    match log_usage(
        &request.material_id,
        request.date,
        measure,
        request.logged_by,
        state.store(),
    ) {
        Ok(event) => {
            info!(
                correlation_id = %correlation_id,
                material_id = %event.material_id,
                total_cost = %event.total_cost,
                "Usage logged"
            );
            (StatusCode::CREATED, Json(event)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Usage rejected");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /reports?start_date=&end_date=.
async fn report_handler(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Response {
    let rows = usage_report(query.start_date, query.end_date, state.store());
    Json(rows).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        AdvancePolicy, BonusPolicy, CafeConfig, ConfigLoader, CredentialPolicy, PolicyConfig,
        RoleRate, RolesConfig,
    };
    use crate::models::Role;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{Value, json};
    use std::collections::HashMap;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn test_config() -> CafeConfig {
        let mut roles = HashMap::new();
        roles.insert(
            Role::Bartender,
            RoleRate {
                label: "Bartender".to_string(),
                daily_rate: Decimal::from(200_000),
            },
        );
        roles.insert(
            Role::Server,
            RoleRate {
                label: "Server".to_string(),
                daily_rate: Decimal::from(160_000),
            },
        );
        roles.insert(
            Role::Manager,
            RoleRate {
                label: "Manager".to_string(),
                daily_rate: Decimal::ZERO,
            },
        );

        let mut require = HashMap::new();
        require.insert(Role::Manager, true);

        CafeConfig::new(
            RolesConfig {
                roles,
                currency: "VND".to_string(),
            },
            PolicyConfig {
                bonus: BonusPolicy {
                    long_month_days: 31,
                    long_month_bonus_days: 1,
                    full_attendance_bonus_days: 2,
                },
                advance: AdvancePolicy {
                    max_ratio: Decimal::from_str("0.7").unwrap(),
                },
                credentials: CredentialPolicy { require },
            },
        )
    }

    fn create_test_router() -> Router {
        create_router(AppState::in_memory(ConfigLoader::from_config(test_config())))
    }

    async fn send(router: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json");
        let request = builder
            .body(match body {
                Some(value) => Body::from(value.to_string()),
                None => Body::empty(),
            })
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    #[tokio::test]
    async fn test_create_and_list_employees() {
        let router = create_test_router();

        let (status, created) = send(
            router.clone(),
            "POST",
            "/employees",
            Some(json!({"name": "Nguyen Van A", "role": "bartender"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["role"], "bartender");
        assert!(created.get("password").is_none());

        let (status, listed) = send(router, "GET", "/employees", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_test_router();

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/employees")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{invalid json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_required_field_returns_validation_error() {
        let router = create_test_router();

        let (status, body) = send(
            router,
            "POST",
            "/employees",
            Some(json!({"role": "server"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_payroll_for_unknown_employee_returns_404() {
        let router = create_test_router();

        let (status, body) = send(router, "GET", "/payroll/ghost?year=2026&month=3", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "EMPLOYEE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_payroll_month_out_of_range_returns_400() {
        let router = create_test_router();

        let (status, body) = send(router, "GET", "/payroll/u1?year=2026&month=13", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_manager_login_requires_password() {
        let router = create_test_router();

        let (_, manager) = send(
            router.clone(),
            "POST",
            "/employees",
            Some(json!({"name": "Quan Ly", "role": "manager", "password": "admin"})),
        )
        .await;
        let id = manager["id"].as_str().unwrap();

        let (status, _) = send(
            router.clone(),
            "POST",
            "/login",
            Some(json!({"employee_id": id})),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, body) = send(
            router,
            "POST",
            "/login",
            Some(json!({"employee_id": id, "password": "admin"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["role"], "manager");
        assert!(body.get("password").is_none());
    }

    #[tokio::test]
    async fn test_bartender_login_needs_no_password() {
        let router = create_test_router();

        let (_, employee) = send(
            router.clone(),
            "POST",
            "/employees",
            Some(json!({"name": "Nguyen Van A", "role": "bartender"})),
        )
        .await;
        let id = employee["id"].as_str().unwrap();

        let (status, _) = send(
            router,
            "POST",
            "/login",
            Some(json!({"employee_id": id})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
}
