use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use axum_helpers::{AppError, IdPath, ValidatedJson};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, LoginRequest, User};
use crate::repository::UserRepository;
use crate::service::UserService;

/// OpenAPI documentation for the users API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_users,
        create_user,
        get_user,
        update_user,
        delete_user,
        get_user_by_username,
        login,
    ),
    components(schemas(User, CreateUser, LoginRequest)),
    tags(
        (name = "Users", description = "User management and authentication endpoints")
    )
)]
pub struct ApiDoc;

/// Create the users router with all HTTP endpoints
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/login", post(login))
        .route("/username/{username}", get(get_user_by_username))
        .route(
            "/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .with_state(shared_service)
}

/// List all users
#[utoipa::path(
    get,
    path = "",
    tag = "Users",
    responses(
        (status = 200, description = "List of users", body = Vec<User>)
    )
)]
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
) -> UserResult<Json<Vec<User>>> {
    let users = service.list_users().await?;
    Ok(Json(users))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created successfully", body = User),
        (status = 400, description = "Validation failure"),
        (status = 409, description = "Username already taken")
    )
)]
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateUser>,
) -> UserResult<impl IntoResponse> {
    let user = service.add_user(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Get a user by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found")
    )
)]
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id): IdPath,
) -> UserResult<Json<User>> {
    let user = service.get_user(id).await?.ok_or(UserError::NotFound(id))?;
    Ok(Json(user))
}

/// Update an existing user; the path id wins over any id in the body
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User id")
    ),
    request_body = CreateUser,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Validation failure"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Username already taken")
    )
)]
async fn update_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<CreateUser>,
) -> UserResult<Json<User>> {
    let user = User::from_create(id, input)?;
    if !service.update_user(&user).await? {
        return Err(UserError::NotFound(id));
    }
    Ok(Json(user))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User id")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found")
    )
)]
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id): IdPath,
) -> UserResult<StatusCode> {
    if !service.delete_user(id).await? {
        return Err(UserError::NotFound(id));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Get a user by username
#[utoipa::path(
    get,
    path = "/username/{username}",
    tag = "Users",
    params(
        ("username" = String, Path, description = "Username to look up")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found")
    )
)]
async fn get_user_by_username<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(username): Path<String>,
) -> Result<Json<User>, AppError> {
    let user = service
        .get_user_by_username(&username)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", username)))?;
    Ok(Json(user))
}

/// Authenticate with username and password
#[utoipa::path(
    post,
    path = "/login",
    tag = "Users",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated", body = User),
        (status = 400, description = "Blank credentials"),
        (status = 401, description = "Invalid username or password")
    )
)]
async fn login<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> UserResult<Json<User>> {
    let user = service
        .authenticate(&request.username, &request.password)
        .await?
        .ok_or(UserError::InvalidCredentials)?;
    Ok(Json(user))
}
