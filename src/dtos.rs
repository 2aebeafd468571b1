//! Request and response shapes of the demo routes.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Item of [`TestModel::items`].
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ItemModel {
    pub name: String,
}

/// Body of `POST /test-model`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TestModel {
    pub name: String,
    pub age: i64,
    pub email: Option<String>,
    pub items: Option<Vec<ItemModel>>,
}

/// Route parameters of `GET /users/{user_id}`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct UserPath {
    /// Numeric user identifier.
    pub user_id: i64,
}

/// Query parameters of `GET /users/{user_id}`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UsersQuery {
    /// Page size. Defaults to 10.
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    10
}

/// Response of `GET /users/{user_id}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub user_id: i64,
    pub limit: i64,
}

/// Generic acknowledgement.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AckDto {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<TestModel>,
}

/// Response of `GET /`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}
