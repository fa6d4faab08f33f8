use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response for mutations that have no other payload
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SuccessDto {
    pub success: bool,
}

/// Query parameter selecting a calendar month, either `YYYY-MM` or `YYYY-MM-DD`
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MonthQuery {
    /// Month to query, the day component is ignored if present
    pub month: String,
}
