//! OpenAPI documentation definition.

use utoipa::OpenApi;

use super::dto::{ResultRequest, ResultResponse};
use super::result_handler;
use domain::ResultStatus;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Quiz Platform - Results Service",
        description = "APIs for recording and retrieving quiz attempt results"
    ),
    paths(
        result_handler::get_all_results,
        result_handler::get_result,
        result_handler::get_result_by_session,
        result_handler::create_result,
        result_handler::delete_result,
    ),
    components(schemas(ResultRequest, ResultResponse, ResultStatus)),
    tags((name = "Results", description = "Quiz attempt results"))
)]
pub struct ApiDoc;
