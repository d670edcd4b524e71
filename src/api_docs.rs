use crate::api;
use crate::dream::{AnalysisResult, DreamInput, ErrorBody};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(api::health::health_check, api::analyze::analyze),
    components(schemas(DreamInput, AnalysisResult, ErrorBody)),
    tags(
        (name = "dream-oracle", description = "Dream interpretation API")
    )
)]
pub struct ApiDoc;
