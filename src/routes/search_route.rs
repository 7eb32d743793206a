use actix_web::{get, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::services::ContentPipeline;

#[derive(Deserialize)]
struct SearchQuery {
    q: Option<String>,
}

#[get("/search")]
pub async fn search(
    pipeline: web::Data<ContentPipeline>,
    query: web::Query<SearchQuery>,
) -> HttpResponse {
    let Some(q) = query.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) else {
        return HttpResponse::BadRequest().json(json!({"error": "Query parameter q is required"}));
    };

    HttpResponse::Ok().json(pipeline.search(q).await)
}
