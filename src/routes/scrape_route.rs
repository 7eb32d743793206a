use actix_web::{get, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::services::ContentPipeline;

#[derive(Deserialize)]
struct ScrapeQuery {
    url: Option<String>,
}

#[get("/scrape")]
pub async fn scrape(
    pipeline: web::Data<ContentPipeline>,
    query: web::Query<ScrapeQuery>,
) -> HttpResponse {
    let Some(url) = query.url.as_deref().map(str::trim).filter(|u| !u.is_empty()) else {
        return HttpResponse::BadRequest().json(json!({"error": "URL parameter is required"}));
    };

    let result = pipeline.scrape_url(url).await;
    HttpResponse::Ok().json(result)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test, web, App};
    use async_trait::async_trait;

    use super::scrape;
    use crate::{
        configuration::ScraperSettings,
        services::{ContentPipeline, Fetcher, Renderer, ScrapeError},
    };

    struct CannedPage;

    #[async_trait]
    impl Fetcher for CannedPage {
        async fn fetch(&self, _url: &str) -> Result<String, ScrapeError> {
            Ok("<html><head><title>Tiny</title></head><body><h2>Rust 2.0 notes</h2></body></html>"
                .to_string())
        }
    }

    #[async_trait]
    impl Renderer for CannedPage {
        async fn render(&self, url: &str, _ready_marker: &str) -> Result<String, ScrapeError> {
            Err(ScrapeError::Render {
                url: url.to_string(),
                reason: "no browser in tests".to_string(),
            })
        }
    }

    fn pipeline() -> web::Data<ContentPipeline> {
        web::Data::new(ContentPipeline::new(
            Arc::new(CannedPage),
            Arc::new(CannedPage),
            ScraperSettings::default(),
        ))
    }

    #[actix_web::test]
    async fn missing_url_is_a_bad_request() {
        let app = test::init_service(App::new().app_data(pipeline()).service(scrape)).await;

        for uri in ["/scrape", "/scrape?url=", "/scrape?url=%20"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::BAD_REQUEST, "uri: {}", uri);

            let body: serde_json::Value = test::read_body_json(res).await;
            assert_eq!(body["error"], "URL parameter is required");
        }
    }

    #[actix_web::test]
    async fn returns_categorized_result() {
        let app = test::init_service(App::new().app_data(pipeline()).service(scrape)).await;
        let req = test::TestRequest::get()
            .uri("/scrape?url=tiny.example.org")
            .to_request();

        let body = test::call_and_read_body(&app, req).await;
        let body = String::from_utf8(body.to_vec()).unwrap();

        assert!(body.starts_with(r#"{"website_summary":{"title":"Tiny""#));
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["Programming"][0]["title"], "Rust 2.0 notes");
        assert_eq!(json["Programming"][0]["company"], "Tiny");
        assert_eq!(json["Tech"].as_array().unwrap().len(), 0);
    }
}
