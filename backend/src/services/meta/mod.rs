//! Crawler and browser housekeeping: `robots.txt`, `sitemap.xml` and `/.well-known/*`.

use crate::state::SiteState;
use actix_web::{web, HttpResponse};

/// Paths listed in the sitemap.
const SITEMAP_PATHS: &[&str] = &["/", "/services", "/about", "/contact"];

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/robots.txt", web::get().to(robots))
        .route("/sitemap.xml", web::get().to(sitemap))
        .route("/.well-known/{tail:.*}", web::get().to(well_known));
}

async fn robots() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain")
        .body("User-agent: *\nAllow: /")
}

async fn sitemap(state: web::Data<SiteState>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/xml")
        .body(sitemap_xml(&state.config.site_url))
}

fn sitemap_xml(base: &str) -> String {
    let urls: String = SITEMAP_PATHS
        .iter()
        .map(|path| format!("  <url><loc>{}{}</loc></url>\n", base, path))
        .collect();
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n\
         {}</urlset>",
        urls
    )
}

/// Browsers and tools probe `/.well-known/` paths; answer with an empty 204.
async fn well_known() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{body_string, TestSite};
    use actix_web::http::StatusCode;
    use actix_web::test::{call_service, init_service, TestRequest};

    #[test]
    fn sitemap_lists_pages_under_base_url() {
        let xml = sitemap_xml("https://ardur.test");
        assert!(xml.contains("<loc>https://ardur.test/</loc>"));
        assert!(xml.contains("<loc>https://ardur.test/contact</loc>"));
        assert_eq!(xml.matches("<url>").count(), 4);
    }

    #[actix_web::test]
    async fn housekeeping_routes() {
        let site = TestSite::new();
        let app = init_service(site.app()).await;

        let resp = call_service(&app, TestRequest::get().uri("/robots.txt").to_request()).await;
        assert_eq!(body_string(resp).await, "User-agent: *\nAllow: /");

        let resp = call_service(&app, TestRequest::get().uri("/sitemap.xml").to_request()).await;
        assert_eq!(resp.headers().get("content-type").unwrap(), "application/xml");
        assert!(body_string(resp).await.contains("<loc>https://ardur.test/about</loc>"));

        let resp = call_service(
            &app,
            TestRequest::get()
                .uri("/.well-known/appspecific/com.chrome.devtools.json")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(body_string(resp).await.is_empty());
    }

    #[actix_web::test]
    async fn well_known_answers_get_only() {
        let site = TestSite::new();
        let app = init_service(site.app()).await;

        let resp = call_service(
            &app,
            TestRequest::post().uri("/.well-known/security.txt").to_request(),
        )
        .await;
        assert_ne!(resp.status(), StatusCode::NO_CONTENT);
        assert!(resp.status().is_client_error());
    }
}
