use crate::state::SiteState;
use crate::views::{self, pages, PageMeta, Section};
use actix_web::{web, HttpRequest, HttpResponse};

pub async fn home(req: HttpRequest, state: web::Data<SiteState>) -> HttpResponse {
    let page = PageMeta::new(
        "Ardur Technology LLC - Business Process Management & IT Solutions",
        "Technology-driven business process solutions helping organizations reduce cost, increase efficiency, and achieve transformation through innovation.",
        Section::Home,
    );
    views::render(&req, &state, &page, pages::home())
}

pub async fn about(req: HttpRequest, state: web::Data<SiteState>) -> HttpResponse {
    let page = PageMeta::new(
        "About Us - Ardur Technology LLC",
        "Learn about Ardur Technology LLC, founded in 2013 by Satish Sable, providing business process management and IT solutions.",
        Section::About,
    );
    views::render(&req, &state, &page, pages::about())
}

pub async fn industries(req: HttpRequest, state: web::Data<SiteState>) -> HttpResponse {
    let page = PageMeta::new(
        "Industries We Serve - Ardur Technology LLC",
        "Serving mortgage, healthcare, finance, real estate, and aviation industries with specialized business process solutions.",
        Section::Industries,
    );
    views::render(&req, &state, &page, pages::industries())
}

pub async fn privacy_policy(req: HttpRequest, state: web::Data<SiteState>) -> HttpResponse {
    let page = PageMeta::new(
        "Privacy Policy - Ardur Technology LLC",
        "How Ardur Technology LLC handles the information you submit.",
        Section::Other,
    );
    views::render(&req, &state, &page, pages::privacy_policy())
}

#[cfg(test)]
mod tests {
    use crate::test_support::{body_string, TestSite};
    use actix_web::http::StatusCode;
    use actix_web::test;

    #[actix_web::test]
    async fn static_pages_render() {
        let site = TestSite::new();
        let app = test::init_service(site.app()).await;

        for (uri, heading) in [
            ("/", "Technology-driven business process solutions"),
            ("/about", "About Us"),
            ("/industries", "Industries We Serve"),
            ("/privacy-policy", "Privacy Policy"),
        ] {
            let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(resp.status(), StatusCode::OK, "{uri}");
            assert!(body_string(resp).await.contains(heading), "{uri}");
        }
    }
}
