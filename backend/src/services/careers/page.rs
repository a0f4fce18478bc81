use crate::state::SiteState;
use crate::views::{self, pages, PageMeta, Section};
use actix_web::{web, HttpRequest, HttpResponse};

pub async fn process(req: HttpRequest, state: web::Data<SiteState>) -> HttpResponse {
    let page = PageMeta::new(
        "Careers - Join Ardur Technology LLC",
        "Join our team at Ardur Technology LLC. Explore career opportunities in business process management and technology solutions.",
        Section::Careers,
    );
    views::render(&req, &state, &page, pages::careers())
}
