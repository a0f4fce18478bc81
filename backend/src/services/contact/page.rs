use crate::state::SiteState;
use crate::views::{self, pages, PageMeta, Section};
use actix_web::{web, HttpRequest, HttpResponse};

pub async fn process(req: HttpRequest, state: web::Data<SiteState>) -> HttpResponse {
    let page = PageMeta::new(
        "Contact Us - Ardur Technology LLC",
        "Get in touch with Ardur Technology LLC. Located in Las Vegas, Nevada. Call +1 (702) 809 2713 or email info@ardurtechnology.com",
        Section::Contact,
    );
    views::render(&req, &state, &page, pages::contact())
}
