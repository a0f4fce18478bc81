use crate::state::SiteState;
use crate::views::{self, catalog, PageMeta, Section};
use actix_web::{web, HttpRequest, HttpResponse};
use common::model::content::CollectionKind;

pub async fn process(req: HttpRequest, state: web::Data<SiteState>) -> HttpResponse {
    let blogs = state.content.load(CollectionKind::Blogs).await;
    let page = PageMeta::new(
        "Blog - Industry Insights & Updates | Ardur Technology LLC",
        "Expert insights on mortgage services, aircraft asset management, and industry best practices from Ardur Technology LLC.",
        Section::Blogs,
    );
    views::render(&req, &state, &page, catalog::blogs(&blogs))
}
