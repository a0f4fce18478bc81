use crate::state::SiteState;
use crate::views::{self, catalog, PageMeta, Section};
use actix_web::{web, HttpRequest, HttpResponse};
use common::model::content::CollectionKind;

pub async fn process(req: HttpRequest, state: web::Data<SiteState>) -> HttpResponse {
    let studies = state.content.load(CollectionKind::CaseStudies).await;
    let page = PageMeta::new(
        "Case Studies - Success Stories | Ardur Technology LLC",
        "Explore real-world success stories and case studies showcasing our expertise in predictive analytics and aircraft maintenance.",
        Section::CaseStudies,
    );
    views::render(&req, &state, &page, catalog::case_studies(&studies))
}
