use crate::state::SiteState;
use crate::views::{self, catalog, PageMeta, Section};
use actix_web::{web, HttpRequest, HttpResponse};
use common::model::content::CollectionKind;

pub async fn process(req: HttpRequest, state: web::Data<SiteState>) -> HttpResponse {
    let services = state.content.load(CollectionKind::Services).await;
    let page = PageMeta::new(
        "Our Services - Ardur Technology LLC",
        "Comprehensive business process management, mortgage services, finance & accounting, healthcare, and digital transformation solutions.",
        Section::Services,
    );
    views::render(&req, &state, &page, catalog::services_overview(&services))
}
