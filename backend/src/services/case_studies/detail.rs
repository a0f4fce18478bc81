use crate::content::resolve;
use crate::error::SiteError;
use crate::services::{record_summary, record_title};
use crate::state::SiteState;
use crate::views::{self, catalog, PageMeta, Section};
use actix_web::{web, HttpRequest, HttpResponse};
use common::model::company::ARDUR;
use common::model::content::CollectionKind;

pub async fn process(
    req: HttpRequest,
    state: web::Data<SiteState>,
    slug: web::Path<String>,
) -> Result<HttpResponse, SiteError> {
    let studies = state.content.load(CollectionKind::CaseStudies).await;
    let study = resolve(&studies, &slug)?;

    let page = PageMeta::new(
        format!("{} - Case Study | {}", record_title(study, "Case Studies"), ARDUR.name),
        record_summary(study, "subtitle"),
        Section::CaseStudies,
    );
    Ok(views::render(&req, &state, &page, catalog::case_study_detail(&slug, study, &studies)))
}
