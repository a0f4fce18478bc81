use crate::content::resolve;
use crate::error::SiteError;
use crate::services::record_title;
use crate::state::SiteState;
use crate::views::record::text;
use crate::views::{self, catalog, PageMeta, Section};
use actix_web::{web, HttpRequest, HttpResponse};
use common::model::company::ARDUR;
use common::model::content::CollectionKind;

/// `GET /service/{slug}`: a detailed service page from `services_detail.json`.
pub async fn process(
    req: HttpRequest,
    state: web::Data<SiteState>,
    slug: web::Path<String>,
) -> Result<HttpResponse, SiteError> {
    let details = state.content.load(CollectionKind::ServiceDetails).await;
    let service = resolve(&details, &slug)?;

    let page = PageMeta::new(
        format!("{} - {}", record_title(service, "Our Services"), ARDUR.name),
        format!(
            "{} - Professional services by {}.",
            text(service, "subtitle").unwrap_or_default(),
            ARDUR.name
        ),
        Section::Services,
    );
    Ok(views::render(&req, &state, &page, catalog::service_page(service)))
}
