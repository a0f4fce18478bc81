use crate::content::resolve;
use crate::error::SiteError;
use crate::services::record_title;
use crate::state::SiteState;
use crate::views::{self, catalog, PageMeta, Section};
use actix_web::{web, HttpRequest, HttpResponse};
use common::model::company::ARDUR;
use common::model::content::CollectionKind;

/// `GET /services/{category}`: one entry of the services collection.
pub async fn process(
    req: HttpRequest,
    state: web::Data<SiteState>,
    category: web::Path<String>,
) -> Result<HttpResponse, SiteError> {
    let services = state.content.load(CollectionKind::Services).await;
    let record = resolve(&services, &category)?;

    let title = record_title(record, "Our Services");
    let page = PageMeta::new(
        format!("{} - {}", title, ARDUR.name),
        format!("Professional {} services by {}.", title.to_lowercase(), ARDUR.name),
        Section::Services,
    );
    Ok(views::render(&req, &state, &page, catalog::service_category(&category, record)))
}
