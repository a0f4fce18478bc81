use crate::state::SiteState;
use actix_web::{web, HttpResponse};
use common::model::content::CollectionKind;

/// `GET /api/services`: the services collection as JSON, in file order.
pub async fn process(state: web::Data<SiteState>) -> HttpResponse {
    HttpResponse::Ok().json(state.content.load(CollectionKind::Services).await)
}
