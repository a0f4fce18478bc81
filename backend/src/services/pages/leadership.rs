use crate::state::SiteState;
use crate::views::record::list;
use crate::views::{self, pages, PageMeta, Section};
use actix_web::{web, HttpRequest, HttpResponse};
use common::model::content::CollectionKind;
use serde_json::Value;

pub async fn process(req: HttpRequest, state: web::Data<SiteState>) -> HttpResponse {
    let leadership = Value::Object(state.content.load(CollectionKind::Leadership).await);
    let page = PageMeta::new(
        "Leadership Team - Ardur Technology LLC",
        "Meet the leadership team at Ardur Technology LLC. Experienced professionals driving innovation in business process management.",
        Section::Leadership,
    );
    let content = pages::leadership(
        list(&leadership, "team_members"),
        list(&leadership, "company_values"),
    );
    views::render(&req, &state, &page, content)
}
