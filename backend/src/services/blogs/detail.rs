//! `GET /blog/{slug}`: a single post followed by up to `RELATED_LIMIT` other posts,
//! taken in file order.

use super::RELATED_LIMIT;
use crate::content::{related, resolve};
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
    let blogs = state.content.load(CollectionKind::Blogs).await;
    let post = resolve(&blogs, &slug)?;
    let others = related(&blogs, &slug, RELATED_LIMIT);

    let page = PageMeta::new(
        format!("{} - {}", record_title(post, "Blog"), ARDUR.name),
        record_summary(post, "excerpt"),
        Section::Blogs,
    );
    Ok(views::render(&req, &state, &page, catalog::blog_detail(post, &others)))
}
