//! Pages built from content collections: services, blog posts and case studies.

use super::record::{format_date, list, remaining_fields, text};
use common::model::content::{Collection, Record};
use maud::{html, Markup};

/// Fields rendered in the header of a detail page rather than in its body.
const HEADER_FIELDS: &[&str] = &[
    "title", "subtitle", "excerpt", "date", "author", "category", "image", "read_time", "tags",
];

fn title(record: &Record) -> &str {
    text(record, "title").unwrap_or_default()
}

fn header(record: &Record) -> Markup {
    html! {
        section.page-header {
            @if let Some(category) = text(record, "category") {
                span.badge { (category) }
            }
            h1 { (title(record)) }
            @if let Some(subtitle) = text(record, "subtitle") {
                p.lead { (subtitle) }
            }
            @if text(record, "date").is_some() || text(record, "author").is_some() {
                p.meta {
                    @if let Some(author) = text(record, "author") { span.author { (author) } }
                    @if let Some(date) = text(record, "date") { " " time { (format_date(date)) } }
                    @if let Some(read_time) = text(record, "read_time") { " · " (read_time) }
                }
            }
            @if let Some(image) = text(record, "image") {
                img.hero-image src=(image) alt=(title(record));
            }
        }
    }
}

/// A card linking to a record, with its excerpt or subtitle as teaser.
fn card(href: &str, record: &Record) -> Markup {
    html! {
        article.card {
            @if let Some(image) = text(record, "image") {
                img src=(image) alt=(title(record)) loading="lazy";
            }
            h2 { a href=(href) { (title(record)) } }
            @if let Some(date) = text(record, "date") {
                p.meta { time { (format_date(date)) } }
            }
            @if let Some(teaser) = text(record, "excerpt").or_else(|| text(record, "subtitle")) {
                p { (teaser) }
            }
            a.read-more href=(href) { "Read more" }
        }
    }
}

pub fn services_overview(services: &Collection) -> Markup {
    html! {
        section.page-header {
            h1 { "Our Services" }
        }
        section.card-grid {
            @for (key, category) in services {
                article.card {
                    h2 { a href={ "/services/" (key) } { (title(category)) } }
                    ul.content-list {
                        @for item in list(category, "services") {
                            li { (item.as_str().unwrap_or_default()) }
                        }
                    }
                }
            }
        }
    }
}

pub fn service_category(key: &str, category: &Record) -> Markup {
    html! {
        section.page-header {
            h1 { (title(category)) }
        }
        section.content data-service=(key) {
            (remaining_fields(category, &["title"]))
        }
        a.btn.btn-secondary href="/services" { "All services" }
    }
}

pub fn service_page(service: &Record) -> Markup {
    html! {
        (header(service))
        section.content {
            (remaining_fields(service, HEADER_FIELDS))
        }
        section.cta {
            a.btn.btn-primary href="/contact" { "Talk to us" }
        }
    }
}

pub fn blogs(blogs: &Collection) -> Markup {
    html! {
        section.page-header {
            h1 { "Blog" }
            p.lead { "Industry insights and updates" }
        }
        section.card-grid {
            @for (slug, post) in blogs {
                (card(&format!("/blog/{}", slug), post))
            }
        }
    }
}

pub fn blog_detail(post: &Record, related: &[(&str, &Record)]) -> Markup {
    html! {
        article.blog-post {
            (header(post))
            section.content {
                (remaining_fields(post, HEADER_FIELDS))
            }
            @let tags = list(post, "tags");
            @if !tags.is_empty() {
                ul.tags {
                    @for tag in tags {
                        li { (tag.as_str().unwrap_or_default()) }
                    }
                }
            }
        }
        @if !related.is_empty() {
            section.related {
                h2 { "Related Articles" }
                div.card-grid {
                    @for (slug, record) in related {
                        (card(&format!("/blog/{}", slug), record))
                    }
                }
            }
        }
    }
}

pub fn case_studies(studies: &Collection) -> Markup {
    html! {
        section.page-header {
            h1 { "Case Studies" }
            p.lead { "Success stories from our clients" }
        }
        section.card-grid {
            @for (slug, study) in studies {
                (card(&format!("/case-study/{}", slug), study))
            }
        }
    }
}

/// `all` is the whole collection; every study other than `slug` is linked at the end.
pub fn case_study_detail(slug: &str, study: &Record, all: &Collection) -> Markup {
    html! {
        article.case-study {
            (header(study))
            section.content {
                (remaining_fields(study, HEADER_FIELDS))
            }
        }
        @if all.len() > 1 {
            section.related {
                h2 { "More Case Studies" }
                ul.content-list {
                    @for (other, record) in all.iter().filter(|(other, _)| other.as_str() != slug) {
                        li { a href={ "/case-study/" (other) } { (title(record)) } }
                    }
                }
            }
        }
    }
}
