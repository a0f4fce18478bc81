use super::{PageMeta, Section};
use chrono::{Datelike, Local};
use common::model::company::ARDUR;
use common::model::flash::FlashMessage;
use maud::{html, Markup, DOCTYPE};

const NAV: &[(Section, &str, &str)] = &[
    (Section::Home, "/", "Home"),
    (Section::About, "/about", "About"),
    (Section::Services, "/services", "Services"),
    (Section::Industries, "/industries", "Industries"),
    (Section::Leadership, "/leadership", "Leadership"),
    (Section::CaseStudies, "/case-studies", "Case Studies"),
    (Section::Blogs, "/blogs", "Blog"),
    (Section::Careers, "/careers", "Careers"),
    (Section::Contact, "/contact", "Contact"),
];

/// Renders the full HTML document around a page body.
pub fn document(page: &PageMeta, flashes: &[FlashMessage], content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (page.title) }
                meta name="description" content=(page.description);
                link rel="stylesheet" href="/static/css/style.css";
            }
            body {
                (site_header(page.section))
                @if !flashes.is_empty() {
                    div.flash-messages {
                        @for flash in flashes {
                            div class={ "alert alert-" (flash.level.as_str()) } role="alert" {
                                (flash.message)
                            }
                        }
                    }
                }
                main { (content) }
                (site_footer())
                button id="back-to-top" type="button" aria-label="Back to top" { "↑" }
                script src="/static/js/main.js" {}
            }
        }
    }
}

fn site_header(current: Section) -> Markup {
    html! {
        header.site-header {
            nav.navbar {
                a.brand href="/" { (ARDUR.name) }
                button.nav-toggle id="nav-toggle" type="button" aria-label="Toggle navigation" {
                    span.bar {}
                    span.bar {}
                    span.bar {}
                }
                ul.nav-menu id="nav-menu" {
                    @for (section, href, label) in NAV {
                        li {
                            a.nav-link.active[*section == current] href=(href) { (label) }
                        }
                    }
                }
            }
        }
    }
}

fn site_footer() -> Markup {
    html! {
        footer.site-footer {
            div.footer-contact {
                p { strong { (ARDUR.name) } }
                p { (ARDUR.address) }
                p { a href={ "mailto:" (ARDUR.email) } { (ARDUR.email) } }
                p { a href={ "tel:" (ARDUR.phone) } { (ARDUR.phone) } }
            }
            div.footer-bottom {
                p { "© " (Local::now().year()) " " (ARDUR.name) ". All rights reserved." }
                a href="/privacy-policy" { "Privacy Policy" }
            }
        }
    }
}
