//! Fixed pages: home, about, industries, careers, contact, leadership, privacy policy.

use super::record::{list, text, value};
use common::model::company::ARDUR;
use maud::{html, Markup};
use serde_json::Value;

const INDUSTRIES: &[(&str, &str)] = &[
    (
        "Mortgage",
        "Pre-processing, underwriting support, closing and post-closing audit for lenders and servicers.",
    ),
    (
        "Healthcare",
        "Medical billing, coding support and revenue cycle operations.",
    ),
    (
        "Finance & Accounting",
        "Accounts payable and receivable, reconciliation and reporting.",
    ),
    (
        "Real Estate",
        "Title search, property and lien search, and appraisal review.",
    ),
    (
        "Aviation",
        "Aircraft asset records management and predictive maintenance analytics.",
    ),
];

pub fn home() -> Markup {
    html! {
        section.hero {
            h1 { "Technology-driven business process solutions" }
            p.lead {
                "We help organizations reduce cost, increase efficiency and achieve "
                "transformation through innovation."
            }
            div.hero-actions {
                a.btn.btn-primary href="/services" { "Explore Services" }
                a.btn.btn-secondary href="/contact" { "Contact Us" }
            }
        }
        section.highlights {
            h2 { "Why " (ARDUR.name) }
            ul.content-list {
                li { "Business process management for mortgage, finance and healthcare" }
                li { "Digital transformation and IT solutions" }
                li { "Dedicated teams with rigorous quality control" }
            }
        }
    }
}

pub fn about() -> Markup {
    html! {
        section.page-header {
            h1 { "About Us" }
        }
        section.content {
            p {
                (ARDUR.name) " was founded in 2013 by " (ARDUR.founder) " to provide business "
                "process management and IT solutions to organizations across the United States."
            }
            p {
                "Our teams combine domain expertise with technology to deliver accurate, "
                "scalable operations for our clients."
            }
        }
    }
}

pub fn industries() -> Markup {
    html! {
        section.page-header {
            h1 { "Industries We Serve" }
        }
        section.card-grid {
            @for (name, summary) in INDUSTRIES {
                article.card {
                    h2 { (name) }
                    p { (summary) }
                }
            }
        }
    }
}

pub fn careers() -> Markup {
    html! {
        section.page-header {
            h1 { "Careers" }
            p.lead { "Join our team and grow with us." }
        }
        section.form-section {
            h2 { "Apply Now" }
            form id="career-form" method="post" action="/careers/apply" enctype="multipart/form-data" {
                (input("name", "Full Name", "text", true))
                (input("email", "Email", "email", true))
                (input("phone", "Phone", "tel", true))
                (input("position", "Position", "text", true))
                (input("experience", "Years of Experience", "text", false))
                (textarea("cover_letter", "Cover Letter", false))
                div.form-group {
                    label for="resume" { "Resume (PDF, DOC, DOCX)" }
                    input id="resume" type="file" name="resume" accept=".pdf,.doc,.docx";
                }
                button.btn.btn-primary type="submit" { "Submit Application" }
            }
        }
    }
}

pub fn contact() -> Markup {
    html! {
        section.page-header {
            h1 { "Contact Us" }
            p.lead { "Located in " (ARDUR.address) "." }
        }
        section.contact-details {
            p { "Phone: " a href={ "tel:" (ARDUR.phone) } { (ARDUR.phone) } }
            p { "Email: " a href={ "mailto:" (ARDUR.email) } { (ARDUR.email) } }
        }
        section.form-section {
            form id="contact-form" method="post" action="/contact" {
                (input("name", "Name", "text", true))
                (input("email", "Email", "email", true))
                (input("company", "Company", "text", false))
                (input("phone", "Phone", "tel", false))
                (input("subject", "Subject", "text", true))
                (textarea("message", "Message", true))
                button.btn.btn-primary type="submit" { "Send Message" }
            }
        }
    }
}

/// `team_members` and `company_values` come from the leadership collection.
pub fn leadership(team_members: &[Value], company_values: &[Value]) -> Markup {
    html! {
        section.page-header {
            h1 { "Leadership Team" }
        }
        section.card-grid {
            @for member in team_members {
                article.card.team-member {
                    @if let Some(image) = text(member, "image") {
                        img src=(image) alt=(text(member, "name").unwrap_or_default()) loading="lazy";
                    }
                    h2 { (text(member, "name").unwrap_or_default()) }
                    @if let Some(role) = text(member, "position").or_else(|| text(member, "title")) {
                        p.role { (role) }
                    }
                    @if let Some(bio) = text(member, "bio") {
                        p { (bio) }
                    }
                    @let expertise = list(member, "expertise");
                    @if !expertise.is_empty() {
                        (value(&Value::Array(expertise.to_vec())))
                    }
                }
            }
        }
        @if !company_values.is_empty() {
            section.company-values {
                h2 { "Our Values" }
                (value(&Value::Array(company_values.to_vec())))
            }
        }
    }
}

pub fn privacy_policy() -> Markup {
    html! {
        section.page-header {
            h1 { "Privacy Policy" }
        }
        section.content {
            p {
                (ARDUR.name) " collects only the information you submit through our contact and "
                "career forms. It is used to respond to your enquiry or application and is not "
                "sold to third parties."
            }
            p {
                "Resumes uploaded with an application are stored for review by our recruiting "
                "team. To ask about or remove your data, write to "
                a href={ "mailto:" (ARDUR.email) } { (ARDUR.email) } "."
            }
        }
    }
}

fn input(name: &str, label: &str, kind: &str, required: bool) -> Markup {
    html! {
        div.form-group {
            label for=(name) { (label) @if required { " *" } }
            input id=(name) type=(kind) name=(name) required[required];
        }
    }
}

fn textarea(name: &str, label: &str, required: bool) -> Markup {
    html! {
        div.form-group {
            label for=(name) { (label) @if required { " *" } }
            textarea id=(name) name=(name) rows="5" required[required] {}
        }
    }
}
