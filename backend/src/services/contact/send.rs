//! `POST /contact`: validates the message, emails it with the sender as `Reply-To`
//! and redirects back to `/contact`.

use crate::error::SiteError;
use crate::forms;
use crate::state::SiteState;
use actix_web::{web, HttpRequest, HttpResponse};
use common::model::notification::NotificationKind;

pub async fn process(
    req: HttpRequest,
    payload: web::Payload,
    state: web::Data<SiteState>,
) -> Result<HttpResponse, SiteError> {
    forms::submit(&req, payload, &state, NotificationKind::ContactMessage).await
}

#[cfg(test)]
mod tests {
    use crate::forms::{failure_message, success_message};
    use crate::test_support::{flashes_of, multipart_body, TestSite};
    use actix_web::http::{header, StatusCode};
    use actix_web::test;
    use common::model::flash::FlashMessage;
    use common::model::notification::NotificationKind;

    const MESSAGE: &str = "name=Ann+Lee&email=ann%40example.com&subject=Pricing&message=Hello+there";

    fn post(body: &'static str) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/contact")
            .insert_header((header::CONTENT_TYPE, "application/x-www-form-urlencoded"))
            .set_payload(body)
    }

    #[actix_web::test]
    async fn valid_message_is_sent_once_with_reply_to() {
        let site = TestSite::new();
        let app = test::init_service(site.app()).await;

        let resp = test::call_service(&app, post(MESSAGE).to_request()).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/contact");
        assert_eq!(
            flashes_of(&site, &resp),
            vec![FlashMessage::success(success_message(NotificationKind::ContactMessage))]
        );

        let sent = site.transport.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].reply_to.as_deref(), Some("ann@example.com"));
        assert_eq!(sent[0].subject, "Contact Form: Pricing");
        assert!(sent[0].body.contains("Company: Not specified"));
    }

    #[actix_web::test]
    async fn transport_failure_redirects_instead_of_500() {
        let site = TestSite::failing();
        let app = test::init_service(site.app()).await;

        let resp = test::call_service(&app, post(MESSAGE).to_request()).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/contact");
        assert_eq!(
            flashes_of(&site, &resp),
            vec![FlashMessage::error(failure_message(NotificationKind::ContactMessage))]
        );
    }

    #[actix_web::test]
    async fn missing_subject_is_rejected_without_sending() {
        let site = TestSite::new();
        let app = test::init_service(site.app()).await;

        let resp = test::call_service(
            &app,
            post("name=Ann&email=ann%40example.com&message=Hi").to_request(),
        )
        .await;
        assert_eq!(flashes_of(&site, &resp), vec![FlashMessage::error("Subject is required")]);
        assert!(site.transport.sent().is_empty());
    }

    #[actix_web::test]
    async fn multipart_bodies_are_accepted_and_files_ignored() {
        let site = TestSite::new();
        let app = test::init_service(site.app()).await;

        let (content_type, body) = multipart_body(
            &[("name", "Ann"), ("email", "ann@example.com"), ("subject", "Hi"), ("message", "Hello")],
            Some(("resume", "cv.pdf", &b"%PDF"[..])),
        );
        let req = test::TestRequest::post()
            .uri("/contact")
            .insert_header((header::CONTENT_TYPE, content_type))
            .set_payload(body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(site.transport.sent().len(), 1);
        assert!(site.uploaded_files().is_empty());
    }

    #[actix_web::test]
    async fn unsupported_body_is_400() {
        let site = TestSite::new();
        let app = test::init_service(site.app()).await;

        let req = test::TestRequest::post()
            .uri("/contact")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload("{}")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn contact_page_renders_form() {
        let site = TestSite::new();
        let app = test::init_service(site.app()).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/contact").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = crate::test_support::body_string(resp).await;
        assert!(body.contains(r#"id="contact-form""#));
    }
}
