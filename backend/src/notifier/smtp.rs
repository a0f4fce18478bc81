use super::{MailTransport, NotifyError, OutgoingEmail};
use crate::config::MailSettings;
use lettre::message::header::{ContentType, HeaderName, HeaderValue};
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use log::debug;

/// Sends notifications through the configured SMTP relay.
pub struct SmtpMailer {
    transport: SmtpTransport,
}

impl SmtpMailer {
    /// Builds the transport. No connection is made until the first send.
    pub fn new(settings: &MailSettings) -> Result<Self, NotifyError> {
        let mut builder = if settings.use_tls {
            SmtpTransport::starttls_relay(&settings.server)
                .map_err(|err| NotifyError::Transport(err.to_string()))?
        } else {
            SmtpTransport::builder_dangerous(settings.server.as_str())
        };
        builder = builder.port(settings.port);
        if let Some((username, password)) = settings.credentials() {
            builder = builder.credentials(Credentials::new(
                username.to_string(),
                password.to_string(),
            ));
        }

        Ok(SmtpMailer {
            transport: builder.build(),
        })
    }
}

impl MailTransport for SmtpMailer {
    fn send(&self, email: &OutgoingEmail) -> Result<(), NotifyError> {
        let message = build_message(email)?;
        self.transport
            .send(&message)
            .map(|_| ())
            .map_err(|err| NotifyError::Transport(err.to_string()))
    }
}

fn mailbox(address: &str) -> Result<Mailbox, NotifyError> {
    address.parse().map_err(|err: lettre::address::AddressError| NotifyError::Address {
        address: address.to_string(),
        reason: err.to_string(),
    })
}

pub fn build_message(email: &OutgoingEmail) -> Result<Message, NotifyError> {
    let mut builder = Message::builder()
        .from(mailbox(&email.from)?)
        .subject(email.subject.clone())
        .header(ContentType::TEXT_PLAIN);
    for to in &email.to {
        builder = builder.to(mailbox(to)?);
    }
    // Submitter addresses only pass the form's email pattern, which is looser than
    // RFC 5322. Those lettre refuses are written to the header as submitted.
    if let Some(reply_to) = &email.reply_to {
        builder = match reply_to.parse::<Mailbox>() {
            Ok(mailbox) => builder.reply_to(mailbox),
            Err(err) => {
                debug!("Setting Reply-To '{}' verbatim: {}", reply_to, err);
                builder.raw_header(HeaderValue::new(
                    HeaderName::new_from_ascii_str("Reply-To"),
                    reply_to.clone(),
                ))
            }
        };
    }

    builder
        .body(email.body.clone())
        .map_err(|err| NotifyError::Message(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::mail_settings;

    fn email(reply_to: Option<&str>) -> OutgoingEmail {
        OutgoingEmail {
            from: "info@ardurtechnology.com".into(),
            to: vec!["hr@example.com".into()],
            reply_to: reply_to.map(str::to_string),
            subject: "Contact Form: Hi".into(),
            body: "Hello".into(),
        }
    }

    #[test]
    fn message_carries_reply_to_header() {
        let message = build_message(&email(Some("ann@example.com"))).unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();

        assert!(raw.contains("Reply-To: ann@example.com"));
        assert!(raw.contains("To: hr@example.com"));
        assert!(raw.contains("Subject: Contact Form: Hi"));
    }

    #[test]
    fn loose_reply_to_is_kept_verbatim() {
        for address in [".a@example.com", "a.@example.com", "a@x..com"] {
            let message = build_message(&email(Some(address))).unwrap();
            let raw = String::from_utf8(message.formatted()).unwrap();

            assert!(raw.contains(&format!("Reply-To: {}\r\n", address)), "{address}");
        }
    }

    #[test]
    fn invalid_recipient_is_an_address_error() {
        let mut bad = email(None);
        bad.to = vec!["not-an-email".into()];

        let err = build_message(&bad).unwrap_err();
        assert!(matches!(err, NotifyError::Address { ref address, .. } if address == "not-an-email"));
    }

    #[test]
    fn unreachable_server_fails_the_send() {
        let mut settings = mail_settings();
        settings.server = "127.0.0.1".into();
        settings.port = 1;
        settings.use_tls = false;
        let mailer = SmtpMailer::new(&settings).unwrap();

        let err = mailer.send(&email(None)).unwrap_err();
        assert!(matches!(err, NotifyError::Transport(_)));
    }
}
