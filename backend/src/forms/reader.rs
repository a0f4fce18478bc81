use actix_multipart::{Multipart, MultipartError};
use actix_web::error::PayloadError;
use actix_web::http::header;
use actix_web::web::{Bytes, BytesMut};
use actix_web::{HttpMessage, HttpRequest};
use common::model::submission::{FormSubmission, UploadedFile};
use futures_util::{Stream, StreamExt};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("request body exceeds {limit} bytes")]
    PayloadTooLarge { limit: usize },
    #[error("multipart error: {0}")]
    Multipart(#[from] MultipartError),
    #[error("payload error: {0}")]
    Payload(#[from] PayloadError),
    #[error("malformed form body: {0}")]
    Urlencoded(#[from] serde_urlencoded::de::Error),
    #[error("unsupported content type '{0}'")]
    UnsupportedContentType(String),
}

/// Reads a submitted form into a `FormSubmission`.
///
/// Accepts `multipart/form-data` and `application/x-www-form-urlencoded` bodies.
/// The first value of a repeated field wins. Only the multipart part named
/// `file_field` that carries a filename is kept as the uploaded file. Bodies larger
/// than `limit` are refused, first by `Content-Length` and then while streaming.
pub async fn read_submission<S>(
    req: &HttpRequest,
    payload: S,
    limit: usize,
    file_field: &str,
) -> Result<FormSubmission, FormError>
where
    S: Stream<Item = Result<Bytes, PayloadError>> + Unpin + 'static,
{
    let declared = req
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<usize>().ok());
    if declared.is_some_and(|length| length > limit) {
        return Err(FormError::PayloadTooLarge { limit });
    }

    match req.content_type() {
        "multipart/form-data" => read_multipart(req, payload, limit, file_field).await,
        "application/x-www-form-urlencoded" | "" => read_urlencoded(payload, limit).await,
        other => Err(FormError::UnsupportedContentType(other.to_string())),
    }
}

async fn read_multipart<S>(
    req: &HttpRequest,
    payload: S,
    limit: usize,
    file_field: &str,
) -> Result<FormSubmission, FormError>
where
    S: Stream<Item = Result<Bytes, PayloadError>> + 'static,
{
    let mut multipart = Multipart::new(req.headers(), payload);
    let mut submission = FormSubmission::default();
    let mut received = 0usize;

    while let Some(item) = multipart.next().await {
        let mut field = item?;
        let (name, file_name) = match field.content_disposition() {
            Some(cd) => (
                cd.get_name().map(str::to_string),
                cd.get_filename().map(str::to_string),
            ),
            None => (None, None),
        };

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk?;
            received += chunk.len();
            if received > limit {
                return Err(FormError::PayloadTooLarge { limit });
            }
            bytes.extend_from_slice(&chunk);
        }

        match (name, file_name) {
            (Some(name), Some(file_name)) if name == file_field => {
                if submission.file.is_none() {
                    submission.file = Some(UploadedFile { file_name, bytes });
                }
            }
            (Some(name), None) => {
                submission
                    .fields
                    .entry(name)
                    .or_insert_with(|| String::from_utf8_lossy(&bytes).into_owned());
            }
            _ => {}
        }
    }

    Ok(submission)
}

async fn read_urlencoded<S>(mut payload: S, limit: usize) -> Result<FormSubmission, FormError>
where
    S: Stream<Item = Result<Bytes, PayloadError>> + Unpin,
{
    let mut body = BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk?;
        if body.len() + chunk.len() > limit {
            return Err(FormError::PayloadTooLarge { limit });
        }
        body.extend_from_slice(&chunk);
    }

    let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(&body)?;
    let mut submission = FormSubmission::default();
    for (name, value) in pairs {
        submission.fields.entry(name).or_insert(value);
    }
    Ok(submission)
}
