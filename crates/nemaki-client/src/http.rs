//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks so the service modules stay focused on
//! request construction and response mapping:
//! - 401/403 → session cleared through the shared context, [`ClientError::Auth`]
//! - 404 → [`ClientError::NotFound`], session untouched
//! - other non-success → [`ClientError::Api`] with a message pulled from the body

use nemaki_auth::{SessionContext, classify};
use serde_json::Value;

use crate::error::ClientError;

const MAX_MESSAGE_LEN: usize = 300;

/// Check an HTTP response for error conditions.
///
/// Returns the response unchanged on success. The auth-error handler is
/// invoked at most once per response.
pub async fn check_response(
    resp: reqwest::Response,
    session: &SessionContext,
) -> Result<reqwest::Response, ClientError> {
    let status = resp.status().as_u16();
    if resp.status().is_success() {
        return Ok(resp);
    }

    let url = resp.url().to_string();
    if status == 404 {
        tracing::debug!(%url, "not found");
        return Err(ClientError::NotFound { url });
    }

    if let Some(failure) = classify(Some(status), "") {
        tracing::debug!(%url, status, "auth failure");
        session.handle_auth_error(failure);
        return Err(ClientError::Auth(failure));
    }

    let body = resp.text().await.unwrap_or_default();
    let message = extract_error_message(&body);

    tracing::debug!(%url, status, %message, "request failed");
    Err(ClientError::Api { status, message })
}

/// Pull a human-readable message out of an error body.
///
/// Understands `{message}`, problem details `{detail}`, `{error: "..."}`,
/// CMIS `{exception, message}` and NemakiWare
/// `{status: "failure", error: [{item: msg}, ...]}`. Anything
/// else is returned as (truncated) text.
#[must_use]
pub fn extract_error_message(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "(empty response body)".to_string();
    }
    let Ok(json) = serde_json::from_str::<Value>(trimmed) else {
        return truncate(trimmed);
    };

    let message = json
        .get("message")
        .or_else(|| json.get("detail"))
        .and_then(Value::as_str);
    if let Some(exception) = json.get("exception").and_then(Value::as_str) {
        return match message {
            Some(message) => format!("{exception}: {message}"),
            None => exception.to_string(),
        };
    }
    if let Some(message) = message {
        return message.to_string();
    }
    match json.get("error") {
        Some(Value::String(error)) => error.clone(),
        Some(Value::Array(errors)) if !errors.is_empty() => join_nemaki_errors(errors),
        _ => truncate(trimmed),
    }
}

/// Unwrap a NemakiWare REST envelope.
///
/// These endpoints answer 200 with `status: "failure"` for application
/// errors, so a success status alone does not mean success.
pub fn nemaki_result(value: Value) -> Result<Value, ClientError> {
    let failed = matches!(
        value.get("status").and_then(Value::as_str),
        Some("failure" | "error")
    );
    if !failed {
        return Ok(value);
    }

    let message = match value.get("error") {
        Some(Value::Array(errors)) if !errors.is_empty() => join_nemaki_errors(errors),
        _ => value
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("request failed")
            .to_string(),
    };
    Err(ClientError::Api {
        status: 200,
        message,
    })
}

fn join_nemaki_errors(errors: &[Value]) -> String {
    errors
        .iter()
        .map(|entry| match entry {
            Value::Object(map) => map
                .iter()
                .map(|(item, message)| match message {
                    Value::String(message) => format!("{item}: {message}"),
                    other => format!("{item}: {other}"),
                })
                .collect::<Vec<_>>()
                .join(", "),
            Value::String(message) => message.clone(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join("; ")
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_MESSAGE_LEN {
        text.to_string()
    } else {
        let head: String = text.chars().take(MAX_MESSAGE_LEN).collect();
        format!("{head}…")
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use nemaki_auth::{AuthFailure, Session, SessionStore};
    use nemaki_config::AuthScheme;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    fn counting_session() -> (SessionContext, Arc<AtomicUsize>) {
        let ctx = SessionContext::new(SessionStore::ephemeral(), AuthScheme::Bearer);
        ctx.establish(Session {
            username: "admin".into(),
            token: "t".into(),
            repository_id: "bedroom".into(),
            is_admin: true,
        })
        .unwrap();
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        ctx.set_listener(Arc::new(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        }));
        (ctx, calls)
    }

    #[tokio::test]
    async fn unauthorized_clears_session_once() {
        let (ctx, calls) = counting_session();
        let err = check_response(mock_response(401, ""), &ctx)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Auth(AuthFailure::Unauthorized)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(!ctx.is_authenticated());
    }

    #[tokio::test]
    async fn forbidden_is_an_auth_failure() {
        let (ctx, calls) = counting_session();
        let err = check_response(mock_response(403, ""), &ctx)
            .await
            .unwrap_err();
        assert_eq!(err.auth_failure(), Some(AuthFailure::Forbidden));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn not_found_keeps_session() {
        let (ctx, calls) = counting_session();
        let err = check_response(mock_response(404, "Unauthorized"), &ctx)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(ctx.is_authenticated());
    }

    #[tokio::test]
    async fn server_error_carries_cmis_message() {
        let (ctx, calls) = counting_session();
        let resp = mock_response(
            409,
            r#"{"exception":"updateConflict","message":"Change token mismatch"}"#,
        );
        let err = check_response(resp, &ctx).await.unwrap_err();
        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 409);
                assert_eq!(message, "updateConflict: Change token mismatch");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn success_passes_through() {
        let (ctx, _) = counting_session();
        assert!(check_response(mock_response(204, ""), &ctx).await.is_ok());
    }

    #[rstest]
    #[case::cmis_message(r#"{"message":"boom"}"#, "boom")]
    #[case::error_string(r#"{"error":"bad input"}"#, "bad input")]
    #[case::problem_detail(
        r#"{"title":"Forbidden","status":403,"detail":"Admin privileges required"}"#,
        "Admin privileges required"
    )]
    #[case::nemaki_error_list(
        r#"{"status":"failure","error":[{"url":"URL is required"}]}"#,
        "url: URL is required"
    )]
    #[case::plain_text("plain text", "plain text")]
    #[case::blank("  ", "(empty response body)")]
    fn message_extraction_shapes(#[case] body: &str, #[case] expected: &str) {
        assert_eq!(extract_error_message(body), expected);
    }

    #[test]
    fn nemaki_envelope_failure_becomes_api_error() {
        let ok = nemaki_result(json!({"status": "success", "deliveries": []})).unwrap();
        assert!(ok.get("deliveries").is_some());

        let err = nemaki_result(json!({
            "status": "failure",
            "error": [{"webhookService": "WebhookService not available"}]
        }))
        .unwrap_err();
        assert!(matches!(err, ClientError::Api { status: 200, ref message } if message.contains("not available")));
    }
}
