use mockito::Matcher;
use nemaki_auth::{AuthError, SessionContext, SessionStore};
use nemaki_config::AuthScheme;
use pretty_assertions::assert_eq;
use serde_json::json;

fn context(dir: &tempfile::TempDir) -> SessionContext {
    SessionContext::new(
        SessionStore::file(dir.path().join("session.json")),
        AuthScheme::Bearer,
    )
}

#[tokio::test]
async fn login_persists_session_and_logout_clears_it() {
    let mut server = mockito::Server::new_async().await;
    let login = server
        .mock("POST", "/core/api/v1/cmis/auth/login")
        .match_body(Matcher::Json(json!({
            "userId": "admin",
            "password": "secret",
            "repositoryId": "bedroom",
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "token": "abc",
                "tokenType": "Bearer",
                "expiresIn": 3600,
                "userId": "admin",
                "isAdmin": true,
                "groups": ["GROUP_EVERYONE"],
                "repositoryId": "bedroom",
            })
            .to_string(),
        )
        .create_async()
        .await;
    let logout = server
        .mock("POST", "/core/api/v1/cmis/auth/logout")
        .match_header("authorization", "Bearer abc")
        .with_status(200)
        .create_async()
        .await;

    let tmp = tempfile::TempDir::new().unwrap();
    let ctx = context(&tmp);
    let http = reqwest::Client::new();

    let session = ctx
        .login(&http, &server.url(), "admin", "secret", "bedroom")
        .await
        .unwrap();
    assert_eq!(session.token, "abc");
    assert!(session.is_admin);
    assert_eq!(ctx.store().load(), Some(session));

    ctx.logout(&http, &server.url()).await.unwrap();
    assert!(!ctx.is_authenticated());
    assert!(ctx.store().load().is_none());

    login.assert_async().await;
    logout.assert_async().await;
}

#[tokio::test]
async fn rejected_credentials_map_to_invalid_credentials() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/core/api/v1/cmis/auth/login")
        .with_status(401)
        .create_async()
        .await;

    let tmp = tempfile::TempDir::new().unwrap();
    let ctx = context(&tmp);
    let err = ctx
        .login(&reqwest::Client::new(), &server.url(), "admin", "wrong", "bedroom")
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::InvalidCredentials));
    assert!(!ctx.is_authenticated());
}

#[tokio::test]
async fn logout_clears_local_state_even_if_server_fails() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/core/api/v1/cmis/auth/logout")
        .with_status(500)
        .create_async()
        .await;

    let tmp = tempfile::TempDir::new().unwrap();
    let ctx = context(&tmp);
    ctx.establish(nemaki_auth::Session {
        username: "admin".into(),
        token: "abc".into(),
        repository_id: "bedroom".into(),
        is_admin: true,
    })
    .unwrap();

    ctx.logout(&reqwest::Client::new(), &server.url())
        .await
        .unwrap();
    assert!(!ctx.is_authenticated());
}
