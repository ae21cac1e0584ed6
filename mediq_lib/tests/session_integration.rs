use mediq_lib::mediq_api::Client;
use mediq_lib::{RequestContext, ResolveFailure, SessionResolver};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn resolver(uri: &str) -> SessionResolver {
    SessionResolver::new(Client::with_base_url(uri).unwrap())
}

fn identity_body(id: i64, roles: &[&str]) -> serde_json::Value {
    json!({
        "status": 200,
        "data": { "id": id, "username": format!("user{}", id), "roles": roles }
    })
}

#[tokio::test]
async fn resolve_returns_identity() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("cookie", "sid=tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(identity_body(42, &["Doctor"])))
        .mount(&mock_server)
        .await;

    let resolver = resolver(&mock_server.uri());
    let identity = resolver
        .resolve(&RequestContext::with_session("tok-1"))
        .await
        .unwrap();
    assert_eq!(identity.id, 42);
}

#[tokio::test]
async fn resolve_folds_rejection_to_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let resolver = resolver(&mock_server.uri());
    let ctx = RequestContext::with_session("stale");
    assert!(resolver.resolve(&ctx).await.is_none());
    assert_eq!(
        resolver.resolve_detailed(&ctx).await,
        Err(ResolveFailure::Unauthenticated)
    );
}

#[tokio::test]
async fn resolve_without_user_record_is_unauthenticated() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": 200})))
        .mount(&mock_server)
        .await;

    let resolver = resolver(&mock_server.uri());
    let ctx = RequestContext::with_session("tok-1");
    assert!(resolver.resolve(&ctx).await.is_none());
    assert_eq!(
        resolver.resolve_detailed(&ctx).await,
        Err(ResolveFailure::Unauthenticated)
    );
}

#[tokio::test]
async fn resolve_keeps_upstream_status_internally() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let resolver = resolver(&mock_server.uri());
    let ctx = RequestContext::with_session("tok-1");
    assert!(resolver.resolve(&ctx).await.is_none());
    assert_eq!(
        resolver.resolve_detailed(&ctx).await,
        Err(ResolveFailure::Upstream(500))
    );
}

#[tokio::test]
async fn resolve_flags_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let resolver = resolver(&mock_server.uri());
    assert_eq!(
        resolver
            .resolve_detailed(&RequestContext::with_session("tok-1"))
            .await,
        Err(ResolveFailure::Malformed)
    );
}

#[tokio::test]
async fn login_yields_working_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "sid=fresh-tok; Path=/; HttpOnly; SameSite=Lax"),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("cookie", "sid=fresh-tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(identity_body(7, &["User"])))
        .mount(&mock_server)
        .await;

    let resolver = resolver(&mock_server.uri());
    let ctx = resolver.login("jonas", "hunter2").await.unwrap();
    assert_eq!(ctx.session(), Some("fresh-tok"));
    let identity = resolver.resolve(&ctx).await.unwrap();
    assert_eq!(identity.id, 7);
}

#[tokio::test]
async fn logout_204_clears_session_and_later_resolves_are_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("cookie", "sid=tok-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(identity_body(9, &["User"])))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .and(header("cookie", "sid=tok-9"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    // Cookie-less identity calls are rejected upstream.
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let resolver = resolver(&mock_server.uri());
    let mut ctx = RequestContext::with_session("tok-9");
    assert!(resolver.resolve(&ctx).await.is_some());

    resolver.logout(&mut ctx).await.unwrap();
    assert_eq!(ctx.session(), None);
    assert!(resolver.resolve(&ctx).await.is_none());
}

#[tokio::test]
async fn logout_without_204_keeps_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let resolver = resolver(&mock_server.uri());
    let mut ctx = RequestContext::with_session("tok-9");
    resolver.logout(&mut ctx).await.unwrap();
    assert_eq!(ctx.session(), Some("tok-9"));
}
