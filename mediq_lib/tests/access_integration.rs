use mediq_lib::mediq_api::Client;
use mediq_lib::{Access, Authorizer, Redirect, RequestContext, RouteGuard, SessionResolver};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn authorizer(uri: &str) -> Authorizer {
    Authorizer::new(SessionResolver::new(Client::with_base_url(uri).unwrap()))
}

#[tokio::test]
async fn unauthenticated_caller_is_redirected_before_any_resource_fetch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    // The guarded page's data endpoint must never be hit.
    Mock::given(method("GET"))
        .and(path("/appointments"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let authorizer = authorizer(&mock_server.uri());
    let access = authorizer
        .authorize(RouteGuard::Staff, &RequestContext::anonymous())
        .await;
    assert!(matches!(access, Access::Redirect(Redirect::SignIn)));

    let access = authorizer
        .authorize(RouteGuard::Patient, &RequestContext::anonymous())
        .await;
    assert!(matches!(access, Access::Redirect(Redirect::SignIn)));
}

#[tokio::test]
async fn staff_guard_grants_doctor() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 200,
            "data": { "id": 3, "username": "dr.tanaka", "roles": ["Doctor"] }
        })))
        .mount(&mock_server)
        .await;

    let authorizer = authorizer(&mock_server.uri());
    let access = authorizer
        .authorize(RouteGuard::Staff, &RequestContext::with_session("tok"))
        .await;
    match access {
        Access::Granted(identity) => assert_eq!(identity.username, "dr.tanaka"),
        Access::Redirect(r) => panic!("unexpected redirect to {}", r.path()),
    }
}

#[tokio::test]
async fn staff_guard_sends_patient_to_own_detail_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 200,
            "data": { "id": 42, "username": "amara", "roles": ["User"] }
        })))
        .mount(&mock_server)
        .await;

    let authorizer = authorizer(&mock_server.uri());
    let access = authorizer
        .authorize(RouteGuard::Staff, &RequestContext::with_session("tok"))
        .await;
    match access {
        Access::Redirect(redirect) => assert_eq!(redirect.path(), "/patients/42"),
        Access::Granted(_) => panic!("patient must not pass the staff guard"),
    }
}
