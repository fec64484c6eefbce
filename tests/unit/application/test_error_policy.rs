use crate::common::{RecordingTransport, logged_in, with_transport};
use right_api::prelude::*;

#[tokio::test]
async fn test_remote_failure_is_swallowed_by_default() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/acct/1234/servers/1")
        .match_query(mockito::Matcher::Any)
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let mut api = logged_in(&server.url(), ErrorPolicy::default());
    let result = api.send("servers/1", "get", &Params::new()).await;

    assert!(matches!(result, Ok(None)));
    match api.code() {
        Some(AppError::RemoteCall { status, body }) => {
            assert_eq!(*status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body, "boom");
        }
        other => panic!("Unexpected error: {other:?}"),
    }
    assert!(api.headers().is_empty());
    assert!(api.time() >= 0.0);
}

#[tokio::test]
async fn test_remote_failure_is_rethrown() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/acct/1234/servers/1")
        .match_query(mockito::Matcher::Any)
        .with_status(404)
        .create_async()
        .await;

    let policy = ErrorPolicy {
        print_errors: true,
        rethrow_errors: true,
    };
    let mut api = logged_in(&server.url(), policy);
    let result = api.send("servers/1", "get", &Params::new()).await;

    let err = result.expect_err("should be Err");
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    assert!(err.is_remote());
    assert_eq!(api.code().and_then(AppError::status), Some(StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn test_network_failure_is_recorded() {
    let transport = RecordingTransport::replying(Err(AppError::RemoteCall {
        status: StatusCode::BAD_GATEWAY,
        body: String::new(),
    }));
    let mut api = with_transport(transport.clone(), ErrorPolicy {
        print_errors: false,
        rethrow_errors: false,
    });

    let result = api.send("servers", "get", &Params::new()).await;

    assert!(matches!(result, Ok(None)));
    assert_eq!(transport.requests().len(), 1);
    assert!(matches!(api.code(), Some(AppError::RemoteCall { .. })));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    crate::common::disable_proxy_for_test();
    let config = ClientConfig::new()
        .with_base_url("http://127.0.0.1:9/api/acct/")
        .with_timeout(5)
        .with_error_policy(ErrorPolicy::strict());
    let mut api = RightApi::new(config);
    api.login(crate::common::login_options()).unwrap();

    let result = api.send("servers", "get", &Params::new()).await;

    assert!(matches!(result, Err(AppError::Network(_))));
    assert!(matches!(api.code(), Some(AppError::Network(_))));
}

#[tokio::test]
async fn test_try_send_ignores_policy() {
    let transport = RecordingTransport::ok();
    let mut api = with_transport(transport, ErrorPolicy::default());

    let result = api.try_send("", "get", &Params::new()).await;

    assert!(matches!(result, Err(AppError::InvalidArgument(_))));
    assert!(matches!(api.code(), Some(AppError::InvalidArgument(_))));
}

#[tokio::test]
async fn test_policy_change_applies_immediately() {
    let transport = RecordingTransport::ok();
    let mut api = with_transport(transport, ErrorPolicy::default());

    assert!(matches!(
        api.send("servers", "patch", &Params::new()).await,
        Ok(None)
    ));

    api.config_mut().error_policy.rethrow_errors = true;
    assert!(matches!(
        api.send("servers", "patch", &Params::new()).await,
        Err(AppError::InvalidArgument(_))
    ));
}
