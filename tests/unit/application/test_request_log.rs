use crate::common::{MemoryLog, RecordingTransport, login_options};
use right_api::prelude::*;
use right_api::utils::id::request_id;
use std::fs;

#[tokio::test]
async fn test_injected_logger_receives_request_and_response() {
    let log = Arc::new(MemoryLog::default());
    let config = ClientConfig::new().with_request_logger(log.clone());
    let mut api = RightApi::new(config);
    api.login_with_transport(login_options(), RecordingTransport::ok())
        .unwrap();

    api.send("servers", "get", &Params::new()).await.unwrap();

    let lines = log.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("GET https://my.rightscale.com/api/acct/1234/servers"));
    assert!(lines[0].contains("api_version=1.0&x_api_version=1.0"));
    assert!(lines[1].contains("# => 200 OK | 2 bytes"));

    let id = &lines[0][1..lines[0].find(']').unwrap()];
    assert!(lines[1].starts_with(&format!("[{id}]")));
}

#[tokio::test]
async fn test_failed_call_is_logged() {
    let log = Arc::new(MemoryLog::default());
    let config = ClientConfig::new().with_request_logger(log.clone());
    let mut api = RightApi::new(config);
    let transport = RecordingTransport::replying(Err(AppError::RemoteCall {
        status: StatusCode::UNPROCESSABLE_ENTITY,
        body: "bad".to_string(),
    }));
    api.login_with_transport(login_options(), transport).unwrap();

    api.send("deployments", "post", &Params::new()).await.unwrap();

    let lines = log.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].contains("422 Unprocessable Entity"));
}

#[tokio::test]
async fn test_invalid_call_is_not_logged() {
    let log = Arc::new(MemoryLog::default());
    let config = ClientConfig::new().with_request_logger(log.clone());
    let mut api = RightApi::new(config);
    api.login_with_transport(login_options(), RecordingTransport::ok())
        .unwrap();

    api.send("", "get", &Params::new()).await.unwrap();

    assert!(log.lines().is_empty());
}

#[tokio::test]
async fn test_file_log_destination() {
    let path = std::env::temp_dir().join(format!("right-api-{}.log", request_id()));
    let destination = path.to_string_lossy().to_string();
    let config = ClientConfig::new().with_logging(Some(destination.as_str()));
    let mut api = RightApi::new(config);
    api.login_with_transport(login_options(), RecordingTransport::ok())
        .unwrap();

    api.send("servers", "get", &Params::new()).await.unwrap();
    api.send("clouds", "get", &Params::new()).await.unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].contains("/servers"));
    assert!(lines[2].contains("/clouds"));
    fs::remove_file(&path).unwrap();
}

#[test]
fn test_unwritable_log_destination_fails_login() {
    let destination = std::env::temp_dir()
        .join(request_id())
        .join("missing")
        .join("rest.log");
    let config = ClientConfig::new()
        .with_logging(Some(&*destination.to_string_lossy()))
        .with_error_policy(ErrorPolicy::strict());
    let mut api = RightApi::new(config);

    let result = api.login_with_transport(login_options(), RecordingTransport::ok());

    match result {
        Err(AppError::Io(e)) => assert!(e.to_string().contains("cannot open request log")),
        other => panic!("Expected Io error, got {other:?}"),
    }
    assert!(!api.is_logged_in());
}

#[test]
fn test_logging_disabled_by_default() {
    let mut api = RightApi::new(ClientConfig::new());
    api.login_with_transport(login_options(), RecordingTransport::ok())
        .unwrap();

    assert!(api.session().unwrap().request_log().is_none());
}
