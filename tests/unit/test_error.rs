use right_api::error::AppError;
use reqwest::StatusCode;
use std::error::Error;

#[test]
fn test_app_error_display_configuration() {
    let error = AppError::Configuration("no account given".to_string());
    assert_eq!(error.to_string(), "configuration error: no account given");
}

#[test]
fn test_app_error_display_invalid_argument() {
    let error = AppError::InvalidArgument("no API call given".to_string());
    assert_eq!(error.to_string(), "invalid argument: no API call given");
}

#[test]
fn test_app_error_display_remote_call() {
    let error = AppError::RemoteCall {
        status: StatusCode::NOT_FOUND,
        body: String::new(),
    };
    assert_eq!(error.to_string(), "remote call failed: 404 Not Found");

    let error = AppError::RemoteCall {
        status: StatusCode::UNPROCESSABLE_ENTITY,
        body: "nickname taken".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "remote call failed: 422 Unprocessable Entity: nickname taken"
    );
}

#[test]
fn test_app_error_display_not_logged_in() {
    assert_eq!(AppError::NotLoggedIn.to_string(), "not logged in");
    assert!(AppError::NotLoggedIn.is_remote());
    assert!(AppError::NotLoggedIn.status().is_none());
}

#[test]
fn test_app_error_from_io() {
    let io_error = std::io::Error::other("test");
    let app_error: AppError = io_error.into();

    match &app_error {
        AppError::Io(_) => (),
        _ => panic!("Expected Io error"),
    }
    assert_eq!(app_error.to_string(), "io error: test");
    assert!(!app_error.is_remote());
    assert!(app_error.source().is_some());
}

#[test]
fn test_app_error_clone_keeps_variant() {
    let error: AppError = std::io::Error::other("disk").into();
    let cloned = error.clone();
    assert_eq!(error.to_string(), cloned.to_string());
}
