use right_api::model::http::{format_params, join_url, merge_version_params};
use right_api::prelude::*;

#[test]
fn test_verb_round_trip_names() {
    for verb in Verb::ALL {
        assert_eq!(verb.to_string().parse::<Verb>().unwrap(), verb);
        assert_eq!(
            verb.to_string().to_uppercase().parse::<Verb>().unwrap(),
            verb
        );
    }
}

#[test]
fn test_verb_methods() {
    assert_eq!(Verb::Get.as_method(), reqwest::Method::GET);
    assert_eq!(Verb::Delete.as_method(), reqwest::Method::DELETE);
    assert!(Verb::Post.has_body());
    assert!(Verb::Put.has_body());
    assert!(!Verb::Get.has_body());
    assert!(!Verb::Delete.has_body());
    assert_eq!(Verb::default(), Verb::Get);
}

#[test]
fn test_verb_error_message() {
    let err = "patch".parse::<Verb>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid argument: invalid action \"patch\": get | put | post | delete only"
    );
}

#[test]
fn test_merge_version_params_into_empty() {
    let merged = merge_version_params("1.0", &Params::new());
    assert_eq!(format_params(&merged), "api_version=1.0&x_api_version=1.0");
}

#[test]
fn test_join_url_keeps_query() {
    assert_eq!(
        join_url(
            "https://my.rightscale.com/api/acct/1234",
            "servers?filter=nickname=web"
        ),
        "https://my.rightscale.com/api/acct/1234/servers?filter=nickname=web"
    );
}
