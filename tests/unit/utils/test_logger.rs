use right_api::prelude::*;
use right_api::utils::id::request_id;
use std::fs;

#[test]
fn test_setup_logger_is_idempotent() {
    setup_logger();
    setup_logger();
}

#[test]
fn test_writer_request_log_appends() {
    let path = std::env::temp_dir().join(format!("right-api-writer-{}.log", request_id()));
    let destination = path.to_string_lossy().to_string();
    let params = Params::new();

    for _ in 0..2 {
        let log = WriterRequestLog::open(&destination).unwrap();
        assert_eq!(log.destination(), destination);
        log.log_request(&RequestEvent {
            id: "ID",
            verb: Verb::Delete,
            url: "https://my.rightscale.com/api/acct/1/servers/2",
            params: &params,
        });
    }

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "[ID] DELETE https://my.rightscale.com/api/acct/1/servers/2\n\
         [ID] DELETE https://my.rightscale.com/api/acct/1/servers/2\n"
    );
    fs::remove_file(&path).unwrap();
}

#[test]
fn test_writer_request_log_standard_streams() {
    assert_eq!(WriterRequestLog::open("stdout").unwrap().destination(), "stdout");
    assert_eq!(WriterRequestLog::open("stderr").unwrap().destination(), "stderr");
}
