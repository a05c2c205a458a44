use reqwest::Response;

use super::responses;

pub const CONTENT_TYPE_TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// Every tracker answer, failures included, is a `200 OK` text response.
pub async fn assert_ok_text_plain(response: Response) -> Vec<u8> {
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        CONTENT_TYPE_TEXT_PLAIN
    );

    response.bytes().await.unwrap().to_vec()
}

pub async fn assert_failure_reason_contains(response: Response, failure: &str) {
    let body = assert_ok_text_plain(response).await;

    let error = responses::error::decode(&body);

    assert!(
        error.failure_reason.contains(failure),
        "failure reason \"{}\" should contain \"{failure}\"",
        error.failure_reason
    );
}

pub async fn assert_missing_query_params_for_announce_request_error_response(response: Response) {
    assert_failure_reason_contains(response, "missing param").await;
}

pub async fn assert_bad_announce_request_error_response(response: Response, failure: &str) {
    assert_failure_reason_contains(response, &format!("Cannot parse query params for announce request: {failure}")).await;
}

pub async fn assert_bad_scrape_request_error_response(response: Response, failure: &str) {
    assert_failure_reason_contains(response, &format!("Cannot parse query params for scrape request: {failure}")).await;
}

pub async fn assert_could_not_find_remote_address_on_x_forwarded_for_header_error_response(response: Response) {
    assert_failure_reason_contains(response, "Error resolving peer IP: missing or invalid the right most X-Forwarded-For IP").await;
}
