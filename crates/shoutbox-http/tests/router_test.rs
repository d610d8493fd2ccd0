//! End-to-end router tests: raw request bytes in, full response buffers out.

use shoutbox_http::{RequestHandler, Router};
use shoutbox_store::ChatStore;

/// Run one request through a router, returning (status code, body).
fn send(router: &Router, raw: &str) -> (u16, String) {
    let text = String::from_utf8(router.handle(raw.as_bytes()).into_bytes()).unwrap();
    let (head, body) = text.split_once("\r\n\r\n").unwrap();
    assert!(head.starts_with("HTTP/1.0 "));
    assert!(head.contains("Content-Type: text/plain; charset=utf-8"));
    let code = head
        .split(' ')
        .nth(1)
        .and_then(|c| c.parse().ok())
        .unwrap();
    (code, body.to_string())
}

fn router() -> Router {
    Router::new(ChatStore::new())
}

#[test]
fn empty_store_lists_empty_transcript() {
    let (code, body) = send(&router(), "GET /chats HTTP/1.0\r\n");
    assert_eq!(code, 200);
    assert_eq!(body, "");
}

#[test]
fn post_returns_transcript_with_new_chat() {
    let r = router();
    let (code, body) = send(&r, "GET /post?user=Alice&message=Hello HTTP/1.0\r\n");
    assert_eq!(code, 200);

    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("[#1 "));
    assert!(lines[0].ends_with("Alice: Hello"));
}

#[test]
fn react_appends_reaction_line() {
    let r = router();
    send(&r, "GET /post?user=Alice&message=Hello HTTP/1.0\r\n");

    let (code, body) = send(&r, "GET /react?user=Bob&message=nice&id=1 HTTP/1.0\r\n");
    assert_eq!(code, 200);

    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("[#1 "));
    assert_eq!(lines[1], format!("{:28}(Bob)  nice", ""));
}

#[test]
fn react_to_absent_chat_is_a_server_error() {
    let r = router();
    send(&r, "GET /post?user=Alice&message=Hello HTTP/1.0\r\n");

    let (code, _) = send(&r, "GET /react?user=Bob&message=nice&id=2 HTTP/1.0\r\n");
    assert_eq!(code, 500);
}

#[test]
fn query_values_are_decoded_once() {
    let r = router();
    let (code, body) = send(&r, "GET /post?user=Alice&message=Hi+there%21 HTTP/1.0\r\n");
    assert_eq!(code, 200);
    assert!(body.contains("Alice: Hi there!"));

    // a literal percent survives: %25 decodes to % and stays %
    let (code, body) = send(&r, "GET /post?user=Bob&message=100%25 HTTP/1.0\r\n");
    assert_eq!(code, 200);
    assert!(body.contains("Bob: 100%"));
}

#[test]
fn missing_parameters_are_bad_requests() {
    let r = router();
    assert_eq!(send(&r, "GET /post HTTP/1.0\r\n").0, 400);
    assert_eq!(send(&r, "GET /post?user=Alice HTTP/1.0\r\n").0, 400);
    assert_eq!(send(&r, "GET /post?message=Hello HTTP/1.0\r\n").0, 400);
    assert_eq!(
        send(&r, "GET /react?user=Bob&message=nice HTTP/1.0\r\n").0,
        400
    );
    // nothing was stored along the way
    assert_eq!(send(&r, "GET /chats HTTP/1.0\r\n").1, "");
}

#[test]
fn invalid_ids_are_bad_requests() {
    let r = router();
    send(&r, "GET /post?user=Alice&message=Hello HTTP/1.0\r\n");

    for id in ["0", "-1", "abc", "1x"] {
        let raw = format!("GET /react?user=Bob&message=nice&id={id} HTTP/1.0\r\n");
        assert_eq!(send(&r, &raw).0, 400, "id={id}");
    }
}

#[test]
fn empty_field_values_are_server_errors() {
    // an empty value extracts fine but fails store validation
    let r = router();
    assert_eq!(send(&r, "GET /post?user=&message=Hello HTTP/1.0\r\n").0, 500);
    assert_eq!(send(&r, "GET /post?user=Alice&message= HTTP/1.0\r\n").0, 500);
}

#[test]
fn oversize_parameter_counts_as_missing() {
    let r = router();
    let raw = "GET /post?user=way-too-long-user-name&message=Hello HTTP/1.0\r\n";
    assert_eq!(send(&r, raw).0, 400);
}

#[test]
fn unknown_path_is_not_found() {
    let (code, body) = send(&router(), "GET /unknownpath HTTP/1.0\r\n");
    assert_eq!(code, 404);
    assert_eq!(body, "unknown path\n");
}

#[test]
fn non_get_method_is_rejected() {
    let (code, body) = send(&router(), "POST /post?user=a&message=b HTTP/1.0\r\n");
    assert_eq!(code, 405);
    assert_eq!(body, "only GET is supported\n");
}

#[test]
fn malformed_request_lines_are_bad_requests() {
    let r = router();
    assert_eq!(send(&r, "GET /chats HTTP/1.0").0, 400); // no terminator
    assert_eq!(send(&r, "GET /chats\r\n").0, 400); // two tokens
    assert_eq!(send(&r, "\r\n").0, 400);
}

#[test]
fn headers_and_body_are_ignored() {
    let raw = "GET /chats HTTP/1.0\r\nHost: example\r\nX-Junk: ?\r\n\r\nignored";
    let (code, _) = send(&router(), raw);
    assert_eq!(code, 200);
}
