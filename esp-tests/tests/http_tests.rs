//! Integration Tests für die HTTP-Antwort-Formatierung
//!
//! Diese Tests laufen auf dem Host (x86_64); die Formatierung ist
//! pure Logic über heapless-Strings

use esp_core::http::{ROOT_BODY, decode_component, not_found_body, query_args, split_uri};
use heapless::String;

const BODY_SIZE: usize = 512;

// ============================================================================
// Tests: Root-Antwort
// ============================================================================

#[test]
fn test_root_body_is_exact_greeting() {
    assert_eq!(ROOT_BODY, "hello from esp8266!\r\n");
}

// ============================================================================
// Tests: split_uri()
// ============================================================================

#[test]
fn test_split_uri_root() {
    assert_eq!(split_uri("/"), ("/", None));
}

#[test]
fn test_split_uri_with_query() {
    assert_eq!(split_uri("/foo?a=1&b=2"), ("/foo", Some("a=1&b=2")));
}

#[test]
fn test_split_uri_root_with_query() {
    // Query am Root-Pfad: Routing sieht weiterhin "/"
    assert_eq!(split_uri("/?x=y"), ("/", Some("x=y")));
}

#[test]
fn test_split_uri_trailing_question_mark() {
    assert_eq!(split_uri("/x?"), ("/x", Some("")));
}

// ============================================================================
// Tests: query_args()
// ============================================================================

#[test]
fn test_query_args_preserves_request_order() {
    let pairs: Vec<(&str, &str)> = query_args("b=2&a=1").collect();
    assert_eq!(pairs, vec![("b", "2"), ("a", "1")]);
}

#[test]
fn test_query_args_empty_query_has_no_pairs() {
    assert_eq!(query_args("").count(), 0);
}

#[test]
fn test_query_args_skips_empty_segments() {
    let pairs: Vec<(&str, &str)> = query_args("a=1&&b=2").collect();
    assert_eq!(pairs, vec![("a", "1"), ("b", "2")]);
}

#[test]
fn test_query_args_name_without_value() {
    let pairs: Vec<(&str, &str)> = query_args("flag&a=1").collect();
    assert_eq!(pairs, vec![("flag", ""), ("a", "1")]);
}

// ============================================================================
// Tests: decode_component()
// ============================================================================

#[test]
fn test_decode_plain_passthrough() {
    let s: String<32> = decode_component("hello");
    assert_eq!(s.as_str(), "hello");
}

#[test]
fn test_decode_plus_as_space() {
    let s: String<32> = decode_component("a+b");
    assert_eq!(s.as_str(), "a b");
}

#[test]
fn test_decode_percent_escape() {
    let s: String<32> = decode_component("%41%2Fb");
    assert_eq!(s.as_str(), "A/b");
}

#[test]
fn test_decode_invalid_escape_verbatim() {
    let s: String<32> = decode_component("100%");
    assert_eq!(s.as_str(), "100%");
}

#[test]
fn test_decode_truncates_on_overflow() {
    let s: String<4> = decode_component("abcdefgh");
    assert_eq!(s.as_str(), "abcd");
}

// ============================================================================
// Tests: not_found_body()
// ============================================================================

#[test]
fn test_not_found_first_line_states_uri_and_method() {
    let body: String<BODY_SIZE> = not_found_body("/foo", "GET", Some("a=1&b=2"));
    let first_line = body.lines().next().unwrap();
    assert_eq!(first_line, "URI: /foo Method: GET");
}

#[test]
fn test_not_found_lists_count_and_arguments_in_order() {
    let body: String<BODY_SIZE> = not_found_body("/foo", "GET", Some("a=1&b=2"));
    assert_eq!(
        body.as_str(),
        "URI: /foo Method: GET\nArguments: 2\n a: 1\n b: 2\n"
    );
}

#[test]
fn test_not_found_without_query() {
    let body: String<BODY_SIZE> = not_found_body("/missing", "POST", None);
    assert_eq!(body.as_str(), "URI: /missing Method: POST\nArguments: 0\n");
}

#[test]
fn test_not_found_decodes_argument_values() {
    let body: String<BODY_SIZE> = not_found_body("/q", "GET", Some("msg=hello+world%21"));
    assert_eq!(
        body.as_str(),
        "URI: /q Method: GET\nArguments: 1\n msg: hello world!\n"
    );
}

#[test]
fn test_not_found_method_is_verbatim() {
    let body: String<BODY_SIZE> = not_found_body("/x", "DELETE", None);
    assert!(body.starts_with("URI: /x Method: DELETE\n"));
}
