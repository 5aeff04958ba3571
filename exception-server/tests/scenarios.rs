mod harness;

use harness::TestServer;
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;

const ROOT_CAUSE: &str = "errors.New error message";

async fn get(server: &TestServer, path: &str) -> (StatusCode, String, String) {
    let resp = server.client().get(server.url(path)).send().await.unwrap();
    let status = resp.status();
    let content_type = resp
        .headers()
        .get(CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_owned())
        .unwrap_or_default();
    let body = resp.text().await.unwrap();
    (status, content_type, body)
}

#[tokio::test]
async fn ok_returns_hello_world() {
    let server = TestServer::start().await.unwrap();

    let (status, content_type, body) = get(&server, "/ok").await;

    assert_eq!(status, 200);
    assert_eq!(content_type, "application/json");
    assert_eq!(body, r#""hello, world!""#);
}

#[tokio::test]
async fn error_chains_decode_to_rendered_strings() {
    let server = TestServer::start().await.unwrap();
    let cases = [
        (
            "/simpleStackTraceError",
            format!("simpleError error message: {ROOT_CAUSE}"),
        ),
        (
            "/nestedStackTraceError",
            format!("outerError error message: simpleError error message: {ROOT_CAUSE}"),
        ),
        ("/nestedNoMessageStackTraceError", ROOT_CAUSE.to_owned()),
        (
            "/interfaceFunctionStackTraceError",
            format!("interface method error: {ROOT_CAUSE}"),
        ),
        ("/nativeError", ROOT_CAUSE.to_owned()),
    ];

    for (path, expected) in cases {
        let resp = server.client().get(server.url(path)).send().await.unwrap();
        assert_eq!(resp.status(), 500, "{path}");
        assert_eq!(resp.headers()[CONTENT_TYPE], "application/json", "{path}");
        let decoded: String = resp.json().await.unwrap();
        assert_eq!(decoded, expected, "{path}");
    }
}

#[tokio::test]
async fn collapsed_chain_matches_native_error_byte_for_byte() {
    let server = TestServer::start().await.unwrap();

    let (_, _, native) = get(&server, "/nativeError").await;
    let (_, _, collapsed) = get(&server, "/nestedNoMessageStackTraceError").await;

    assert_eq!(native, collapsed);
}

#[tokio::test]
async fn panic_is_recovered_as_plain_text() {
    let server = TestServer::start().await.unwrap();

    let (status, content_type, body) = get(&server, "/panic").await;

    assert_eq!(status, 500);
    assert!(content_type.starts_with("text/plain"), "{content_type}");
    assert_eq!(body, "PANIC: panicking in the server");
    assert!(!body.contains(ROOT_CAUSE));
}

#[tokio::test]
async fn panic_does_not_disturb_concurrent_requests() {
    let server = TestServer::start().await.unwrap();
    let paths = ["/ok", "/panic", "/nestedStackTraceError", "/panic", "/nativeError"];

    let responses = get_concurrently(&server, &paths).await;

    for (path, (status, _, body)) in paths.iter().zip(&responses) {
        match *path {
            "/ok" => assert_eq!((status.as_u16(), body.as_str()), (200, r#""hello, world!""#)),
            "/panic" => assert_eq!(body, "PANIC: panicking in the server"),
            _ => {
                assert_eq!(*status, 500);
                assert!(body.contains(ROOT_CAUSE), "{path}: {body}");
            }
        }
    }

    let (status, _, _) = get(&server, "/ok").await;
    assert_eq!(status, 200);
}

async fn get_concurrently(
    server: &TestServer,
    paths: &[&str],
) -> Vec<(StatusCode, String, String)> {
    let mut handles = Vec::with_capacity(paths.len());
    for path in paths {
        let client = server.client().clone();
        let url = server.url(path);
        handles.push(tokio::spawn(async move {
            let resp = client.get(url).send().await.unwrap();
            let status = resp.status();
            let content_type = resp
                .headers()
                .get(CONTENT_TYPE)
                .map(|v| v.to_str().unwrap().to_owned())
                .unwrap_or_default();
            (status, content_type, resp.text().await.unwrap())
        }));
    }
    let mut responses = Vec::with_capacity(handles.len());
    for handle in handles {
        responses.push(handle.await.unwrap());
    }
    responses
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let server = TestServer::start().await.unwrap();

    let (status, _, _) = get(&server, "/missing").await;

    assert_eq!(status, 404);
}

#[tokio::test]
async fn options_is_served_like_any_other_method() {
    let server = TestServer::start().await.unwrap();

    let resp = server
        .client()
        .request(reqwest::Method::OPTIONS, server.url("/nativeError"))
        .header("Origin", "http://localhost")
        .header("Access-Control-Request-Method", "GET")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 500);
    assert_eq!(resp.headers()[CONTENT_TYPE], "application/json");
    assert_eq!(resp.text().await.unwrap(), format!("\"{ROOT_CAUSE}\""));
}
