//! Drives `GraphQlClient` against a one-shot local HTTP server to pin down
//! how status codes and `errors[]` map onto `ApiError`.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use backoffice_client::{AdminConfig, ApiError, ContentApi, GraphQlClient, ListQuery, Operation};
use backoffice_model::{Banner, Domain};
use url::Url;

/// Answer a single request with `status` and `body`; yields the raw request.
fn serve_once(status: &str, body: &str) -> (Url, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = Url::parse(&format!("http://{}/graphql", listener.local_addr().unwrap())).unwrap();
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream);
        let mut request = String::new();
        let mut content_length = 0;
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            if let Some((name, value)) = line.split_once(':')
                && name.eq_ignore_ascii_case("content-length")
            {
                content_length = value.trim().parse().unwrap();
            }
            let end = line == "\r\n";
            request.push_str(&line);
            if end {
                break;
            }
        }
        let mut body = vec![0; content_length];
        reader.read_exact(&mut body).unwrap();
        request.push_str(&String::from_utf8(body).unwrap());
        reader.get_mut().write_all(response.as_bytes()).unwrap();
        request
    });
    (url, handle)
}

fn client(url: Url, token: Option<&str>) -> GraphQlClient {
    GraphQlClient::with_endpoint(url, &AdminConfig::default(), token).unwrap()
}

#[tokio::test]
async fn first_graphql_error_wins() {
    let (url, server) = serve_once(
        "200 OK",
        r#"{"data":null,"errors":[{"message":"Slug taken"},{"message":"second"}]}"#,
    );
    let err = client(url, None)
        .list::<Banner>(&ListQuery::new(10))
        .await
        .unwrap_err();
    server.join().unwrap();

    assert!(matches!(&err, ApiError::GraphQl { message } if message == "Slug taken"));
    assert_eq!(err.user_message(Domain::Banners, Operation::Create), "Slug taken");
}

#[tokio::test]
async fn unauthenticated_message_means_signed_out() {
    let (url, server) = serve_once(
        "200 OK",
        r#"{"errors":[{"message":"Unauthenticated."}]}"#,
    );
    let err = client(url, Some("stale"))
        .list::<Banner>(&ListQuery::new(10))
        .await
        .unwrap_err();
    let request = server.join().unwrap();

    assert!(matches!(err, ApiError::Unauthorized));
    assert!(err.is_auth());
    assert!(request.to_ascii_lowercase().contains("authorization: bearer stale"));
}

#[tokio::test]
async fn server_errors_fall_back_to_the_operation_message() {
    let (url, server) = serve_once("500 Internal Server Error", "{}");
    let err = client(url, None)
        .list::<Banner>(&ListQuery::new(10))
        .await
        .unwrap_err();
    server.join().unwrap();

    assert!(matches!(err, ApiError::Http { status: 500 }));
    assert_eq!(err.user_message(Domain::Banners, Operation::Load), "Failed to load banners");
}

#[tokio::test]
async fn bad_request_without_errors_is_an_http_error() {
    let (url, server) = serve_once("400 Bad Request", r#"{"data":null}"#);
    let err = client(url, None)
        .delete::<Banner>("1")
        .await
        .unwrap_err();
    server.join().unwrap();

    assert!(matches!(err, ApiError::Http { status: 400 }));
    assert_eq!(err.user_message(Domain::Banners, Operation::Delete), "Failed to delete banner");
}

#[tokio::test]
async fn list_page_decodes_with_the_tenant_in_the_variables() {
    let (url, server) = serve_once(
        "200 OK",
        r#"{"data":{"banners":{"data":[{"id":"1","title":"Hello","is_active":true}],
            "paginatorInfo":{"currentPage":1,"lastPage":1,"total":1,"hasMorePages":false}}}}"#,
    );
    let page = client(url, None)
        .list::<Banner>(&ListQuery::scoped(10, Some("site-a")))
        .await
        .unwrap();
    let request = server.join().unwrap();

    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].title, "Hello");
    assert!(!page.paginator.has_more_pages);
    assert!(request.contains(r#""application_id":"site-a""#));
}
