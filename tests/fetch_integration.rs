// SPDX-License-Identifier: MPL-2.0
//! End-to-end fetch tests against a throwaway local HTTP server.

use kitty_viewer::config::Config;
use kitty_viewer::i18n::fluent::I18n;
use kitty_viewer::kitty::fetch::{build_client, MAX_BODY_BYTES};
use kitty_viewer::kitty::{fetch_kitty, Dimensions, FetchError, MaxDimension, Transition};
use kitty_viewer::ui::kitty::{self, KittyView};
use iced::futures::StreamExt;
use iced_runtime::task::into_stream;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const SEARCH_PATH: &str = "/v1/images/search";

/// Replaced with the server's own `host:port` in response bodies.
const BASE_TOKEN: &str = "{base}";

#[derive(Clone)]
struct Route {
    path: &'static str,
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
    /// Content-Length to announce instead of the real body length.
    declared_len: Option<u64>,
}

impl Route {
    fn json(path: &'static str, body: &str) -> Self {
        Self {
            path,
            status: 200,
            content_type: "application/json",
            body: body.as_bytes().to_vec(),
            declared_len: None,
        }
    }

    fn png(path: &'static str) -> Self {
        Self {
            path,
            status: 200,
            content_type: "image/png",
            body: b"\x89PNG\r\n\x1a\nnot-really-a-png".to_vec(),
            declared_len: None,
        }
    }

    fn status(path: &'static str, status: u16) -> Self {
        Self {
            path,
            status,
            content_type: "text/plain",
            body: b"nope".to_vec(),
            declared_len: None,
        }
    }

    fn announcing(mut self, len: u64) -> Self {
        self.declared_len = Some(len);
        self
    }
}

/// Serves `routes` until the test runtime shuts down. Every connection
/// answers one request and closes. Unknown paths get a 404.
async fn spawn_server(routes: Vec<Route>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind local listener");
    let addr = listener.local_addr().expect("listener address");

    let routes: Vec<Route> = routes
        .into_iter()
        .map(|mut route| {
            if route.content_type == "application/json" {
                route.body = String::from_utf8_lossy(&route.body)
                    .replace(BASE_TOKEN, &addr.to_string())
                    .into_bytes();
            }
            route
        })
        .collect();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let routes = routes.clone();
            tokio::spawn(async move {
                let mut buf = vec![0u8; 8192];
                let mut read = 0;
                while read < buf.len() {
                    let n = socket.read(&mut buf[read..]).await.unwrap_or(0);
                    if n == 0 {
                        break;
                    }
                    read += n;
                    if buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                        break;
                    }
                }

                let request = String::from_utf8_lossy(&buf[..read]);
                let path = request.split_whitespace().nth(1).unwrap_or("/").to_string();
                let route = routes
                    .iter()
                    .find(|r| r.path == path)
                    .cloned()
                    .unwrap_or_else(|| Route::status("", 404));

                let head = format!(
                    "HTTP/1.1 {} X\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                    route.status,
                    route.content_type,
                    route.declared_len.unwrap_or(route.body.len() as u64)
                );
                let _ = socket.write_all(head.as_bytes()).await;
                let _ = socket.write_all(&route.body).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    addr
}

fn search_body(width: u32, height: u32) -> String {
    format!(r#"[{{"id":"abc","url":"http://{BASE_TOKEN}/cat.png","width":{width},"height":{height}}}]"#)
}

fn endpoint(addr: SocketAddr) -> String {
    format!("http://{addr}{SEARCH_PATH}")
}

fn props() -> kitty::Props {
    kitty::Props {
        loading_image: PathBuf::from("loading.gif"),
        endpoint: "unused".to_string(),
        max_dimension: MaxDimension::default(),
    }
}

fn english() -> I18n {
    I18n::new(Some("en-US".to_string()), &Config::default())
}

async fn fetch(endpoint: String) -> Result<kitty_viewer::kitty::Kitty, FetchError> {
    let client = build_client().expect("client");
    fetch_kitty(client, endpoint).await
}

/// Runs a real fetch and feeds the outcome into a fresh component.
async fn fetch_into_component(endpoint: String) -> (kitty::State, Transition) {
    let outcome = fetch(endpoint).await;
    let mut state = kitty::State::without_fetch(props());
    let transition = state.update(kitty::Message::Fetched(outcome));
    (state, transition)
}

#[tokio::test]
async fn landscape_kitty_renders_600_by_400() {
    let addr = spawn_server(vec![
        Route::json(SEARCH_PATH, &search_body(1200, 800)),
        Route::png("/cat.png"),
    ])
    .await;

    let (state, transition) = fetch_into_component(endpoint(addr)).await;
    assert_eq!(transition, Transition::Loaded);

    let view = state.view_model(&english());
    assert!(matches!(view, KittyView::Loaded(_)));
    let img = view.image().expect("kitty image");
    assert_eq!(img.src, format!("http://{addr}/cat.png"));
    assert_eq!(img.size, Dimensions::new(600, 400));
    assert_eq!(img.alt, "A kitty");
}

#[tokio::test]
async fn portrait_kitty_renders_400_by_600() {
    let addr = spawn_server(vec![
        Route::json(SEARCH_PATH, &search_body(800, 1200)),
        Route::png("/cat.png"),
    ])
    .await;

    let (state, transition) = fetch_into_component(endpoint(addr)).await;
    assert_eq!(transition, Transition::Loaded);

    let view = state.view_model(&english());
    let img = view.image().expect("kitty image");
    assert_eq!(img.size, Dimensions::new(400, 600));
}

#[tokio::test]
async fn unreachable_endpoint_shows_apology() {
    // Bind then drop to get a port nobody listens on.
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        listener.local_addr().expect("address")
    };

    let outcome = fetch(endpoint(addr)).await;
    assert!(matches!(outcome, Err(FetchError::Transport(_))), "{outcome:?}");

    let (state, transition) = fetch_into_component(endpoint(addr)).await;
    assert_eq!(transition, Transition::Failed);
    let view = state.view_model(&english());
    assert!(view.image().is_none());
    assert_eq!(view.text(), Some("Sorry! No kitty for you :-("));
}

#[tokio::test]
async fn empty_search_result_is_an_error() {
    let addr = spawn_server(vec![Route::json(SEARCH_PATH, "[]")]).await;

    let outcome = fetch(endpoint(addr)).await;
    assert!(matches!(outcome, Err(FetchError::Empty)), "{outcome:?}");

    let (state, _) = fetch_into_component(endpoint(addr)).await;
    assert!(state.lifecycle().is_error());
}

#[tokio::test]
async fn server_error_status_is_an_error() {
    let addr = spawn_server(vec![Route::status(SEARCH_PATH, 503)]).await;

    let outcome = fetch(endpoint(addr)).await;
    assert_eq!(outcome.err(), Some(FetchError::Status(503)));
}

#[tokio::test]
async fn malformed_json_is_an_error() {
    let addr = spawn_server(vec![Route::json(SEARCH_PATH, r#"{"oops": true"#)]).await;

    let outcome = fetch(endpoint(addr)).await;
    assert!(matches!(outcome, Err(FetchError::Parse(_))), "{outcome:?}");
}

#[tokio::test]
async fn missing_image_is_a_download_error() {
    // Search succeeds but nothing is served at /cat.png.
    let addr = spawn_server(vec![Route::json(SEARCH_PATH, &search_body(640, 480))]).await;

    let outcome = fetch(endpoint(addr)).await;
    assert!(matches!(outcome, Err(FetchError::Download(_))), "{outcome:?}");
}

#[tokio::test]
async fn oversized_search_response_is_rejected() {
    let addr = spawn_server(vec![
        Route::json(SEARCH_PATH, &search_body(640, 480)).announcing(MAX_BODY_BYTES + 1),
    ])
    .await;

    let outcome = fetch(endpoint(addr)).await;
    assert_eq!(
        outcome.err(),
        Some(FetchError::TooLarge {
            limit: MAX_BODY_BYTES
        })
    );
}

#[tokio::test]
async fn oversized_image_is_a_download_error() {
    let addr = spawn_server(vec![
        Route::json(SEARCH_PATH, &search_body(640, 480)),
        Route::png("/cat.png").announcing(MAX_BODY_BYTES + 1),
    ])
    .await;

    let outcome = fetch(endpoint(addr)).await;
    assert!(matches!(outcome, Err(FetchError::Download(_))), "{outcome:?}");
}

#[tokio::test]
async fn dropping_the_component_cancels_the_fetch() {
    // Accepts connections and never answers them.
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("address");
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let (state, task) = kitty::State::new(kitty::Props {
        endpoint: endpoint(addr),
        ..props()
    });
    assert!(state.is_fetching());
    let mut stream = into_stream(task).expect("fetch task produces a stream");

    let before_drop = tokio::time::timeout(Duration::from_millis(200), stream.next()).await;
    assert!(before_drop.is_err(), "fetch completed against a silent server");

    drop(state);

    let after_drop = tokio::time::timeout(Duration::from_secs(5), stream.next())
        .await
        .expect("stream ends once the component is dropped");
    assert!(after_drop.is_none(), "a message was delivered after teardown");
}
