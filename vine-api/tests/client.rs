use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::json;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use vine_api::config::{ClientConfig, DeviceToken, SESSION_HEADER};
use vine_api::error::{MissingCredential, TransportError};
use vine_api::request::{Method, PageOptions, Request};
use vine_api::session::Settings;
use vine_api::transport::{HttpRequest, HttpResponse, Transport};
use vine_api::{CallbackExt, VineClient, VineError};

const AUTH_BODY: &str = r#"{"code":"","data":{"username":"alice","userId":906345798374325453,"key":"906345798374325453-0f1e2d"},"success":true,"error":""}"#;
const OK_EMPTY: &str = r#"{"code":"","data":null,"success":true,"error":""}"#;

enum Reply {
    Body(u16, &'static str),
    Fail(&'static str),
}

/// Records every request and answers from a queue of canned replies.
#[derive(Clone, Default)]
struct MockTransport {
    requests: Arc<Mutex<Vec<HttpRequest>>>,
    replies: Arc<Mutex<VecDeque<Reply>>>,
    delay: Option<Duration>,
}

impl MockTransport {
    fn reply(self, status: u16, body: &'static str) -> Self {
        self.replies.lock().push_back(Reply::Body(status, body));
        self
    }

    fn fail(self, message: &'static str) -> Self {
        self.replies.lock().push_back(Reply::Fail(message));
        self
    }

    fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().push(request);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match self.replies.lock().pop_front() {
            Some(Reply::Body(status, body)) => Ok(HttpResponse {
                status,
                body: body.to_owned(),
            }),
            Some(Reply::Fail(message)) => Err(message.into()),
            None => Ok(HttpResponse {
                status: 200,
                body: OK_EMPTY.to_owned(),
            }),
        }
    }
}

fn config() -> ClientConfig {
    ClientConfig::default().with_base_url("http://vine.test")
}

fn alice() -> Settings {
    Settings::new("key-alice", "906345798374325453", "alice")
}

fn client(transport: &MockTransport, settings: Option<Settings>) -> VineClient<MockTransport> {
    VineClient::with_transport(config(), transport.clone(), settings)
}

#[tokio::test]
async fn send_resolves_envelope_data() {
    let transport = MockTransport::default().reply(200, r#"{"data":{"x":1}}"#);
    let data = client(&transport, None).send("timelines/popular").await.unwrap();
    assert_eq!(data, json!({ "x": 1 }));

    let requests = transport.requests();
    let req = &requests[0];
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.url, "http://vine.test/timelines/popular");
}

#[tokio::test]
async fn send_keeps_large_identifiers_exact() {
    let transport =
        MockTransport::default().reply(200, r#"{"data":{"userId":123456789012345678}}"#);
    let data = client(&transport, None).send("users/me").await.unwrap();
    assert_eq!(data, json!({ "userId": "123456789012345678" }));
}

#[tokio::test]
async fn envelope_error_fails_regardless_of_status() {
    let transport = MockTransport::default().reply(200, r#"{"data":null,"error":"bad"}"#);
    let err = client(&transport, None).send("users/me").await.unwrap_err();
    assert_eq!(err.api_error(), Some(&json!("bad")));
}

#[tokio::test]
async fn error_status_without_envelope_error_still_resolves() {
    let transport = MockTransport::default().reply(500, r#"{"data":{"ok":true}}"#);
    let data = client(&transport, None).send("users/me").await.unwrap();
    assert_eq!(data, json!({ "ok": true }));
}

#[tokio::test]
async fn transport_failure_is_reported_as_transport_error() {
    let transport = MockTransport::default().fail("connection refused");
    let err = client(&transport, None).send("users/me").await.unwrap_err();
    assert!(matches!(err, VineError::Transport(ref cause) if cause.to_string() == "connection refused"));
}

#[tokio::test]
async fn malformed_body_is_reported_as_parse_error() {
    let transport = MockTransport::default().reply(502, "<html>Bad Gateway</html>");
    let err = client(&transport, None).send("users/me").await.unwrap_err();
    assert!(matches!(err, VineError::Parse(_)));
}

#[tokio::test]
async fn session_header_follows_session_state() {
    let transport = MockTransport::default();
    let authed = client(&transport, Some(alice()));
    authed.send("users/me").await.unwrap();
    let anonymous = client(&transport, None);
    anonymous.send("users/me").await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].header(SESSION_HEADER), Some("key-alice"));
    assert!(requests[1]
        .headers
        .iter()
        .all(|(name, _)| !name.eq_ignore_ascii_case(SESSION_HEADER)));
}

#[tokio::test]
async fn empty_credentials_fail_without_any_request() {
    let transport = MockTransport::default();
    let client = client(&transport, None);

    let err = client.login("", "pw").err().unwrap();
    assert!(matches!(
        err,
        VineError::InvalidCredentials(MissingCredential::Username)
    ));
    let err = client.login("alice", "").err().unwrap();
    assert!(matches!(
        err,
        VineError::InvalidCredentials(MissingCredential::Password)
    ));

    assert!(transport.requests().is_empty());
    assert!(!client.session().is_authenticated());
}

#[tokio::test]
async fn login_authorizes_session_from_response() {
    let transport = MockTransport::default().reply(200, AUTH_BODY);
    let client = client(&transport, None);
    assert_eq!(client.session().credential(), None);

    client.login("alice@example.com", "hunter2").unwrap().await.unwrap();

    let session = client.session();
    assert_eq!(session.credential(), Some("906345798374325453-0f1e2d"));
    assert_eq!(session.user_id(), Some("906345798374325453"));
    assert_eq!(session.username(), Some("alice"));

    let requests = transport.requests();
    let req = &requests[0];
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.url, "http://vine.test/users/authenticate");
    let token = DeviceToken::default().resolve("alice@example.com", "hunter2");
    assert_eq!(
        req.form,
        vec![
            ("username".to_owned(), "alice@example.com".to_owned()),
            ("password".to_owned(), "hunter2".to_owned()),
            ("deviceToken".to_owned(), token),
        ]
    );
}

#[tokio::test]
async fn login_sends_fixed_device_token_when_configured() {
    let transport = MockTransport::default().reply(200, AUTH_BODY);
    let config = config().with_device_token(DeviceToken::Fixed("device-1".into()));
    let client = VineClient::with_transport(config, transport.clone(), None);
    client.login("alice", "pw").unwrap().await.unwrap();

    let requests = transport.requests();
    let form = &requests[0].form;
    assert!(form.contains(&("deviceToken".to_owned(), "device-1".to_owned())));
}

#[tokio::test]
async fn failed_login_leaves_session_untouched() {
    let transport = MockTransport::default().reply(
        200,
        r#"{"code":"101","data":"","success":false,"error":"That username or password is incorrect."}"#,
    );
    let client = client(&transport, Some(alice()));
    let err = client.login("alice", "wrong").unwrap().await.err().unwrap();

    assert!(matches!(err, VineError::Api { code: Some(101), .. }));
    assert_eq!(client.session().settings(), Some(&alice()));
}

#[tokio::test]
async fn incomplete_login_response_leaves_session_untouched() {
    let transport =
        MockTransport::default().reply(200, r#"{"data":{"key":"","userId":1,"username":"bob"}}"#);
    let client = client(&transport, Some(alice()));
    let err = client.login("bob", "pw").unwrap().await.err().unwrap();

    assert!(matches!(err, VineError::Other(_)));
    assert_eq!(client.session().settings(), Some(&alice()));
}

#[tokio::test]
async fn logout_clears_session_after_acknowledgement() {
    let transport = MockTransport::default().reply(200, OK_EMPTY);
    let client = client(&transport, Some(alice()));
    client.logout().await.unwrap();

    assert!(!client.session().is_authenticated());
    let requests = transport.requests();
    let req = &requests[0];
    assert_eq!(req.method, Method::Delete);
    assert_eq!(req.url, "http://vine.test/users/authenticate");
    assert_eq!(req.header(SESSION_HEADER), Some("key-alice"));
    assert!(req.form.is_empty());
}

#[tokio::test]
async fn failed_logout_leaves_session_untouched() {
    let transport = MockTransport::default()
        .reply(200, r#"{"data":null,"error":"nope"}"#)
        .fail("timed out");
    let client = client(&transport, Some(alice()));

    assert!(matches!(
        client.logout().await.err().unwrap(),
        VineError::Api { .. }
    ));
    assert_eq!(client.session().settings(), Some(&alice()));

    assert!(matches!(
        client.logout().await.err().unwrap(),
        VineError::Transport(_)
    ));
    assert_eq!(client.session().settings(), Some(&alice()));
}

#[tokio::test]
async fn connect_with_logs_in() {
    let transport = MockTransport::default().reply(200, AUTH_BODY);
    let client = VineClient::connect_with(config(), transport, "alice", "pw")
        .await
        .unwrap();
    assert_eq!(client.session().username(), Some("alice"));
    assert_eq!(client.transport().requests().len(), 1);
}

#[tokio::test]
async fn concurrent_sends_do_not_share_headers() {
    let transport = MockTransport {
        delay: Some(Duration::from_millis(20)),
        ..MockTransport::default()
    };
    let client = client(&transport, None);

    let mut first = Request::get("users/me").header("X-Trace", "one");
    let second = Request::get("timelines/graph").header("X-Trace", "two");

    let in_flight = client.send(first.clone());
    first.headers.push(("X-Trace".to_owned(), "mutated".to_owned()));
    let (a, b) = tokio::join!(in_flight, client.send(second));
    a.unwrap();
    b.unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    let trace = |url: &str| {
        requests
            .iter()
            .find(|r| r.url.ends_with(url))
            .and_then(|r| r.header("X-Trace"))
            .map(str::to_owned)
    };
    assert_eq!(trace("users/me").as_deref(), Some("one"));
    assert_eq!(trace("timelines/graph").as_deref(), Some("two"));
}

#[tokio::test]
async fn callback_sees_the_same_outcome() {
    let transport = MockTransport::default()
        .reply(200, r#"{"data":{"x":1}}"#)
        .reply(200, r#"{"error":"bad"}"#);
    let client = client(&transport, None);

    let seen = Arc::new(Mutex::new(Vec::new()));
    let log = seen.clone();
    let ok = client
        .send("a")
        .with_callback(move |err, value| log.lock().push((err.is_some(), value.cloned())))
        .await
        .unwrap();
    assert_eq!(ok, json!({ "x": 1 }));

    let log = seen.clone();
    let err = client
        .send("b")
        .with_callback(move |err, value| log.lock().push((err.is_some(), value.cloned())))
        .await;
    assert!(err.is_err());

    assert_eq!(
        *seen.lock(),
        vec![(false, Some(json!({ "x": 1 }))), (true, None)]
    );
}

#[tokio::test]
async fn listing_endpoints_pass_page_options_verbatim() {
    let transport = MockTransport::default().reply(
        200,
        r#"{"data":{"count":1,"nextPage":4,"records":[{"postId":906345798374325453,"userId":934940633704046592,"username":"bob"}]}}"#,
    );
    let client = client(&transport, None);
    let page = client
        .user_timeline("934940633704046592", &PageOptions::new().page(3).size(0))
        .await
        .unwrap();

    assert_eq!(page.records[0].post_id, "906345798374325453");
    assert_eq!(page.records[0].user_id, "934940633704046592");
    assert_eq!(page.next_page, Some(4));

    let requests = transport.requests();
    let req = &requests[0];
    assert_eq!(req.url, "http://vine.test/timelines/users/934940633704046592");
    assert_eq!(
        req.query,
        vec![
            ("page".to_owned(), "3".to_owned()),
            ("size".to_owned(), "0".to_owned()),
        ]
    );
}

#[tokio::test]
async fn like_and_unlike_use_post_and_delete() {
    let transport = MockTransport::default()
        .reply(200, r#"{"data":{"likeId":1012345678901234567,"postId":906345798374325453}}"#)
        .reply(200, OK_EMPTY);
    let client = client(&transport, Some(alice()));

    let receipt = client.like("906345798374325453").await.unwrap();
    assert_eq!(receipt.like_id, "1012345678901234567");
    client.unlike("906345798374325453").await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(requests[1].method, Method::Delete);
    for req in &requests {
        assert_eq!(req.url, "http://vine.test/posts/906345798374325453/likes");
    }
}

#[tokio::test]
async fn endpoint_paths_match_catalog() {
    let transport = MockTransport::default();
    let client = client(&transport, Some(alice()));
    let none = PageOptions::default();

    // Every reply is an empty envelope, so typed results fail to decode; only
    // the outgoing requests matter here.
    let _ = client.me().await;
    let _ = client.user("1").await;
    let _ = client.followers("1", &none).await;
    let _ = client.following("1", &none).await;
    let _ = client.search_users("jo hn", &none).await;
    let _ = client.notifications("1", &none).await;
    let _ = client.user_likes("1", &none).await;
    let _ = client.post("2").await;
    let _ = client.tag_timeline("cats", &none).await;
    let _ = client.popular(&none).await;
    let _ = client.promoted(&none).await;
    let _ = client.graph(&none).await;
    let _ = client.venue_timeline("3", &none).await;
    let _ = client.channel_popular("4", &none).await;
    let _ = client.channel_recent("4", &none).await;
    let _ = client.comments("2", &none).await;
    let _ = client.likes("2", &none).await;
    let _ = client.reposts("2", &none).await;
    let _ = client.search_tags("cat", &none).await;
    let _ = client.trending_tags(&none).await;

    let paths: Vec<String> = transport
        .requests()
        .iter()
        .map(|r| {
            assert_eq!(r.method, Method::Get);
            r.url.trim_start_matches("http://vine.test/").to_owned()
        })
        .collect();
    assert_eq!(
        paths,
        [
            "users/me",
            "users/profiles/1",
            "users/1/followers",
            "users/1/following",
            "users/search/jo%20hn",
            "users/1/notifications",
            "timelines/users/1/likes",
            "timelines/posts/2",
            "timelines/tags/cats",
            "timelines/popular",
            "timelines/promoted",
            "timelines/graph",
            "timelines/venues/3",
            "timelines/channels/4/popular",
            "timelines/channels/4/recent",
            "posts/2/comments",
            "posts/2/likes",
            "posts/2/reposts",
            "tags/search/cat",
            "tags/trending",
        ]
    );
}

#[tokio::test]
async fn empty_post_timeline_is_not_found() {
    let transport = MockTransport::default().reply(200, r#"{"data":{"count":0,"records":[]}}"#);
    let err = client(&transport, None).post("42").await.unwrap_err();
    assert!(matches!(err, VineError::Other(ref msg) if msg == "post not found: 42"));
}
