use std::sync::{Arc, mpsc};
use std::time::Duration;

use profile_browser::content::{ContentClient, HttpContentClient, PostId, Resource};
use profile_browser::core::action::{Action, Effect, update};
use profile_browser::core::cycle::UserId;
use profile_browser::core::modal::ModalState;
use profile_browser::core::render::{PostItem, TodoItem};
use profile_browser::core::state::App;
use profile_browser::orchestrator::{spawn_navigation_fetches, spawn_post_detail};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

fn user_json(id: u32, first: &str) -> serde_json::Value {
    json!({
        "id": id,
        "firstName": first,
        "lastName": "Medhurst",
        "maidenName": "Smitham",
        "age": 50,
        "email": format!("{}@example.com", first.to_lowercase()),
        "phone": "+63 791 675 8914",
        "image": format!("https://example.com/{id}.png"),
    })
}

fn posts_json(ids: &[u64]) -> serde_json::Value {
    let posts: Vec<_> = ids
        .iter()
        .map(|id| {
            json!({
                "id": id,
                "title": format!("Title {id}"),
                "body": "a".repeat(150),
                "userId": 30,
                "tags": ["history"],
                "views": 305,
            })
        })
        .collect();
    json!({ "posts": posts, "total": ids.len(), "skip": 0, "limit": 30 })
}

fn todos_json() -> serde_json::Value {
    json!({
        "todos": [
            { "id": 1, "todo": "Buy milk", "completed": true, "userId": 30 },
            { "id": 2, "todo": "Walk the dog", "completed": false, "userId": 30 },
        ],
        "total": 2, "skip": 0, "limit": 30
    })
}

async fn mount_get(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn drain(rx: &mpsc::Receiver<Action>, count: usize) -> Vec<Action> {
    (0..count)
        .map(|_| {
            rx.recv_timeout(Duration::from_secs(5))
                .expect("fetch result")
        })
        .collect()
}

// ============================================================================
// HttpContentClient Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_user_decodes_profile() {
    let mock_server = MockServer::start().await;
    mount_get(&mock_server, "/users/1", user_json(1, "Terry")).await;

    let client = HttpContentClient::new(mock_server.uri());
    let user = client.fetch_user(UserId::FIRST).await.unwrap();

    assert_eq!(user.id, 1);
    assert_eq!(user.full_name(), "Terry Medhurst");
    assert_eq!(user.image_url, "https://example.com/1.png");
}

#[tokio::test]
async fn test_fetch_posts_and_todos_unwrap_pages() {
    let mock_server = MockServer::start().await;
    mount_get(&mock_server, "/users/30/posts", posts_json(&[7, 8])).await;
    mount_get(&mock_server, "/users/30/todos", todos_json()).await;

    let client = HttpContentClient::new(mock_server.uri());
    let posts = client.fetch_posts(UserId::LAST).await.unwrap();
    let todos = client.fetch_todos(UserId::LAST).await.unwrap();

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, PostId(7));
    assert_eq!(posts[1].views, 305);
    assert_eq!(todos[0].text, "Buy milk");
    assert!(todos[0].completed);
    assert!(!todos[1].completed);
}

#[tokio::test]
async fn test_fetch_post_detail() {
    let mock_server = MockServer::start().await;
    mount_get(
        &mock_server,
        "/posts/7",
        json!({ "id": 7, "title": "Title 7", "body": "Full body", "views": 12 }),
    )
    .await;

    let client = HttpContentClient::new(mock_server.uri());
    let post = client.fetch_post(PostId(7)).await.unwrap();

    assert_eq!(post.title, "Title 7");
    assert_eq!(post.body, "Full body");
    assert_eq!(post.views, 12);
}

#[tokio::test]
async fn test_http_error_is_fetch_failed() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/5"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&mock_server)
        .await;

    let client = HttpContentClient::new(mock_server.uri());
    let five = UserId::new(5).unwrap();
    let err = client.fetch_user(five).await.unwrap_err();

    assert_eq!(err.resource, Resource::User(five));
    assert!(err.reason.contains("404"), "reason: {}", err.reason);
}

#[tokio::test]
async fn test_malformed_body_is_fetch_failed() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/3/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"todos\": nope"))
        .mount(&mock_server)
        .await;

    let client = HttpContentClient::new(mock_server.uri());
    let three = UserId::new(3).unwrap();
    let err = client.fetch_todos(three).await.unwrap_err();

    assert_eq!(err.resource, Resource::Todos(three));
    assert!(err.reason.starts_with("decode error"), "reason: {}", err.reason);
}

// ============================================================================
// End-to-end Navigation Tests
// ============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_previous_from_first_user_loads_user_30() {
    let mock_server = MockServer::start().await;
    for (route, body) in [
        ("/users/30", user_json(30, "Gust")),
        ("/users/30/posts", posts_json(&[101])),
        ("/users/30/todos", todos_json()),
    ] {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let mut app = App::new(Arc::new(HttpContentClient::new(mock_server.uri())));
    let (tx, rx) = mpsc::channel();

    let Effect::LoadUser(event) = update(&mut app, Action::PreviousUser) else {
        panic!("expected LoadUser");
    };
    assert_eq!(event.user_id, UserId::LAST);

    spawn_navigation_fetches(app.client.clone(), event, tx);
    for action in drain(&rx, 3) {
        update(&mut app, action);
    }

    assert_eq!(app.profile.posts_header, "Gust's Posts");
    assert_eq!(app.profile.todos_header, "Gust's To Dos");
    assert_eq!(app.posts.post_ids(), vec![PostId(101)]);
    match &app.posts.items[0] {
        PostItem::Post { excerpt, .. } => {
            assert_eq!(excerpt.chars().count(), 103);
            assert!(excerpt.ends_with("..."));
        }
        other => panic!("expected a post, got {other:?}"),
    }
    assert!(matches!(app.todos.items[0], TodoItem::Todo { completed: true, .. }));
    assert!(app.fetch_failures.is_empty());
    assert_eq!(app.status_message, "Gust Medhurst (30/30)");

    // Each resource was requested exactly once.
    mock_server.verify().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_failed_posts_leave_other_panels_working() {
    let mock_server = MockServer::start().await;
    mount_get(&mock_server, "/users/2", user_json(2, "Sheldon")).await;
    mount_get(&mock_server, "/users/2/todos", todos_json()).await;
    Mock::given(method("GET"))
        .and(path("/users/2/posts"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let mut app = App::new(Arc::new(HttpContentClient::new(mock_server.uri())));
    let (tx, rx) = mpsc::channel();

    let Effect::LoadUser(event) = update(&mut app, Action::NextUser) else {
        panic!("expected LoadUser");
    };
    spawn_navigation_fetches(app.client.clone(), event, tx);
    for action in drain(&rx, 3) {
        update(&mut app, action);
    }

    assert!(app.profile.view.is_some());
    assert_eq!(app.todos.items.len(), 2);
    assert!(app.posts.items.is_empty());
    assert_eq!(app.fetch_failures.len(), 1);
    assert_eq!(
        app.fetch_failures[0].resource,
        Resource::Posts(UserId::new(2).unwrap())
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_panels_fill_in_as_each_fetch_lands() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(user_json(2, "Sheldon"))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;
    mount_get(&mock_server, "/users/2/posts", posts_json(&[5])).await;
    mount_get(&mock_server, "/users/2/todos", todos_json()).await;

    let mut app = App::new(Arc::new(HttpContentClient::new(mock_server.uri())));
    let (tx, rx) = mpsc::channel();

    let Effect::LoadUser(event) = update(&mut app, Action::NextUser) else {
        panic!("expected LoadUser");
    };
    spawn_navigation_fetches(app.client.clone(), event, tx);

    // Posts and todos arrive while the profile request is still pending.
    for action in drain(&rx, 2) {
        update(&mut app, action);
    }
    assert_eq!(app.posts.post_ids(), vec![PostId(5)]);
    assert_eq!(app.todos.items.len(), 2);
    assert!(app.profile.view.is_none());

    for action in drain(&rx, 1) {
        update(&mut app, action);
    }
    assert_eq!(app.profile.posts_header, "Sheldon's Posts");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_clicked_post_opens_detail_overlay() {
    let mock_server = MockServer::start().await;
    mount_get(
        &mock_server,
        "/posts/9",
        json!({ "id": 9, "title": "Detail", "body": "Whole text", "views": 4 }),
    )
    .await;

    let mut app = App::new(Arc::new(HttpContentClient::new(mock_server.uri())));
    let (tx, rx) = mpsc::channel();

    let Effect::LoadPostDetail(ticket) = update(&mut app, Action::OpenPost(PostId(9))) else {
        panic!("expected LoadPostDetail");
    };
    assert!(!app.modal.is_mounted());

    spawn_post_detail(app.client.clone(), ticket, tx);
    for action in drain(&rx, 1) {
        update(&mut app, action);
    }

    match app.modal.state() {
        ModalState::Open(post) => {
            assert_eq!(post.title, "Detail");
            assert_eq!(post.views, 4);
        }
        other => panic!("expected Open, got {other:?}"),
    }
}
