use axum::body::to_bytes;
use axum::Router;
use serde_json::{json, Value};
use todos::{application::todo_service::TodoServiceImpl, http::routing, http::routing::todos as todo_routes, infrastructure::memory_repo::InMemoryTodoRepository};

const PREFIX: &str = "http://localhost:8080/todos/";

fn app() -> Router {
    let service = TodoServiceImpl::new(InMemoryTodoRepository::new(), PREFIX);
    routing::app(todo_routes::router(todo_routes::AppState { service }))
}

#[tokio::test]
async fn acceptance_create_list_get_patch_delete() {
    let app = app();

    // create
    let res = request(&app, "POST", "/todos", Some(json!({ "title": "Test", "order": 1 }))).await;
    assert_eq!(res.status(), 201);
    let created = body_json(res).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["url"], format!("{PREFIX}{id}"));
    assert_eq!(created["order"], 1);
    assert!(created.get("completed").is_none());

    // list
    let res = request(&app, "GET", "/todos", None).await;
    assert_eq!(res.status(), 200);
    assert_eq!(body_json(res).await, json!([created.clone()]));

    // get
    let res = request(&app, "GET", &format!("/todos/{}", id), None).await;
    assert_eq!(res.status(), 200);
    assert_eq!(body_json(res).await, created);

    // patch
    let res = request(&app, "PATCH", &format!("/todos/{}", id), Some(json!({ "completed": true }))).await;
    assert_eq!(res.status(), 200);
    let patched = body_json(res).await;
    assert_eq!(patched["completed"], true);
    assert_eq!(patched["title"], "Test");

    // delete
    let res = request(&app, "DELETE", &format!("/todos/{}", id), None).await;
    assert_eq!(res.status(), 200);

    // get after delete is an empty success
    let res = request(&app, "GET", &format!("/todos/{}", id), None).await;
    assert_eq!(res.status(), 200);
    assert!(body_bytes(res).await.is_empty());

    // second delete is a client error
    let res = request(&app, "DELETE", &format!("/todos/{}", id), None).await;
    assert_eq!(res.status(), 400);
}

#[tokio::test]
async fn acceptance_patch_missing_and_invalid() {
    let app = app();

    let res = request(&app, "PATCH", &format!("/todos/{}", uuid::Uuid::new_v4()), Some(json!({ "title": "ghost" }))).await;
    assert_eq!(res.status(), 404);

    let res = request(&app, "POST", "/todos", Some(json!({ "title": "keep" }))).await;
    let created = body_json(res).await;
    let id = created["id"].as_str().unwrap().to_string();

    let res = request(&app, "PATCH", &format!("/todos/{}", id), Some(json!({ "title": "" }))).await;
    assert_eq!(res.status(), 400);
    assert_eq!(body_json(res).await["message"], "title must not be empty");

    let res = request(&app, "GET", &format!("/todos/{}", id), None).await;
    assert_eq!(body_json(res).await, created);

    let res = request(&app, "GET", "/todos", None).await;
    assert_eq!(body_json(res).await.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn acceptance_invalid_id_is_bad_request() {
    let app = app();
    for method in ["GET", "PATCH", "DELETE"] {
        let body = (method == "PATCH").then(|| json!({}));
        let res = request(&app, method, "/todos/not-a-uuid", body).await;
        assert_eq!(res.status(), 400, "{method}");
    }
}

#[tokio::test]
async fn acceptance_create_rejects_empty_title() {
    let app = app();
    let res = request(&app, "POST", "/todos", Some(json!({ "title": "" }))).await;
    assert_eq!(res.status(), 400);
    let res = request(&app, "GET", "/todos", None).await;
    assert_eq!(body_json(res).await, json!([]));
}

#[tokio::test]
async fn acceptance_delete_all() {
    let app = app();
    let mut ids = Vec::new();
    for n in 0..3 {
        let res = request(&app, "POST", "/todos", Some(json!({ "title": format!("{n}") }))).await;
        ids.push(body_json(res).await["id"].as_str().unwrap().to_string());
    }

    let res = request(&app, "DELETE", "/todos", None).await;
    assert_eq!(res.status(), 200);
    assert!(body_bytes(res).await.is_empty());

    let res = request(&app, "GET", "/todos", None).await;
    assert_eq!(body_json(res).await, json!([]));
    for id in ids {
        let res = request(&app, "GET", &format!("/todos/{}", id), None).await;
        assert!(body_bytes(res).await.is_empty());
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn acceptance_30_concurrent_creates() {
    let app = app();
    let handles: Vec<_> = (0..30)
        .map(|n| {
            let app = app.clone();
            tokio::spawn(async move {
                let res = request(&app, "POST", "/todos", Some(json!({ "title": n.to_string() }))).await;
                assert_eq!(res.status(), 201);
            })
        })
        .collect();
    for h in handles {
        h.await.unwrap();
    }

    let res = request(&app, "GET", "/todos", None).await;
    let items = body_json(res).await;
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 30);
    let mut ids: Vec<_> = items.iter().map(|t| t["id"].as_str().unwrap().to_string()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 30);
}

#[tokio::test]
async fn acceptance_root_and_health() {
    let app = app();
    let res = request(&app, "GET", "/", None).await;
    assert_eq!(res.status(), 200);
    assert_eq!(body_bytes(res).await, b"Hello!".as_slice());
    let res = request(&app, "GET", "/health", None).await;
    assert_eq!(body_bytes(res).await, b"ok".as_slice());
}

async fn body_bytes(res: hyper::Response<axum::body::Body>) -> Vec<u8> {
    to_bytes(res.into_body(), 1024 * 1024).await.unwrap().to_vec()
}

async fn body_json(res: hyper::Response<axum::body::Body>) -> Value {
    serde_json::from_slice(&body_bytes(res).await).unwrap()
}

async fn request(app: &Router, method: &str, path: &str, body: Option<Value>) -> hyper::Response<axum::body::Body> {
    use axum::body::Body;
    use axum::http::{Request, Method};
    use tower::ServiceExt;

    let req = Request::builder().method(Method::from_bytes(method.as_bytes()).unwrap()).uri(path);
    let req = match body {
        Some(json) => req.header("content-type", "application/json").body(Body::from(json.to_string())).unwrap(),
        None => req.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(req).await.unwrap()
}
