use super::*;
use axum::{http::StatusCode, routing::get, Router};
use shared::error::FetchErrorKind;
use tokio::net::TcpListener;

const TWO_USERS: &str = r#"[
    {
        "id": 1,
        "name": "Leanne Graham",
        "email": "Sincere@april.biz",
        "address": {
            "street": "Kulas Light",
            "suite": "Apt. 556",
            "city": "Gwenborough",
            "zipcode": "92998-3874",
            "geo": { "lat": "-37.3159", "lng": "81.1496" }
        }
    },
    {
        "id": 2,
        "name": "Ervin Howell",
        "email": "Shanna@melissa.tv",
        "address": {
            "street": "Victor Plains",
            "suite": "Suite 879",
            "city": "Wisokyburgh",
            "zipcode": "90566-7771"
        }
    }
]"#;

async fn users_ok() -> (StatusCode, &'static str) {
    (StatusCode::OK, TWO_USERS)
}

async fn users_empty() -> (StatusCode, &'static str) {
    (StatusCode::OK, "[]")
}

async fn users_missing() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "not found")
}

async fn users_garbage() -> (StatusCode, &'static str) {
    (StatusCode::OK, "<html>maintenance</html>")
}

async fn users_slow() -> (StatusCode, &'static str) {
    tokio::time::sleep(Duration::from_secs(2)).await;
    (StatusCode::OK, "[]")
}

async fn spawn_directory_server() -> anyhow::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let app = Router::new()
        .route("/users", get(users_ok))
        .route("/empty", get(users_empty))
        .route("/missing", get(users_missing))
        .route("/garbage", get(users_garbage))
        .route("/slow", get(users_slow));
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(format!("http://{addr}"))
}

async fn refused_endpoint() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    Url::parse(&format!("http://{addr}/users")).expect("url")
}

fn client_for(base: &str, path: &str) -> UserDirectoryClient {
    let settings = ClientSettings {
        endpoint: Url::parse(&format!("{base}{path}")).expect("url"),
        request_timeout: Duration::from_secs(5),
    };
    UserDirectoryClient::new(&settings).expect("client")
}

#[tokio::test]
async fn fetch_users_returns_records_in_response_order() {
    let base = spawn_directory_server().await.expect("spawn server");
    let users = client_for(&base, "/users")
        .fetch_users()
        .await
        .expect("fetch users");

    let names: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Leanne Graham", "Ervin Howell"]);
    assert_eq!(users[1].address.zipcode, "90566-7771");
}

#[tokio::test]
async fn fetch_users_maps_not_found_to_http_error() {
    let base = spawn_directory_server().await.expect("spawn server");
    let err = client_for(&base, "/missing")
        .fetch_users()
        .await
        .expect_err("404 must fail");

    assert_eq!(err, FetchError::Http { status: 404 });
    assert_eq!(err.kind(), FetchErrorKind::Http);
}

#[tokio::test]
async fn fetch_users_maps_non_json_body_to_parse_error() {
    let base = spawn_directory_server().await.expect("spawn server");
    let err = client_for(&base, "/garbage")
        .fetch_users()
        .await
        .expect_err("garbage must fail");

    assert!(matches!(err, FetchError::Parse { .. }), "got {err:?}");
}

#[tokio::test]
async fn fetch_users_maps_connection_refused_to_transport_error() {
    let client = UserDirectoryClient::with_http_client(Client::new(), refused_endpoint().await);
    let err = client.fetch_users().await.expect_err("refused must fail");

    assert!(matches!(err, FetchError::Transport { .. }), "got {err:?}");
    assert_eq!(err.kind(), FetchErrorKind::TransportOrParse);
}

#[tokio::test]
async fn fetch_users_times_out_as_transport_error() {
    let base = spawn_directory_server().await.expect("spawn server");
    let http = Client::builder()
        .timeout(Duration::from_millis(200))
        .build()
        .expect("http client");
    let endpoint = Url::parse(&format!("{base}/slow")).expect("url");
    let client = UserDirectoryClient::with_http_client(http, endpoint);

    let err = client.fetch_users().await.expect_err("slow must time out");
    assert!(matches!(err, FetchError::Transport { .. }), "got {err:?}");
}

#[tokio::test]
async fn controller_renders_one_card_per_fetched_user() {
    let base = spawn_directory_server().await.expect("spawn server");
    let client = client_for(&base, "/users");
    let mut controller = UserListController::new();

    controller.load_users(&client).await;

    let view = controller.view();
    assert_eq!(view.status, StatusView::Hidden);
    assert_eq!(
        view.cards,
        vec![
            UserCard {
                name: "Leanne Graham".to_string(),
                email: "Sincere@april.biz".to_string(),
                address: "Kulas Light, Apt. 556, Gwenborough, 92998-3874".to_string(),
            },
            UserCard {
                name: "Ervin Howell".to_string(),
                email: "Shanna@melissa.tv".to_string(),
                address: "Victor Plains, Suite 879, Wisokyburgh, 90566-7771".to_string(),
            },
        ]
    );
}

#[tokio::test]
async fn controller_reaches_error_with_no_cards_on_404() {
    let base = spawn_directory_server().await.expect("spawn server");
    let mut controller = UserListController::new();

    let state = controller.load_users(&client_for(&base, "/missing")).await;
    assert_eq!(*state, LoadState::Error);
    assert!(controller.view().cards.is_empty());
}

#[tokio::test]
async fn controller_shows_generic_message_when_connection_is_refused() {
    let client = UserDirectoryClient::with_http_client(Client::new(), refused_endpoint().await);
    let mut controller = UserListController::new();

    controller.load_users(&client).await;

    assert_eq!(
        controller.view().status,
        StatusView::Error {
            heading: render::ERROR_HEADING,
            message: render::GENERIC_FAILURE_MESSAGE,
        }
    );
}

#[tokio::test]
async fn controller_reaches_success_with_zero_cards_for_empty_array() {
    let base = spawn_directory_server().await.expect("spawn server");
    let mut controller = UserListController::new();

    let state = controller.load_users(&client_for(&base, "/empty")).await;
    assert_eq!(*state, LoadState::Success(Vec::new()));
    let view = controller.view();
    assert!(view.cards.is_empty());
    assert_eq!(view.status, StatusView::Hidden);
}
