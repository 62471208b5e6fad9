use tracing::info;

use crate::config::BoardConfig;
use crate::display::DisplayTarget;
use crate::error::{ConfigError, FetchError};
use crate::fetcher::Fetcher;
use crate::model::{Payload, ResourceRequest, Shape};
use crate::renderer::{begin_item_load, render, Rendered};
use crate::settle::{settle_all, Settled};

/// One page's worth of state: where to fetch from and what is on screen.
///
/// Every method that renders takes `&mut self`, so a render always completes
/// before the next one starts.
#[derive(Debug)]
pub struct Board {
    fetcher: Fetcher,
    todos_path: String,
    target: DisplayTarget,
}

impl Board {
    /// `todos_path` is taken relative to the fetcher's base URL; leading and
    /// trailing slashes are dropped.
    pub fn new(fetcher: Fetcher, todos_path: &str) -> Self {
        Self {
            fetcher,
            todos_path: todos_path.trim_matches('/').to_string(),
            target: DisplayTarget::new(),
        }
    }

    pub fn from_config(config: &BoardConfig) -> Result<Self, ConfigError> {
        let fetcher = Fetcher::new(config.base_url()?);
        Ok(Self::new(fetcher, &config.todos_path))
    }

    pub fn target(&self) -> &DisplayTarget {
        &self.target
    }

    pub fn fetcher(&self) -> &Fetcher {
        &self.fetcher
    }

    pub fn list_request(&self) -> ResourceRequest {
        ResourceRequest::collection(self.todos_path.as_str())
    }

    pub fn item_request(&self, id: i64) -> ResourceRequest {
        ResourceRequest::item(format!("{}/{id}", self.todos_path))
    }

    /// Fetches `request` and renders the outcome.
    pub async fn run(&mut self, request: &ResourceRequest) -> Rendered {
        if request.shape() == Shape::Item {
            begin_item_load(&mut self.target);
        }
        let result = self.fetcher.fetch(request).await;
        render(&mut self.target, request.shape(), result)
    }

    pub async fn load_list(&mut self) -> Rendered {
        let request = self.list_request();
        let rendered = self.run(&request).await;
        info!(?rendered, "list loaded");
        rendered
    }

    pub async fn open(&mut self, id: i64) -> Rendered {
        let request = self.item_request(id);
        self.run(&request).await
    }

    /// Opens the record behind the row at `index`, if there is one.
    pub async fn open_row(&mut self, index: usize) -> Option<Rendered> {
        let id = self.target.rows().get(index)?.id;
        Some(self.open(id).await)
    }

    /// Fetches several items together and waits for all of them.
    /// The display target is left alone.
    pub async fn fetch_settled(&self, ids: &[i64]) -> Vec<Settled<Payload, FetchError>> {
        let requests: Vec<_> = ids.iter().map(|&id| self.item_request(id)).collect();
        settle_all(requests.iter().map(|request| self.fetcher.fetch(request))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, STATUS_FAILED_MESSAGE};
    use serde_json::json;
    use url::Url;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn board_for(server: &MockServer) -> Board {
        let fetcher = Fetcher::new(Url::parse(&server.uri()).unwrap());
        Board::new(fetcher, "todos")
    }

    async fn mount_json(server: &MockServer, at: &str, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(at))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn slashed_todos_path_stays_under_base_path() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/api/todos/3",
            json!({"userId": 1, "id": 3, "title": "nested", "completed": false}),
        )
        .await;

        let base = Url::parse(&format!("{}/api/", server.uri())).unwrap();
        let mut board = Board::new(Fetcher::new(base), "/todos/");

        assert_eq!(board.list_request().url(), "todos");
        assert_eq!(board.item_request(3).url(), "todos/3");
        assert_eq!(board.open(3).await, Rendered::Detail);
        assert_eq!(board.target().detail.title.text(), "nested");
    }

    #[tokio::test]
    async fn single_record_list_gives_one_row() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/todos",
            json!([{"userId": 1, "id": 1, "title": "a", "completed": false}]),
        )
        .await;

        let mut board = board_for(&server);
        assert_eq!(board.load_list().await, Rendered::Rows(1));
        assert_eq!(board.target().rows().len(), 1);
        assert_eq!(board.target().rows()[0].label, "a");
    }

    #[tokio::test]
    async fn server_error_shows_message_and_no_rows() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/todos"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let mut board = board_for(&server);
        let rendered = board.load_list().await;

        assert_eq!(rendered, Rendered::Failed(ErrorKind::RequestFailed));
        assert!(board.target().rows().is_empty());
        assert_eq!(board.target().list.error.text(), STATUS_FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn malformed_list_shows_parse_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/todos"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[{\"id\": "))
            .mount(&server)
            .await;

        let mut board = board_for(&server);
        let rendered = board.load_list().await;

        assert_eq!(rendered, Rendered::Failed(ErrorKind::ParseFailed));
        let message = board.target().list.error.text();
        assert!(!message.is_empty());
        assert_ne!(message, STATUS_FAILED_MESSAGE);
        assert!(board.target().rows().is_empty());
    }

    #[tokio::test]
    async fn reloading_the_list_appends() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/todos",
            json!([
                {"userId": 1, "id": 1, "title": "a", "completed": false},
                {"userId": 1, "id": 2, "title": "b", "completed": true},
            ]),
        )
        .await;

        let mut board = board_for(&server);
        board.load_list().await;
        board.load_list().await;
        assert_eq!(board.target().rows().len(), 4);
    }

    #[tokio::test]
    async fn opening_a_row_fills_the_detail_pane() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/todos",
            json!([{"userId": 5, "id": 42, "title": "answer", "completed": true}]),
        )
        .await;
        mount_json(
            &server,
            "/todos/42",
            json!({"userId": 5, "id": 42, "title": "answer", "completed": true}),
        )
        .await;

        let mut board = board_for(&server);
        board.load_list().await;

        assert_eq!(board.open_row(0).await, Some(Rendered::Detail));
        assert_eq!(board.open_row(1).await, None);

        let detail = &board.target().detail;
        assert_eq!(detail.title.text(), "answer");
        assert_eq!(detail.message.text(), "isCompleted true");
        assert_eq!(detail.user_id.text(), "5");
        assert!(detail.loader.is_empty());
    }

    #[tokio::test]
    async fn failed_open_after_success_leaves_no_stale_fields() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/todos/1",
            json!({"userId": 1, "id": 1, "title": "first", "completed": false}),
        )
        .await;
        Mock::given(method("GET"))
            .and(path("/todos/2"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let mut board = board_for(&server);
        assert_eq!(board.open(1).await, Rendered::Detail);
        assert_eq!(
            board.open(2).await,
            Rendered::Failed(ErrorKind::RequestFailed)
        );

        let detail = &board.target().detail;
        assert!(!detail.has_data());
        assert!(detail.loader.is_empty());
        assert_eq!(detail.error.text(), STATUS_FAILED_MESSAGE);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn settled_fetch_reports_each_request_in_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/todos/1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"userId": 1, "id": 1, "title": "one", "completed": false}))
                    .set_delay(std::time::Duration::from_millis(50)),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/todos/2"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let board = board_for(&server);
        let outcomes = board.fetch_settled(&[1, 2]).await;

        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].status(), "fulfilled");
        assert_eq!(outcomes[1].status(), "rejected");
        match &outcomes[1] {
            Settled::Rejected(err) => assert_eq!(err.status(), Some(500)),
            other => panic!("expected rejection, got {other:?}"),
        }
        assert!(board.target().rows().is_empty());
    }
}
