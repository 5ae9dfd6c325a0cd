//! Remote Seed
//!
//! Loads the initial todos from a JSON endpoint instead of the defaults.
//! The body must be an array of `{"text": .., "completed": ..}` objects
//! (`status` is accepted in place of `completed`).

use reqwest::Url;

use crate::domain::{ToDo, ToDoError, ToDoResult};

/// Where a session's initial todos come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    /// The two hardcoded todos
    Defaults,
    /// GET this URL and use the returned array
    Remote(String),
}

impl SeedSource {
    pub fn from_url(url: Option<&str>) -> Self {
        match url {
            Some(url) if !url.trim().is_empty() => SeedSource::Remote(url.to_string()),
            _ => SeedSource::Defaults,
        }
    }
}

/// Resolve a configured seed URL against the page URL
///
/// Absolute URLs pass through; relative ones (`/todos.json`) need `base`.
pub fn resolve_seed_url(url: &str, base: Option<&str>) -> ToDoResult<Url> {
    let resolved = match base {
        Some(base) => Url::parse(base).and_then(|base| base.join(url)),
        None => Url::parse(url),
    };
    resolved.map_err(|e| ToDoError::fetch(url, e))
}

/// Fetch the seed array from `url`, keeping the array order
pub async fn fetch_seed(client: &reqwest::Client, url: &str) -> ToDoResult<Vec<ToDo>> {
    log::info!("fetching todo seed from {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| ToDoError::fetch(url, e))?
        .error_for_status()
        .map_err(|e| ToDoError::fetch(url, e))?;

    let todos: Vec<ToDo> = response
        .json()
        .await
        .map_err(|e| ToDoError::fetch(url, e))?;

    log::info!("loaded {} todos from seed", todos.len());
    Ok(todos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_seed_source_from_url() {
        assert_eq!(SeedSource::from_url(None), SeedSource::Defaults);
        assert_eq!(SeedSource::from_url(Some("  ")), SeedSource::Defaults);
        assert_eq!(
            SeedSource::from_url(Some("http://localhost/todos.json")),
            SeedSource::Remote("http://localhost/todos.json".to_string())
        );
    }

    #[test]
    fn test_resolve_relative_against_page() {
        let url = resolve_seed_url("/todos.json", Some("http://localhost:8080/app/index.html")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/todos.json");

        let url = resolve_seed_url("todos.json", Some("http://localhost:8080/app/")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/app/todos.json");
    }

    #[test]
    fn test_resolve_absolute_ignores_page() {
        let url = resolve_seed_url("https://example.com/seed.json", Some("http://localhost:8080/")).unwrap();
        assert_eq!(url.as_str(), "https://example.com/seed.json");

        let url = resolve_seed_url("https://example.com/seed.json", None).unwrap();
        assert_eq!(url.host_str(), Some("example.com"));
    }

    #[test]
    fn test_resolve_relative_without_page_fails() {
        match resolve_seed_url("/todos.json", None) {
            Err(ToDoError::FetchFailure { url, .. }) => assert_eq!(url, "/todos.json"),
            other => panic!("expected FetchFailure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_relative_seed_after_resolving() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/todos.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"text": "Seeded", "completed": false}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let page = format!("{}/index.html", server.uri());
        let url = resolve_seed_url("/todos.json", Some(&page)).unwrap();
        let todos = fetch_seed(&reqwest::Client::new(), url.as_str()).await.unwrap();

        assert_eq!(todos, vec![ToDo::new("Seeded")]);
    }

    #[tokio::test]
    async fn test_fetch_seed_preserves_order() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/todos.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"text": "ToDo1", "completed": true},
                {"text": "ToDo2", "completed": false},
                {"text": "ToDo3", "completed": false}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let url = format!("{}/todos.json", server.uri());
        let todos = fetch_seed(&client, &url).await.unwrap();

        assert_eq!(
            todos,
            vec![
                ToDo::with_completed("ToDo1", true),
                ToDo::new("ToDo2"),
                ToDo::new("ToDo3"),
            ]
        );
    }

    #[tokio::test]
    async fn test_fetch_seed_accepts_status_field() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/todos.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"text": "ToDo1", "status": true},
                {"text": "ToDo2", "status": false}
            ])))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let url = format!("{}/todos.json", server.uri());
        let todos = fetch_seed(&client, &url).await.unwrap();

        assert!(todos[0].is_completed());
        assert!(!todos[1].is_completed());
    }

    #[tokio::test]
    async fn test_fetch_seed_http_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/todos.json"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let url = format!("{}/todos.json", server.uri());
        let err = fetch_seed(&client, &url).await.unwrap_err();

        match err {
            ToDoError::FetchFailure { url: failed, .. } => assert_eq!(failed, url),
            other => panic!("expected FetchFailure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_seed_malformed_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/todos.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let url = format!("{}/todos.json", server.uri());
        let result = fetch_seed(&client, &url).await;

        assert!(matches!(result, Err(ToDoError::FetchFailure { .. })));
    }
}
