use crate::commands::{csv, CmdResult};
use crate::error::{Result, WordlyError};
use crate::store::DataStore;
use reqwest::blocking::Client;
use reqwest::header::{CACHE_CONTROL, PRAGMA, USER_AGENT};
use std::time::Duration;

const FETCH_FAILED: &str = "Failed to fetch CSV. Make sure you used the correct export link.";

pub fn http_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| WordlyError::Network(format!("HTTP client build failed: {e}")))
}

/// One GET with caching disabled. Any transport error or non-success status
/// collapses into a single user-facing error; there is no retry.
pub fn fetch_csv(client: &Client, url: &str) -> Result<String> {
    tracing::debug!(%url, "fetching csv");
    let response = client
        .get(url)
        .header(USER_AGENT, concat!("wordly/", env!("CARGO_PKG_VERSION")))
        .header(CACHE_CONTROL, "no-cache")
        .header(PRAGMA, "no-cache")
        .send()
        .map_err(|e| {
            tracing::debug!(%url, error = %e, "csv fetch failed");
            WordlyError::Network(FETCH_FAILED.to_string())
        })?;

    let status = response.status();
    if !status.is_success() {
        tracing::debug!(%url, %status, "csv fetch returned error status");
        return Err(WordlyError::Network(FETCH_FAILED.to_string()));
    }

    response.text().map_err(|e| {
        tracing::debug!(%url, error = %e, "csv body read failed");
        WordlyError::Network(FETCH_FAILED.to_string())
    })
}

/// Fetches CSV from `url` and imports it like a local CSV file.
pub fn run<S: DataStore>(store: &mut S, url: &str, timeout: Duration) -> Result<CmdResult> {
    let client = http_client(timeout)?;
    let text = fetch_csv(&client, url)?;
    csv::run(store, &text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WordList;
    use crate::store::memory::InMemoryStore;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    // reqwest's blocking client must not run on the async test runtime.
    async fn blocking<T: Send + 'static>(f: impl FnOnce() -> T + Send + 'static) -> T {
        tokio::task::spawn_blocking(f).await.unwrap()
    }

    #[tokio::test]
    async fn imports_fetched_csv() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/export"))
            .and(header("cache-control", "no-cache"))
            .respond_with(ResponseTemplate::new(200).set_body_string("Week 8\nmoose,Elk\nelk"))
            .expect(1)
            .mount(&server)
            .await;

        let url = format!("{}/export", server.uri());
        let store = blocking(move || {
            let mut store = InMemoryStore::new();
            run(&mut store, &url, Duration::from_secs(5)).unwrap();
            store
        })
        .await;

        let weeks = store.load_weeks().unwrap();
        assert_eq!(weeks, vec![WordList::new("Week 8", ["moose", "elk"]).unwrap()]);
    }

    #[tokio::test]
    async fn error_status_is_network_error_without_mutation() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let url = format!("{}/missing", server.uri());
        let (store, result) = blocking(move || {
            let mut store = InMemoryStore::with_weeks(vec![WordList::new("Week 1", ["cat"]).unwrap()]);
            let result = run(&mut store, &url, Duration::from_secs(5));
            (store, result)
        })
        .await;

        assert!(matches!(result, Err(WordlyError::Network(ref m)) if m == FETCH_FAILED));
        assert_eq!(store.load_weeks().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn empty_csv_body_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("\n\n"))
            .mount(&server)
            .await;

        let url = server.uri();
        let result = blocking(move || {
            let mut store = InMemoryStore::new();
            run(&mut store, &url, Duration::from_secs(5)).map(|_| ())
        })
        .await;

        assert!(matches!(result, Err(WordlyError::Parse(_))));
    }

    #[test]
    fn unreachable_host_is_network_error() {
        let client = http_client(Duration::from_secs(2)).unwrap();
        // port 9 on localhost: nothing listens there in CI
        let err = fetch_csv(&client, "http://127.0.0.1:9/export").unwrap_err();
        assert!(matches!(err, WordlyError::Network(_)));
    }
}
