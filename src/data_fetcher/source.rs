//! Obtaining the teletext document from the network or a local file.

use crate::config::Config;
use crate::data_fetcher::api::{create_http_client, fetch_text};
use crate::data_fetcher::document::Teletext;
use crate::error::AppError;
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

/// Where the raw teletext JSON comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// HTTP GET against the teletext endpoint.
    Remote { url: String },
    /// A previously saved document, bypassing the network.
    File { path: PathBuf },
}

impl DocumentSource {
    /// Picks the local file when one was given, the configured endpoint otherwise.
    pub fn from_input(input: Option<&Path>, config: &Config) -> Self {
        match input {
            Some(path) => DocumentSource::File {
                path: path.to_path_buf(),
            },
            None => DocumentSource::Remote {
                url: config.api_url.clone(),
            },
        }
    }
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentSource::Remote { url } => write!(f, "{url}"),
            DocumentSource::File { path } => write!(f, "{}", path.display()),
        }
    }
}

/// Reads the raw document text without parsing it.
pub async fn read_raw_document(
    source: &DocumentSource,
    http_timeout_seconds: Option<u64>,
) -> Result<String, AppError> {
    match source {
        DocumentSource::File { path } => {
            info!("Loading teletext json from file...");
            fs::read_to_string(path)
                .await
                .map_err(|e| AppError::file_read(path.display().to_string(), e.to_string()))
        }
        DocumentSource::Remote { url } => {
            let client = create_http_client(http_timeout_seconds)?;
            fetch_text(&client, url).await
        }
    }
}

/// Writes the raw document text verbatim so it can be replayed with `--input`.
pub async fn save_raw_document(path: &Path, raw: &str) -> Result<(), AppError> {
    info!("Saving teletext json to file...");
    fs::write(path, raw)
        .await
        .map_err(|e| AppError::file_write(path.display().to_string(), e.to_string()))
}

/// Fetches and parses the teletext document.
///
/// When `output` is given the exact raw text is persisted after a successful
/// parse, before the document is returned.
pub async fn fetch_teletext(
    source: &DocumentSource,
    http_timeout_seconds: Option<u64>,
    output: Option<&Path>,
) -> Result<Teletext, AppError> {
    let raw = read_raw_document(source, http_timeout_seconds).await?;

    info!("Converting json to teletext pages...");
    let teletext = Teletext::from_json(&raw, &source.to_string())?;

    if let Some(path) = output {
        save_raw_document(path, &raw).await?;
    }

    info!("Loaded {} pages from {}", teletext.len(), source);
    Ok(teletext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    const SAMPLE: &str = r#"{"data": {"100": {"subpages": ["A"], "text": {"100A": "<pre>  Zprávy  </pre>"}}, "101": {"subpages": [], "text": {"101": "<pre>Sport 200</pre>"}}}}"#;

    #[test]
    fn test_source_from_input_prefers_file() {
        let config = Config::default();
        let source = DocumentSource::from_input(Some(Path::new("saved.json")), &config);
        assert_eq!(
            source,
            DocumentSource::File {
                path: PathBuf::from("saved.json")
            }
        );

        let source = DocumentSource::from_input(None, &config);
        assert_eq!(source.to_string(), config.api_url);
    }

    #[tokio::test]
    async fn test_fetch_teletext_from_file() {
        let temp_dir = tempdir().unwrap();
        let input = temp_dir.path().join("teletext.json");
        tokio::fs::write(&input, SAMPLE).await.unwrap();

        let source = DocumentSource::File { path: input };
        let teletext = fetch_teletext(&source, None, None).await.unwrap();

        assert_eq!(teletext.page_ids(), ["100", "101"]);
    }

    #[tokio::test]
    async fn test_missing_file_is_file_read_error() {
        let source = DocumentSource::File {
            path: PathBuf::from("/nonexistent/dir/teletext.json"),
        };
        let result = fetch_teletext(&source, None, None).await;

        match result {
            Err(AppError::FileRead { path, .. }) => {
                assert_eq!(path, "/nonexistent/dir/teletext.json")
            }
            other => panic!("expected FileRead error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_file_is_not_persisted() {
        let temp_dir = tempdir().unwrap();
        let input = temp_dir.path().join("broken.json");
        let output = temp_dir.path().join("copy.json");
        tokio::fs::write(&input, "{\"data\": ").await.unwrap();

        let source = DocumentSource::File { path: input };
        let result = fetch_teletext(&source, None, Some(&output)).await;

        assert!(matches!(result, Err(AppError::MalformedJson { .. })));
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_download_persist_and_replay_roundtrip() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/text/"))
            .respond_with(ResponseTemplate::new(200).set_body_string(SAMPLE))
            .expect(1)
            .mount(&mock_server)
            .await;

        let temp_dir = tempdir().unwrap();
        let output = temp_dir.path().join("saved.json");

        let remote = DocumentSource::Remote {
            url: format!("{}/text/", mock_server.uri()),
        };
        let downloaded = fetch_teletext(&remote, None, Some(&output)).await.unwrap();

        let saved = tokio::fs::read_to_string(&output).await.unwrap();
        assert_eq!(saved, SAMPLE);

        let replayed = fetch_teletext(&DocumentSource::File { path: output }, None, None)
            .await
            .unwrap();
        assert_eq!(replayed, downloaded);
    }

    #[tokio::test]
    async fn test_unwritable_output_is_file_write_error() {
        let temp_dir = tempdir().unwrap();
        let input = temp_dir.path().join("teletext.json");
        tokio::fs::write(&input, SAMPLE).await.unwrap();
        let output = temp_dir.path().join("missing_dir").join("saved.json");

        let source = DocumentSource::File { path: input };
        let result = fetch_teletext(&source, None, Some(&output)).await;

        assert!(matches!(result, Err(AppError::FileWrite { .. })));
    }
}
