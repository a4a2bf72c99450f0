//! One-shot loading of the fuel price table from a file or URL.

use anyhow::{Context, Result};
use tracing::info;

use crate::fetch::{BasicClient, fetch_text};
use crate::parser::parse;
use crate::types::Observation;

/// Source used when none is configured.
pub const DEFAULT_SOURCE: &str = "RSP_Petrol_Diesel_Metro_Cities.csv";

/// Reads `source` and parses it into observations.
///
/// # Errors
///
/// Fails only when the source cannot be read at all. Malformed rows never
/// cause an error; they are left out of the result.
#[tracing::instrument(skip(source), fields(source = %source))]
pub async fn load_data(source: &str) -> Result<Vec<Observation>> {
    let text = read_source(source).await?;
    let observations = parse(&text);
    info!(observations = observations.len(), "Fuel price data loaded");
    Ok(observations)
}

/// Whether `source` names an HTTP(S) URL rather than a local path.
pub fn is_url(source: &str) -> bool {
    let lower = source.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Returns the raw text of a local file path or an `http(s)` URL.
pub async fn read_source(source: &str) -> Result<String> {
    if is_url(source) {
        let client = BasicClient::new();
        fetch_text(&client, source)
            .await
            .with_context(|| format!("failed to fetch {source}"))
    } else {
        let bytes = std::fs::read(source).with_context(|| format!("failed to read {source}"))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    #[tokio::test]
    async fn test_load_data_from_file() {
        let path = temp_path("fuel_prices_test_load.csv");
        fs::write(
            &path,
            "City,Date,Petrol,Diesel\nDelhi,16-Jun-17,70.38,58.72\nMumbai,bad-date,1,1\n",
        )
        .unwrap();

        let data = load_data(&path).await.unwrap();

        assert_eq!(data.len(), 1);
        assert_eq!(data[0].city, "Delhi");

        fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn test_load_data_missing_file_is_error() {
        let path = temp_path("fuel_prices_test_does_not_exist.csv");
        let _ = fs::remove_file(&path);

        let err = load_data(&path).await.unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[tokio::test]
    async fn test_read_source_replaces_invalid_utf8() {
        let path = temp_path("fuel_prices_test_lossy.csv");
        fs::write(&path, b"City,Date,Petrol,Diesel\nDel\xffhi,16-Jun-17,70,58\n").unwrap();

        let data = load_data(&path).await.unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].city, "Del\u{fffd}hi");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_is_url() {
        assert!(is_url("http://example.com/prices.csv"));
        assert!(is_url("HTTPS://example.com/prices.csv"));
        assert!(!is_url("httpdata.csv"));
        assert!(!is_url("data/http_prices.csv"));
        assert!(!is_url(DEFAULT_SOURCE));
    }

    #[tokio::test]
    async fn test_http_error_status_is_unreadable_source() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 4096];
            let _ = socket.read(&mut request).await;
            let _ = socket
                .write_all(b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n")
                .await;
            let _ = socket.shutdown().await;
        });

        let url = format!("http://{addr}/missing.csv");
        let err = load_data(&url).await.unwrap_err();
        assert!(err.to_string().contains("failed to fetch"));
    }
}
