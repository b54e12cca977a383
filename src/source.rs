use std::panic;

use reqwest::blocking::Client;
use tracing::trace;
use url::Url;

use crate::constants::USER_AGENT;

/// Retrieves the raw bytes behind a locator.
pub trait DocumentFetcher {
    fn fetch(&self, locator: &Url) -> anyhow::Result<Vec<u8>>;
}

/// Turns PDF bytes into their flattened text body.
pub trait TextExtractor {
    fn extract(&self, bytes: &[u8]) -> anyhow::Result<String>;
}

/// Plain HTTP GET. A client is built per request and dropped with it.
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpFetcher;

fn build_client() -> anyhow::Result<Client> {
    let client = Client::builder()
        // Avoid macOS system proxy lookup that can panic in sandboxed contexts.
        .no_proxy()
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

impl DocumentFetcher for HttpFetcher {
    fn fetch(&self, locator: &Url) -> anyhow::Result<Vec<u8>> {
        let client = build_client()?;
        let response = client.get(locator.as_str()).send()?.error_for_status()?;
        trace!(status = %response.status(), "got response");
        let bytes = response.bytes()?;
        Ok(bytes.to_vec())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, bytes: &[u8]) -> anyhow::Result<String> {
        // pdf-extract panics on some malformed documents instead of erroring.
        let text = panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes))
            .map_err(|payload| {
                let reason = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown cause".to_string());
                anyhow::anyhow!("pdf text extraction panicked: {reason}")
            })??;
        Ok(text)
    }
}
