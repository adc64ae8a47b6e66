//! Yahoo Finance batched quote endpoint: URL construction and envelope
//! parsing shared by [`crate::market`] and [`crate::quotes`].

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::{FetchConfig, QUOTE_QUERY_TAIL};
use crate::http_client::{HttpClient, HttpRequest};
use crate::normalize::{display_fields, DisplayFields};
use crate::FetchError;

/// Full request URL for a batch of symbols.
///
/// Each symbol is percent-encoded on its own so the separating commas stay
/// literal.
pub fn quote_url<S: AsRef<str>>(config: &FetchConfig, symbols: &[S]) -> String {
    let symbols_param = symbols
        .iter()
        .map(|symbol| urlencoding::encode(symbol.as_ref()).into_owned())
        .collect::<Vec<_>>()
        .join(",");

    format!(
        "{}?symbols={}{}",
        config.quotes_url, symbols_param, QUOTE_QUERY_TAIL
    )
}

/// Parse a `{"quoteResponse": {"result": [...]}}` body into one normalized
/// field map per result object, in provider order.
pub fn parse_quote_response(body: &str) -> Result<Vec<DisplayFields>, FetchError> {
    let document: Value = serde_json::from_str(body)?;

    let quote_response = document
        .get("quoteResponse")
        .and_then(Value::as_object)
        .ok_or_else(|| FetchError::malformed("missing 'quoteResponse' object"))?;

    if let Some(error) = quote_response.get("error") {
        if let Some(message) = provider_error_message(error) {
            return Err(FetchError::Provider(message));
        }
    }

    let results = quote_response
        .get("result")
        .and_then(Value::as_array)
        .ok_or_else(|| FetchError::malformed("missing 'quoteResponse.result' array"))?;

    results
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            entry.as_object().map(display_fields).ok_or_else(|| {
                FetchError::malformed(format!("result entry {index} is not an object"))
            })
        })
        .collect()
}

fn provider_error_message(error: &Value) -> Option<String> {
    match error {
        Value::Null => None,
        Value::String(text) if text.trim().is_empty() => None,
        Value::String(text) => Some(text.clone()),
        Value::Object(fields) => Some(
            fields
                .get("description")
                .and_then(Value::as_str)
                .map(str::to_owned)
                .unwrap_or_else(|| error.to_string()),
        ),
        other => Some(other.to_string()),
    }
}

/// One round trip to the quote endpoint, returning the normalized results.
pub(crate) async fn fetch_results<S: AsRef<str>>(
    http_client: &Arc<dyn HttpClient>,
    config: &FetchConfig,
    symbols: &[S],
) -> Result<Vec<DisplayFields>, FetchError> {
    let url = quote_url(config, symbols);
    debug!(url = %url, symbols = symbols.len(), "requesting quotes");

    let request = HttpRequest::get(url)
        .with_header("user-agent", config.user_agent.as_str())
        .with_timeout_ms(config.timeout_ms);

    let response = http_client.execute(request).await.map_err(|error| {
        warn!(error = %error, "quote transport failed");
        FetchError::from(error)
    })?;

    if !response.is_success() {
        warn!(status = response.status, "quote endpoint returned failure status");
        return Err(FetchError::Status {
            status: response.status,
        });
    }

    let results = parse_quote_response(&response.body).inspect_err(|error| {
        warn!(error = %error, "quote response could not be parsed");
    })?;
    debug!(results = results.len(), "parsed quote response");
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_symbols_and_appends_fixed_tail() {
        let config = FetchConfig::default();
        let url = quote_url(&config, &["AAPL", "MSFT"]);
        assert_eq!(
            url,
            format!(
                "https://query1.finance.yahoo.com/v7/finance/quote?symbols=AAPL,MSFT{}",
                QUOTE_QUERY_TAIL
            )
        );
    }

    #[test]
    fn url_encodes_index_carets() {
        let config = FetchConfig::default().with_quotes_url("http://local.test/q");
        let url = quote_url(&config, &["^DJI", "^GSPC"]);
        assert!(url.starts_with("http://local.test/q?symbols=%5EDJI,%5EGSPC&range=1d"));
    }

    #[test]
    fn parses_results_in_order() {
        let body = r#"{"quoteResponse":{"result":[
            {"symbol":"AAPL","regularMarketPrice":190.5},
            {"symbol":"MSFT","marketCap":3100000000000}
        ],"error":null}}"#;

        let results = parse_quote_response(body).expect("valid body");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].get("regularMarketPrice").map(String::as_str), Some("190.500"));
        assert_eq!(results[1].get("marketCap").map(String::as_str), Some("3.100T"));
    }

    #[test]
    fn empty_result_list_is_not_an_error() {
        let results =
            parse_quote_response(r#"{"quoteResponse":{"result":[]}}"#).expect("valid body");
        assert!(results.is_empty());
    }

    #[test]
    fn shape_mismatches_are_malformed() {
        for body in [
            "not json",
            "[]",
            r#"{"finance":{}}"#,
            r#"{"quoteResponse":{"result":{}}}"#,
            r#"{"quoteResponse":{"result":[1]}}"#,
        ] {
            let error = parse_quote_response(body).expect_err("must fail");
            assert!(error.is_malformed(), "{body} -> {error:?}");
        }
    }

    #[test]
    fn provider_error_is_surfaced() {
        let body = r#"{"quoteResponse":{"result":null,"error":{"code":"Bad Request","description":"Missing value for the \"symbols\" argument"}}}"#;
        let error = parse_quote_response(body).expect_err("must fail");
        assert_eq!(
            error,
            FetchError::Provider(String::from("Missing value for the \"symbols\" argument"))
        );
    }
}
