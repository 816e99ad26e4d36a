//! Yahoo Finance chart endpoint provider.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fxharvest_types::{Bar, DateRange, Interval};
use serde::Deserialize;
use tracing::{debug, error};

use crate::{BarProvider, ClientConfig, ProviderError, url};

/// Provider backed by the Yahoo Finance v8 chart endpoint.
#[derive(Debug, Clone)]
pub struct YahooProvider {
    client: reqwest::Client,
}

impl YahooProvider {
    /// Creates a new provider with the given client configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: config.build()?,
        })
    }

    /// Creates a provider with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(&ClientConfig::default())
    }
}

#[async_trait]
impl BarProvider for YahooProvider {
    async fn fetch_bars(
        &self,
        query: &str,
        range: DateRange,
        interval: Interval,
    ) -> Result<Vec<Bar>, ProviderError> {
        let url = url::chart_url(query);
        let params = url::chart_params(range, interval);

        debug!(%query, %range, %interval, "fetching chart data");

        let response = self.client.get(&url).query(&params).send().await?;

        let status = response.status();
        if !status.is_success() {
            // The chart endpoint reports symbol errors inside a JSON body
            // even for 4xx statuses, so try to surface those first.
            let body = response.text().await.unwrap_or_default();
            if let Ok(decoded) = serde_json::from_str::<ChartResponse>(&body)
                && let Some(err) = decoded.chart.error
            {
                error!(%query, code = %err.code, "provider rejected request");
                return Err(ProviderError::Api {
                    code: err.code,
                    description: err.description,
                });
            }
            error!(%query, status = status.as_u16(), "chart request failed");
            return Err(ProviderError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let bars = decode_chart(&body)?;
        debug!(%query, rows = bars.len(), "chart data decoded");
        Ok(bars)
    }
}

/// Decodes a chart response body into bars.
///
/// Buckets with no trade come back as nulls in the quote arrays and are
/// skipped. A response with no timestamps decodes to an empty table.
pub(crate) fn decode_chart(body: &str) -> Result<Vec<Bar>, ProviderError> {
    let decoded: ChartResponse =
        serde_json::from_str(body).map_err(|e| ProviderError::Decode(e.to_string()))?;

    if let Some(err) = decoded.chart.error {
        return Err(ProviderError::Api {
            code: err.code,
            description: err.description,
        });
    }

    let Some(result) = decoded
        .chart
        .result
        .and_then(|mut results| (!results.is_empty()).then(|| results.swap_remove(0)))
    else {
        return Err(ProviderError::Decode("missing chart result".to_string()));
    };

    let Some(timestamps) = result.timestamp else {
        return Ok(Vec::new());
    };

    let Some(quote) = result.indicators.quote.first() else {
        return Err(ProviderError::Decode("missing quote block".to_string()));
    };

    let adjclose = result
        .indicators
        .adjclose
        .as_ref()
        .and_then(|blocks| blocks.first());

    let mut bars = Vec::with_capacity(timestamps.len());
    for (i, &ts) in timestamps.iter().enumerate() {
        let timestamp = DateTime::<Utc>::from_timestamp(ts, 0)
            .ok_or_else(|| ProviderError::Decode(format!("invalid timestamp {ts}")))?;

        let (Some(open), Some(high), Some(low), Some(close)) = (
            field(&quote.open, i),
            field(&quote.high, i),
            field(&quote.low, i),
            field(&quote.close, i),
        ) else {
            // Null slot: bucket with no trade.
            continue;
        };

        let adj_close = adjclose.and_then(|a| field(&a.adjclose, i)).unwrap_or(close);
        let volume = field(&quote.volume, i).unwrap_or(0.0);

        bars.push(Bar::new(timestamp, open, high, low, close, adj_close, volume));
    }

    Ok(bars)
}

fn field(values: &[Option<f64>], i: usize) -> Option<f64> {
    values.get(i).copied().flatten()
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<Quote>,
    adjclose: Option<Vec<AdjClose>>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct Quote {
    open: Vec<Option<f64>>,
    high: Vec<Option<f64>>,
    low: Vec<Option<f64>>,
    close: Vec<Option<f64>>,
    volume: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct AdjClose {
    adjclose: Vec<Option<f64>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    const THREE_BARS: &str = r#"{
        "chart": {
            "result": [{
                "meta": {"symbol": "EURUSD=X"},
                "timestamp": [1745884800, 1745884860, 1745884920],
                "indicators": {
                    "quote": [{
                        "open": [1.1401, 1.1402, 1.1403],
                        "high": [1.1405, 1.1406, 1.1407],
                        "low": [1.1399, 1.1400, 1.1401],
                        "close": [1.1402, 1.1403, 1.1404],
                        "volume": [0, 0, 0]
                    }],
                    "adjclose": [{"adjclose": [1.1402, 1.1403, 1.1404]}]
                }
            }],
            "error": null
        }
    }"#;

    #[test]
    fn test_decode_three_bars() {
        let bars = decode_chart(THREE_BARS).unwrap();
        assert_eq!(bars.len(), 3);
        assert_eq!(bars[0].timestamp.minute(), 0);
        assert_eq!(bars[1].timestamp.minute(), 1);
        assert!((bars[2].close - 1.1404).abs() < 1e-10);
        assert!((bars[0].adj_close - 1.1402).abs() < 1e-10);
    }

    #[test]
    fn test_decode_skips_null_buckets() {
        let body = r#"{
            "chart": {
                "result": [{
                    "timestamp": [1745884800, 1745884860],
                    "indicators": {
                        "quote": [{
                            "open": [1.1401, null],
                            "high": [1.1405, null],
                            "low": [1.1399, null],
                            "close": [1.1402, null],
                            "volume": [0, null]
                        }]
                    }
                }],
                "error": null
            }
        }"#;

        let bars = decode_chart(body).unwrap();
        assert_eq!(bars.len(), 1);
    }

    #[test]
    fn test_decode_missing_adjclose_falls_back_to_close() {
        let body = r#"{
            "chart": {
                "result": [{
                    "timestamp": [1745884800],
                    "indicators": {
                        "quote": [{
                            "open": [1.14], "high": [1.15], "low": [1.13],
                            "close": [1.145], "volume": [10]
                        }]
                    }
                }],
                "error": null
            }
        }"#;

        let bars = decode_chart(body).unwrap();
        assert!((bars[0].adj_close - 1.145).abs() < 1e-10);
    }

    #[test]
    fn test_decode_no_timestamps_is_empty() {
        let body = r#"{
            "chart": {
                "result": [{"indicators": {"quote": [{}]}}],
                "error": null
            }
        }"#;

        let bars = decode_chart(body).unwrap();
        assert!(bars.is_empty());
    }

    #[test]
    fn test_decode_api_error() {
        let body = r#"{
            "chart": {
                "result": null,
                "error": {"code": "Not Found", "description": "No data found, symbol may be delisted"}
            }
        }"#;

        let err = decode_chart(body).unwrap_err();
        assert!(matches!(err, ProviderError::Api { .. }));
    }

    #[test]
    fn test_decode_garbage_is_decode_error() {
        let err = decode_chart("not json").unwrap_err();
        assert!(matches!(err, ProviderError::Decode(_)));
    }
}
