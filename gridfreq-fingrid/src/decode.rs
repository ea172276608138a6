//! Decoding of the Fingrid dataset-data payload.

use chrono::{DateTime, Utc};
use gridfreq_core::{GridfreqError, Measurement};
use serde::Deserialize;

use crate::FEED_NAME;

/// Raw dataset-data response.
#[derive(Debug, Deserialize)]
pub(crate) struct DataPayload {
    pub data: Vec<DataRow>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DataRow {
    pub start_time: String,
    pub value: f64,
}

/// Normalize the explicit-timestamp rows into an ascending UTC series.
///
/// Fingrid timestamps carry an embedded zone offset (`Z` or `+hh:mm`). Every
/// one is converted to `DateTime<Utc>` here so nothing downstream ever mixes
/// offset conventions between the two feeds. Rows are sorted ascending; the
/// upstream does not guarantee an order.
pub(crate) fn decode_data(payload: DataPayload) -> Result<Vec<Measurement>, GridfreqError> {
    let mut out: Vec<Measurement> = Vec::with_capacity(payload.data.len());
    for row in payload.data {
        let ts: DateTime<Utc> = DateTime::parse_from_rfc3339(&row.start_time)
            .map_err(|e| {
                GridfreqError::malformed(
                    FEED_NAME,
                    format!("bad startTime {:?}: {e}", row.start_time),
                )
            })?
            .with_timezone(&Utc);
        out.push(Measurement::new(ts, row.value));
    }
    out.sort_by_key(|m| m.ts);
    Ok(out)
}
