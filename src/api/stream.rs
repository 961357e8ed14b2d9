use crate::dto::UserRecord;
use crate::error::ServiceError;
use async_stream::try_stream;
use bytes::Bytes;
use futures::Stream;

/// Serialize a lazy record sequence into an incrementally flushed JSON
/// array: `[`, then each record's encoding preceded by a comma for every
/// element after the first, then `]` once the sequence completes. One
/// record is in flight at a time regardless of result set size.
///
/// On a mid-sequence failure the error is logged and re-emitted without
/// the closing bracket. The response aborts and a strict parser rejects
/// the truncated output, so partial data is never mistaken for a complete
/// array.
pub fn json_array<S>(records: S) -> impl Stream<Item = Result<Bytes, ServiceError>>
where
    S: Stream<Item = Result<UserRecord, ServiceError>>,
{
    try_stream! {
        yield Bytes::from_static(b"[");
        let mut first = true;
        for await record in records {
            let record = record.inspect_err(|e| log::error!("streaming error: {e}"))?;
            let mut chunk = if first { Vec::new() } else { vec![b','] };
            first = false;
            serde_json::to_writer(&mut chunk, &record)
                .map_err(|e| ServiceError::Stream(e.to_string()))?;
            yield Bytes::from(chunk);
        }
        yield Bytes::from_static(b"]");
    }
}
