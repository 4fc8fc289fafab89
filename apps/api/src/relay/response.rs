use axum::{
    body::Body,
    http::header,
    response::{IntoResponse, Response},
};

use crate::relay::StreamRelay;

/// Wraps a relay in a chunked `text/plain` response. The body carries the raw
/// generated text with no envelope and no delimiter between chunks.
pub fn streaming_response(relay: StreamRelay) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (header::TRANSFER_ENCODING, "chunked"),
            (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
        ],
        Body::from_stream(relay.into_stream()),
    )
        .into_response()
}
