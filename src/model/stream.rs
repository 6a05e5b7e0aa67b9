/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Newline-delimited JSON record streams
//!
//! The transaction and pricing streams send one JSON object per line over a
//! long-lived response body. Each line is classified by its `type` field: the
//! heartbeat sentinel becomes a heartbeat record, anything else goes through the
//! domain decoder. Records are produced lazily and in order; the stream ends when
//! the connection closes and is never resumed.

use crate::constants::HEARTBEAT_TYPE;
use crate::error::{AppError, V20Result};
use crate::presentation::pricing::{ClientPrice, PricingHeartbeat};
use crate::presentation::transaction::{Transaction, TransactionHeartbeat};
use futures_util::stream::{self, BoxStream, Stream, StreamExt};
use serde_json::Value;
use std::collections::VecDeque;
use tracing::debug;

/// Boxed stream of decoded records
pub type RecordStream<T> = BoxStream<'static, V20Result<T>>;

/// Longest stream line accepted, in bytes
pub const MAX_LINE_BYTES: usize = 1 << 20;

/// Splits arbitrary body chunks into complete lines
///
/// Each line comes back as a result: a line that is not valid UTF-8 or that grows
/// past [`MAX_LINE_BYTES`] is reported as an error, and the lines after it are
/// still returned.
#[derive(Debug, Default)]
pub struct LineBuffer {
    pending: Vec<u8>,
    // bytes of `pending` already known to hold no newline
    scanned: usize,
    discarding: bool,
}

impl LineBuffer {
    /// Empty buffer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `chunk` and returns every line it completed, blank lines skipped
    pub fn push(&mut self, chunk: &[u8]) -> Vec<V20Result<String>> {
        self.pending.extend_from_slice(chunk);
        let mut lines = Vec::new();
        let mut start = 0;
        while let Some(offset) = self.pending[self.scanned..].iter().position(|b| *b == b'\n') {
            let end = self.scanned + offset;
            if self.discarding {
                self.discarding = false;
            } else if end - start > MAX_LINE_BYTES {
                lines.push(Err(Self::too_long()));
            } else if let Some(line) = Self::clean(&self.pending[start..end]) {
                lines.push(line);
            }
            start = end + 1;
            self.scanned = start;
        }
        self.pending.drain(..start);
        self.scanned = self.pending.len();

        if self.discarding {
            self.pending.clear();
            self.scanned = 0;
        } else if self.pending.len() > MAX_LINE_BYTES {
            lines.push(Err(Self::too_long()));
            self.discarding = true;
            self.pending.clear();
            self.scanned = 0;
        }
        lines
    }

    /// Returns the unterminated last line, if any
    pub fn finish(&mut self) -> Option<V20Result<String>> {
        let rest = std::mem::take(&mut self.pending);
        self.scanned = 0;
        if std::mem::take(&mut self.discarding) {
            return None;
        }
        Self::clean(&rest)
    }

    fn clean(line: &[u8]) -> Option<V20Result<String>> {
        let text = match std::str::from_utf8(line) {
            Ok(text) => text.trim(),
            Err(e) => {
                return Some(Err(AppError::Deserialization(format!(
                    "stream line is not valid UTF-8: {e}"
                ))));
            }
        };
        (!text.is_empty()).then(|| Ok(text.to_string()))
    }

    fn too_long() -> AppError {
        AppError::Deserialization(format!("stream line exceeds {MAX_LINE_BYTES} bytes"))
    }
}

/// A record that can appear on a stream
pub trait StreamRecord: Sized {
    /// Decodes one line
    ///
    /// # Errors
    /// Fails on malformed JSON, on a line that is not a JSON object, or on a record
    /// whose fields do not match the selected shape.
    fn decode(line: &str) -> V20Result<Self>;

    /// `"heartbeat"` or the domain kind
    fn kind(&self) -> &'static str;
}

/// Record on the transaction stream
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionStreamItem {
    /// Keep-alive
    Heartbeat(TransactionHeartbeat),
    /// Account transaction
    Transaction(Transaction),
}

/// Record on the pricing stream
#[derive(Debug, Clone, PartialEq)]
pub enum PricingStreamItem {
    /// Keep-alive
    Heartbeat(PricingHeartbeat),
    /// Price update
    Price(ClientPrice),
}

fn parse_object(line: &str) -> V20Result<(Value, bool)> {
    let value: Value = serde_json::from_str(line)?;
    let Some(object) = value.as_object() else {
        return Err(AppError::Deserialization(format!(
            "stream record is not a JSON object: {line}"
        )));
    };
    let heartbeat = object.get("type").and_then(Value::as_str) == Some(HEARTBEAT_TYPE);
    Ok((value, heartbeat))
}

impl StreamRecord for TransactionStreamItem {
    fn decode(line: &str) -> V20Result<Self> {
        let (value, heartbeat) = parse_object(line)?;
        if heartbeat {
            Ok(Self::Heartbeat(serde_json::from_value(value)?))
        } else {
            Ok(Self::Transaction(Transaction::from_value(value)?))
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Heartbeat(_) => "heartbeat",
            Self::Transaction(_) => "transaction",
        }
    }
}

impl StreamRecord for PricingStreamItem {
    fn decode(line: &str) -> V20Result<Self> {
        let (value, heartbeat) = parse_object(line)?;
        if heartbeat {
            Ok(Self::Heartbeat(serde_json::from_value(value)?))
        } else {
            Ok(Self::Price(serde_json::from_value(value)?))
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Heartbeat(_) => "heartbeat",
            Self::Price(_) => "price",
        }
    }
}

struct DecodeState<S> {
    chunks: Option<S>,
    buffer: LineBuffer,
    ready: VecDeque<V20Result<String>>,
}

/// Decodes a stream of body chunks into records, one line at a time
///
/// A transport error is yielded once and ends the stream.
pub fn decode_records<S, B, T>(chunks: S) -> impl Stream<Item = V20Result<T>>
where
    S: Stream<Item = V20Result<B>> + Unpin,
    B: AsRef<[u8]>,
    T: StreamRecord,
{
    let state = DecodeState {
        chunks: Some(chunks),
        buffer: LineBuffer::new(),
        ready: VecDeque::new(),
    };

    stream::unfold(state, |mut state| async move {
        loop {
            if let Some(line) = state.ready.pop_front() {
                let record = line.and_then(|line| T::decode(&line));
                return Some((record, state));
            }

            let chunks = state.chunks.as_mut()?;
            match chunks.next().await {
                Some(Ok(chunk)) => {
                    let lines = state.buffer.push(chunk.as_ref());
                    state.ready.extend(lines);
                }
                Some(Err(e)) => {
                    state.chunks = None;
                    return Some((Err(e), state));
                }
                None => {
                    debug!("Stream closed by server");
                    state.chunks = None;
                    state.ready.extend(state.buffer.finish());
                }
            }
        }
    })
}

/// Reads the body of an open streaming response as records
pub fn decode_response<T>(response: reqwest::Response) -> RecordStream<T>
where
    T: StreamRecord + Send + 'static,
{
    let chunks = stream::unfold(Some(response), |response| async move {
        let mut response = response?;
        match response.chunk().await {
            Ok(Some(chunk)) => Some((Ok(chunk), Some(response))),
            Ok(None) => None,
            Err(e) => Some((Err(AppError::from(e)), None)),
        }
    });
    decode_records(Box::pin(chunks)).boxed()
}
