use crate::rational::Q;
use std::collections::{BTreeMap, VecDeque};

/// Stream identifier. Handles 0, 1 and 2 are reserved for the standard
/// streams; any other integer names a user stream, created on first use.
pub type Handle = i64;

/// Why a dequeue could not produce a value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Wait {
    /// The stream is empty but still open; more data may arrive.
    Blocked,
    /// The stream is empty and has been closed.
    Closed,
}

#[derive(Clone, Debug, Default)]
struct Stream {
    queue: VecDeque<Q>,
    closed: bool,
}

/// Per-handle FIFO queues of rationals with an end-of-file marker.
///
/// Values enqueued before a close drain normally; once a closed stream
/// is empty, reads report [`Wait::Closed`].
#[derive(Debug, Default)]
pub struct StreamTable {
    streams: BTreeMap<Handle, Stream>,
}

impl StreamTable {
    pub fn new() -> StreamTable {
        StreamTable::default()
    }

    /// Appends a value to the back of the stream.
    pub fn enqueue(&mut self, handle: Handle, value: Q) {
        self.stream_mut(handle).queue.push_back(value);
    }

    /// Removes and returns the front value, or reports why it cannot.
    pub fn dequeue(&mut self, handle: Handle) -> Result<Q, Wait> {
        let stream = self.stream_mut(handle);

        match stream.queue.pop_front() {
            Some(value) => Ok(value),
            None if stream.closed => Err(Wait::Closed),
            None => Err(Wait::Blocked),
        }
    }

    /// Number of values currently queued on the stream.
    pub fn len(&self, handle: Handle) -> usize {
        self.streams
            .get(&handle)
            .map(|stream| stream.queue.len())
            .unwrap_or(0)
    }

    /// Marks the stream closed. Queued values remain readable.
    pub fn close(&mut self, handle: Handle) {
        self.stream_mut(handle).closed = true;
    }

    /// Whether the stream has been closed.
    pub fn is_closed(&self, handle: Handle) -> bool {
        self.streams
            .get(&handle)
            .map(|stream| stream.closed)
            .unwrap_or(false)
    }

    fn stream_mut(&mut self, handle: Handle) -> &mut Stream {
        self.streams.entry(handle).or_default()
    }
}
