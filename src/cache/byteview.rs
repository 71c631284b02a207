use bytes::Bytes;

/// An immutable view over a cached byte payload.
///
/// This is the only value type that crosses component boundaries on the hot
/// path: the LRU store holds one per entry, the coordinator returns one per
/// lookup, and the peer handler serializes one onto the wire. The backing
/// storage is reference counted and read-only, so cloning a view is O(1)
/// and no holder can mutate the bytes another holder sees.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteView {
    data: Bytes,
}

impl ByteView {
    /// Payload size in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a cheap handle to the payload. The handle shares the backing
    /// storage but cannot be used to modify it.
    pub fn bytes(&self) -> Bytes {
        self.data.clone()
    }

    /// Returns an owned copy of the payload.
    pub fn to_vec(&self) -> Vec<u8> {
        self.data.to_vec()
    }
}

impl From<Bytes> for ByteView {
    fn from(data: Bytes) -> Self {
        Self { data }
    }
}

impl From<Vec<u8>> for ByteView {
    fn from(data: Vec<u8>) -> Self {
        Self { data: data.into() }
    }
}

impl From<&[u8]> for ByteView {
    fn from(data: &[u8]) -> Self {
        Self {
            data: Bytes::copy_from_slice(data),
        }
    }
}

impl From<&str> for ByteView {
    fn from(data: &str) -> Self {
        Self {
            data: Bytes::copy_from_slice(data.as_bytes()),
        }
    }
}

impl AsRef<[u8]> for ByteView {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}
