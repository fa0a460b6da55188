use data_encoding::DecodeError;

/// Error decoding a [`Tuid`](crate::Tuid) from its binary or text representation.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum Error {
    /// The byte sequence is not exactly 20 bytes long.
    #[error("tuid must be 20 bytes in length, got {len}")]
    MalformedInput {
        /// Length of the rejected input.
        len: usize,
    },

    /// The string is not valid padded base-32 text.
    #[error("invalid base32 representation: {0}")]
    InvalidEncoding(#[from] DecodeError),
}
