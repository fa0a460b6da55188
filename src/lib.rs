//! Time-prefixed 20-byte unique identifiers
//!
//! ```rust
//! let tuid = tuid::generate();
//! println!("{}", tuid); // e.g., "BPOEHSLFPGT4YVVZRWWPDCQAO3DWPA4J"
//! println!("{:?}", tuid.to_bytes()); // as 20-byte big-endian array
//! ```
//!
//! Time-prefixed identifiers have an advantage over purely random identifiers when used as keys of
//! indexed entities: because the time prefix groups entities created near each other in time,
//! updates to the index cluster into a small set of hot pages instead of touching the whole index.
//!
//! # Field and bit layout
//!
//! This implementation produces identifiers with the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             time                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             high                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             high                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                              low                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                              low                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 32-bit `time` field holds the whole seconds elapsed since 2000-01-01T00:00:00Z. It wraps
//!   after about 136 years.
//! - The 64-bit `high` and `low` fields are filled with cryptographically strong random numbers.
//!
//! All fields are big-endian. The text form is the padded RFC 4648 base-32 encoding of these 20
//! bytes and is always 32 characters long.
//!
//! Identifiers created at least one second apart compare in creation order. Identifiers created
//! within the same second are ordered by their random bits, i.e., effectively at random.
//!
//! # Deterministic time
//!
//! A [`Provider`] binds any [`TimeSource`], so tests can drive generation with a hand-controlled
//! clock:
//!
//! ```rust
//! use std::sync::atomic::{AtomicU32, Ordering};
//! use tuid::{Provider, TimeSource};
//!
//! struct Ticker(AtomicU32);
//! impl TimeSource for Ticker {
//!     fn seconds_since_epoch(&self) -> u32 {
//!         self.0.fetch_add(1, Ordering::Relaxed)
//!     }
//! }
//!
//! let p = Provider::new(Ticker(AtomicU32::new(100)));
//! let (a, b) = (p.generate(), p.generate());
//! assert!(a.before(&b) && b.after(&a));
//! ```
//!
//! # Crate features
//!
//! - `serde` enables serialization as text for human-readable formats and as 20 raw bytes
//!   otherwise.
//! - `tracing` instruments generation with trace-level spans.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub use error::Error;

mod id;
pub use id::{Tuid, BYTE_LEN, TEXT_LEN};

pub mod time;
#[doc(no_inline)]
pub use time::{DefaultResolver, Resolver, SystemClock, TimeSource, EPOCH};

pub mod provider;
#[doc(no_inline)]
pub use provider::{Provider, DEFAULT_PROVIDER};

mod global;
pub use global::generate;

mod rng;
