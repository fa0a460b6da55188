//! Tuid provider and related types.

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{rng, Resolver, SystemClock, TimeSource, Tuid};

/// Represents a Tuid generator bound to a [`TimeSource`].
///
/// A provider holds nothing but its time source, so it can be shared across threads and reused for
/// any number of [`generate`](Provider::generate) calls without synchronization. The random part
/// of each Tuid always comes from a cryptographically strong, OS-seeded source that cannot be
/// replaced.
///
/// Tuids generated from time readings at least one second apart sort by that reading. Tuids from
/// the same second are ordered by their random bits only.
///
/// # Examples
///
/// ```rust
/// use std::thread;
/// use tuid::{DefaultResolver, Provider};
///
/// let p = Provider::from_resolver(&DefaultResolver);
/// thread::scope(|s| {
///     for i in 0..4 {
///         let p = &p;
///         s.spawn(move || {
///             for _ in 0..8 {
///                 println!("{} by thread {}", p.generate(), i);
///             }
///         });
///     }
/// });
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Provider<T> {
    time_source: T,
}

/// Process-wide provider bound to the [`SystemClock`].
pub const DEFAULT_PROVIDER: Provider<SystemClock> = Provider::new(SystemClock);

impl<T> Provider<T> {
    /// Creates a provider bound to `time_source`.
    pub const fn new(time_source: T) -> Self {
        Self { time_source }
    }

    /// Returns a reference to the bound time source.
    pub const fn time_source(&self) -> &T {
        &self.time_source
    }
}

impl<T: TimeSource> Provider<T> {
    /// Creates a provider bound to the time source `resolver` yields.
    pub fn from_resolver<R: Resolver<Source = T>>(resolver: &R) -> Self {
        Self::new(resolver.time_source())
    }

    /// Generates a new Tuid from one time reading and two random words.
    ///
    /// # Panics
    ///
    /// Panics if the operating system cannot provide entropy to seed the random source.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate(&self) -> Tuid {
        let time = self.time_source.seconds_since_epoch();
        Tuid::from_parts(time, rng::next_u64(), rng::next_u64())
    }
}

/// Supports operations as an infinite iterator that produces a new Tuid for each call of `next()`.
///
/// # Examples
///
/// ```rust
/// use tuid::DEFAULT_PROVIDER;
///
/// let batch: Vec<_> = DEFAULT_PROVIDER.take(4).collect();
/// assert!(batch[0].time() <= batch[3].time());
/// ```
impl<T: TimeSource> Iterator for Provider<T> {
    type Item = Tuid;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T: TimeSource> std::iter::FusedIterator for Provider<T> {}
