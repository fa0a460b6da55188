//! Time sources and the resolvers that supply them to a [`Provider`](crate::Provider).

use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Reference epoch of the time prefix: Saturday, January 1, 2000 00:00:00 UTC, expressed as the
/// duration since the Unix epoch.
pub const EPOCH: Duration = Duration::from_secs(946_684_800);

/// A trait for clocks that report whole seconds elapsed since [`EPOCH`].
///
/// This abstraction allows you to plug in the real system clock or a mocked time source in tests.
///
/// # Examples
///
/// ```rust
/// use tuid::{Provider, TimeSource};
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn seconds_since_epoch(&self) -> u32 {
///         1234
///     }
/// }
///
/// let p = Provider::new(FixedTime);
/// assert_eq!(p.generate().time(), 1234);
/// ```
pub trait TimeSource {
    /// Returns the current number of whole seconds since [`EPOCH`].
    fn seconds_since_epoch(&self) -> u32;
}

/// The default [`TimeSource`] that reads the wall clock through [`SystemTime::now()`].
///
/// A clock set earlier than [`EPOCH`] reads as zero; readings beyond `u32::MAX` seconds wrap.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn seconds_since_epoch(&self) -> u32 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH + EPOCH)
            .map_or(0, |elapsed| elapsed.as_secs() as u32)
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn seconds_since_epoch(&self) -> u32 {
        (**self).seconds_since_epoch()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for Box<T> {
    fn seconds_since_epoch(&self) -> u32 {
        (**self).seconds_since_epoch()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for Arc<T> {
    fn seconds_since_epoch(&self) -> u32 {
        (**self).seconds_since_epoch()
    }
}

/// Supplies the [`TimeSource`] a [`Provider`](crate::Provider) is built with.
///
/// Tests substitute a deterministic clock by handing a different resolver to
/// [`Provider::from_resolver()`](crate::Provider::from_resolver).
pub trait Resolver {
    /// The time source type this resolver yields.
    type Source: TimeSource;

    /// Returns the time source to bind.
    fn time_source(&self) -> Self::Source;
}

/// The [`Resolver`] that yields [`SystemClock`].
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct DefaultResolver;

impl Resolver for DefaultResolver {
    type Source = SystemClock;

    fn time_source(&self) -> Self::Source {
        SystemClock
    }
}
