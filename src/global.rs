//! Default entry point function.

use crate::{Tuid, DEFAULT_PROVIDER};

/// Generates a Tuid from the system clock.
///
/// Equivalent to calling [`Provider::generate()`](crate::Provider::generate) on
/// [`DEFAULT_PROVIDER`]. On Unix, the random source is reseeded when the process ID changes (i.e.,
/// upon process forks) to prevent collisions across processes.
///
/// # Examples
///
/// ```rust
/// let tuid = tuid::generate();
/// println!("{}", tuid); // e.g., "BPOEHSLFPGT4YVVZRWWPDCQAO3DWPA4J"
/// println!("{:?}", tuid.to_bytes()); // as 20-byte big-endian array
///
/// let tuid_string: String = tuid::generate().to_string();
/// ```
pub fn generate() -> Tuid {
    DEFAULT_PROVIDER.generate()
}

#[cfg(test)]
mod tests {
    use super::generate;
    use crate::{SystemClock, TimeSource, Tuid};

    const N_SAMPLES: usize = 100_000;
    thread_local!(static SAMPLES: Vec<String> = (0..N_SAMPLES).map(|_| generate().into()).collect());

    /// Generates canonical string
    #[test]
    fn generates_canonical_string() {
        let re = regex::Regex::new(r"^[A-Z2-7]{32}$").unwrap();
        SAMPLES.with(|samples| {
            for e in samples {
                assert!(re.is_match(e));
            }
        });
    }

    /// Generates text distinct from the Zero Tuid
    #[test]
    fn generates_text_distinct_from_the_zero_tuid() {
        let zero = Tuid::ZERO.to_string();
        let e = generate().to_string();
        assert_eq!(zero.len(), 32);
        assert_eq!(e.len(), 32);
        assert_ne!(e, zero);
    }

    /// Generates 100k identifiers without collision
    #[test]
    fn generates_100k_identifiers_without_collision() {
        use std::collections::HashSet;
        SAMPLES.with(|samples| {
            let s: HashSet<&String> = samples.iter().collect();
            assert_eq!(s.len(), N_SAMPLES);
        });
    }

    /// Round-trips generated identifiers through text
    #[test]
    fn round_trips_generated_identifiers_through_text() {
        SAMPLES.with(|samples| {
            for e in samples.iter().take(1_000) {
                let parsed = e.parse::<Tuid>().unwrap();
                assert_eq!(&parsed.to_string(), e);
                assert_eq!(Tuid::from_bytes(&parsed.to_bytes()), Ok(parsed));
            }
        });
    }

    /// Encodes up-to-date timestamp
    #[test]
    fn encodes_up_to_date_timestamp() {
        for _ in 0..10_000 {
            let before = SystemClock.seconds_since_epoch();
            let e = generate();
            let after = SystemClock.seconds_since_epoch();
            assert!(before <= e.time() && e.time() <= after);
        }
    }

    /// Keeps time prefixes non-decreasing in generation order
    #[test]
    fn keeps_time_prefixes_non_decreasing_in_generation_order() {
        SAMPLES.with(|samples| {
            for i in 1..N_SAMPLES {
                let prev = samples[i - 1].parse::<Tuid>().unwrap();
                let curr = samples[i].parse::<Tuid>().unwrap();
                assert!(prev.time() <= curr.time());
                // the leading 30 time bits fill the first six characters
                if prev.time() == curr.time() {
                    assert_eq!(samples[i - 1][..6], samples[i][..6]);
                }
            }
        });
    }

    /// Sets random bits properly
    #[test]
    fn sets_random_bits_properly() {
        // count '1' of each bit
        let bins = SAMPLES.with(|samples| {
            let mut bins = [0u32; 160];
            for e in samples {
                let bytes = e.parse::<Tuid>().unwrap().to_bytes();
                for (byte, chunk) in bytes.iter().zip(bins.chunks_mut(8)) {
                    for (k, bin) in chunk.iter_mut().enumerate() {
                        *bin += ((byte >> (7 - k)) & 1) as u32;
                    }
                }
            }
            bins
        });

        // test if random bits are set to 1 at ~50% probability
        // set margin based on binom dist 99.999% confidence interval
        let margin = 4.417173 * (0.5 * 0.5 / N_SAMPLES as f64).sqrt();
        for i in 32..160 {
            let p = bins[i] as f64 / N_SAMPLES as f64;
            assert!((p - 0.5).abs() < margin, "random bit {i}: {p}");
        }
    }

    /// Generates no duplicate IDs under multithreading
    #[test]
    fn generates_no_duplicate_ids_under_multithreading() -> Result<(), Box<dyn std::error::Error>>
    {
        use std::{collections::HashSet, sync::mpsc, thread};

        let (tx, rx) = mpsc::channel();
        for _ in 0..4 {
            let tx = tx.clone();
            thread::Builder::new()
                .spawn(move || {
                    for _ in 0..10_000 {
                        tx.send(generate()).unwrap();
                    }
                })
                .map_err(|err| format!("failed to spawn thread: {err:?}"))?;
        }
        drop(tx);

        let mut s = HashSet::new();
        while let Ok(e) = rx.recv() {
            s.insert(e);
        }

        assert_eq!(s.len(), 4 * 10_000);
        Ok(())
    }
}
