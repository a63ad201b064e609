//! UUIDv4 generator and related types.

use crate::Uuid;

pub mod with_rand08;

/// A trait that defines the minimum random number generator interface for [`V4Generator`].
pub trait RandSource {
    /// Returns the next random `u32`.
    fn next_u32(&mut self) -> u32;
}

/// Represents a UUIDv4 generator that draws random bits from a random number generator of choice.
///
/// Each UUID is assembled from eight independently drawn 16-bit values (two per `next_u32` call),
/// of which the fourth loses its top nibble to the version `4` and the fifth its top two bits to
/// the variant `10`. The random number generator is called four times per UUID and nothing else
/// is kept between calls, so the quality of the output is exactly that of the source.
///
/// The default generator behind [`uuid4`](crate::uuid4) uses a cryptographically secure source.
/// This type lets callers plug in another one, e.g. a seeded RNG for reproducible tests. The
/// following example shares one generator among threads.
///
/// # Examples
///
/// ```rust
/// use rand::rngs::OsRng;
/// use std::{sync, thread};
/// use uuid345::V4Generator;
///
/// let g = sync::Arc::new(sync::Mutex::new(V4Generator::with_rand08(OsRng)));
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = sync::Arc::clone(&g);
///         s.spawn(move || {
///             for _ in 0..8 {
///                 println!("{} by thread {}", g.lock().unwrap().generate(), i);
///                 thread::yield_now();
///             }
///         });
///     }
/// });
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct V4Generator<R> {
    /// The random number generator used by the generator.
    rng: R,
}

impl<R: RandSource> V4Generator<R> {
    /// Creates a generator instance.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a new UUIDv4 object.
    pub fn generate(&mut self) -> Uuid {
        let mut fields = [0u16; 8];
        for pair in fields.chunks_exact_mut(2) {
            let r = self.rng.next_u32();
            pair[0] = (r >> 16) as u16;
            pair[1] = r as u16;
        }
        Uuid::from_fields_v4(fields)
    }
}

/// Supports operations as an infinite iterator that produces a new UUIDv4 object for each call of
/// `next()`.
///
/// # Examples
///
/// ```rust
/// use uuid345::V4Generator;
///
/// V4Generator::with_rand08(rand::thread_rng())
///     .enumerate()
///     .skip(4)
///     .take(4)
///     .for_each(|(i, e)| println!("[{}] {}", i, e));
/// ```
impl<R: RandSource> Iterator for V4Generator<R> {
    type Item = Uuid;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: RandSource> core::iter::FusedIterator for V4Generator<R> {}
