//! Default generator and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::sync;

use crate::Uuid;
use inner::GlobalGenInner;

/// Returns the lock handle of process-wide global generator, creating one if none exists.
fn lock_global_gen() -> sync::MutexGuard<'static, GlobalGenInner> {
    static G: sync::OnceLock<sync::Mutex<GlobalGenInner>> = sync::OnceLock::new();
    // a panic while holding the lock cannot leave the random state inconsistent
    G.get_or_init(Default::default)
        .lock()
        .unwrap_or_else(sync::PoisonError::into_inner)
}

/// Generates a UUIDv4 object.
///
/// This function employs a process-wide generator backed by a cryptographically secure random
/// number generator. It is safe to call from any number of threads. On Unix, the generator is
/// reseeded when the process ID changes (i.e., upon process forks) so that parent and child do
/// not produce the same sequence.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid345::uuid4();
/// println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// assert!(uuid345::is_valid(&uuid.to_string()));
///
/// let uuid_string: String = uuid345::uuid4().into();
/// ```
pub fn uuid4() -> Uuid {
    lock_global_gen().get_mut().generate()
}

mod inner {
    use rand::rngs::{adapter::ReseedingRng, OsRng};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Core;

    use crate::generator::{RandSource, V4Generator};

    /// The type alias for the random number generator of the global generator.
    ///
    /// The global generator currently employs [`ChaCha12Core`] with [`ReseedingRng`] wrapper to
    /// emulate the strategy used by [`rand::rngs::ThreadRng`].
    #[derive(Debug)]
    pub struct GlobalGenRng(ReseedingRng<ChaCha12Core, OsRng>);

    impl RandSource for GlobalGenRng {
        fn next_u32(&mut self) -> u32 {
            rand::RngCore::next_u32(&mut self.0)
        }
    }

    /// A thin wrapper to reset the state when the process ID changes (i.e., upon Unix forks).
    #[derive(Debug)]
    pub struct GlobalGenInner {
        #[cfg(unix)]
        pid: u32,
        generator: V4Generator<GlobalGenRng>,
    }

    impl Default for GlobalGenInner {
        fn default() -> Self {
            Self {
                #[cfg(unix)]
                pid: std::process::id(),
                generator: V4Generator::new(GlobalGenRng(ReseedingRng::new(
                    ChaCha12Core::from_entropy(),
                    1024 * 64,
                    OsRng,
                ))),
            }
        }
    }

    impl GlobalGenInner {
        /// Returns a mutable reference to the inner [`V4Generator`] instance, reseting the
        /// generator state on Unix if the process ID has changed.
        pub fn get_mut(&mut self) -> &mut V4Generator<GlobalGenRng> {
            #[cfg(unix)]
            if self.pid != std::process::id() {
                tracing::debug!(
                    old_pid = self.pid,
                    new_pid = std::process::id(),
                    "process id changed; reseeding global generator"
                );
                *self = Default::default();
            }
            &mut self.generator
        }
    }
}
