//! Shared thread pool for batch runs.
//!
//! Batch jobs go through one lazily built pool so repeated runs do not pay
//! for pool construction.

#[cfg(feature = "parallel")]
use rayon::ThreadPool;

#[cfg(feature = "parallel")]
use std::sync::OnceLock;

#[cfg(feature = "parallel")]
static THREAD_POOL: OnceLock<Option<ThreadPool>> = OnceLock::new();

/// Get or initialize the shared pool.
///
/// `None` if the pool could not be built, in which case callers fall back to
/// rayon's global pool.
#[cfg(feature = "parallel")]
fn get_thread_pool() -> Option<&'static ThreadPool> {
    THREAD_POOL
        .get_or_init(|| {
            rayon::ThreadPoolBuilder::new()
                .thread_name(|i| format!("hypotest-{}", i))
                .build()
                .map_err(|e| tracing::warn!(error = %e, "falling back to the global rayon pool"))
                .ok()
        })
        .as_ref()
}

/// Execute `op` inside the shared pool.
#[cfg(feature = "parallel")]
pub fn install<OP, R>(op: OP) -> R
where
    OP: FnOnce() -> R + Send,
    R: Send,
{
    match get_thread_pool() {
        Some(pool) => pool.install(op),
        None => op(),
    }
}

#[cfg(not(feature = "parallel"))]
pub fn install<OP, R>(op: OP) -> R
where
    OP: FnOnce() -> R,
{
    op()
}
