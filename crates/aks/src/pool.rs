// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::errors::AksResult;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::debug;

/// Builds a dedicated rayon pool with `threads` workers.
pub fn build_pool(threads: usize) -> AksResult<ThreadPool> {
    let pool = ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("aks-worker-{i}"))
        .build()?;
    debug!(threads = pool.current_num_threads(), "Built AKS thread pool");
    Ok(pool)
}

/// Runs `op` on a pool of `threads` workers, or on the global rayon pool when no size is
/// given.
pub fn install<OP, T>(threads: Option<usize>, op: OP) -> AksResult<T>
where
    OP: FnOnce() -> AksResult<T> + Send,
    T: Send,
{
    match threads {
        Some(threads) => build_pool(threads)?.install(op),
        None => op(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_on_sized_pool() {
        let threads = install(Some(2), || Ok(rayon::current_num_threads())).unwrap();
        assert_eq!(threads, 2);
    }

    #[test]
    fn test_install_without_size_runs_inline() {
        let value = install(None, || Ok(41 + 1)).unwrap();
        assert_eq!(value, 42);
    }
}
