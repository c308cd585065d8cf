//! Zero-cost field indexing for solver hot loops
//!
//! Relaxation sweeps and advection touch every cell `iter` times per step, so
//! the bounds check on each neighbour read shows up in profiles.
//!
//! In Debug mode: normal bounds-checked indexing (panics with the bad index)
//! In Release mode: `get_unchecked` / `get_unchecked_mut`
//!
//! Every call site must index with values derived from the grid dimensions
//! (interior loops, clamped backtrace coordinates).
//!
//! Usage:
//! ```rust
//! use fluidart_engine::fast;
//!
//! let field = vec![0.5f32, 1.0, 2.0, 4.0];
//! let idx = 2;
//! // Read: fast!(slice, [index])
//! assert_eq!(*fast!(field, [idx]), 2.0);
//!
//! let mut pressure = vec![0.0f32; 4];
//! // Write: fast!(slice, [index] = value)
//! fast!(pressure, [idx] = 3.0);
//! // Accumulate: fast!(slice, [index] -= value)
//! fast!(pressure, [idx] -= 1.0);
//! assert_eq!(pressure[idx], 2.0);
//! ```

/// Bounds-checked in debug, unchecked in release.
#[macro_export]
macro_rules! fast {
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { *$slice.get_unchecked_mut($index) = $val; }
        }
    }};

    ($slice:expr, [$index:expr] += $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] += $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { *$slice.get_unchecked_mut($index) += $val; }
        }
    }};

    ($slice:expr, [$index:expr] -= $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] -= $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { *$slice.get_unchecked_mut($index) -= $val; }
        }
    }};
}
