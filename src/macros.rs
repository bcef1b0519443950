//! A small handful of helper macros

#[cfg(test)]
use std::sync::atomic::AtomicBool;

// Always-on check for the structural invariants that insertion relies on. A failure here means
// the tree was already corrupted before the current operation started, so we abort loudly
// instead of continuing the mutation on a broken structure.
macro_rules! invariant {
    ($cond:expr, $($tt:tt)+) => {{
        if !$cond {
            invariant_violated!($($tt)+);
        }
    }};
}

// Diverging companion to `invariant!`, for match arms that are only reachable through a
// corrupted tree.
macro_rules! invariant_violated {
    ($($tt:tt)+) => {
        panic!("2-3 tree invariant violated: {}", format_args!($($tt)+))
    };
}

#[cfg(test)]
pub(crate) static DEBUG: AtomicBool = AtomicBool::new(false);

macro_rules! debug_println {
    ($($args:tt)*) => {
        #[cfg(test)]
        {
            if $crate::macros::DEBUG.load(std::sync::atomic::Ordering::SeqCst) {
                println!($($args)*);
            }
        };
    };
    ($($args:tt)*) => {};
}
