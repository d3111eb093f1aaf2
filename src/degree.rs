//! Degree type and bounds for Fibonacci heap trees.
//!
//! # Why u8?
//!
//! The degree of a node is the number of its direct children. In a Fibonacci
//! heap without cuts, a root of degree `d` heads a tree of at least `F(d+2)`
//! nodes, so the largest degree that can appear in a heap of `n` elements is
//! below `log_φ(n)`.
//!
//! - 2⁶⁴ elements → max degree ~92
//! - `u8::MAX` (255) is far beyond anything addressable
//!
//! Using `u8` instead of `usize` saves 7 bytes per node on 64-bit systems.

/// Type alias for node degree.
pub type Degree = u8;

/// Maximum valid degree value.
pub const MAX_DEGREE: Degree = u8::MAX;

/// The golden ratio φ.
const PHI: f64 = 1.618_033_988_749_895;

/// Safely increment a degree, panicking on overflow.
///
/// # Panics
///
/// Panics if `degree == MAX_DEGREE`. That would need a tree of more than
/// `F(257)` nodes, so reaching it means the degree bookkeeping is broken.
///
/// # Example
///
/// ```rust
/// use mergeable_heap::degree::{checked_increment, Degree};
///
/// let degree: Degree = 5;
/// assert_eq!(checked_increment(degree), 6);
/// ```
#[inline]
pub fn checked_increment(degree: Degree) -> Degree {
    degree.checked_add(1).expect(
        "degree overflow: a tree of degree 255 needs more than F(257) nodes, \
         so the degree bookkeeping is corrupt",
    )
}

/// Number of degree buckets consolidation needs for a heap of `len` elements.
///
/// Returns `ceil(log_φ(len + 2)) + 2`, which strictly exceeds any degree a
/// root can reach while the heap holds `len` elements.
///
/// # Example
///
/// ```rust
/// use mergeable_heap::degree::max_degree_bound;
///
/// assert!(max_degree_bound(0) >= 1);
/// assert!(max_degree_bound(1_000_000) >= 29);
/// ```
pub fn max_degree_bound(len: usize) -> usize {
    let n = len as f64 + 2.0;
    (n.ln() / PHI.ln()).ceil() as usize + 2
}
