//! # lanes - Recursive Short-Vector Math with a Flat C Interface
//!
//! * Fixed-width lane vectors of 2, 4, 8 or 16 elements, built recursively
//!   from two half-width vectors down to a one-element base case.
//! * Element types: `f32`, `f64`, `u8`, `u16`, `i32`, `u32`.
//! * Elementwise arithmetic, bitwise and shift operators, with scalar
//!   operands accepted on either side and compound-assignment forms.
//! * Comparisons produce all-bits-set/all-bits-clear masks consumable by
//!   bitwise operators and lane-wise select.
//! * Contiguous and 2/3/4-way interleaved loads and stores, horizontal
//!   min/max and any/all reductions, split/join, and index-list shuffles.
//! * Every operation is also exported as a `lanes_<elem>x<n>_<op>` C symbol
//!   over opaque owning handles, so a binding generator can wrap the whole
//!   surface mechanically (see [`capi`]).
//!
//! ## Example
//!
//! ```rust
//! use lanes::{f32x4, Vector};
//!
//! let a = f32x4::from_array([1.0, 2.0, 3.0, 4.0]);
//! let b = f32x4::splat(2.0);
//!
//! let sum = a + b;
//! assert_eq!(sum.get(3), 6.0);
//!
//! // Comparisons yield masks; masks drive lane-wise selection.
//! let mask = a.simd_lt(f32x4::splat(2.5));
//! let clamped = mask.select(a, f32x4::splat(2.5));
//! assert_eq!(clamped.get(0), 1.0);
//! assert_eq!(clamped.get(3), 2.5);
//! ```
//!
//! ## Memory Transfer
//!
//! ```rust
//! use lanes::{u8x8, Vector};
//!
//! // Deinterleave RGB-style channel triples into one vector per channel.
//! let data: [u8; 24] = [
//!     0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19,
//!     20, 21, 22, 23,
//! ];
//! let [r, g, b] = u8x8::from_interleaved3(&data);
//! assert_eq!(r.get(1), 3);
//! assert_eq!(g.get(1), 4);
//! assert_eq!(b.get(1), 5);
//!
//! let mut out = [0u8; 24];
//! u8x8::write_interleaved3(&mut out, &[r, g, b]);
//! assert_eq!(out, data);
//! ```
//!
//! ## Layout and Ownership
//!
//! An N-lane vector is laid out as exactly N contiguous elements, so loads
//! and stores round-trip byte-for-byte against flat buffers. On the Rust
//! side vectors are plain `Copy` values. The C boundary instead deals in
//! owning handles: each factory transfers exactly one, and each handle must
//! be freed exactly once (see [`capi`]).
#![allow(non_camel_case_types)]
#![cfg_attr(all(not(test), not(feature = "std")), no_std)]

extern crate alloc;

// Module declarations
pub mod capi;
pub mod scalars;
pub mod vectors;

// Re-export the lane capability traits
pub use scalars::{FloatLane, Lane, SignedLane, UnsignedLane};

// Re-export the vector core
pub use vectors::{fma, Pair, Single, Vector};

// Re-export the generic width aliases
pub use vectors::{x1, x16, x2, x4, x8};

// Re-export the concrete width aliases
pub use vectors::{f32x1, f32x16, f32x2, f32x4, f32x8};
pub use vectors::{f64x1, f64x16, f64x2, f64x4, f64x8};
pub use vectors::{i32x1, i32x16, i32x2, i32x4, i32x8};
pub use vectors::{u16x1, u16x16, u16x2, u16x4, u16x8};
pub use vectors::{u32x1, u32x16, u32x2, u32x4, u32x8};
pub use vectors::{u8x1, u8x16, u8x2, u8x4, u8x8};

// region: Tests


// endregion: Tests
