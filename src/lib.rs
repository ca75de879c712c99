//! A minimal 2D affine transformation library.
//!
//! # Motivation
//!
//! 2D renderers keep coming back to the same small piece of linear algebra: a 2×3 matrix that
//! translates, scales, rotates and skews points, composed left-to-right and occasionally inverted,
//! then padded out to a 3×4 layout so a GPU pipeline can consume it. General-purpose linear
//! algebra libraries cover this, but pay for their generality with complexity (and often with
//! breaking releases) that is hard to justify when all a renderer needs is six floats and a dozen
//! operations.
//!
//! This crate provides exactly that: [`AffineMatrix`], an immutable 6-coefficient value type with
//! pure operations and no further machinery.
//!
//! # Goals & Non-Goals
//!
//! - Support a single fixed-size 2×3 matrix type. No dynamically-sized or const-generic matrices;
//!   if a consumer needs those, it needs a different library.
//! - Be generic over the scalar type, but only over floating-point scalars. The scalar width is
//!   picked once (via [`AffineMatrixf`] or an explicit type parameter) and applies to every
//!   operation uniformly; [`f32`] is the default width.
//! - Stay out of the error-handling business. The only degenerate case is inverting a
//!   near-singular matrix, and the default policy there is a documented identity fallback rather
//!   than a fallible API (see [`AffineMatrix::invert`]).
//! - Keep the public dependency surface minimal. The only dependency is [`bytemuck`], so that
//!   matrices and their padded export can be handed to a GPU as plain bytes.

pub mod approx;

mod affine;
mod traits;

pub use affine::*;
pub use traits::*;
