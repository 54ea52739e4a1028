#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![allow(non_snake_case)]
#![forbid(unsafe_code)]
#![warn(
    clippy::unwrap_used,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused,
    unused_attributes,
    unused_imports,
    unused_mut,
    unused_must_use
)]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

// Internal macros. Must come first!
#[macro_use]
pub(crate) mod macros;

pub use subtle;
pub use zeroize;

pub(crate) mod field;
pub(crate) mod montgomery;
pub(crate) mod scalar;

pub use field::{FieldElement, MODULUS_BYTES};
pub use montgomery::{MontgomeryPoint, ProjectiveMontgomeryPoint};
pub use scalar::MontgomeryScalar;

/// Size in bytes of an encoded scalar.
pub const SCALAR_SIZE: usize = 32;

/// Size in bytes of an encoded Montgomery u-coordinate.
pub const POINT_SIZE: usize = 32;
