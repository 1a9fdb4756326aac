// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Threshold (Shamir) share generation on top of `polyshare-polynomial`.
//!
//! A random polynomial of degree `threshold - 1` is drawn over the prime field `Z/pZ`
//! and evaluated at randomly sampled points. Randomness is always supplied by the caller.

pub mod errors;
pub mod gen_shares;
pub mod primality;
pub mod shares;
pub mod sharing_config;

pub use errors::ShamirError;
pub use gen_shares::*;
pub use primality::*;
pub use shares::*;
pub use sharing_config::*;
