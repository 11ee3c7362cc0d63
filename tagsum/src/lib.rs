//
// Copyright (c) 2023 ZettaScale Technology
//
// This program and the accompanying materials are made available under the
// terms of the Eclipse Public License 2.0 which is available at
// http://www.eclipse.org/legal/epl-2.0, or the Apache License, Version 2.0
// which is available at https://www.apache.org/licenses/LICENSE-2.0.
//
// SPDX-License-Identifier: EPL-2.0 OR Apache-2.0
//
// Contributors:
//   Pierre Avital, <pierre.avital@me.com>
//

#![cfg_attr(not(feature = "std"), no_std)]
//! Result and optional containers with a monadic combinator API.
//!
//! ```
//! use tagsum::prelude::*;
//!
//! fn parse(s: &str) -> Result<i32, &'static str> {
//!     s.parse().map_or(Result::Err("not a number"), Result::Ok)
//! }
//! let doubled = parse("21").map(|x| x * 2);
//! assert_eq!(doubled, Result::Ok(42));
//! assert_eq!(parse("x").and_then(|x| Result::Ok(x + 1)), Failure::new("not a number"));
//! ```

pub use tagsum_core::{Failure, Nothing, OptionalFallback, ResultFallback};

pub mod result {
    //! Results that carry their error as plain data.
    pub use tagsum_core::result::{swap, Result};
}
pub mod optional {
    //! Values that may be absent.
    pub use tagsum_core::optional::{swap, Nothing, Optional};
}
pub use optional::Optional;
pub use result::Result;

/// Brings the containers and their markers into scope.
///
/// This shadows `core::result::Result`; `Ok`, `Err`, `Some` and `None` keep referring to
/// the standard variants.
pub mod prelude {
    pub use crate::{Failure, Nothing, Optional, Result};
}
