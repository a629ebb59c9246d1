// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

mod acl;
mod error;
mod handle;
mod input;
mod mock;
mod protocol;
mod traits;

pub use acl::*;
pub use error::*;
pub use handle::*;
pub use input::*;
pub use mock::*;
pub use protocol::*;
pub use traits::*;
