// SPDX-FileCopyrightText: 2026 Holdscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

mod amount;
mod enrich;
mod errors;
mod etherscan;
mod event;
mod ownership;
mod rpc;
mod scanner;
mod source;
mod spans;

pub use amount::*;
pub use enrich::*;
pub use errors::*;
pub use etherscan::*;
pub use event::*;
pub use ownership::*;
pub use rpc::*;
pub use scanner::*;
pub use source::*;
