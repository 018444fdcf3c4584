//! ID3v2 items and utilities
//!
//! ## Important notes
//!
//! See:
//!
//! * [`parse_id3v2`]
//! * [`FrameHeader`]

mod frame;
pub(crate) mod header;
mod items;
mod read;
mod synchsafe;

// Exports

pub use frame::{FrameFlags, FrameHeader};
pub use items::*;
pub use read::parse_id3v2;
