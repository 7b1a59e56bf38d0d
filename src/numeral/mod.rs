//! Numeral module - the conversion table and the Arabic/Roman codec

pub mod classify;
pub mod codec;
pub mod error;
pub mod table;

pub use classify::*;
pub use codec::*;
pub use error::*;
pub use table::*;
