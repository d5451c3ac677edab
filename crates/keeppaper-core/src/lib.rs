pub mod error;
pub mod logging;

pub mod group;
pub mod instapaper;
pub mod keep;
pub mod pipeline;

pub use error::ConvertError;
pub use pipeline::{convert, ConversionSummary};
