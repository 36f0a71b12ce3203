//! Console box: the sink that receives loaded scripts.

mod console_box;
mod sink;

pub use console_box::ConsoleBox;
pub use sink::Sink;
