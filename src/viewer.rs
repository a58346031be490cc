mod error;
mod hyperstack;
mod position;
mod processor;
mod traits;


pub use error::{Result, ViewerError};
pub use hyperstack::{DisplayMode, HyperStackViewer};
pub use position::{StackExtents, StackPosition};
pub use processor::{DefaultConverter, ImageProcessor, ProcessorConverter};
pub use traits::{SharedViewer, StackViewer, VirtualStack};
