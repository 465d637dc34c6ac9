mod format;
mod media;

pub use format::*;
pub use media::*;
