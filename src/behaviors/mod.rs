//! One module per page behavior. Each `install` walks the current document,
//! wires whatever matching markup it finds, and is a no-op otherwise.

pub mod a11y;
pub mod analytics;
pub mod carousel;
pub mod images;
pub mod lazy;
pub mod newsletter;
pub mod scroll;
pub mod search;
pub mod wishlist;
