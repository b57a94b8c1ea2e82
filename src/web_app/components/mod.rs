// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Reusable atomic components (Button, Modal, Loading, etc.)
// - product.rs: Product display components (ProductCard, CarouselSlide, ...)
// - widgets.rs: The four recommendation widgets

pub mod common;
pub mod product;
pub mod widgets;

// Re-export commonly used components for convenience
pub use common::*;
pub use product::*;
pub use widgets::*;
