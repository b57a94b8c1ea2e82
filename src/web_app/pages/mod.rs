// web_app/pages/mod.rs - Page components module
//
// - RecommendationsPage: all four recommendation widgets on one page

pub mod recommendations;

pub use recommendations::RecommendationsPage;
