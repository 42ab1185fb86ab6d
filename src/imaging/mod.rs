pub mod layout;
pub mod png;
pub mod raster;
