pub mod directory;
pub mod geo;

pub use directory::DirectoryService;
pub use geo::GeoPoint;
