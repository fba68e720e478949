mod service_areas;
pub use service_areas::ServiceAreas;
