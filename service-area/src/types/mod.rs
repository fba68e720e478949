mod color;
pub use color::{Color, Palette};

mod geo_bounds;
pub use geo_bounds::{GeoBounds, ViewportBounds};

mod zip_point;
pub use zip_point::{format_miles, ZipPoint};

mod service_area;
pub use service_area::{ContractorId, ServiceArea};
