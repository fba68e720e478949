//! Service area maps: geometry and rendering in [`service_area`], the HTTP
//! source in [`api_client`].

pub use api_client;
pub use service_area;
