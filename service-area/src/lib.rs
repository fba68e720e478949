//! Service area projection and rendering.
//!
//! Fetches contractors' service areas from a [`ServiceAreaSource`], fits them
//! into one padded viewport, projects them onto a flat canvas and draws them
//! through a [`DrawingSurface`].

pub mod bounds;
pub mod errors;
pub mod legend;
pub mod list;
pub mod map;
pub mod projection;
pub mod render;
pub mod source;
pub mod surface;
pub mod types;

pub use errors::{MapError, Result};
pub use list::{ListState, ServiceAreaList, ZipCard};
pub use map::{MapConfig, MapState, ServiceAreaMap, Target};
pub use projection::Projection;
pub use source::ServiceAreaSource;
pub use surface::{DrawingSurface, Scene};
pub use types::{Color, ContractorId, GeoBounds, Palette, ServiceArea, ViewportBounds, ZipPoint};
