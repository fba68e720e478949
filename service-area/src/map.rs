//! The map component: fetches service areas, fits them into one viewport and
//! draws them.

use tracing::{error, info, warn};

use crate::bounds::compute_viewport;
use crate::errors::{MapError, Result};
use crate::legend::draw_legend;
use crate::projection::Projection;
use crate::render::{RenderOptions, ServiceAreaRenderer};
use crate::source::ServiceAreaSource;
use crate::surface::{DrawingSurface, ScreenPoint, TextAnchor, TextStyle};
use crate::types::{Color, ContractorId, Palette, ServiceArea, ViewportBounds};

pub const DEFAULT_WIDTH: f64 = 600.0;
pub const DEFAULT_HEIGHT: f64 = 400.0;

const MESSAGE_FONT_SIZE: f64 = 14.0;

/// Which contractors the map shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Single(ContractorId),
    Multiple(Vec<ContractorId>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    pub target: Target,
    pub width: f64,
    pub height: f64,
    pub show_zip_codes: bool,
    pub show_radius: bool,
    pub colors: Palette,
}

impl MapConfig {
    pub fn new(target: Target) -> Self {
        Self {
            target,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            show_zip_codes: true,
            show_radius: true,
            colors: Palette::default(),
        }
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_zip_codes(mut self, show: bool) -> Self {
        self.show_zip_codes = show;
        self
    }

    pub fn with_radius(mut self, show: bool) -> Self {
        self.show_radius = show;
        self
    }

    pub fn with_colors(mut self, colors: Palette) -> Self {
        self.colors = colors;
        self
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            show_zip_codes: self.show_zip_codes,
            show_radius: self.show_radius,
        }
    }
}

/// Outcome of the most recent load.
#[derive(Debug, Clone, PartialEq)]
pub enum MapState {
    Uninitialized,
    Ready { areas: usize },
    Failed(MapError),
}

impl MapState {
    pub fn is_ready(&self) -> bool {
        matches!(self, MapState::Ready { .. })
    }
}

/// Owns one drawing surface and keeps it in sync with the targeted
/// contractors.
///
/// Every load replaces the previous areas and viewport entirely. Failures are
/// never returned to the caller: the surface shows a centered message and the
/// error is kept in [`MapState::Failed`].
pub struct ServiceAreaMap<S, D> {
    source: S,
    surface: D,
    config: MapConfig,
    service_areas: Vec<ServiceArea>,
    viewport: Option<ViewportBounds>,
    state: MapState,
}

impl<S: ServiceAreaSource, D: DrawingSurface> ServiceAreaMap<S, D> {
    pub fn new(source: S, surface: D, config: MapConfig) -> Self {
        Self {
            source,
            surface,
            config,
            service_areas: Vec::new(),
            viewport: None,
            state: MapState::Uninitialized,
        }
    }

    /// Sizes the surface from the configuration, then loads and draws.
    pub fn initialize(&mut self) -> &MapState {
        self.surface.resize(self.config.width, self.config.height);
        self.refresh()
    }

    /// Re-fetches the current target and redraws from a cleared surface.
    ///
    /// The surface is left untouched until the fetch returns.
    pub fn refresh(&mut self) -> &MapState {
        match self.load_service_areas() {
            Ok(areas) => {
                if let Err(err) = self.render(areas) {
                    self.show_error(err);
                }
            }
            Err(err) => self.show_error(err),
        }
        &self.state
    }

    /// Switches to a single contractor and reloads.
    pub fn update_contractor(&mut self, contractor_id: ContractorId) -> &MapState {
        self.config.target = Target::Single(contractor_id);
        self.refresh()
    }

    /// Switches to a set of contractors and reloads. An empty set shows the
    /// no-data message without contacting the source.
    pub fn update_contractors(&mut self, contractor_ids: Vec<ContractorId>) -> &MapState {
        self.config.target = Target::Multiple(contractor_ids);
        self.refresh()
    }

    fn load_service_areas(&self) -> Result<Vec<ServiceArea>> {
        let areas = match &self.config.target {
            Target::Single(id) => vec![self.source.fetch_contractor(*id)?],
            Target::Multiple(ids) if ids.is_empty() => return Err(MapError::NoData),
            Target::Multiple(ids) => self.source.fetch_contractors(ids)?,
        };

        let fetched = areas.len();
        let usable: Vec<ServiceArea> = areas
            .into_iter()
            .filter(ServiceArea::has_finite_coordinates)
            .collect();

        if usable.len() < fetched {
            warn!(
                "Skipping {} service areas with invalid coordinates",
                fetched - usable.len()
            );
        }
        if usable.is_empty() {
            return Err(MapError::NoData);
        }

        Ok(usable)
    }

    fn render(&mut self, areas: Vec<ServiceArea>) -> Result<()> {
        let viewport = compute_viewport(&areas)?;
        let (width, height) = self.surface.size();
        let projection = Projection::new(viewport, width, height)?;

        self.surface.clear();
        ServiceAreaRenderer::new(&projection, self.config.render_options()).draw_all(
            &mut self.surface,
            &areas,
            &self.config.colors,
        );
        draw_legend(&mut self.surface, &areas, &self.config.colors);

        info!("Rendered {} service areas", areas.len());
        self.state = MapState::Ready { areas: areas.len() };
        self.service_areas = areas;
        self.viewport = Some(viewport);
        Ok(())
    }

    fn show_error(&mut self, err: MapError) {
        match &err {
            MapError::NoData => warn!("No service areas to render for {:?}", self.config.target),
            _ => error!("Failed to render service areas: {}", err),
        }

        self.service_areas.clear();
        self.viewport = None;
        self.surface.clear();

        let (width, height) = self.surface.size();
        self.surface.add_text(
            ScreenPoint::new(width / 2.0, height / 2.0),
            &err.to_string(),
            TextStyle::new(Color::GRAY, MESSAGE_FONT_SIZE, TextAnchor::Middle),
        );
        self.state = MapState::Failed(err);
    }

    /// The projection the current drawing was made with.
    pub fn projection(&self) -> Option<Projection> {
        let (width, height) = self.surface.size();
        self.viewport
            .and_then(|viewport| Projection::new(viewport, width, height).ok())
    }

    pub fn service_areas(&self) -> &[ServiceArea] {
        &self.service_areas
    }

    pub fn viewport(&self) -> Option<&ViewportBounds> {
        self.viewport.as_ref()
    }

    pub fn state(&self) -> &MapState {
        &self.state
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    pub fn target(&self) -> &Target {
        &self.config.target
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::surface::{Scene, ShapeTag};

    struct FixedSource {
        areas: Vec<ServiceArea>,
        calls: Cell<usize>,
    }

    impl FixedSource {
        fn new(areas: Vec<ServiceArea>) -> Self {
            Self {
                areas,
                calls: Cell::new(0),
            }
        }
    }

    impl ServiceAreaSource for FixedSource {
        fn fetch_contractor(&self, contractor_id: ContractorId) -> Result<ServiceArea> {
            self.calls.set(self.calls.get() + 1);
            self.areas
                .get(contractor_id as usize)
                .cloned()
                .ok_or_else(|| MapError::DataFetch("not found".to_string()))
        }

        fn fetch_contractors(&self, contractor_ids: &[ContractorId]) -> Result<Vec<ServiceArea>> {
            self.calls.set(self.calls.get() + 1);
            Ok(contractor_ids
                .iter()
                .filter_map(|id| self.areas.get(*id as usize).cloned())
                .collect())
        }
    }

    fn source() -> FixedSource {
        FixedSource::new(vec![
            ServiceArea::new("North", (34.3, -118.4), 5.0, vec![]),
            ServiceArea::new("South", (33.7, -117.9), 5.0, vec![]),
        ])
    }

    fn scene() -> Scene {
        Scene::new(600., 400.)
    }

    #[test]
    fn test_initialize_sizes_surface() {
        let config = MapConfig::new(Target::Single(0)).with_size(800., 500.);
        let mut map = ServiceAreaMap::new(source(), Scene::new(1., 1.), config);

        assert_eq!(map.state(), &MapState::Uninitialized);
        assert!(map.initialize().is_ready());
        assert_eq!(map.surface().size(), (800., 500.));
    }

    #[test]
    fn test_retarget_replaces_viewport() {
        let mut map = ServiceAreaMap::new(source(), scene(), MapConfig::new(Target::Single(0)));
        map.initialize();
        let north = *map.viewport().unwrap();

        map.update_contractor(1);
        let south = *map.viewport().unwrap();

        assert_ne!(north, south);
        assert!(!south.contains(34.3, -118.4));
        assert_eq!(map.service_areas()[0].company_name, "South");
    }

    #[test]
    fn test_empty_target_skips_fetch() {
        let mut map = ServiceAreaMap::new(source(), scene(), MapConfig::new(Target::Single(0)));
        map.initialize();

        let state = map.update_contractors(vec![]).clone();

        assert_eq!(state, MapState::Failed(MapError::NoData));
        assert_eq!(map.source.calls.get(), 1);
        assert_eq!(map.surface().texts(), vec!["No service area data available"]);
        assert!(map.service_areas().is_empty());
        assert!(map.viewport().is_none());
    }

    #[test]
    fn test_unknown_contractor_shows_error_text_only() {
        let mut map = ServiceAreaMap::new(source(), scene(), MapConfig::new(Target::Single(9)));

        map.initialize();

        assert!(matches!(map.state(), MapState::Failed(MapError::DataFetch(_))));
        assert_eq!(map.surface().shapes().len(), 1);
        assert_eq!(map.surface().count(ShapeTag::Text), 1);
    }

    #[test]
    fn test_areas_with_bad_coordinates_are_dropped() {
        let mut broken = ServiceArea::new("Broken", (34.0, -118.0), 5.0, vec![]);
        broken.center_latitude = f64::INFINITY;
        let mut areas = source().areas;
        areas.push(broken);
        let mut map = ServiceAreaMap::new(
            FixedSource::new(areas),
            Scene::new(600., 400.),
            MapConfig::new(Target::Multiple(vec![0, 2])),
        );

        assert_eq!(map.initialize(), &MapState::Ready { areas: 1 });

        map.update_contractors(vec![2]);
        assert_eq!(map.state(), &MapState::Failed(MapError::NoData));
    }

    #[test]
    fn test_error_text_is_centered() {
        let config = MapConfig::new(Target::Multiple(vec![]));
        let mut map = ServiceAreaMap::new(source(), scene(), config);
        map.initialize();

        match &map.surface().shapes()[0].kind {
            crate::surface::ShapeKind::Text { at, style, .. } => {
                assert_eq!(*at, ScreenPoint::new(300., 200.));
                assert_eq!(style.anchor, TextAnchor::Middle);
            }
            other => panic!("unexpected shape {:?}", other),
        }
    }
}
