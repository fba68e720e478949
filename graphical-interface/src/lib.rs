use std::{fs, path::Path};

use service_area::{MapConfig, MapState, Scene, ServiceAreaMap, ServiceAreaSource};

pub mod args;
mod map;
mod plugins;
mod state;
mod widgets;

pub use map::MyApp;

/// Renders the configured map once and writes it to `path` as SVG.
pub fn export_svg<S: ServiceAreaSource>(
    source: S,
    config: MapConfig,
    path: &Path,
) -> std::io::Result<MapState> {
    let scene = Scene::new(config.width, config.height);
    let mut map = ServiceAreaMap::new(source, scene, config);
    let state = map.initialize().clone();

    fs::write(path, map.surface().to_svg())?;
    Ok(state)
}

pub fn run(client: api_client::ServiceAreaClient, config: MapConfig) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.width as f32 + 300., config.height as f32 + 90.]),
        ..Default::default()
    };

    eframe::run_native(
        "Service Area Map",
        options,
        Box::new(|_cc| Ok(Box::new(MyApp::new(client, config)))),
    )
}

#[cfg(test)]
mod tests {
    use service_area::{ContractorId, MapError, ServiceArea, Target};

    use super::*;

    struct Offline;

    impl ServiceAreaSource for Offline {
        fn fetch_contractor(&self, _id: ContractorId) -> service_area::Result<ServiceArea> {
            Ok(ServiceArea::new("Acme", (34.05, -118.25), 25., vec![]))
        }

        fn fetch_contractors(
            &self,
            _ids: &[ContractorId],
        ) -> service_area::Result<Vec<ServiceArea>> {
            Err(MapError::DataFetch("offline".to_string()))
        }
    }

    #[test]
    fn test_export_svg_writes_rendered_map() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.svg");

        let state = export_svg(Offline, MapConfig::new(Target::Single(1)), &path).unwrap();

        assert_eq!(state, MapState::Ready { areas: 1 });
        let svg = fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<title>Acme - Service Center</title>"));
    }

    #[test]
    fn test_export_svg_writes_error_message() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.svg");

        let config = MapConfig::new(Target::Multiple(vec![1, 2]));
        let state = export_svg(Offline, config, &path).unwrap();

        assert!(matches!(state, MapState::Failed(MapError::DataFetch(_))));
        assert!(fs::read_to_string(&path).unwrap().contains("offline"));
    }
}
