use std::{cell::RefCell, rc::Rc};

use api_client::ServiceAreaClient;
use egui::{Color32, Sense, Stroke, Vec2};
use service_area::{MapConfig, MapState, Scene, ServiceAreaMap, Target};
use tracing::info;

use crate::{
    plugins,
    state::SelectionState,
    widgets::{TargetAction, View, WidgetTargetPicker, WidgetZipList},
};

const HIGHLIGHT_RADIUS: f32 = 9.;

pub struct MyApp {
    client: ServiceAreaClient,
    map: ServiceAreaMap<ServiceAreaClient, Scene>,
    selection_state: Rc<RefCell<SelectionState>>,
    target_picker: WidgetTargetPicker,
    zip_list_widget: Option<WidgetZipList>,
}

impl MyApp {
    pub fn new(client: ServiceAreaClient, config: MapConfig) -> Self {
        let target_picker = WidgetTargetPicker::new(&config.target);
        let scene = Scene::new(config.width, config.height);
        let mut map = ServiceAreaMap::new(client.clone(), scene, config);
        map.initialize();

        let mut app = Self {
            client,
            map,
            selection_state: Rc::new(RefCell::new(SelectionState::new())),
            target_picker,
            zip_list_widget: None,
        };
        app.sync_zip_list();
        app
    }

    fn apply(&mut self, action: TargetAction) {
        self.selection_state.borrow_mut().clear();

        match action {
            TargetAction::Show(Target::Single(id)) => {
                info!("Showing contractor {}", id);
                self.map.update_contractor(id);
                self.sync_zip_list();
            }
            TargetAction::Show(Target::Multiple(ids)) => {
                info!("Showing contractors {:?}", ids);
                self.map.update_contractors(ids);
                self.sync_zip_list();
            }
            TargetAction::Refresh => {
                self.map.refresh();
                if let Some(widget) = &mut self.zip_list_widget {
                    widget.reload();
                }
            }
        }
    }

    /// The ZIP list only exists in single-contractor mode. An existing list is
    /// re-targeted and reloaded, so showing the same contractor again also
    /// refreshes its ZIP codes.
    fn sync_zip_list(&mut self) {
        match self.map.target() {
            Target::Single(id) => match &mut self.zip_list_widget {
                Some(widget) => widget.set_contractor(*id),
                None => {
                    self.zip_list_widget = Some(WidgetZipList::new(
                        self.client.clone(),
                        *id,
                        self.selection_state.clone(),
                    ))
                }
            },
            Target::Multiple(_) => self.zip_list_widget = None,
        }
    }

    fn status_text(&self) -> String {
        match self.map.state() {
            MapState::Uninitialized => "Loading...".to_string(),
            MapState::Ready { areas } => format!("{} service area(s)", areas),
            MapState::Failed(err) => err.to_string(),
        }
    }

    fn map_ui(&self, ui: &mut egui::Ui) {
        let (width, height) = (self.map.config().width as f32, self.map.config().height as f32);
        let (response, painter) = ui.allocate_painter(Vec2::new(width, height), Sense::hover());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 0., Color32::from_rgb(0xf9, 0xfa, 0xfb));
        plugins::ServiceAreas::new(self.map.surface()).paint(&painter, origin);

        let selected = self.selection_state.borrow().zip_code.clone();
        if let (Some(zip_code), Some(projection)) = (selected, self.map.projection()) {
            let zip = self
                .map
                .service_areas()
                .iter()
                .flat_map(|area| area.service_zip_codes.iter())
                .find(|zip| zip.zip_code == zip_code);
            if let Some(zip) = zip {
                let at = projection.project(zip.latitude, zip.longitude);
                painter.circle_stroke(
                    origin + Vec2::new(at.x as f32, at.y as f32),
                    HIGHLIGHT_RADIUS,
                    Stroke::new(2., Color32::BLACK),
                );
            }
        }

        if let Some(pointer) = response.hover_pos() {
            let local = pointer - origin;
            if let Some(tooltip) = self.map.surface().tooltip_at(local.x as f64, local.y as f64) {
                response.on_hover_text_at_pointer(tooltip);
            }
        }
    }
}

impl eframe::App for MyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let action = egui::TopBottomPanel::top("toolbar")
            .show(ctx, |ui| {
                let action = self.target_picker.show(ui);
                ui.label(self.status_text());
                action
            })
            .inner;

        if let Some(action) = action {
            self.apply(action);
        }

        if let Some(widget) = &mut self.zip_list_widget {
            egui::SidePanel::right("zip_codes")
                .resizable(false)
                .min_width(260.)
                .show(ctx, |ui| widget.ui(ui));
        }

        egui::CentralPanel::default().show(ctx, |ui| self.map_ui(ui));
    }
}
