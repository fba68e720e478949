use std::{cell::RefCell, rc::Rc};

use api_client::ServiceAreaClient;
use egui_extras::{Column, TableBuilder};
use service_area::{ContractorId, ServiceAreaList};

use crate::state::SelectionState;

use super::View;

/// ZIP codes served by the targeted contractor. Clicking a row toggles the
/// highlighted ZIP on the map.
pub struct WidgetZipList {
    list: ServiceAreaList<ServiceAreaClient>,
    selection_state: Rc<RefCell<SelectionState>>,
}

impl WidgetZipList {
    pub fn new(
        client: ServiceAreaClient,
        contractor_id: ContractorId,
        selection_state: Rc<RefCell<SelectionState>>,
    ) -> Self {
        let on_click_state = selection_state.clone();
        let mut list = ServiceAreaList::new(
            client,
            contractor_id,
            Box::new(move |zip_code| on_click_state.borrow_mut().toggle_zip_selection(zip_code)),
        );
        list.load();

        Self {
            list,
            selection_state,
        }
    }

    pub fn contractor_id(&self) -> ContractorId {
        self.list.contractor_id()
    }

    pub fn reload(&mut self) {
        self.list.load();
    }

    /// Points the list at another contractor and reloads it, even when the
    /// id is unchanged.
    pub fn set_contractor(&mut self, contractor_id: ContractorId) {
        self.list.set_contractor(contractor_id);
    }
}

impl View for WidgetZipList {
    fn ui(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.list.company_name().unwrap_or("Service area"));
        ui.add_space(6.);

        if let Some(message) = self.list.message() {
            ui.label(message);
            return;
        }

        let selected = self.selection_state.borrow().zip_code.clone();
        let mut clicked: Option<String> = None;

        egui::ScrollArea::vertical().show(ui, |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .column(Column::auto())
                .column(Column::remainder())
                .column(Column::auto())
                .sense(egui::Sense::click())
                .header(20., |mut header| {
                    header.col(|ui| {
                        ui.strong("ZIP");
                    });
                    header.col(|ui| {
                        ui.strong("City");
                    });
                    header.col(|ui| {
                        ui.strong("Distance");
                    });
                })
                .body(|mut body| {
                    for card in self.list.cards() {
                        body.row(18., |mut row| {
                            row.set_selected(selected.as_deref() == Some(card.zip_code.as_str()));

                            row.col(|ui| {
                                ui.label(&card.zip_code);
                            });
                            row.col(|ui| {
                                ui.label(&card.city);
                            });
                            row.col(|ui| {
                                ui.label(&card.distance);
                            });

                            if row.response().clicked() {
                                clicked = Some(card.zip_code.clone());
                            }
                        });
                    }
                });
        });

        if let Some(zip_code) = clicked {
            self.list.click(&zip_code);
        }
    }
}
