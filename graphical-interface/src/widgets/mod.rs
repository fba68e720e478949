mod target_picker;
mod zip_list;
pub use target_picker::{parse_target, TargetAction, WidgetTargetPicker};
pub use zip_list::WidgetZipList;

pub trait View {
    fn ui(&mut self, ui: &mut egui::Ui);
}
