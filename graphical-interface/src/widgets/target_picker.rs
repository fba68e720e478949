use service_area::{ContractorId, Target};

/// What the user asked for from the toolbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetAction {
    Show(Target),
    Refresh,
}

/// `"7"` is a single contractor, `"3, 5"` several; blank input is an empty set.
pub fn parse_target(input: &str) -> Result<Target, String> {
    let ids = input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<ContractorId>()
                .map_err(|_| format!("'{}' is not a contractor id", part))
        })
        .collect::<Result<Vec<_>, _>>()?;

    match ids.as_slice() {
        [id] if !input.contains(',') => Ok(Target::Single(*id)),
        _ => Ok(Target::Multiple(ids)),
    }
}

pub struct WidgetTargetPicker {
    input: String,
    error: Option<String>,
}

impl WidgetTargetPicker {
    pub fn new(target: &Target) -> Self {
        let input = match target {
            Target::Single(id) => id.to_string(),
            Target::Multiple(ids) => ids
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        };
        Self { input, error: None }
    }

    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<TargetAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            ui.label("Contractors:");
            let edit = ui.add(egui::TextEdit::singleline(&mut self.input).desired_width(160.));
            let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            if ui.button("Show").clicked() || submitted {
                match parse_target(&self.input) {
                    Ok(target) => {
                        self.error = None;
                        action = Some(TargetAction::Show(target));
                    }
                    Err(err) => self.error = Some(err),
                }
            }

            if ui.button("Refresh").clicked() {
                action = Some(TargetAction::Refresh);
            }

            if let Some(err) = &self.error {
                ui.colored_label(egui::Color32::RED, err);
            }
        });

        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_and_multiple() {
        assert_eq!(parse_target("7"), Ok(Target::Single(7)));
        assert_eq!(parse_target(" 3, 5 ,9"), Ok(Target::Multiple(vec![3, 5, 9])));
        assert_eq!(parse_target("4,"), Ok(Target::Multiple(vec![4])));
    }

    #[test]
    fn test_parse_blank_is_empty_set() {
        assert_eq!(parse_target(""), Ok(Target::Multiple(vec![])));
        assert_eq!(parse_target(" , "), Ok(Target::Multiple(vec![])));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            parse_target("3, acme"),
            Err("'acme' is not a contractor id".to_string())
        );
    }

    #[test]
    fn test_picker_prefills_current_target() {
        let picker = WidgetTargetPicker::new(&Target::Multiple(vec![1, 2]));

        assert_eq!(picker.input, "1, 2");
    }
}
