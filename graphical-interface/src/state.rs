/// Tracks the ZIP code picked in the list, shared with the list's click callback.
#[derive(Debug, Default)]
pub struct SelectionState {
    pub zip_code: Option<String>,
}

impl SelectionState {
    /// Creates a new `SelectionState` with nothing selected.
    ///
    /// # Returns
    /// A new `SelectionState` instance.
    pub fn new() -> SelectionState {
        Self { zip_code: None }
    }

    /// If the provided ZIP code is already selected, it will be deselected.
    /// Otherwise, it will be selected.
    ///
    /// # Parameters
    /// - `zip_code`: The ZIP code that was clicked in the list.
    pub fn toggle_zip_selection(&mut self, zip_code: &str) {
        if self.zip_code.as_deref() == Some(zip_code) {
            self.zip_code = None;
        } else {
            self.zip_code = Some(zip_code.to_string());
        }
    }

    /// Drops the selection, e.g. when the map shows other contractors.
    pub fn clear(&mut self) {
        self.zip_code = None;
    }
}
