use egui::Ui;

use crate::error::OffsetInputError;

/// The two numeric fields driving the translate tool.
///
/// Text is kept as typed so a half-written number ("-", "0.") does not get
/// rewritten under the user's cursor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OffsetInputs {
    pub x: String,
    pub y: String,
    visible: bool,
}

impl OffsetInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the fields with both offsets set to zero
    pub fn reset_to_zero(&mut self) {
        self.x = "0".to_owned();
        self.y = "0".to_owned();
        self.visible = true;
    }

    /// Empty and hide the fields
    pub fn clear(&mut self) {
        self.x.clear();
        self.y.clear();
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Parse both fields. An empty field reads as zero.
    pub fn parse(&self) -> Result<(f32, f32), OffsetInputError> {
        Ok((parse_field("x", &self.x)?, parse_field("y", &self.y)?))
    }

    /// Show the fields. Returns true when either one was edited this frame.
    pub fn show(&mut self, ui: &mut Ui) -> bool {
        if !self.visible {
            return false;
        }

        let mut changed = false;
        egui::Grid::new("translate_offsets_grid")
            .num_columns(2)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                ui.label("Translate X:");
                changed |= ui.text_edit_singleline(&mut self.x).changed();
                ui.end_row();

                ui.label("Translate Y:");
                changed |= ui.text_edit_singleline(&mut self.y).changed();
                ui.end_row();
            });
        changed
    }
}

fn parse_field(field: &'static str, value: &str) -> Result<f32, OffsetInputError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed.parse::<f32>().map_err(|_| OffsetInputError::InvalidNumber {
        field,
        value: value.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_to_zero_shows_fields() {
        let mut inputs = OffsetInputs::new();
        assert!(!inputs.is_visible());

        inputs.reset_to_zero();
        assert!(inputs.is_visible());
        assert_eq!(inputs.parse(), Ok((0.0, 0.0)));
    }

    #[test]
    fn test_clear_empties_and_hides() {
        let mut inputs = OffsetInputs::new();
        inputs.reset_to_zero();
        inputs.x = "0.25".to_owned();

        inputs.clear();
        assert!(inputs.x.is_empty());
        assert!(inputs.y.is_empty());
        assert!(!inputs.is_visible());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let mut inputs = OffsetInputs::new();
        inputs.x = " 0.5 ".to_owned();
        inputs.y = "abc".to_owned();

        assert_eq!(
            inputs.parse(),
            Err(OffsetInputError::InvalidNumber {
                field: "y",
                value: "abc".to_owned()
            })
        );
    }
}
