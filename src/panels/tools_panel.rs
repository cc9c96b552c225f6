use crate::PaintApp;
use crate::tools::ToolKind;
use crate::widgets::ToolButton;

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let active = app.active_kind();
            ui.horizontal(|ui| {
                for kind in ToolKind::ALL {
                    if ToolButton::new(kind, kind == active).show(ui).clicked() {
                        log::info!("Tool selected from UI: {}", kind.name());
                        app.set_active_tool(kind);
                    }
                }
            });
            ui.separator();

            let settings = app.settings_mut();
            ui.horizontal(|ui| {
                ui.label("Color:");
                egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut settings.tool_color,
                    egui::color_picker::Alpha::OnlyBlend,
                );
            });
            ui.horizontal(|ui| {
                ui.label("Line width:");
                ui.add(egui::Slider::new(&mut settings.line_width, 1.0..=12.0));
            });
            ui.checkbox(&mut settings.show_vertices, "Show vertices");

            ui.separator();
            ui.horizontal(|ui| {
                ui.heading(app.active_kind().name());
                ui.label(format!("(State: {})", app.active_state_name()));
            });

            match app.active_kind() {
                ToolKind::Line | ToolKind::Rectangle => {
                    ui.label("Click to place the first corner, move, click again to finish.");
                }
                ToolKind::MovePoint => {
                    ui.label("Drag a line endpoint to move it.");
                }
                ToolKind::Translate => {
                    if app.offsets_mut().show(ui) {
                        app.apply_offsets();
                    }
                    if !app.offsets_mut().is_visible() {
                        ui.label("Click a rectangle to select it.");
                    }
                }
            }

            ui.separator();
            ui.label(format!("Models in scene: {}", app.scene().len()));
        });
}
