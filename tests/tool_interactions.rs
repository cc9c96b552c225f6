use egui::Color32;
use vector_paint::element::factory;
use vector_paint::tools::{LineTool, MovePointTool, RectangleTool, TranslateTool};
use vector_paint::{
    DisplayList, DrawCommand, EditorState, InputEvent, Model, OffsetInputs, Point, Scene, Shape,
    Tool, ToolContext, ToolKind,
};

/// Scene, renderer and offset fields a tool needs, owned by the test
struct Harness {
    scene: Scene,
    renderer: DisplayList,
    offsets: OffsetInputs,
    color: Color32,
}

impl Harness {
    fn new() -> Self {
        Self {
            scene: Scene::new(),
            renderer: DisplayList::default(),
            offsets: OffsetInputs::new(),
            color: Color32::RED,
        }
    }

    fn ctx(&mut self) -> ToolContext<'_> {
        ToolContext::new(&mut self.scene, &mut self.renderer, &mut self.offsets, self.color)
    }
}

fn coords(model: &Model) -> Vec<(f32, f32)> {
    model.points().iter().map(|p| (p.x, p.y)).collect()
}

#[test]
fn test_line_commit_keeps_last_move_position() {
    let mut h = Harness::new();
    let mut tool = LineTool::new();

    tool.on_click(Point::at(0.0, 0.0), &mut h.ctx());
    tool.on_pointer_move(Point::at(0.25, 0.5), &mut h.ctx());
    tool.on_pointer_move(Point::at(0.5, 0.75), &mut h.ctx());
    assert!(h.scene.is_empty());

    // The committing click lands somewhere else; it must not move the end point
    tool.on_click(Point::at(0.9, -0.9), &mut h.ctx());

    assert_eq!(h.scene.len(), 1);
    assert_eq!(coords(h.scene.last().unwrap()), vec![(0.0, 0.0), (0.5, 0.75)]);
    assert!(!tool.is_drawing());
    assert_eq!(tool.state_name(), "Idle");
}

#[test]
fn test_line_uses_tool_color() {
    let mut h = Harness::new();
    let mut tool = LineTool::new();

    tool.on_click(Point::at(0.0, 0.0), &mut h.ctx());
    h.color = Color32::GREEN;
    tool.on_pointer_move(Point::at(0.5, 0.5), &mut h.ctx());
    tool.on_click(Point::at(0.5, 0.5), &mut h.ctx());

    let points = h.scene.last().unwrap().points();
    assert_eq!(points[0].color, Color32::RED);
    assert_eq!(points[1].color, Color32::GREEN);
}

#[test]
fn test_line_redraws_after_commit() {
    let mut h = Harness::new();
    let mut tool = LineTool::new();

    tool.on_click(Point::at(0.0, 0.0), &mut h.ctx());
    tool.on_pointer_move(Point::at(0.5, 0.5), &mut h.ctx());
    tool.on_click(Point::at(0.5, 0.5), &mut h.ctx());

    // Only the committed line is on the surface, no leftover preview
    assert_eq!(h.renderer.commands().len(), 1);
}

#[test]
fn test_rectangle_corner_derivation() {
    let mut h = Harness::new();
    let mut tool = RectangleTool::new();

    tool.on_click(Point::at(0.0, 0.0), &mut h.ctx());
    tool.on_pointer_move(Point::at(2.0, 3.0), &mut h.ctx());

    let preview = tool.in_progress().expect("drawing");
    let preview: Vec<(f32, f32)> = preview.points().iter().map(|p| (p.x, p.y)).collect();
    assert_eq!(preview, vec![(0.0, 0.0), (0.0, 3.0), (2.0, 0.0), (2.0, 3.0)]);

    tool.on_click(Point::at(2.0, 3.0), &mut h.ctx());
    assert_eq!(
        coords(h.scene.last().unwrap()),
        vec![(0.0, 0.0), (0.0, 3.0), (2.0, 0.0), (2.0, 3.0)]
    );
}

#[test]
fn test_rectangle_recolors_dependent_corners_on_every_move() {
    let mut h = Harness::new();
    let mut tool = RectangleTool::new();

    tool.on_click(Point::at(0.0, 0.0), &mut h.ctx());
    tool.on_pointer_move(Point::at(0.5, 0.5), &mut h.ctx());
    h.color = Color32::BLUE;
    tool.on_pointer_move(Point::at(0.6, 0.6), &mut h.ctx());

    let points = tool.in_progress().unwrap().points();
    assert_eq!(points[0].color, Color32::RED);
    assert!(points[1..].iter().all(|p| p.color == Color32::BLUE));

    match h.renderer.last_command() {
        Some(DrawCommand::Quad(_)) => {}
        other => panic!("expected the rectangle preview on top, got {:?}", other),
    }
}

#[test]
fn test_rectangle_commit_without_move_is_zero_area() {
    let mut h = Harness::new();
    let mut tool = RectangleTool::new();

    tool.on_click(Point::at(0.3, -0.2), &mut h.ctx());
    tool.on_click(Point::at(0.9, 0.9), &mut h.ctx());

    assert!(!tool.is_drawing());
    assert_eq!(h.scene.len(), 1);
    let rect = h.scene.last().unwrap();
    assert_eq!(coords(rect), vec![(0.3, -0.2); 4]);
    assert!(rect.points().iter().all(|p| p.color == Color32::RED));
}

#[test]
fn test_rectangle_reset_discards_preview() {
    let mut h = Harness::new();
    h.scene.push(factory::create_line((0.0, 0.0), (0.5, 0.5), Color32::GREEN));
    let mut tool = RectangleTool::new();

    tool.on_click(Point::at(-0.5, -0.5), &mut h.ctx());
    tool.on_pointer_move(Point::at(0.5, 0.5), &mut h.ctx());
    tool.reset(&mut h.ctx());

    assert!(!tool.is_drawing());
    assert!(tool.in_progress().is_none());
    assert_eq!(h.scene.len(), 1);

    // The next click starts a fresh rectangle instead of committing the old one
    tool.on_click(Point::at(0.1, 0.1), &mut h.ctx());
    assert!(tool.is_drawing());
    assert_eq!(h.scene.len(), 1);
}

#[test]
fn test_move_point_snapshot_does_not_alias_original() {
    let mut h = Harness::new();
    h.scene.push(factory::create_line((0.0, 0.0), (1.0, 1.0), Color32::GREEN));
    let mut tool = MovePointTool::new();

    tool.on_pointer_down(Point::at(0.0, 0.0), &mut h.ctx());
    assert!(tool.is_moving());
    assert!(h.scene.is_empty(), "the grabbed line is taken out of the scene");

    tool.on_pointer_move(Point::at(-0.5, 0.25), &mut h.ctx());
    tool.on_pointer_move(Point::at(-0.75, 0.5), &mut h.ctx());

    let original = tool.original().expect("original kept while dragging");
    assert_eq!(coords(original), vec![(0.0, 0.0), (1.0, 1.0)]);

    let ephemeral = tool.ephemeral().expect("dragging");
    assert_eq!((ephemeral.start().x, ephemeral.start().y), (1.0, 1.0));
    assert_eq!((ephemeral.end().x, ephemeral.end().y), (-0.75, 0.5));
    // The dragged end keeps the grabbed endpoint's color
    assert_eq!(ephemeral.end().color, Color32::GREEN);
}

#[test]
fn test_move_point_commit_on_pointer_up() {
    let mut h = Harness::new();
    h.scene.push(factory::create_rectangle((-0.9, -0.9), (-0.8, -0.8), Color32::BLUE));
    h.scene.push(factory::create_line((0.0, 0.0), (0.5, 0.5), Color32::GREEN));
    let mut tool = MovePointTool::new();

    tool.on_pointer_down(Point::at(0.5, 0.5), &mut h.ctx());
    tool.on_pointer_move(Point::at(0.5, -0.5), &mut h.ctx());
    tool.on_pointer_up(Point::at(0.5, -0.5), &mut h.ctx());

    assert!(!tool.is_moving());
    assert_eq!(h.scene.len(), 2);
    assert_eq!(coords(h.scene.last().unwrap()), vec![(0.0, 0.0), (0.5, -0.5)]);
}

#[test]
fn test_move_point_miss_is_noop() {
    let mut h = Harness::new();
    h.scene.push(factory::create_line((0.0, 0.0), (0.5, 0.5), Color32::GREEN));
    let mut tool = MovePointTool::new();

    tool.on_pointer_down(Point::at(-0.5, -0.5), &mut h.ctx());
    assert!(!tool.is_moving());
    assert_eq!(h.scene.len(), 1);

    // Up and move without a drag do nothing either
    tool.on_pointer_move(Point::at(0.1, 0.1), &mut h.ctx());
    tool.on_pointer_up(Point::at(0.1, 0.1), &mut h.ctx());
    assert_eq!(h.scene.len(), 1);
}

#[test]
fn test_move_point_ignores_rectangle_corners() {
    let mut h = Harness::new();
    h.scene.push(factory::create_rectangle((0.0, 0.0), (0.5, 0.5), Color32::BLUE));
    let mut tool = MovePointTool::new();

    tool.on_pointer_down(Point::at(0.5, 0.5), &mut h.ctx());

    assert!(!tool.is_moving());
    assert_eq!(h.scene.len(), 1);
    assert_eq!(
        coords(h.scene.get(0).unwrap()),
        vec![(0.0, 0.0), (0.0, 0.5), (0.5, 0.0), (0.5, 0.5)]
    );
}

#[test]
fn test_move_point_reset_restores_original() {
    let mut h = Harness::new();
    h.scene.push(factory::create_line((-0.5, 0.0), (-0.5, 0.5), Color32::RED));
    let grabbed = h.scene.push(factory::create_line((0.0, 0.0), (0.5, 0.5), Color32::GREEN));
    h.scene.push(factory::create_line((0.5, -0.5), (0.9, -0.5), Color32::RED));
    let mut tool = MovePointTool::new();

    tool.on_pointer_down(Point::at(0.0, 0.0), &mut h.ctx());
    tool.on_pointer_move(Point::at(0.25, -0.25), &mut h.ctx());
    assert_eq!(h.scene.len(), 2);

    tool.reset(&mut h.ctx());

    assert!(!tool.is_moving());
    assert_eq!(h.scene.index_of(grabbed), Some(1));
    assert_eq!(coords(h.scene.get(1).unwrap()), vec![(0.0, 0.0), (0.5, 0.5)]);
}

#[test]
fn test_translate_is_cumulative() {
    let mut h = Harness::new();
    h.scene.push(factory::create_rectangle((0.0, 0.0), (0.5, 0.5), Color32::BLUE));
    let mut tool = TranslateTool::new();

    tool.on_click(Point::at(0.25, 0.25), &mut h.ctx());
    assert_eq!(tool.selected_index(&h.scene), Some(0));
    assert_eq!(h.offsets.parse(), Ok((0.0, 0.0)));

    tool.on_input_value_change(1.0, 0.0, &mut h.ctx());
    tool.on_input_value_change(1.0, 0.0, &mut h.ctx());

    let anchor = h.scene.get(0).unwrap().points()[0];
    assert_eq!((anchor.x, anchor.y), (2.0, 0.0));
}

#[test]
fn test_translate_miss_without_selection_is_noop() {
    let mut h = Harness::new();
    h.scene.push(factory::create_rectangle((0.0, 0.0), (0.5, 0.5), Color32::BLUE));
    let before = h.scene.clone();
    let mut tool = TranslateTool::new();

    tool.on_click(Point::at(-0.5, -0.5), &mut h.ctx());
    assert_eq!(tool.selected(), None);

    tool.on_input_value_change(0.25, 0.25, &mut h.ctx());
    assert_eq!(coords(h.scene.get(0).unwrap()), coords(before.get(0).unwrap()));
    assert!(!h.offsets.is_visible());
}

#[test]
fn test_translate_selection_removed_from_scene_is_noop() {
    let mut h = Harness::new();
    h.scene.push(factory::create_rectangle((0.0, 0.0), (0.5, 0.5), Color32::BLUE));
    h.scene.push(factory::create_line((-0.5, -0.5), (-0.25, -0.25), Color32::RED));
    let mut tool = TranslateTool::new();

    tool.on_click(Point::at(0.25, 0.25), &mut h.ctx());
    assert!(tool.selected().is_some());
    h.scene.remove(0);

    tool.on_input_value_change(0.5, 0.5, &mut h.ctx());

    assert_eq!(tool.selected_index(&h.scene), None);
    assert_eq!(h.scene.len(), 1);
    assert_eq!(coords(h.scene.get(0).unwrap()), vec![(-0.5, -0.5), (-0.25, -0.25)]);
}

#[test]
fn test_translate_miss_keeps_selection() {
    let mut h = Harness::new();
    h.scene.push(factory::create_rectangle((0.0, 0.0), (0.5, 0.5), Color32::BLUE));
    let mut tool = TranslateTool::new();

    tool.on_click(Point::at(0.25, 0.25), &mut h.ctx());
    let selected = tool.selected();
    tool.on_click(Point::at(-0.75, -0.75), &mut h.ctx());

    assert!(selected.is_some());
    assert_eq!(tool.selected(), selected);
}

#[test]
fn test_translate_picks_topmost() {
    let mut h = Harness::new();
    h.scene.push(factory::create_rectangle((-0.5, -0.5), (0.5, 0.5), Color32::BLUE));
    let top = h.scene.push(factory::create_rectangle((0.0, 0.0), (0.25, 0.25), Color32::RED));
    let mut tool = TranslateTool::new();

    tool.on_click(Point::at(0.1, 0.1), &mut h.ctx());
    assert_eq!(tool.selected(), Some(top));
}

#[test]
fn test_translate_reset_clears_inputs() {
    let mut h = Harness::new();
    h.scene.push(factory::create_rectangle((0.0, 0.0), (0.5, 0.5), Color32::BLUE));
    let mut tool = TranslateTool::new();

    tool.on_click(Point::at(0.25, 0.25), &mut h.ctx());
    assert!(h.offsets.is_visible());

    tool.reset(&mut h.ctx());
    assert_eq!(tool.selected(), None);
    assert!(!h.offsets.is_visible());
    assert!(h.offsets.x.is_empty() && h.offsets.y.is_empty());
}

#[test]
fn test_dispatcher_resets_outgoing_tool() {
    let mut h = Harness::new();
    let mut editor = EditorState::new(ToolKind::Line);

    editor.handle_event(InputEvent::Click(Point::at(0.0, 0.0)), &mut h.ctx());
    editor.handle_event(InputEvent::PointerMove(Point::at(0.5, 0.5)), &mut h.ctx());
    assert_eq!(editor.active_tool().state_name(), "Drawing");
    assert!(editor.active_tool().is_busy());

    editor.set_active_tool(ToolKind::Rectangle, &mut h.ctx());
    assert!(!editor.active_tool().is_busy());
    assert_eq!(editor.active_kind(), ToolKind::Rectangle);
    assert_eq!(editor.active_tool().state_name(), "Idle");
    // The half-drawn line never reached the scene
    assert!(h.scene.is_empty());

    // Switching back starts from scratch
    editor.set_active_tool(ToolKind::Line, &mut h.ctx());
    editor.handle_event(InputEvent::Click(Point::at(0.25, 0.25)), &mut h.ctx());
    assert!(h.scene.is_empty());
    assert_eq!(editor.active_tool().state_name(), "Drawing");
}

#[test]
fn test_dispatcher_routes_pointer_events() {
    let mut h = Harness::new();
    h.scene.push(factory::create_line((0.0, 0.0), (0.5, 0.5), Color32::GREEN));
    let mut editor = EditorState::new(ToolKind::MovePoint);

    // A click is not a press for the move-point tool
    editor.handle_event(InputEvent::Click(Point::at(0.5, 0.5)), &mut h.ctx());
    assert_eq!(editor.active_tool().state_name(), "Idle");

    editor.handle_event(InputEvent::PointerDown(Point::at(0.5, 0.5)), &mut h.ctx());
    editor.handle_event(InputEvent::PointerMove(Point::at(-0.5, 0.5)), &mut h.ctx());
    editor.handle_event(InputEvent::PointerUp(Point::at(-0.5, 0.5)), &mut h.ctx());

    assert_eq!(coords(h.scene.get(0).unwrap()), vec![(0.0, 0.0), (-0.5, 0.5)]);
}
