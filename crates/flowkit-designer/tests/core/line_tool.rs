use flowkit_core::{Frame, Point};
use flowkit_designer::canvas::{Canvas, DrawingObject};
use flowkit_designer::history::UndoRedoManager;
use flowkit_designer::model::{
    ConnectionSide, FlowDecision, FlowLine, FlowProcess, FlowShape, Shape,
};
use flowkit_designer::tools::{LineTool, LineToolState};

/// Process at (0,0,100,50) and Decision at (200,50,100,50).
fn two_shapes() -> (Canvas, u64, u64) {
    let mut canvas = Canvas::new();
    let a = canvas.generate_id();
    canvas.add_object(DrawingObject::new(
        a,
        Shape::Process(FlowProcess::new(Frame::new(0.0, 0.0, 100.0, 50.0))),
    ));
    let b = canvas.generate_id();
    canvas.add_object(DrawingObject::new(
        b,
        Shape::Decision(FlowDecision::new(Frame::new(200.0, 50.0, 100.0, 50.0))),
    ));
    (canvas, a, b)
}

fn only_line(canvas: &Canvas) -> FlowLine {
    let lines: Vec<_> = canvas.shapes().filter_map(|o| o.shape.as_line()).collect();
    assert_eq!(lines.len(), 1);
    lines[0].clone()
}

#[test]
fn test_hit_test_process_connection_points() {
    let (canvas, a, _) = two_shapes();
    let tool = LineTool::new();

    let expected = [
        (Point::new(50.0, 0.0), ConnectionSide::Top),
        (Point::new(50.0, 50.0), ConnectionSide::Bottom),
        (Point::new(0.0, 25.0), ConnectionSide::Left),
        (Point::new(100.0, 25.0), ConnectionSide::Right),
    ];
    for (location, side) in expected {
        let hit = tool.find_connection_point(&canvas, location).unwrap();
        assert_eq!(hit.anchor.shape_id, a);
        assert_eq!(hit.anchor.side, side);
        assert_eq!(hit.point, location);
    }

    assert!(tool
        .find_connection_point(&canvas, Point::new(500.0, 500.0))
        .is_none());
}

#[test]
fn test_hit_test_radius_boundary() {
    let (canvas, _, _) = two_shapes();
    let tool = LineTool::new();

    // Exactly 10 units from Right (100,25).
    assert!(tool
        .find_connection_point(&canvas, Point::new(110.0, 25.0))
        .is_some());
    assert!(tool
        .find_connection_point(&canvas, Point::new(110.5, 25.0))
        .is_none());
}

#[test]
fn test_first_match_wins() {
    let mut canvas = Canvas::new();
    for _ in 0..2 {
        let id = canvas.generate_id();
        canvas.add_object(DrawingObject::new(
            id,
            Shape::Process(FlowProcess::new(Frame::new(0.0, 0.0, 100.0, 50.0))),
        ));
    }
    let tool = LineTool::new();
    let hit = tool
        .find_connection_point(&canvas, Point::new(50.0, 2.0))
        .unwrap();
    assert_eq!(hit.anchor.shape_id, 1);
}

#[test]
fn test_line_creation_end_to_end() {
    let (mut canvas, a, b) = two_shapes();
    let mut history = UndoRedoManager::new(50);
    let mut tool = LineTool::new();

    let response = tool.pointer_down(&canvas, Point::new(100.0, 25.0));
    assert!(response.repaint);
    assert!(tool.is_active());

    let response = tool.pointer_move(&canvas, Point::new(150.0, 50.0));
    assert!(response.repaint);
    tool.pointer_move(&canvas, Point::new(200.0, 75.0));

    let depth = history.undo_depth();
    let (response, created) = tool.pointer_up(&mut canvas, &mut history, Point::new(200.0, 75.0));
    assert!(response.exit_tool_mode);
    assert!(created.is_some());
    assert_eq!(history.undo_depth(), depth + 1);
    assert_eq!(history.undo_name(), Some("Add Line"));
    assert_eq!(*tool.state(), LineToolState::SelectingFirstPoint);

    let line = only_line(&canvas);
    assert_eq!(line.start.shape_id, a);
    assert_eq!(line.end.shape_id, b);
    assert_eq!(line.start_point, Point::new(100.0, 25.0));
    assert_eq!(line.end_point, Point::new(200.0, 75.0));
    assert_eq!(line.frame(), Frame::new(100.0, 25.0, 100.0, 50.0));
}

#[test]
fn test_abort_leaves_history_untouched() {
    let (mut canvas, _, _) = two_shapes();
    let mut history = UndoRedoManager::new(50);
    let mut tool = LineTool::new();

    tool.pointer_down(&canvas, Point::new(100.0, 25.0));
    let (response, created) = tool.pointer_up(&mut canvas, &mut history, Point::new(100.0, 25.0));

    assert!(response.exit_tool_mode);
    assert!(created.is_none());
    assert_eq!(history.undo_depth(), 0);
    assert_eq!(canvas.shape_count(), 2);
    assert_eq!(*tool.state(), LineToolState::SelectingFirstPoint);
}

#[test]
fn test_release_in_empty_space_aborts() {
    let (mut canvas, _, _) = two_shapes();
    let mut history = UndoRedoManager::new(50);
    let mut tool = LineTool::new();

    tool.pointer_down(&canvas, Point::new(100.0, 25.0));
    tool.pointer_move(&canvas, Point::new(400.0, 400.0));
    let (_, created) = tool.pointer_up(&mut canvas, &mut history, Point::new(400.0, 400.0));

    assert!(created.is_none());
    assert!(!history.can_undo());
}

#[test]
fn test_provisional_end_survives_moving_away() {
    let (mut canvas, _, b) = two_shapes();
    let mut history = UndoRedoManager::new(50);
    let mut tool = LineTool::new();

    tool.pointer_down(&canvas, Point::new(100.0, 25.0));
    tool.pointer_move(&canvas, Point::new(200.0, 75.0));
    tool.pointer_move(&canvas, Point::new(400.0, 400.0));
    let (_, created) = tool.pointer_up(&mut canvas, &mut history, Point::new(400.0, 400.0));

    assert!(created.is_some());
    assert_eq!(only_line(&canvas).end.shape_id, b);
}

#[test]
fn test_miss_on_first_press_stays_idle() {
    let (canvas, _, _) = two_shapes();
    let mut tool = LineTool::new();

    let response = tool.pointer_down(&canvas, Point::new(500.0, 500.0));
    assert!(!response.repaint);
    assert!(!tool.is_active());
}

#[test]
fn test_pointer_up_when_idle_is_noop() {
    let (mut canvas, _, _) = two_shapes();
    let mut history = UndoRedoManager::new(50);
    let mut tool = LineTool::new();

    let (response, created) = tool.pointer_up(&mut canvas, &mut history, Point::new(0.0, 0.0));
    assert!(!response.repaint);
    assert!(!response.exit_tool_mode);
    assert!(created.is_none());
}

#[test]
fn test_press_on_start_anchor_is_ignored() {
    let (canvas, _, _) = two_shapes();
    let mut tool = LineTool::new();

    tool.pointer_down(&canvas, Point::new(100.0, 25.0));
    tool.pointer_down(&canvas, Point::new(101.0, 25.0));

    match tool.state() {
        LineToolState::SelectingSecondPoint {
            provisional_end, ..
        } => assert!(provisional_end.is_none()),
        other => panic!("unexpected state {:?}", other),
    }
}

#[test]
fn test_same_shape_other_side_is_valid() {
    let (mut canvas, a, _) = two_shapes();
    let mut history = UndoRedoManager::new(50);
    let mut tool = LineTool::new();

    tool.pointer_down(&canvas, Point::new(100.0, 25.0));
    tool.pointer_move(&canvas, Point::new(50.0, 50.0));
    let (_, created) = tool.pointer_up(&mut canvas, &mut history, Point::new(50.0, 50.0));

    assert!(created.is_some());
    let line = only_line(&canvas);
    assert_eq!(line.start.shape_id, a);
    assert_eq!(line.end.shape_id, a);
    assert_eq!(line.end.side, ConnectionSide::Bottom);
}

#[test]
fn test_preview_segment_targets() {
    let (canvas, _, _) = two_shapes();
    let mut tool = LineTool::new();
    assert!(tool.preview_segment().is_none());

    tool.pointer_down(&canvas, Point::new(100.0, 25.0));
    tool.pointer_move(&canvas, Point::new(150.0, 40.0));
    assert_eq!(
        tool.preview_segment(),
        Some((Point::new(100.0, 25.0), Point::new(150.0, 40.0)))
    );

    tool.pointer_move(&canvas, Point::new(198.0, 74.0));
    assert_eq!(
        tool.preview_segment(),
        Some((Point::new(100.0, 25.0), Point::new(200.0, 75.0)))
    );
}

#[test]
fn test_cancel_resets() {
    let (canvas, _, _) = two_shapes();
    let mut tool = LineTool::new();

    tool.pointer_down(&canvas, Point::new(100.0, 25.0));
    tool.cancel();
    assert!(!tool.is_active());
    assert!(tool.preview_segment().is_none());
}

#[test]
fn test_lines_are_skipped_by_hit_test() {
    let (mut canvas, _, _) = two_shapes();
    let mut history = UndoRedoManager::new(50);
    let mut tool = LineTool::with_detection_radius(5.0);

    tool.pointer_down(&canvas, Point::new(100.0, 25.0));
    tool.pointer_move(&canvas, Point::new(200.0, 75.0));
    tool.pointer_up(&mut canvas, &mut history, Point::new(200.0, 75.0));

    // Midpoint of the new line's frame is not a connection point.
    assert!(tool
        .find_connection_point(&canvas, Point::new(150.0, 50.0))
        .is_none());
}
