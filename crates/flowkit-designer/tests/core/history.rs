use std::cell::RefCell;
use std::rc::Rc;

use flowkit_core::{DesignerEvent, EventCategory, EventFilter, Frame, HistoryState, Point};
use flowkit_designer::canvas::{Canvas, DrawingObject};
use flowkit_designer::commands::{DesignerCommand, MoveShape};
use flowkit_designer::history::UndoRedoManager;
use flowkit_designer::model::{FlowProcess, Shape};

fn add_command(canvas: &mut Canvas, x: f64) -> DesignerCommand {
    let id = canvas.generate_id();
    DesignerCommand::add_shape(DrawingObject::new(
        id,
        Shape::Process(FlowProcess::new(Frame::new(x, 0.0, 100.0, 50.0))),
    ))
}

#[test]
fn test_undo_redo_manager_creation() {
    let manager = UndoRedoManager::new(50);
    assert!(!manager.can_undo());
    assert!(!manager.can_redo());
    assert_eq!(manager.undo_depth(), 0);
    assert_eq!(manager.redo_depth(), 0);
}

#[test]
fn test_flags_flip_across_calls() {
    let mut canvas = Canvas::new();
    let mut manager = UndoRedoManager::new(50);

    let cmd = add_command(&mut canvas, 0.0);
    manager.execute(cmd, &mut canvas);
    assert!(manager.can_undo());
    assert!(!manager.can_redo());

    assert!(manager.undo(&mut canvas));
    assert!(!manager.can_undo());
    assert!(manager.can_redo());
    assert_eq!(canvas.shape_count(), 0);

    assert!(manager.redo(&mut canvas));
    assert!(manager.can_undo());
    assert!(!manager.can_redo());
    assert_eq!(canvas.shape_count(), 1);
}

#[test]
fn test_empty_history_is_noop() {
    let mut canvas = Canvas::new();
    let mut manager = UndoRedoManager::new(50);

    assert!(!manager.undo(&mut canvas));
    assert!(!manager.redo(&mut canvas));
    assert_eq!(manager.state(), HistoryState::default());
}

#[test]
fn test_redo_cleared_on_new_execute() {
    let mut canvas = Canvas::new();
    let mut manager = UndoRedoManager::new(50);

    let first = add_command(&mut canvas, 0.0);
    manager.execute(first, &mut canvas);
    manager.undo(&mut canvas);
    assert_eq!(manager.redo_depth(), 1);

    let second = add_command(&mut canvas, 200.0);
    manager.execute(second, &mut canvas);
    assert_eq!(manager.redo_depth(), 0);
    assert!(!manager.redo(&mut canvas));

    let ids: Vec<_> = canvas.shapes().map(|o| o.id).collect();
    assert_eq!(ids, vec![2]);
}

#[test]
fn test_max_depth_limit() {
    let mut canvas = Canvas::new();
    let mut manager = UndoRedoManager::new(3);

    for i in 0..5 {
        let cmd = add_command(&mut canvas, i as f64 * 120.0);
        manager.execute(cmd, &mut canvas);
    }

    assert_eq!(manager.undo_depth(), 3);
    while manager.undo(&mut canvas) {}
    // The two oldest additions can no longer be undone.
    assert_eq!(canvas.shape_count(), 2);
}

#[test]
fn test_command_names() {
    let mut canvas = Canvas::new();
    let mut manager = UndoRedoManager::new(10);

    let cmd = add_command(&mut canvas, 0.0);
    manager.execute(cmd, &mut canvas);
    manager.execute(
        DesignerCommand::MoveShape(MoveShape {
            id: 1,
            from: Point::new(0.0, 0.0),
            to: Point::new(30.0, 30.0),
        }),
        &mut canvas,
    );

    assert_eq!(manager.undo_name(), Some("Move Shape"));
    manager.undo(&mut canvas);
    assert_eq!(manager.undo_name(), Some("Add Shape"));
    assert_eq!(manager.redo_name(), Some("Move Shape"));
}

#[test]
fn test_clear_history() {
    let mut canvas = Canvas::new();
    let mut manager = UndoRedoManager::new(10);

    let cmd = add_command(&mut canvas, 0.0);
    manager.execute(cmd, &mut canvas);
    manager.undo(&mut canvas);
    manager.clear();

    assert!(!manager.can_undo());
    assert!(!manager.can_redo());
}

#[test]
fn test_history_events_published() {
    let mut canvas = Canvas::new();
    let mut manager = UndoRedoManager::new(10);
    let states = Rc::new(RefCell::new(Vec::new()));

    let sink = states.clone();
    manager.subscribe(
        EventFilter::Categories(vec![EventCategory::History]),
        move |event| {
            if let DesignerEvent::HistoryChanged(state) = event {
                sink.borrow_mut().push(*state);
            }
        },
    );

    let cmd = add_command(&mut canvas, 0.0);
    manager.execute(cmd, &mut canvas);
    manager.undo(&mut canvas);
    manager.undo(&mut canvas); // empty: no event

    let states = states.borrow();
    assert_eq!(states.len(), 2);
    assert_eq!(states[0], HistoryState::from_depths(1, 0));
    assert_eq!(states[1], HistoryState::from_depths(0, 1));
}

#[test]
fn test_membership_events() {
    let mut canvas = Canvas::new();
    let mut manager = UndoRedoManager::new(10);
    let events = Rc::new(RefCell::new(Vec::new()));

    let sink = events.clone();
    let sub = manager.subscribe(
        EventFilter::Categories(vec![EventCategory::Canvas]),
        move |event| sink.borrow_mut().push(event.clone()),
    );

    let cmd = add_command(&mut canvas, 0.0);
    manager.execute(cmd, &mut canvas);
    manager.undo(&mut canvas);
    assert!(manager.unsubscribe(sub));
    manager.redo(&mut canvas);

    assert_eq!(
        *events.borrow(),
        vec![
            DesignerEvent::ShapeAdded { id: 1 },
            DesignerEvent::ShapeRemoved { id: 1 },
        ]
    );
}
