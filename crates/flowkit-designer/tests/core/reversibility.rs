use proptest::prelude::*;

use flowkit_core::{Frame, Point};
use flowkit_designer::canvas::{Canvas, DrawingObject};
use flowkit_designer::commands::{ChangeLabel, DesignerCommand, MoveShape, ResizeShape};
use flowkit_designer::history::UndoRedoManager;
use flowkit_designer::model::{
    Anchor, ConnectionHit, ConnectionSide, FlowLine, FlowProcess, FlowShape, Shape,
};

#[derive(Debug, Clone)]
enum Edit {
    Add(f64, f64),
    Move(usize, f64, f64),
    Resize(usize, f64, f64),
    Relabel(usize, String),
    Connect(usize, usize),
    Delete(usize),
}

fn edit_strategy() -> impl Strategy<Value = Edit> {
    prop_oneof![
        (0.0..500.0f64, 0.0..500.0f64).prop_map(|(x, y)| Edit::Add(x, y)),
        (0usize..8, -50.0..50.0f64, -50.0..50.0f64).prop_map(|(i, x, y)| Edit::Move(i, x, y)),
        (0usize..8, 10.0..200.0f64, 10.0..200.0f64).prop_map(|(i, w, h)| Edit::Resize(i, w, h)),
        (0usize..8, "[a-z]{0,6}").prop_map(|(i, s)| Edit::Relabel(i, s)),
        (0usize..8, 0usize..8).prop_map(|(a, b)| Edit::Connect(a, b)),
        (0usize..8).prop_map(Edit::Delete),
    ]
}

fn pick(canvas: &Canvas, index: usize, boxes_only: bool) -> Option<DrawingObject> {
    let candidates: Vec<_> = canvas
        .shapes()
        .filter(|o| !boxes_only || !o.shape.is_line())
        .cloned()
        .collect();
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[index % candidates.len()].clone())
}

fn build(canvas: &mut Canvas, edit: &Edit) -> Option<DesignerCommand> {
    match edit {
        Edit::Add(x, y) => {
            let id = canvas.generate_id();
            let frame = Frame::new(*x, *y, 100.0, 50.0);
            Some(DesignerCommand::add_shape(DrawingObject::new(
                id,
                Shape::Process(FlowProcess::new(frame)),
            )))
        }
        Edit::Move(i, dx, dy) => {
            let obj = pick(canvas, *i, true)?;
            let from = obj.shape.frame().position();
            Some(DesignerCommand::MoveShape(MoveShape {
                id: obj.id,
                from,
                to: from.offset(*dx, *dy),
            }))
        }
        Edit::Resize(i, w, h) => {
            let obj = pick(canvas, *i, true)?;
            let old_frame = obj.shape.frame();
            Some(DesignerCommand::ResizeShape(ResizeShape {
                id: obj.id,
                old_frame,
                new_frame: Frame::new(old_frame.x, old_frame.y, *w, *h),
            }))
        }
        Edit::Relabel(i, label) => {
            let obj = pick(canvas, *i, false)?;
            Some(DesignerCommand::ChangeLabel(ChangeLabel {
                id: obj.id,
                old_label: obj.label.clone(),
                new_label: label.clone(),
            }))
        }
        Edit::Connect(a, b) => {
            let a = pick(canvas, *a, true)?;
            let b = pick(canvas, *b, true)?;
            let start = Anchor::new(a.id, ConnectionSide::Right);
            let end = Anchor::new(b.id, ConnectionSide::Left);
            let line = FlowLine::new(
                ConnectionHit::new(start, canvas.resolve_anchor(&start)?),
                ConnectionHit::new(end, canvas.resolve_anchor(&end)?),
            )
            .ok()?;
            let id = canvas.generate_id();
            Some(DesignerCommand::add_shape(DrawingObject::new(
                id,
                Shape::Line(line),
            )))
        }
        Edit::Delete(i) => {
            let obj = pick(canvas, *i, false)?;
            DesignerCommand::delete_shape(canvas, obj.id)
        }
    }
}

fn snapshot(canvas: &Canvas) -> Vec<DrawingObject> {
    canvas.shapes().cloned().collect()
}

proptest! {
    #[test]
    fn prop_undo_all_restores_registry(
        seed in prop::collection::vec((0.0..400.0f64, 0.0..400.0f64), 0..4),
        edits in prop::collection::vec(edit_strategy(), 1..20),
    ) {
        let mut canvas = Canvas::new();
        for (x, y) in seed {
            let id = canvas.generate_id();
            canvas.add_object(DrawingObject::new(
                id,
                Shape::Process(FlowProcess::new(Frame::new(x, y, 80.0, 40.0))),
            ));
        }
        let before = snapshot(&canvas);
        let mut history = UndoRedoManager::new(1000);

        let mut executed = 0;
        for edit in &edits {
            if let Some(cmd) = build(&mut canvas, edit) {
                history.execute(cmd, &mut canvas);
                executed += 1;
            }
        }
        let after = snapshot(&canvas);

        for _ in 0..executed {
            prop_assert!(history.undo(&mut canvas));
        }
        prop_assert!(!history.can_undo());
        prop_assert_eq!(snapshot(&canvas), before);

        for _ in 0..executed {
            prop_assert!(history.redo(&mut canvas));
        }
        prop_assert_eq!(snapshot(&canvas), after);
    }
}

#[test]
fn test_move_undo_restores_line_points() {
    let mut canvas = Canvas::new();
    let mut history = UndoRedoManager::new(10);
    for edit in [Edit::Add(0.0, 0.0), Edit::Add(200.0, 0.0), Edit::Connect(0, 1)] {
        let cmd = build(&mut canvas, &edit).unwrap();
        history.execute(cmd, &mut canvas);
    }
    let before = snapshot(&canvas);

    history.execute(
        DesignerCommand::MoveShape(MoveShape {
            id: 2,
            from: Point::new(200.0, 0.0),
            to: Point::new(200.0, 300.0),
        }),
        &mut canvas,
    );
    let line = canvas.get_shape(3).unwrap().shape.as_line().unwrap().clone();
    assert_eq!(line.end_point, Point::new(200.0, 325.0));

    history.undo(&mut canvas);
    assert_eq!(snapshot(&canvas), before);
}
