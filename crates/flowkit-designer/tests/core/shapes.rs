use flowkit_core::{Frame, Point, ShapeError, ShapeType};
use flowkit_designer::factory::{Placement, ShapeFactory};
use flowkit_designer::model::{ConnectionSide, FlowDecision, FlowShape, Shape};

#[test]
fn test_factory_kinds() {
    let frame = Frame::new(0.0, 0.0, 100.0, 50.0);
    for kind in [
        ShapeType::Start,
        ShapeType::Terminator,
        ShapeType::Process,
        ShapeType::Decision,
    ] {
        let shape = ShapeFactory::create(kind.as_str(), Placement::Frame(frame)).unwrap();
        assert_eq!(shape.kind(), kind);
        assert_eq!(shape.connection_points().len(), 4);
    }
}

#[test]
fn test_factory_rejects_unknown_tag() {
    let result = ShapeFactory::create("Hexagon", Placement::Frame(Frame::default()));
    assert_eq!(
        result,
        Err(ShapeError::UnknownShapeType {
            tag: "Hexagon".to_string()
        })
    );
}

#[test]
fn test_connection_points_follow_frame() {
    let shape = ShapeFactory::create("Terminator", Placement::Frame(Frame::new(10.0, 20.0, 60.0, 30.0)))
        .unwrap();
    let points = shape.connection_points();
    assert_eq!(points[0], (ConnectionSide::Top, Point::new(40.0, 20.0)));
    assert_eq!(points[1], (ConnectionSide::Bottom, Point::new(40.0, 50.0)));
    assert_eq!(points[2], (ConnectionSide::Left, Point::new(10.0, 35.0)));
    assert_eq!(points[3], (ConnectionSide::Right, Point::new(70.0, 35.0)));
}

#[test]
fn test_extent_stored_unclamped() {
    let shape =
        ShapeFactory::create("Process", Placement::Frame(Frame::new(0.0, 0.0, 0.0, 0.5))).unwrap();
    assert_eq!(shape.frame().width, 0.0);
    assert_eq!(shape.frame().height, 0.5);
}

#[test]
fn test_decision_contains_diamond_only() {
    let shape = Shape::Decision(FlowDecision::new(Frame::new(0.0, 0.0, 100.0, 50.0)));
    assert!(shape.contains_point(&Point::new(50.0, 25.0)));
    assert!(!shape.contains_point(&Point::new(5.0, 5.0)));
}
