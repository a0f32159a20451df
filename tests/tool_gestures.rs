use egui::{pos2, Color32};
use raster_paint::raster;
use raster_paint::{
    CanvasSurface, EllipseTool, PencilTool, PixelBuffer, Point, Surface, Tool, ToolContext,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn surfaces(size: usize) -> (CanvasSurface, CanvasSurface) {
    (CanvasSurface::new(size, size), CanvasSurface::new(size, size))
}

#[test]
fn ellipse_gesture_end_to_end() {
    init_logging();
    let (mut preview, mut drawing) = surfaces(10);
    let mut tool = EllipseTool::default();
    let mut ctx = ToolContext {
        preview: &mut preview,
        drawing: &mut drawing,
    };

    // Press at (1,1), wiggle in place, release at (8,8).
    tool.on_pointer_down(pos2(1.0, 1.0), &mut ctx).unwrap();
    tool.on_pointer_move(pos2(1.0, 1.0), &mut ctx).unwrap();
    tool.on_pointer_up(pos2(8.0, 8.0), &mut ctx).unwrap();

    // The drawing surface holds exactly the outline inscribed in the
    // rectangle with corners (1,1) and (8,8).
    let mut expected = PixelBuffer::new(10, 10);
    raster::draw_in_rect(&mut expected, Point::new(1, 1), Point::new(8, 8), |_| {
        Color32::BLACK
    });
    assert_eq!(drawing.pixel_data().unwrap(), expected);
    assert!(!expected.is_blank());

    // The preview surface is left fully cleared, alpha included.
    assert!(preview.pixel_data().unwrap().is_blank());
}

#[test]
fn pencil_gesture_end_to_end() {
    init_logging();
    let (mut preview, mut drawing) = surfaces(10);
    let mut tool = PencilTool::new();
    let mut ctx = ToolContext {
        preview: &mut preview,
        drawing: &mut drawing,
    };

    tool.on_pointer_down(pos2(0.0, 0.0), &mut ctx).unwrap();
    tool.on_pointer_move(pos2(3.0, 0.0), &mut ctx).unwrap();
    tool.on_pointer_up(pos2(3.0, 0.0), &mut ctx).unwrap();

    let pixels = drawing.pixel_data().unwrap();
    for x in 0..=3 {
        assert_eq!(
            pixels.get(Point::new(x, 0)),
            Some(Color32::BLACK),
            "missing stroke pixel at x={x}"
        );
    }
    // Nothing beyond the stroke, and no preview involvement at all.
    assert_eq!(pixels.get(Point::new(4, 0)), Some(Color32::TRANSPARENT));
    assert_eq!(pixels.get(Point::new(0, 1)), Some(Color32::TRANSPARENT));
    assert!(preview.pixel_data().unwrap().is_blank());
}

#[test]
fn up_without_down_leaves_both_surfaces_unchanged() {
    init_logging();
    let (mut preview, mut drawing) = surfaces(10);
    let mut tool = EllipseTool::default();
    let mut ctx = ToolContext {
        preview: &mut preview,
        drawing: &mut drawing,
    };

    tool.on_pointer_up(pos2(5.0, 5.0), &mut ctx).unwrap();

    assert!(preview.pixel_data().unwrap().is_blank());
    assert!(drawing.pixel_data().unwrap().is_blank());
}

#[test]
fn duplicate_down_behaves_like_a_single_down() {
    init_logging();
    let run = |doubled: bool| {
        let (mut preview, mut drawing) = surfaces(10);
        let mut tool = EllipseTool::default();
        let mut ctx = ToolContext {
            preview: &mut preview,
            drawing: &mut drawing,
        };
        tool.on_pointer_down(pos2(2.0, 2.0), &mut ctx).unwrap();
        if doubled {
            // A second down mid-gesture must not re-anchor.
            tool.on_pointer_down(pos2(4.0, 4.0), &mut ctx).unwrap();
        }
        tool.on_pointer_move(pos2(7.0, 6.0), &mut ctx).unwrap();
        tool.on_pointer_up(pos2(7.0, 6.0), &mut ctx).unwrap();
        drawing.pixel_data().unwrap()
    };

    assert_eq!(run(true), run(false));
}

#[test]
fn stray_moves_before_and_after_a_gesture_are_ignored() {
    init_logging();
    let (mut preview, mut drawing) = surfaces(10);
    let mut tool = PencilTool::new();
    let mut ctx = ToolContext {
        preview: &mut preview,
        drawing: &mut drawing,
    };

    tool.on_pointer_move(pos2(1.0, 1.0), &mut ctx).unwrap();
    tool.on_pointer_down(pos2(2.0, 2.0), &mut ctx).unwrap();
    tool.on_pointer_move(pos2(4.0, 2.0), &mut ctx).unwrap();
    tool.on_pointer_up(pos2(4.0, 2.0), &mut ctx).unwrap();
    tool.on_pointer_move(pos2(8.0, 8.0), &mut ctx).unwrap();

    let pixels = drawing.pixel_data().unwrap();
    assert_eq!(pixels.get(Point::new(3, 2)), Some(Color32::BLACK));
    assert_eq!(pixels.get(Point::new(8, 8)), Some(Color32::TRANSPARENT));
    assert_eq!(pixels.get(Point::new(1, 1)), Some(Color32::TRANSPARENT));
}

#[test]
fn fractional_pointer_positions_are_floored_to_pixels() {
    init_logging();
    let (mut preview, mut drawing) = surfaces(10);
    let mut tool = PencilTool::new();
    let mut ctx = ToolContext {
        preview: &mut preview,
        drawing: &mut drawing,
    };

    tool.on_pointer_down(pos2(0.9, 0.2), &mut ctx).unwrap();
    tool.on_pointer_move(pos2(3.7, 0.8), &mut ctx).unwrap();
    tool.on_pointer_up(pos2(3.7, 0.8), &mut ctx).unwrap();

    let pixels = drawing.pixel_data().unwrap();
    for x in 0..=3 {
        assert_eq!(pixels.get(Point::new(x, 0)), Some(Color32::BLACK));
    }
}

#[test]
fn committed_pixels_survive_the_next_gesture_preview() {
    init_logging();
    let (mut preview, mut drawing) = surfaces(10);
    let mut tool = EllipseTool::default();
    let mut ctx = ToolContext {
        preview: &mut preview,
        drawing: &mut drawing,
    };

    tool.on_pointer_down(pos2(1.0, 1.0), &mut ctx).unwrap();
    tool.on_pointer_up(pos2(8.0, 8.0), &mut ctx).unwrap();
    let committed = ctx.drawing.pixel_data().unwrap();

    // Start a second drag; mid-gesture the committed surface must be
    // byte-identical to what the first gesture left behind.
    tool.on_pointer_down(pos2(3.0, 3.0), &mut ctx).unwrap();
    tool.on_pointer_move(pos2(6.0, 6.0), &mut ctx).unwrap();
    assert_eq!(ctx.drawing.pixel_data().unwrap(), committed);
}
