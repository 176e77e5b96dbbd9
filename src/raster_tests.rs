use super::*;

const RED: Color = Color::new(0xff, 0x00, 0x00);
const WHITE_PIXEL: [u8; 4] = [0xff, 0xff, 0xff, 0xff];
const RED_PIXEL: [u8; 4] = [0xff, 0x00, 0x00, 0xff];

fn frame(width: usize, height: usize) -> Vec<u8> {
    vec![0u8; width * height * 4]
}

#[test]
fn clear_fills_frame() {
    let mut buffer = frame(4, 3);
    let mut canvas = Canvas::new(&mut buffer, 4, 3);
    canvas.clear(Color::new(1, 2, 3));
    assert_eq!(canvas.pixel(3, 2), Some([1, 2, 3, 0xff]));
    assert_eq!(canvas.pixel(4, 0), None);
}

#[test]
fn stroked_circle_paints_ring_only() {
    let mut buffer = frame(100, 100);
    let mut canvas = Canvas::new(&mut buffer, 100, 100);
    canvas.clear(Color::WHITE);
    canvas.stroke_circle(Point::new(50.0, 50.0), 30.0, 6.0, RED);

    // on the ring, right and top
    assert_eq!(canvas.pixel(80, 50), Some(RED_PIXEL));
    assert_eq!(canvas.pixel(50, 20), Some(RED_PIXEL));
    // center and outside stay white
    assert_eq!(canvas.pixel(50, 50), Some(WHITE_PIXEL));
    assert_eq!(canvas.pixel(95, 50), Some(WHITE_PIXEL));
}

#[test]
fn butt_arc_covers_only_its_sweep() {
    let mut buffer = frame(100, 100);
    let mut canvas = Canvas::new(&mut buffer, 100, 100);
    canvas.clear(Color::WHITE);
    // 12 o'clock clockwise to 6 o'clock: the right half
    canvas.stroke_arc(
        Rect::around(Point::new(50.0, 50.0), 30.0),
        -90.0,
        180.0,
        6.0,
        StrokeCap::Butt,
        RED,
    );

    assert_eq!(canvas.pixel(80, 50), Some(RED_PIXEL));
    assert_eq!(canvas.pixel(19, 50), Some(WHITE_PIXEL));
}

#[test]
fn negative_sweep_goes_counter_clockwise() {
    let mut buffer = frame(100, 100);
    let mut canvas = Canvas::new(&mut buffer, 100, 100);
    canvas.clear(Color::WHITE);
    canvas.stroke_arc(
        Rect::around(Point::new(50.0, 50.0), 30.0),
        -90.0,
        -180.0,
        6.0,
        StrokeCap::Butt,
        RED,
    );

    assert_eq!(canvas.pixel(19, 50), Some(RED_PIXEL));
    assert_eq!(canvas.pixel(80, 50), Some(WHITE_PIXEL));
}

#[test]
fn oversized_sweep_is_a_full_circle() {
    let mut buffer = frame(100, 100);
    let mut canvas = Canvas::new(&mut buffer, 100, 100);
    canvas.clear(Color::WHITE);
    canvas.stroke_arc(
        Rect::around(Point::new(50.0, 50.0), 30.0),
        -90.0,
        900.0,
        6.0,
        StrokeCap::Butt,
        RED,
    );

    assert_eq!(canvas.pixel(19, 50), Some(RED_PIXEL));
    assert_eq!(canvas.pixel(80, 50), Some(RED_PIXEL));
}

#[test]
fn zero_sweep_draws_nothing() {
    let mut buffer = frame(40, 40);
    let mut canvas = Canvas::new(&mut buffer, 40, 40);
    canvas.clear(Color::WHITE);
    canvas.stroke_arc(
        Rect::around(Point::new(20.0, 20.0), 10.0),
        0.0,
        0.0,
        4.0,
        StrokeCap::Round,
        RED,
    );
    drop(canvas);
    assert!(buffer.iter().all(|b| *b == 0xff));
}

#[test]
fn translucent_color_blends() {
    let mut buffer = frame(10, 10);
    let mut canvas = Canvas::new(&mut buffer, 10, 10);
    canvas.clear(Color::WHITE);
    canvas.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::rgba(0, 0, 0, 0x80));

    let [r, g, b, a] = canvas.pixel(5, 5).unwrap();
    assert_eq!(a, 0xff);
    assert!((126..=128).contains(&r));
    assert_eq!((r, r), (g, b));
}

#[test]
fn dots_and_lines_paint() {
    let mut buffer = frame(50, 50);
    let mut canvas = Canvas::new(&mut buffer, 50, 50);
    canvas.clear(Color::WHITE);
    canvas.submit(DrawCommand::Dot {
        center: Point::new(10.0, 10.0),
        radius: 4.0,
        color: RED,
    });
    canvas.submit(DrawCommand::Line {
        from: Point::new(0.0, 40.5),
        to: Point::new(50.0, 40.5),
        stroke_width: 3.0,
        color: RED,
    });

    assert_eq!(canvas.pixel(10, 10), Some(RED_PIXEL));
    assert_eq!(canvas.pixel(25, 40), Some(RED_PIXEL));
    assert_eq!(canvas.pixel(25, 30), Some(WHITE_PIXEL));
}

#[test]
fn text_without_font_is_skipped() {
    let mut buffer = frame(40, 20);
    let mut canvas = Canvas::new(&mut buffer, 40, 20);
    canvas.clear(Color::WHITE);
    canvas.draw_text(Point::new(0.0, 10.0), "hi", 12.0, RED, TextAnchor::Start);
    drop(canvas);
    assert!(buffer.iter().all(|b| *b == 0xff));
}

#[test]
fn zero_sized_canvas_is_a_no_op() {
    let mut buffer = Vec::new();
    let mut canvas = Canvas::new(&mut buffer, 0, 0);
    canvas.stroke_circle(Point::new(0.0, 0.0), 10.0, 2.0, RED);
    canvas.fill_rect(Rect::new(-5.0, -5.0, 5.0, 5.0), RED);
    assert_eq!(canvas.pixel(0, 0), None);
}

#[test]
fn off_canvas_shapes_are_clipped() {
    let mut buffer = frame(10, 10);
    let mut canvas = Canvas::new(&mut buffer, 10, 10);
    canvas.clear(Color::WHITE);
    canvas.stroke_circle(Point::new(-100.0, -100.0), 5.0, 2.0, RED);
    canvas.stroke_circle(Point::new(5.0, 5.0), -3.0, 2.0, RED);
    drop(canvas);
    assert!(buffer.iter().all(|b| *b == 0xff));
}

#[test]
fn load_font_reports_missing_file() {
    let err = load_font(Path::new("/definitely/not/here.ttf")).unwrap_err();
    assert!(matches!(err, GaugeError::FontRead { .. }));
}

#[test]
fn load_font_rejects_garbage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.ttf");
    std::fs::write(&path, b"not a font").unwrap();
    let err = load_font(&path).unwrap_err();
    assert!(matches!(err, GaugeError::FontParse(_)));
}

#[test]
fn renders_a_chart_end_to_end() {
    use crate::entry::Entry;
    use crate::radial_gauge::RadialGaugeChart;

    let chart = RadialGaugeChart::default();
    let entries = vec![
        Entry::builder().value(1.0).color(RED).build(),
        Entry::builder().value(2.0).color(RED).build(),
    ];

    let mut buffer = frame(200, 200);
    let mut canvas = Canvas::new(&mut buffer, 200, 200);
    canvas.clear(Color::WHITE);
    chart.draw(&entries, &mut canvas, 200.0, 200.0);

    // outer ring (r = 2 * 2 * 80/6) is a full lap, so its leftmost point is painted
    let outer: f32 = 4.0 * 80.0 / 6.0;
    let x = (100.0 - outer).round() as usize;
    assert_eq!(canvas.pixel(x, 100), Some(RED_PIXEL));
}
