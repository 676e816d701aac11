use mandel_explorer::{
    colourize, iterate, pixel_to_complex, presets, render, render_cancelable, zoom, CanvasSize, Cancelled,
    ChannelOrder, Colour, Complex, HsvParams, IterationResult, Point, RenderError, RenderRequest, Viewport,
    ZoomDirection, BYTES_PER_PIXEL,
};
use std::sync::atomic::{AtomicBool, Ordering};

fn basic_request(width: i32, height: i32) -> RenderRequest {
    RenderRequest::new(
        Viewport::new(-0.5, 0.0, 0.005),
        300,
        CanvasSize::new(width, height),
        HsvParams::new(0.0, 0.85, 1.0),
    )
}

#[test]
fn small_basic_render_is_48_bytes_with_black_centre() {
    let frame = render(&basic_request(4, 4)).unwrap();

    assert_eq!(frame.len(), 48);
    assert_eq!(frame.channel_order(), ChannelOrder::Bgr);
    assert_eq!(frame.pixel(Point { x: 2, y: 2 }).unwrap(), Colour::BLACK);
}

#[test]
fn negative_scale_fails_with_invalid_viewport() {
    let request = RenderRequest {
        viewport: Viewport::new(-0.5, 0.0, -1.0),
        ..basic_request(4, 4)
    };

    assert_eq!(render(&request), Err(RenderError::InvalidViewport { scale: -1.0 }));
}

#[test]
fn zero_iteration_cap_fails() {
    let request = RenderRequest {
        max_iterations: 0,
        ..basic_request(4, 4)
    };

    assert_eq!(
        render(&request),
        Err(RenderError::InvalidIterationCap { max_iterations: 0 })
    );
}

#[test]
fn non_positive_dimensions_fail() {
    for (width, height) in [(0, 4), (4, 0), (-1, -1)] {
        assert_eq!(
            render(&basic_request(width, height)),
            Err(RenderError::InvalidDimensions { width, height })
        );
    }
}

#[test]
fn buffer_is_tightly_packed_for_odd_widths() {
    let frame = render(&basic_request(7, 3)).unwrap();

    assert_eq!(frame.len(), 7 * 3 * BYTES_PER_PIXEL);
    assert_eq!(frame.rows().count(), 3);
}

#[test]
fn iterations_stay_within_cap() {
    let viewport = Viewport::new(-0.75, 0.0, 0.05);
    let size = CanvasSize::new(40, 30);

    for y in 0..size.height {
        for x in 0..size.width {
            let c = pixel_to_complex(Point { x, y }, &viewport, size);
            let result = iterate(c, 40);

            assert!((0..=40).contains(&result.iterations));
        }
    }
}

#[test]
fn origin_never_escapes() {
    assert_eq!(iterate(Complex::ZERO, 123).iterations, 123);
}

#[test]
fn far_point_escapes_on_first_check_after_one_update() {
    let result = iterate(Complex::new(2.0, 2.0), 100);

    assert_eq!(result.iterations, 1);
    assert_eq!(result.escaped_modulus_squared, 8.0);
}

#[test]
fn non_escaping_result_is_black_for_any_colour() {
    let result = IterationResult {
        iterations: 50,
        escaped_modulus_squared: 0.25,
    };

    for hue in [0.0, 90.0, 275.5] {
        for (saturation, value) in [(0.0, 0.0), (0.5, 0.5), (1.0, 1.0)] {
            assert_eq!(colourize(result, 50, HsvParams::new(hue, saturation, value)), Colour::BLACK);
        }
    }
}

#[test]
fn unsaturated_colours_are_grey_and_brighten_with_value() {
    let result = IterationResult {
        iterations: 9,
        escaped_modulus_squared: 5.0,
    };
    let mut previous: Option<u8> = None;

    for step in 0..=20 {
        let colour = colourize(result, 100, HsvParams::new(123.0, 0.0, step as f64 / 20.0));

        assert!(colour.is_grey());
        if let Some(p) = previous {
            assert!(colour.r >= p);
        }
        previous = Some(colour.r);
    }
    assert_eq!(previous, Some(255));
}

#[test]
fn centre_pixel_maps_to_viewport_centre() {
    for preset in presets::PRESETS {
        let size = CanvasSize::new(640, 640);

        let centre = pixel_to_complex(Point { x: 320, y: 320 }, &preset.viewport, size);

        assert_eq!(centre, preset.viewport.center());
    }
}

#[test]
fn zooming_in_then_out_restores_scale() {
    let size = CanvasSize::new(640, 640);
    let start = Viewport::new(-0.5, 0.0, 0.005);
    let pixel = Point { x: 100, y: 500 };

    let zoomed_in = zoom(&start, pixel, size, ZoomDirection::In);
    let zoomed_out = zoom(&zoomed_in, pixel, size, ZoomDirection::Out);

    assert_eq!(zoomed_in.center(), pixel_to_complex(pixel, &start, size));
    assert!((zoomed_out.scale - start.scale).abs() < 1e-18);
}

#[test]
fn seahorse_valley_preset_renders_colour() {
    let preset = presets::find("Seahorse Valley").unwrap();
    let request = RenderRequest::new(
        preset.viewport,
        preset.max_iterations,
        CanvasSize::new(32, 32),
        HsvParams::default(),
    );

    let frame = render(&request).unwrap();

    assert!(frame.bytes().iter().any(|&b| b != 0));
}

#[test]
fn flag_cancelled_render_returns_nothing() {
    let flag = AtomicBool::new(true);
    let token = || flag.load(Ordering::Relaxed);

    assert_eq!(
        render_cancelable(&basic_request(64, 64), &token),
        Err(RenderError::Cancelled(Cancelled))
    );

    flag.store(false, Ordering::Relaxed);
    assert_eq!(render_cancelable(&basic_request(64, 64), &token), render(&basic_request(64, 64)));
}
