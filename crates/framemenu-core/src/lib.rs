//! Core types and collaborator traits for the framemenu navigation engine.
//!
//! This crate provides what the engine consumes from its host:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`]
//! - Rendering: the [`Canvas`] trait and a [`RecordingCanvas`]
//! - Input: [`Control`] identifiers polled through [`ControlSource`]
//! - Audio: [`Sound`] references played through an [`AudioSink`]
//! - Per-menu [`Metadata`] and the [`MenuError`] taxonomy

pub mod audio;
pub mod canvas;
mod color;
pub mod control;
mod error;
mod geometry;
mod metadata;

pub use audio::{play_optional, AudioSink, NullAudio, Sound};
pub use canvas::{Canvas, DrawCommand, FontWeight, RecordingCanvas, TextAlign, TextStyle};
pub use color::Color;
pub use control::{Control, ControlSource};
pub use error::{MenuError, Result};
pub use geometry::{Point, Rect, Size};
pub use metadata::{Metadata, MetadataValue};

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // COLOR TESTS
    // ==========================================================================

    mod color_tests {
        use super::*;
        use proptest::prelude::*;

        #[test]
        fn test_color_new_clamps_values() {
            let c = Color::new(1.5, -0.5, 0.5, 2.0);
            assert_eq!(c.r, 1.0);
            assert_eq!(c.g, 0.0);
            assert_eq!(c.b, 0.5);
            assert_eq!(c.a, 1.0);
        }

        #[test]
        fn test_color_with_alpha() {
            let c = Color::WHITE.with_alpha(0.25);
            assert_eq!(c.r, 1.0);
            assert_eq!(c.a, 0.25);
        }

        proptest! {
            #[test]
            fn prop_color_clamps_to_valid_range(r in -1.0f32..2.0, g in -1.0f32..2.0, b in -1.0f32..2.0, a in -1.0f32..2.0) {
                let c = Color::new(r, g, b, a);
                prop_assert!(c.r >= 0.0 && c.r <= 1.0);
                prop_assert!(c.g >= 0.0 && c.g <= 1.0);
                prop_assert!(c.b >= 0.0 && c.b <= 1.0);
                prop_assert!(c.a >= 0.0 && c.a <= 1.0);
            }
        }
    }

    // ==========================================================================
    // GEOMETRY TESTS
    // ==========================================================================

    mod geometry_tests {
        use super::*;

        #[test]
        fn test_point_down() {
            let p = Point::new(10.0, 20.0).down(5.0);
            assert_eq!(p, Point::new(10.0, 25.0));
        }

        #[test]
        fn test_rect_new() {
            let r = Rect::new(10.0, 20.0, 100.0, 50.0);
            assert_eq!(r.x, 10.0);
            assert_eq!(r.height, 50.0);
        }
    }

    // ==========================================================================
    // CANVAS TESTS
    // ==========================================================================

    mod canvas_tests {
        use super::*;

        #[test]
        fn test_recording_canvas_records_in_order() {
            let mut canvas = RecordingCanvas::new();
            canvas.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::BLACK);
            canvas.draw_text("Hello", Point::ORIGIN, &TextStyle::default());
            canvas.draw_line(Point::ORIGIN, Point::new(1.0, 1.0), Color::WHITE, 1.0);

            assert_eq!(canvas.command_count(), 3);
            assert!(matches!(canvas.commands()[0], DrawCommand::FillRect { .. }));
            assert_eq!(canvas.texts(), vec!["Hello"]);
        }

        #[test]
        fn test_recording_canvas_clear() {
            let mut canvas = RecordingCanvas::new();
            canvas.stroke_rect(Rect::default(), Color::WHITE, 2.0);
            assert_eq!(canvas.command_count(), 1);
            canvas.clear();
            assert!(canvas.is_empty());
        }
    }
}
