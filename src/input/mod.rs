use egui::{Context, PointerButton, Pos2, Rect, Response};

mod router;
pub use router::InputRouter;

/// Pointer events in canvas-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed on the canvas
    PointerDown { position: Pos2 },
    /// Pointer moved; `dragging` is true while a stroke begun on the canvas is held
    PointerMove { position: Pos2, dragging: bool },
}

/// Converts raw egui pointer state into [`InputEvent`]s for the canvas.
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    /// True from a press on the canvas until the primary button is released.
    stroke_active: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_stroke_active(&self) -> bool {
        self.stroke_active
    }

    /// Process raw egui input for the canvas allocated as `canvas`.
    ///
    /// `canvas.contains_pointer()` respects layer hit-testing, so windows
    /// floating above the canvas (the color dialog) swallow the pointer.
    pub fn process_input(&mut self, ctx: &Context, canvas: &Response) -> Vec<InputEvent> {
        let on_canvas = canvas.contains_pointer();
        ctx.input(|input| {
            let pos = input.pointer.hover_pos();
            let pressed = input.pointer.button_pressed(PointerButton::Primary);
            let held = input.pointer.button_down(PointerButton::Primary);
            self.translate(canvas.rect, pos, pressed, held, on_canvas)
        })
    }

    /// Core of [`Self::process_input`], separated from egui for testing.
    ///
    /// Only a press on the canvas starts a stroke, and only that stroke's
    /// drag is reported as `dragging`. Drags that began on another widget
    /// merely move the preview while they cross the canvas.
    pub(crate) fn translate(
        &mut self,
        canvas: Rect,
        pos: Option<Pos2>,
        pressed: bool,
        held: bool,
        on_canvas: bool,
    ) -> Vec<InputEvent> {
        let mut events = Vec::new();

        // A release ends the stroke wherever the pointer is
        if !held && !pressed {
            self.stroke_active = false;
        }

        let Some(pos) = pos else {
            self.last_pointer_pos = None;
            return events;
        };
        let local = (pos - canvas.min).to_pos2();

        if pressed {
            self.stroke_active = on_canvas;
            self.last_pointer_pos = Some(pos);
            if on_canvas {
                // The press only anchors the stroke; nothing is drawn until the pointer moves
                events.push(InputEvent::PointerDown { position: local });
            }
            return events;
        }

        if Some(pos) != self.last_pointer_pos {
            if self.stroke_active {
                events.push(InputEvent::PointerMove {
                    position: local,
                    dragging: true,
                });
            } else if on_canvas {
                events.push(InputEvent::PointerMove {
                    position: local,
                    dragging: false,
                });
            }
        }

        self.last_pointer_pos = Some(pos);
        events
    }
}
