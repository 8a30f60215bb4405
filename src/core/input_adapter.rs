use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

use crate::controls::Gesture;

/// Pixels of trackpad scroll counted as one wheel notch
const PIXELS_PER_LINE: f32 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragMode {
    Rotate,
    Pan,
}

/// Turns winit pointer events into orbit control gestures
///
/// Left drag rotates, right or middle drag pans, the wheel dollies.
#[derive(Debug, Clone, Default)]
pub struct PointerInput {
    cursor: Option<(f32, f32)>,
    drag: Option<DragMode>,
}

impl PointerInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn process_event(&mut self, event: &WindowEvent) -> Option<Gesture> {
        match event {
            WindowEvent::MouseInput { state, button, .. } => {
                self.button(*button, *state == ElementState::Pressed);
                None
            }
            WindowEvent::CursorMoved { position, .. } => self.cursor_moved(position.x as f32, position.y as f32),
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                self.drag = None;
                None
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let notches = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_LINE,
                };
                Self::wheel(notches)
            }
            _ => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    fn button(&mut self, button: MouseButton, pressed: bool) {
        let mode = match button {
            MouseButton::Left => DragMode::Rotate,
            MouseButton::Right | MouseButton::Middle => DragMode::Pan,
            _ => return,
        };
        if pressed {
            self.drag = Some(mode);
        } else if self.drag == Some(mode) {
            self.drag = None;
        }
    }

    fn cursor_moved(&mut self, x: f32, y: f32) -> Option<Gesture> {
        let previous = self.cursor.replace((x, y))?;
        let (dx, dy) = (x - previous.0, y - previous.1);
        if dx == 0.0 && dy == 0.0 {
            return None;
        }
        match self.drag? {
            DragMode::Rotate => Some(Gesture::Rotate { dx, dy }),
            DragMode::Pan => Some(Gesture::Pan { dx, dy }),
        }
    }

    fn wheel(notches: f32) -> Option<Gesture> {
        (notches != 0.0).then_some(Gesture::Dolly { delta: notches })
    }
}
