use std::collections::HashSet;

use glam::Vec2;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Per-frame step applied for a fully deflected stick or a held key
pub const INPUT_SPEED: f32 = 0.25;
/// Roll moves slower than translation
const ROLL_FACTOR: f32 = 0.2;

/// Input button identifier, decoupled from any backend key type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    ArrowLeft,
    ArrowRight,
    ArrowDown,
    ArrowUp,
    KeyA,
    KeyS,
    KeyZ,
    KeyW,
    KeyX,
    KeyC,
    Escape,
    MouseLeft,
}

/// Set of buttons currently held down, rebuilt from backend events
#[derive(Debug, Clone, Default)]
pub struct ButtonSnapshot {
    pressed: HashSet<Button>,
}

impl ButtonSnapshot {
    pub fn new() -> Self {
        Self {
            pressed: HashSet::new(),
        }
    }

    pub fn press(&mut self, button: Button) {
        self.pressed.insert(button);
    }

    pub fn release(&mut self, button: Button) {
        self.pressed.remove(&button);
    }

    pub fn is_down(&self, button: Button) -> bool {
        self.pressed.contains(&button)
    }

    /// Drop everything held - used when the window loses focus so keys
    /// don't stick
    pub fn clear(&mut self) {
        self.pressed.clear();
    }
}

/// Analog gamepad state sampled once per frame. Sticks are `[-1, 1]` per
/// axis, triggers `[0, 1]`. A host without a gamepad backend passes
/// `GamepadSnapshot::default()` (everything neutral).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GamepadSnapshot {
    pub left_stick: Vec2,
    pub right_stick: Vec2,
    pub left_trigger: f32,
    pub right_trigger: f32,
    pub quit: bool,
}

/// Reduced control signal for one frame. Recomputed every frame, never
/// persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSignal {
    /// Camera position delta (x, y)
    pub move_delta: Vec2,
    /// Look-at target delta (x, y)
    pub target_delta: Vec2,
    /// Up-vector roll delta in radians
    pub roll_delta: f32,
    /// True exactly on the frame the pointer button went down
    pub mode_advance: bool,
    /// Quit key or gamepad quit button is currently down
    pub exit: bool,
}

/// Capability trait the viewer loop consumes. The camera state machine only
/// ever sees the reduced signal, so tests can script input without a window.
pub trait InputSource {
    fn poll(&mut self) -> InputSignal;
}

/// Folds device snapshots into an `InputSignal`. The previous pointer-button
/// level is the only state it keeps, for edge detection.
#[derive(Debug, Clone)]
pub struct InputAggregator {
    prev_pointer_pressed: bool,
    speed: f32,
}

impl InputAggregator {
    pub fn new() -> Self {
        Self {
            prev_pointer_pressed: false,
            speed: INPUT_SPEED,
        }
    }

    /// Reduce this frame's snapshots. Key and stick contributions sum per
    /// axis, so opposite held keys cancel.
    pub fn aggregate(&mut self, keys: &ButtonSnapshot, pad: &GamepadSnapshot) -> InputSignal {
        let speed = self.speed;

        let mut move_delta = pad.left_stick * speed;
        if keys.is_down(Button::ArrowLeft) {
            move_delta.x -= speed;
        }
        if keys.is_down(Button::ArrowRight) {
            move_delta.x += speed;
        }
        if keys.is_down(Button::ArrowDown) {
            move_delta.y -= speed;
        }
        if keys.is_down(Button::ArrowUp) {
            move_delta.y += speed;
        }

        let mut target_delta = pad.right_stick * speed;
        if keys.is_down(Button::KeyA) {
            target_delta.x -= speed;
        }
        if keys.is_down(Button::KeyS) {
            target_delta.x += speed;
        }
        if keys.is_down(Button::KeyZ) {
            target_delta.y -= speed;
        }
        if keys.is_down(Button::KeyW) {
            target_delta.y += speed;
        }

        let roll_speed = speed * ROLL_FACTOR;
        let mut roll_delta = 0.0;
        roll_delta -= pad.left_trigger * roll_speed;
        roll_delta += pad.right_trigger * roll_speed;
        if keys.is_down(Button::KeyX) {
            roll_delta -= roll_speed;
        }
        if keys.is_down(Button::KeyC) {
            roll_delta += roll_speed;
        }

        // Edge-triggered: fires on the released->pressed transition only
        let pointer_pressed = keys.is_down(Button::MouseLeft);
        let mode_advance = pointer_pressed && !self.prev_pointer_pressed;
        self.prev_pointer_pressed = pointer_pressed;

        let exit = keys.is_down(Button::Escape) || pad.quit;

        InputSignal {
            move_delta,
            target_delta,
            roll_delta,
            mode_advance,
            exit,
        }
    }
}

impl Default for InputAggregator {
    fn default() -> Self {
        Self::new()
    }
}

/// Adapter that bridges winit events to the aggregator
#[derive(Debug, Clone, Default)]
pub struct WinitInput {
    keys: ButtonSnapshot,
    gamepad: GamepadSnapshot,
    aggregator: InputAggregator,
}

impl WinitInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a winit WindowEvent into the held-button snapshot
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(button) = Self::keycode_to_button(keycode) {
                        match event.state {
                            ElementState::Pressed => self.keys.press(button),
                            ElementState::Released => self.keys.release(button),
                        }
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if *button == MouseButton::Left {
                    match state {
                        ElementState::Pressed => self.keys.press(Button::MouseLeft),
                        ElementState::Released => self.keys.release(Button::MouseLeft),
                    }
                }
            }
            WindowEvent::Focused(false) => self.keys.clear(),
            _ => {}
        }
    }

    /// Map winit KeyCode to Button
    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::ArrowLeft => Some(Button::ArrowLeft),
            KeyCode::ArrowRight => Some(Button::ArrowRight),
            KeyCode::ArrowDown => Some(Button::ArrowDown),
            KeyCode::ArrowUp => Some(Button::ArrowUp),
            KeyCode::KeyA => Some(Button::KeyA),
            KeyCode::KeyS => Some(Button::KeyS),
            KeyCode::KeyZ => Some(Button::KeyZ),
            KeyCode::KeyW => Some(Button::KeyW),
            KeyCode::KeyX => Some(Button::KeyX),
            KeyCode::KeyC => Some(Button::KeyC),
            KeyCode::Escape => Some(Button::Escape),
            _ => None,
        }
    }
}

impl InputSource for WinitInput {
    fn poll(&mut self) -> InputSignal {
        self.aggregator.aggregate(&self.keys, &self.gamepad)
    }
}
