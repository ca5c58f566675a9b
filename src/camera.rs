use glam::Vec3;

use crate::input::InputSignal;

/// Peak displacement of the sine sweep the auto modes drive their axis with
const SWEEP_AMPLITUDE: f32 = 10.0;

/// One automatic-animation behavior. At most one is active at a time; the
/// pointer pulse cycles through them in declaration order and back to None.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoMode {
    #[default]
    None,
    CameraX,
    CameraY,
    TargetX,
    TargetY,
    Roll,
}

impl AutoMode {
    /// Next mode in the cycle, wrapping after Roll
    pub fn next(self) -> Self {
        match self {
            AutoMode::None => AutoMode::CameraX,
            AutoMode::CameraX => AutoMode::CameraY,
            AutoMode::CameraY => AutoMode::TargetX,
            AutoMode::TargetX => AutoMode::TargetY,
            AutoMode::TargetY => AutoMode::Roll,
            AutoMode::Roll => AutoMode::None,
        }
    }

    /// Index shown in the overlay, 0..=5
    pub fn index(self) -> u8 {
        match self {
            AutoMode::None => 0,
            AutoMode::CameraX => 1,
            AutoMode::CameraY => 2,
            AutoMode::TargetX => 3,
            AutoMode::TargetY => 4,
            AutoMode::Roll => 5,
        }
    }
}

/// Camera pose driving the view matrix: eye position, look-at point, and the
/// roll of the up vector about world Z. None of the fields are clamped or
/// wrapped - the viewer is a free-roam demonstration and large or negative
/// values are legitimate states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub position: Vec3,
    pub target: Vec3,
    /// Up-vector roll in radians. Under AutoMode::Roll this equals total
    /// elapsed seconds and grows without bound.
    pub up_roll: f32,
    pub auto_mode: AutoMode,
}

impl CameraState {
    pub fn new() -> Self {
        Self {
            position: Vec3::new(2.0, 4.0, 20.0),
            target: Vec3::ZERO,
            up_roll: 0.0,
            auto_mode: AutoMode::None,
        }
    }

    /// Advance one frame. Manual deltas land on every component first; the
    /// active auto mode then overwrites the single scalar it drives, so
    /// within a frame the automatic motion wins over manual input on that
    /// axis and nothing else.
    pub fn update(&mut self, signal: &InputSignal, total_seconds: f64) {
        if signal.mode_advance {
            self.auto_mode = self.auto_mode.next();
        }

        self.position.x += signal.move_delta.x;
        self.position.y += signal.move_delta.y;
        self.target.x += signal.target_delta.x;
        self.target.y += signal.target_delta.y;
        self.up_roll += signal.roll_delta;

        let sweep = total_seconds.sin() as f32 * SWEEP_AMPLITUDE;
        match self.auto_mode {
            AutoMode::None => {}
            AutoMode::CameraX => self.position.x = sweep,
            AutoMode::CameraY => self.position.y = sweep,
            AutoMode::TargetX => self.target.x = sweep,
            AutoMode::TargetY => self.target.y = sweep,
            AutoMode::Roll => self.up_roll = total_seconds as f32,
        }
    }

    /// Overlay text describing the current pose and mode
    pub fn status_text(&self) -> String {
        format!(
            "CameraPosition : {{{:.2}, {:.2}}}\n\
             CameraTarget : {{{:.2}, {:.2}}}\n\
             CameraUpVectorRotate : {:.2}\n\
             MousePressAutoMode : {}",
            self.position.x,
            self.position.y,
            self.target.x,
            self.target.y,
            self.up_roll,
            self.auto_mode.index(),
        )
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn move_signal(dx: f32, dy: f32) -> InputSignal {
        InputSignal {
            move_delta: Vec2::new(dx, dy),
            ..InputSignal::default()
        }
    }

    fn pulse() -> InputSignal {
        InputSignal {
            mode_advance: true,
            ..InputSignal::default()
        }
    }

    #[test]
    fn starts_at_demo_pose() {
        let state = CameraState::new();

        assert_eq!(state.position, Vec3::new(2.0, 4.0, 20.0));
        assert_eq!(state.target, Vec3::ZERO);
        assert_eq!(state.up_roll, 0.0);
        assert_eq!(state.auto_mode, AutoMode::None);
    }

    #[test]
    fn mode_cycle_visits_all_six_and_wraps() {
        let mut mode = AutoMode::None;
        let mut seen = Vec::new();
        for _ in 0..6 {
            seen.push(mode.index());
            mode = mode.next();
        }

        assert_eq!(seen, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(mode, AutoMode::None);
    }

    #[test]
    fn deltas_accumulate_without_auto_mode() {
        let mut state = CameraState::new();

        for _ in 0..4 {
            state.update(&move_signal(0.25, -0.5), 0.0);
        }

        assert!((state.position.x - 3.0).abs() < 1e-5);
        assert!((state.position.y - 2.0).abs() < 1e-5);
        assert_eq!(state.position.z, 20.0);
    }

    #[test]
    fn camera_x_auto_mode_overwrites_manual_delta() {
        let mut state = CameraState::new();
        state.auto_mode = AutoMode::CameraX;
        let t = 0.7;

        state.update(&move_signal(5.0, 0.0), t);

        let expected = t.sin() as f32 * 10.0;
        assert_eq!(state.position.x, expected);
        // The untargeted component still took the manual delta
        assert_eq!(state.position.y, 4.0);
    }

    #[test]
    fn roll_auto_mode_tracks_elapsed_seconds_unwrapped() {
        let mut state = CameraState::new();
        state.auto_mode = AutoMode::Roll;

        let signal = InputSignal {
            roll_delta: 0.5,
            ..InputSignal::default()
        };
        state.update(&signal, 123.75);

        // Absolute assignment, well past 2*pi and deliberately not wrapped
        assert_eq!(state.up_roll, 123.75);
    }

    #[test]
    fn pulse_advances_mode_before_motion_applies() {
        let mut state = CameraState::new();
        let t = 1.0;

        // The same frame that advances None -> CameraX already sweeps x
        state.update(&pulse(), t);

        assert_eq!(state.auto_mode, AutoMode::CameraX);
        assert_eq!(state.position.x, t.sin() as f32 * 10.0);
    }

    #[test]
    fn status_text_rounds_to_two_decimals() {
        let mut state = CameraState::new();
        state.position.x = -1.005;
        state.up_roll = 3.14159;
        state.auto_mode = AutoMode::TargetY;

        let text = state.status_text();

        assert_eq!(
            text,
            "CameraPosition : {-1.00, 4.00}\n\
             CameraTarget : {0.00, 0.00}\n\
             CameraUpVectorRotate : 3.14\n\
             MousePressAutoMode : 4"
        );
    }
}
