use camera_viewer::input::{Button, ButtonSnapshot, GamepadSnapshot, InputAggregator};
use camera_viewer::view::{view_matrix, ViewProjection};
use camera_viewer::{AutoMode, CameraState, InputSignal};
use glam::{Mat4, Vec2, Vec3};

fn signal(move_delta: (f32, f32), target_delta: (f32, f32), roll_delta: f32) -> InputSignal {
    InputSignal {
        move_delta: Vec2::new(move_delta.0, move_delta.1),
        target_delta: Vec2::new(target_delta.0, target_delta.1),
        roll_delta,
        mode_advance: false,
        exit: false,
    }
}

fn pulse() -> InputSignal {
    InputSignal {
        mode_advance: true,
        ..InputSignal::default()
    }
}

#[cfg(test)]
mod mode_cycle_tests {
    use super::*;

    #[test]
    fn test_mode_index_stays_in_range_after_every_update() {
        let mut state = CameraState::new();

        for frame in 0..20 {
            let input = if frame % 3 == 0 { pulse() } else { signal((0.1, 0.0), (0.0, 0.0), 0.01) };
            state.update(&input, frame as f64 * 0.016);
            assert!(state.auto_mode.index() <= 5, "mode index out of range on frame {}", frame);
        }
    }

    #[test]
    fn test_six_pulses_close_the_cycle() {
        let mut state = CameraState::new();
        assert_eq!(state.auto_mode, AutoMode::None);

        for _ in 0..6 {
            state.update(&pulse(), 0.0);
        }

        assert_eq!(state.auto_mode, AutoMode::None, "cycle should wrap back to None");
    }

    #[test]
    fn test_held_pointer_button_advances_once() {
        let mut aggregator = InputAggregator::new();
        let mut state = CameraState::new();
        let pad = GamepadSnapshot::default();

        let mut held = ButtonSnapshot::new();
        held.press(Button::MouseLeft);

        // Button stays down across three consecutive frames
        for _ in 0..3 {
            let input = aggregator.aggregate(&held, &pad);
            state.update(&input, 0.0);
        }

        assert_eq!(state.auto_mode.index(), 1, "level-held button must not retrigger");
    }

    #[test]
    fn test_release_then_press_advances_again() {
        let mut aggregator = InputAggregator::new();
        let mut state = CameraState::new();
        let pad = GamepadSnapshot::default();

        let mut held = ButtonSnapshot::new();
        held.press(Button::MouseLeft);
        let released = ButtonSnapshot::new();

        state.update(&aggregator.aggregate(&held, &pad), 0.0);
        state.update(&aggregator.aggregate(&released, &pad), 0.0);
        state.update(&aggregator.aggregate(&held, &pad), 0.0);

        assert_eq!(state.auto_mode.index(), 2);
    }
}

#[cfg(test)]
mod update_ordering_tests {
    use super::*;

    #[test]
    fn test_auto_sweep_overwrites_manual_move_on_its_axis() {
        let mut state = CameraState::new();
        state.auto_mode = AutoMode::CameraX;
        let t = 0.25;

        state.update(&signal((7.0, 0.5), (0.0, 0.0), 0.0), t);

        let expected = t.sin() as f32 * 10.0;
        assert_eq!(state.position.x, expected, "overwrite must win over the manual delta");
        assert_eq!(state.position.y, 4.5, "other components still accumulate");
    }

    #[test]
    fn test_target_sweep_leaves_position_alone() {
        let mut state = CameraState::new();
        state.auto_mode = AutoMode::TargetY;
        let t = 1.1;

        state.update(&signal((0.25, 0.25), (0.25, 9.0), 0.0), t);

        assert_eq!(state.target.y, t.sin() as f32 * 10.0);
        assert!((state.target.x - 0.25).abs() < 1e-6);
        assert!((state.position.x - 2.25).abs() < 1e-6);
        assert!((state.position.y - 4.25).abs() < 1e-6);
    }

    #[test]
    fn test_accumulation_is_pure_without_auto_mode() {
        let mut state = CameraState::new();
        let frames = 8;

        for _ in 0..frames {
            state.update(&signal((0.25, -0.25), (0.5, 0.5), 0.05), 2.0);
        }

        let n = frames as f32;
        assert!((state.position.x - (2.0 + n * 0.25)).abs() < 1e-5);
        assert!((state.position.y - (4.0 - n * 0.25)).abs() < 1e-5);
        assert!((state.target.x - n * 0.5).abs() < 1e-5);
        assert!((state.target.y - n * 0.5).abs() < 1e-5);
        assert!((state.up_roll - n * 0.05).abs() < 1e-5);
    }

    #[test]
    fn test_auto_roll_ignores_roll_delta() {
        let mut state = CameraState::new();
        state.auto_mode = AutoMode::Roll;

        state.update(&signal((0.0, 0.0), (0.0, 0.0), -3.0), 1.5708);

        assert_eq!(state.up_roll, 1.5708_f64 as f32);
    }

    #[test]
    fn test_depth_components_never_move() {
        for mode_pulses in 0..6 {
            let mut state = CameraState::new();
            for _ in 0..mode_pulses {
                state.update(&pulse(), 0.0);
            }
            state.update(&signal((1.0, 1.0), (1.0, 1.0), 1.0), 2.5);
            assert_eq!(state.position.z, 20.0, "position.z fixed in mode {}", mode_pulses);
            assert_eq!(state.target.z, 0.0, "target.z fixed in mode {}", mode_pulses);
        }
    }
}

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn test_first_frame_moves_camera_and_builds_look_at() {
        let mut state = CameraState::new();

        state.update(&signal((1.0, 0.0), (0.0, 0.0), 0.0), 0.0);

        assert_eq!(state.position, Vec3::new(3.0, 4.0, 20.0));
        assert_eq!(state.target, Vec3::ZERO);

        let view = view_matrix(&state);
        let expected = Mat4::look_at_rh(Vec3::new(3.0, 4.0, 20.0), Vec3::ZERO, Vec3::Y);
        assert_eq!(view.to_cols_array(), expected.to_cols_array());
    }

    #[test]
    fn test_auto_roll_at_quarter_turn() {
        let mut state = CameraState::new();
        state.auto_mode = AutoMode::Roll;

        state.update(&signal((0.0, 0.0), (0.0, 0.0), 0.5), 1.5708);

        assert!((state.up_roll - 1.5708).abs() < 1e-6);
    }

    #[test]
    fn test_status_string_matches_overlay_contract() {
        let mut state = CameraState::new();
        state.update(&signal((1.0, 0.0), (0.0, 0.0), 0.0), 0.0);

        assert_eq!(
            state.status_text(),
            "CameraPosition : {3.00, 4.00}\n\
             CameraTarget : {0.00, 0.00}\n\
             CameraUpVectorRotate : 0.00\n\
             MousePressAutoMode : 0"
        );
    }
}

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn test_builder_is_pure_and_bit_stable() {
        let mut state = CameraState::new();
        state.update(&signal((0.3, -0.2), (0.1, 0.4), 0.7), 2.0);
        let aspect = 1024.0 / 768.0;

        let first = ViewProjection::derive(&state, aspect);
        let second = ViewProjection::derive(&state, aspect);

        assert_eq!(first.view.to_cols_array(), second.view.to_cols_array());
        assert_eq!(
            first.projection.to_cols_array(),
            second.projection.to_cols_array()
        );
        assert_eq!(
            first.view_proj().to_cols_array(),
            second.view_proj().to_cols_array()
        );
    }

    #[test]
    fn test_rolled_up_vector_changes_the_view() {
        let mut state = CameraState::new();
        let level = view_matrix(&state);

        state.up_roll = 0.5;
        let rolled = view_matrix(&state);

        assert_ne!(level.to_cols_array(), rolled.to_cols_array());
    }
}
