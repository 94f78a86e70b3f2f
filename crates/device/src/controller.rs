use glam::{Mat4, Quat, Vec3};
use handspace_common::{Handedness, NodeId, Pose};
use handspace_frame::{InputFrame, PathRegistry, RawPathTable, SemanticPathTable, Value};
use handspace_scene::{SceneError, SceneGraph};
use tracing::{debug, warn};

use crate::profile::DeviceProfile;
use crate::snapshot::DeviceSnapshot;

/// Errors surfaced by the per-tick pipeline.
///
/// Skips (disconnected device, unresolved hand, missing tracking pose) are
/// not errors; the one hard failure is a scene lookup for a resolved hand.
#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    #[error("scene node for {hand} controller: {source}")]
    SceneNode {
        hand: Handedness,
        source: SceneError,
    },
}

/// Fixed configuration for one controller binding.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    pub profile: DeviceProfile,
    /// Ergonomic grip correction, applied in the device's local frame.
    pub hand_offset: Mat4,
    /// Pitch correction applied to the ray direction in local space.
    pub ray_rotation: Quat,
}

impl Default for ControllerConfig {
    /// The Vive wand profile with its conventional corrections: the grip sits
    /// 13 cm behind the tracking origin pitched 40 degrees down, and the
    /// pointing ray is tilted 15 degrees below the node's forward axis.
    fn default() -> Self {
        Self {
            profile: DeviceProfile::vive_wand(),
            hand_offset: Mat4::from_rotation_translation(
                Quat::from_rotation_x(-40f32.to_radians()),
                Vec3::new(0.0, 0.0, 0.13),
            ),
            ray_rotation: Quat::from_rotation_x(-std::f32::consts::PI / 12.0),
        }
    }
}

/// Per-tick context built by the caller before ticking its device bindings.
#[derive(Debug, Clone, Copy)]
pub struct TickContext {
    /// Sitting-to-standing correction: lifts the tracking-space origin to the
    /// player's standing eye height. Pre-multiplied onto the raw device pose.
    pub sitting_to_standing: Mat4,
}

impl TickContext {
    pub const SEATED_EYE_HEIGHT: f32 = 1.6;

    /// The conventional seated default: a straight lift to eye height.
    pub fn seated_default() -> Self {
        Self {
            sitting_to_standing: Mat4::from_translation(Vec3::new(
                0.0,
                Self::SEATED_EYE_HEIGHT,
                0.0,
            )),
        }
    }
}

impl Default for TickContext {
    fn default() -> Self {
        Self::seated_default()
    }
}

/// One-way latch from construction-time unknown hand to a bound hand.
#[derive(Debug, Clone, Copy)]
enum HandBinding {
    Unresolved,
    Resolved { hand: Handedness, node: NodeId },
}

/// A tracked controller bound to the input frame for its connection lifetime.
///
/// Created once per device-connection event; `tick` is called exactly once
/// per simulation tick with that tick's snapshot.
#[derive(Debug)]
pub struct TrackedController {
    config: ControllerConfig,
    device_index: u32,
    raw: RawPathTable,
    semantic: SemanticPathTable,
    hand: HandBinding,
}

fn selector_for(hand: Handedness) -> String {
    format!("player-{hand}-controller")
}

fn build_semantic(
    registry: &mut PathRegistry,
    profile: &DeviceProfile,
    hand: Handedness,
) -> SemanticPathTable {
    SemanticPathTable::new(
        registry,
        &profile.name,
        hand,
        &profile.button_names(),
        &profile.axis_names(),
    )
}

impl TrackedController {
    /// Bind a device to the frame's path space.
    ///
    /// When the hand identity is already known the scene selector is resolved
    /// immediately; otherwise the binding starts unresolved and latches on
    /// the first tick whose snapshot reports a hand. Until then semantic
    /// paths use the right-hand table, matching the runtime's convention for
    /// handless controllers.
    pub fn new(
        config: ControllerConfig,
        device_index: u32,
        hand: Option<Handedness>,
        frame: &mut InputFrame,
        scene: &SceneGraph,
    ) -> Result<Self, DeviceError> {
        let registry = frame.paths_mut();
        let raw = RawPathTable::new(
            registry,
            device_index,
            config.profile.raw_button_count(),
            config.profile.raw_axis_count(),
        );
        let semantic = build_semantic(registry, &config.profile, hand.unwrap_or(Handedness::Right));
        let hand = match hand {
            Some(hand) => {
                let node = resolve_node(scene, hand)?;
                HandBinding::Resolved { hand, node }
            }
            None => {
                warn!(device_index, "controller detected without hand specified");
                HandBinding::Unresolved
            }
        };
        Ok(Self {
            config,
            device_index,
            raw,
            semantic,
            hand,
        })
    }

    pub fn device_index(&self) -> u32 {
        self.device_index
    }

    /// The bound hand, once resolved.
    pub fn hand(&self) -> Option<Handedness> {
        match self.hand {
            HandBinding::Resolved { hand, .. } => Some(hand),
            HandBinding::Unresolved => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self.hand, HandBinding::Resolved { .. })
    }

    /// Semantic paths this binding publishes under. Downstream input handling
    /// reads frame state through these keys.
    pub fn semantic(&self) -> &SemanticPathTable {
        &self.semantic
    }

    pub fn raw(&self) -> &RawPathTable {
        &self.raw
    }

    /// Run one tick of the pipeline: raw mirror, semantic remap, ray pose,
    /// grip matrix, in that order.
    pub fn tick(
        &mut self,
        snapshot: &DeviceSnapshot,
        ctx: &TickContext,
        scene: &SceneGraph,
        frame: &mut InputFrame,
    ) -> Result<(), DeviceError> {
        if !snapshot.connected {
            debug!(device_index = self.device_index, "device not connected, tick skipped");
            return Ok(());
        }

        self.mirror_raw(snapshot, frame);
        self.remap_semantic(frame);

        if !self.resolve_hand(snapshot, scene, frame)? {
            return Ok(());
        }

        self.write_ray_pose(scene, frame)?;
        self.write_grip_matrix(snapshot, ctx, frame);
        Ok(())
    }

    /// Stage 1: copy every raw button and axis into device-indexed paths.
    fn mirror_raw(&mut self, snapshot: &DeviceSnapshot, frame: &mut InputFrame) {
        self.raw.ensure_buttons(frame.paths_mut(), snapshot.buttons.len());
        self.raw.ensure_axes(frame.paths_mut(), snapshot.axes.len());

        for (state, paths) in snapshot.buttons.iter().zip(self.raw.buttons()) {
            frame.set(paths.pressed, Value::Bool(state.pressed));
            frame.set(paths.touched, Value::Bool(state.touched));
            frame.set(paths.value, Value::Float(state.value));
        }
        for (value, key) in snapshot.axes.iter().zip(self.raw.axes()) {
            frame.set(*key, Value::Float(*value));
        }
    }

    /// Stage 2: copy the mirrored values at profiled indices into semantic
    /// paths. Reads the frame, not the snapshot, so any post-processing of
    /// the raw paths would be picked up.
    fn remap_semantic(&self, frame: &mut InputFrame) {
        for binding in &self.config.profile.buttons {
            let Some(out) = self.semantic.button(&binding.name) else {
                continue;
            };
            let raw = self.raw.button(binding.index);
            let pressed = raw
                .and_then(|r| frame.get(r.pressed))
                .is_some_and(Value::as_bool);
            let touched = raw
                .and_then(|r| frame.get(r.touched))
                .is_some_and(Value::as_bool);
            let value = raw
                .and_then(|r| frame.get(r.value))
                .copied()
                .unwrap_or(Value::Float(0.0));
            frame.set(out.pressed, Value::Bool(pressed));
            frame.set(out.touched, Value::Bool(touched));
            frame.set(out.value, value);
        }
        for binding in &self.config.profile.axes {
            let Some(out) = self.semantic.axis(&binding.name) else {
                continue;
            };
            let value = self
                .raw
                .axis(binding.index)
                .and_then(|k| frame.get(k))
                .copied()
                .unwrap_or(Value::Float(0.0));
            frame.set(out, value);
        }
    }

    /// Latch the hand identity the first tick the snapshot reports one.
    ///
    /// Returns whether pose synthesis can run. Resolving a second time is a
    /// no-op, even if a later snapshot claims the other hand.
    fn resolve_hand(
        &mut self,
        snapshot: &DeviceSnapshot,
        scene: &SceneGraph,
        frame: &mut InputFrame,
    ) -> Result<bool, DeviceError> {
        if self.is_resolved() {
            return Ok(true);
        }
        let Some(hand) = snapshot.hand else {
            debug!(
                device_index = self.device_index,
                "hand identity still unknown, pose synthesis deferred"
            );
            return Ok(false);
        };
        let node = resolve_node(scene, hand)?;
        warn!(device_index = self.device_index, %hand, "controller hand eventually specified");
        self.semantic = build_semantic(frame.paths_mut(), &self.config.profile, hand);
        self.hand = HandBinding::Resolved { hand, node };
        Ok(true)
    }

    /// Stage 3a: ray pose from the hand's scene node.
    ///
    /// The pitch correction rotates the canonical forward vector in local
    /// space before the node's world orientation is applied. Nothing is
    /// written if the node lookup fails.
    fn write_ray_pose(
        &self,
        scene: &SceneGraph,
        frame: &mut InputFrame,
    ) -> Result<(), DeviceError> {
        let HandBinding::Resolved { hand, node } = self.hand else {
            return Ok(());
        };
        let world = scene
            .world_transform(node)
            .map_err(|source| DeviceError::SceneNode { hand, source })?;
        let (_, rotation, translation) = world.to_scale_rotation_translation();
        let direction = rotation * (self.config.ray_rotation * Vec3::NEG_Z);
        frame.set(
            self.semantic.pose(),
            Value::Pose(Pose::from_origin_and_direction(translation, direction)),
        );
        Ok(())
    }

    /// Stage 3b: grip transform from the raw tracking pose.
    ///
    /// `sitting_to_standing * tracking * hand_offset`: the standing
    /// correction multiplies on the left, the grip offset on the right. A
    /// snapshot without both position and orientation skips the write and
    /// leaves any prior matrix untouched.
    fn write_grip_matrix(
        &self,
        snapshot: &DeviceSnapshot,
        ctx: &TickContext,
        frame: &mut InputFrame,
    ) {
        let (Some(position), Some(orientation)) =
            (snapshot.pose.position, snapshot.pose.orientation)
        else {
            debug!(
                device_index = self.device_index,
                "no tracking pose this tick, grip matrix not updated"
            );
            return;
        };
        let tracking = Mat4::from_rotation_translation(orientation, position);
        let grip = ctx.sitting_to_standing * tracking * self.config.hand_offset;
        frame.set(self.semantic.matrix(), Value::Matrix(grip));
    }
}

fn resolve_node(scene: &SceneGraph, hand: Handedness) -> Result<NodeId, DeviceError> {
    scene
        .resolve(&selector_for(hand))
        .map_err(|source| DeviceError::SceneNode { hand, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{ButtonState, DevicePose};
    use handspace_common::Transform;
    use handspace_frame::PathKey;

    const EPS: f32 = 1e-6;

    fn scene_with_controllers() -> SceneGraph {
        let mut scene = SceneGraph::new();
        scene.insert(
            "player-left-controller",
            Transform::from_rotation_translation(Quat::IDENTITY, Vec3::new(1.0, 2.0, 3.0)),
        );
        scene.insert(
            "player-right-controller",
            Transform::from_rotation_translation(Quat::IDENTITY, Vec3::new(-1.0, 2.0, 3.0)),
        );
        scene
    }

    fn snapshot(hand: Option<Handedness>) -> DeviceSnapshot {
        DeviceSnapshot {
            connected: true,
            index: 0,
            hand,
            buttons: vec![
                ButtonState {
                    pressed: true,
                    touched: true,
                    value: 1.0,
                },
                ButtonState {
                    pressed: false,
                    touched: true,
                    value: 0.4,
                },
                ButtonState::default(),
                ButtonState {
                    pressed: true,
                    touched: false,
                    value: 0.9,
                },
            ],
            axes: vec![0.25, -0.5],
            pose: DevicePose {
                position: Some(Vec3::new(0.1, 0.2, 0.3)),
                orientation: Some(Quat::from_rotation_y(0.5)),
            },
        }
    }

    fn bound_controller(
        hand: Option<Handedness>,
        frame: &mut InputFrame,
        scene: &SceneGraph,
    ) -> TrackedController {
        TrackedController::new(ControllerConfig::default(), 0, hand, frame, scene).unwrap()
    }

    #[test]
    fn raw_mirror_matches_snapshot() {
        let scene = scene_with_controllers();
        let mut frame = InputFrame::new();
        let mut controller = bound_controller(Some(Handedness::Left), &mut frame, &scene);

        let snap = snapshot(Some(Handedness::Left));
        controller
            .tick(&snap, &TickContext::seated_default(), &scene, &mut frame)
            .unwrap();

        for (i, state) in snap.buttons.iter().enumerate() {
            let paths = controller.raw().button(i).unwrap();
            assert_eq!(frame.get(paths.pressed), Some(&Value::Bool(state.pressed)));
            assert_eq!(frame.get(paths.touched), Some(&Value::Bool(state.touched)));
            assert_eq!(frame.get(paths.value), Some(&Value::Float(state.value)));
        }
        for (i, value) in snap.axes.iter().enumerate() {
            let key = controller.raw().axis(i).unwrap();
            assert_eq!(frame.get(key), Some(&Value::Float(*value)));
        }
    }

    #[test]
    fn semantic_remap_reads_same_tick_values() {
        let scene = scene_with_controllers();
        let mut frame = InputFrame::new();
        let mut controller = bound_controller(Some(Handedness::Left), &mut frame, &scene);

        let snap = snapshot(Some(Handedness::Left));
        controller
            .tick(&snap, &TickContext::seated_default(), &scene, &mut frame)
            .unwrap();

        // trigger is raw button 1, joyY is raw axis 1
        let trigger = controller.semantic().button("trigger").unwrap();
        assert_eq!(frame.get(trigger.pressed), Some(&Value::Bool(false)));
        assert_eq!(frame.get(trigger.touched), Some(&Value::Bool(true)));
        assert_eq!(frame.get(trigger.value), Some(&Value::Float(0.4)));

        let joy_y = controller.semantic().axis("joyY").unwrap();
        assert_eq!(frame.get(joy_y), Some(&Value::Float(-0.5)));
    }

    #[test]
    fn semantic_paths_follow_resolved_hand() {
        let scene = scene_with_controllers();
        let mut frame = InputFrame::new();
        let mut controller = bound_controller(None, &mut frame, &scene);

        let snap = snapshot(Some(Handedness::Left));
        controller
            .tick(&snap, &TickContext::seated_default(), &scene, &mut frame)
            .unwrap();

        let pose_key = controller.semantic().pose();
        assert_eq!(frame.paths().name(pose_key), Some("/device/vive/left/pose"));
    }

    #[test]
    fn disconnected_device_writes_nothing() {
        let scene = scene_with_controllers();
        let mut frame = InputFrame::new();
        let mut controller = bound_controller(Some(Handedness::Left), &mut frame, &scene);

        let mut snap = snapshot(Some(Handedness::Left));
        snap.connected = false;
        controller
            .tick(&snap, &TickContext::seated_default(), &scene, &mut frame)
            .unwrap();

        assert!(frame.is_empty());
    }

    #[test]
    fn identical_snapshots_produce_identical_writes() {
        let scene = scene_with_controllers();
        let mut frame = InputFrame::new();
        let mut controller = bound_controller(Some(Handedness::Left), &mut frame, &scene);

        let snap = snapshot(Some(Handedness::Left));
        let ctx = TickContext::seated_default();

        controller.tick(&snap, &ctx, &scene, &mut frame).unwrap();
        let first: Vec<(PathKey, Value)> = frame.entries().map(|(k, v)| (k, *v)).collect();

        frame.begin_tick();
        controller.tick(&snap, &ctx, &scene, &mut frame).unwrap();
        let second: Vec<(PathKey, Value)> = frame.entries().map(|(k, v)| (k, *v)).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn grip_matrix_multiplication_order() {
        let scene = scene_with_controllers();
        let mut frame = InputFrame::new();
        let config = ControllerConfig::default();
        let hand_offset = config.hand_offset;
        let mut controller =
            TrackedController::new(config, 0, Some(Handedness::Left), &mut frame, &scene).unwrap();

        // identity rotation at the tracking origin
        let mut snap = snapshot(Some(Handedness::Left));
        snap.pose = DevicePose {
            position: Some(Vec3::ZERO),
            orientation: Some(Quat::IDENTITY),
        };
        let ctx = TickContext::seated_default();
        controller.tick(&snap, &ctx, &scene, &mut frame).unwrap();

        let matrix = frame
            .get(controller.semantic().matrix())
            .and_then(Value::as_matrix)
            .unwrap();
        let expected = Mat4::from_translation(Vec3::new(0.0, 1.6, 0.0)) * hand_offset;
        assert!(matrix.abs_diff_eq(expected, EPS));
    }

    #[test]
    fn ray_pose_applies_pitch_before_world_rotation() {
        let mut scene = SceneGraph::new();
        scene.insert(
            "player-left-controller",
            Transform::from_rotation_translation(Quat::IDENTITY, Vec3::new(1.0, 2.0, 3.0)),
        );
        let mut frame = InputFrame::new();
        let config = ControllerConfig {
            ray_rotation: Quat::from_rotation_x(-15f32.to_radians()),
            ..ControllerConfig::default()
        };
        let mut controller =
            TrackedController::new(config, 0, Some(Handedness::Left), &mut frame, &scene).unwrap();

        let snap = snapshot(Some(Handedness::Left));
        controller
            .tick(&snap, &TickContext::seated_default(), &scene, &mut frame)
            .unwrap();

        let pose = frame
            .get(controller.semantic().pose())
            .and_then(Value::as_pose)
            .unwrap();
        assert!(pose.origin.abs_diff_eq(Vec3::new(1.0, 2.0, 3.0), EPS));

        let expected = Quat::from_rotation_x(-15f32.to_radians()) * Vec3::NEG_Z;
        assert!(pose.direction.abs_diff_eq(expected, EPS));
        assert!((pose.direction.length() - 1.0).abs() < EPS);
        // tilted down from straight-back
        assert!(pose.direction.y < 0.0);
    }

    #[test]
    fn world_rotation_composes_after_pitch() {
        let mut scene = SceneGraph::new();
        let node_rotation = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
        scene.insert(
            "player-left-controller",
            Transform::from_rotation_translation(node_rotation, Vec3::ZERO),
        );
        let mut frame = InputFrame::new();
        let config = ControllerConfig::default();
        let pitch = config.ray_rotation;
        let mut controller =
            TrackedController::new(config, 0, Some(Handedness::Left), &mut frame, &scene).unwrap();

        let snap = snapshot(Some(Handedness::Left));
        controller
            .tick(&snap, &TickContext::seated_default(), &scene, &mut frame)
            .unwrap();

        let pose = frame
            .get(controller.semantic().pose())
            .and_then(Value::as_pose)
            .unwrap();
        // R_world * R_pitch * forward, not R_pitch * R_world * forward
        let expected = node_rotation * (pitch * Vec3::NEG_Z);
        assert!(pose.direction.abs_diff_eq(expected, EPS));
    }

    #[test]
    fn unresolved_hand_defers_pose_synthesis() {
        let scene = scene_with_controllers();
        let mut frame = InputFrame::new();
        let mut controller = bound_controller(None, &mut frame, &scene);
        let ctx = TickContext::seated_default();

        for _ in 0..3 {
            frame.begin_tick();
            controller
                .tick(&snapshot(None), &ctx, &scene, &mut frame)
                .unwrap();
            assert!(frame.get(controller.semantic().pose()).is_none());
            assert!(frame.get(controller.semantic().matrix()).is_none());
            // raw and semantic button state still flows
            assert!(!frame.is_empty());
        }
        assert!(!controller.is_resolved());

        // the first snapshot carrying a hand latches the binding
        frame.begin_tick();
        controller
            .tick(&snapshot(Some(Handedness::Left)), &ctx, &scene, &mut frame)
            .unwrap();
        assert_eq!(controller.hand(), Some(Handedness::Left));
        assert!(frame.get(controller.semantic().pose()).is_some());
        assert!(frame.get(controller.semantic().matrix()).is_some());

        // and every subsequent tick keeps publishing, hand field or not
        frame.begin_tick();
        controller
            .tick(&snapshot(None), &ctx, &scene, &mut frame)
            .unwrap();
        assert!(frame.get(controller.semantic().pose()).is_some());
    }

    #[test]
    fn hand_resolution_is_one_way() {
        let scene = scene_with_controllers();
        let mut frame = InputFrame::new();
        let mut controller = bound_controller(None, &mut frame, &scene);
        let ctx = TickContext::seated_default();

        controller
            .tick(&snapshot(Some(Handedness::Left)), &ctx, &scene, &mut frame)
            .unwrap();
        let pose_key = controller.semantic().pose();

        // a later snapshot claiming the other hand does not rebind
        frame.begin_tick();
        controller
            .tick(&snapshot(Some(Handedness::Right)), &ctx, &scene, &mut frame)
            .unwrap();
        assert_eq!(controller.hand(), Some(Handedness::Left));
        assert_eq!(controller.semantic().pose(), pose_key);
        assert_eq!(frame.paths().name(pose_key), Some("/device/vive/left/pose"));
    }

    #[test]
    fn missing_scene_node_is_hard_error_without_partial_writes() {
        let mut scene = scene_with_controllers();
        let mut frame = InputFrame::new();
        let mut controller = bound_controller(Some(Handedness::Left), &mut frame, &scene);
        let ctx = TickContext::seated_default();

        let snap = snapshot(Some(Handedness::Left));
        controller.tick(&snap, &ctx, &scene, &mut frame).unwrap();
        let prior_pose = frame.get(controller.semantic().pose()).copied().unwrap();
        let prior_matrix = frame.get(controller.semantic().matrix()).copied().unwrap();

        let node = scene.resolve("player-left-controller").unwrap();
        scene.remove(node);

        let err = controller
            .tick(&snap, &ctx, &scene, &mut frame)
            .unwrap_err();
        assert!(matches!(err, DeviceError::SceneNode { hand: Handedness::Left, .. }));

        // prior values retained: not cleared, not partially overwritten
        assert_eq!(frame.get(controller.semantic().pose()), Some(&prior_pose));
        assert_eq!(frame.get(controller.semantic().matrix()), Some(&prior_matrix));
    }

    #[test]
    fn construction_fails_when_selector_missing() {
        let scene = SceneGraph::new();
        let mut frame = InputFrame::new();
        let result = TrackedController::new(
            ControllerConfig::default(),
            0,
            Some(Handedness::Left),
            &mut frame,
            &scene,
        );
        assert!(matches!(result, Err(DeviceError::SceneNode { .. })));
    }

    #[test]
    fn missing_tracking_pose_skips_grip_only() {
        let scene = scene_with_controllers();
        let mut frame = InputFrame::new();
        let mut controller = bound_controller(Some(Handedness::Left), &mut frame, &scene);
        let ctx = TickContext::seated_default();

        let mut snap = snapshot(Some(Handedness::Left));
        snap.pose = DevicePose::default();
        controller.tick(&snap, &ctx, &scene, &mut frame).unwrap();
        assert!(frame.get(controller.semantic().pose()).is_some());
        assert!(frame.get(controller.semantic().matrix()).is_none());

        // position alone is not enough
        snap.pose.position = Some(Vec3::ZERO);
        frame.begin_tick();
        controller.tick(&snap, &ctx, &scene, &mut frame).unwrap();
        assert!(frame.get(controller.semantic().matrix()).is_none());

        // both fields present resumes the write
        snap.pose.orientation = Some(Quat::IDENTITY);
        frame.begin_tick();
        controller.tick(&snap, &ctx, &scene, &mut frame).unwrap();
        assert!(frame.get(controller.semantic().matrix()).is_some());
    }

    #[test]
    fn mirror_grows_paths_for_extra_controls() {
        let scene = scene_with_controllers();
        let mut frame = InputFrame::new();
        let mut controller = bound_controller(Some(Handedness::Left), &mut frame, &scene);

        let mut snap = snapshot(Some(Handedness::Left));
        snap.buttons.push(ButtonState {
            pressed: true,
            touched: true,
            value: 0.5,
        });
        snap.axes.push(0.75);
        controller
            .tick(&snap, &TickContext::seated_default(), &scene, &mut frame)
            .unwrap();

        let extra = controller.raw().button(4).unwrap();
        assert_eq!(frame.get(extra.value), Some(&Value::Float(0.5)));
        assert_eq!(
            frame.get(controller.raw().axis(2).unwrap()),
            Some(&Value::Float(0.75))
        );
    }
}
