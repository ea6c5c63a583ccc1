// Entity: one actor, player or enemy

use glam::Vec2;
use log::{debug, info, trace};

use super::assets::{EntityAssets, ImageSet, TextureHandle};
use super::state::EntityState;
use super::stats::EntityStats;

/// A fighter (or any other actor) in the scene.
///
/// The state machine is a flat overwrite: no transition is refused because of
/// the state the entity is currently in. Callers that want stricter rules put
/// a [`TransitionPolicy`](super::command::TransitionPolicy) in front of it.
///
/// Attack and defend magnitudes are staged by the action methods and consumed
/// later by [`collide`](Self::collide) / [`get_hurt`](Self::get_hurt). Staged
/// values are never cleared after use, so a value staged by one action keeps
/// applying until another action overwrites it.
#[derive(Debug)]
pub struct Entity {
    name: String,
    state: EntityState,

    is_mobile: bool,
    is_active: bool,
    is_attackable: bool,
    is_left: bool,

    /// Accumulated since creation, never reset by the core
    displacement: Vec2,

    stats: EntityStats,
    current_attack_value: f32,
    current_defend_value: f32,

    assets: EntityAssets,
}

impl Entity {
    /// Create an entity with the default attribute set
    pub fn new(name: &str) -> Self {
        Self::with_stats(name, EntityStats::default())
    }

    /// Create an entity with a custom attribute set
    pub fn with_stats(name: &str, stats: EntityStats) -> Self {
        Self {
            name: name.to_string(),
            state: EntityState::StandingToLeft,
            is_mobile: false,
            is_active: true,
            is_attackable: false,
            is_left: false,
            displacement: Vec2::ZERO,
            stats,
            current_attack_value: 0.0,
            current_defend_value: 0.0,
            assets: EntityAssets::new(),
        }
    }

    // Identity and flags

    /// Get the entity name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the entity name
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Get the current state
    pub fn state(&self) -> EntityState {
        self.state
    }

    /// Check if move actions have any effect
    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }

    /// Allow or block move actions
    pub fn set_mobile(&mut self, mobile: bool) {
        self.is_mobile = mobile;
    }

    /// Check if the entity is still in the fight
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Set the active flag directly
    pub fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }

    /// Whether this entity currently presents a hittable hitbox
    pub fn is_attackable(&self) -> bool {
        self.is_attackable
    }

    /// Show or hide the hitbox to attackers
    pub fn set_attackable(&mut self, attackable: bool) {
        self.is_attackable = attackable;
    }

    /// Facing. Only [`set_state`](Self::set_state) changes it.
    pub fn is_left(&self) -> bool {
        self.is_left
    }

    // Position

    /// Get the displacement accumulated since creation
    pub fn displacement(&self) -> Vec2 {
        self.displacement
    }

    /// Get the horizontal displacement
    pub fn delta_x(&self) -> f32 {
        self.displacement.x
    }

    /// Get the vertical displacement (positive is down)
    pub fn delta_y(&self) -> f32 {
        self.displacement.y
    }

    // Attributes
    //
    // Raw passthrough: no clamping or validation. Life is only clamped inside
    // damage resolution, so `set_life_value(-3.0)` is stored as is.

    /// Get the full attribute set
    pub fn stats(&self) -> &EntityStats {
        &self.stats
    }

    /// Get remaining life
    pub fn life_value(&self) -> f32 {
        self.stats.life_value
    }

    /// Set life
    pub fn set_life_value(&mut self, value: f32) {
        self.stats.life_value = value;
    }

    /// Get the horizontal step
    pub fn move_speed(&self) -> f32 {
        self.stats.move_speed
    }

    /// Set the horizontal step
    pub fn set_move_speed(&mut self, value: f32) {
        self.stats.move_speed = value;
    }

    /// Get the run speed
    pub fn run_speed(&self) -> f32 {
        self.stats.run_speed
    }

    /// Set the run speed
    pub fn set_run_speed(&mut self, value: f32) {
        self.stats.run_speed = value;
    }

    /// Get the vertical step
    pub fn jump_speed(&self) -> f32 {
        self.stats.jump_speed
    }

    /// Set the vertical step
    pub fn set_jump_speed(&mut self, value: f32) {
        self.stats.jump_speed = value;
    }

    /// Get the jump height
    pub fn jump_height(&self) -> f32 {
        self.stats.jump_height
    }

    /// Set the jump height
    pub fn set_jump_height(&mut self, value: f32) {
        self.stats.jump_height = value;
    }

    /// Get the near attack damage
    pub fn attack_near_value(&self) -> f32 {
        self.stats.attack_near_value
    }

    /// Set the near attack damage
    pub fn set_attack_near_value(&mut self, value: f32) {
        self.stats.attack_near_value = value;
    }

    /// Get the far attack damage
    pub fn attack_far_value(&self) -> f32 {
        self.stats.attack_far_value
    }

    /// Set the far attack damage
    pub fn set_attack_far_value(&mut self, value: f32) {
        self.stats.attack_far_value = value;
    }

    /// Get the kill move damage
    pub fn attack_kill_value(&self) -> f32 {
        self.stats.attack_kill_value
    }

    /// Set the kill move damage
    pub fn set_attack_kill_value(&mut self, value: f32) {
        self.stats.attack_kill_value = value;
    }

    /// Get the mitigation staged by defending
    pub fn defend_value(&self) -> f32 {
        self.stats.defend_value
    }

    /// Set the mitigation staged by defending
    pub fn set_defend_value(&mut self, value: f32) {
        self.stats.defend_value = value;
    }

    /// Damage the next collision will deal with this entity as attacker
    pub fn current_attack_value(&self) -> f32 {
        self.current_attack_value
    }

    /// Mitigation subtracted from incoming damage
    pub fn current_defend_value(&self) -> f32 {
        self.current_defend_value
    }

    /// Overwrite the staged attack without changing state
    pub fn set_current_attack_value(&mut self, value: f32) {
        self.current_attack_value = value;
    }

    /// Overwrite the staged defense without changing state
    pub fn set_current_defend_value(&mut self, value: f32) {
        self.current_defend_value = value;
    }

    // Assets

    /// Get the image, text and animation registries
    pub fn assets(&self) -> &EntityAssets {
        &self.assets
    }

    /// Register an image; ignored when either side is missing
    pub fn add_image(&mut self, id: Option<&str>, image: Option<TextureHandle>) {
        self.assets.add_image(id, image);
    }

    /// Get a registered image
    pub fn image(&self, id: &str) -> Option<TextureHandle> {
        self.assets.image(id)
    }

    /// Register a text; ignored when either side is missing
    pub fn add_text(&mut self, id: Option<&str>, text: Option<&str>) {
        self.assets.add_text(id, text);
    }

    /// Get a registered text
    pub fn text(&self, id: &str) -> Option<&str> {
        self.assets.text(id)
    }

    /// Register the animation for `state`, replacing any earlier one
    pub fn add_image_set(&mut self, state: EntityState, set: Box<dyn ImageSet>) {
        self.assets.add_image_set(state, set);
    }

    /// Image registered for the current state at the current facing
    pub fn current_image(&self) -> Option<TextureHandle> {
        self.assets.visual(self.state, self.is_left)
    }

    /// Step the animation of the current state by one frame
    pub fn advance_animation(&mut self) {
        self.assets.advance(self.state);
    }

    // Transitions

    /// Enter `state`. Horizontal movement states also set the facing; every
    /// other state keeps it.
    pub fn set_state(&mut self, state: EntityState) {
        trace!("{}: {:?} -> {:?}", self.name, self.state, state);
        self.state = state;
        if let Some(is_left) = state.faces_left() {
            self.is_left = is_left;
        }
    }

    /// Enter `Wounded` without touching the facing
    fn wound(&mut self) {
        trace!("{}: {:?} -> Wounded", self.name, self.state);
        self.state = EntityState::Wounded;
    }

    /// Back to idle on the current facing. Not gated by any flag.
    pub fn reset_to_stand(&mut self) {
        self.state = EntityState::standing(self.is_left);
    }

    fn can_move(&self) -> bool {
        self.is_active && self.is_mobile
    }

    pub fn move_right(&mut self) {
        if self.can_move() {
            self.displacement.x += self.stats.move_speed;
            self.set_state(EntityState::MovingToRight);
        }
    }

    pub fn move_left(&mut self) {
        if self.can_move() {
            self.displacement.x -= self.stats.move_speed;
            self.set_state(EntityState::MovingToLeft);
        }
    }

    pub fn move_up(&mut self) {
        if self.can_move() {
            self.displacement.y -= self.stats.jump_speed;
            self.set_state(EntityState::Jumping);
        }
    }

    /// Same `Jumping` state and same speed as [`move_up`](Self::move_up)
    pub fn move_down(&mut self) {
        if self.can_move() {
            self.displacement.y += self.stats.jump_speed;
            self.set_state(EntityState::Jumping);
        }
    }

    /// Reserved action hook, does nothing
    pub fn jump(&mut self) {}

    // Combat actions are not gated by the active or mobile flags

    pub fn attack_near(&mut self) {
        self.current_attack_value = self.stats.attack_near_value;
        self.set_state(EntityState::AttackingNear);
    }

    pub fn attack_far(&mut self) {
        self.current_attack_value = self.stats.attack_far_value;
        self.set_state(EntityState::AttackingFar);
    }

    pub fn attack_kill(&mut self) {
        self.current_attack_value = self.stats.attack_kill_value;
        self.set_state(EntityState::AttackingKill);
    }

    pub fn defend(&mut self) {
        self.current_defend_value = self.stats.defend_value;
        self.set_state(EntityState::Defending);
    }

    // Damage

    /// Apply `attack_value` minus the staged defense. Returns whether any
    /// damage got through.
    ///
    /// Life never goes below zero here, and reaching zero deactivates the
    /// entity for good.
    pub fn get_hurt(&mut self, attack_value: f32) -> bool {
        let hurt = attack_value - self.current_defend_value;
        if hurt <= 0.0 {
            debug!(
                "{} absorbed {} (defense {})",
                self.name, attack_value, self.current_defend_value
            );
            return false;
        }

        if hurt > self.stats.life_value {
            self.stats.life_value = 0.0;
        } else {
            self.stats.life_value -= hurt;
        }
        debug!("{} took {}, life now {}", self.name, hurt, self.stats.life_value);

        if self.stats.life_value <= 0.0 && self.is_active {
            self.is_active = false;
            info!("{} was defeated", self.name);
        }

        true
    }

    /// Resolve an incoming hit. A hit that gets through leaves the entity
    /// `Wounded` on its current facing; a blocked one changes nothing.
    pub fn collide(&mut self, attack_value: f32) -> bool {
        let hurt = self.get_hurt(attack_value);
        if hurt {
            self.wound();
        }
        hurt
    }
}
