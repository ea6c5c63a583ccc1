// Entity attributes and their defaults

/// Numeric attributes of an entity.
///
/// Every field is independently settable; nothing here is validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityStats {
    // Vitality
    /// Remaining life
    pub life_value: f32,

    // Movement
    /// Horizontal step per move action
    pub move_speed: f32,
    /// Reserved for a run action, not read by any transition
    pub run_speed: f32,
    /// Vertical step per move action, both up and down
    pub jump_speed: f32,
    /// Reserved, not read by any transition
    pub jump_height: f32,

    // Combat
    /// Damage staged by a near attack
    pub attack_near_value: f32,
    /// Damage staged by a far attack
    pub attack_far_value: f32,
    /// Damage staged by a kill move
    pub attack_kill_value: f32,
    /// Mitigation staged by defending
    pub defend_value: f32,
}

/// Attributes every entity starts with
pub const DEFAULT_STATS: EntityStats = EntityStats {
    life_value: 100.0,

    move_speed: 5.0,
    run_speed: 20.0,
    jump_speed: 5.0,
    jump_height: 20.0,

    attack_near_value: 10.0,
    attack_far_value: 15.0,
    attack_kill_value: 25.0,
    defend_value: 5.0,
};

impl Default for EntityStats {
    fn default() -> Self {
        DEFAULT_STATS
    }
}

impl EntityStats {
    /// Get the standard attribute set
    pub fn standard() -> Self {
        DEFAULT_STATS
    }

    pub fn with_life_value(mut self, value: f32) -> Self {
        self.life_value = value;
        self
    }

    pub fn with_move_speed(mut self, value: f32) -> Self {
        self.move_speed = value;
        self
    }

    pub fn with_jump_speed(mut self, value: f32) -> Self {
        self.jump_speed = value;
        self
    }

    pub fn with_attack_values(mut self, near: f32, far: f32, kill: f32) -> Self {
        self.attack_near_value = near;
        self.attack_far_value = far;
        self.attack_kill_value = kill;
        self
    }

    pub fn with_defend_value(mut self, value: f32) -> Self {
        self.defend_value = value;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stats() {
        let stats = EntityStats::default();
        assert_eq!(stats.life_value, 100.0);
        assert_eq!(stats.move_speed, 5.0);
        assert_eq!(stats.run_speed, 20.0);
        assert_eq!(stats.jump_speed, 5.0);
        assert_eq!(stats.jump_height, 20.0);
        assert_eq!(stats.attack_near_value, 10.0);
        assert_eq!(stats.attack_far_value, 15.0);
        assert_eq!(stats.attack_kill_value, 25.0);
        assert_eq!(stats.defend_value, 5.0);
    }

    #[test]
    fn test_standard_equals_default() {
        assert_eq!(EntityStats::standard(), EntityStats::default());
    }

    #[test]
    fn test_builders_override_only_their_fields() {
        let stats = EntityStats::standard()
            .with_life_value(40.0)
            .with_attack_values(1.0, 2.0, 3.0)
            .with_defend_value(0.0);

        assert_eq!(stats.life_value, 40.0);
        assert_eq!(stats.attack_near_value, 1.0);
        assert_eq!(stats.attack_far_value, 2.0);
        assert_eq!(stats.attack_kill_value, 3.0);
        assert_eq!(stats.defend_value, 0.0);
        assert_eq!(stats.move_speed, DEFAULT_STATS.move_speed);
    }
}
