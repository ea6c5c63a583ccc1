// Entity state set

/// Behavioral/animation mode of an entity. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityState {
    /// Idle, facing left
    StandingToLeft,
    /// Idle, facing right
    StandingToRight,
    /// Walking left
    MovingToLeft,
    /// Walking right
    MovingToRight,
    /// Running left (no action wires this yet)
    RunningToLeft,
    /// Running right (no action wires this yet)
    RunningToRight,
    /// Vertical movement, up or down
    Jumping,
    /// Holding guard
    Defending,
    /// Close-range attack
    AttackingNear,
    /// Long-range attack
    AttackingFar,
    /// Finishing move
    AttackingKill,
    /// Just took damage
    Wounded,
}

impl Default for EntityState {
    fn default() -> Self {
        Self::StandingToLeft
    }
}

impl EntityState {
    /// All states, in declaration order
    pub const ALL: [EntityState; 12] = [
        Self::StandingToLeft,
        Self::StandingToRight,
        Self::MovingToLeft,
        Self::MovingToRight,
        Self::RunningToLeft,
        Self::RunningToRight,
        Self::Jumping,
        Self::Defending,
        Self::AttackingNear,
        Self::AttackingFar,
        Self::AttackingKill,
        Self::Wounded,
    ];

    /// Idle stand for the given facing
    pub fn standing(is_left: bool) -> Self {
        if is_left {
            Self::StandingToLeft
        } else {
            Self::StandingToRight
        }
    }

    /// Check if this is one of the two idle states
    pub fn is_standing(&self) -> bool {
        matches!(self, Self::StandingToLeft | Self::StandingToRight)
    }

    /// Check if this is one of the three attack states
    pub fn is_attacking(&self) -> bool {
        matches!(
            self,
            Self::AttackingNear | Self::AttackingFar | Self::AttackingKill
        )
    }

    /// Facing implied by entering this state.
    ///
    /// `Some(true)` for left-bound movement, `Some(false)` for right-bound
    /// movement, `None` when the state keeps whatever facing the entity had.
    pub fn faces_left(&self) -> Option<bool> {
        match self {
            Self::MovingToLeft | Self::RunningToLeft => Some(true),
            Self::MovingToRight | Self::RunningToRight => Some(false),
            _ => None,
        }
    }

    /// Get the animation name for this state
    pub fn animation_name(&self) -> &'static str {
        match self {
            Self::StandingToLeft | Self::StandingToRight => "stand",
            Self::MovingToLeft | Self::MovingToRight => "move",
            Self::RunningToLeft | Self::RunningToRight => "run",
            Self::Jumping => "jump",
            Self::Defending => "defend",
            Self::AttackingNear => "attack_near",
            Self::AttackingFar => "attack_far",
            Self::AttackingKill => "attack_kill",
            Self::Wounded => "wounded",
        }
    }
}
