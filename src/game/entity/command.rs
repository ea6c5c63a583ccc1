// Input dispatch in front of the entity state machine
//
// The entity itself accepts every action at any time. Deciding *when* input
// is accepted is the caller's policy; this module gives that policy a seam.

use log::trace;

use super::entity::Entity;
use super::state::EntityState;

/// Every action an input layer can ask an entity to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // Movement
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Jump,

    // Combat
    AttackNear,
    AttackFar,
    AttackKill,
    Defend,
}

impl Command {
    /// All commands, in declaration order
    pub const ALL: [Command; 9] = [
        Self::MoveLeft,
        Self::MoveRight,
        Self::MoveUp,
        Self::MoveDown,
        Self::Jump,
        Self::AttackNear,
        Self::AttackFar,
        Self::AttackKill,
        Self::Defend,
    ];

    pub fn is_movement(&self) -> bool {
        matches!(
            self,
            Self::MoveLeft | Self::MoveRight | Self::MoveUp | Self::MoveDown | Self::Jump
        )
    }
}

/// Decides whether an entity in `state` may take `command`
pub trait TransitionPolicy {
    fn allows(&self, state: EntityState, command: Command) -> bool;
}

/// Input is only taken while idle
#[derive(Debug, Clone, Copy, Default)]
pub struct StandOnly;

impl TransitionPolicy for StandOnly {
    fn allows(&self, state: EntityState, _command: Command) -> bool {
        state.is_standing()
    }
}

/// Every command is taken in every state
#[derive(Debug, Clone, Copy, Default)]
pub struct Unrestricted;

impl TransitionPolicy for Unrestricted {
    fn allows(&self, _state: EntityState, _command: Command) -> bool {
        true
    }
}

impl Entity {
    /// Run the action behind `command` with no policy check
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::MoveUp => self.move_up(),
            Command::MoveDown => self.move_down(),
            Command::Jump => self.jump(),
            Command::AttackNear => self.attack_near(),
            Command::AttackFar => self.attack_far(),
            Command::AttackKill => self.attack_kill(),
            Command::Defend => self.defend(),
        }
    }

    /// Run `command` if `policy` accepts it in the current state.
    ///
    /// Returns whether the command was handed to the entity. An accepted
    /// movement command can still be a no-op on an immobile or inactive entity.
    pub fn dispatch(&mut self, command: Command, policy: &impl TransitionPolicy) -> bool {
        if !policy.allows(self.state(), command) {
            trace!("{}: {:?} refused in {:?}", self.name(), command, self.state());
            return false;
        }
        self.apply(command);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_commands_unique() {
        let set: std::collections::HashSet<_> = Command::ALL.iter().collect();
        assert_eq!(set.len(), Command::ALL.len());
    }

    #[test]
    fn test_movement_commands() {
        assert!(Command::MoveLeft.is_movement());
        assert!(Command::Jump.is_movement());
        assert!(!Command::Defend.is_movement());
        assert!(!Command::AttackKill.is_movement());
    }

    #[test]
    fn test_stand_only_accepts_idle() {
        let policy = StandOnly;
        for state in EntityState::ALL {
            assert_eq!(
                policy.allows(state, Command::AttackNear),
                state.is_standing(),
                "unexpected policy result for {state:?}"
            );
        }
    }

    #[test]
    fn test_stand_only_blocks_attack_cancel() {
        let mut hero = Entity::new("Hero");

        assert!(hero.dispatch(Command::AttackNear, &StandOnly));
        assert!(!hero.dispatch(Command::AttackKill, &StandOnly));
        assert_eq!(hero.state(), EntityState::AttackingNear);
        assert_eq!(hero.current_attack_value(), 10.0);

        hero.reset_to_stand();
        assert!(hero.dispatch(Command::AttackKill, &StandOnly));
        assert_eq!(hero.state(), EntityState::AttackingKill);
    }

    #[test]
    fn test_unrestricted_allows_attack_cancel() {
        let mut hero = Entity::new("Hero");
        assert!(hero.dispatch(Command::AttackNear, &Unrestricted));
        assert!(hero.dispatch(Command::AttackKill, &Unrestricted));
        assert_eq!(hero.state(), EntityState::AttackingKill);
    }

    #[test]
    fn test_accepted_move_on_immobile_entity_is_noop() {
        let mut hero = Entity::new("Hero");
        assert!(hero.dispatch(Command::MoveRight, &StandOnly));
        assert_eq!(hero.state(), EntityState::StandingToLeft);
        assert_eq!(hero.delta_x(), 0.0);
    }

    #[test]
    fn test_apply_maps_every_command() {
        let mut hero = Entity::new("Hero");
        hero.set_mobile(true);

        let expected = [
            (Command::MoveLeft, EntityState::MovingToLeft),
            (Command::MoveRight, EntityState::MovingToRight),
            (Command::MoveUp, EntityState::Jumping),
            (Command::MoveDown, EntityState::Jumping),
            (Command::AttackNear, EntityState::AttackingNear),
            (Command::AttackFar, EntityState::AttackingFar),
            (Command::AttackKill, EntityState::AttackingKill),
            (Command::Defend, EntityState::Defending),
        ];
        for (command, state) in expected {
            hero.apply(command);
            assert_eq!(hero.state(), state, "{command:?}");
        }

        hero.apply(Command::Jump);
        assert_eq!(hero.state(), EntityState::Defending);
    }

    /// Custom rules plug in through the trait
    struct NoAttackWhileWounded;

    impl TransitionPolicy for NoAttackWhileWounded {
        fn allows(&self, state: EntityState, command: Command) -> bool {
            state != EntityState::Wounded || command.is_movement()
        }
    }

    #[test]
    fn test_custom_policy() {
        let mut hero = Entity::new("Hero");
        hero.set_mobile(true);
        hero.collide(10.0);

        assert!(!hero.dispatch(Command::AttackFar, &NoAttackWhileWounded));
        assert!(hero.dispatch(Command::MoveLeft, &NoAttackWhileWounded));
        assert_eq!(hero.state(), EntityState::MovingToLeft);
    }
}
