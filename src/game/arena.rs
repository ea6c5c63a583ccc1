// Arena: fighters, hitboxes and the ordered collision pass

use glam::Vec2;
use log::debug;
use parry2d::bounding_volume::{Aabb, BoundingVolume};
use parry2d::math::{Point, Vector};

use super::entity::{Entity, EntityStats};

/// Unique identifier for a fighter in an arena
pub type FighterId = u32;

/// Errors from explicit pair resolution
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ArenaError {
    #[error("Unknown fighter: {0}")]
    UnknownFighter(FighterId),

    #[error("Fighter {0} cannot collide with itself")]
    SelfCollision(FighterId),
}

/// One resolved attacker/defender pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitReport {
    pub attacker: FighterId,
    pub defender: FighterId,
    /// Staged attack value handed to the defender
    pub damage_attempted: f32,
    /// Whether any damage got through the defense
    pub hurt: bool,
    /// Whether this hit took the defender out
    pub defeated: bool,
}

/// An entity placed in the arena
#[derive(Debug)]
pub struct Fighter {
    pub id: FighterId,
    pub entity: Entity,
    /// Where the entity's displacement is measured from
    pub origin: Vec2,
    /// Half width and half height of the hitbox
    pub half_extents: Vec2,
}

impl Fighter {
    /// Current center: origin plus accumulated displacement
    pub fn position(&self) -> Vec2 {
        self.origin + self.entity.displacement()
    }

    pub fn hitbox(&self) -> Aabb {
        let center = self.position();
        Aabb::from_half_extents(
            Point::new(center.x, center.y),
            Vector::new(self.half_extents.x, self.half_extents.y),
        )
    }

    pub fn overlaps(&self, other: &Fighter) -> bool {
        self.hitbox().intersects(&other.hitbox())
    }
}

/// Owns the fighters of one bout and resolves their collisions.
///
/// Collision order is fixed: attackers in ascending id, and for each attacker
/// defenders in ascending id. Damage lands immediately, so a fighter wounded
/// earlier in a pass is no longer attacking when its own turn comes.
#[derive(Debug)]
pub struct Arena {
    fighters: Vec<Fighter>,
    next_id: FighterId,
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

impl Arena {
    pub fn new() -> Self {
        Self {
            fighters: Vec::new(),
            next_id: 0,
        }
    }

    /// Place a new entity and return its id
    pub fn spawn(
        &mut self,
        name: &str,
        stats: EntityStats,
        origin: Vec2,
        half_extents: Vec2,
    ) -> FighterId {
        let id = self.next_id;
        self.next_id += 1;

        let mut entity = Entity::with_stats(name, stats);
        entity.set_mobile(true);
        entity.set_attackable(true);

        self.fighters.push(Fighter {
            id,
            entity,
            origin,
            half_extents,
        });
        debug!("Spawned {} as fighter {}", name, id);

        id
    }

    pub fn get(&self, id: FighterId) -> Option<&Fighter> {
        self.fighters.iter().find(|f| f.id == id)
    }

    pub fn get_mut(&mut self, id: FighterId) -> Option<&mut Fighter> {
        self.fighters.iter_mut().find(|f| f.id == id)
    }

    pub fn entity(&self, id: FighterId) -> Option<&Entity> {
        self.get(id).map(|f| &f.entity)
    }

    pub fn entity_mut(&mut self, id: FighterId) -> Option<&mut Entity> {
        self.get_mut(id).map(|f| &mut f.entity)
    }

    /// All fighters, ascending id
    pub fn all(&self) -> &[Fighter] {
        &self.fighters
    }

    pub fn remove(&mut self, id: FighterId) -> Option<Fighter> {
        let pos = self.fighters.iter().position(|f| f.id == id)?;
        Some(self.fighters.remove(pos))
    }

    pub fn count(&self) -> usize {
        self.fighters.len()
    }

    /// Fighters whose entity is still active
    pub fn alive_count(&self) -> usize {
        self.fighters.iter().filter(|f| f.entity.is_active()).count()
    }

    /// Step every fighter's current animation by one frame
    pub fn advance_animations(&mut self) {
        for fighter in &mut self.fighters {
            fighter.entity.advance_animation();
        }
    }

    fn index_of(&self, id: FighterId) -> Result<usize, ArenaError> {
        self.fighters
            .iter()
            .position(|f| f.id == id)
            .ok_or(ArenaError::UnknownFighter(id))
    }

    /// Resolve one pair by index if it qualifies
    fn resolve_indices(&mut self, attacker: usize, defender: usize) -> Option<HitReport> {
        let (a, d) = (&self.fighters[attacker], &self.fighters[defender]);
        if !a.entity.state().is_attacking() || !d.entity.is_attackable() || !a.overlaps(d) {
            return None;
        }

        let attacker_id = a.id;
        let damage = a.entity.current_attack_value();

        let target = &mut self.fighters[defender];
        let was_active = target.entity.is_active();
        let hurt = target.entity.collide(damage);
        let report = HitReport {
            attacker: attacker_id,
            defender: target.id,
            damage_attempted: damage,
            hurt,
            defeated: was_active && !target.entity.is_active(),
        };
        debug!("Hit {:?}", report);

        Some(report)
    }

    /// Resolve a single attacker/defender pair.
    ///
    /// `Ok(None)` when the attacker is not attacking, the defender is not
    /// attackable, or the hitboxes do not touch.
    pub fn resolve_pair(
        &mut self,
        attacker: FighterId,
        defender: FighterId,
    ) -> Result<Option<HitReport>, ArenaError> {
        if attacker == defender {
            return Err(ArenaError::SelfCollision(attacker));
        }
        let a = self.index_of(attacker)?;
        let d = self.index_of(defender)?;
        Ok(self.resolve_indices(a, d))
    }

    /// Resolve every qualifying pair once, in id order
    pub fn resolve_collisions(&mut self) -> Vec<HitReport> {
        let mut reports = Vec::new();
        for attacker in 0..self.fighters.len() {
            for defender in 0..self.fighters.len() {
                if attacker == defender {
                    continue;
                }
                if let Some(report) = self.resolve_indices(attacker, defender) {
                    reports.push(report);
                }
            }
        }
        reports
    }
}
