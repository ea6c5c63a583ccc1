// Game modules: entities and the arena that pits them against each other

pub mod arena;
pub mod entity;

pub use arena::{Arena, ArenaError, Fighter, FighterId, HitReport};
