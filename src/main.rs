use anyhow::{anyhow, Result};
use glam::Vec2;
use log::info;

use gourd_fight::game::entity::{Command, EntityStats, StandOnly};
use gourd_fight::game::{Arena, FighterId};

/// Upper bound on the length of the demo bout
const MAX_TICKS: u32 = 200;

/// Hitbox half extents shared by both demo fighters
const FIGHTER_HALF_EXTENTS: Vec2 = Vec2::new(16.0, 32.0);

/// What a fighter asks for on a given tick
fn scripted_command(tick: u32, is_hero: bool, in_reach: bool) -> Command {
    if !in_reach {
        return if is_hero { Command::MoveRight } else { Command::MoveLeft };
    }
    match (is_hero, tick % 4) {
        (true, 0) => Command::AttackKill,
        (true, _) => Command::AttackNear,
        (false, 1) => Command::Defend,
        (false, _) => Command::AttackFar,
    }
}

fn in_reach(arena: &Arena, a: FighterId, b: FighterId) -> Result<bool> {
    let a = arena.get(a).ok_or_else(|| anyhow!("fighter {a} missing"))?;
    let b = arena.get(b).ok_or_else(|| anyhow!("fighter {b} missing"))?;
    Ok(a.overlaps(b))
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Gourd Fight demo bout...");

    let mut arena = Arena::new();
    let hero = arena.spawn(
        "Red Gourd",
        EntityStats::standard().with_attack_values(12.0, 15.0, 30.0),
        Vec2::new(0.0, 0.0),
        FIGHTER_HALF_EXTENTS,
    );
    let monster = arena.spawn(
        "Scorpion",
        EntityStats::standard().with_life_value(150.0).with_defend_value(8.0),
        Vec2::new(200.0, 0.0),
        FIGHTER_HALF_EXTENTS,
    );

    for tick in 0..MAX_TICKS {
        if arena.alive_count() < 2 {
            break;
        }

        let reach = in_reach(&arena, hero, monster)?;
        for (id, is_hero) in [(hero, true), (monster, false)] {
            let entity = arena
                .entity_mut(id)
                .ok_or_else(|| anyhow!("fighter {id} missing"))?;
            entity.dispatch(scripted_command(tick, is_hero, reach), &StandOnly);
        }

        for report in arena.resolve_collisions() {
            if report.defeated {
                info!(
                    "Tick {}: fighter {} knocked out fighter {}",
                    tick, report.attacker, report.defender
                );
            }
        }

        // Every action animation lasts one tick in this demo
        arena.advance_animations();
        for id in [hero, monster] {
            if let Some(entity) = arena.entity_mut(id) {
                entity.reset_to_stand();
            }
        }
    }

    for fighter in arena.all() {
        info!(
            "{}: life {}, {}",
            fighter.entity.name(),
            fighter.entity.life_value(),
            if fighter.entity.is_active() { "standing" } else { "defeated" }
        );
    }

    Ok(())
}
