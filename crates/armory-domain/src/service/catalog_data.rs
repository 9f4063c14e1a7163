//! Built-in reference data
//!
//! Order here is catalog order: queries never re-sort.

use crate::model::agent::{Agent, AgentId};
use crate::model::weapon::{Weapon, WeaponId, PRIMARY, SIDEARM};

const IMAGE_BASE: &str = "https://images.contentstack.io/v3/assets/bltb6530b271fddd0b1";

pub(crate) fn agents() -> Vec<Agent> {
    vec![
        Agent::new(
            AgentId::new("jett"),
            "Jett",
            "Duelist",
            "Jett's agile and evasive fighting style lets her take risks no one else can.",
        )
        .with_abilities(["Updraft", "Tailwind", "Cloudburst", "Blade Storm"])
        .with_image_url(format!(
            "{IMAGE_BASE}/blt5ebf40a2dfaffb4e/5f21297f5f0cb0629a5bfcb9/V_AGENTS_587x900_Jett.png"
        )),
        Agent::new(
            AgentId::new("sova"),
            "Sova",
            "Initiator",
            "Sova tracks, finds, and eliminates enemies with ruthless efficiency.",
        )
        .with_abilities(["Owl Drone", "Shock Bolt", "Recon Bolt", "Hunter's Fury"])
        .with_image_url(format!(
            "{IMAGE_BASE}/blt181ad63adc9976a4/5f2129b2e0999b628bc8eb4e/V_AGENTS_587x900_Sova.png"
        )),
        Agent::new(
            AgentId::new("sage"),
            "Sage",
            "Sentinel",
            "Sage creates safety for herself and her team wherever she goes.",
        )
        .with_abilities(["Barrier Orb", "Slow Orb", "Healing Orb", "Resurrection"])
        .with_image_url(format!(
            "{IMAGE_BASE}/blt2a1c7b18aa5b1a6b/5f21297f078a8b626859f4a8/V_AGENTS_587x900_Sage.png"
        )),
        Agent::new(
            AgentId::new("omen"),
            "Omen",
            "Controller",
            "Omen hunts in the shadows. He renders enemies blind, teleports across the field.",
        )
        .with_abilities(["Shrouded Step", "Paranoia", "Dark Cover", "From the Shadows"])
        .with_image_url(format!(
            "{IMAGE_BASE}/blt94dd043bce7fc9f2/5f21297f2ef66062fb6aa96c/V_AGENTS_587x900_Omen.png"
        )),
    ]
}

pub(crate) fn weapons() -> Vec<Weapon> {
    let weapon = |id: &str, name: &str, category: &str, cost, damage, accuracy| {
        Weapon::new(WeaponId::new(id), name, category)
            .with_cost(cost)
            .with_ratings(damage, accuracy)
    };

    vec![
        weapon("classic", "Classic", SIDEARM, 0, 78, 85),
        weapon("sheriff", "Sheriff", SIDEARM, 800, 159, 79),
        weapon("spectre", "Spectre", PRIMARY, 1600, 78, 74),
        weapon("vandal", "Vandal", PRIMARY, 2900, 160, 73),
        weapon("phantom", "Phantom", PRIMARY, 2900, 156, 79),
        weapon("operator", "Operator", PRIMARY, 4700, 255, 76),
    ]
}
