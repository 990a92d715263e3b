//! End-to-end behaviour of small hand-built worlds

use glam::IVec2;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use sandfall_core::world::{Movement, ScriptedRng};
use sandfall_core::{Material, SimConfig, World};

fn material_at(world: &World, x: i32, y: i32) -> Option<Material> {
    world.read(x, y).map(|view| view.material)
}

fn stone_floor(world: &mut World) {
    for x in 0..world.width() {
        world.seed(x, 0, Material::Stone).expect("in bounds");
    }
}

#[test]
fn sand_falls_to_the_floor() {
    let mut world = World::new(10, 10);
    stone_floor(&mut world);
    world.seed(5, 9, Material::Sand).expect("in bounds");
    let mut rng = Xoshiro256StarStar::seed_from_u64(1);

    for expected_y in (1..9).rev() {
        world.tick(1.0, &mut rng).expect("tick");
        assert_eq!(material_at(&world, 5, expected_y), Some(Material::Sand));
    }

    assert!(!Movement::can_move_down(world.grid(), IVec2::new(5, 1)));

    // Resting grains stay put
    for _ in 0..5 {
        world.tick(1.0, &mut rng).expect("tick");
    }
    assert_eq!(material_at(&world, 5, 1), Some(Material::Sand));
    assert_eq!(world.count(Material::Sand), 1);
}

#[test]
fn blocked_water_slides_left() {
    for seed in 0..16 {
        let mut world = World::new(10, 10);
        // Slides teleport, so both cells on the right must be filled
        for (x, y) in [(5, 4), (4, 4), (6, 4), (6, 5), (7, 5)] {
            world.seed(x, y, Material::Stone).expect("in bounds");
        }
        world.seed(5, 5, Material::Water).expect("in bounds");
        let mut rng = Xoshiro256StarStar::seed_from_u64(seed);

        world.tick(1.0, &mut rng).expect("tick");

        let landed = [3, 4]
            .into_iter()
            .find(|&x| material_at(&world, x, 5) == Some(Material::Water));
        assert!(landed.is_some(), "seed {seed}: water did not slide left");
        assert!(material_at(&world, 5, 5).is_none());
    }
}

#[test]
fn powder_next_to_lava_turns_to_smoke() {
    let mut world = World::new(10, 5);
    stone_floor(&mut world);
    world.seed(4, 1, Material::Powder).expect("in bounds");
    world.seed(5, 1, Material::Lava).expect("in bounds");
    let mut rng = Xoshiro256StarStar::seed_from_u64(3);

    let report = world.tick(1.0, &mut rng).expect("tick");

    assert_eq!(world.count(Material::Powder), 0);
    assert_eq!(world.count(Material::Smoke), 1);
    assert_eq!(report.conversions, 1);
    let lava = world.read(5, 1).expect("lava stays");
    assert_eq!(lava.material, Material::Lava);
    assert!(lava.flags.is_hot());
}

#[test]
fn heated_snow_melts_on_fifth_update() {
    let mut world = World::new(4, 4);
    stone_floor(&mut world);
    world.seed(1, 1, Material::Snow).expect("in bounds");
    world.seed(2, 1, Material::Lava).expect("in bounds");
    let mut rng = ScriptedRng::always();

    for expected in [250, 500, 750, 1000] {
        world.tick(1.0, &mut rng).expect("tick");
        let snow = world.grid().get(1, 1).expect("snow stays");
        assert_eq!(snow.material(), Material::Snow);
        assert_eq!(snow.melt_step, expected);
    }

    world.tick(1.0, &mut rng).expect("tick");
    assert_eq!(material_at(&world, 1, 1), Some(Material::Water));
}

#[test]
fn heated_snow_waits_on_the_coin() {
    let mut world = World::new(4, 4);
    stone_floor(&mut world);
    world.seed(1, 1, Material::Snow).expect("in bounds");
    world.particle_mut(1, 1).expect("snow").melt_step = 1000;

    for _ in 0..10 {
        world.tick(1.0, &mut ScriptedRng::never()).expect("tick");
    }
    assert_eq!(material_at(&world, 1, 1), Some(Material::Snow));
}

#[test]
fn vapor_condenses_at_altitude() {
    let config = SimConfig {
        condensation_altitude: Some(600),
        ..SimConfig::default()
    };
    let mut world = World::with_config(3, 700, config).expect("valid config");
    world.seed(1, 600, Material::Vapor).expect("in bounds");

    world.tick(1.0, &mut ScriptedRng::always()).expect("tick");

    assert_eq!(material_at(&world, 1, 600), Some(Material::Water));
    assert_eq!(world.count(Material::Vapor), 0);
}

#[test]
fn oil_fire_spreads_through_a_pool() {
    let mut world = World::new(8, 4);
    stone_floor(&mut world);
    for x in 1..7 {
        world.seed(x, 1, Material::Oil).expect("in bounds");
    }
    world.seed(0, 1, Material::Lava).expect("in bounds");
    let mut rng = ScriptedRng::always();

    let mut conversions = 0;
    for _ in 0..20 {
        conversions += world.tick(1.0, &mut rng).expect("tick").conversions;
    }

    assert!(conversions > 1, "fire never spread past the first cell");
    assert!(world.count(Material::Smoke) > 1);
    assert!(world.count(Material::Oil) < 6);
}
