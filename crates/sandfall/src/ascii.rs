//! Plain-text snapshot of a world, top row first

use sandfall_core::{Material, World};

/// One character per material; empty cells are spaces
pub fn glyph(material: Material) -> char {
    match material {
        Material::Sand => '.',
        Material::Powder => ',',
        Material::Ash => '\'',
        Material::Carbon => '%',
        Material::Lava => '&',
        Material::Oil => 'o',
        Material::Smoke => '~',
        Material::Snow => '*',
        Material::Stone => '#',
        Material::Vapor => '^',
        Material::Water => 'w',
        Material::WetSand => ':',
        Material::Void => '?',
    }
}

pub fn render(world: &World) -> String {
    let width = world.width().max(0) as usize;
    let mut out = String::with_capacity((width + 1) * world.height().max(0) as usize);

    for y in (0..world.height()).rev() {
        for x in 0..world.width() {
            out.push(world.read(x, y).map_or(' ', |view| glyph(view.material)));
        }
        out.push('\n');
    }
    out
}
