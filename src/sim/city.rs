//! City layout
//!
//! A square grid of box buildings separated by streets, with the lots around
//! the origin left empty as the spawn plaza. Generated once per session and
//! only read afterwards.

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Obstacle;
use crate::consts::*;

/// A building box as the scene draws it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub id: String,
    /// Box centre (y is half the height, so it sits on the ground)
    pub position: Vec3,
    pub size: Vec3,
}

impl Building {
    pub fn obstacle(&self) -> Obstacle {
        Obstacle::from_box(self.position, self.size)
    }
}

/// Lay out the city grid with random building heights
pub fn generate_city<R: Rng + ?Sized>(rng: &mut R) -> Vec<Building> {
    let pitch = BUILDING_SIZE + STREET_WIDTH;
    let grid = (CITY_SIZE / pitch).floor() as u32;
    let offset = grid as f32 * pitch / 2.0;
    let half = grid as f32 / 2.0;

    let mut buildings = Vec::with_capacity((grid * grid) as usize);
    for x in 0..grid {
        for z in 0..grid {
            // Spawn plaza
            let (fx, fz) = (x as f32, z as f32);
            if fx > half - 2.0 && fx < half + 2.0 && fz > half - 2.0 && fz < half + 2.0 {
                continue;
            }

            let height = rng.random_range(BUILDING_MIN_HEIGHT..BUILDING_MAX_HEIGHT);
            buildings.push(Building {
                id: format!("b-{x}-{z}"),
                position: Vec3::new(fx * pitch - offset, height / 2.0, fz * pitch - offset),
                size: Vec3::new(BUILDING_SIZE, height, BUILDING_SIZE),
            });
        }
    }

    log::info!("City generated: {} buildings on a {}x{} grid", buildings.len(), grid, grid);
    buildings
}

/// Collision footprints for a building list
pub fn obstacles_for(buildings: &[Building]) -> Vec<Obstacle> {
    buildings.iter().map(Building::obstacle).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::collision::is_blocked;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_grid_leaves_plaza_empty() {
        let mut rng = Pcg32::seed_from_u64(42);
        let buildings = generate_city(&mut rng);
        // 10x10 grid minus the 3x3 plaza
        assert_eq!(buildings.len(), 91);

        let obstacles = obstacles_for(&buildings);
        assert!(!is_blocked(Vec3::ZERO, BODY_RADIUS, &obstacles, WORLD_BOUND));
        assert!(!is_blocked(Vec3::new(12.0, 0.0, -12.0), BODY_RADIUS, &obstacles, WORLD_BOUND));
    }

    #[test]
    fn test_buildings_sit_on_ground() {
        let mut rng = Pcg32::seed_from_u64(7);
        for b in generate_city(&mut rng) {
            assert!(b.size.y >= BUILDING_MIN_HEIGHT && b.size.y < BUILDING_MAX_HEIGHT);
            assert!((b.position.y - b.size.y / 2.0).abs() < 1e-5);
            assert_eq!(b.size.x, BUILDING_SIZE);
        }
    }

    #[test]
    fn test_streets_are_walkable() {
        let mut rng = Pcg32::seed_from_u64(1);
        let obstacles = obstacles_for(&generate_city(&mut rng));
        // Street centre line between the lots at x=-30 and x=-20
        assert!(!is_blocked(Vec3::new(-25.0, 0.0, 33.0), BODY_RADIUS, &obstacles, WORLD_BOUND));
        // Middle of a lot
        assert!(is_blocked(Vec3::new(-30.0, 0.0, 30.0), BODY_RADIUS, &obstacles, WORLD_BOUND));
    }

    #[test]
    fn test_same_seed_same_city() {
        let a = generate_city(&mut Pcg32::seed_from_u64(5));
        let b = generate_city(&mut Pcg32::seed_from_u64(5));
        assert_eq!(a, b);
    }
}
