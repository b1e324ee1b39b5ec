//! End-to-end: level file -> view rays -> entity vs wall collision

use blaze::physics::{Circle, Collider, test_collision};
use blaze::{Camera, MapFile, Settings, Viewport};
use glam::{IVec2, Vec2};

const LEVEL: &str = r#"{
    "size": 6,
    "origin": [1, 1],
    "map": [
        [1, 1, 1, 1, 1, 1],
        [1, 0, 0, 0, 0, 1],
        [1, 0, 0, 0, 0, 2],
        [1, 0, 0, 0, 0, 1],
        [1, 0, 0, 0, 0, 1],
        [1, 1, 1, 1, 1, 1]
    ],
    "textures": ["brick.png", "door.png"]
}"#;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_level_renders_closed_room() {
    init_logger();
    let map = MapFile::from_json(LEVEL).unwrap().to_grid().unwrap();

    // World (0, 0) is grid index (1, 1)
    let camera = Camera::from_settings(
        &Settings::default(),
        Viewport::new(32, 24),
        Vec2::new(1.5, 1.5),
        Vec2::X,
    );
    let columns = camera.cast_columns(&map, &Settings::default());

    assert_eq!(columns.len(), 32);
    assert!(columns.iter().all(Option::is_some));

    // Looking straight at the door on the east wall
    let centre = columns[16].unwrap();
    assert_eq!(centre.cast.cell, 2);
    assert_eq!(centre.cast.cell_index, IVec2::new(5, 2));
    assert!((centre.cast.distance - 2.5).abs() < 1e-5);
}

#[test]
fn test_entity_pushed_out_of_walls() {
    init_logger();
    let map = MapFile::from_json(LEVEL).unwrap().to_grid().unwrap();

    // Player circle poking 0.2 into the door cell
    let mut player = Collider::Circle(Circle::new(Vec2::new(3.6, 1.5), 0.6));

    let walls: Vec<Collider> = map
        .walls()
        .filter_map(|(index, _)| map.wall_collider(index))
        .collect();
    assert_eq!(walls.len(), 20);

    let mut hits = 0;
    for wall in &walls {
        let result = test_collision(&player, wall);
        if result.has_collision {
            hits += 1;
            assert!(result.normal.x > 0.9);
            player.translate(result.separation());
        }
    }

    assert_eq!(hits, 1);
    assert!(player.position().x < 3.41);
    assert!(walls.iter().all(|w| !test_collision(&player, w).has_collision));
}
