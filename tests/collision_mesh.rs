use sandfall_engine::chunks::{ChunkCoord, CHUNK_SIZE};
use sandfall_engine::config::{TerrainConfig, WorldConfig};
use sandfall_engine::materials::Material;
use sandfall_engine::{World, WorldCore};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn flat_world(width: u32, height: u32) -> WorldCore {
    let mut config = WorldConfig::with_size(width, height);
    config.terrain = TerrainConfig { ground_depth: 5, emitter: None };
    WorldCore::from_config(config).unwrap()
}

#[test]
fn strip_on_the_floor_meshes_into_the_floor_chunk() {
    init_logger();
    let mut world = flat_world(CHUNK_SIZE, CHUNK_SIZE);
    for x in 10..13 {
        world.set_cell(x, 20, Material::Stone);
    }
    world.tick(0.0);

    let body = world.chunk_body(ChunkCoord::new(0, 0)).unwrap();
    // The strip and the floor.
    assert_eq!(body.rects().len(), 2);
    let strip = body
        .rects()
        .iter()
        .find(|r| r.size.y == 1.0)
        .expect("strip rect");
    assert_eq!((strip.size.x, strip.center.x, strip.center.y), (3.0, 11.5, 20.5));
}

#[test]
fn falling_sand_keeps_its_column_chunks_in_sync() {
    init_logger();
    let mut world = flat_world(CHUNK_SIZE * 2, CHUNK_SIZE * 2);
    world.paint(20, 10, 3, Material::Sand);
    for _ in 0..300 {
        world.tick(0.016);
        // Every collidable cell is covered by exactly its chunk's rects.
        let solid = world
            .grid()
            .cells()
            .iter()
            .filter(|m| m.is_collidable())
            .count() as f32;
        let covered: f32 = world
            .chunk_bodies()
            .iter()
            .flat_map(|b| b.rects())
            .map(|r| r.size.x * r.size.y)
            .sum();
        assert_eq!(covered, solid);
    }
    // Everything settled on the floor; nothing is left to rebuild.
    assert!(world.rebuilt_chunks().is_empty());
}

#[test]
fn facade_exports_flat_buffers() {
    init_logger();
    let mut world = World::from_config_json(
        r#"{"width": 128, "height": 64, "terrain": {"ground_depth": 1, "emitter": null}}"#.to_string(),
    )
    .unwrap();
    assert_eq!((world.chunks_x(), world.chunks_y()), (2, 1));

    world.set_cell(70, 10, Material::Stone.id());
    world.tick(0.0);
    assert_eq!(world.rebuilt_chunks(), vec![1, 0]);
    let rects = world.chunk_rects(1, 0);
    assert_eq!(rects.len(), 8);
    assert_eq!(world.total_rects(), 3);
    assert_eq!(world.chunk_revision(0, 0), 1);
    assert_eq!(world.chunk_revision(1, 0), 2);

    assert_eq!(world.types_len(), 128 * 64);
    assert_eq!(world.colors_len_bytes(), 128 * 64 * 4);
}

#[test]
fn unknown_material_ids_are_rejected() {
    let mut world = World::new(32, 32).unwrap();
    assert!(!world.set_cell(1, 1, 200));
    assert_eq!(world.paint(5, 5, 2, 99), 0);
    assert_eq!(world.get_cell(1, 1), Material::Empty.id());
}
