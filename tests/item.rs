use bevy_ecs::event::Events;
use bevy_ecs::system::RunSystemOnce;
use bevy_ecs::world::World;
use macgyver_escape::constants::{ITEM_SLOT_ROW, MAZE_SIZE};
use macgyver_escape::error::GameError;
use macgyver_escape::events::{CollisionEvent, GameEvent};
use macgyver_escape::map::{Direction, GridPosition};
use macgyver_escape::systems::{collision_system, FloorItem, ItemKind, PlayerControlled, Position};
use speculoos::prelude::*;
use strum::IntoEnumIterator;

mod common;

#[test]
fn test_item_kind_sprite_names() {
    assert_that(&ItemKind::PlasticTube.sprite_name()).is_equal_to("plastic_tube");
    assert_that(&ItemKind::Ether.sprite_name()).is_equal_to("ether");
    assert_that(&ItemKind::Needle.sprite_name()).is_equal_to("needle");
    assert_that(&ItemKind::iter().count()).is_equal_to(3);
}

#[test]
fn test_collision_system_reports_shared_cells_only() {
    let mut world = World::new();
    world.insert_resource(Events::<CollisionEvent>::default());
    world.insert_resource(Events::<GameError>::default());

    let player = world
        .spawn((PlayerControlled, Position::settled(GridPosition::new(2, 2))))
        .id();
    let near = world
        .spawn((
            FloorItem,
            ItemKind::Ether,
            Position::settled(GridPosition::new(2, 2)),
        ))
        .id();
    world.spawn((
        FloorItem,
        ItemKind::Needle,
        Position::settled(GridPosition::new(3, 2)),
    ));

    world
        .run_system_once(collision_system)
        .expect("system should run");

    let collisions: Vec<CollisionEvent> = world
        .resource_mut::<Events<CollisionEvent>>()
        .drain()
        .collect();
    assert_that(&collisions).has_length(1);
    assert_that(&collisions[0]).is_equal_to(CollisionEvent {
        player,
        other: near,
    });
}

#[test]
fn test_pickup_moves_item_from_floor_to_inventory_slot() {
    let mut game = common::instant_game(&common::corner_level());
    common::park_items(
        &mut game,
        &[
            GridPosition::new(1, 0),
            GridPosition::new(10, 10),
            GridPosition::new(12, 12),
        ],
    );
    let (item, ..) = common::items(&mut game)[0];

    game.tick(Some(Direction::Right));

    assert_that(&game.carried_count()).is_equal_to(1);
    assert_that(&game.is_ready()).is_false();

    let items = common::items(&mut game);
    let (_, _, position, on_floor) = items.iter().find(|(entity, ..)| *entity == item).unwrap();
    assert_that(on_floor).is_false();
    assert_that(&position.grid()).is_equal_to(GridPosition::new(0, ITEM_SLOT_ROW));
}

#[test]
fn test_pickup_happens_on_the_resting_cell_without_input() {
    let mut game = common::instant_game(&common::corner_level());
    // Park the first item under the player's starting cell.
    common::park_items(
        &mut game,
        &[
            GridPosition::new(0, 0),
            GridPosition::new(10, 10),
            GridPosition::new(12, 12),
        ],
    );

    game.tick(None);

    assert_that(&game.carried_count()).is_equal_to(1);
}

#[test]
fn test_pickup_is_idempotent_per_item() {
    let mut game = common::instant_game(&common::corner_level());
    common::park_items(
        &mut game,
        &[
            GridPosition::new(0, 0),
            GridPosition::new(10, 10),
            GridPosition::new(12, 12),
        ],
    );

    for _ in 0..5 {
        game.tick(None);
    }

    assert_that(&game.carried_count()).is_equal_to(1);
    let still_on_floor = common::items(&mut game)
        .iter()
        .filter(|(_, _, _, on_floor)| *on_floor)
        .count();
    assert_that(&still_on_floor).is_equal_to(2);
}

#[test]
fn test_ready_exactly_when_all_three_items_are_carried() {
    let mut game = common::instant_game(&common::corner_level());
    let items = common::items(&mut game);
    for (index, (item, ..)) in items.iter().enumerate() {
        common::place_item(&mut game, *item, GridPosition::new(index as i32 + 1, 0));
    }

    game.tick(Some(Direction::Right));
    assert_that(&game.is_ready()).is_false();
    game.tick(Some(Direction::Right));
    assert_that(&game.is_ready()).is_false();
    game.tick(Some(Direction::Right));
    assert_that(&game.is_ready()).is_true();
    assert_that(&game.carried_count()).is_equal_to(3);
}

#[test]
fn test_carried_items_occupy_slots_in_pickup_order() {
    let mut game = common::instant_game(&common::corner_level());
    let items = common::items(&mut game);
    for (index, (item, ..)) in items.iter().enumerate() {
        common::place_item(&mut game, *item, GridPosition::new(index as i32 + 1, 0));
    }

    for _ in 0..3 {
        game.tick(Some(Direction::Right));
    }

    let slot_rows: Vec<GridPosition> = common::items(&mut game)
        .iter()
        .map(|(_, _, position, _)| position.grid())
        .collect();
    assert_that(&slot_rows).contains(GridPosition::new(0, MAZE_SIZE));
    assert_that(&slot_rows).contains(GridPosition::new(1, MAZE_SIZE));
    assert_that(&slot_rows).contains(GridPosition::new(2, MAZE_SIZE));
}

#[test]
fn test_pickup_emits_item_collected_events() {
    let mut game = common::instant_game(&common::corner_level());
    common::park_items(
        &mut game,
        &[
            GridPosition::new(1, 0),
            GridPosition::new(10, 10),
            GridPosition::new(12, 12),
        ],
    );
    let (item, ..) = common::items(&mut game)[0];

    game.tick(Some(Direction::Right));

    let events = game.drain_events();
    assert_that(&events).contains(GameEvent::ItemCollected { item, slot: 0 });
}
