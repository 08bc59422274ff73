use maze_forge_core::{Direction, MapSite, Maze, MazeError, Room, RoomKind, RoomNumber, WallKind};
use maze_forge_game::{Config, MazeGame};
use maze_forge_system_builder::{CountingMazeBuilder, StandardMazeBuilder};
use maze_forge_system_factory::{
    BombedMazeFactory, EnchantedMazeFactory, FixedSpell, MazeFactory, SeededSpell,
    StandardMazeFactory,
};
use maze_forge_system_prototype::MazePrototypeFactory;

const FIRST: RoomNumber = RoomNumber::new(1);
const SECOND: RoomNumber = RoomNumber::new(2);

fn room(maze: &Maze, number: RoomNumber) -> &Room {
    maze.room_no(number)
        .unwrap_or_else(|| panic!("room {number} missing"))
}

/// Checks the two-room layout and returns the wall kinds of the non-door sides.
fn assert_canonical_layout(maze: &Maze) -> Vec<WallKind> {
    assert_eq!(maze.room_count(), 2);
    assert_eq!(maze.door_count(), 1, "exactly one door connects the rooms");
    let (door_id, door) = maze.doors().next().expect("door registered");
    assert_eq!(door.rooms(), (FIRST, SECOND));

    let mut walls = Vec::new();
    for (number, door_side) in [(FIRST, Direction::East), (SECOND, Direction::West)] {
        let room = room(maze, number);
        for direction in Direction::ALL {
            match room.get_side(direction) {
                Some(MapSite::Door(id)) if direction == door_side => assert_eq!(*id, door_id),
                Some(MapSite::Wall(wall)) if direction != door_side => walls.push(wall.kind()),
                other => panic!("room {number} {direction} side holds {other:?}"),
            }
        }
    }
    walls
}

#[test]
fn every_factory_yields_the_canonical_layout() {
    let game = MazeGame::new();
    let mut factories: Vec<Box<dyn MazeFactory>> = vec![
        Box::new(StandardMazeFactory),
        Box::new(EnchantedMazeFactory::new(SeededSpell::new(11))),
        Box::new(BombedMazeFactory),
        Box::new(MazePrototypeFactory::standard()),
        Box::new(MazePrototypeFactory::bombed()),
    ];

    for factory in &mut factories {
        let maze = game
            .create_maze_by_abstract_factory(factory.as_mut())
            .expect("assembly succeeds");
        assert_eq!(assert_canonical_layout(&maze).len(), 6);
    }
}

#[test]
fn bombed_factory_themes_rooms_and_walls() {
    let game = MazeGame::new();
    let maze = game
        .create_maze_by_abstract_factory(&mut BombedMazeFactory)
        .expect("assembly succeeds");

    let walls = assert_canonical_layout(&maze);
    assert!(walls
        .iter()
        .all(|kind| *kind == WallKind::Bombed { destroyed: false }));
    for number in [FIRST, SECOND] {
        assert_eq!(
            room(&maze, number).kind(),
            RoomKind::WithBomb {
                has_bomb: true,
                destroyed: false,
            }
        );
    }
}

#[test]
fn enchanted_factory_uses_the_stubbed_spell() {
    let game = MazeGame::new();
    for locked in [true, false] {
        let mut factory = EnchantedMazeFactory::new(FixedSpell::new(locked));
        let maze = game
            .create_maze_by_abstract_factory(&mut factory)
            .expect("assembly succeeds");

        let walls = assert_canonical_layout(&maze);
        assert!(walls.iter().all(|kind| *kind == WallKind::Plain));
        for number in [FIRST, SECOND] {
            assert_eq!(room(&maze, number).kind(), RoomKind::Enchanted { locked });
        }
    }
}

#[test]
fn builder_strategy_matches_factory_strategy() {
    let game = MazeGame::new();
    let built = game
        .create_maze_from_builder(&mut StandardMazeBuilder::new())
        .expect("builder succeeds");
    let made = game
        .create_maze_by_abstract_factory(&mut StandardMazeFactory)
        .expect("factory succeeds");

    assert_eq!(built, made);
}

#[test]
fn counting_builder_cannot_hand_out_a_maze() {
    let game = MazeGame::new();
    let mut builder = CountingMazeBuilder::new();

    assert!(matches!(
        game.create_maze_from_builder(&mut builder),
        Err(MazeError::PreconditionViolation(_))
    ));
    assert_eq!(builder.counts(), (2, 1));
}

#[test]
fn fabric_method_uses_the_injected_parts() {
    let mut game = MazeGame::with_parts(Config::default(), BombedMazeFactory);
    let maze = game
        .create_maze_by_fabric_method()
        .expect("assembly succeeds");

    let walls = assert_canonical_layout(&maze);
    assert!(walls
        .iter()
        .all(|kind| *kind == WallKind::Bombed { destroyed: false }));

    let mut plain = MazeGame::new();
    let maze = plain
        .create_maze_by_fabric_method()
        .expect("assembly succeeds");
    assert!(assert_canonical_layout(&maze)
        .iter()
        .all(|kind| *kind == WallKind::Plain));
}

#[test]
fn dynamic_and_generic_entry_points_agree() {
    let game = MazeGame::new();
    let mut factory = MazePrototypeFactory::bombed();

    let generic = game
        .create_maze_by_abstract_factory(&mut factory)
        .expect("generic assembly");
    let dynamic = game.create_maze(&mut factory).expect("dynamic assembly");

    assert_eq!(generic, dynamic);
}

#[test]
fn configured_room_numbers_are_used() -> anyhow::Result<()> {
    let game = MazeGame::with_parts(
        Config::new(RoomNumber::new(10), RoomNumber::new(20)),
        StandardMazeFactory,
    );

    let maze = game.create_maze_from_builder(&mut StandardMazeBuilder::new())?;

    assert!(maze.room_no(RoomNumber::new(10)).is_some());
    assert!(maze.room_no(RoomNumber::new(20)).is_some());
    assert!(maze.room_no(FIRST).is_none());
    Ok(())
}

#[test]
fn assembled_maze_can_be_walked_once_the_door_opens() -> anyhow::Result<()> {
    let game = MazeGame::new();
    let mut maze = game.create_maze_by_abstract_factory(&mut StandardMazeFactory)?;

    assert_eq!(
        maze.enter(FIRST, Direction::East),
        Err(MazeError::BlockedEntry {
            room: FIRST,
            direction: Direction::East,
        })
    );

    let (door_id, _) = maze.doors().next().expect("door registered");
    maze.door_mut(door_id).expect("door registered").open();

    assert_eq!(maze.enter(FIRST, Direction::East)?.number(), SECOND);
    assert_eq!(maze.enter(SECOND, Direction::West)?.number(), FIRST);
    assert!(matches!(
        maze.enter(SECOND, Direction::North),
        Err(MazeError::BlockedEntry { .. })
    ));
    Ok(())
}

#[test]
fn reversed_room_numbers_keep_every_strategy_in_agreement() -> anyhow::Result<()> {
    let western = RoomNumber::new(5);
    let eastern = RoomNumber::new(2);
    let mut game = MazeGame::with_parts(Config::new(western, eastern), StandardMazeFactory);

    let built = game.create_maze_from_builder(&mut StandardMazeBuilder::new())?;
    let made = game.create_maze_by_abstract_factory(&mut StandardMazeFactory)?;
    let dynamic = game.create_maze(&mut StandardMazeFactory)?;
    let own_parts = game.create_maze_by_fabric_method()?;

    assert_eq!(built, made);
    assert_eq!(built, dynamic);
    assert_eq!(built, own_parts);
    assert!(matches!(
        room(&built, western).get_side(Direction::East),
        Some(MapSite::Door(_))
    ));
    assert!(matches!(
        room(&built, eastern).get_side(Direction::West),
        Some(MapSite::Door(_))
    ));
    Ok(())
}
