use maze_forge_core::{Room, RoomKind, RoomNumber, WallKind};
use maze_forge_system_factory::{
    BombedMazeFactory, EnchantedMazeFactory, FixedSpell, MazeFactory, StandardMazeFactory,
};

#[test]
fn standard_factory_makes_plain_parts() {
    let mut factory = StandardMazeFactory;

    let maze = factory.make_maze();
    assert_eq!(maze.room_count(), 0);
    assert_eq!(factory.make_wall().kind(), WallKind::Plain);

    let room = factory.make_room(RoomNumber::new(4));
    assert_eq!(room.number(), RoomNumber::new(4));
    assert_eq!(room.kind(), RoomKind::Plain);
    assert_eq!(room.sides().count(), 0, "rooms start without sides");
}

#[test]
fn doors_connect_the_given_rooms_and_start_closed() {
    let mut factory = StandardMazeFactory;
    let first = Room::new(RoomNumber::new(1));
    let second = Room::new(RoomNumber::new(2));

    let door = factory.make_door(&first, &second);

    assert_eq!(door.rooms(), (RoomNumber::new(1), RoomNumber::new(2)));
    assert!(!door.is_open());
}

#[test]
fn enchanted_factory_locks_rooms_per_spell() {
    let mut locked = EnchantedMazeFactory::new(FixedSpell::new(true));
    let mut unlocked = EnchantedMazeFactory::new(FixedSpell::new(false));

    assert_eq!(
        locked.make_room(RoomNumber::new(1)).kind(),
        RoomKind::Enchanted { locked: true }
    );
    assert_eq!(
        unlocked.make_room(RoomNumber::new(1)).kind(),
        RoomKind::Enchanted { locked: false }
    );
    assert_eq!(
        locked.make_wall().kind(),
        WallKind::Plain,
        "enchantment only changes rooms"
    );
}

#[test]
fn bombed_factory_arms_rooms_and_walls() {
    let mut factory = BombedMazeFactory;

    assert_eq!(
        factory.make_room(RoomNumber::new(3)).kind(),
        RoomKind::WithBomb {
            has_bomb: true,
            destroyed: false,
        }
    );
    assert_eq!(
        factory.make_wall().kind(),
        WallKind::Bombed { destroyed: false }
    );
}

#[test]
fn factories_are_usable_behind_trait_objects() {
    let mut factories: Vec<Box<dyn MazeFactory>> = vec![
        Box::new(StandardMazeFactory),
        Box::new(EnchantedMazeFactory::new(FixedSpell::new(true))),
        Box::new(BombedMazeFactory),
    ];

    let kinds: Vec<RoomKind> = factories
        .iter_mut()
        .map(|factory| factory.make_room(RoomNumber::new(1)).kind())
        .collect();

    assert_eq!(
        kinds,
        vec![
            RoomKind::Plain,
            RoomKind::Enchanted { locked: true },
            RoomKind::WithBomb {
                has_bomb: true,
                destroyed: false,
            },
        ]
    );
}
