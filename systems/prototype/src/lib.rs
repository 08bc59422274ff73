#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Prototype-based factory that clones exemplar parts.
//!
//! The theme is chosen by the exemplars handed to
//! [`MazePrototypeFactory::new`] instead of by a factory type. Every part it
//! produces is an independent deep copy of its exemplar, with identity fields
//! rebound where the part needs them.

use maze_forge_core::{Door, Maze, Room, RoomNumber, Wall};
use maze_forge_system_factory::MazeFactory;
use tracing::trace;

/// Factory that produces parts by cloning exemplar instances.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazePrototypeFactory {
    maze: Maze,
    wall: Wall,
    room: Room,
    door: Door,
}

impl MazePrototypeFactory {
    /// Creates a factory from one exemplar of each part.
    #[must_use]
    pub fn new(maze: Maze, wall: Wall, room: Room, door: Door) -> Self {
        Self {
            maze,
            wall,
            room,
            door,
        }
    }

    /// Exemplars equivalent to the plain parts of the standard factory.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(
            Maze::new(),
            Wall::new(),
            Room::new(RoomNumber::new(0)),
            Door::new(RoomNumber::new(0), RoomNumber::new(0)),
        )
    }

    /// Exemplars producing armed rooms and bombed walls.
    #[must_use]
    pub fn bombed() -> Self {
        Self::new(
            Maze::new(),
            Wall::bombed(),
            Room::with_bomb(RoomNumber::new(0)),
            Door::new(RoomNumber::new(0), RoomNumber::new(0)),
        )
    }

    /// Exemplar room cloned by [`MazeFactory::make_room`].
    #[must_use]
    pub const fn room_prototype(&self) -> &Room {
        &self.room
    }
}

impl MazeFactory for MazePrototypeFactory {
    fn make_maze(&mut self) -> Maze {
        self.maze.clone()
    }

    fn make_wall(&mut self) -> Wall {
        self.wall
    }

    fn make_room(&mut self, number: RoomNumber) -> Room {
        let mut room = self.room.clone();
        room.initialize(number);
        trace!(room = number.get(), "room cloned from prototype");
        room
    }

    fn make_door(&mut self, room1: &Room, room2: &Room) -> Door {
        let mut door = self.door;
        door.initialize(room1.number(), room2.number());
        door
    }
}
