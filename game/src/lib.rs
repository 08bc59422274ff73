#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Orchestrates maze assembly through the available construction strategies.
//!
//! Every strategy produces the same two-room layout: both rooms walled on
//! all sides except for the single door that connects them, with the door on
//! the east side of the first room and the west side of the second. Only the
//! source of the parts differs.

use maze_forge_core::{Direction, Door, Maze, MazeError, Room, RoomNumber, Wall};
use maze_forge_system_builder::MazeBuilder;
use maze_forge_system_factory::{MazeFactory, StandardMazeFactory};
use tracing::{debug, trace};

const DEFAULT_FIRST_ROOM: RoomNumber = RoomNumber::new(1);
const DEFAULT_SECOND_ROOM: RoomNumber = RoomNumber::new(2);

/// Configuration parameters for the assembled layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    first_room: RoomNumber,
    second_room: RoomNumber,
}

impl Config {
    /// Creates a configuration connecting the two provided room numbers.
    #[must_use]
    pub const fn new(first_room: RoomNumber, second_room: RoomNumber) -> Self {
        Self {
            first_room,
            second_room,
        }
    }

    /// Number given to the western room.
    #[must_use]
    pub const fn first_room(&self) -> RoomNumber {
        self.first_room
    }

    /// Number given to the eastern room.
    #[must_use]
    pub const fn second_room(&self) -> RoomNumber {
        self.second_room
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_FIRST_ROOM, DEFAULT_SECOND_ROOM)
    }
}

/// Entry point that assembles mazes from factories, builders or its own parts.
///
/// The parts provider `P` backs the game's own `make_*` methods, which
/// [`MazeGame::create_maze_by_fabric_method`] uses. Supplying a different
/// provider changes the parts without changing the assembly.
#[derive(Clone, Debug)]
pub struct MazeGame<P = StandardMazeFactory> {
    config: Config,
    parts: P,
}

impl MazeGame {
    /// Creates a game using the default layout and plain parts.
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(Config::default(), StandardMazeFactory)
    }
}

impl Default for MazeGame {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: MazeFactory> MazeGame<P> {
    /// Creates a game whose own parts come from `parts`.
    #[must_use]
    pub fn with_parts(config: Config, parts: P) -> Self {
        Self { config, parts }
    }

    /// Layout configuration used by every strategy.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Assembles the layout from parts supplied by `factory`.
    pub fn create_maze_by_abstract_factory<F>(&self, factory: &mut F) -> Result<Maze, MazeError>
    where
        F: MazeFactory + ?Sized,
    {
        debug!("assembling maze from an abstract factory");
        assemble(factory, self.config)
    }

    /// Drives `builder` through the layout and takes the finished maze.
    ///
    /// Equal configured room numbers fail with [`MazeError::DuplicateRoom`],
    /// as they do for the factory-based strategies.
    pub fn create_maze_from_builder<B>(&self, builder: &mut B) -> Result<Maze, MazeError>
    where
        B: MazeBuilder + ?Sized,
    {
        debug!("assembling maze from a builder");
        if self.config.first_room == self.config.second_room {
            return Err(MazeError::DuplicateRoom(self.config.second_room));
        }
        builder.build_maze();
        builder.build_room(self.config.first_room)?;
        builder.build_room(self.config.second_room)?;
        builder.build_door(self.config.first_room, self.config.second_room)?;
        builder.take_maze()
    }

    /// Assembles the layout from the game's own `make_*` methods.
    pub fn create_maze_by_fabric_method(&mut self) -> Result<Maze, MazeError> {
        debug!("assembling maze from the game's own parts");
        let config = self.config;
        assemble(self, config)
    }

    /// Assembles the layout through a dynamically dispatched factory.
    pub fn create_maze(&self, factory: &mut dyn MazeFactory) -> Result<Maze, MazeError> {
        assemble(factory, self.config)
    }
}

impl<P: MazeFactory> MazeFactory for MazeGame<P> {
    fn make_maze(&mut self) -> Maze {
        self.parts.make_maze()
    }

    fn make_wall(&mut self) -> Wall {
        self.parts.make_wall()
    }

    fn make_room(&mut self, number: RoomNumber) -> Room {
        self.parts.make_room(number)
    }

    fn make_door(&mut self, room1: &Room, room2: &Room) -> Door {
        self.parts.make_door(room1, room2)
    }
}

fn assemble<F>(factory: &mut F, config: Config) -> Result<Maze, MazeError>
where
    F: MazeFactory + ?Sized,
{
    let mut maze = factory.make_maze();
    let mut first = factory.make_room(config.first_room);
    let mut second = factory.make_room(config.second_room);
    let door = factory.make_door(&first, &second);
    let door = maze.add_door(door)?;

    first.set_side(Direction::North, factory.make_wall());
    first.set_side(Direction::East, door);
    first.set_side(Direction::South, factory.make_wall());
    first.set_side(Direction::West, factory.make_wall());

    second.set_side(Direction::North, factory.make_wall());
    second.set_side(Direction::East, factory.make_wall());
    second.set_side(Direction::South, factory.make_wall());
    second.set_side(Direction::West, door);
    trace!(door = door.get(), "sides assigned");

    maze.add_room(first)?;
    maze.add_room(second)?;
    debug!(rooms = maze.room_count(), doors = maze.door_count(), "maze assembled");
    Ok(maze)
}
