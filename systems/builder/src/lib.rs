#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Step-ordered builders that assemble a maze incrementally.
//!
//! A builder must be started with [`MazeBuilder::build_maze`] before any room
//! or door step; calling a step first yields
//! [`MazeError::PreconditionViolation`]. Builders hold single-owner mutable
//! state and are not meant to be shared between threads.

use std::collections::BTreeSet;

use maze_forge_core::{Direction, Door, MapSite, Maze, MazeError, Room, RoomNumber, Wall};
use tracing::debug;

const NOT_STARTED: &str = "build_maze must be called before other builder steps";
const SIDE_TAKEN: &str = "the common wall already holds a door";

/// Incremental maze construction protocol.
pub trait MazeBuilder {
    /// Starts a new, empty maze, discarding any maze in progress.
    fn build_maze(&mut self);

    /// Adds a room walled on every side unless the number is already built.
    fn build_room(&mut self, number: RoomNumber) -> Result<(), MazeError>;

    /// Connects two built rooms with a door on their common wall.
    ///
    /// Connecting the same pair again is a no-op; a common wall already
    /// holding some other door is a [`MazeError::PreconditionViolation`].
    fn build_door(&mut self, from: RoomNumber, to: RoomNumber) -> Result<(), MazeError>;

    /// Returns the maze in progress.
    fn get_maze(&self) -> Result<&Maze, MazeError>;

    /// Hands out the maze in progress and returns the builder to its unstarted state.
    fn take_maze(&mut self) -> Result<Maze, MazeError>;
}

/// Policy locating the wall two adjacent rooms share.
pub trait CommonWall {
    /// Direction from `from` that faces `to`.
    ///
    /// The side of `to` facing back is always the opposite direction.
    fn common_wall(&self, from: &Room, to: &Room) -> Direction;
}

/// Lays rooms out left to right in the order they are connected.
///
/// The door sits on the east side of `from` and the west side of `to`,
/// whatever their numbers.
#[derive(Clone, Copy, Debug, Default)]
pub struct WestToEast;

impl CommonWall for WestToEast {
    fn common_wall(&self, _from: &Room, _to: &Room) -> Direction {
        Direction::East
    }
}

/// Builder producing plain rooms walled on all sides.
#[derive(Clone, Debug, Default)]
pub struct StandardMazeBuilder<W = WestToEast> {
    current_maze: Option<Maze>,
    walls: W,
}

impl StandardMazeBuilder {
    /// Creates an unstarted builder using the default common-wall policy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_common_wall(WestToEast)
    }
}

impl<W: CommonWall> StandardMazeBuilder<W> {
    /// Creates an unstarted builder that places doors using `walls`.
    #[must_use]
    pub fn with_common_wall(walls: W) -> Self {
        Self {
            current_maze: None,
            walls,
        }
    }

    fn maze_mut(&mut self) -> Result<&mut Maze, MazeError> {
        self.current_maze
            .as_mut()
            .ok_or(MazeError::PreconditionViolation(NOT_STARTED))
    }
}

impl<W: CommonWall> MazeBuilder for StandardMazeBuilder<W> {
    fn build_maze(&mut self) {
        debug!("starting a new maze");
        self.current_maze = Some(Maze::new());
    }

    fn build_room(&mut self, number: RoomNumber) -> Result<(), MazeError> {
        let maze = self.maze_mut()?;
        if maze.room_no(number).is_some() {
            return Ok(());
        }

        let mut room = Room::new(number);
        for direction in Direction::ALL {
            room.set_side(direction, Wall::new());
        }
        maze.add_room(room)?;
        debug!(room = number.get(), "room built");
        Ok(())
    }

    fn build_door(&mut self, from: RoomNumber, to: RoomNumber) -> Result<(), MazeError> {
        if from == to {
            return Err(MazeError::PreconditionViolation(
                "a door needs two distinct rooms",
            ));
        }

        let maze = self
            .current_maze
            .as_mut()
            .ok_or(MazeError::PreconditionViolation(NOT_STARTED))?;
        let room1 = maze.room_no(from).ok_or(MazeError::RoomNotFound(from))?;
        let room2 = maze.room_no(to).ok_or(MazeError::RoomNotFound(to))?;
        let direction = self.walls.common_wall(room1, room2);

        match (
            room1.get_side(direction),
            room2.get_side(direction.opposite()),
        ) {
            (Some(MapSite::Door(near)), Some(MapSite::Door(far))) if near == far => {
                let connects = maze
                    .door(*near)
                    .map_or(false, |door| door.other_side_from(from) == Ok(to));
                if connects {
                    return Ok(());
                }
                return Err(MazeError::PreconditionViolation(SIDE_TAKEN));
            }
            (Some(MapSite::Door(_)), _) | (_, Some(MapSite::Door(_))) => {
                return Err(MazeError::PreconditionViolation(SIDE_TAKEN));
            }
            _ => {}
        }

        let door = maze.add_door(Door::new(from, to))?;
        maze.room_no_mut(from)
            .ok_or(MazeError::RoomNotFound(from))?
            .set_side(direction, door);
        maze.room_no_mut(to)
            .ok_or(MazeError::RoomNotFound(to))?
            .set_side(direction.opposite(), door);

        debug!(
            door = door.get(),
            from = from.get(),
            to = to.get(),
            %direction,
            "door installed"
        );
        Ok(())
    }

    fn get_maze(&self) -> Result<&Maze, MazeError> {
        self.current_maze
            .as_ref()
            .ok_or(MazeError::PreconditionViolation(NOT_STARTED))
    }

    fn take_maze(&mut self) -> Result<Maze, MazeError> {
        self.current_maze
            .take()
            .ok_or(MazeError::PreconditionViolation(NOT_STARTED))
    }
}

/// Builder that only tallies the parts a construction sequence would create.
///
/// It never holds a maze, so [`MazeBuilder::get_maze`] and
/// [`MazeBuilder::take_maze`] always fail.
#[derive(Clone, Debug, Default)]
pub struct CountingMazeBuilder {
    started: bool,
    rooms: BTreeSet<RoomNumber>,
    doors: usize,
}

impl CountingMazeBuilder {
    /// Creates an unstarted counting builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            started: false,
            rooms: BTreeSet::new(),
            doors: 0,
        }
    }

    /// Number of distinct rooms and doors counted so far.
    #[must_use]
    pub fn counts(&self) -> (usize, usize) {
        (self.rooms.len(), self.doors)
    }

    fn ensure_started(&self) -> Result<(), MazeError> {
        if self.started {
            Ok(())
        } else {
            Err(MazeError::PreconditionViolation(NOT_STARTED))
        }
    }
}

impl MazeBuilder for CountingMazeBuilder {
    fn build_maze(&mut self) {
        self.started = true;
        self.rooms.clear();
        self.doors = 0;
    }

    fn build_room(&mut self, number: RoomNumber) -> Result<(), MazeError> {
        self.ensure_started()?;
        let _inserted = self.rooms.insert(number);
        Ok(())
    }

    fn build_door(&mut self, from: RoomNumber, to: RoomNumber) -> Result<(), MazeError> {
        self.ensure_started()?;
        for number in [from, to] {
            if !self.rooms.contains(&number) {
                return Err(MazeError::RoomNotFound(number));
            }
        }
        self.doors += 1;
        Ok(())
    }

    fn get_maze(&self) -> Result<&Maze, MazeError> {
        Err(MazeError::PreconditionViolation(
            "counting builders do not assemble a maze",
        ))
    }

    fn take_maze(&mut self) -> Result<Maze, MazeError> {
        Err(MazeError::PreconditionViolation(
            "counting builders do not assemble a maze",
        ))
    }
}
