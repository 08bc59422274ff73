#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core object model shared across the maze construction systems.
//!
//! A [`Maze`] owns its [`Room`] values keyed by [`RoomNumber`] and the
//! [`Door`] values that connect them keyed by [`DoorId`]. Each room exposes
//! four sides addressed by [`Direction`], and every side may hold a
//! [`MapSite`]. Doors are registered once in the maze and referenced by
//! identifier from both rooms they connect, so their open state is shared.
//! Every type here is a plain owned value: cloning any of them yields an
//! independent deep copy.

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

/// Cardinal directions a room side can face.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Direction {
    /// Side facing toward the top of the maze.
    North,
    /// Side facing toward the bottom of the maze.
    South,
    /// Side facing toward the right of the maze.
    East,
    /// Side facing toward the left of the maze.
    West,
}

impl Direction {
    /// Every direction in clockwise order starting at north.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Returns the direction facing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        };
        f.write_str(name)
    }
}

/// Number that identifies a room within a maze.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct RoomNumber(u32);

impl RoomNumber {
    /// Creates a new room number with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the room number.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identifier allocated by a maze when a door is registered.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct DoorId(u32);

impl DoorId {
    /// Creates a new door identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the door identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for DoorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "door {}", self.0)
    }
}

/// Failures raised while constructing or traversing a maze.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MazeError {
    /// Movement hit a wall, a closed door or an empty side.
    #[error("entry blocked leaving room {room} toward the {direction}")]
    BlockedEntry {
        /// Room the movement started from.
        room: RoomNumber,
        /// Side of the room that refused entry.
        direction: Direction,
    },
    /// A door was asked about a room it does not connect.
    #[error("room {room} is not connected by {door_rooms:?}")]
    InvalidRoom {
        /// Room supplied by the caller.
        room: RoomNumber,
        /// Endpoints of the door that rejected the room.
        door_rooms: (RoomNumber, RoomNumber),
    },
    /// A room with the same number already exists in the maze.
    #[error("room {0} already exists")]
    DuplicateRoom(RoomNumber),
    /// No room with the requested number exists.
    #[error("room {0} does not exist")]
    RoomNotFound(RoomNumber),
    /// A side references a door the maze does not hold.
    #[error("{0} does not exist")]
    DoorNotFound(DoorId),
    /// Every door identifier has been allocated.
    #[error("door identifiers exhausted")]
    DoorIdsExhausted,
    /// A construction step was invoked out of order.
    #[error("precondition violated: {0}")]
    PreconditionViolation(&'static str),
}

/// Occupant of a room side.
///
/// Rooms and doors are referenced by identity; walls are stored inline since
/// they belong to exactly one side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MapSite {
    /// Side opens directly into another room.
    Room(RoomNumber),
    /// Side is sealed by a wall.
    Wall(Wall),
    /// Side holds a door registered in the maze.
    Door(DoorId),
}

impl MapSite {
    /// Moves from room `from` through its `direction` side onto this site,
    /// returning the room reached.
    pub fn enter<'maze>(
        &self,
        maze: &'maze Maze,
        from: RoomNumber,
        direction: Direction,
    ) -> Result<&'maze Room, MazeError> {
        let destination = match self {
            Self::Room(number) => *number,
            Self::Wall(wall) => wall.enter(from, direction)?,
            Self::Door(id) => maze
                .door(*id)
                .ok_or(MazeError::DoorNotFound(*id))?
                .enter(from, direction)?,
        };
        maze.room_no(destination)
            .ok_or(MazeError::RoomNotFound(destination))?
            .enter()
    }
}

impl From<Wall> for MapSite {
    fn from(wall: Wall) -> Self {
        Self::Wall(wall)
    }
}

impl From<DoorId> for MapSite {
    fn from(door: DoorId) -> Self {
        Self::Door(door)
    }
}

/// Theme applied to a room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoomKind {
    /// Ordinary room.
    #[default]
    Plain,
    /// Room guarded by a spell.
    Enchanted {
        /// Whether the spell left the room locked.
        locked: bool,
    },
    /// Room that may hide a bomb.
    WithBomb {
        /// Whether an unexploded bomb is still present.
        has_bomb: bool,
        /// Whether the room was destroyed by its bomb.
        destroyed: bool,
    },
}

/// Numbered cell with up to four occupied sides.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    number: RoomNumber,
    kind: RoomKind,
    sides: BTreeMap<Direction, MapSite>,
}

impl Room {
    /// Creates a plain room with no sides set.
    #[must_use]
    pub fn new(number: RoomNumber) -> Self {
        Self::with_kind(number, RoomKind::Plain)
    }

    /// Creates a room carrying the provided theme.
    #[must_use]
    pub fn with_kind(number: RoomNumber, kind: RoomKind) -> Self {
        Self {
            number,
            kind,
            sides: BTreeMap::new(),
        }
    }

    /// Creates an enchanted room whose lock state was decided by a spell.
    #[must_use]
    pub fn enchanted(number: RoomNumber, locked: bool) -> Self {
        Self::with_kind(number, RoomKind::Enchanted { locked })
    }

    /// Creates a room holding an armed bomb.
    #[must_use]
    pub fn with_bomb(number: RoomNumber) -> Self {
        Self::with_kind(
            number,
            RoomKind::WithBomb {
                has_bomb: true,
                destroyed: false,
            },
        )
    }

    /// Number identifying the room.
    #[must_use]
    pub const fn number(&self) -> RoomNumber {
        self.number
    }

    /// Theme applied to the room.
    #[must_use]
    pub const fn kind(&self) -> RoomKind {
        self.kind
    }

    /// Returns the site occupying the side facing `direction`.
    #[must_use]
    pub fn get_side(&self, direction: Direction) -> Option<&MapSite> {
        self.sides.get(&direction)
    }

    /// Places `site` on the side facing `direction`, replacing any occupant.
    pub fn set_side(&mut self, direction: Direction, site: impl Into<MapSite>) {
        let _replaced = self.sides.insert(direction, site.into());
    }

    /// Iterates over the occupied sides in direction order.
    pub fn sides(&self) -> impl Iterator<Item = (Direction, &MapSite)> {
        self.sides.iter().map(|(direction, site)| (*direction, site))
    }

    /// Entering a room always succeeds and lands in the room itself.
    pub fn enter(&self) -> Result<&Self, MazeError> {
        Ok(self)
    }

    /// Rebinds the room number of a cloned prototype, keeping its sides.
    pub fn initialize(&mut self, number: RoomNumber) {
        self.number = number;
    }

    /// Reports whether an enchanted room is locked.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        matches!(self.kind, RoomKind::Enchanted { locked: true })
    }

    /// Lifts the spell on an enchanted room.
    ///
    /// Returns `false` when the room is not enchanted.
    pub fn unlock(&mut self) -> bool {
        match &mut self.kind {
            RoomKind::Enchanted { locked } => {
                *locked = false;
                true
            }
            _ => false,
        }
    }

    /// Sets off the bomb hidden in the room.
    ///
    /// Returns `false` when the room holds no armed bomb.
    pub fn detonate(&mut self) -> bool {
        match &mut self.kind {
            RoomKind::WithBomb {
                has_bomb,
                destroyed,
            } if *has_bomb => {
                *has_bomb = false;
                *destroyed = true;
                true
            }
            _ => false,
        }
    }
}

/// Theme applied to a wall.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WallKind {
    /// Ordinary wall.
    #[default]
    Plain,
    /// Wall that can be blown up.
    Bombed {
        /// Whether the wall has been blown up.
        destroyed: bool,
    },
}

/// Impassable site sealing a room side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Wall {
    kind: WallKind,
}

impl Wall {
    /// Creates a plain wall.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            kind: WallKind::Plain,
        }
    }

    /// Creates an intact bombed wall.
    #[must_use]
    pub const fn bombed() -> Self {
        Self {
            kind: WallKind::Bombed { destroyed: false },
        }
    }

    /// Theme applied to the wall.
    #[must_use]
    pub const fn kind(&self) -> WallKind {
        self.kind
    }

    /// Walls never admit entry, whatever their theme.
    ///
    /// A destroyed bombed wall still blocks: detonation only records the
    /// damage and never opens a passage. Replace the side with a door or a
    /// [`MapSite::Room`] to connect rooms.
    pub fn enter(&self, from: RoomNumber, direction: Direction) -> Result<RoomNumber, MazeError> {
        Err(MazeError::BlockedEntry {
            room: from,
            direction,
        })
    }

    /// Blows up a bombed wall.
    ///
    /// Returns `false` when the wall is plain or already destroyed. The wall
    /// keeps blocking entry afterwards; see [`Wall::enter`].
    pub fn detonate(&mut self) -> bool {
        match &mut self.kind {
            WallKind::Bombed { destroyed } if !*destroyed => {
                *destroyed = true;
                true
            }
            _ => false,
        }
    }
}

/// Site connecting exactly two rooms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Door {
    room1: RoomNumber,
    room2: RoomNumber,
    open: bool,
}

impl Door {
    /// Creates a closed door between the two rooms.
    #[must_use]
    pub const fn new(room1: RoomNumber, room2: RoomNumber) -> Self {
        Self {
            room1,
            room2,
            open: false,
        }
    }

    /// Endpoints of the door in creation order.
    #[must_use]
    pub const fn rooms(&self) -> (RoomNumber, RoomNumber) {
        (self.room1, self.room2)
    }

    /// Reports whether the door is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Opens the door.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Closes the door.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Returns the room on the far side of `room`.
    pub fn other_side_from(&self, room: RoomNumber) -> Result<RoomNumber, MazeError> {
        if room == self.room1 {
            Ok(self.room2)
        } else if room == self.room2 {
            Ok(self.room1)
        } else {
            Err(MazeError::InvalidRoom {
                room,
                door_rooms: self.rooms(),
            })
        }
    }

    /// Passes through the door from room `from`, whose `direction` side
    /// holds the door, yielding the room reached.
    pub fn enter(&self, from: RoomNumber, direction: Direction) -> Result<RoomNumber, MazeError> {
        let destination = self.other_side_from(from)?;
        if !self.open {
            return Err(MazeError::BlockedEntry {
                room: from,
                direction,
            });
        }
        Ok(destination)
    }

    /// Rebinds the endpoints of a cloned prototype, keeping its open state.
    pub fn initialize(&mut self, room1: RoomNumber, room2: RoomNumber) {
        self.room1 = room1;
        self.room2 = room2;
    }
}

/// Collection of rooms and the doors connecting them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maze {
    rooms: BTreeMap<RoomNumber, Room>,
    doors: BTreeMap<DoorId, Door>,
    next_door_id: DoorId,
}

impl Maze {
    /// Creates an empty maze.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rooms: BTreeMap::new(),
            doors: BTreeMap::new(),
            next_door_id: DoorId::new(0),
        }
    }

    /// Inserts a room, rejecting numbers that are already taken.
    pub fn add_room(&mut self, room: Room) -> Result<(), MazeError> {
        let number = room.number();
        if self.rooms.contains_key(&number) {
            return Err(MazeError::DuplicateRoom(number));
        }
        let _vacant = self.rooms.insert(number, room);
        Ok(())
    }

    /// Looks up a room by number.
    #[must_use]
    pub fn room_no(&self, number: RoomNumber) -> Option<&Room> {
        self.rooms.get(&number)
    }

    /// Looks up a room by number for mutation.
    #[must_use]
    pub fn room_no_mut(&mut self, number: RoomNumber) -> Option<&mut Room> {
        self.rooms.get_mut(&number)
    }

    /// Registers a door and returns the identifier rooms use to reference it.
    ///
    /// Identifiers are never reused; once `u32::MAX` would be handed out the
    /// maze refuses further doors with [`MazeError::DoorIdsExhausted`].
    pub fn add_door(&mut self, door: Door) -> Result<DoorId, MazeError> {
        let id = self.next_door_id;
        let next = id
            .get()
            .checked_add(1)
            .ok_or(MazeError::DoorIdsExhausted)?;
        self.next_door_id = DoorId::new(next);
        let _vacant = self.doors.insert(id, door);
        Ok(id)
    }

    /// Looks up a registered door.
    #[must_use]
    pub fn door(&self, id: DoorId) -> Option<&Door> {
        self.doors.get(&id)
    }

    /// Looks up a registered door for mutation.
    #[must_use]
    pub fn door_mut(&mut self, id: DoorId) -> Option<&mut Door> {
        self.doors.get_mut(&id)
    }

    /// Iterates over the rooms in ascending number order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// Iterates over the registered doors in allocation order.
    pub fn doors(&self) -> impl Iterator<Item = (DoorId, &Door)> {
        self.doors.iter().map(|(id, door)| (*id, door))
    }

    /// Number of rooms held by the maze.
    #[must_use]
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Number of doors registered in the maze.
    #[must_use]
    pub fn door_count(&self) -> usize {
        self.doors.len()
    }

    /// Moves out of room `from` through the side facing `direction`.
    pub fn enter(&self, from: RoomNumber, direction: Direction) -> Result<&Room, MazeError> {
        let room = self.room_no(from).ok_or(MazeError::RoomNotFound(from))?;
        let site = room.get_side(direction).ok_or(MazeError::BlockedEntry {
            room: from,
            direction,
        })?;
        site.enter(self, from, direction)
    }
}
