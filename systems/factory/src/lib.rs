#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Abstract factories that produce themed maze parts.
//!
//! Assembly code asks a [`MazeFactory`] for every part it needs and never
//! names a concrete theme. Swapping [`StandardMazeFactory`] for
//! [`EnchantedMazeFactory`] or [`BombedMazeFactory`] changes which room and
//! wall variants end up in the maze without touching the assembly.

use maze_forge_core::{Door, Maze, Room, RoomNumber, Wall};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::trace;

/// Family of creation operations for maze parts.
///
/// Every method defaults to the plain variant, so themed factories only
/// override the parts they change. Methods take `&mut self` so factories may
/// carry stateful policies such as a random spell source.
pub trait MazeFactory {
    /// Creates an empty maze.
    fn make_maze(&mut self) -> Maze {
        Maze::new()
    }

    /// Creates a wall.
    fn make_wall(&mut self) -> Wall {
        Wall::new()
    }

    /// Creates a room with no sides set.
    fn make_room(&mut self, number: RoomNumber) -> Room {
        Room::new(number)
    }

    /// Creates a closed door connecting the two rooms.
    fn make_door(&mut self, room1: &Room, room2: &Room) -> Door {
        Door::new(room1.number(), room2.number())
    }
}

/// Factory producing plain rooms, walls and doors.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardMazeFactory;

impl MazeFactory for StandardMazeFactory {}

/// Policy deciding whether a freshly enchanted room starts locked.
pub trait Spell {
    /// Casts the spell, returning `true` when the room should be locked.
    fn cast_spell(&mut self) -> bool;
}

impl<F> Spell for F
where
    F: FnMut() -> bool,
{
    fn cast_spell(&mut self) -> bool {
        self()
    }
}

/// Spell that always produces the same lock state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedSpell {
    locked: bool,
}

impl FixedSpell {
    /// Creates a spell that always yields `locked`.
    #[must_use]
    pub const fn new(locked: bool) -> Self {
        Self { locked }
    }
}

impl Spell for FixedSpell {
    fn cast_spell(&mut self) -> bool {
        self.locked
    }
}

/// Spell that locks rooms at random from a reproducible seed.
#[derive(Clone, Debug)]
pub struct SeededSpell {
    rng: ChaCha8Rng,
}

impl SeededSpell {
    /// Creates a spell whose lock sequence is fully determined by `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Spell for SeededSpell {
    fn cast_spell(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}

/// Factory producing enchanted rooms locked according to a [`Spell`].
#[derive(Clone, Debug)]
pub struct EnchantedMazeFactory<S> {
    spell: S,
}

impl<S: Spell> EnchantedMazeFactory<S> {
    /// Creates a factory that consults `spell` for every room it makes.
    #[must_use]
    pub fn new(spell: S) -> Self {
        Self { spell }
    }

    fn cast_spell(&mut self) -> bool {
        self.spell.cast_spell()
    }
}

impl<S: Spell> MazeFactory for EnchantedMazeFactory<S> {
    fn make_room(&mut self, number: RoomNumber) -> Room {
        let locked = self.cast_spell();
        trace!(room = number.get(), locked, "enchanted room created");
        Room::enchanted(number, locked)
    }
}

/// Factory producing rooms with bombs and walls that can be blown up.
#[derive(Clone, Copy, Debug, Default)]
pub struct BombedMazeFactory;

impl MazeFactory for BombedMazeFactory {
    fn make_wall(&mut self) -> Wall {
        Wall::bombed()
    }

    fn make_room(&mut self, number: RoomNumber) -> Room {
        Room::with_bomb(number)
    }
}
