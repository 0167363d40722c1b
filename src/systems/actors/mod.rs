//! Actors - dynamic bodies owned by the host physics engine.
//!
//! The engine only tracks what the grid needs: a position and a shape per
//! actor, pushed by the host each frame. Once per tick the actors shove
//! overlapping Sand out of the way (see `interaction`).

mod interaction;
mod shape;
mod vec2;

pub use interaction::DISPLACEMENT_OFFSETS;
pub use shape::{ActorBounds, ActorShape};
pub use vec2::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Actor {
    pub id: u32,
    pub position: Vec2,
    pub shape: ActorShape,
}

impl Actor {
    pub fn bounds(&self) -> Option<ActorBounds> {
        ActorBounds::around(self.position, self.shape)
    }
}

/// Registry of actors, iterated in spawn order.
pub struct ActorSystem {
    actors: Vec<Actor>,
    next_id: u32,
    /// Sand cells collected under the current actor.
    scratch: Vec<(i32, i32)>,
}

impl ActorSystem {
    pub fn new() -> Self {
        Self {
            actors: Vec::new(),
            next_id: 1,
            scratch: Vec::new(),
        }
    }

    /// Track a new actor. Ids start at 1 and are never reused.
    pub fn spawn(&mut self, position: Vec2, shape: ActorShape) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        self.actors.push(Actor { id, position, shape });
        id
    }

    pub fn remove(&mut self, id: u32) -> bool {
        match self.actors.iter().position(|a| a.id == id) {
            Some(idx) => {
                self.actors.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn set_position(&mut self, id: u32, position: Vec2) -> bool {
        match self.get_mut(id) {
            Some(actor) => {
                actor.position = position;
                true
            }
            None => false,
        }
    }

    pub fn set_shape(&mut self, id: u32, shape: ActorShape) -> bool {
        match self.get_mut(id) {
            Some(actor) => {
                actor.shape = shape;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: u32) -> Option<&Actor> {
        self.actors.iter().find(|a| a.id == id)
    }

    fn get_mut(&mut self, id: u32) -> Option<&mut Actor> {
        self.actors.iter_mut().find(|a| a.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Actor> {
        self.actors.iter()
    }

    pub fn count(&self) -> usize {
        self.actors.len()
    }

    /// Drop every actor. Ids keep counting up.
    pub fn clear(&mut self) {
        self.actors.clear();
    }
}

impl Default for ActorSystem {
    fn default() -> Self {
        Self::new()
    }
}
