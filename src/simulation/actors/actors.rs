use crate::actors::{ActorShape, Vec2};

use super::WorldCore;

pub(super) fn spawn_actor(world: &mut WorldCore, position: Vec2, shape: ActorShape) -> u32 {
    let id = world.actors.spawn(position, shape);
    log::debug!("actor {id} spawned at ({}, {}) as {:?}", position.x, position.y, shape);
    id
}

pub(super) fn set_actor_position(world: &mut WorldCore, id: u32, position: Vec2) -> bool {
    world.actors.set_position(id, position)
}

pub(super) fn set_actor_shape(world: &mut WorldCore, id: u32, shape: ActorShape) -> bool {
    world.actors.set_shape(id, shape)
}

pub(super) fn remove_actor(world: &mut WorldCore, id: u32) -> bool {
    let removed = world.actors.remove(id);
    if !removed {
        log::warn!("remove_actor: unknown actor {id}");
    }
    removed
}
