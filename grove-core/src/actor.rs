use crate::attrs::Attributes;

/// Access the engine needs from the entity a tree is evaluated for.
///
/// Actors are owned by the host; the engine never constructs or clones
/// them. All it asks for is the actor's attribute store, which
/// doubles as the engine's own scratch space for per-actor node state. One
/// tree value can therefore serve any number of actors, since every piece of
/// evaluation state lives on the actor side of this trait.
pub trait Actor {
    fn attributes(&self) -> &Attributes;

    fn attributes_mut(&mut self) -> &mut Attributes;
}

/// A bare attribute store is a valid actor. Handy for tests and for hosts
/// whose entities are nothing but their slots.
impl Actor for Attributes {
    fn attributes(&self) -> &Attributes {
        self
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        self
    }
}
