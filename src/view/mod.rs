pub(crate) mod events;
pub(crate) mod link;
pub(crate) mod node;
