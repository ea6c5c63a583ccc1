// Gourd Fight: entity state machine and combat resolution for a 2D
// side-view fighting game. Rendering, input plumbing and asset loading live
// outside this crate; entities only report a state and a facing.

pub mod game;
