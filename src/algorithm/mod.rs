/// Depth-first backtracker carving
pub mod backtracker;
/// Dead-end braiding pass
pub mod braid;
/// Shared carving driver and step events
pub mod carving;
/// Generator instance tying the stages together
pub mod generator;
/// Uniform-cost shortest-path search
pub mod pathfinding;
/// Randomized Prim carving
pub mod prim;
/// Owned, reseedable random source
pub mod random;
