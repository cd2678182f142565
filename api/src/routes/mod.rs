pub mod predict;
pub mod root_route;
