//! Core planner plumbing shared by the designer and the front-end.

pub mod event;
