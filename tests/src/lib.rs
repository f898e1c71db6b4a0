//! End-to-end scenarios for the creational pattern demos.

mod gardens;
mod houses;
