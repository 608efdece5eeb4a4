//! Equipment catalog service module

mod service;

pub use service::{EquipmentService, EquipmentUpdate, NewEquipment};
