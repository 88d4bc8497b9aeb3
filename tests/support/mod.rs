#![allow(dead_code)]

pub mod mock_field;
pub mod mock_surface;
