pub mod alert;
pub mod clock;
pub mod config;
pub mod controls;
pub mod countdown;
pub mod screen;
pub mod sfx;
