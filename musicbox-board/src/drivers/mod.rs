pub mod buzzer;
pub mod leds;
pub mod panel;
pub mod volume;
