// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt Hardware-Zugriffe hinter Traits bzw. hinter
// konkreten Treiber-Aliasen, um Testbarkeit und Wartbarkeit zu
// verbessern.

pub mod oled;
pub mod status_led;

pub use oled::{StatusDisplay, init_display};
pub use status_led::GpioStatusLed;
