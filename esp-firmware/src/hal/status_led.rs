// Status-LED hinter dem StatusLed-Trait
//
// Der Root-Handler des HTTP-Servers schaltet die LED während der
// Bearbeitung ein; über das Trait lässt sich die Logik gegen einen
// Mock testen.

use esp_core::{LedError, StatusLed};
use esp_hal::gpio::Output;

/// Status-LED auf einem GPIO Output-Pin
pub struct GpioStatusLed {
    pin: Output<'static>,
}

impl GpioStatusLed {
    /// Übernimmt den fertig konfigurierten Pin (Level::Low = aus)
    pub fn new(pin: Output<'static>) -> Self {
        Self { pin }
    }
}

impl StatusLed for GpioStatusLed {
    fn set(&mut self, on: bool) -> Result<(), LedError> {
        // GPIO-Schreibzugriffe auf esp-hal sind infallibel
        if on {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
        Ok(())
    }
}
