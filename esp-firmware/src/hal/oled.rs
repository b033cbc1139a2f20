// SSD1306 Status-Display über I2C
//
// Kapselt den konkreten Treiber-Typ; das eigentliche Rendering läuft
// trait-basiert in esp-core und kennt diesen Typ nicht.

use esp_hal::Blocking;
use esp_hal::i2c::master::I2c;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};

use crate::config::DISPLAY_I2C_ADDRESS;

/// Konkreter Treiber-Typ des Panels
///
/// Embassy Tasks können nicht generisch sein, daher bekommt der
/// Display-Task diesen Alias statt eines Trait-Parameters.
pub type StatusDisplay = Ssd1306<
    I2CInterface<I2c<'static, Blocking>>,
    DisplaySize128x64,
    BufferedGraphicsMode<DisplaySize128x64>,
>;

/// Initialisiert das Panel im Buffered-Graphics-Modus
///
/// # Fehlerbehandlung
/// Ein Init-Fehler ist fatal: main() hält das Gerät daraufhin an,
/// weil das Display der einzige Feedback-Kanal für den Operator ist.
pub fn init_display(i2c: I2c<'static, Blocking>) -> Result<StatusDisplay, DisplayError> {
    let interface = I2CDisplayInterface::new_custom_address(i2c, DISPLAY_I2C_ADDRESS);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    display.init()?;
    Ok(display)
}
