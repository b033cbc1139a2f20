// Display Task - Zeichnet die IP-Adresse auf das OLED
use core::fmt::Write as FmtWrite;

use defmt::{Debug2Format, info, warn};
use embassy_net::Stack;
use embassy_time::{Duration, Timer};
use heapless::String;

use esp_core::display::{NO_ADDRESS, draw_ip_screen};

use crate::config::{DISPLAY_REFRESH_MS, IP_STRING_SIZE};
use crate::hal::StatusDisplay;

/// Display Task
///
/// Zeichnet jede Iteration denselben Screen komplett neu, unabhängig
/// davon ob sich die Adresse geändert hat. Solange DHCP noch keine
/// Adresse geliefert hat, steht dort die Default-Adresse.
///
/// Das Panel ist zu diesem Zeitpunkt bereits initialisiert (main()
/// hält bei einem Init-Fehler an); Zeichen- und Flush-Fehler im
/// laufenden Betrieb werden nur geloggt.
///
/// # Parameter
/// - `display`: initialisiertes SSD1306 Panel (exklusiv owned)
/// - `stack`: embassy-net Stack, liefert die aktuelle IPv4-Adresse
#[embassy_executor::task]
pub async fn display_task(mut display: StatusDisplay, stack: &'static Stack<'static>) {
    info!("Display: Task started");

    loop {
        // Adresse jede Iteration frisch vom Stack holen, kein Caching
        let mut address: String<IP_STRING_SIZE> = String::new();
        match stack.config_v4() {
            Some(config) => {
                let _ = write!(address, "{}", config.address.address());
            }
            None => {
                let _ = address.push_str(NO_ADDRESS);
            }
        }

        if let Err(e) = draw_ip_screen(&mut display, &address) {
            warn!("Display: Draw failed: {}", Debug2Format(&e));
        } else if let Err(e) = display.flush() {
            warn!("Display: Flush failed: {}", Debug2Format(&e));
        }

        Timer::after(Duration::from_millis(DISPLAY_REFRESH_MS)).await;
    }
}
