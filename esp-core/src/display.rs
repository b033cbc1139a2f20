//! Rendering des IP-Status-Screens
//!
//! Zeichnet über das `DrawTarget`-Trait, damit dieselbe Routine gegen
//! das echte Panel und gegen einen In-Memory-Framebuffer in Tests
//! läuft.

use embedded_graphics::{
    mono_font::{MonoTextStyle, ascii::FONT_6X10},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};

/// Titelzeile über der Adresse
pub const TITLE: &str = "IP Address";

/// Angezeigte Adresse solange DHCP noch keine vergeben hat
pub const NO_ADDRESS: &str = "0.0.0.0";

/// Vertikaler Abstand der zweiten Zeile (FONT_6X10 plus Luft)
pub const LINE_HEIGHT: i32 = 12;

/// Zeichnet den kompletten Status-Screen in den Buffer
///
/// Löscht zuerst den gesamten Inhalt und zeichnet dann Titel und
/// Adresse neu; zweimaliges Rendern mit derselben Adresse erzeugt
/// exakt denselben Buffer. Der Aufrufer ist für das anschließende
/// Flush zur Hardware zuständig.
pub fn draw_ip_screen<D>(target: &mut D, address: &str) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)?;

    let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
    Text::with_baseline(TITLE, Point::zero(), style, Baseline::Top).draw(target)?;
    Text::with_baseline(address, Point::new(0, LINE_HEIGHT), style, Baseline::Top)
        .draw(target)?;

    Ok(())
}
