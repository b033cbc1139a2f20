//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    WriteFailed,
}

/// Trait für die Status-LED
///
/// Abstrahiert den Zugriff auf den Anzeige-Pin, den der Root-Handler
/// während der Bearbeitung einschaltet.
///
/// # Implementierungen
/// - **Production:** GpioStatusLed (esp-hal GPIO Output)
/// - **Testing:** MockStatusLed (in-memory Mock)
pub trait StatusLed: Send {
    /// Schaltet die LED ein oder aus
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn set(&mut self, on: bool) -> Result<(), LedError>;
}
