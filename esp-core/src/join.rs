//! WLAN Join-Zustandsautomat
//!
//! Pure Logic ohne Hardware-Dependencies (testbar!). Der Automat wird
//! vom Connection-Task der Firmware mit Events gefüttert; er selbst
//! kennt weder Radio noch Timer.

/// Zustand des WLAN-Joins
///
/// `AuthFailed` und `TimedOut` sind terminal: der Connection-Task
/// beendet sich, alle anderen Tasks laufen weiter (das Gerät ist dann
/// schlicht nicht erreichbar).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinState {
    /// Radio noch nicht konfiguriert/gestartet
    Idle,
    /// Verbindungsversuche laufen
    Connecting {
        /// Gesamtzahl fehlgeschlagener Versuche seit dem letzten Connect
        attempts: u16,
        /// Aufeinanderfolgende Rejections bei sichtbarem Access Point
        rejections: u8,
    },
    /// Assoziiert, Adresse kommt via DHCP
    Connected,
    /// Access Point sichtbar, Assoziation wiederholt abgelehnt:
    /// Zugangsdaten gelten als falsch
    AuthFailed,
    /// Versuchs-Budget aufgebraucht (nur mit endlichem `attempt_limit`)
    TimedOut,
}

/// Event vom Connection-Task an den Automaten
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinEvent {
    /// Radio konfiguriert und gestartet
    Started,
    /// Assoziation erfolgreich
    ConnectOk,
    /// Assoziation abgelehnt obwohl der Ziel-AP im Scan sichtbar war
    ConnectRejected,
    /// Verbindungsversuch fehlgeschlagen (AP nicht sichtbar oder
    /// sonstiger transienter Fehler)
    ConnectError,
    /// Bestehende Verbindung verloren
    LinkLost,
}

/// Grenzwerte für den Automaten
#[derive(Debug, Clone, Copy)]
pub struct JoinPolicy {
    /// Ab so vielen aufeinanderfolgenden Rejections gilt das Passwort
    /// als falsch
    pub rejection_limit: u8,
    /// Maximale Anzahl Verbindungsversuche, `None` = unbegrenzt
    pub attempt_limit: Option<u16>,
}

impl JoinPolicy {
    /// Policy ohne Versuchs-Budget: transiente Fehler werden endlos
    /// wiederholt (Kiosk-Verhalten)
    pub const fn unbounded(rejection_limit: u8) -> Self {
        Self {
            rejection_limit,
            attempt_limit: None,
        }
    }
}

impl JoinState {
    /// Führt eine Zustandstransition aus
    ///
    /// Terminale Zustände absorbieren jedes Event. Ein transienter
    /// Fehler setzt den Rejection-Zähler zurück, damit nur wirklich
    /// aufeinanderfolgende Rejections als Auth-Fehler zählen.
    pub fn on_event(self, event: JoinEvent, policy: &JoinPolicy) -> JoinState {
        match (self, event) {
            (JoinState::Idle, JoinEvent::Started) => JoinState::Connecting {
                attempts: 0,
                rejections: 0,
            },
            (JoinState::Idle, _) => JoinState::Idle,

            (JoinState::Connecting { .. }, JoinEvent::ConnectOk) => JoinState::Connected,
            (
                JoinState::Connecting {
                    attempts,
                    rejections,
                },
                JoinEvent::ConnectRejected,
            ) => {
                let rejections = rejections.saturating_add(1);
                if rejections >= policy.rejection_limit {
                    JoinState::AuthFailed
                } else {
                    Self::retry(attempts, rejections, policy)
                }
            }
            (JoinState::Connecting { attempts, .. }, JoinEvent::ConnectError) => {
                // Rejection-Zähler zurücksetzen: nicht aufeinanderfolgend
                Self::retry(attempts, 0, policy)
            }
            (state @ JoinState::Connecting { .. }, _) => state,

            (JoinState::Connected, JoinEvent::LinkLost) => JoinState::Connecting {
                attempts: 0,
                rejections: 0,
            },
            (JoinState::Connected, _) => JoinState::Connected,

            // Terminal: kein Weg zurück
            (JoinState::AuthFailed, _) => JoinState::AuthFailed,
            (JoinState::TimedOut, _) => JoinState::TimedOut,
        }
    }

    fn retry(attempts: u16, rejections: u8, policy: &JoinPolicy) -> JoinState {
        let attempts = attempts.saturating_add(1);
        match policy.attempt_limit {
            Some(limit) if attempts >= limit => JoinState::TimedOut,
            _ => JoinState::Connecting {
                attempts,
                rejections,
            },
        }
    }

    /// `true` für Zustände, aus denen der Automat nicht mehr herauskommt
    pub fn is_terminal(&self) -> bool {
        matches!(self, JoinState::AuthFailed | JoinState::TimedOut)
    }
}

/// Ordnet einen fehlgeschlagenen Verbindungsversuch ein
///
/// Das Radio meldet eine abgelehnte Assoziation genauso wie einen
/// transienten Fehler. War der Ziel-AP im Scan sichtbar, ist die
/// Ablehnung verdächtig (Passwort); war er unsichtbar, ist das Netz
/// schlicht nicht erreichbar.
pub fn classify_connect_failure(ap_visible: bool) -> JoinEvent {
    if ap_visible {
        JoinEvent::ConnectRejected
    } else {
        JoinEvent::ConnectError
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for JoinState {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            JoinState::Idle => defmt::write!(fmt, "Idle"),
            JoinState::Connecting {
                attempts,
                rejections,
            } => defmt::write!(
                fmt,
                "Connecting {{ attempts: {}, rejections: {} }}",
                attempts,
                rejections
            ),
            JoinState::Connected => defmt::write!(fmt, "Connected"),
            JoinState::AuthFailed => defmt::write!(fmt, "AuthFailed"),
            JoinState::TimedOut => defmt::write!(fmt, "TimedOut"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for JoinEvent {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            JoinEvent::Started => defmt::write!(fmt, "Started"),
            JoinEvent::ConnectOk => defmt::write!(fmt, "ConnectOk"),
            JoinEvent::ConnectRejected => defmt::write!(fmt, "ConnectRejected"),
            JoinEvent::ConnectError => defmt::write!(fmt, "ConnectError"),
            JoinEvent::LinkLost => defmt::write!(fmt, "LinkLost"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POLICY: JoinPolicy = JoinPolicy::unbounded(3);

    #[test]
    fn test_happy_path() {
        let mut state = JoinState::Idle;
        state = state.on_event(JoinEvent::Started, &POLICY);
        assert_eq!(
            state,
            JoinState::Connecting {
                attempts: 0,
                rejections: 0
            }
        );
        state = state.on_event(JoinEvent::ConnectOk, &POLICY);
        assert_eq!(state, JoinState::Connected);
    }

    #[test]
    fn test_rejections_reach_auth_failed() {
        let mut state = JoinState::Connecting {
            attempts: 0,
            rejections: 0,
        };
        state = state.on_event(JoinEvent::ConnectRejected, &POLICY);
        state = state.on_event(JoinEvent::ConnectRejected, &POLICY);
        state = state.on_event(JoinEvent::ConnectRejected, &POLICY);
        assert_eq!(state, JoinState::AuthFailed);
        assert!(state.is_terminal());
    }

    #[test]
    fn test_transient_error_resets_rejections() {
        let mut state = JoinState::Connecting {
            attempts: 0,
            rejections: 2,
        };
        state = state.on_event(JoinEvent::ConnectError, &POLICY);
        assert_eq!(
            state,
            JoinState::Connecting {
                attempts: 1,
                rejections: 0
            }
        );
    }

    #[test]
    fn test_unbounded_policy_never_times_out() {
        let mut state = JoinState::Connecting {
            attempts: 0,
            rejections: 0,
        };
        for _ in 0..1000 {
            state = state.on_event(JoinEvent::ConnectError, &POLICY);
            assert!(!state.is_terminal());
        }
    }
}
