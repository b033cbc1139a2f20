// WiFi Task - Verbindet mit WLAN und managed Connection
use defmt::{Debug2Format, error, info, warn};
use embassy_net::{Runner, Stack};
use embassy_time::{Duration, Timer};
use esp_radio::wifi::{ClientConfig, ModeConfig, ScanConfig, WifiController, WifiDevice};

use esp_core::{JoinEvent, JoinPolicy, JoinState, classify_connect_failure};

use crate::config::{
    WIFI_ATTEMPT_LIMIT, WIFI_PASSWORD, WIFI_REJECTION_LIMIT, WIFI_REJOIN_DELAY_SECS,
    WIFI_RETRY_DELAY_SECS, WIFI_SSID,
};

/// WiFi Connection Task
///
/// Treibt den Join-Zustandsautomaten aus esp-core gegen das Radio:
/// - Konfiguriert Station-Modus und startet das Radio
/// - Scannt nach dem Ziel-AP und verbindet
/// - Reconnected nach Verbindungsverlust
///
/// Terminale Zustände beenden den Task: bei `AuthFailed` (Passwort
/// wiederholt abgelehnt) wird geloggt und aufgegeben, alle anderen
/// Tasks laufen weiter. Transiente Fehler werden mit der
/// Default-Policy endlos wiederholt.
#[embassy_executor::task]
pub async fn connection_task(mut controller: WifiController<'static>) {
    info!("WiFi: Starting connection task");

    let policy = JoinPolicy {
        rejection_limit: WIFI_REJECTION_LIMIT,
        attempt_limit: WIFI_ATTEMPT_LIMIT,
    };
    let mut state = JoinState::Idle;

    loop {
        state = match state {
            JoinState::Idle => {
                info!("WiFi: Configuring and starting...");

                // Configure WiFi station mode
                let client_config = ModeConfig::Client(
                    ClientConfig::default()
                        .with_ssid(WIFI_SSID.into())
                        .with_password(WIFI_PASSWORD.into()),
                );

                if let Err(e) = controller.set_config(&client_config) {
                    error!("WiFi: Failed to set configuration: {}", Debug2Format(&e));
                    Timer::after(Duration::from_secs(WIFI_RETRY_DELAY_SECS)).await;
                    continue;
                }

                if let Err(e) = controller.start_async().await {
                    error!("WiFi: Failed to start: {}", Debug2Format(&e));
                    Timer::after(Duration::from_secs(WIFI_RETRY_DELAY_SECS)).await;
                    continue;
                }

                info!("WiFi: Started successfully");
                state.on_event(JoinEvent::Started, &policy)
            }

            JoinState::Connecting { attempts, .. } => {
                let ap_visible = target_visible(&mut controller).await;

                info!(
                    "WiFi: Connecting to '{}' (attempt {})...",
                    WIFI_SSID,
                    attempts + 1
                );
                let event = match controller.connect_async().await {
                    Ok(_) => {
                        info!("WiFi: Connected successfully!");
                        JoinEvent::ConnectOk
                    }
                    Err(e) => {
                        error!("WiFi: Connection failed: {}", Debug2Format(&e));
                        Timer::after(Duration::from_secs(WIFI_RETRY_DELAY_SECS)).await;
                        classify_connect_failure(ap_visible)
                    }
                };
                state.on_event(event, &policy)
            }

            JoinState::Connected => {
                // Wait for disconnect
                info!("WiFi: Waiting for disconnect event...");
                controller
                    .wait_for_event(esp_radio::wifi::WifiEvent::StaDisconnected)
                    .await;
                warn!("WiFi: Disconnected from AP, will rejoin...");

                Timer::after(Duration::from_secs(WIFI_REJOIN_DELAY_SECS)).await;
                state.on_event(JoinEvent::LinkLost, &policy)
            }

            JoinState::AuthFailed => {
                error!(
                    "WiFi: '{}' rejected the credentials repeatedly, check WIFI_PASSWORD. Giving up.",
                    WIFI_SSID
                );
                return;
            }

            JoinState::TimedOut => {
                error!("WiFi: Connection attempt budget exhausted. Giving up.");
                return;
            }
        };
    }
}

/// Prüft per Scan, ob der Ziel-AP gerade sichtbar ist
///
/// Ein sichtbarer AP plus abgelehnte Assoziation deutet auf falsche
/// Zugangsdaten; ein Scan-Fehler zählt als unsichtbar, damit daraus
/// nie ein Auth-Fehler wird.
async fn target_visible(controller: &mut WifiController<'static>) -> bool {
    match controller
        .scan_with_config_async(ScanConfig::default())
        .await
    {
        Ok(ap_infos) => match ap_infos.iter().find(|ap| ap.ssid.as_str() == WIFI_SSID) {
            Some(ap) => {
                info!(
                    "WiFi: Target AP found - SSID: {}, Signal: {} dBm",
                    WIFI_SSID, ap.signal_strength
                );
                true
            }
            None => false,
        },
        Err(e) => {
            warn!("WiFi: Scan failed: {}", Debug2Format(&e));
            false
        }
    }
}

/// Network Task
///
/// Prozessiert Netzwerk-Pakete und managed den TCP/IP Stack
#[embassy_executor::task]
pub async fn net_task(mut runner: Runner<'static, WifiDevice<'static>>) -> ! {
    runner.run().await
}

/// DHCP Monitor Task
///
/// Wartet bis eine IP-Adresse vom DHCP-Server erhalten wurde
/// und loggt dann die Netzwerk-Konfiguration
#[embassy_executor::task]
pub async fn dhcp_task(stack: &'static Stack<'static>) {
    loop {
        if stack.is_link_up() {
            break;
        }
        Timer::after(Duration::from_millis(500)).await;
    }

    info!("WiFi: Link is up, waiting for IP address...");

    loop {
        if let Some(config) = stack.config_v4() {
            info!("WiFi: Got IP address!");
            info!("  IP:      {}", Debug2Format(&config.address.address()));
            info!("  Gateway: {}", Debug2Format(&config.gateway));
            info!("  DNS:     {}", Debug2Format(&config.dns_servers));
            break;
        }
        Timer::after(Duration::from_millis(500)).await;
    }
}
