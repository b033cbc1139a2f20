// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

// ============================================================================
// WiFi Konfiguration
// ============================================================================

/// WiFi SSID (Netzwerk-Name)
/// Wird zur Build-Zeit aus der Environment Variable WIFI_SSID geladen
/// Setze diese in .env file (siehe .env.example)
pub const WIFI_SSID: &str = env!(
    "WIFI_SSID",
    "WiFi SSID nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// WiFi Passwort
/// Wird zur Build-Zeit aus der Environment Variable WIFI_PASSWORD geladen
/// Setze diese in .env file (siehe .env.example)
pub const WIFI_PASSWORD: &str = env!(
    "WIFI_PASSWORD",
    "WiFi Password nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// Heap-Größe für WiFi (Bytes)
/// WiFi benötigt dynamischen Speicher für Pakete
pub const WIFI_HEAP_SIZE: usize = 65536; // 64 KB

/// Zusätzliche Heap-Größe (Bytes)
pub const EXTRA_HEAP_SIZE: usize = 36864; // 36 KB

// Gesamt-Heap: ~100 KB für WiFi-Stack

/// Wartezeit nach fehlgeschlagenem Verbindungsversuch in Sekunden
pub const WIFI_RETRY_DELAY_SECS: u64 = 5;

/// Wartezeit nach Verbindungsverlust vor dem Rejoin in Sekunden
pub const WIFI_REJOIN_DELAY_SECS: u64 = 2;

/// Ab so vielen aufeinanderfolgenden Rejections bei sichtbarem AP
/// gilt das Passwort als falsch und der Join gibt endgültig auf
pub const WIFI_REJECTION_LIMIT: u8 = 3;

/// Maximale Anzahl Verbindungsversuche für transiente Fehler
/// None = unbegrenzt weiterprobieren (Kiosk-Verhalten)
pub const WIFI_ATTEMPT_LIMIT: Option<u16> = None;

// ============================================================================
// mDNS-Konfiguration
// ============================================================================

/// mDNS Hostname (ohne .local suffix)
/// Das Gerät wird erreichbar sein unter: <MDNS_HOSTNAME>.local
pub const MDNS_HOSTNAME: &str = "esp8266";

/// mDNS TTL (Time To Live) in Sekunden
/// Gibt an, wie lange andere Geräte die mDNS-Antwort cachen dürfen
pub const MDNS_TTL_SECS: u32 = 120;

/// mDNS Reconnect Delay in Sekunden
/// Wartezeit nach Fehler vor erneutem Versuch
pub const MDNS_RECONNECT_DELAY_SECS: u64 = 5;

/// mDNS Port (Standard: 5353)
/// Multicast DNS nutzt Port 5353 laut RFC 6762
pub const MDNS_PORT: u16 = 5353;

/// mDNS IPv4 Multicast-Adresse (224.0.0.251)
/// Standard mDNS Multicast-Gruppe laut RFC 6762
pub const MDNS_MULTICAST_ADDR: [u8; 4] = [224, 0, 0, 251];

/// UDP Buffer-Größen für mDNS (TX, RX in Bytes)
/// edge-nal-embassy benötigt Buffer für UDP-Pakete
pub const MDNS_UDP_BUFFER_SIZE: usize = 512;

/// mDNS Receive/Send Buffer-Größen in Bytes
/// 1500 Bytes = Standard MTU für Ethernet/WiFi
pub const MDNS_PACKET_BUFFER_SIZE: usize = 1500;

// ============================================================================
// HTTP Server Konfiguration
// ============================================================================

/// TCP-Port des HTTP-Servers
pub const HTTP_PORT: u16 = 80;

/// Anzahl gleichzeitig bedienter Connections (Server-interner Pool)
pub const HTTP_MAX_CONNECTIONS: usize = 4;

/// HTTP Buffer-Größe in Bytes
/// Für HTTP Request/Response Headers
pub const HTTP_BUFFER_SIZE: usize = 1024;

/// Maximale Anzahl geparster Request-Header
pub const HTTP_MAX_HEADERS: usize = 32;

/// TCP RX Buffer-Größe in Bytes
/// Für eingehende TCP-Daten vom Client
pub const TCP_RX_BUFFER_SIZE: usize = 1024;

/// TCP TX Buffer-Größe in Bytes
/// Für ausgehende TCP-Daten zum Client
pub const TCP_TX_BUFFER_SIZE: usize = 1024;

/// Timeout pro Request in Millisekunden
pub const HTTP_REQUEST_TIMEOUT_MS: u32 = 50_000;

/// Wartezeit nach Bind-Fehler in Sekunden
pub const HTTP_RETRY_DELAY_SECS: u64 = 5;

/// Puffer für den Diagnose-Körper der 404-Antwort
/// Reicht für URI, Methode und eine Handvoll Query-Argumente
pub const NOT_FOUND_BODY_SIZE: usize = 512;

// ============================================================================
// Display Konfiguration
// ============================================================================

/// I2C-Adresse des SSD1306 Panels
/// 0x3C ist der übliche Wert; manche Module nutzen 0x3D
pub const DISPLAY_I2C_ADDRESS: u8 = 0x3C;

/// I2C Taktfrequenz in kHz
/// 400 kHz Fast Mode, vom SSD1306 problemlos unterstützt
pub const DISPLAY_I2C_FREQ_KHZ: u32 = 400;

/// Redraw-Intervall in Millisekunden
/// Der Screen wird jede Iteration komplett neu gezeichnet,
/// auch wenn sich die Adresse nicht geändert hat
pub const DISPLAY_REFRESH_MS: u64 = 1000;

/// Puffer für die formatierte IPv4-Adresse ("255.255.255.255")
pub const IP_STRING_SIZE: usize = 16;

// ============================================================================
// Netzwerk-Stack Konfiguration
// ============================================================================

/// Socket-Anzahl für embassy-net
/// 4x HTTP (TCP) + mDNS (UDP) + DHCP (UDP) + DNS + Reserve
pub const STACK_SOCKET_COUNT: usize = 8;
