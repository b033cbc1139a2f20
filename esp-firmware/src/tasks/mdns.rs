// mDNS Responder Task - Advertised Hostname via Multicast DNS
//
// Implementiert einen mDNS Responder nach RFC 6762: das Gerät wird
// unter <MDNS_HOSTNAME>.local im lokalen Netz auflösbar, ohne dass
// ein DNS-Server benötigt wird.
//
// - Transport: UDP Multicast auf 224.0.0.251:5353
// - Antworten: A-Records (Hostname → IPv4), TTL siehe config.rs
// - Library: edge-mdns mit edge-nal-embassy als embassy-net Adapter
//
// Best-effort: jeder Fehler wird geloggt und nach einer Wartezeit neu
// gestartet; der HTTP-Server bleibt über die rohe IP erreichbar.

use defmt::{Debug2Format, error, info, warn};
use embassy_net::Stack;
use embassy_time::{Duration, Timer};

use core::net::{Ipv4Addr, SocketAddr};
use core::sync::atomic::{AtomicU32, Ordering};

use edge_mdns::{HostAnswersMdnsHandler, buf::VecBufAccess, domain::base::Ttl, host::Host, io};
use edge_nal::{MulticastV4, UdpBind, UdpSplit};
use edge_nal_embassy::{Udp, UdpBuffers};
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::signal::Signal;

use crate::config::{
    MDNS_HOSTNAME, MDNS_MULTICAST_ADDR, MDNS_PACKET_BUFFER_SIZE, MDNS_PORT,
    MDNS_RECONNECT_DELAY_SECS, MDNS_TTL_SECS, MDNS_UDP_BUFFER_SIZE,
};

/// Zähler für den mDNS Transaction-ID-Generator
static RNG_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Pseudo-Zufallszahlen für edge-mdns
///
/// Ein wrapping counter reicht: mDNS braucht nur Eindeutigkeit der
/// Transaction IDs, keine kryptographische Qualität.
fn mdns_rng(buf: &mut [u8]) {
    let mut counter = RNG_COUNTER.fetch_add(1, Ordering::Relaxed);
    for chunk in buf.chunks_mut(4) {
        let bytes = counter.to_le_bytes();
        let len = chunk.len().min(4);
        chunk[..len].copy_from_slice(&bytes[..len]);
        counter = counter.wrapping_add(1);
    }
}

/// mDNS Responder Task
///
/// Wartet auf Link und DHCP-Adresse und beantwortet dann mDNS-Queries
/// für `<MDNS_HOSTNAME>.local`. Registrierungs- und Socket-Fehler
/// sind nicht fatal: loggen, MDNS_RECONNECT_DELAY_SECS warten, neu
/// versuchen.
#[embassy_executor::task]
pub async fn mdns_responder_task(stack: &'static Stack<'static>) {
    info!("mDNS: Task started, waiting for network...");
    wait_for_network(stack).await;
    info!("mDNS: Network ready");

    loop {
        match run_responder(stack).await {
            Ok(_) => warn!("mDNS: Responder stopped normally"),
            Err(e) => error!("mDNS: Error: {}", Debug2Format(&e)),
        }
        info!("mDNS: Restarting in {}s...", MDNS_RECONNECT_DELAY_SECS);
        Timer::after(Duration::from_secs(MDNS_RECONNECT_DELAY_SECS)).await;
    }
}

/// Wartet bis Link up ist und DHCP eine IPv4-Konfiguration geliefert hat
///
/// Polling alle 500ms, gleiches Muster wie der DHCP-Monitor in wifi.rs
async fn wait_for_network(stack: &'static Stack<'static>) {
    loop {
        if stack.is_link_up() && stack.config_v4().is_some() {
            break;
        }
        Timer::after(Duration::from_millis(500)).await;
    }
}

/// Baut Socket und Responder auf und läuft bis zum ersten Fehler
///
/// Ablauf: IPv4-Adresse vom DHCP holen, UDP-Socket auf 0.0.0.0:5353
/// binden, Multicast-Gruppe joinen, dann den blocking Responder-Loop
/// von edge-mdns mit unserem Host-Record fahren.
async fn run_responder(stack: &'static Stack<'static>) -> Result<(), MdnsError> {
    let our_ip = stack
        .config_v4()
        .ok_or(MdnsError::NoAddress)?
        .address
        .address();
    info!("mDNS: Using IP {}", Debug2Format(&our_ip));

    // UDP Adapter (edge-nal-embassy → embassy-net)
    // StaticCell wird nur einmal initialisiert; init_with gibt bei
    // Restarts die vorhandene Referenz zurück statt zu panicen
    static UDP_BUFFERS: static_cell::StaticCell<
        UdpBuffers<1, MDNS_UDP_BUFFER_SIZE, MDNS_UDP_BUFFER_SIZE>,
    > = static_cell::StaticCell::new();
    let udp_buffers = UDP_BUFFERS.init_with(|| UdpBuffers::new());
    let udp_stack = Udp::new(*stack, udp_buffers);

    let mut socket = udp_stack
        .bind(SocketAddr::new(Ipv4Addr::UNSPECIFIED.into(), MDNS_PORT))
        .await
        .map_err(|_| MdnsError::SocketBindFailed)?;

    socket
        .join_v4(Ipv4Addr::from(MDNS_MULTICAST_ADDR), Ipv4Addr::UNSPECIFIED)
        .await
        .map_err(|_| MdnsError::MulticastJoinFailed)?;

    let (recv, send) = socket.split();

    // Host-Record für die Antworten: Hostname → unsere IPv4
    let host = Host {
        hostname: MDNS_HOSTNAME,
        ipv4: our_ip.into(),
        ipv6: [0u8; 16].into(), // IPv6 nicht unterstützt (kein proto-ipv6 in smoltcp)
        ttl: Ttl::from_secs(MDNS_TTL_SECS),
    };

    let recv_buf = VecBufAccess::<NoopRawMutex, MDNS_PACKET_BUFFER_SIZE>::new();
    let send_buf = VecBufAccess::<NoopRawMutex, MDNS_PACKET_BUFFER_SIZE>::new();

    // Die API verlangt ein Broadcast-Signal; wir nutzen es nicht
    let signal = Signal::<NoopRawMutex, ()>::new();

    let mdns = io::Mdns::new(
        Some(our_ip),
        None, // kein IPv6
        recv,
        send,
        recv_buf,
        send_buf,
        mdns_rng,
        &signal,
    );

    info!(
        "mDNS: Responder running, advertising '{}.local'",
        MDNS_HOSTNAME
    );

    // Blocking: läuft bis ein Fehler auftritt
    // HostAnswersMdnsHandler beantwortet nur Hostname → IP, kein
    // Service Discovery
    mdns.run(HostAnswersMdnsHandler::new(&host))
        .await
        .map_err(|_| MdnsError::ResponderFailed)?;

    Ok(())
}

/// Fehler rund um den mDNS Responder
///
/// Jeder Fehler führt im Task-Loop zu einem Neustart-Versuch.
#[derive(Debug)]
enum MdnsError {
    /// DHCP-Konfiguration zwischenzeitlich weggefallen
    NoAddress,
    /// UDP Socket konnte nicht auf Port MDNS_PORT gebunden werden
    SocketBindFailed,
    /// Multicast-Gruppe konnte nicht gejoint werden
    MulticastJoinFailed,
    /// mDNS Responder Loop ist fehlgeschlagen
    ResponderFailed,
}

impl defmt::Format for MdnsError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            MdnsError::NoAddress => defmt::write!(fmt, "No IPv4 address"),
            MdnsError::SocketBindFailed => defmt::write!(fmt, "Socket bind failed"),
            MdnsError::MulticastJoinFailed => defmt::write!(fmt, "Multicast join failed"),
            MdnsError::ResponderFailed => defmt::write!(fmt, "Responder failed"),
        }
    }
}
