// HTTP Server Task - Root-Gruß und Diagnose-404
use core::fmt::Debug;
use core::net::{IpAddr, Ipv4Addr, SocketAddr};

use defmt::{Debug2Format, error, info, warn};
use edge_http::Method;
use edge_http::io::Error as HttpError;
use edge_http::io::server::{Connection, Handler, Server};
use edge_nal::TcpBind;
use edge_nal_embassy::{Tcp, TcpBuffers};
use embassy_net::Stack;
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_time::{Duration, Timer};
use embedded_io_async::{Read, Write};
use esp_core::StatusLed;
use esp_core::http::{ROOT_BODY, not_found_body, split_uri};
use esp_hal::gpio::Output;

use crate::config::{
    HTTP_BUFFER_SIZE, HTTP_MAX_CONNECTIONS, HTTP_MAX_HEADERS, HTTP_PORT, HTTP_REQUEST_TIMEOUT_MS,
    HTTP_RETRY_DELAY_SECS, NOT_FOUND_BODY_SIZE, TCP_RX_BUFFER_SIZE, TCP_TX_BUFFER_SIZE,
};
use crate::hal::GpioStatusLed;

/// Handler für beide Routen-Klassen des Servers
///
/// Der Root-Pfad liefert unabhängig von der Methode den festen Gruß,
/// alles andere die 404-Diagnose mit URI, Methode und Argumenten.
///
/// Eine Instanz wird von allen Server-Workern geteilt, daher liegt
/// die LED hinter einem Mutex. Nur der Root-Zweig fasst sie an: die
/// LED ist während der Bearbeitung an, danach aus.
struct HelloHandler<L: StatusLed> {
    led: Mutex<NoopRawMutex, L>,
}

impl<L: StatusLed> HelloHandler<L> {
    fn new(led: L) -> Self {
        Self {
            led: Mutex::new(led),
        }
    }

    async fn set_led(&self, on: bool) {
        if self.led.lock().await.set(on).is_err() {
            warn!("HTTP: Failed to drive status LED");
        }
    }
}

impl<L: StatusLed> Handler for HelloHandler<L> {
    type Error<E>
        = HttpError<E>
    where
        E: Debug;

    async fn handle<T, const N: usize>(
        &self,
        _task_id: impl core::fmt::Display + Copy,
        conn: &mut Connection<'_, T, N>,
    ) -> Result<(), Self::Error<T::Error>>
    where
        T: Read + Write,
    {
        let headers = conn.headers()?;
        let method = headers.method;
        let (path, query) = split_uri(headers.path);

        if path == "/" {
            info!("HTTP: {} / -> 200", method_name(method));

            self.set_led(true).await;
            conn.initiate_response(200, Some("OK"), &[("Content-Type", "text/plain")])
                .await?;
            conn.write_all(ROOT_BODY.as_bytes()).await?;
            self.set_led(false).await;
        } else {
            info!("HTTP: {} {} -> 404", method_name(method), path);

            let body: heapless::String<NOT_FOUND_BODY_SIZE> =
                not_found_body(path, method_name(method), query);
            conn.initiate_response(404, Some("Not Found"), &[("Content-Type", "text/plain")])
                .await?;
            conn.write_all(body.as_bytes()).await?;
        }

        Ok(())
    }
}

/// Methoden-Name für Log und Diagnose-Körper
fn method_name(method: Method) -> &'static str {
    match method {
        Method::Get => "GET",
        Method::Post => "POST",
        Method::Put => "PUT",
        Method::Delete => "DELETE",
        Method::Head => "HEAD",
        Method::Options => "OPTIONS",
        Method::Patch => "PATCH",
        _ => "OTHER",
    }
}

/// HTTP Server Task
///
/// Bindet Port 80 einmalig beim Start. Der Listener existiert damit
/// schon bevor eine Adresse vergeben ist; erreichbar wird er erst,
/// sobald der Join durch ist. Bis zu HTTP_MAX_CONNECTIONS Requests
/// werden vom Server-internen Pool gleichzeitig bedient.
///
/// # Parameter
/// - `stack`: embassy-net Stack für Netzwerk-Zugriff
/// - `led`: Status-LED, die der Root-Handler toggelt
#[embassy_executor::task]
pub async fn http_server_task(stack: &'static Stack<'static>, led: Output<'static>) {
    info!("HTTP: Server task starting on port {}...", HTTP_PORT);

    // TCP-Buffers für den Connection-Pool
    static TCP_BUFFERS: static_cell::StaticCell<
        TcpBuffers<HTTP_MAX_CONNECTIONS, TCP_TX_BUFFER_SIZE, TCP_RX_BUFFER_SIZE>,
    > = static_cell::StaticCell::new();
    let buffers = TCP_BUFFERS.init_with(|| TcpBuffers::new());
    let tcp = Tcp::new(*stack, buffers);

    let mut acceptor = loop {
        match tcp
            .bind(SocketAddr::new(
                IpAddr::V4(Ipv4Addr::UNSPECIFIED),
                HTTP_PORT,
            ))
            .await
        {
            Ok(acceptor) => break acceptor,
            Err(e) => {
                error!(
                    "HTTP: Failed to bind port {}: {}",
                    HTTP_PORT,
                    Debug2Format(&e)
                );
                Timer::after(Duration::from_secs(HTTP_RETRY_DELAY_SECS)).await;
            }
        }
    };

    let handler = HelloHandler::new(GpioStatusLed::new(led));
    let mut server = Server::<HTTP_MAX_CONNECTIONS, HTTP_BUFFER_SIZE, HTTP_MAX_HEADERS>::new();

    info!("HTTP: Server started");

    loop {
        if let Err(e) = server
            .run(Some(HTTP_REQUEST_TIMEOUT_MS), &mut acceptor, &handler)
            .await
        {
            error!("HTTP: Server error: {}", Debug2Format(&e));
            Timer::after(Duration::from_millis(100)).await;
        }
    }
}
