// Task-Modul: Enthält alle Embassy Tasks
//
// Jeder Task läuft asynchron und unabhängig. Die Tasks teilen sich
// nur den embassy-net Stack; jedes Peripheral gehört genau einem Task.

pub mod display;
pub mod http;
pub mod mdns;
pub mod wifi;

// Re-export Tasks für einfachen Import
pub use display::display_task;
pub use http::http_server_task;
pub use mdns::mdns_responder_task;
pub use wifi::{connection_task, dhcp_task, net_task};
