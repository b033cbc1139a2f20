//! HTTP-Antwort-Formatierung
//!
//! Baut die beiden Antwort-Körper des Servers als Pure Functions:
//! den festen Gruß für `/` und die Diagnose-Seite für alles andere.
//! Keine Sockets, kein Parsing von Rohdaten; der Server-Task reicht
//! Pfad, Methode und Query-String herein.

use core::fmt::Write;

use heapless::{String, Vec};

/// Antwort-Körper für den Root-Pfad
pub const ROOT_BODY: &str = "hello from esp8266!\r\n";

/// Maximale Länge eines dekodierten Argument-Namens bzw. -Werts
pub const MAX_ARG_LEN: usize = 64;

/// Trennt das Request-Target in Pfad und Query-String
///
/// # Beispiele
///
/// ```
/// # use esp_core::http::split_uri;
/// assert_eq!(split_uri("/foo?a=1&b=2"), ("/foo", Some("a=1&b=2")));
/// assert_eq!(split_uri("/"), ("/", None));
/// ```
pub fn split_uri(target: &str) -> (&str, Option<&str>) {
    match target.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (target, None),
    }
}

/// Iteriert über die Name/Wert-Paare eines Query-Strings
///
/// Paare ohne `=` werden als Name mit leerem Wert geliefert, leere
/// Segmente (`a=1&&b=2`) übersprungen. Die Reihenfolge des Requests
/// bleibt erhalten.
pub fn query_args(query: &str) -> impl Iterator<Item = (&str, &str)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((name, value)) => (name, value),
            None => (pair, ""),
        })
}

/// Percent-Dekodierung einer Query-Komponente
///
/// `+` wird zu Leerzeichen, `%xx` zum entsprechenden Byte. Ungültige
/// Escapes (`%zz`, abgeschnittenes `%x`) werden wörtlich übernommen.
/// Bei Überlauf wird abgeschnitten, bei ungültigem UTF-8 der rohe
/// String geliefert.
pub fn decode_component<const N: usize>(raw: &str) -> String<N> {
    let mut bytes: Vec<u8, N> = Vec::new();
    let src = raw.as_bytes();
    let mut i = 0;
    while i < src.len() {
        let decoded = match src[i] {
            b'+' => {
                i += 1;
                b' '
            }
            b'%' if i + 2 < src.len() => {
                match (hex_val(src[i + 1]), hex_val(src[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        i += 3;
                        (hi << 4) | lo
                    }
                    _ => {
                        i += 1;
                        b'%'
                    }
                }
            }
            other => {
                i += 1;
                other
            }
        };
        if bytes.push(decoded).is_err() {
            break;
        }
    }

    match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(_) => {
            let mut s = String::new();
            for ch in raw.chars() {
                if s.push(ch).is_err() {
                    break;
                }
            }
            s
        }
    }
}

fn hex_val(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Baut den Diagnose-Körper für unbekannte Pfade
///
/// Erste Zeile nennt URI und Methode, danach die Argument-Anzahl und
/// jedes Argument als `" name: wert"` auf eigener Zeile, in
/// Request-Reihenfolge. Bei Überlauf des Puffers wird abgeschnitten.
pub fn not_found_body<const N: usize>(
    path: &str,
    method: &str,
    query: Option<&str>,
) -> String<N> {
    let mut body: String<N> = String::new();
    let count = query.map_or(0, |q| query_args(q).count());
    let _ = write!(body, "URI: {path} Method: {method}\nArguments: {count}\n");
    if let Some(q) = query {
        for (name, value) in query_args(q) {
            let name: String<MAX_ARG_LEN> = decode_component(name);
            let value: String<MAX_ARG_LEN> = decode_component(value);
            let _ = write!(body, " {name}: {value}\n");
        }
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_uri_without_query() {
        assert_eq!(split_uri("/status"), ("/status", None));
    }

    #[test]
    fn test_split_uri_empty_query() {
        assert_eq!(split_uri("/x?"), ("/x", Some("")));
    }

    #[test]
    fn test_query_args_order_preserved() {
        let pairs: heapless::Vec<(&str, &str), 4> = query_args("a=1&b=2").collect();
        assert_eq!(pairs.as_slice(), &[("a", "1"), ("b", "2")]);
    }

    #[test]
    fn test_query_args_pair_without_value() {
        let pairs: heapless::Vec<(&str, &str), 4> = query_args("flag").collect();
        assert_eq!(pairs.as_slice(), &[("flag", "")]);
    }

    #[test]
    fn test_decode_plus_and_percent() {
        let s: String<16> = decode_component("a+b%20c");
        assert_eq!(s.as_str(), "a b c");
    }

    #[test]
    fn test_decode_invalid_escape_passes_through() {
        let s: String<16> = decode_component("%zz%4");
        assert_eq!(s.as_str(), "%zz%4");
    }
}
