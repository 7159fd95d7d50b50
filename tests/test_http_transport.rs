//! End-to-end tests of the default blocking transport against a local
//! one-shot HTTP server.

#![cfg(feature = "transport")]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use fogbugz_scout::{Scout, ScoutOptions};

/// Serves exactly one request, answering with `status_line`, and hands the
/// received request body back through the join handle.
fn one_shot_server(status_line: &'static str) -> (String, thread::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut head = Vec::new();
        let mut byte = [0u8; 1];
        while !head.ends_with(b"\r\n\r\n") {
            stream.read_exact(&mut byte).unwrap();
            head.push(byte[0]);
        }
        let head = String::from_utf8_lossy(&head).to_string();
        let mut content_length = 0;
        for line in head.lines() {
            let lower = line.to_ascii_lowercase();
            if let Some(value) = lower.strip_prefix("content-length:") {
                content_length = value.trim().parse().unwrap();
            }
        }
        let mut body = vec![0u8; content_length];
        stream.read_exact(&mut body).unwrap();
        let response = format!("{status_line}\r\nContent-Length: 2\r\nConnection: close\r\n\r\nok");
        stream.write_all(response.as_bytes()).unwrap();
        String::from_utf8_lossy(&body).to_string()
    });
    (format!("http://{addr}/scoutSubmit.asp"), handle)
}

fn scout_for(url: String) -> Scout {
    Scout::with_options(ScoutOptions {
        url,
        user_name: "alice".into(),
        project: "P1".into(),
        area: "core".into(),
        email: "a@x.com".into(),
        ..Default::default()
    })
}

#[test]
fn report_posts_the_urlencoded_form() {
    let (url, server) = one_shot_server("HTTP/1.1 200 OK");
    let scout = scout_for(url);
    scout.set_prefix("PREFIX");

    scout.report("disk full").unwrap();

    let body = server.join().unwrap();
    assert!(body.contains("ScoutUserName=alice"));
    assert!(body.contains("ScoutProject=P1"));
    assert!(body.contains("ScoutArea=core"));
    assert!(body.contains("Description=PREFIXdisk+full"));
    assert!(body.contains("ForceNewBug=0"));
    assert!(body.contains("Email=a%40x.com"));
    assert!(body.contains("Extra="));
    // The stack trace is never empty.
    assert!(!body.contains("Extra=&"));
}

#[test]
fn server_errors_still_count_as_a_completed_attempt() {
    let (url, server) = one_shot_server("HTTP/1.1 500 Internal Server Error");
    let scout = scout_for(url);

    scout.report("boom").unwrap();
    server.join().unwrap();
}

#[test]
fn not_found_still_counts_as_a_completed_attempt() {
    let (url, server) = one_shot_server("HTTP/1.1 404 Not Found");
    let scout = scout_for(url);

    scout.report("boom").unwrap();
    server.join().unwrap();
}

#[test]
fn connection_failure_is_an_error() {
    // Grab a free port, then close the listener so connecting fails.
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let scout = scout_for(format!("http://{addr}/scoutSubmit.asp"));
    assert!(scout.report("boom").is_err());
}
