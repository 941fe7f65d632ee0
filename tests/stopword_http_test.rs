use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use tango::config::{PipelineConfig, StopwordSourceConfig, TokenizerKind};
use tango::error::TangoError;
use tango::pipeline::TermPipeline;
use tango::stopwords::{HttpStopwordSource, StopwordSource};

/// Serve exactly one HTTP response on an ephemeral port.
fn serve_once(status: &'static str, body: &'static [u8]) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/stopwords.txt", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let header = format!(
            "HTTP/1.1 {}\r\nContent-Type: text/plain; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            status,
            body.len()
        );
        stream.write_all(header.as_bytes()).unwrap();
        stream.write_all(body).unwrap();
        stream.flush().unwrap();
    });

    (url, handle)
}

#[test]
fn test_fetch_newline_delimited_list() {
    let (url, server) = serve_once("200 OK", "の\nは\r\nが\n".as_bytes());

    let set = HttpStopwordSource::new(url).load().unwrap();
    server.join().unwrap();

    assert_eq!(set.len(), 3);
    for word in ["の", "は", "が"] {
        assert!(set.contains(word), "missing {word}");
    }
}

#[test]
fn test_error_status_is_a_source_error() {
    let (url, server) = serve_once("404 Not Found", b"not here");

    let err = HttpStopwordSource::new(url).load().unwrap_err();
    server.join().unwrap();

    assert!(matches!(err, TangoError::StopwordSource(_)));
}

#[test]
fn test_undecodable_body_is_a_source_error() {
    let (url, server) = serve_once("200 OK", b"ok\n\xff\xfe\x80bad\n");

    let err = HttpStopwordSource::new(url).load().unwrap_err();
    server.join().unwrap();

    assert!(matches!(err, TangoError::StopwordSource(_)));
}

#[test]
fn test_carriage_return_only_body() {
    let (url, server) = serve_once("200 OK", b"the\rof\ra");

    let set = HttpStopwordSource::new(url).load().unwrap();
    server.join().unwrap();

    assert_eq!(set.len(), 3);
    assert!(set.contains("of"));
}

#[test]
fn test_unreachable_address_is_a_source_error() {
    // Bind then drop so nothing listens on the port.
    let addr = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();

    let err = HttpStopwordSource::new(format!("http://{addr}/stopwords.txt"))
        .load()
        .unwrap_err();

    assert!(matches!(err, TangoError::StopwordSource(_)));
}

#[test]
fn test_pipeline_uses_fetched_stopwords() {
    let (url, server) = serve_once("200 OK", b"the\nof\n");

    let mut config = PipelineConfig::default();
    config.tokenizer.kind = TokenizerKind::UnicodeWord;
    config.stopwords = StopwordSourceConfig::Url { url };
    let pipeline = TermPipeline::from_config(&config).unwrap();
    server.join().unwrap();

    let weights = pipeline
        .weigh_corpus(&["the art of war", "the war of words"])
        .unwrap();

    for map in &weights {
        assert!(!map.contains_key("the"));
        assert!(!map.contains_key("of"));
    }
    assert!(weights[0]["art"] > weights[0]["war"]);
}
