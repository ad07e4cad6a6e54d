use chatterstats::address::{parse, AddressError, Endpoint};

fn endpoint(host: &str, port: &str) -> Endpoint {
    Endpoint {
        host: host.to_string(),
        port: port.to_string(),
    }
}

#[test]
fn test_colon_form() {
    assert_eq!(parse("10.0.2.15:58378").unwrap(), endpoint("10.0.2.15", "58378"));
}

#[test]
fn test_wildcard_host_normalizes_to_all() {
    assert_eq!(parse("0.0.0.0:22").unwrap(), endpoint("all", "22"));
    assert_eq!(parse("*.17500").unwrap(), endpoint("all", "17500"));
}

#[test]
fn test_dotted_quad_with_trailing_port() {
    assert_eq!(parse("192.168.0.6.58303").unwrap(), endpoint("192.168.0.6", "58303"));
}

#[test]
fn test_wildcard_port() {
    // udp lines show "*.*" as the foreign address
    assert_eq!(parse("*.*").unwrap(), endpoint("all", "*"));
}

#[test]
fn test_wildcard_wins_over_dotted_quad() {
    // Matches both the wildcard shape and "five dot-groups"; wildcard is
    // checked first.
    assert_eq!(parse("*.1.2.3.4").unwrap(), endpoint("all", "4"));
}

#[test]
fn test_colon_wins_over_dotted_quad() {
    assert_eq!(parse("1.2.3.4.5:80").unwrap(), endpoint("1.2.3.4.5", "80"));
}

#[test]
fn test_service_name_port_kept_as_text() {
    assert_eq!(parse("127.0.0.1:ssh").unwrap(), endpoint("127.0.0.1", "ssh"));
}

#[test]
fn test_unrecognized_input_errors() {
    for raw in ["", "*", "localhost", "1.2.3.4", "1.2.3.4.5.6"] {
        match parse(raw) {
            Err(AddressError::Unrecognized(s)) => assert_eq!(s, raw),
            other => panic!("expected Unrecognized for {:?}, got {:?}", raw, other),
        }
    }
}

#[test]
fn test_parse_is_idempotent_on_canonical_form() {
    for raw in ["10.0.2.15:58378", "0.0.0.0:22", "192.168.0.6.58303", "*.17500"] {
        let first = parse(raw).unwrap();
        let second = parse(&first.to_string()).unwrap();
        assert_eq!(first, second);
    }
}
