//! Flat text format: one `<name> <diameter> <mass>` triple per line.
//!
//! There is no header, no escaping and no versioning. Names therefore cannot
//! contain whitespace and still round-trip.

use std::fmt;

use crate::models::Planet;

/// Where decoding gave up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Malformed {
    /// Zero-based index of the record that failed to decode.
    pub record: usize,
    /// The token that failed to parse, or `None` if input ended mid-record.
    pub token: Option<String>,
}

impl fmt::Display for Malformed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.token {
            Some(token) => write!(f, "record {}: invalid number {:?}", self.record + 1, token),
            None => write!(f, "record {}: unexpected end of data", self.record + 1),
        }
    }
}

/// Result of decoding: every complete record before the first bad one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Decoded {
    pub planets: Vec<Planet>,
    pub malformed: Option<Malformed>,
}

/// Encode planets in order. Floats use the shortest representation that
/// parses back to the identical value; mass is written in exponent form.
pub fn encode<'a>(planets: impl IntoIterator<Item = &'a Planet>) -> String {
    let mut out = String::new();
    for planet in planets {
        out.push_str(&format!(
            "{} {} {:e}\n",
            planet.name(),
            planet.diameter(),
            planet.mass()
        ));
    }
    out
}

/// Decode whitespace-delimited `(name, diameter, mass)` triples.
///
/// Line breaks carry no meaning beyond separating tokens. Decoding stops at
/// the first triple that does not parse; nothing after it is read, and the
/// partial triple is dropped.
pub fn decode(input: &str) -> Decoded {
    let mut tokens = input.split_whitespace();
    let mut decoded = Decoded::default();

    while let Some(name) = tokens.next() {
        let record = decoded.planets.len();
        let diameter = match parse_number(tokens.next(), record) {
            Ok(value) => value,
            Err(malformed) => {
                decoded.malformed = Some(malformed);
                break;
            }
        };
        let mass = match parse_number(tokens.next(), record) {
            Ok(value) => value,
            Err(malformed) => {
                decoded.malformed = Some(malformed);
                break;
            }
        };
        decoded.planets.push(Planet::new(name, diameter, mass));
    }

    decoded
}

fn parse_number(token: Option<&str>, record: usize) -> Result<f64, Malformed> {
    let token = token.ok_or(Malformed {
        record,
        token: None,
    })?;
    token.parse::<f64>().map_err(|_| Malformed {
        record,
        token: Some(token.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_one_line_per_planet() {
        let planets = vec![
            Planet::new("Earth", 12742.0, 5.972e24),
            Planet::new("Mars", 6779.0, 6.39e23),
        ];
        assert_eq!(encode(&planets), "Earth 12742 5.972e24\nMars 6779 6.39e23\n");
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(&Vec::<Planet>::new()), "");
    }

    #[test]
    fn test_encode_keeps_full_precision() {
        let planets = vec![Planet::new("Precise", 1234.567891234, 1.23456789012345e22)];
        let decoded = decode(&encode(&planets));
        assert_eq!(decoded.planets, planets);
    }

    #[test]
    fn test_decode_accepts_plain_and_scientific_numbers() {
        let decoded = decode("Earth 12742 5972000000000000000000000\nMars 6.779e3 6.39E23\n");
        assert!(decoded.malformed.is_none());
        assert_eq!(decoded.planets.len(), 2);
        assert_eq!(decoded.planets[0].mass(), 5.972e24);
        assert_eq!(decoded.planets[1].diameter(), 6779.0);
    }

    #[test]
    fn test_decode_ignores_line_structure() {
        let decoded = decode("Earth\n12742   5.972e24 Mars 6779\n6.39e23");
        assert_eq!(decoded.planets.len(), 2);
        assert_eq!(decoded.planets[1].name(), "Mars");
    }

    #[test]
    fn test_decode_stops_at_bad_number() {
        let decoded = decode("Earth 12742 5.972e24\nMars big 6.39e23\nVenus 12104 4.867e24\n");
        assert_eq!(decoded.planets.len(), 1);
        assert_eq!(
            decoded.malformed,
            Some(Malformed {
                record: 1,
                token: Some("big".to_string()),
            })
        );
    }

    #[test]
    fn test_decode_drops_incomplete_trailing_record() {
        let decoded = decode("Earth 12742 5.972e24\nMars 6779\n");
        assert_eq!(decoded.planets.len(), 1);
        assert_eq!(
            decoded.malformed,
            Some(Malformed {
                record: 1,
                token: None,
            })
        );
    }

    #[test]
    fn test_malformed_display() {
        let m = Malformed {
            record: 2,
            token: Some("x".into()),
        };
        assert_eq!(m.to_string(), "record 3: invalid number \"x\"");
    }
}
