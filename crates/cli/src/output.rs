//! Line formats for emitted maps: plain text and JSON lines.

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use ribbon::{FlagMap, Surface};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// `<genus> <sign> a[..] s[..] e[..]`
    Text,
    /// One JSON object per line.
    Json,
}

/// Serialized form of one kept map.
#[derive(Debug, Serialize)]
pub struct MapRecord<'a> {
    pub sign: char,
    pub genus: i64,
    pub euler: i64,
    pub vertices: usize,
    pub edges: usize,
    pub faces: usize,
    pub angle: &'a [usize],
    pub side: &'a [usize],
    pub end: &'a [Option<usize>],
}

impl<'a> MapRecord<'a> {
    pub fn new(m: &'a FlagMap, surface: Surface) -> Self {
        Self {
            sign: surface.sign(),
            genus: surface.genus_like(),
            euler: m.euler_characteristic(),
            vertices: m.vertex_count(),
            edges: m.edge_count(),
            faces: m.face_count(),
            angle: m.angles(),
            side: m.sides(),
            end: m.ends(),
        }
    }
}

pub fn write_map<W: Write + ?Sized>(
    w: &mut W,
    format: Format,
    m: &FlagMap,
    surface: Surface,
) -> Result<()> {
    match format {
        Format::Text => writeln!(w, "{surface} {m}")?,
        Format::Json => {
            serde_json::to_writer(&mut *w, &MapRecord::new(m, surface))?;
            writeln!(w)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn sphere_loop() -> FlagMap {
        FlagMap::from_involutions(vec![1, 0, 3, 2], vec![2, 3, 0, 1], vec![1, 0, 3, 2]).unwrap()
    }

    #[test]
    fn text_line_leads_with_genus_and_sign() {
        let m = sphere_loop();
        let mut buf = Vec::new();
        write_map(&mut buf, Format::Text, &m, m.surface()).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "0 + a[1 0 3 2] s[2 3 0 1] e[1 0 3 2]\n"
        );
    }

    #[test]
    fn json_line_carries_invariants() {
        let m = sphere_loop();
        let mut buf = Vec::new();
        write_map(&mut buf, Format::Json, &m, m.surface()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with('\n'));
        let v: Value = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(v["sign"], "+");
        assert_eq!(v["genus"], 0);
        assert_eq!(v["euler"], 2);
        assert_eq!(v["faces"], 2);
        assert_eq!(v["end"][3], 2);
    }
}
