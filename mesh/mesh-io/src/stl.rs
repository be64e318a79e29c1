//! STL (Stereolithography) codec.
//!
//! Decodes both ASCII and binary STL into a [`TriangleBuffer`] and encodes a
//! buffer back into binary (or, on request, ASCII) STL.
//!
//! # Format Detection
//!
//! The declared binary triangle count decides first:
//! - If the stream is exactly `84 + 50 * count` bytes long it is binary,
//!   even when the header happens to start with `solid`.
//! - A longer stream that does not start with `solid` is binary with trailing
//!   padding.
//! - Otherwise a stream starting with `solid` (after optional whitespace) is
//!   parsed as ASCII, and anything else is rejected.
//!
//! # Binary Format
//!
//! ```text
//! UINT8[80]    – Header (ignored, often contains file info)
//! UINT32       – Number of triangles
//! foreach triangle
//!     REAL32[3] – Normal vector (ignored on read, recomputed on write)
//!     REAL32[3] – Vertex 1
//!     REAL32[3] – Vertex 2
//!     REAL32[3] – Vertex 3
//!     UINT16    – Attribute byte count (0)
//! end
//! ```
//!
//! # ASCII Format
//!
//! ```text
//! solid name
//!   facet normal ni nj nk
//!     outer loop
//!       vertex v1x v1y v1z
//!       vertex v2x v2y v2z
//!       vertex v3x v3y v3z
//!     endloop
//!   endfacet
//!   ...
//! endsolid name
//! ```

use std::path::Path;

use mesh_types::{FLOATS_PER_TRIANGLE, TriangleBuffer};
use tracing::debug;

use crate::error::{IoError, IoResult};

/// STL binary header size in bytes.
const HEADER_SIZE: usize = 80;

/// Header plus the `u32` triangle count.
const PREAMBLE_SIZE: usize = HEADER_SIZE + 4;

/// Size of one triangle in binary STL (normal + 3 vertices + attribute).
const TRIANGLE_SIZE: usize = 50;

/// Text placed at the start of every binary header we write.
const HEADER_TEXT: &[u8] = b"Binary STL exported by decal-mirror mesh-io";

/// The two STL layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StlFormat {
    /// 80-byte header, triangle count, 50-byte records.
    Binary,
    /// `solid ... endsolid` text.
    Ascii,
}

/// Detect whether `bytes` hold binary or ASCII STL.
///
/// Returns `None` when neither layout fits. ASCII detection only looks at
/// the leading keyword; the content may still fail to parse.
///
/// # Example
///
/// ```
/// use mesh_io::{StlFormat, detect_format};
///
/// assert_eq!(detect_format(b"solid part\nendsolid part\n"), Some(StlFormat::Ascii));
/// assert_eq!(detect_format(b"garbage"), None);
/// ```
#[must_use]
pub fn detect_format(bytes: &[u8]) -> Option<StlFormat> {
    let ascii_like = starts_with_solid(bytes);

    if let Some(declared) = declared_count(bytes) {
        let expected = binary_len(declared);
        let len = bytes.len() as u64;
        if len == expected || (len > expected && !ascii_like) {
            return Some(StlFormat::Binary);
        }
    }

    ascii_like.then_some(StlFormat::Ascii)
}

/// Decode an STL byte stream into a triangle buffer.
///
/// # Errors
///
/// Returns an error if the stream is neither a well-formed binary STL nor a
/// well-formed ASCII `solid ... endsolid` block:
/// - [`IoError::InvalidHeader`] when shorter than the 84-byte preamble
/// - [`IoError::TruncatedBinary`] when shorter than the declared count implies
/// - [`IoError::InvalidContent`] / [`IoError::Utf8`] for bad ASCII
///
/// # Example
///
/// ```
/// use mesh_io::decode_stl;
///
/// let ascii = b"solid t
///   facet normal 0 0 1
///     outer loop
///       vertex 0 0 0
///       vertex 1 0 0
///       vertex 0 1 0
///     endloop
///   endfacet
/// endsolid t
/// ";
/// let buffer = decode_stl(ascii).unwrap();
/// assert_eq!(buffer.triangle_count(), 1);
/// ```
pub fn decode_stl(bytes: &[u8]) -> IoResult<TriangleBuffer> {
    let buffer = match detect_format(bytes) {
        Some(StlFormat::Binary) => decode_binary(bytes)?,
        Some(StlFormat::Ascii) => decode_ascii(bytes)?,
        None => return Err(diagnose_unrecognized(bytes)),
    };

    debug!(
        triangles = buffer.triangle_count(),
        bytes = bytes.len(),
        "decoded STL"
    );
    Ok(buffer)
}

/// Explain why a stream matched neither layout.
fn diagnose_unrecognized(bytes: &[u8]) -> IoError {
    match declared_count(bytes) {
        None => IoError::InvalidHeader {
            expected: PREAMBLE_SIZE,
            got: bytes.len(),
        },
        Some(declared) => {
            let expected = binary_len(declared);
            if (bytes.len() as u64) < expected {
                IoError::TruncatedBinary {
                    declared,
                    expected,
                    got: bytes.len(),
                }
            } else {
                IoError::UnrecognizedFormat {
                    reason: "stream is not binary STL and does not start with `solid`".into(),
                }
            }
        }
    }
}

/// Triangle count stored after the 80-byte header, if the preamble is present.
fn declared_count(bytes: &[u8]) -> Option<u32> {
    let raw = bytes.get(HEADER_SIZE..PREAMBLE_SIZE)?;
    Some(u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]))
}

/// Total binary file length implied by a triangle count.
fn binary_len(count: u32) -> u64 {
    PREAMBLE_SIZE as u64 + u64::from(count) * TRIANGLE_SIZE as u64
}

/// Check for a leading `solid` keyword after optional ASCII whitespace.
fn starts_with_solid(bytes: &[u8]) -> bool {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    bytes
        .get(start..start + 5)
        .is_some_and(|kw| kw.eq_ignore_ascii_case(b"solid"))
}

/// Decode a binary STL whose length has already been validated.
fn decode_binary(bytes: &[u8]) -> IoResult<TriangleBuffer> {
    let declared = declared_count(bytes).ok_or(IoError::InvalidHeader {
        expected: PREAMBLE_SIZE,
        got: bytes.len(),
    })?;
    let count = declared as usize;

    let mut buffer = TriangleBuffer::with_capacity(count);
    let mut records = bytes[PREAMBLE_SIZE..].chunks_exact(TRIANGLE_SIZE);
    for _ in 0..count {
        let Some(record) = records.next() else {
            return Err(IoError::TruncatedBinary {
                declared,
                expected: binary_len(declared),
                got: bytes.len(),
            });
        };

        // Skip normal (12 bytes), read 9 vertex floats (36 bytes)
        let mut floats = [0.0f32; FLOATS_PER_TRIANGLE];
        for (slot, raw) in floats.iter_mut().zip(record[12..48].chunks_exact(4)) {
            *slot = f32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]);
        }
        buffer.push_record(&floats);
    }

    Ok(buffer)
}

/// Position inside an ASCII `solid` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AsciiState {
    ExpectSolid,
    InSolid,
    InFacet,
    InLoop,
    AfterLoop,
    Done,
}

/// Decode an ASCII STL.
fn decode_ascii(bytes: &[u8]) -> IoResult<TriangleBuffer> {
    let text = std::str::from_utf8(bytes)?;

    let mut buffer = TriangleBuffer::new();
    let mut state = AsciiState::ExpectSolid;
    let mut facet = [0.0f32; FLOATS_PER_TRIANGLE];
    let mut vertices_in_loop = 0usize;
    let mut last_line = 0usize;

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        last_line = line_no;

        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else {
            continue;
        };
        let keyword = keyword.to_ascii_lowercase();

        state = match (state, keyword.as_str()) {
            (AsciiState::ExpectSolid, "solid") => AsciiState::InSolid,
            (AsciiState::InSolid, "facet") => {
                if !tokens
                    .next()
                    .is_some_and(|t| t.eq_ignore_ascii_case("normal"))
                {
                    return Err(IoError::invalid_content(line_no, "expected `facet normal`"));
                }
                // Facet normals are recomputed, only check they are numbers
                parse_triple(tokens, line_no)?;
                AsciiState::InFacet
            }
            (AsciiState::InSolid, "endsolid") => AsciiState::Done,
            (AsciiState::InFacet, "outer") => {
                if !tokens.next().is_some_and(|t| t.eq_ignore_ascii_case("loop")) {
                    return Err(IoError::invalid_content(line_no, "expected `outer loop`"));
                }
                vertices_in_loop = 0;
                AsciiState::InLoop
            }
            (AsciiState::InLoop, "vertex") => {
                if vertices_in_loop == 3 {
                    return Err(IoError::invalid_content(
                        line_no,
                        "more than 3 vertices in facet",
                    ));
                }
                let [x, y, z] = parse_triple(tokens, line_no)?;
                let base = vertices_in_loop * 3;
                facet[base..base + 3].copy_from_slice(&[x, y, z]);
                vertices_in_loop += 1;
                AsciiState::InLoop
            }
            (AsciiState::InLoop, "endloop") => {
                if vertices_in_loop != 3 {
                    return Err(IoError::invalid_content(
                        line_no,
                        format!("expected 3 vertices in facet, found {vertices_in_loop}"),
                    ));
                }
                AsciiState::AfterLoop
            }
            (AsciiState::AfterLoop, "endfacet") => {
                buffer.push_record(&facet);
                AsciiState::InSolid
            }
            (state, other) => {
                return Err(IoError::invalid_content(
                    line_no,
                    format!("unexpected `{other}` ({})", expected_after(state)),
                ));
            }
        };

        // Only the first solid is read
        if state == AsciiState::Done {
            break;
        }
    }

    if state != AsciiState::Done {
        return Err(IoError::invalid_content(
            last_line,
            format!("unexpected end of input ({})", expected_after(state)),
        ));
    }

    Ok(buffer)
}

/// Human-readable description of what may follow in a given state.
const fn expected_after(state: AsciiState) -> &'static str {
    match state {
        AsciiState::ExpectSolid => "expected `solid`",
        AsciiState::InSolid => "expected `facet` or `endsolid`",
        AsciiState::InFacet => "expected `outer loop`",
        AsciiState::InLoop => "expected `vertex` or `endloop`",
        AsciiState::AfterLoop => "expected `endfacet`",
        AsciiState::Done => "expected end of input",
    }
}

/// Parse exactly three floats from the remaining tokens of a line.
fn parse_triple<'a>(mut tokens: impl Iterator<Item = &'a str>, line: usize) -> IoResult<[f32; 3]> {
    let mut out = [0.0f32; 3];
    for slot in &mut out {
        let token = tokens
            .next()
            .ok_or_else(|| IoError::invalid_content(line, "expected 3 coordinates"))?;
        *slot = token.parse::<f32>().map_err(|e| {
            IoError::invalid_content(line, format!("invalid coordinate `{token}`: {e}"))
        })?;
    }
    if tokens.next().is_some() {
        return Err(IoError::invalid_content(line, "more than 3 coordinates"));
    }
    Ok(out)
}

/// Encode a triangle buffer as binary STL.
///
/// Facet normals are recomputed from the stored vertex order; degenerate
/// triangles get a zero normal. The attribute field is always zero.
///
/// # Example
///
/// ```
/// use mesh_io::{decode_stl, encode_stl};
/// use mesh_types::{Triangle, TriangleBuffer};
///
/// let buffer = TriangleBuffer::from_triangles([Triangle::from_arrays(
///     [0.0, 0.0, 0.0],
///     [1.0, 0.0, 0.0],
///     [0.0, 1.0, 0.0],
/// )]);
/// let bytes = encode_stl(&buffer);
/// assert_eq!(bytes.len(), 84 + 50);
/// assert_eq!(decode_stl(&bytes).unwrap(), buffer);
/// ```
#[must_use]
pub fn encode_stl(buffer: &TriangleBuffer) -> Vec<u8> {
    let count = buffer.triangle_count();
    let mut out = Vec::with_capacity(PREAMBLE_SIZE + count * TRIANGLE_SIZE);

    // 80-byte header (padded with spaces)
    let mut header = [b' '; HEADER_SIZE];
    header[..HEADER_TEXT.len()].copy_from_slice(HEADER_TEXT);
    out.extend_from_slice(&header);

    #[allow(clippy::cast_possible_truncation)]
    // Truncation: STL stores the count as u32, larger buffers are unsupported
    out.extend_from_slice(&(count as u32).to_le_bytes());

    for (record, tri) in buffer.records().zip(buffer.triangles()) {
        let n = tri.normal_or_zero();
        for v in [n.x, n.y, n.z].iter().chain(record.iter()) {
            out.extend_from_slice(&v.to_le_bytes());
        }
        out.extend_from_slice(&0u16.to_le_bytes());
    }

    debug!(triangles = count, bytes = out.len(), "encoded binary STL");
    out
}

/// Encode a triangle buffer as ASCII STL.
///
/// Coordinates use the shortest representation that parses back to the same
/// `f32`, so decoding the text reproduces the buffer exactly. Line breaks in
/// `name` are dropped.
#[must_use]
pub fn encode_stl_ascii(buffer: &TriangleBuffer, name: &str) -> String {
    let name = name.split(['\r', '\n']).next().unwrap_or_default().trim();
    let mut out = String::with_capacity(64 + buffer.triangle_count() * 256);

    out.push_str(&format!("solid {name}\n"));
    for tri in buffer.triangles() {
        let n = tri.normal_or_zero();
        out.push_str(&format!("  facet normal {:e} {:e} {:e}\n", n.x, n.y, n.z));
        out.push_str("    outer loop\n");
        for v in tri.vertices() {
            out.push_str(&format!("      vertex {:e} {:e} {:e}\n", v.x, v.y, v.z));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    }
    out.push_str(&format!("endsolid {name}\n"));

    out
}

/// Load a triangle buffer from an STL file.
///
/// Automatically detects ASCII vs binary format.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The file content is not valid STL
pub fn load_stl<P: AsRef<Path>>(path: P) -> IoResult<TriangleBuffer> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })?;
    decode_stl(&bytes)
}

/// Save a triangle buffer to an STL file.
///
/// The solid name of ASCII output is taken from the file stem.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_stl<P: AsRef<Path>>(
    buffer: &TriangleBuffer,
    path: P,
    format: StlFormat,
) -> IoResult<()> {
    let path = path.as_ref();
    let bytes = match format {
        StlFormat::Binary => encode_stl(buffer),
        StlFormat::Ascii => {
            let name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("mesh");
            encode_stl_ascii(buffer, name).into_bytes()
        }
    };
    std::fs::write(path, bytes)?;
    Ok(())
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::unnecessary_raw_string_hashes
)]
mod tests {
    use super::*;
    use mesh_types::Triangle;

    fn create_test_buffer() -> TriangleBuffer {
        TriangleBuffer::from_triangles([
            Triangle::from_arrays([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            Triangle::from_arrays([1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]),
        ])
    }

    const ASCII_STL: &[u8] = br#"solid test
  facet normal 0 0 1
    outer loop
      vertex 0 0 0
      vertex 1 0 0
      vertex 0 1 0
    endloop
  endfacet
endsolid test"#;

    #[test]
    fn ascii_stl_parsing() {
        let buffer = decode_stl(ASCII_STL).unwrap();
        assert_eq!(buffer.triangle_count(), 1);
        assert_eq!(
            buffer.as_slice(),
            &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]
        );
    }

    #[test]
    fn ascii_keywords_are_case_insensitive() {
        let text = ASCII_STL.to_ascii_uppercase();
        assert_eq!(decode_stl(&text).unwrap().triangle_count(), 1);
    }

    #[test]
    fn ascii_empty_solid_is_valid() {
        let buffer = decode_stl(b"  solid empty\nendsolid empty\n").unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn ascii_missing_endsolid_fails() {
        let text = b"solid t\n facet normal 0 0 1\n outer loop\n vertex 0 0 0\n";
        let err = decode_stl(text).unwrap_err();
        assert!(matches!(err, IoError::InvalidContent { line: 4, .. }));
    }

    #[test]
    fn ascii_wrong_vertex_count_fails() {
        let text = br#"solid t
facet normal 0 0 1
outer loop
vertex 0 0 0
vertex 1 0 0
endloop
endfacet
endsolid t"#;
        let err = decode_stl(text).unwrap_err();
        assert!(matches!(err, IoError::InvalidContent { line: 6, .. }));
    }

    #[test]
    fn ascii_bad_coordinate_fails() {
        let text = br#"solid t
facet normal 0 0 1
outer loop
vertex 0 zero 0
"#;
        let err = decode_stl(text).unwrap_err();
        assert!(matches!(err, IoError::InvalidContent { line: 4, .. }));
        assert!(err.to_string().contains("zero"));
    }

    #[test]
    fn ascii_invalid_utf8_fails() {
        let mut text = b"solid t\n".to_vec();
        text.extend_from_slice(&[0xff, 0xfe, b'\n']);
        assert!(matches!(decode_stl(&text), Err(IoError::Utf8(_))));
    }

    #[test]
    fn binary_roundtrip_is_exact() {
        let original = create_test_buffer();
        let bytes = encode_stl(&original);

        assert_eq!(bytes.len(), PREAMBLE_SIZE + 2 * TRIANGLE_SIZE);
        assert_eq!(detect_format(&bytes), Some(StlFormat::Binary));
        assert_eq!(decode_stl(&bytes).unwrap(), original);
    }

    #[test]
    fn encoded_header_is_not_ascii_like() {
        let bytes = encode_stl(&create_test_buffer());
        assert!(!starts_with_solid(&bytes));
        assert_eq!(&bytes[80..84], &2u32.to_le_bytes());
    }

    #[test]
    fn encoded_normal_and_attribute() {
        let bytes = encode_stl(&create_test_buffer());
        let record = &bytes[PREAMBLE_SIZE..PREAMBLE_SIZE + TRIANGLE_SIZE];
        let nz = f32::from_le_bytes(record[8..12].try_into().unwrap());
        assert_eq!(nz, 1.0);
        assert_eq!(&record[48..50], &[0, 0]);
    }

    #[test]
    fn degenerate_triangle_encodes_zero_normal() {
        let buffer = TriangleBuffer::from_triangles([Triangle::from_arrays(
            [0.0, 0.0, 0.0],
            [1.0, 1.0, 1.0],
            [2.0, 2.0, 2.0],
        )]);
        let bytes = encode_stl(&buffer);
        assert!(bytes[PREAMBLE_SIZE..PREAMBLE_SIZE + 12].iter().all(|&b| b == 0));
    }

    #[test]
    fn binary_with_solid_header_is_binary() {
        let mut bytes = encode_stl(&create_test_buffer());
        bytes[..5].copy_from_slice(b"solid");
        assert_eq!(detect_format(&bytes), Some(StlFormat::Binary));
        assert_eq!(decode_stl(&bytes).unwrap().triangle_count(), 2);
    }

    #[test]
    fn binary_trailing_padding_is_ignored() {
        let mut bytes = encode_stl(&create_test_buffer());
        bytes.extend_from_slice(&[0u8; 7]);
        assert_eq!(decode_stl(&bytes).unwrap(), create_test_buffer());
    }

    #[test]
    fn truncated_binary_fails() {
        let bytes = encode_stl(&create_test_buffer());
        let truncated = &bytes[..bytes.len() - 10];
        let err = decode_stl(truncated).unwrap_err();
        assert!(matches!(
            err,
            IoError::TruncatedBinary {
                declared: 2,
                expected: 184,
                got: 174
            }
        ));
        assert!(err.is_format_error());
    }

    #[test]
    fn header_only_binary_with_zero_count_is_empty() {
        let mut bytes = vec![0u8; PREAMBLE_SIZE];
        bytes[..4].copy_from_slice(b"STL ");
        assert!(decode_stl(&bytes).unwrap().is_empty());
    }

    #[test]
    fn short_stream_fails_with_header_error() {
        let err = decode_stl(&[1, 2, 3]).unwrap_err();
        assert!(matches!(err, IoError::InvalidHeader { expected: 84, got: 3 }));
    }

    #[test]
    fn ascii_roundtrip_is_exact() {
        let original = TriangleBuffer::from_triangles([Triangle::from_arrays(
            [0.1, -2.5e-7, 123_456.79],
            [f32::MIN_POSITIVE, 1.0 / 3.0, -0.0],
            [7.0, 8.0, 9.0],
        )]);
        let text = encode_stl_ascii(&original, "part\nname");
        assert!(text.starts_with("solid part\n"));
        assert_eq!(decode_stl(text.as_bytes()).unwrap(), original);
    }

    #[test]
    fn file_roundtrip_binary_and_ascii() {
        let dir = tempfile::tempdir().unwrap();
        let original = create_test_buffer();

        for (file, format) in [("b.stl", StlFormat::Binary), ("a.stl", StlFormat::Ascii)] {
            let path = dir.path().join(file);
            save_stl(&original, &path, format).unwrap();
            assert_eq!(load_stl(&path).unwrap(), original);
        }
    }

    #[test]
    fn load_nonexistent_file() {
        let result = load_stl("nonexistent_file_12345.stl");
        if let Err(IoError::FileNotFound { path }) = result {
            assert!(path.to_string_lossy().contains("nonexistent"));
        } else {
            panic!("expected FileNotFound");
        }
    }
}
