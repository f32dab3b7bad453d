//! Structures and serialization/deserialization for cube twist notation and
//! move log files.
//!
//! Log files are KDL documents. A file records the program that wrote it, the
//! twist sequence in notation form, and one `move` node per twist:
//!
//! ```kdl
//! // Cubetwist move log
//! version 1
//! program name="cubetwist" version="0.1.0"
//! twists "B G R"
//! moves {
//!     move "front" seq=0 time="2024-01-01T00:00:00.000Z"
//! }
//! ```

use std::fmt;
use std::str::FromStr;

use cubetwist_core::{Face, TwistDirection};
use kdl::*;

pub mod notation;
pub mod verify;

mod timestamp;

pub use crate::timestamp::Timestamp;

/// Log file version. This **MUST** be incremented whenever breaking changes
/// are made to the log file format.
pub const LOG_FILE_VERSION: i128 = 1;

/// Warning produced while deserializing a log file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// Location of the problem in the source text.
    pub span: miette::SourceSpan,
    /// Human-readable message.
    pub msg: String,
}
impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.span, self.msg)
    }
}

/// One recorded twist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    /// Sequence number, counting from 0 with no gaps.
    pub seq: u32,
    /// Face that was twisted.
    pub face: Face,
    /// Direction of the twist.
    pub direction: TwistDirection,
    /// Time the twist was made.
    pub time: Timestamp,
}
impl MoveRecord {
    fn to_kdl_node(&self) -> KdlNode {
        let mut node = KdlNode::new("move");
        node.push(KdlEntry::new(self.face.to_string()));
        node.push(("seq", i128::from(self.seq)));
        node.push(("time", self.time.to_string()));
        node
    }

    fn from_kdl_node(node: &KdlNode, warnings: &mut Vec<Warning>) -> Option<Self> {
        let Some(face) = first_arg(node)
            .and_then(KdlValue::as_string)
            .and_then(|s| Face::from_str(s).ok())
        else {
            warnings.push(Warning {
                span: node.span(),
                msg: "move has no valid face".to_owned(),
            });
            return None;
        };
        let Some(seq) = prop(node, "seq")
            .and_then(KdlValue::as_integer)
            .and_then(|n| u32::try_from(n).ok())
        else {
            warnings.push(Warning {
                span: node.span(),
                msg: "move has no valid sequence number".to_owned(),
            });
            return None;
        };
        let Some(time) = prop(node, "time")
            .and_then(KdlValue::as_string)
            .and_then(|s| Timestamp::from_str(s).ok())
        else {
            warnings.push(Warning {
                span: node.span(),
                msg: "move has no valid timestamp".to_owned(),
            });
            return None;
        };
        Some(MoveRecord {
            seq,
            face,
            direction: TwistDirection::default(),
            time,
        })
    }
}

/// Append-only in-memory log of twists.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MoveLog {
    records: Vec<MoveRecord>,
}
impl MoveLog {
    /// Constructs an empty log.
    pub fn new() -> Self {
        MoveLog::default()
    }

    /// Appends a twist to the log, stamping it with the current time, and
    /// returns the new record.
    pub fn record(&mut self, face: Face, direction: TwistDirection) -> MoveRecord {
        let record = MoveRecord {
            seq: self.records.len() as u32,
            face,
            direction,
            time: Timestamp::now(),
        };
        self.records.push(record.clone());
        record
    }

    /// Returns the recorded twists in order.
    pub fn entries(&self) -> &[MoveRecord] {
        &self.records
    }

    /// Returns the number of recorded twists.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Removes every record, restarting sequence numbers from 0.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

/// Information about the software that created a log file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Program {
    /// Name of the program.
    pub name: Option<String>,
    /// Version number, ideally without a leading `v`.
    pub version: Option<String>,
}
impl Program {
    fn to_kdl_node(&self) -> KdlNode {
        let mut node = KdlNode::new("program");
        if let Some(name) = &self.name {
            node.push(("name", name.as_str()));
        }
        if let Some(version) = &self.version {
            node.push(("version", version.as_str()));
        }
        node
    }

    fn from_kdl_node(node: &KdlNode) -> Self {
        Program {
            name: prop_str(node, "name").map(str::to_owned),
            version: prop_str(node, "version").map(str::to_owned),
        }
    }
}

/// Top-level log file structure.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LogFile {
    /// Information about the software that created the log file.
    pub program: Option<Program>,
    /// Twist sequence in notation form.
    pub twists: String,
    /// One record per twist.
    pub moves: Vec<MoveRecord>,
}
impl LogFile {
    /// Constructs a log file from a move log.
    pub fn new(program: Option<Program>, log: &MoveLog) -> Self {
        LogFile {
            program,
            twists: notation::format_moves(
                log.entries().iter().map(|record| (record.face, record.direction)),
            ),
            moves: log.entries().to_vec(),
        }
    }

    /// Serializes the log file to a string.
    pub fn serialize(&self) -> String {
        let mut doc = KdlDocument::new();

        // version
        doc.nodes_mut().push({
            let mut node = KdlNode::new("version");
            node.push(KdlEntry::new(LOG_FILE_VERSION));
            node
        });

        if let Some(program) = &self.program {
            doc.nodes_mut().push(program.to_kdl_node());
        }

        doc.nodes_mut().push({
            let mut node = KdlNode::new("twists");
            node.push(KdlEntry::new(self.twists.as_str()));
            node
        });

        doc.nodes_mut().push({
            let mut node = KdlNode::new("moves");
            let mut children = KdlDocument::new();
            for record in &self.moves {
                children.nodes_mut().push(record.to_kdl_node());
            }
            node.set_children(children);
            node
        });

        doc.set_format(KdlDocumentFormat {
            leading: "// Cubetwist move log\n".to_owned(),
            trailing: String::new(),
        });

        doc.autoformat();

        doc.to_string()
    }

    /// Deserializes a log file from a string.
    pub fn deserialize(s: &str) -> Result<(Self, Vec<Warning>), KdlError> {
        let mut doc = KdlDocument::from_str(s)?;

        // Reject if no version number
        let version_index = doc
            .nodes()
            .iter()
            .position(|node| node.name().value() == "version");
        let Some(version_node) = version_index.map(|i| doc.nodes_mut().remove(i)) else {
            return Ok((
                Self::default(),
                vec![Warning {
                    span: doc.span(),
                    msg: "missing log file format version number".to_owned(),
                }],
            ));
        };
        let Some(version_number) =
            (|| version_node.entries().iter().next()?.value().as_integer())()
        else {
            return Ok((
                Self::default(),
                vec![Warning {
                    span: version_node.span(),
                    msg: "invalid log file format version number".to_owned(),
                }],
            ));
        };

        let mut warnings = vec![];

        // Check version number
        if version_number > LOG_FILE_VERSION {
            warnings.push(Warning {
                span: version_node.span(),
                msg: "this file was saved using a newer version, and might not load correctly"
                    .to_owned(),
            });
        }

        let mut log_file = LogFile::default();
        for node in doc.nodes() {
            match node.name().value() {
                "program" => log_file.program = Some(Program::from_kdl_node(node)),
                "twists" => match first_arg(node).and_then(KdlValue::as_string) {
                    Some(twists) => log_file.twists = twists.to_owned(),
                    None => warnings.push(Warning {
                        span: node.span(),
                        msg: "twists node has no string argument".to_owned(),
                    }),
                },
                "moves" => {
                    let children = node.children().map(KdlDocument::nodes).unwrap_or_default();
                    for child in children {
                        if child.name().value() != "move" {
                            warnings.push(Warning {
                                span: child.span(),
                                msg: format!("unknown node {:?}", child.name().value()),
                            });
                            continue;
                        }
                        if let Some(record) = MoveRecord::from_kdl_node(child, &mut warnings) {
                            log_file.moves.push(record);
                        }
                    }
                }
                other => warnings.push(Warning {
                    span: node.span(),
                    msg: format!("unknown node {other:?}"),
                }),
            }
        }

        Ok((log_file, warnings))
    }
}

/// Returns the first argument (non-property entry) of a node.
fn first_arg(node: &KdlNode) -> Option<&KdlValue> {
    node.entries()
        .iter()
        .find(|entry| entry.name().is_none())
        .map(KdlEntry::value)
}

/// Returns the value of the property `key` of a node.
fn prop<'a>(node: &'a KdlNode, key: &str) -> Option<&'a KdlValue> {
    node.entries()
        .iter()
        .find(|entry| entry.name().is_some_and(|name| name.value() == key))
        .map(KdlEntry::value)
}

/// Returns the value of the string property `key` of a node.
fn prop_str<'a>(node: &'a KdlNode, key: &str) -> Option<&'a str> {
    prop(node, key)?.as_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_move_log_export() {
        let mut log = MoveLog::new();
        log.record(Face::Front, TwistDirection::Clockwise);
        log.record(Face::Right, TwistDirection::Clockwise);
        log.record(Face::Down, TwistDirection::Clockwise);
        assert_eq!(log.len(), 3);

        let log_file = LogFile::new(
            Some(Program {
                name: Some("cubetwist".to_string()),
                version: Some("0.1.0".to_string()),
            }),
            &log,
        );
        assert_eq!(log_file.twists, "B R W");

        let serialized = log_file.serialize();
        println!("{serialized}");
        assert!(serialized.contains("seq=0"));
        assert!(serialized.contains("seq=2"));
        let (deserialized, warnings) = LogFile::deserialize(&serialized).unwrap();
        assert_eq!(log_file, deserialized);
        assert_eq!(warnings, vec![]);
    }

    #[test]
    fn test_move_log_record_sequence() {
        let mut log = MoveLog::new();
        assert!(log.is_empty());
        let first = log.record(Face::Up, TwistDirection::Clockwise);
        let second = log.record(Face::Up, TwistDirection::Clockwise);
        assert_eq!(first.seq, 0);
        assert_eq!(second.seq, 1);
        assert!(first.time <= second.time);

        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.record(Face::Up, TwistDirection::Clockwise).seq, 0);
    }

    #[test]
    fn test_deserialize_warnings() {
        // missing version
        let (log_file, warnings) = LogFile::deserialize("twists \"B\"\n").unwrap();
        assert_eq!(log_file, LogFile::default());
        assert_eq!(warnings.len(), 1);

        // invalid version
        let (log_file, warnings) = LogFile::deserialize("version \"one\"\n").unwrap();
        assert_eq!(log_file, LogFile::default());
        assert_eq!(warnings.len(), 1);

        // newer version
        let (_, warnings) = LogFile::deserialize("version 9999\ntwists \"\"\n").unwrap();
        assert_eq!(warnings.len(), 1);

        // bad move records are skipped
        let source = "version 1\nmoves {\n    move \"diagonal\" seq=0 time=\"bad\"\n    move \"front\" seq=0 time=\"2024-01-01T00:00:00.000Z\"\n}\n";
        let (log_file, warnings) = LogFile::deserialize(source).unwrap();
        assert_eq!(log_file.moves.len(), 1);
        assert_eq!(log_file.moves[0].face, Face::Front);
        assert_eq!(warnings.len(), 1);

        // syntax errors are hard errors
        assert!(LogFile::deserialize("version 1\nmoves {").is_err());
    }
}
