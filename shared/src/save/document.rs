use std::collections::{btree_map, BTreeMap};

use larder_serde::{BitReader, BitWrite, BitWriter, Serde, SerdeErr, UnsignedInteger};

use crate::save::error::PersistError;

/// A value stored in a [`Document`].
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f32),
    Text(String),
    List(Vec<Value>),
    Compound(Document),
}

impl Value {
    fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::List(_) => "list",
            Value::Compound(_) => "compound",
        }
    }
}

impl Serde for Value {
    fn ser(&self, writer: &mut dyn BitWrite) {
        let tag: u8 = match self {
            Value::Bool(_) => 0,
            Value::Int(_) => 1,
            Value::Float(_) => 2,
            Value::Text(_) => 3,
            Value::List(_) => 4,
            Value::Compound(_) => 5,
        };
        UnsignedInteger::<3>::new(tag).ser(writer);
        match self {
            Value::Bool(value) => value.ser(writer),
            Value::Int(value) => value.ser(writer),
            Value::Float(value) => value.ser(writer),
            Value::Text(value) => value.ser(writer),
            Value::List(values) => values.ser(writer),
            Value::Compound(document) => document.ser(writer),
        }
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Self::de_depth(reader, 0)
    }
}

impl Value {
    fn de_depth(reader: &mut BitReader, depth: usize) -> Result<Self, SerdeErr> {
        match UnsignedInteger::<3>::de(reader)?.get() {
            0 => Ok(Value::Bool(bool::de(reader)?)),
            1 => Ok(Value::Int(i64::de(reader)?)),
            2 => Ok(Value::Float(f32::de(reader)?)),
            3 => Ok(Value::Text(String::de(reader)?)),
            4 => {
                let depth = enter_nested(depth)?;
                let length = u64::de(reader)?;
                // every value carries at least its 3-bit tag
                if length.saturating_mul(3) > reader.bits_remaining() as u64 {
                    return Err(SerdeErr);
                }
                let mut values = Vec::new();
                for _ in 0..length {
                    values.push(Value::de_depth(reader, depth)?);
                }
                Ok(Value::List(values))
            }
            5 => Ok(Value::Compound(Document::de_depth(
                reader,
                enter_nested(depth)?,
            )?)),
            _ => Err(SerdeErr),
        }
    }
}

/// Deepest list or compound nesting a decoded document may contain
pub const MAX_DOCUMENT_DEPTH: usize = 512;

fn enter_nested(depth: usize) -> Result<usize, SerdeErr> {
    if depth >= MAX_DOCUMENT_DEPTH {
        Err(SerdeErr)
    } else {
        Ok(depth + 1)
    }
}

/// A string-keyed tree of values. Stands in for the host's save format: the
/// host owns one per player and hands it to the ledger to read and write.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    entries: BTreeMap<String, Value>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> btree_map::Keys<'_, String, Value> {
        self.entries.keys()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: Value) -> &mut Self {
        self.entries.insert(key.into(), value);
        self
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    fn require(&self, key: &str) -> Result<&Value, PersistError> {
        self.entries
            .get(key)
            .ok_or_else(|| PersistError::MissingKey {
                key: key.to_string(),
            })
    }

    fn wrong_type(key: &str, expected: &'static str, found: &Value) -> PersistError {
        PersistError::WrongType {
            key: key.to_string(),
            expected,
            found: found.type_name(),
        }
    }

    pub fn get_bool(&self, key: &str) -> Result<bool, PersistError> {
        match self.require(key)? {
            Value::Bool(value) => Ok(*value),
            other => Err(Self::wrong_type(key, "bool", other)),
        }
    }

    pub fn get_int(&self, key: &str) -> Result<i64, PersistError> {
        match self.require(key)? {
            Value::Int(value) => Ok(*value),
            other => Err(Self::wrong_type(key, "int", other)),
        }
    }

    pub fn get_float(&self, key: &str) -> Result<f32, PersistError> {
        match self.require(key)? {
            Value::Float(value) => Ok(*value),
            other => Err(Self::wrong_type(key, "float", other)),
        }
    }

    pub fn get_text(&self, key: &str) -> Result<&str, PersistError> {
        match self.require(key)? {
            Value::Text(value) => Ok(value),
            other => Err(Self::wrong_type(key, "text", other)),
        }
    }

    pub fn get_list(&self, key: &str) -> Result<&[Value], PersistError> {
        match self.require(key)? {
            Value::List(values) => Ok(values),
            other => Err(Self::wrong_type(key, "list", other)),
        }
    }

    pub fn get_compound(&self, key: &str) -> Result<&Document, PersistError> {
        match self.require(key)? {
            Value::Compound(document) => Ok(document),
            other => Err(Self::wrong_type(key, "compound", other)),
        }
    }

    /// Reads an integer key, treating a missing key as `default`
    pub fn get_int_or(&self, key: &str, default: i64) -> Result<i64, PersistError> {
        if self.contains_key(key) {
            self.get_int(key)
        } else {
            Ok(default)
        }
    }

    pub fn to_bytes(&self) -> Box<[u8]> {
        let mut writer = BitWriter::new();
        self.ser(&mut writer);
        writer.to_bytes()
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PersistError> {
        let mut reader = BitReader::new(bytes);
        Ok(Self::de(&mut reader)?)
    }
}

impl Serde for Document {
    fn ser(&self, writer: &mut dyn BitWrite) {
        (self.entries.len() as u64).ser(writer);
        for (key, value) in &self.entries {
            key.ser(writer);
            value.ser(writer);
        }
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Self::de_depth(reader, 0)
    }
}

impl Document {
    fn de_depth(reader: &mut BitReader, depth: usize) -> Result<Self, SerdeErr> {
        let length = u64::de(reader)?;
        let mut entries = BTreeMap::new();
        for _ in 0..length {
            let key = String::de(reader)?;
            let value = Value::de_depth(reader, depth)?;
            entries.insert(key, value);
        }
        Ok(Self { entries })
    }
}
