use crate::errors::{StoreError, StoreResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    Blob,
    Tree,
}

impl ObjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectType::Blob => "blob",
            ObjectType::Tree => "tree",
        }
    }
}

impl TryFrom<&[u8]> for ObjectType {
    type Error = StoreError;

    fn try_from(value: &[u8]) -> StoreResult<Self> {
        match value {
            b"blob" => Ok(ObjectType::Blob),
            b"tree" => Ok(ObjectType::Tree),
            _ => Err(StoreError::MalformedHeader(format!(
                "unknown object type {:?}",
                String::from_utf8_lossy(value)
            ))),
        }
    }
}

impl TryFrom<&str> for ObjectType {
    type Error = StoreError;

    fn try_from(value: &str) -> StoreResult<Self> {
        ObjectType::try_from(value.as_bytes())
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
