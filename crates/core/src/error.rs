#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Unknown validator `{kind}` on field `{field}`")]
    UnknownValidator { field: String, kind: String },

    #[error("Missing project identifier")]
    MissingProjectId,
}
