use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct CreateColumnRequest {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RenameColumnRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct MoveColumnRequest {
    pub target_column_id: String,
}

#[derive(Debug, Deserialize)]
pub struct SelectColumnRequest {
    pub selected: bool,
}
