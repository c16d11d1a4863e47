use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Color of the category with id `id`, if both exist.
pub fn color_of<'a>(categories: &'a [Category], id: Option<&str>) -> Option<&'a str> {
    let id = id?;
    categories
        .iter()
        .find(|c| c.id == id)
        .and_then(|c| c.color.as_deref())
}
