use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Floor {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub measurements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Image {
    #[serde(default)]
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

/// A project as shown for one locale: base row with the locale overlay
/// applied to the translatable fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    pub id: String,
    pub title: String,
    pub short_description: Option<String>,
    pub location: Option<String>,
    pub function: Option<String>,
    pub area: Option<String>,
    pub year: Option<String>,
    pub description: Vec<String>,
    pub floors: Vec<Floor>,
    pub images: Vec<Image>,
    pub thumbnail: Option<String>,
}

/// A project about to be inserted. `id` is already slugified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub id: String,
    pub title: String,
    pub short_description: Option<String>,
    pub location: Option<String>,
    pub function: Option<String>,
    pub area: Option<String>,
    pub year: Option<String>,
    pub description: Vec<String>,
    pub floors: Vec<Floor>,
    pub images: Vec<Image>,
    pub thumbnail: Option<String>,
}

impl From<NewProject> for ProjectView {
    fn from(p: NewProject) -> Self {
        Self {
            id: p.id,
            title: p.title,
            short_description: p.short_description,
            location: p.location,
            function: p.function,
            area: p.area,
            year: p.year,
            description: p.description,
            floors: p.floors,
            images: p.images,
            thumbnail: p.thumbnail,
        }
    }
}

/// Lowercase, alphanumeric runs joined by single dashes.
/// Non-Latin letters are kept as they are.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;

    for c in input.trim().chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PUT semantics)
// ──────────────────────────────────────────────────────────
// - Unset: key absent => keep column value
// - Null: explicit null => set column NULL (nullable columns only)
// - Value(v): replace with v
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchField<T> {
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectUpdateError {
    #[error("Field '{field}' {reason}")]
    InvalidField { field: &'static str, reason: String },
}

/// Allow-listed partial update. One field per updatable column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectUpdate {
    pub title: PatchField<String>,
    pub short_description: PatchField<String>,
    pub location: PatchField<String>,
    pub function: PatchField<String>,
    pub area: PatchField<String>,
    pub year: PatchField<String>,
    pub description: PatchField<Vec<String>>,
    pub floors: PatchField<Vec<Floor>>,
    pub images: PatchField<Vec<Image>>,
    pub thumbnail: PatchField<String>,
}

impl ProjectUpdate {
    /// Keys outside the updatable columns are dropped.
    pub fn from_json_map(body: &Map<String, Value>) -> Result<Self, ProjectUpdateError> {
        let mut update = ProjectUpdate::default();

        for (key, value) in body {
            match key.as_str() {
                "title" => update.title = required_field("title", value)?,
                "short_description" => {
                    update.short_description = nullable_field("short_description", value)?
                }
                "location" => update.location = nullable_field("location", value)?,
                "function" => update.function = nullable_field("function", value)?,
                "area" => update.area = nullable_field("area", value)?,
                "year" => update.year = nullable_field("year", value)?,
                "thumbnail" => update.thumbnail = nullable_field("thumbnail", value)?,
                "description" => update.description = required_field("description", value)?,
                "floors" => update.floors = required_field("floors", value)?,
                "images" => update.images = required_field("images", value)?,
                _ => {}
            }
        }

        Ok(update)
    }

    pub fn is_empty(&self) -> bool {
        !self.has_translatable()
            && self.location.is_unset()
            && self.function.is_unset()
            && self.area.is_unset()
            && self.year.is_unset()
            && self.images.is_unset()
            && self.thumbnail.is_unset()
    }

    /// Whether any of `title`, `short_description`, `description`, `floors`
    /// is present.
    pub fn has_translatable(&self) -> bool {
        !(self.title.is_unset()
            && self.short_description.is_unset()
            && self.description.is_unset()
            && self.floors.is_unset())
    }
}

fn required_field<T>(field: &'static str, value: &Value) -> Result<PatchField<T>, ProjectUpdateError>
where
    T: serde::de::DeserializeOwned,
{
    if value.is_null() {
        return Err(ProjectUpdateError::InvalidField {
            field,
            reason: "cannot be null".to_string(),
        });
    }
    parse_value(field, value)
}

fn nullable_field<T>(field: &'static str, value: &Value) -> Result<PatchField<T>, ProjectUpdateError>
where
    T: serde::de::DeserializeOwned,
{
    if value.is_null() {
        return Ok(PatchField::Null);
    }
    parse_value(field, value)
}

fn parse_value<T>(field: &'static str, value: &Value) -> Result<PatchField<T>, ProjectUpdateError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_value(value.clone())
        .map(PatchField::Value)
        .map_err(|e| ProjectUpdateError::InvalidField {
            field,
            reason: format!("has the wrong type: {}", e),
        })
}
