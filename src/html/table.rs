//! Table row payload posted back from an inline-edit grid.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One edited table row: the row's cells and the table's header cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HtmlTableLine {
    /// Identifier of the entity the row shows.
    pub id: Uuid,

    /// Row markup: a sequence of `<td>` cells.
    pub data: String,

    /// Header markup: a sequence of `<th>` cells.
    pub headers: String,
}

impl HtmlTableLine {
    /// Create a line for `id`.
    #[must_use]
    pub fn new(id: Uuid, data: impl Into<String>, headers: impl Into<String>) -> Self {
        Self {
            id,
            data: data.into(),
            headers: headers.into(),
        }
    }
}
