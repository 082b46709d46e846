//! Integration tests for rendering, scraping and binding inline-edit rows.

use ohara::Result;
use ohara::binding::{FieldTarget, bind_dictionary, parse_enum, parse_flag, parse_optional, parse_value};
use ohara::html::{HtmlElementType, HtmlTableLine, entity_from_html, inline_edit_controls};
use std::collections::HashMap;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Priority {
    #[default]
    Low,
    VeryHigh,
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Self::Low),
            "VeryHigh" => Ok(Self::VeryHigh),
            other => Err(format!("unknown priority {other}")),
        }
    }
}

#[derive(Debug, Default)]
struct Task {
    id: Uuid,
    title: String,
    estimate: Option<u32>,
    priority: Priority,
    done: bool,
}

impl FieldTarget for Task {
    fn has_field(&self, name: &str) -> bool {
        matches!(name, "Id" | "Title" | "Estimate" | "Priority" | "Done")
    }

    fn set_field(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "Id" => self.id = parse_value(name, value)?,
            "Title" => self.title = value.to_string(),
            "Estimate" => self.estimate = parse_optional(name, value)?,
            "Priority" => self.priority = parse_enum(name, value)?,
            "Done" => self.done = parse_flag(name, value)?,
            _ => {}
        }
        Ok(())
    }
}

fn cell(html: &str) -> String {
    format!("<td class=\"edit-row\">{html}</td>\n")
}

#[test]
fn rendered_row_binds_back_onto_model() {
    let id = Uuid::new_v4();
    let data = [
        cell(&inline_edit_controls(id, &"Write docs".into(), "", HtmlElementType::Text)),
        "<td>not editable</td>\n".to_string(),
        cell(&inline_edit_controls(id, &"".into(), "", HtmlElementType::Number)),
        cell(&inline_edit_controls(id, &"Very High".into(), "priorities", HtmlElementType::DropDown)),
        cell(&inline_edit_controls(id, &true.into(), "", HtmlElementType::CheckboxAlwaysOn)),
    ]
    .concat();
    let headers = "<th>Task Title</th>\n<th>Owner</th>\n<th>Estimate</th>\n<th>Priority</th>\n<th>Done</th>";
    let line = HtmlTableLine::new(id, data, headers);

    let renames: HashMap<String, String> = [("Task Title".to_string(), "Title".to_string())].into();
    let mut task = Task {
        estimate: Some(8),
        ..Task::default()
    };
    entity_from_html(&line, Some(&renames), None, &mut task).unwrap();

    assert_eq!(task.title, "Write docs");
    assert_eq!(task.estimate, None);
    assert_eq!(task.priority, Priority::VeryHigh);
    assert!(task.done);
}

#[test]
fn manual_fields_are_left_to_the_caller() {
    let id = Uuid::new_v4();
    let data = cell(&inline_edit_controls(id, &"High".into(), "p", HtmlElementType::DropDown));
    let line = HtmlTableLine::new(id, data, "<th>Priority</th>");

    let mut manual: HashMap<String, String> = [("Priority".to_string(), String::new())].into();
    let mut task = Task::default();
    entity_from_html(&line, None, Some(&mut manual), &mut task).unwrap();

    // "High" is not a Priority; routing it to `manual` avoids the parse
    assert_eq!(manual["Priority"], "High");
    assert_eq!(task.priority, Priority::Low);
}

#[test]
fn form_dictionary_binds_with_conversion_errors_reported() {
    let id = Uuid::new_v4();
    let form: HashMap<String, String> = [
        ("Id".to_string(), id.to_string()),
        ("Title".to_string(), "Ship".to_string()),
        ("Estimate".to_string(), String::new()),
    ]
    .into();

    let mut task = Task {
        estimate: Some(3),
        ..Task::default()
    };
    bind_dictionary(&form, &mut task).unwrap();
    assert_eq!(task.id, id);
    assert_eq!(task.title, "Ship");
    assert_eq!(task.estimate, Some(3));

    let bad: HashMap<String, String> = [("Estimate".to_string(), "soon".to_string())].into();
    let err = bind_dictionary(&bad, &mut task).unwrap_err();
    assert!(err.to_string().contains("Estimate"));
}
