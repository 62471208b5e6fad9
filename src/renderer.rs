use tracing::debug;

use crate::display::{show_error, DisplayTarget, Row};
use crate::error::ErrorKind;
use crate::model::{FetchResult, Payload, Shape, Todo};

pub const LOADING_TEXT: &str = "Loading...";

/// What a render call did to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rendered {
    Rows(usize),
    Detail,
    Failed(ErrorKind),
}

impl Rendered {
    pub fn is_failure(&self) -> bool {
        matches!(self, Rendered::Failed(_))
    }
}

/// Applies one fetch outcome to `target`.
///
/// `shape` names the pane the request was for, so a failure lands in the
/// right error slot. A failure clears that pane's data; a success clears its
/// error.
pub fn render(target: &mut DisplayTarget, shape: Shape, result: FetchResult) -> Rendered {
    let rendered = match result {
        Ok(Payload::Collection(todos)) => Rendered::Rows(render_list(target, &todos)),
        Ok(Payload::Item(todo)) => {
            render_item(target, &todo);
            Rendered::Detail
        }
        Err(err) => {
            match shape {
                Shape::Collection => {
                    target.list.clear_data();
                    show_error(&mut target.list.error, &err);
                }
                Shape::Item => {
                    target.detail.clear_data();
                    show_error(&mut target.detail.error, &err);
                }
            }
            Rendered::Failed(err.kind())
        }
    };
    debug!(?shape, ?rendered, "rendered");
    rendered
}

/// Appends one row per record, in order. Calling this twice duplicates rows.
pub fn render_list(target: &mut DisplayTarget, todos: &[Todo]) -> usize {
    target.list.error.clear();
    target.list.rows.extend(todos.iter().map(|todo| Row {
        id: todo.id,
        label: todo.title.clone(),
    }));
    todos.len()
}

pub fn render_item(target: &mut DisplayTarget, todo: &Todo) {
    let detail = &mut target.detail;
    detail.loader.clear();
    detail.error.clear();
    detail.title.set(todo.title.as_str());
    detail.message.set(format!("isCompleted {}", todo.completed));
    detail.user_id.set(todo.user_id.to_string());
}

/// Puts the detail pane into its loading state ahead of an item fetch.
pub fn begin_item_load(target: &mut DisplayTarget) {
    let detail = &mut target.detail;
    detail.clear_data();
    detail.error.clear();
    detail.loader.set(LOADING_TEXT);
}
