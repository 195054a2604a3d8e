//! The built-in seed board.
//!
//! Used on first launch and whenever a stored snapshot cannot be read.
//!
//! # Examples
//!
//! ```
//! use tack_protocol::seed_board;
//!
//! let board = seed_board();
//! assert_eq!(board.len(), 3);
//! assert_eq!(board.task_count(), 3);
//! ```

use crate::board::{Board, Column};
use crate::task::Task;

/// Builds the seed board.
///
/// - `todo` ("To do"): "Write project", "Set up repository"
/// - `inProgress` ("In Progress"): "Design UI mockups"
/// - `done` ("Done"): empty
///
/// Seeded tasks use the small integer ids 1 to 3.
#[must_use]
pub fn seed_board() -> Board {
    Board::builder()
        .column(
            "todo",
            Column::with_items(
                "To do",
                vec![
                    Task::with_id(1u64, "Write project"),
                    Task::with_id(2u64, "Set up repository"),
                ],
            ),
        )
        .column(
            "inProgress",
            Column::with_items("In Progress", vec![Task::with_id(3u64, "Design UI mockups")]),
        )
        .column("done", Column::new("Done"))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TaskId;

    #[test]
    fn seed_layout() {
        let board = seed_board();
        let names: Vec<&str> = board.columns().map(|(_, c)| c.name.as_str()).collect();
        assert_eq!(names, ["To do", "In Progress", "Done"]);

        let todo = board.column("todo").expect("todo column");
        assert_eq!(todo.items[0].id, TaskId::from(1u64));
        assert_eq!(todo.items[1].content, "Set up repository");
        assert!(board.column("done").expect("done column").is_empty());
        board.validate().expect("seed is consistent");
    }

    #[test]
    fn seed_wire_format() {
        let json = serde_json::to_string_pretty(&seed_board()).expect("serialize");
        insta::assert_snapshot!(json, @r#"
        {
          "todo": {
            "name": "To do",
            "items": [
              {
                "id": 1,
                "content": "Write project"
              },
              {
                "id": 2,
                "content": "Set up repository"
              }
            ]
          },
          "inProgress": {
            "name": "In Progress",
            "items": [
              {
                "id": 3,
                "content": "Design UI mockups"
              }
            ]
          },
          "done": {
            "name": "Done",
            "items": []
          }
        }
        "#);
    }
}
