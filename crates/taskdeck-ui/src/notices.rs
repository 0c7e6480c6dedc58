use std::rc::Rc;

use yew::Reducible;

#[derive(
  Clone, Copy, PartialEq, Eq,
)]
pub enum NoticeKind {
  Success,
  Error,
  Info
}

impl NoticeKind {
  pub fn as_class(
    self
  ) -> &'static str {
    match self {
      | Self::Success => {
        "notice success"
      }
      | Self::Error => "notice error",
      | Self::Info => "notice info"
    }
  }
}

#[derive(Clone, PartialEq)]
pub struct Notice {
  pub id:      u64,
  pub kind:    NoticeKind,
  pub message: String
}

#[derive(Default, PartialEq)]
pub struct Noticeboard {
  next_id:     u64,
  pub notices: Vec<Notice>
}

pub enum NoticeAction {
  Push(NoticeKind, String),
  // Every push schedules exactly one fixed-delay expiry, so the queue is
  // FIFO and popping the front retires the entry that timer belongs to.
  ExpireOldest
}

impl Reducible for Noticeboard {
  type Action = NoticeAction;

  fn reduce(
    self: Rc<Self>,
    action: NoticeAction
  ) -> Rc<Self> {
    let mut notices =
      self.notices.clone();
    let mut next_id = self.next_id;

    match action {
      | NoticeAction::Push(
        kind,
        message
      ) => {
        notices.push(Notice {
          id: next_id,
          kind,
          message
        });
        next_id =
          next_id.wrapping_add(1);
      }
      | NoticeAction::ExpireOldest => {
        if !notices.is_empty() {
          notices.remove(0);
        }
      }
    }

    Rc::new(Self {
      next_id,
      notices
    })
  }
}

#[cfg(test)]
mod notices_tests {
  use super::*;

  fn push(
    board: Rc<Noticeboard>,
    message: &str
  ) -> Rc<Noticeboard> {
    board.reduce(NoticeAction::Push(
      NoticeKind::Info,
      message.to_string()
    ))
  }

  #[test]
  fn push_appends_with_increasing_ids()
  {
    let board =
      Rc::new(Noticeboard::default());
    let board = push(board, "first");
    let board = push(board, "second");

    assert_eq!(board.notices.len(), 2);
    assert_eq!(
      board.notices[0].message,
      "first"
    );
    assert!(
      board.notices[0].id
        < board.notices[1].id
    );
  }

  #[test]
  fn expiry_removes_the_front_entry() {
    let board =
      Rc::new(Noticeboard::default());
    let board = push(board, "first");
    let board = push(board, "second");
    let board = board.reduce(
      NoticeAction::ExpireOldest
    );

    assert_eq!(board.notices.len(), 1);
    assert_eq!(
      board.notices[0].message,
      "second"
    );
  }

  #[test]
  fn expiry_on_empty_board_is_a_noop()
  {
    let board =
      Rc::new(Noticeboard::default());
    let board = board.reduce(
      NoticeAction::ExpireOldest
    );
    assert!(board.notices.is_empty());
  }

  #[test]
  fn ids_stay_unique_after_expiry() {
    let board =
      Rc::new(Noticeboard::default());
    let board = push(board, "first");
    let board = board.reduce(
      NoticeAction::ExpireOldest
    );
    let board = push(board, "second");

    assert_eq!(
      board.notices[0].id,
      1
    );
  }
}
