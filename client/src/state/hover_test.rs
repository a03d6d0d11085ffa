use super::*;

// =============================================================
// RowHover
// =============================================================

#[test]
fn row_hover_default_is_none() {
    let hover = RowHover::default();
    assert_eq!(hover.index(), None);
    assert!(!hover.is_hovered(0));
}

#[test]
fn enter_marks_only_that_row() {
    let mut hover = RowHover::default();
    hover.enter(2);
    assert!(hover.is_hovered(2));
    assert!(!hover.is_hovered(1));
    assert!(!hover.is_hovered(3));
}

#[test]
fn entering_another_row_moves_hover() {
    let mut hover = RowHover::default();
    hover.enter(0);
    hover.enter(3);
    assert_eq!(hover.index(), Some(3));
    assert!(!hover.is_hovered(0));
}

#[test]
fn leave_clears_hover() {
    let mut hover = RowHover::default();
    hover.enter(1);
    hover.leave();
    assert_eq!(hover, RowHover::default());
}
